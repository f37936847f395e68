use crate::{bounding_box::BoundingBox, obstacle::Obstacle};

pub fn collides<'a>(actor: &BoundingBox, obstacles: impl IntoIterator<Item = &'a Obstacle>) -> bool {
    obstacles
        .into_iter()
        .any(|obstacle| actor.intersects(&obstacle.bounding_box()))
}
