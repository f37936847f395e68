use glam::{vec2, Vec2};

use crate::{
    bounding_box::BoundingBox,
    canvas::{Canvas, Sprite},
    GROUND_Y,
};

pub const OBSTACLE_SPEED: f32 = 7.0;
pub const OBSTACLE_SIZE: Vec2 = vec2(50.0, 50.0);

/// A rock resting on the ground, scrolling left at a constant speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub position: Vec2,
}

impl Obstacle {
    pub fn new(x: f32) -> Self {
        Self {
            position: vec2(x, GROUND_Y - OBSTACLE_SIZE.y),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_position_size(self.position, OBSTACLE_SIZE)
    }

    pub fn update(&mut self) {
        self.position.x -= OBSTACLE_SPEED;
    }

    /// The right edge has passed the left edge of the play area.
    pub fn is_off_screen(&self) -> bool {
        self.position.x + OBSTACLE_SIZE.x < 0.0
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.blit(Sprite::Obstacle, self.bounding_box());
    }
}
