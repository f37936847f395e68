use glam::vec2;

use crate::{
    bounding_box::BoundingBox,
    canvas::{Canvas, Color},
    GROUND_Y, SCREEN_HEIGHT, SCREEN_WIDTH,
};

pub struct Ground {
    pub rect: BoundingBox,
}

impl Ground {
    pub fn new() -> Self {
        Self {
            rect: BoundingBox::new(vec2(0.0, GROUND_Y), vec2(SCREEN_WIDTH, SCREEN_HEIGHT)),
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.fill_rect(self.rect, Color::GRAY);
    }
}

impl Default for Ground {
    fn default() -> Self {
        Self::new()
    }
}
