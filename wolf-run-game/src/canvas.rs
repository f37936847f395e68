use glam::Vec2;

use crate::bounding_box::BoundingBox;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::gray(1.0);
    pub const BLACK: Color = Color::gray(0.0);
    pub const GRAY: Color = Color::gray(200.0 / 255.0);

    pub const fn gray(level: f32) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
            a: 1.0,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Images the game can ask a canvas to draw. The renderer owns the pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Actor(usize),
    Obstacle,
}

/// Horizontal placement of a line of text relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// A fixed-size 2D drawing target in screen pixels, origin top-left.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn blit(&mut self, sprite: Sprite, rect: BoundingBox);
    fn fill_rect(&mut self, rect: BoundingBox, color: Color);

    /// `position` is the top of the line. Its x is the left edge or the
    /// center depending on `align`. Text lands above every shape of the frame.
    fn draw_text(&mut self, text: &str, position: Vec2, align: TextAlign, size: f32, color: Color);
}
