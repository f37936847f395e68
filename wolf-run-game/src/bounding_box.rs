use std::ops::Add;

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self {
            min: position,
            max: position + size,
        }
    }

    /// Touching edges count as an intersection.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        let intersects_x = self.min.x <= other.max.x && self.max.x >= other.min.x;
        let intersects_y = self.min.y <= other.max.y && self.max.y >= other.min.y;
        intersects_x && intersects_y
    }
}

impl Add<Vec2> for BoundingBox {
    type Output = Self;

    fn add(self, rhs: Vec2) -> Self::Output {
        Self {
            min: self.min + rhs,
            max: self.max + rhs,
        }
    }
}
