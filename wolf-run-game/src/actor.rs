use glam::{vec2, Vec2};

use crate::{
    bounding_box::BoundingBox,
    canvas::{Canvas, Sprite},
    GROUND_Y,
};

pub const GRAVITY: f32 = 0.6;
pub const JUMP_VELOCITY: f32 = -12.0;
pub const ANIMATION_SPEED: f32 = 0.1;
pub const ACTOR_FRAME_COUNT: usize = 4;
pub const ACTOR_SIZE: Vec2 = vec2(100.0, 50.0);

const START_X: f32 = 50.0;

/// The player: a running wolf that can jump.
#[derive(Debug, Clone)]
pub struct Actor {
    pub position: Vec2,
    pub velocity_y: f32,
    pub airborne: bool,
    pub frame: usize,
    animation_timer: f32,
}

impl Actor {
    pub fn new() -> Self {
        Self {
            position: vec2(START_X, Self::resting_y()),
            velocity_y: 0.0,
            airborne: false,
            frame: 0,
            animation_timer: 0.0,
        }
    }

    pub fn resting_y() -> f32 {
        GROUND_Y - ACTOR_SIZE.y
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_position_size(Vec2::ZERO, ACTOR_SIZE) + self.position
    }

    /// Returns whether the jump was accepted. There is no air jump.
    pub fn jump(&mut self) -> bool {
        if self.airborne {
            return false;
        }

        self.airborne = true;
        self.velocity_y = JUMP_VELOCITY;
        true
    }

    pub fn update(&mut self) {
        if self.airborne {
            self.velocity_y += GRAVITY;
            self.position.y += self.velocity_y;

            if self.position.y >= Self::resting_y() {
                self.position.y = Self::resting_y();
                self.airborne = false;
                self.velocity_y = 0.0;
            }
        }

        self.animate();
    }

    fn animate(&mut self) {
        self.animation_timer += ANIMATION_SPEED;
        if self.animation_timer >= 1.0 {
            self.animation_timer = 0.0;
            self.frame = (self.frame + 1) % ACTOR_FRAME_COUNT;
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.blit(Sprite::Actor(self.frame), self.bounding_box());
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}
