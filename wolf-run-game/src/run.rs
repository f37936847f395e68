use glam::vec2;

use crate::{
    actor::Actor,
    canvas::{Canvas, Color, TextAlign},
    collision::collides,
    ground::Ground,
    spawner::Spawner,
};

pub const JUMP_SCORE: u32 = 10;

const SCORE_TEXT_SIZE: f32 = 26.0;

/// Everything that lives for exactly one play session.
pub struct Run {
    pub actor: Actor,
    pub ground: Ground,
    pub spawner: Spawner,
    pub score: u32,
}

impl Run {
    pub fn new() -> Self {
        Self {
            actor: Actor::new(),
            ground: Ground::new(),
            spawner: Spawner::new(),
            score: 0,
        }
    }

    pub fn jump(&mut self) -> bool {
        let accepted = self.actor.jump();
        if accepted {
            self.score += JUMP_SCORE;
        }
        accepted
    }

    /// Advances one frame. Returns whether the actor hit an obstacle.
    pub fn update(&mut self) -> bool {
        self.actor.update();
        self.spawner.update();

        collides(&self.actor.bounding_box(), self.spawner.obstacles())
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.clear(Color::WHITE);
        self.ground.draw(canvas);
        self.actor.draw(canvas);
        for obstacle in self.spawner.obstacles() {
            obstacle.draw(canvas);
        }

        let score = format!("Score: {}", self.score);
        canvas.draw_text(
            &score,
            vec2(10.0, 10.0),
            TextAlign::Left,
            SCORE_TEXT_SIZE,
            Color::BLACK,
        );
    }
}

impl Default for Run {
    fn default() -> Self {
        Self::new()
    }
}
