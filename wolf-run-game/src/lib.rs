use canvas::{Canvas, Color, TextAlign};
use glam::vec2;
use run::Run;

pub mod actor;
pub mod bounding_box;
pub mod canvas;
pub mod collision;
pub mod ground;
pub mod obstacle;
pub mod run;
pub mod spawner;

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 400.0;
pub const GROUND_Y: f32 = SCREEN_HEIGHT - 100.0;

/// Fixed simulation rate. All physics constants are per frame at this rate.
pub const FRAMES_PER_SECOND: u32 = 60;

const TITLE_TEXT_SIZE: f32 = 52.0;
const PROMPT_TEXT_SIZE: f32 = 26.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    StartScreen,
    Playing,
    GameOver,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Jump,
    Restart,
    Quit,
}

pub struct Game {
    phase: Phase,
    pub run: Run,
}

impl Game {
    pub fn new() -> Self {
        Self {
            phase: Phase::StartScreen,
            run: Run::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn handle(&mut self, command: Command) {
        match (self.phase, command) {
            (Phase::Terminated, _) => {}
            (_, Command::Quit) => self.enter(Phase::Terminated),
            (Phase::StartScreen, Command::Start) => {
                self.run = Run::new();
                self.enter(Phase::Playing);
            }
            (Phase::Playing, Command::Jump) => {
                if self.run.jump() {
                    log::debug!("Jump accepted, score {}", self.run.score);
                }
            }
            (Phase::GameOver, Command::Restart) => self.enter(Phase::StartScreen),
            _ => {}
        }
    }

    /// Advances one fixed frame. Only a run in progress moves.
    pub fn update(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }

        if self.run.update() {
            log::info!("Run over with score {}", self.run.score);
            self.enter(Phase::GameOver);
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        let center_x = SCREEN_WIDTH / 2.0;
        let center_y = SCREEN_HEIGHT / 2.0;

        match self.phase {
            Phase::StartScreen => {
                canvas.clear(Color::WHITE);
                canvas.draw_text(
                    "Press SPACE to Start",
                    vec2(center_x, center_y),
                    TextAlign::Center,
                    TITLE_TEXT_SIZE,
                    Color::BLACK,
                );
            }
            Phase::Playing => self.run.draw(canvas),
            Phase::GameOver => {
                self.run.draw(canvas);
                let score = format!("Score: {}", self.run.score);
                let lines = [
                    ("Game Over", center_y - 100.0, TITLE_TEXT_SIZE),
                    (score.as_str(), center_y - 50.0, PROMPT_TEXT_SIZE),
                    ("Press R to Restart or Q to Quit", center_y, PROMPT_TEXT_SIZE),
                ];
                for (text, top, size) in lines {
                    canvas.draw_text(
                        text,
                        vec2(center_x, top),
                        TextAlign::Center,
                        size,
                        Color::BLACK,
                    );
                }
            }
            Phase::Terminated => {}
        }
    }

    fn enter(&mut self, phase: Phase) {
        log::info!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
