use std::collections::VecDeque;

use crate::{
    obstacle::{Obstacle, OBSTACLE_SPEED},
    SCREEN_WIDTH,
};

pub const SPAWN_SPACING: f32 = 500.0;

pub struct Spawner {
    obstacles: VecDeque<Obstacle>,
    spawn_x: f32,
}

impl Spawner {
    pub fn new() -> Self {
        let spawn_x = SCREEN_WIDTH;
        Self {
            obstacles: VecDeque::from([Obstacle::new(spawn_x)]),
            spawn_x,
        }
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle> + '_ {
        self.obstacles.iter()
    }

    pub fn update(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.update();
        }

        self.obstacles.retain(|obstacle| !obstacle.is_off_screen());

        self.spawn();
    }

    /// New obstacles sit exactly one spacing behind the rearmost one, so the
    /// gap between neighbours never drifts. They appear on the frame that puts
    /// them within one step of travel past the spawn edge, so they scroll in
    /// from off-screen.
    fn spawn(&mut self) {
        let x = match self.obstacles.back() {
            Some(rearmost)
                if self.spawn_x + OBSTACLE_SPEED - rearmost.position.x > SPAWN_SPACING =>
            {
                rearmost.position.x + SPAWN_SPACING
            }
            Some(_) => return,
            None => self.spawn_x,
        };

        log::debug!("Spawning obstacle at x = {x}");
        self.obstacles.push_back(Obstacle::new(x));
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_obstacle_at_right_edge() {
        let spawner = Spawner::new();
        let xs: Vec<f32> = spawner.obstacles().map(|o| o.position.x).collect();
        assert_eq!(xs, vec![SCREEN_WIDTH]);
    }

    #[test]
    fn spawns_after_rearmost_travels_past_spacing() {
        let mut spawner = Spawner::new();
        let mut frames = 0;
        while spawner.obstacles().count() == 1 {
            spawner.update();
            frames += 1;
        }

        let expected = (SPAWN_SPACING / OBSTACLE_SPEED).floor() as usize;
        assert_eq!(frames, expected);

        let xs: Vec<f32> = spawner.obstacles().map(|o| o.position.x).collect();
        assert_eq!(xs[1] - xs[0], SPAWN_SPACING);
        assert!(xs[1] >= SCREEN_WIDTH);
        assert!(xs[1] < SCREEN_WIDTH + OBSTACLE_SPEED);
    }

    #[test]
    fn neighbours_stay_exactly_one_spacing_apart() {
        let mut spawner = Spawner::new();
        for _ in 0..2_000 {
            spawner.update();
            let xs: Vec<f32> = spawner.obstacles().map(|o| o.position.x).collect();
            for pair in xs.windows(2) {
                assert_eq!(pair[1] - pair[0], SPAWN_SPACING);
            }
        }
    }

    #[test]
    fn spawned_obstacles_start_past_the_right_edge() {
        let mut spawner = Spawner::new();
        let mut seen = 1;
        for _ in 0..2_000 {
            spawner.update();
            let count = spawner.obstacles().count();
            if let Some(newest) = spawner.obstacles().last() {
                if count > seen {
                    assert!(newest.position.x >= SCREEN_WIDTH);
                }
            }
            seen = count;
        }
    }

    #[test]
    fn never_empty_and_never_keeps_expired() {
        let mut spawner = Spawner::new();
        for _ in 0..2_000 {
            spawner.update();
            assert!(spawner.obstacles().count() > 0);
            assert!(spawner.obstacles().all(|o| !o.is_off_screen()));
        }
    }

    #[test]
    fn spawns_at_edge_when_queue_is_empty() {
        let mut spawner = Spawner::new();
        spawner.obstacles.clear();
        spawner.spawn();
        let xs: Vec<f32> = spawner.obstacles().map(|o| o.position.x).collect();
        assert_eq!(xs, vec![SCREEN_WIDTH]);
    }
}
