use wolf_run_game::{
    actor::{Actor, ACTOR_SIZE},
    obstacle::{Obstacle, OBSTACLE_SIZE, OBSTACLE_SPEED},
    run::JUMP_SCORE,
    spawner::SPAWN_SPACING,
    Command, Game, Phase, SCREEN_WIDTH,
};

fn start() -> Game {
    let mut game = Game::new();
    game.handle(Command::Start);
    assert_eq!(game.phase(), Phase::Playing);
    game
}

fn first_obstacle(game: &Game) -> Obstacle {
    *game
        .run
        .spawner
        .obstacles()
        .next()
        .expect("a run always has an obstacle")
}

#[test]
fn idle_run_ends_when_first_rock_reaches_the_wolf() {
    let mut game = start();
    let actor_right = game.run.actor.bounding_box().max.x;

    let mut frames = 0;
    while game.phase() == Phase::Playing {
        game.update();
        frames += 1;
        assert!(frames < 1_000, "run never ended");
    }

    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.run.score, 0);

    let hit = first_obstacle(&game);
    assert!(hit.position.x <= actor_right);
    assert!(hit.position.x + OBSTACLE_SPEED > actor_right);
    assert_eq!(
        frames,
        ((SCREEN_WIDTH - actor_right) / OBSTACLE_SPEED).ceil() as usize
    );
}

/// Starts a run, jumps once the first rock is at or left of `trigger_x`, and
/// plays on until that rock has scrolled past the wolf and the wolf has
/// landed. Returns the game and the rock's x at the moment of the jump.
fn jump_when_rock_reaches(trigger_x: f32) -> (Game, f32) {
    let mut game = start();
    while first_obstacle(&game).position.x > trigger_x {
        game.update();
        assert_eq!(game.phase(), Phase::Playing);
    }

    let jump_x = first_obstacle(&game).position.x;
    game.handle(Command::Jump);
    assert_eq!(game.run.score, JUMP_SCORE);

    let frames_to_pass = (jump_x / OBSTACLE_SPEED) as usize + 1;
    for _ in 0..frames_to_pass.max(60) {
        game.update();
        if game.phase() != Phase::Playing {
            break;
        }
    }
    (game, jump_x)
}

// The wolf is more than a rock's height off the ground only on frames 5 to 34
// of a jump. The rock overlaps the wolf's span while its x is in 0..=150, so it
// must enter that span no earlier than frame 5 and leave it by frame 34. At 7
// px per frame that means the rock is between x = 178 and x = 245 at the jump.
const CLEARING_JUMP: std::ops::Range<f32> = 178.0..245.0;

#[test]
fn timed_jump_clears_the_first_rock() {
    let (game, jump_x) = jump_when_rock_reaches(220.0);
    let actor_right = game.run.actor.bounding_box().max.x;

    assert_eq!(jump_x - actor_right, 69.0);
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.run.score, JUMP_SCORE);
    assert!(!game.run.actor.airborne);
    assert!(first_obstacle(&game).position.x > jump_x);
}

#[test]
fn early_jump_lands_on_the_rock() {
    let (game, jump_x) = jump_when_rock_reaches(320.0);
    let actor_right = game.run.actor.bounding_box().max.x;

    assert!(jump_x - actor_right > ACTOR_SIZE.x + OBSTACLE_SIZE.x);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.run.score, JUMP_SCORE);
}

#[test]
fn only_jumps_inside_the_clearing_window_survive() {
    let actor_right = Actor::new().bounding_box().max.x;
    let mut trigger_x = SCREEN_WIDTH;
    while trigger_x > actor_right {
        let (game, jump_x) = jump_when_rock_reaches(trigger_x);
        let cleared = game.phase() == Phase::Playing;
        assert_eq!(
            cleared,
            CLEARING_JUMP.contains(&jump_x),
            "jump with the rock at x = {jump_x}"
        );
        trigger_x = jump_x - OBSTACLE_SPEED;
    }
}

#[test]
fn spawned_rocks_keep_fixed_spacing_during_play() {
    let mut game = start();
    let mut max_seen = 1;
    for _ in 0..90 {
        game.update();
        let xs: Vec<f32> = game.run.spawner.obstacles().map(|o| o.position.x).collect();
        max_seen = max_seen.max(xs.len());
        for pair in xs.windows(2) {
            assert_eq!(pair[1] - pair[0], SPAWN_SPACING);
        }
    }
    assert!(max_seen >= 2);
}

#[test]
fn restart_gives_a_fresh_run() {
    let mut game = start();
    game.handle(Command::Jump);
    while game.phase() == Phase::Playing {
        game.update();
    }
    assert_eq!(game.run.score, JUMP_SCORE);

    game.handle(Command::Restart);
    assert_eq!(game.phase(), Phase::StartScreen);
    game.handle(Command::Start);
    assert_eq!(game.phase(), Phase::Playing);

    assert_eq!(game.run.score, 0);
    assert_eq!(game.run.actor.position, Actor::new().position);
    assert!(!game.run.actor.airborne);
    let xs: Vec<f32> = game.run.spawner.obstacles().map(|o| o.position.x).collect();
    assert_eq!(xs, vec![SCREEN_WIDTH]);
}

#[test]
fn quitting_mid_run_terminates() {
    let mut game = start();
    for _ in 0..10 {
        game.update();
    }
    game.handle(Command::Quit);
    assert_eq!(game.phase(), Phase::Terminated);
}
