//! Game logic for Flappy Bird: physics, pipe lifecycle and collisions.

use super::types::{Collision, FlappyGame, GameInput, Pipe};
use crate::core::game_loop::TickResult;
use rand::Rng;

/// Process one player input.
///
/// Returns true when a jump impulse was applied. Jumps arriving after game
/// over or inside the cooldown window are dropped, not queued.
pub fn process_input(game: &mut FlappyGame, input: GameInput) -> bool {
    match input {
        GameInput::Jump => try_jump(game),
        GameInput::Other => false,
    }
}

fn try_jump(game: &mut FlappyGame) -> bool {
    if game.game_over {
        return false;
    }
    if game.time_since_last_jump < game.config.jump_cooldown {
        return false;
    }

    game.time_since_last_jump = 0.0;
    // Additive: a jump while already rising compounds.
    game.bird.velocity += game.config.jump_velocity;
    log::debug!(
        "jump accepted at y={:.1}, velocity now {:.1}",
        game.bird.y,
        game.bird.velocity
    );
    true
}

/// Advance the simulation by `dt` seconds.
///
/// Does nothing once the game is over. Negative `dt` is treated as zero.
pub fn process_tick<R: Rng>(game: &mut FlappyGame, dt: f64, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();
    if game.game_over {
        return result;
    }

    let dt = if dt < 0.0 {
        log::warn!("negative frame time {} clamped to zero", dt);
        0.0
    } else {
        dt
    };

    game.elapsed += dt;
    game.time_since_last_jump += dt;

    apply_gravity(game, dt);
    result.pipes_retired = move_pipes(game, dt);

    game.pipe_spawn_timer += dt;
    if let Some(pipe) = maybe_spawn_pipe(game, rng) {
        result.spawned = Some(pipe);
    }

    if let Some(collision) = check_collisions(game) {
        game.game_over = true;
        game.collision = Some(collision);
        result.collision = Some(collision);
        log::info!(
            "game over after {:.2}s: {}",
            game.elapsed,
            collision.describe()
        );
    }

    result
}

/// Explicit Euler step. Only upward speed is clamped.
pub fn apply_gravity(game: &mut FlappyGame, dt: f64) {
    let bird = &mut game.bird;
    bird.velocity += game.config.gravity * dt;
    if bird.velocity > game.config.terminal_velocity {
        bird.velocity = game.config.terminal_velocity;
    }
    bird.y += bird.velocity * dt;
}

/// Scroll pipes left and drop the ones fully past the retire line.
///
/// Returns how many pipes were removed.
pub fn move_pipes(game: &mut FlappyGame, dt: f64) -> usize {
    let dx = game.config.pipe_velocity * dt;
    for pipe in &mut game.pipes {
        pipe.x -= dx;
    }

    let width = game.config.pipe_width;
    let retire_x = game.config.pipe_retire_x;
    let before = game.pipes.len();
    game.pipes.retain(|p| p.x + width >= retire_x);
    let retired = before - game.pipes.len();
    if retired > 0 {
        log::debug!("retired {} pipe(s), {} active", retired, game.pipes.len());
    }
    retired
}

/// Spawn a pipe if the spawn timer exceeds a freshly drawn threshold.
///
/// The threshold is resampled on every call, so the effective interval is
/// not a single uniform draw.
pub fn maybe_spawn_pipe<R: Rng>(game: &mut FlappyGame, rng: &mut R) -> Option<Pipe> {
    let cfg = &game.config;
    let threshold = uniform(
        rng,
        cfg.min_spawn_interval,
        cfg.max_spawn_interval - cfg.min_spawn_interval,
    );
    if game.pipe_spawn_timer <= threshold {
        return None;
    }

    game.pipe_spawn_timer = 0.0;
    let pipe = spawn_pipe(game, rng);
    Some(pipe)
}

/// Append a new pipe at the spawn edge.
///
/// The gap reference performs a random walk around the newest pipe's value.
pub fn spawn_pipe<R: Rng>(game: &mut FlappyGame, rng: &mut R) -> Pipe {
    let cfg = &game.config;
    let previous = game.last_gap_reference();

    let upper_height = uniform(rng, cfg.min_pipe_height, cfg.pipe_height_range);
    let gap_reference = uniform(
        rng,
        previous - cfg.gap_reference_range,
        2.0 * cfg.gap_reference_range,
    );

    let pipe = Pipe {
        x: cfg.pipe_spawn_x,
        upper_height,
        gap_reference,
    };
    log::debug!(
        "spawned pipe at x={:.1} upper_height={:.1} gap_reference={:.1}",
        pipe.x,
        pipe.upper_height,
        pipe.gap_reference
    );
    game.pipes.push(pipe.clone());
    pipe
}

/// Sample uniformly from `[low, low + width)`. A zero width yields `low`.
fn uniform<R: Rng>(rng: &mut R, low: f64, width: f64) -> f64 {
    low + rng.gen::<f64>() * width
}

/// Check the world bounds, then each pipe in order.
pub fn check_collisions(game: &FlappyGame) -> Option<Collision> {
    let cfg = &game.config;
    let bird = &game.bird;

    if bird.y - bird.radius < 0.0 {
        return Some(Collision::Floor);
    }
    if bird.y + bird.radius > cfg.world_height {
        return Some(Collision::Ceiling);
    }

    // Only the bird's left edge is tested against the pipe's x-range.
    let probe_x = cfg.bird_x - bird.radius;
    for pipe in &game.pipes {
        let inside_x = probe_x > pipe.x && probe_x < pipe.x + cfg.pipe_width;
        if !inside_x {
            continue;
        }
        let (gap_bottom, gap_top) = pipe.gap_band(cfg.world_height, cfg.pipe_gap);
        if bird.y + bird.radius > gap_top || bird.y - bird.radius < gap_bottom {
            log::debug!("bird x={:.1} collided with pipe x={:.1}", cfg.bird_x, pipe.x);
            return Some(Collision::Pipe { pipe_x: pipe.x });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn running_game() -> FlappyGame {
        FlappyGame::new(GameConfig::default())
    }

    fn pipe_at(x: f64, upper_height: f64) -> Pipe {
        Pipe {
            x,
            upper_height,
            gap_reference: 0.0,
        }
    }

    #[test]
    fn test_gravity_single_frame() {
        let mut game = running_game();
        apply_gravity(&mut game, 0.1);
        assert!((game.bird.velocity + 100.0).abs() < 1e-9);
        assert!((game.bird.y - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_upward_velocity_clamped() {
        let mut game = running_game();
        game.bird.velocity = 900.0;
        apply_gravity(&mut game, 0.01);
        assert!((game.bird.velocity - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_fall_speed_not_clamped() {
        let mut game = running_game();
        game.bird.velocity = -5000.0;
        apply_gravity(&mut game, 0.01);
        assert!((game.bird.velocity + 5010.0).abs() < 1e-9);
    }

    #[test]
    fn test_jump_blocked_until_cooldown() {
        let mut game = running_game();
        // Cooldown starts un-elapsed
        assert!(!process_input(&mut game, GameInput::Jump));
        assert_eq!(game.bird.velocity, 0.0);

        game.time_since_last_jump = 0.1;
        assert!(process_input(&mut game, GameInput::Jump));
        assert!((game.bird.velocity - 500.0).abs() < 1e-9);
        assert_eq!(game.time_since_last_jump, 0.0);
    }

    #[test]
    fn test_second_jump_in_window_is_noop() {
        let mut game = running_game();
        game.time_since_last_jump = 1.0;
        assert!(process_input(&mut game, GameInput::Jump));
        let after_first = game.bird.velocity;
        game.time_since_last_jump = 0.05;
        assert!(!process_input(&mut game, GameInput::Jump));
        assert_eq!(game.bird.velocity, after_first);
    }

    #[test]
    fn test_jump_is_additive() {
        let mut game = running_game();
        game.bird.velocity = 120.0;
        game.time_since_last_jump = 0.5;
        process_input(&mut game, GameInput::Jump);
        assert!((game.bird.velocity - 620.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_jump_after_game_over() {
        let mut game = running_game();
        game.game_over = true;
        game.time_since_last_jump = 10.0;
        assert!(!process_input(&mut game, GameInput::Jump));
        assert_eq!(game.bird.velocity, 0.0);
    }

    #[test]
    fn test_other_input_ignored() {
        let mut game = running_game();
        game.time_since_last_jump = 10.0;
        assert!(!process_input(&mut game, GameInput::Other));
        assert_eq!(game.bird.velocity, 0.0);
    }

    #[test]
    fn test_pipes_scroll_left() {
        let mut game = running_game();
        game.pipes.push(pipe_at(500.0, 100.0));
        move_pipes(&mut game, 0.5);
        assert!((game.pipes[0].x - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_pipe_retired_past_threshold() {
        let mut game = running_game();
        // Right edge lands exactly on -200: still present
        game.pipes.push(pipe_at(-230.0, 100.0));
        assert_eq!(move_pipes(&mut game, 0.1), 0);
        assert_eq!(game.pipes.len(), 1);
        assert!((game.pipes[0].x + 250.0).abs() < 1e-9);

        // Next step pushes it past
        assert_eq!(move_pipes(&mut game, 0.1), 1);
        assert!(game.pipes.is_empty());
    }

    #[test]
    fn test_retire_preserves_order() {
        let mut game = running_game();
        game.pipes.push(pipe_at(-260.0, 1.0));
        game.pipes.push(pipe_at(100.0, 2.0));
        game.pipes.push(pipe_at(300.0, 3.0));
        move_pipes(&mut game, 0.0);
        let heights: Vec<f64> = game.pipes.iter().map(|p| p.upper_height).collect();
        assert_eq!(heights, vec![2.0, 3.0]);
    }

    #[test]
    fn test_no_spawn_below_min_interval() {
        let mut game = running_game();
        let mut rng = StdRng::seed_from_u64(42);
        game.pipe_spawn_timer = 0.99;
        assert!(maybe_spawn_pipe(&mut game, &mut rng).is_none());
        assert!(game.pipes.is_empty());
    }

    #[test]
    fn test_spawn_above_max_interval() {
        let mut game = running_game();
        let mut rng = StdRng::seed_from_u64(42);
        game.pipe_spawn_timer = 4.01;
        let pipe = maybe_spawn_pipe(&mut game, &mut rng).expect("spawn");
        assert_eq!(game.pipe_spawn_timer, 0.0);
        assert_eq!(game.pipes.len(), 1);
        assert!((pipe.x - 800.0).abs() < f64::EPSILON);
        assert!(pipe.upper_height >= 50.0 && pipe.upper_height < 250.0);
        // First pipe drifts from the default reference of 50
        assert!(pipe.gap_reference >= -150.0 && pipe.gap_reference < 250.0);
    }

    #[test]
    fn test_spawn_random_walk_from_last_pipe() {
        let mut game = running_game();
        let mut rng = StdRng::seed_from_u64(7);
        game.pipes.push(Pipe {
            x: 300.0,
            upper_height: 100.0,
            gap_reference: 1000.0,
        });
        let pipe = spawn_pipe(&mut game, &mut rng);
        assert!(pipe.gap_reference >= 800.0 && pipe.gap_reference < 1200.0);
    }

    #[test]
    fn test_floor_boundary_is_strict() {
        let mut game = running_game();
        game.bird.y = game.bird.radius;
        assert!(check_collisions(&game).is_none());

        game.bird.y = game.bird.radius - 1e-6;
        assert_eq!(check_collisions(&game), Some(Collision::Floor));
    }

    #[test]
    fn test_ceiling_collision() {
        let mut game = running_game();
        game.bird.y = 600.0 - 15.0;
        assert!(check_collisions(&game).is_none());
        game.bird.y = 600.0 - 14.0;
        assert_eq!(check_collisions(&game), Some(Collision::Ceiling));
    }

    #[test]
    fn test_pipe_collision_outside_gap() {
        let mut game = running_game();
        // Gap band is [350, 450]; bird at 250 is below it
        game.pipes.push(pipe_at(20.0, 150.0));
        assert_eq!(
            check_collisions(&game),
            Some(Collision::Pipe { pipe_x: 20.0 })
        );
    }

    #[test]
    fn test_no_collision_inside_gap() {
        let mut game = running_game();
        game.bird.y = 400.0;
        game.pipes.push(pipe_at(20.0, 150.0));
        assert!(check_collisions(&game).is_none());
    }

    #[test]
    fn test_pipe_x_test_uses_open_interval() {
        let mut game = running_game();
        // Probe point is bird_x - radius = 35
        game.pipes.push(pipe_at(35.0, 150.0));
        assert!(check_collisions(&game).is_none());

        game.pipes[0].x = -15.0; // right edge exactly at 35
        assert!(check_collisions(&game).is_none());

        game.pipes[0].x = 34.0;
        assert!(check_collisions(&game).is_some());
    }

    #[test]
    fn test_first_offending_pipe_reported() {
        let mut game = running_game();
        game.pipes.push(pipe_at(10.0, 150.0));
        game.pipes.push(pipe_at(30.0, 150.0));
        assert_eq!(
            check_collisions(&game),
            Some(Collision::Pipe { pipe_x: 10.0 })
        );
    }

    #[test]
    fn test_tick_sets_game_over_on_floor() {
        let mut game = running_game();
        game.bird.y = 16.0;
        game.bird.velocity = -100.0;
        let mut rng = StdRng::seed_from_u64(1);
        let result = process_tick(&mut game, 0.1, &mut rng);
        assert_eq!(result.collision, Some(Collision::Floor));
        assert!(game.game_over);
        assert_eq!(game.collision, Some(Collision::Floor));
    }

    #[test]
    fn test_tick_after_game_over_is_frozen() {
        let mut game = running_game();
        game.pipes.push(pipe_at(400.0, 100.0));
        game.game_over = true;
        let before = game.snapshot();
        let mut rng = StdRng::seed_from_u64(1);
        let result = process_tick(&mut game, 10.0, &mut rng);
        assert_eq!(game.snapshot(), before);
        assert!(result.collision.is_none());
        assert!(result.spawned.is_none());
    }

    #[test]
    fn test_negative_dt_treated_as_zero() {
        let mut game = running_game();
        let mut rng = StdRng::seed_from_u64(1);
        process_tick(&mut game, -1.0, &mut rng);
        assert_eq!(game.bird.y, 250.0);
        assert_eq!(game.bird.velocity, 0.0);
        assert_eq!(game.elapsed, 0.0);
    }

    #[test]
    fn test_tick_accumulates_jump_timer() {
        let mut game = running_game();
        let mut rng = StdRng::seed_from_u64(1);
        process_tick(&mut game, 0.06, &mut rng);
        assert!(!process_input(&mut game, GameInput::Jump));
        process_tick(&mut game, 0.06, &mut rng);
        assert!(process_input(&mut game, GameInput::Jump));
    }
}
