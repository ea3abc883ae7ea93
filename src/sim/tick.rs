//! Per-frame simulation tick
//!
//! Core game loop that advances the simulation by one step. One call per
//! rendered frame; every mutation settles before the call returns.

use super::collision::{Axis, bounce_axis, overlaps, paddle_deflection, reflect};
use super::state::{GameEvent, GamePhase, GameState};

/// Input intent for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move paddle left (held)
    pub move_left: bool,
    /// Move paddle right (held)
    pub move_right: bool,
    /// Launch the ball (one-shot)
    pub launch: bool,
    /// Start over (one-shot)
    pub reset: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.reset {
        state.reset();
        return;
    }

    if input.launch && state.phase == GamePhase::Waiting {
        state.launch();
    }

    state.time_ticks += 1;

    // Paddle follows input in every phase, terminal ones included
    let arena_width = state.tuning.arena_width;
    if input.move_left {
        let dx = -state.paddle.speed;
        state.paddle.move_by(dx, arena_width);
    }
    if input.move_right {
        let dx = state.paddle.speed;
        state.paddle.move_by(dx, arena_width);
    }

    if state.ball.on_paddle {
        state.ball.follow(&state.paddle);
        return;
    }

    match state.phase {
        GamePhase::Playing => {
            step_ball(state);
            if state.phase == GamePhase::Playing {
                brick_collision(state);
                paddle_collision(state);
                check_win(state);
            }
        }
        // Frozen until reset
        GamePhase::GameOver | GamePhase::Win => {}
        // A free ball while waiting only happens if a caller detached it by hand
        GamePhase::Waiting => {}
    }
}

/// Integrate position, bounce off walls, handle falling out the bottom
fn step_ball(state: &mut GameState) {
    let width = state.tuning.arena_width;
    let height = state.tuning.arena_height;
    let ball = &mut state.ball;

    ball.pos += ball.vel;
    let r = ball.radius;

    if ball.pos.x - r < 0.0 || ball.pos.x + r > width {
        ball.vel = reflect(ball.vel, Axis::Horizontal);
    }
    if ball.pos.y - r < 0.0 {
        ball.vel = reflect(ball.vel, Axis::Vertical);
    }

    if ball.pos.y - r > height {
        state.lives = state.lives.saturating_sub(1);
        let lives_left = state.lives;
        state.emit(GameEvent::LifeLost { lives_left });
        log::info!("Ball lost, {} lives left", lives_left);

        if lives_left > 0 {
            state.reattach_ball();
        } else {
            state.phase = GamePhase::GameOver;
            state.emit(GameEvent::GameOver);
            log::info!("Game over with score {}", state.score);
        }
    }
}

/// Destroy at most one brick: the first visible one (row-major) that overlaps
fn brick_collision(state: &mut GameState) {
    let ball_bounds = state.ball.bounds();
    let Some(index) = state
        .bricks
        .iter()
        .position(|brick| brick.visible && overlaps(ball_bounds, brick.bounds()))
    else {
        return;
    };

    let brick = &mut state.bricks[index];
    brick.visible = false;
    let axis = bounce_axis(state.ball.pos, brick.bounds());
    log::debug!(
        "Brick ({}, {}) destroyed, bounce {:?}",
        brick.row,
        brick.col,
        axis
    );

    state.score += 1;
    state.ball.vel = reflect(state.ball.vel, axis);
    state.emit(GameEvent::BrickDestroyed { index });
}

/// Bounce off the paddle while falling, angled by where the ball landed
fn paddle_collision(state: &mut GameState) {
    let ball = &mut state.ball;
    let paddle = &state.paddle;

    if ball.vel.y > 0.0 && overlaps(ball.bounds(), paddle.bounds()) {
        ball.vel.y = -ball.vel.y;
        ball.vel.x = paddle_deflection(ball.pos.x, paddle.pos.x, paddle.width, ball.speed);
        state.emit(GameEvent::PaddleBounce);
    }
}

fn check_win(state: &mut GameState) {
    if state.bricks.iter().all(|b| !b.visible) {
        state.phase = GamePhase::Win;
        state.emit(GameEvent::Win);
        log::info!("All bricks cleared! Score {}, {} lives left", state.score, state.lives);
    }
}
