//! Scene building: game state to draw list

use glam::Vec2;

use super::shapes::{DrawCmd, centered_text, colors, gradient_rect, outlined_rect, stroked_circle};
use crate::sim::{GamePhase, GameState};

/// Prompt lines shown while the ball waits on the paddle
pub const CONTROLS_TEXT: &str = "← → to move";
pub const LAUNCH_TEXT: &str = "Press Space to launch";

/// Build the full frame for the current state.
///
/// Draw order: background, bricks, paddle, ball, prompt. Terminal-state
/// messages are left to the DOM message panel (see [`crate::ui`]).
pub fn build_scene(state: &GameState) -> Vec<DrawCmd> {
    let tuning = &state.tuning;
    let mut cmds = Vec::with_capacity(state.bricks.len() * 2 + 6);

    cmds.push(DrawCmd::Clear {
        color: colors::BACKGROUND,
    });

    for brick in state.bricks.iter().filter(|b| b.visible) {
        cmds.extend(outlined_rect(brick.bounds(), brick.color, colors::BRICK_BORDER));
    }

    cmds.push(gradient_rect(
        state.paddle.bounds(),
        colors::PADDLE_TOP,
        colors::PADDLE_BOTTOM,
    ));

    cmds.push(stroked_circle(
        state.ball.pos,
        state.ball.radius,
        colors::BALL,
        colors::BALL_STROKE,
    ));

    if state.phase == GamePhase::Waiting {
        let center = Vec2::new(tuning.arena_width / 2.0, tuning.arena_height / 2.0);
        cmds.push(centered_text(center, LAUNCH_TEXT, 24.0, colors::PROMPT));
        cmds.push(centered_text(
            center + Vec2::new(0.0, 32.0),
            CONTROLS_TEXT,
            18.0,
            colors::PROMPT,
        ));
    }

    cmds
}
