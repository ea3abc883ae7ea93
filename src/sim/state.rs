//! Game state and core simulation types
//!
//! The session object owns every entity. Adapters only ever see `&GameState`
//! between ticks.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::Color;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball attached to paddle, waiting for launch input
    Waiting,
    /// Active gameplay
    Playing,
    /// Out of lives
    GameOver,
    /// Every brick cleared
    Win,
}

impl GamePhase {
    /// Terminal phases only leave through an explicit reset
    pub fn is_terminal(self) -> bool {
        match self {
            GamePhase::GameOver | GamePhase::Win => true,
            GamePhase::Waiting | GamePhase::Playing => false,
        }
    }
}

/// Something adapters may want to react to (sound, UI, logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball left the paddle
    Launch,
    /// Brick at this index in `GameState::bricks` was destroyed
    BrickDestroyed { index: usize },
    /// Ball bounced off the paddle
    PaddleBounce,
    /// Ball fell out the bottom
    LifeLost { lives_left: u8 },
    /// Last life lost
    GameOver,
    /// Last brick destroyed
    Win,
    /// Session restarted
    Reset,
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Launch speed and paddle deflection magnitude
    pub speed: f32,
    /// Attached balls follow the paddle and ignore `vel`
    pub on_paddle: bool,
}

impl Ball {
    pub fn new(radius: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            speed,
            on_paddle: true,
        }
    }

    /// Stick to the paddle: zero velocity, resting on its top edge
    pub fn attach(&mut self, paddle: &Paddle) {
        self.on_paddle = true;
        self.vel = Vec2::ZERO;
        self.follow(paddle);
    }

    /// Mirror the paddle position (attached balls only)
    pub fn follow(&mut self, paddle: &Paddle) {
        if self.on_paddle {
            self.pos = Vec2::new(paddle.center_x(), paddle.pos.y - self.radius);
        }
    }

    /// Bounding square used for every collision test
    pub fn bounds(&self) -> Aabb {
        Aabb::around(self.pos, self.radius)
    }
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Top-left corner (y never changes)
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Displacement per tick while a direction is held
    pub speed: f32,
}

impl Paddle {
    /// Centered horizontally at the arena bottom
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                (tuning.arena_width - tuning.paddle_width) / 2.0,
                tuning.paddle_y(),
            ),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            speed: tuning.paddle_speed,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Shift horizontally, clamped to `[0, arena_width - width]`
    pub fn move_by(&mut self, dx: f32, arena_width: f32) {
        let max_x = (arena_width - self.width).max(0.0);
        self.pos.x = (self.pos.x + dx).clamp(0.0, max_x);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// A brick in the grid
#[derive(Debug, Clone)]
pub struct Brick {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: Color,
    pub row: u32,
    pub col: u32,
    /// Cleared once when hit, restored only by a reset
    pub visible: bool,
}

impl Brick {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// Build the canonical brick grid, row-major
pub fn build_bricks(tuning: &Tuning) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(tuning.brick_count());
    for row in 0..tuning.brick_rows {
        for col in 0..tuning.brick_cols {
            bricks.push(Brick {
                pos: Vec2::new(
                    tuning.brick_offset_left
                        + col as f32 * (tuning.brick_width + tuning.brick_padding),
                    tuning.brick_offset_top
                        + row as f32 * (tuning.brick_height + tuning.brick_padding),
                ),
                width: tuning.brick_width,
                height: tuning.brick_height,
                color: tuning.row_color(row),
                row,
                col,
                visible: true,
            });
        }
    }
    bricks
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Constants this session was built from
    pub tuning: Tuning,
    /// Seed the RNG was created from
    pub seed: u64,
    /// Launch-angle randomness
    rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Bricks destroyed this session
    pub score: u64,
    /// Remaining lives
    pub lives: u8,
    /// Simulation tick counter (since last reset)
    pub time_ticks: u64,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Row-major grid
    pub bricks: Vec<Brick>,
    /// Events emitted since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session: full grid, ball on the paddle, waiting for launch
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let paddle = Paddle::new(&tuning);
        let mut ball = Ball::new(tuning.ball_radius, tuning.ball_speed);
        ball.attach(&paddle);
        let bricks = build_bricks(&tuning);

        Self {
            lives: tuning.initial_lives,
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Waiting,
            score: 0,
            time_ticks: 0,
            ball,
            paddle,
            bricks,
            events: Vec::new(),
        }
    }

    /// Restore the opening position: score 0, full lives, full grid
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.tuning.initial_lives;
        self.phase = GamePhase::Waiting;
        self.time_ticks = 0;
        self.paddle = Paddle::new(&self.tuning);
        self.ball = Ball::new(self.tuning.ball_radius, self.tuning.ball_speed);
        self.ball.attach(&self.paddle);
        self.bricks = build_bricks(&self.tuning);
        self.emit(GameEvent::Reset);
        log::info!("Game reset ({} bricks, {} lives)", self.bricks.len(), self.lives);
    }

    /// Release the ball from the paddle.
    ///
    /// No-op (returns false) unless the ball is attached. The ball leaves
    /// straight up at full speed with a random horizontal component in
    /// `[-speed/2, speed/2)`.
    pub fn launch(&mut self) -> bool {
        if !self.ball.on_paddle {
            return false;
        }
        let spread: f32 = self.rng.random::<f32>() - 0.5;
        self.ball.on_paddle = false;
        self.ball.vel = Vec2::new(spread * self.ball.speed, -self.ball.speed);
        self.phase = GamePhase::Playing;
        self.emit(GameEvent::Launch);
        log::info!("Ball launched (dx = {:.2})", self.ball.vel.x);
        true
    }

    /// Put the ball back on the paddle after a lost life
    pub fn reattach_ball(&mut self) {
        self.ball.attach(&self.paddle);
        self.phase = GamePhase::Waiting;
    }

    /// Bricks still standing
    pub fn visible_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand all pending events to the caller
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let state = GameState::new(Tuning::default(), 1);
        assert_eq!(state.phase, GamePhase::Waiting);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.bricks.len(), 60);
        assert_eq!(state.visible_bricks(), 60);
        assert!(state.ball.on_paddle);
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.ball.pos.x, state.paddle.center_x());
        assert_eq!(state.ball.pos.y, state.paddle.pos.y - state.ball.radius);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_brick_grid_layout() {
        let bricks = build_bricks(&Tuning::default());
        assert_eq!(bricks[0].pos, Vec2::new(10.0, 80.0));
        assert_eq!(bricks[1].pos, Vec2::new(90.0, 80.0));
        // Row-major: index 10 starts row 1
        assert_eq!((bricks[10].row, bricks[10].col), (1, 0));
        assert_eq!(bricks[10].pos, Vec2::new(10.0, 110.0));
        assert_eq!(bricks[59].pos, Vec2::new(730.0, 230.0));
        assert_eq!(bricks[0].color, Color::rgb(0xFF, 0x6B, 0x6B));
        assert_eq!(bricks[59].color, Color::rgb(0xDD, 0xA0, 0xDD));
    }

    #[test]
    fn test_launch() {
        let mut state = GameState::new(Tuning::default(), 42);
        assert!(state.launch());
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.ball.on_paddle);
        assert_eq!(state.ball.vel.y, -6.0);
        assert!(state.ball.vel.x.abs() <= 3.0);
        assert_eq!(state.events, vec![GameEvent::Launch]);

        // Second launch is a no-op
        let vel = state.ball.vel;
        assert!(!state.launch());
        assert_eq!(state.ball.vel, vel);
        assert_eq!(state.events.len(), 1);
    }

    #[test]
    fn test_launch_spread_is_seeded() {
        let mut a = GameState::new(Tuning::default(), 7);
        let mut b = GameState::new(Tuning::default(), 7);
        a.launch();
        b.launch();
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut state = GameState::new(Tuning::default(), 3);
        state.launch();
        state.score = 17;
        state.lives = 1;
        state.phase = GamePhase::GameOver;
        state.paddle.pos.x = 0.0;
        state.ball.pos = Vec2::new(5.0, 5.0);
        for brick in state.bricks.iter_mut().take(20) {
            brick.visible = false;
        }
        state.drain_events().for_each(drop);

        state.reset();

        let fresh = GameState::new(Tuning::default(), 3);
        assert_eq!(state.phase, GamePhase::Waiting);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.visible_bricks(), 60);
        for (a, b) in state.bricks.iter().zip(&fresh.bricks) {
            assert_eq!(a.pos, b.pos);
        }
        assert!(state.ball.on_paddle);
        assert_eq!(state.ball.pos, fresh.ball.pos);
        assert_eq!(state.paddle.pos, fresh.paddle.pos);
        assert_eq!(state.drain_events().collect::<Vec<_>>(), vec![GameEvent::Reset]);
    }

    #[test]
    fn test_paddle_clamp() {
        let tuning = Tuning::default();
        let mut paddle = Paddle::new(&tuning);
        paddle.move_by(-10_000.0, tuning.arena_width);
        assert_eq!(paddle.pos.x, 0.0);
        paddle.move_by(10_000.0, tuning.arena_width);
        assert_eq!(paddle.pos.x, tuning.arena_width - paddle.width);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(GamePhase::GameOver.is_terminal());
        assert!(GamePhase::Win.is_terminal());
        assert!(!GamePhase::Waiting.is_terminal());
        assert!(!GamePhase::Playing.is_terminal());
    }
}
