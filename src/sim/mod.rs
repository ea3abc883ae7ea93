//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (bricks are scanned row-major)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Axis, bounce_axis, overlaps, paddle_deflection};
pub use state::{Ball, Brick, GameEvent, GamePhase, GameState, Paddle, build_bricks};
pub use tick::{TickInput, tick};
