//! Data-driven game constants
//!
//! Every number the simulation uses lives here. Defaults reproduce the
//! classic layout (815x600 arena, 6x10 brick grid, three lives); a JSON
//! document may override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Color;
use crate::consts::*;

/// Errors raised while loading or validating a [`Tuning`]
#[derive(Error, Debug)]
pub enum TuningError {
    /// Config file could not be read
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for this schema
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena_width: f32,
    pub arena_height: f32,

    pub ball_radius: f32,
    pub ball_speed: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_bottom_offset: f32,

    pub brick_rows: u32,
    pub brick_cols: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,
    /// One colour per row, cycled when there are more rows than colours
    pub brick_colors: Vec<Color>,

    pub initial_lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,
            brick_colors: vec![
                Color::rgb(0xFF, 0x6B, 0x6B),
                Color::rgb(0x4E, 0xCD, 0xC4),
                Color::rgb(0x45, 0xB7, 0xD1),
                Color::rgb(0x96, 0xCE, 0xB4),
                Color::rgb(0xFF, 0xEA, 0xA7),
                Color::rgb(0xDD, 0xA0, 0xDD),
            ],
            initial_lives: INITIAL_LIVES,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON document (missing fields keep defaults)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check every value the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("ball_radius", self.ball_radius)?;
        positive("ball_speed", self.ball_speed)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("paddle_speed", self.paddle_speed)?;
        positive("brick_width", self.brick_width)?;
        positive("brick_height", self.brick_height)?;
        non_negative("paddle_bottom_offset", self.paddle_bottom_offset)?;
        non_negative("brick_padding", self.brick_padding)?;
        non_negative("brick_offset_top", self.brick_offset_top)?;
        non_negative("brick_offset_left", self.brick_offset_left)?;

        if self.paddle_width > self.arena_width {
            return Err(invalid(
                "paddle_width",
                format!("{} exceeds arena width {}", self.paddle_width, self.arena_width),
            ));
        }
        if self.paddle_bottom_offset > self.arena_height {
            return Err(invalid(
                "paddle_bottom_offset",
                format!("{} exceeds arena height {}", self.paddle_bottom_offset, self.arena_height),
            ));
        }
        if self.brick_rows == 0 {
            return Err(invalid("brick_rows", "must be at least 1".into()));
        }
        if self.brick_cols == 0 {
            return Err(invalid("brick_cols", "must be at least 1".into()));
        }
        let grid_right = self.brick_offset_left
            + self.brick_cols as f32 * (self.brick_width + self.brick_padding)
            - self.brick_padding;
        if grid_right > self.arena_width {
            return Err(invalid(
                "brick_cols",
                format!("grid right edge {grid_right} exceeds arena width {}", self.arena_width),
            ));
        }
        let grid_bottom =
            self.brick_offset_top + self.brick_rows as f32 * (self.brick_height + self.brick_padding);
        if grid_bottom > self.paddle_y() {
            return Err(invalid(
                "brick_rows",
                format!("grid bottom {grid_bottom} reaches below the paddle at {}", self.paddle_y()),
            ));
        }
        if self.brick_colors.is_empty() {
            return Err(invalid("brick_colors", "palette is empty".into()));
        }
        if self.initial_lives == 0 {
            return Err(invalid("initial_lives", "must be at least 1".into()));
        }
        Ok(())
    }

    /// Total bricks in the grid
    pub fn brick_count(&self) -> usize {
        self.brick_rows as usize * self.brick_cols as usize
    }

    /// Colour for a brick row
    pub fn row_color(&self, row: u32) -> Color {
        if self.brick_colors.is_empty() {
            return Color::WHITE;
        }
        self.brick_colors[row as usize % self.brick_colors.len()]
    }

    /// Paddle top edge y coordinate
    pub fn paddle_y(&self) -> f32 {
        self.arena_height - self.paddle_bottom_offset
    }
}

fn invalid(field: &'static str, reason: String) -> TuningError {
    TuningError::Invalid { field, reason }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} must be a positive number")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} must be zero or positive")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.brick_count(), 60);
        assert_eq!(tuning.paddle_y(), 580.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "initial_lives": 5, "ball_speed": 4.5 }"#).unwrap();
        assert_eq!(tuning.initial_lives, 5);
        assert_eq!(tuning.ball_speed, 4.5);
        assert_eq!(tuning.brick_cols, BRICK_COLS);
        assert_eq!(tuning.brick_colors.len(), 6);
    }

    #[test]
    fn test_colors_from_json() {
        let tuning = Tuning::from_json(r##"{ "brick_colors": ["#112233"], "brick_rows": 3 }"##)
            .unwrap();
        assert_eq!(tuning.row_color(0), Color::rgb(0x11, 0x22, 0x33));
        assert_eq!(tuning.row_color(2), Color::rgb(0x11, 0x22, 0x33));
    }

    #[test]
    fn test_row_color_cycles() {
        let tuning = Tuning::default();
        assert_eq!(tuning.row_color(6), tuning.row_color(0));
        assert_eq!(tuning.row_color(7), tuning.row_color(1));
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "initial_lives": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "initial_lives", .. }));

        let err = Tuning::from_json(r#"{ "paddle_width": 900.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "paddle_width", .. }));

        let err = Tuning::from_json(r#"{ "ball_speed": -1.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "ball_speed", .. }));

        let err = Tuning::from_json(r#"{ "brick_colors": [] }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "brick_colors", .. }));
    }

    #[test]
    fn test_rejects_grid_wider_than_arena() {
        let err = Tuning::from_json(r#"{ "brick_cols": 40 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "brick_cols", .. }));

        // Counts large enough to overflow an allocation are caught by the same check
        let err = Tuning::from_json(r#"{ "brick_rows": 4294967295, "brick_cols": 4294967295 }"#)
            .unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "brick_cols", .. }));

        // Exactly flush with the right wall is fine
        let tuning = Tuning::from_json(r#"{ "arena_width": 805.0 }"#).unwrap();
        assert_eq!(tuning.brick_count(), 60);
    }

    #[test]
    fn test_rejects_grid_reaching_paddle() {
        let err = Tuning::from_json(r#"{ "brick_rows": 20 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "brick_rows", .. }));

        let err = Tuning::from_json(r#"{ "brick_offset_top": 560.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "brick_rows", .. }));

        // 80 + 16 * 30 = 560, still above the paddle at 580
        assert!(Tuning::from_json(r#"{ "brick_rows": 16 }"#).is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "brick_colors": ["teal"] }"#),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Tuning::load("/definitely/not/here/tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }
}
