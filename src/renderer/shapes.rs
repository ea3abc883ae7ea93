//! 2D draw primitives
//!
//! Backend-neutral: the scene builder emits these, a backend (Canvas 2D on
//! the web) executes them in order.

use glam::Vec2;

use crate::Color;
use crate::sim::Aabb;

/// Colors for game elements
pub mod colors {
    use crate::Color;

    pub const BACKGROUND: Color = Color::rgb(0x1A, 0x1A, 0x2E);
    pub const BRICK_BORDER: Color = Color::WHITE;
    pub const PADDLE_TOP: Color = Color::WHITE;
    pub const PADDLE_BOTTOM: Color = Color::rgb(0xCC, 0xCC, 0xCC);
    pub const BALL: Color = Color::WHITE;
    pub const BALL_STROKE: Color = Color::rgb(0xDD, 0xDD, 0xDD);
    pub const PROMPT: Color = Color::rgba(0xFF, 0xFF, 0xFF, 0xCC);
}

/// One drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole surface
    Clear { color: Color },
    FillRect { rect: Aabb, color: Color },
    StrokeRect { rect: Aabb, color: Color, line_width: f32 },
    /// Two-stop vertical gradient, `top` at the upper edge
    GradientRect { rect: Aabb, top: Color, bottom: Color },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Color,
        stroke: Color,
        line_width: f32,
    },
    /// Text centered horizontally on `pos`
    Text {
        pos: Vec2,
        text: String,
        size_px: f32,
        color: Color,
    },
}

/// Filled rectangle with a thin outline, as bricks are drawn
pub fn outlined_rect(rect: Aabb, fill: Color, border: Color) -> [DrawCmd; 2] {
    [
        DrawCmd::FillRect { rect, color: fill },
        DrawCmd::StrokeRect {
            rect,
            color: border,
            line_width: 1.0,
        },
    ]
}

/// Filled circle with a contrasting stroke
pub fn stroked_circle(center: Vec2, radius: f32, fill: Color, stroke: Color) -> DrawCmd {
    DrawCmd::Circle {
        center,
        radius,
        fill,
        stroke,
        line_width: 2.0,
    }
}

/// Vertical gradient rectangle
pub fn gradient_rect(rect: Aabb, top: Color, bottom: Color) -> DrawCmd {
    DrawCmd::GradientRect { rect, top, bottom }
}

/// Centered text line
pub fn centered_text(pos: Vec2, text: impl Into<String>, size_px: f32, color: Color) -> DrawCmd {
    DrawCmd::Text {
        pos,
        text: text.into(),
        size_px,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlined_rect() {
        let rect = Aabb::new(1.0, 2.0, 3.0, 4.0);
        let [fill, stroke] = outlined_rect(rect, Color::BLACK, Color::WHITE);
        assert_eq!(fill, DrawCmd::FillRect { rect, color: Color::BLACK });
        assert!(matches!(stroke, DrawCmd::StrokeRect { line_width, .. } if line_width == 1.0));
    }

    #[test]
    fn test_stroked_circle() {
        let circle = stroked_circle(Vec2::new(10.0, 10.0), 5.0, Color::WHITE, Color::BLACK);
        assert_eq!(
            circle,
            DrawCmd::Circle {
                center: Vec2::new(10.0, 10.0),
                radius: 5.0,
                fill: Color::WHITE,
                stroke: Color::BLACK,
                line_width: 2.0,
            }
        );
    }
}
