//! Collision detection and response for axis-aligned geometry
//!
//! Everything is an axis-aligned box. The ball is treated as its bounding
//! square (center ± radius) rather than a true circle, which is what gives
//! the game its classic feel at brick corners.

use glam::Vec2;

/// Axis-aligned bounding box (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Bounding square of a circle
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self {
            x: center.x - radius,
            y: center.y - radius,
            w: radius * 2.0,
            h: radius * 2.0,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// True iff the half-open extents of both boxes intersect on both axes
#[inline]
pub fn overlaps(a: Aabb, b: Aabb) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Which velocity component a brick hit reflects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Side hit: reflect dx
    Horizontal,
    /// Top/bottom hit: reflect dy
    Vertical,
}

/// Pick the bounce axis for a ball hitting a brick.
///
/// Offsets from the brick center are normalized by the brick's size, so a
/// wide brick still reads as a top/bottom hit unless the ball is clearly at
/// its side. Ties go vertical.
pub fn bounce_axis(ball_center: Vec2, brick: Aabb) -> Axis {
    let offset = ball_center - brick.center();
    if (offset.x / brick.w).abs() > (offset.y / brick.h).abs() {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}

/// Horizontal velocity after a paddle hit.
///
/// Linear in the hit position: `-speed` at the paddle's left edge, `0` at its
/// center, `+speed` at its right edge.
#[inline]
pub fn paddle_deflection(ball_x: f32, paddle_x: f32, paddle_width: f32, speed: f32) -> f32 {
    let hit_pos = (ball_x - paddle_x) / paddle_width;
    speed * (hit_pos - 0.5) * 2.0
}

/// Reflect a velocity along one axis
#[inline]
pub fn reflect(vel: Vec2, axis: Axis) -> Vec2 {
    match axis {
        Axis::Horizontal => Vec2::new(-vel.x, vel.y),
        Axis::Vertical => Vec2::new(vel.x, -vel.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlaps_basic() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(overlaps(a, Aabb::new(5.0, 5.0, 10.0, 10.0)));
        assert!(overlaps(a, Aabb::new(2.0, 2.0, 2.0, 2.0)));
        assert!(!overlaps(a, Aabb::new(20.0, 0.0, 5.0, 5.0)));
        assert!(!overlaps(a, Aabb::new(0.0, 20.0, 5.0, 5.0)));
    }

    #[test]
    fn test_overlaps_touching_edges_is_miss() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        // Shared edge only: half-open intervals don't intersect
        assert!(!overlaps(a, Aabb::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!overlaps(a, Aabb::new(0.0, 10.0, 10.0, 10.0)));
        assert!(!overlaps(a, Aabb::new(-10.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_overlaps_is_symmetric() {
        let a = Aabb::new(0.0, 0.0, 10.0, 4.0);
        let b = Aabb::new(8.0, 3.0, 1.0, 50.0);
        assert_eq!(overlaps(a, b), overlaps(b, a));
    }

    #[test]
    fn test_bounding_square() {
        let sq = Aabb::around(Vec2::new(100.0, 50.0), 8.0);
        assert_eq!(sq, Aabb::new(92.0, 42.0, 16.0, 16.0));
        assert_eq!(sq.center(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_bounce_axis_top_hit() {
        let brick = Aabb::new(10.0, 80.0, 75.0, 25.0);
        // Directly below center
        assert_eq!(bounce_axis(Vec2::new(47.5, 110.0), brick), Axis::Vertical);
    }

    #[test]
    fn test_bounce_axis_side_hit() {
        let brick = Aabb::new(10.0, 80.0, 75.0, 25.0);
        // Left of the brick, level with its center
        assert_eq!(bounce_axis(Vec2::new(4.0, 92.5), brick), Axis::Horizontal);
    }

    #[test]
    fn test_bounce_axis_normalizes_by_size() {
        let brick = Aabb::new(0.0, 0.0, 100.0, 10.0);
        // Raw offsets 30 vs 8 would say horizontal; normalized 0.3 vs 0.8 says vertical
        assert_eq!(bounce_axis(Vec2::new(80.0, 13.0), brick), Axis::Vertical);
    }

    #[test]
    fn test_bounce_axis_tie_goes_vertical() {
        let brick = Aabb::new(0.0, 0.0, 20.0, 10.0);
        assert_eq!(bounce_axis(Vec2::new(20.0, 10.0), brick), Axis::Vertical);
    }

    #[test]
    fn test_paddle_deflection_range() {
        assert_eq!(paddle_deflection(100.0, 100.0, 150.0, 6.0), -6.0);
        assert_eq!(paddle_deflection(175.0, 100.0, 150.0, 6.0), 0.0);
        assert_eq!(paddle_deflection(250.0, 100.0, 150.0, 6.0), 6.0);
        assert!((paddle_deflection(137.5, 100.0, 150.0, 6.0) - -3.0).abs() < 1e-5);
    }

    #[test]
    fn test_reflect() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(reflect(v, Axis::Horizontal), Vec2::new(-3.0, -4.0));
        assert_eq!(reflect(v, Axis::Vertical), Vec2::new(3.0, 4.0));
    }
}
