//! Court geometry derived from the viewport
//!
//! Nothing here is cached: every size is recomputed from the current viewport,
//! so a resize is picked up by the next query.

use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Axis-aligned rectangle in viewport pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strictly inside the vertical span (touching an end does not count)
    pub fn spans_y(&self, y: f32) -> bool {
        y > self.y && y < self.bottom()
    }
}

/// Entity sizes for the current viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
}

/// Drawable area in CSS pixels. Only built through [`Viewport::new`], so both
/// extents are always finite and at least 1px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Degenerate sizes (zero, negative, NaN) collapse to 1px so derived
    /// values never divide by zero.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        let h = self.height;
        Dimensions {
            paddle_width: scaled(h, Params::PADDLE_WIDTH_RATIO, Params::PADDLE_WIDTH_MIN),
            paddle_height: scaled(h, Params::PADDLE_HEIGHT_RATIO, Params::PADDLE_HEIGHT_MIN),
            paddle_margin: scaled(
                self.width,
                Params::PADDLE_MARGIN_RATIO,
                Params::PADDLE_MARGIN_MIN,
            ),
            ball_radius: scaled(h, Params::BALL_RADIUS_RATIO, Params::BALL_RADIUS_MIN),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Initial ball speed for a serve
    pub fn serve_speed(&self) -> f32 {
        (self.height * Params::BALL_SERVE_SPEED_RATIO).max(Params::BALL_SERVE_SPEED_MIN)
    }

    /// Ball speed cap applied on every paddle bounce
    pub fn max_ball_speed(&self) -> f32 {
        (self.height * Params::BALL_SPEED_MAX_RATIO).max(Params::BALL_SPEED_MAX_MIN)
    }

    /// Paddle speed in pixels per nominal frame
    pub fn paddle_speed(&self, side: Side) -> f32 {
        match side {
            Side::Left => scaled(self.height, Params::PLAYER_SPEED_RATIO, Params::PLAYER_SPEED_MIN),
            Side::Right => scaled(
                self.height,
                Params::OPPONENT_SPEED_RATIO,
                Params::OPPONENT_SPEED_MIN,
            ),
        }
    }

    /// X position of the paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        let dims = self.dimensions();
        match side {
            Side::Left => dims.paddle_margin,
            Side::Right => self.width - dims.paddle_margin - dims.paddle_width,
        }
    }

    /// Largest valid paddle top; zero when the paddle is taller than the court
    pub fn max_paddle_y(&self) -> f32 {
        (self.height - self.dimensions().paddle_height).max(0.0)
    }

    /// Clamp paddle top to the court
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        if y.is_nan() {
            return 0.0;
        }
        y.clamp(0.0, self.max_paddle_y())
    }

    /// Paddle top that centers it vertically
    pub fn centered_paddle_y(&self) -> f32 {
        self.clamp_paddle_y((self.height - self.dimensions().paddle_height) / 2.0)
    }

    pub fn paddle_rect(&self, side: Side, y: f32) -> Rect {
        let dims = self.dimensions();
        Rect::new(self.paddle_x(side), y, dims.paddle_width, dims.paddle_height)
    }
}

fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(1.0)
    } else {
        1.0
    }
}

fn scaled(extent: f32, ratio: f32, min: f32) -> f32 {
    (extent * ratio).floor().max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_scale_with_height() {
        let vp = Viewport::new(1600.0, 1000.0);
        let dims = vp.dimensions();
        assert_eq!(dims.paddle_height, 220.0);
        assert_eq!(dims.paddle_width, 28.0);
        assert_eq!(dims.paddle_margin, 40.0);
        assert_eq!(dims.ball_radius, 60.0);
    }

    #[test]
    fn test_dimensions_respect_floors() {
        let dims = Viewport::new(100.0, 100.0).dimensions();
        assert_eq!(dims.paddle_height, 70.0);
        assert_eq!(dims.paddle_width, 10.0);
        assert_eq!(dims.paddle_margin, 12.0);
        assert_eq!(dims.ball_radius, 20.0);
    }

    #[test]
    fn test_degenerate_viewport_is_sanitized() {
        let vp = Viewport::new(-5.0, f32::NAN);
        assert_eq!(vp.width(), 1.0);
        assert_eq!(vp.height(), 1.0);
        assert_eq!(vp.max_paddle_y(), 0.0);
        assert_eq!(vp.clamp_paddle_y(50.0), 0.0);
    }

    #[test]
    fn test_zero_and_infinite_extents_collapse() {
        let vp = Viewport::new(0.0, f32::INFINITY);
        assert_eq!((vp.width(), vp.height()), (1.0, 1.0));
        assert!(vp.serve_speed().is_finite());
        assert_eq!(vp.center(), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_speeds() {
        let vp = Viewport::new(1280.0, 800.0);
        assert!((vp.serve_speed() - 9.6).abs() < 1e-4);
        assert!((vp.max_ball_speed() - 20.8).abs() < 1e-4);
        assert_eq!(vp.paddle_speed(Side::Left), 14.0);
        assert_eq!(vp.paddle_speed(Side::Right), 12.0);

        let small = Viewport::new(320.0, 240.0);
        assert_eq!(small.serve_speed(), 5.0);
        assert_eq!(small.max_ball_speed(), 9.0);
    }

    #[test]
    fn test_paddle_x_positions() {
        let vp = Viewport::new(1600.0, 1000.0);
        assert_eq!(vp.paddle_x(Side::Left), 40.0);
        assert_eq!(vp.paddle_x(Side::Right), 1600.0 - 40.0 - 28.0);
    }

    #[test]
    fn test_clamp_paddle_y() {
        let vp = Viewport::new(800.0, 600.0);
        let max = 600.0 - vp.dimensions().paddle_height;
        assert_eq!(vp.clamp_paddle_y(-10.0), 0.0);
        assert_eq!(vp.clamp_paddle_y(10_000.0), max);
        assert_eq!(vp.clamp_paddle_y(100.0), 100.0);
        assert_eq!(vp.centered_paddle_y(), max / 2.0);
    }

    #[test]
    fn test_rect_spans_y_is_strict() {
        let rect = Rect::new(0.0, 100.0, 10.0, 50.0);
        assert!(!rect.spans_y(100.0));
        assert!(rect.spans_y(125.0));
        assert!(!rect.spans_y(150.0));
        assert_eq!(rect.center(), Vec2::new(5.0, 125.0));
    }
}
