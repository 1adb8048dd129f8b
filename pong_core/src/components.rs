use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng, Viewport};

/// Court side. The human plays `Left`, the CPU plays `Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal sign of travel toward this side
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    /// True when a horizontal velocity carries the ball toward this side
    pub fn is_approached_by(self, vx: f32) -> bool {
        match self {
            Side::Left => vx < 0.0,
            Side::Right => vx > 0.0,
        }
    }
}

/// Paddle component. Only the top edge is stored; x and size come from the viewport.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub rotation: f32, // Cosmetic spin, no effect on physics
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            rotation: 0.0,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Center the ball and launch it toward `toward` at serve speed
    pub fn serve(&mut self, viewport: &Viewport, config: &Config, toward: Side, rng: &mut GameRng) {
        self.pos = viewport.center();

        // Uniform in [-max, max) without panicking on a zero-width range
        let angle = (rng.0.gen::<f32>() * 2.0 - 1.0) * config.max_serve_angle;
        let speed = viewport.serve_speed();
        self.vel = Vec2::new(angle.cos() * speed * toward.direction(), angle.sin() * speed);
    }
}
