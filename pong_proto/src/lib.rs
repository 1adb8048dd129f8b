//! Render frame protocol for the Pong renderer
//!
//! Uses postcard for compact binary serialization across the WASM boundary

use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};

/// Match phase as shown by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Running,
    Paused,
    Ended,
}

/// Which side a frame refers to: 0 = player (left), 1 = CPU (right)
pub type SideId = u8;

/// Axis-aligned paddle rectangle in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Everything the renderer draws for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub width: f32,
    pub height: f32,
    pub paddle_left: PaddleRect,
    pub paddle_right: PaddleRect,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_radius: f32,
    pub ball_rotation: f32,
    pub score_left: u8,
    pub score_right: u8,
    pub phase: Phase,
    pub winner: Option<SideId>,
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl RenderFrame {
    /// Serialize frame to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize frame from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }

    /// Banner text for the current phase, if any
    pub fn banner(&self) -> Option<&'static str> {
        match (self.phase, self.winner) {
            (Phase::Ended, Some(0)) => Some("You win!"),
            (Phase::Ended, Some(_)) => Some("CPU wins!"),
            (Phase::Paused, _) => Some("Paused"),
            _ => None,
        }
    }
}
