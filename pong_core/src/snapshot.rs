use crate::components::Side;
use crate::geometry::{Rect, Viewport};
use crate::match_state::MatchPhase;
use crate::resources::Score;

/// Ball as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub rotation: f32,
}

/// Everything a renderer needs for one frame. Read-only copy of the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub viewport: Viewport,
    pub left: Rect,
    pub right: Rect,
    pub ball: BallView,
    pub score: Score,
    pub phase: MatchPhase,
    pub winner: Option<Side>,
}

impl Snapshot {
    pub fn paddle(&self, side: Side) -> Rect {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}
