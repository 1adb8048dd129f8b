//! Snapshot to wire-frame conversion

use pong_core::{MatchPhase, Rect, Side, Snapshot};
use pong_proto::{PaddleRect, Phase, RenderFrame};

fn paddle_rect(rect: Rect) -> PaddleRect {
    PaddleRect {
        x: rect.x,
        y: rect.y,
        w: rect.w,
        h: rect.h,
    }
}

fn phase(phase: MatchPhase) -> Phase {
    match phase {
        MatchPhase::Running => Phase::Running,
        MatchPhase::Paused => Phase::Paused,
        MatchPhase::Ended => Phase::Ended,
    }
}

/// Build the renderer's frame from a simulation snapshot
pub fn render_frame(snapshot: &Snapshot) -> RenderFrame {
    RenderFrame {
        width: snapshot.viewport.width(),
        height: snapshot.viewport.height(),
        paddle_left: paddle_rect(snapshot.left),
        paddle_right: paddle_rect(snapshot.right),
        ball_x: snapshot.ball.x,
        ball_y: snapshot.ball.y,
        ball_radius: snapshot.ball.radius,
        ball_rotation: snapshot.ball.rotation,
        score_left: snapshot.score.left,
        score_right: snapshot.score.right,
        phase: phase(snapshot.phase),
        winner: snapshot.winner.map(|side| match side {
            Side::Left => 0,
            Side::Right => 1,
        }),
    }
}
