//! Pointer and keyboard input handling

use pong_core::{InputSnapshot, MatchAction, Viewport};

/// Two presses closer than this toggle pause
pub const DOUBLE_TAP_MS: f64 = 300.0;

/// Smallest canvas the game lays out for
pub const MIN_WIDTH: f64 = 320.0;
pub const MIN_HEIGHT: f64 = 240.0;

/// Map a `KeyboardEvent.code` to a match control
pub fn control_for_key(code: &str) -> Option<MatchAction> {
    match code {
        "Space" => Some(MatchAction::TogglePause),
        "KeyR" => Some(MatchAction::Reset),
        _ => None,
    }
}

/// Keys whose browser default (scrolling) should be suppressed
pub fn is_game_key(code: &str) -> bool {
    control_for_key(code).is_some()
}

/// Window size to viewport, floored and with a minimum playable size
pub fn fit_viewport(inner_width: f64, inner_height: f64) -> Viewport {
    let fit = |v: f64, min: f64| if v.is_finite() { v.floor().max(min) } else { min };
    Viewport::new(
        fit(inner_width, MIN_WIDTH) as f32,
        fit(inner_height, MIN_HEIGHT) as f32,
    )
}

/// Latest pointer state between frames
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    pointer_y: Option<f32>,
    last_tap_ms: Option<f64>,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer or touch moved
    pub fn on_move(&mut self, y: f32) {
        if y.is_finite() {
            self.pointer_y = Some(y);
        }
    }

    /// Pointer pressed. A second press within [`DOUBLE_TAP_MS`] toggles pause.
    pub fn on_down(&mut self, y: f32, now_ms: f64) -> Option<MatchAction> {
        self.on_move(y);
        let double = self
            .last_tap_ms
            .is_some_and(|last| now_ms - last < DOUBLE_TAP_MS);
        self.last_tap_ms = Some(now_ms);
        double.then_some(MatchAction::TogglePause)
    }

    /// Sample for the next simulation step
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            pointer_y: self.pointer_y,
        }
    }
}
