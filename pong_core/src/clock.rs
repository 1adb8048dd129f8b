use crate::params::Params;

/// Turns callback timestamps (ms) into normalized step deltas.
///
/// A delta of 1.0 is one 60 Hz frame. Long gaps are capped at
/// [`Params::MAX_FRAME_MS`] and backwards or garbage timestamps yield 0.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart timing from `now_ms`, e.g. after a pause
    pub fn rearm(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    /// Delta since the previous call; the first call after creation yields 0
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let elapsed = self.last_ms.map_or(0.0, |last| now_ms - last);
        if now_ms.is_finite() {
            self.last_ms = Some(now_ms);
        }
        normalize_dt(elapsed)
    }
}

/// Convert an elapsed interval in ms to a clamped frame-normalized delta
pub fn normalize_dt(elapsed_ms: f64) -> f32 {
    if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
        return 0.0;
    }
    (elapsed_ms.min(Params::MAX_FRAME_MS) / Params::FRAME_MS) as f32
}

/// Clamp an already-normalized delta to the valid step range
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, Params::MAX_DT)
    } else {
        0.0
    }
}
