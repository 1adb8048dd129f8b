//! CPU opponent
//!
//! The opponent tracks the ball imperfectly. It only re-aims on reaction
//! ticks, adds low-pass noise to its aim, chases the target with a capped
//! proportional controller, and occasionally throws a point on purpose when the
//! ball is fast. How sloppy it is depends on the score: the further ahead the
//! CPU gets, the larger its handicap.

use rand::Rng;

use crate::components::Ball;
use crate::params::Params;
use crate::{Config, GameRng, Score, Side, Viewport};

/// Difficulty scalar from the score: 0.3 (CPU far behind) to 1.1 (CPU far ahead)
pub fn handicap(score: &Score) -> f32 {
    let lead = score.opponent_lead() as f32;
    (Params::AI_HANDICAP_BASE + Params::AI_HANDICAP_PER_POINT * lead)
        .clamp(Params::AI_HANDICAP_MIN, Params::AI_HANDICAP_MAX)
}

/// Milliseconds between aim updates for a given handicap
pub fn reaction_ms(handicap: f32) -> f32 {
    Params::AI_REACTION_BASE_MS + Params::AI_REACTION_PER_HANDICAP_MS * handicap
}

/// Result of one controller update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpponentStep {
    pub y: f32,
    pub forced_miss: bool,
}

/// Aim state carried between frames
#[derive(Debug, Clone)]
pub struct OpponentController {
    timer_ms: f32,
    target_y: Option<f32>,
    noise: f32,
    aim_offset: f32,
}

impl OpponentController {
    pub fn new(config: &Config) -> Self {
        Self {
            timer_ms: 0.0,
            target_y: None,
            noise: 0.0,
            aim_offset: config.ai_aim_offset,
        }
    }

    pub fn target_y(&self) -> Option<f32> {
        self.target_y
    }

    pub fn noise(&self) -> f32 {
        self.noise
    }

    pub fn timer_ms(&self) -> f32 {
        self.timer_ms
    }

    /// Forget the current aim; the next update re-aims immediately
    pub fn reset(&mut self) {
        self.timer_ms = 0.0;
        self.target_y = None;
        self.noise = 0.0;
    }

    /// Advance by `dt` frames and return the new paddle top
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        paddle_y: f32,
        ball: &Ball,
        score: &Score,
        viewport: &Viewport,
        config: &Config,
        rng: &mut GameRng,
        dt: f32,
    ) -> OpponentStep {
        let handicap = handicap(score);
        let paddle_height = viewport.dimensions().paddle_height;

        self.timer_ms += dt * Params::FRAME_MS as f32;
        let held = self
            .target_y
            .filter(|_| self.timer_ms < reaction_ms(handicap));
        let target = match held {
            Some(target) => target,
            None => self.aim(ball, viewport, paddle_height, handicap, rng),
        };

        let y = self.follow(paddle_y, target, viewport, handicap, dt);
        let forced_miss = self.roll_deliberate_miss(ball, viewport, config, handicap, rng);

        OpponentStep { y, forced_miss }
    }

    /// Reaction tick: pick a fresh, noisy target
    fn aim(
        &mut self,
        ball: &Ball,
        viewport: &Viewport,
        paddle_height: f32,
        handicap: f32,
        rng: &mut GameRng,
    ) -> f32 {
        self.timer_ms = 0.0;

        let base = if Side::Right.is_approached_by(ball.vel.x) {
            ball.pos.y - paddle_height / 2.0 + ball.vel.y * Params::AI_LEAD_FRAMES
        } else {
            viewport.height() / 2.0 - paddle_height / 2.0
        };

        self.noise = self.noise * Params::AI_NOISE_DECAY
            + (rng.0.gen::<f32>() - 0.5) * Params::AI_NOISE_GAIN;
        let offset = self.noise * paddle_height * self.aim_offset * handicap;

        let target = base + offset;
        self.target_y = Some(target);
        target
    }

    /// Capped proportional step toward the target, every frame
    fn follow(&self, paddle_y: f32, target: f32, viewport: &Viewport, handicap: f32, dt: f32) -> f32 {
        let speed_factor = (1.0 - Params::AI_SPEED_PENALTY * handicap)
            .clamp(Params::AI_SPEED_FACTOR_MIN, Params::AI_SPEED_FACTOR_MAX);
        let max_step = viewport.paddle_speed(Side::Right) * speed_factor * dt;
        let blend = (Params::AI_BLEND_PER_FRAME * dt).clamp(Params::AI_BLEND_MIN, Params::AI_BLEND_MAX);

        let step = ((target - paddle_y) * blend).clamp(-max_step, max_step);
        viewport.clamp_paddle_y(paddle_y + step)
    }

    /// Occasionally jump to a random target so a fast ball gets through
    fn roll_deliberate_miss(
        &mut self,
        ball: &Ball,
        viewport: &Viewport,
        config: &Config,
        handicap: f32,
        rng: &mut GameRng,
    ) -> bool {
        let fast = ball.speed() > viewport.max_ball_speed() * Params::AI_FAST_BALL;
        let deep = ball.pos.x > viewport.width() * Params::AI_MISS_ZONE;
        if !(fast && deep && Side::Right.is_approached_by(ball.vel.x)) {
            return false;
        }
        if !rng.0.gen_bool(config.miss_probability(handicap)) {
            return false;
        }

        self.target_y = Some(viewport.max_paddle_y() * rng.0.gen::<f32>());
        true
    }
}
