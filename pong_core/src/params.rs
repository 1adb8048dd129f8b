/// Game tuning parameters for Pong
///
/// Sizes and speeds are expressed as fractions of the viewport with a floor so
/// the court stays playable on small screens. Speeds are pixels per nominal
/// 60 Hz frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Paddle
    pub const PADDLE_HEIGHT_RATIO: f32 = 0.22;
    pub const PADDLE_HEIGHT_MIN: f32 = 70.0;
    pub const PADDLE_WIDTH_RATIO: f32 = 0.028;
    pub const PADDLE_WIDTH_MIN: f32 = 10.0;
    pub const PADDLE_MARGIN_RATIO: f32 = 0.025; // of width
    pub const PADDLE_MARGIN_MIN: f32 = 12.0;
    pub const PLAYER_SPEED_RATIO: f32 = 0.018;
    pub const PLAYER_SPEED_MIN: f32 = 6.0;
    pub const OPPONENT_SPEED_RATIO: f32 = 0.016;
    pub const OPPONENT_SPEED_MIN: f32 = 5.0;

    // Ball
    pub const BALL_RADIUS_RATIO: f32 = 0.06;
    pub const BALL_RADIUS_MIN: f32 = 20.0;
    pub const BALL_SERVE_SPEED_RATIO: f32 = 0.012;
    pub const BALL_SERVE_SPEED_MIN: f32 = 5.0;
    pub const BALL_SPEED_MAX_RATIO: f32 = 0.026;
    pub const BALL_SPEED_MAX_MIN: f32 = 9.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply speed on paddle hit
    pub const BALL_SPIN_RATE: f32 = 0.002; // Radians per unit of speed per step
    pub const MAX_SERVE_ANGLE: f32 = std::f32::consts::FRAC_PI_6; // ±30°
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3; // 60° at the paddle tip

    // Opponent
    pub const AI_HANDICAP_BASE: f32 = 0.6;
    pub const AI_HANDICAP_PER_POINT: f32 = 0.12;
    pub const AI_HANDICAP_MIN: f32 = 0.3;
    pub const AI_HANDICAP_MAX: f32 = 1.1;
    pub const AI_REACTION_BASE_MS: f32 = 70.0;
    pub const AI_REACTION_PER_HANDICAP_MS: f32 = 120.0;
    pub const AI_LEAD_FRAMES: f32 = 4.0;
    pub const AI_NOISE_DECAY: f32 = 0.9;
    pub const AI_NOISE_GAIN: f32 = 0.6;
    pub const AI_AIM_OFFSET: f32 = 0.55; // Fraction of paddle height
    pub const AI_SPEED_PENALTY: f32 = 0.25;
    pub const AI_SPEED_FACTOR_MIN: f32 = 0.65;
    pub const AI_SPEED_FACTOR_MAX: f32 = 1.05;
    pub const AI_BLEND_PER_FRAME: f32 = 0.22;
    pub const AI_BLEND_MIN: f32 = 0.02;
    pub const AI_BLEND_MAX: f32 = 0.35;
    pub const AI_MISS_CHANCE: f32 = 0.03; // Per frame, scaled by handicap
    pub const AI_MISS_ZONE: f32 = 0.62; // Fraction of width
    pub const AI_FAST_BALL: f32 = 0.9; // Fraction of max speed

    // Score
    pub const WIN_SCORE: u8 = 7;

    // Timing
    pub const FRAME_MS: f64 = 16.67; // One nominal frame at 60 Hz
    pub const MAX_FRAME_MS: f64 = 32.0; // Longest real interval one step may cover
    pub const MAX_DT: f32 = (Self::MAX_FRAME_MS / Self::FRAME_MS) as f32;
}
