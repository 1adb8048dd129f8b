use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub win_score: u8,
    pub ball_speed_increase: f32,
    pub ball_spin_rate: f32,
    pub max_serve_angle: f32,
    pub max_bounce_angle: f32,
    pub ai_aim_offset: f32,
    pub ai_miss_chance: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            win_score: Params::WIN_SCORE,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_spin_rate: Params::BALL_SPIN_RATE,
            max_serve_angle: Params::MAX_SERVE_ANGLE,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            ai_aim_offset: Params::AI_AIM_OFFSET,
            ai_miss_chance: Params::AI_MISS_CHANCE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chance per frame that the opponent deliberately retargets away from a fast ball
    pub fn miss_probability(&self, handicap: f32) -> f64 {
        f64::from(self.ai_miss_chance * handicap).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_match_params() {
        let config = Config::new();
        assert_eq!(config.win_score, 7);
        assert_eq!(config.ball_speed_increase, 1.05);
        assert!((config.max_bounce_angle.to_degrees() - 60.0).abs() < 1e-4);
        assert!((config.max_serve_angle.to_degrees() - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_miss_probability_scales_with_handicap() {
        let config = Config::new();
        assert!((config.miss_probability(1.0) - 0.03).abs() < 1e-6);
        assert!(config.miss_probability(1.1) > config.miss_probability(0.3));
        assert_eq!(config.miss_probability(-1.0), 0.0);
    }
}
