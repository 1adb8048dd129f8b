use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Player score
    pub right: u8, // CPU score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left = self.left.saturating_add(1);
    }

    pub fn increment_right(&mut self) {
        self.right = self.right.saturating_add(1);
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.increment_left(),
            Side::Right => self.increment_right(),
        }
    }

    /// CPU points minus player points
    pub fn opponent_lead(&self) -> i32 {
        i32::from(self.right) - i32::from(self.left)
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Fair coin for picking a serve direction
    pub fn coin_side(&mut self) -> Side {
        use rand::Rng;
        if self.0.gen_bool(0.5) {
            Side::Right
        } else {
            Side::Left
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub forced_miss: bool, // CPU retargeted away from the ball on purpose
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.forced_miss = false;
    }
}

/// Input sampled once per step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Pointer/touch y in viewport pixels; `None` until the first pointer event
    pub pointer_y: Option<f32>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pointer(y: f32) -> Self {
        Self { pointer_y: Some(y) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_award() {
        let mut score = Score::new();
        score.award(Side::Right);
        score.award(Side::Right);
        score.award(Side::Left);
        assert_eq!(score, Score { left: 1, right: 2 });
        assert_eq!(score.opponent_lead(), 1);
    }

    #[test]
    fn test_score_has_winner_left() {
        let mut score = Score::new();
        for _ in 0..7 {
            score.increment_left();
        }
        assert_eq!(score.has_winner(7), Some(Side::Left));
    }

    #[test]
    fn test_score_has_winner_right() {
        let mut score = Score::new();
        for _ in 0..7 {
            score.increment_right();
        }
        assert_eq!(score.has_winner(7), Some(Side::Right));
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let score = Score { left: 6, right: 6 };
        assert_eq!(score.has_winner(7), None, "No winner below threshold");
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score { left: 3, right: 7 };
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.right_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;
        events.forced_miss = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert!(!events.forced_miss);
    }

    #[test]
    fn test_rng_is_deterministic() {
        let mut a = GameRng::new(99);
        let mut b = GameRng::new(99);
        let sides_a: Vec<Side> = (0..16).map(|_| a.coin_side()).collect();
        let sides_b: Vec<Side> = (0..16).map(|_| b.coin_side()).collect();
        assert_eq!(sides_a, sides_b);
    }
}
