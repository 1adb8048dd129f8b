//! Match State Machine
//!
//! Running ⇄ Paused through the pause controls, Running → Ended when someone
//! reaches the win score, Ended → Running only through a full reset.

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Running,
    Paused,
    Ended,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Pause,
    Resume,
    TogglePause,
    Finish,
    Reset,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: MatchPhase,
    pub to: MatchPhase,
    pub action: MatchAction,
}

/// Match phase machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    phase: MatchPhase,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            phase: MatchPhase::Running,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == MatchPhase::Running
    }

    pub fn is_ended(&self) -> bool {
        self.phase == MatchPhase::Ended
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from = self.phase;
        match self.next_phase(action) {
            Some(to) => {
                self.phase = to;
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    fn next_phase(&self, action: MatchAction) -> Option<MatchPhase> {
        use MatchAction::*;
        use MatchPhase::*;

        match (self.phase, action) {
            // From Running
            (Running, Pause | TogglePause) => Some(Paused),
            (Running, Finish) => Some(Ended),
            (Running, Reset) => Some(Running),

            // From Paused
            (Paused, Resume | TogglePause) => Some(Running),
            (Paused, Reset) => Some(Paused),

            // From Ended: only a reset restarts play
            (Ended, Reset) => Some(Running),

            // Invalid transition
            _ => None,
        }
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}
