//! The owned simulation context
//!
//! One `Simulation` holds everything a match needs. The host calls
//! [`Simulation::tick`] once per animation frame and reads
//! [`Simulation::snapshot`] to draw; discrete controls go through
//! [`Simulation::control`].

use glam::Vec2;
use hecs::World;

use crate::ai::OpponentController;
use crate::clock::FrameClock;
use crate::match_state::{MatchAction, MatchFsm, MatchPhase};
use crate::snapshot::{BallView, Snapshot};
use crate::systems::{reset_paddles, serve_ball, spawn_court};
use crate::{Ball, Config, Events, GameRng, InputSnapshot, Paddle, Score, Side, Viewport};

pub struct Simulation {
    world: World,
    viewport: Viewport,
    config: Config,
    score: Score,
    fsm: MatchFsm,
    ai: OpponentController,
    events: Events,
    rng: GameRng,
    clock: FrameClock,
}

impl Simulation {
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        Self::with_config(viewport, Config::new(), seed)
    }

    pub fn with_config(viewport: Viewport, config: Config, seed: u64) -> Self {
        let mut world = World::new();
        spawn_court(&mut world, &viewport);

        let mut sim = Self {
            world,
            viewport,
            ai: OpponentController::new(&config),
            config,
            score: Score::new(),
            fsm: MatchFsm::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            clock: FrameClock::new(),
        };
        sim.full_reset();
        sim
    }

    /// One animation-frame callback. Returns whether another frame should be requested.
    pub fn tick(&mut self, now_ms: f64, input: &InputSnapshot) -> bool {
        if !self.fsm.is_running() {
            return false;
        }
        let dt = self.clock.advance(now_ms);
        self.step(dt, input);
        self.fsm.is_running()
    }

    /// Advance by a normalized delta. Does nothing unless the match is running.
    pub fn step(&mut self, dt: f32, input: &InputSnapshot) {
        if !self.fsm.is_running() {
            return;
        }

        crate::step(
            &mut self.world,
            &self.viewport,
            &self.config,
            &mut self.score,
            &mut self.ai,
            input,
            &mut self.events,
            &mut self.rng,
            dt,
        );

        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            self.fsm.transition(MatchAction::Finish);
            log::info!(
                "Match over: {:?} wins {}:{}",
                winner,
                self.score.left,
                self.score.right
            );
        }
    }

    /// Apply a pause/reset control.
    ///
    /// Pausing an ended match means "play again", so it becomes a reset.
    /// Returns true when the frame loop was idle and must be re-armed.
    pub fn control(&mut self, action: MatchAction, now_ms: f64) -> bool {
        let was_running = self.fsm.is_running();
        let action = match (self.fsm.phase(), action) {
            (MatchPhase::Ended, MatchAction::TogglePause) => MatchAction::Reset,
            (_, action) => action,
        };

        let result = self.fsm.transition(action);
        if !result.success {
            log::debug!("Ignored {:?} while {:?}", action, result.from);
            return false;
        }
        if action == MatchAction::Reset {
            self.full_reset();
        }
        log::debug!("Match {:?} -> {:?}", result.from, result.to);

        let rearm = !was_running && self.fsm.is_running();
        if rearm {
            self.clock.rearm(now_ms);
        }
        rearm
    }

    /// Zero the score, re-center paddles and serve in a random direction
    pub fn full_reset(&mut self) {
        self.score.reset();
        self.ai.reset();
        self.events.clear();
        reset_paddles(&mut self.world, &self.viewport);
        let toward = self.rng.coin_side();
        serve_ball(&mut self.world, &self.viewport, &self.config, toward, &mut self.rng);
        log::info!("Match reset, serving toward {:?}", toward);
    }

    /// Adopt a new viewport. Positions from the old size are meaningless, so
    /// the paddles re-center and the ball is served again; the score stays.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        reset_paddles(&mut self.world, &self.viewport);
        let toward = self.rng.coin_side();
        serve_ball(&mut self.world, &self.viewport, &self.config, toward, &mut self.rng);
        log::info!("Viewport resized to {}x{}", viewport.width(), viewport.height());
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = self.ball();
        Snapshot {
            viewport: self.viewport,
            left: self.viewport.paddle_rect(Side::Left, self.paddle_y(Side::Left)),
            right: self.viewport.paddle_rect(Side::Right, self.paddle_y(Side::Right)),
            ball: BallView {
                x: ball.pos.x,
                y: ball.pos.y,
                radius: self.viewport.dimensions().ball_radius,
                rotation: ball.rotation,
            },
            score: self.score,
            phase: self.fsm.phase(),
            winner: self.score.has_winner(self.config.win_score),
        }
    }

    pub fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| Ball::new(self.viewport.center(), Vec2::ZERO))
    }

    /// Replace ball state (scripted scenarios, tests)
    pub fn set_ball(&mut self, new_ball: Ball) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            *ball = new_ball;
        }
    }

    pub fn paddle_y(&self, side: Side) -> f32 {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| paddle.y)
            .unwrap_or_else(|| self.viewport.centered_paddle_y())
    }

    /// Place a paddle, clamped to the court
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let y = self.viewport.clamp_paddle_y(y);
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = y;
            }
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Overwrite the score (scripted scenarios, tests)
    pub fn set_score(&mut self, score: Score) {
        self.score = score;
    }

    pub fn phase(&self) -> MatchPhase {
        self.fsm.phase()
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn opponent(&self) -> &OpponentController {
        &self.ai
    }
}
