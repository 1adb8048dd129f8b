use glam::Vec2;
use pong_core::*;

fn court() -> Simulation {
    Simulation::new(Viewport::new(1280.0, 720.0), 777)
}

#[test]
fn test_missed_ball_scores_for_cpu_and_recenters() {
    let mut sim = court();
    let viewport = sim.viewport();
    let center = viewport.center();

    // Player paddle top sits level with the ball, so the ball slides past its edge
    sim.set_paddle_y(Side::Left, center.y);
    sim.set_ball(Ball::new(center, Vec2::new(-viewport.serve_speed(), 0.0)));

    let input = InputSnapshot::new();
    let mut frames = 0;
    while sim.score() == Score::new() && frames < 1_000 {
        sim.step(1.0, &input);
        frames += 1;
    }

    assert_eq!(sim.score(), Score { left: 0, right: 1 });
    assert!(sim.events().right_scored);
    let ball = sim.ball();
    assert_eq!(ball.pos, center);
    assert!(ball.vel.x > 0.0, "Re-serve heads toward the CPU");
    assert!((ball.speed() - viewport.serve_speed()).abs() < 1e-3);
    assert_eq!(sim.phase(), MatchPhase::Running);
}

#[test]
fn test_rally_speeds_up_until_cap() {
    let mut sim = court();
    let viewport = sim.viewport();
    let radius = viewport.dimensions().ball_radius;
    let rect = viewport.paddle_rect(Side::Left, sim.paddle_y(Side::Left));

    let mut speed = 6.0;
    for _ in 0..40 {
        sim.set_ball(Ball::new(
            Vec2::new(rect.right() + radius - 1.0, rect.center().y),
            Vec2::new(-speed, 0.0),
        ));
        sim.step(0.0, &InputSnapshot::new());
        assert!(sim.events().ball_hit_paddle);

        let after = sim.ball().speed();
        assert!(after <= viewport.max_ball_speed() + 1e-4);
        assert!(after >= speed - 1e-4 || (after - viewport.max_ball_speed()).abs() < 1e-4);
        speed = after;
    }
    assert!((speed - viewport.max_ball_speed()).abs() < 1e-3);
}

#[test]
fn test_match_ends_at_seven_and_only_reset_restarts() {
    let mut sim = court();
    let viewport = sim.viewport();
    let radius = viewport.dimensions().ball_radius;

    for expected in 1..=7u8 {
        assert_eq!(sim.phase(), MatchPhase::Running);
        sim.set_ball(Ball::new(Vec2::new(-radius - 1.0, 40.0), Vec2::new(-5.0, 0.0)));
        sim.step(0.0, &InputSnapshot::new());
        assert_eq!(sim.score().right, expected);
    }

    assert_eq!(sim.phase(), MatchPhase::Ended);
    assert_eq!(sim.snapshot().winner, Some(Side::Right));

    // Frozen: neither ticks nor steps move anything
    let frozen = sim.ball();
    assert!(!sim.tick(1_000.0, &InputSnapshot::with_pointer(10.0)));
    sim.step(1.0, &InputSnapshot::new());
    assert_eq!(sim.ball().pos, frozen.pos);
    assert!(!sim.control(MatchAction::Resume, 1_100.0));
    assert_eq!(sim.phase(), MatchPhase::Ended);

    assert!(sim.control(MatchAction::Reset, 1_200.0));
    assert_eq!(sim.phase(), MatchPhase::Running);
    assert_eq!(sim.score(), Score::new());
}

#[test]
fn test_long_frame_gap_is_clamped() {
    let mut sim = court();
    let viewport = sim.viewport();
    let start = viewport.center();
    sim.set_ball(Ball::new(start, Vec2::new(5.0, 0.0)));

    let input = InputSnapshot::new();
    sim.tick(1_000.0, &input);
    sim.tick(1_500.0, &input);

    let travelled = sim.ball().pos.x - start.x;
    assert!((travelled - 5.0 * 32.0 / 16.67).abs() < 1e-3);
}

#[test]
fn test_pointer_drives_player_paddle() {
    let mut sim = court();
    let half = sim.viewport().dimensions().paddle_height / 2.0;

    sim.step(1.0, &InputSnapshot::with_pointer(200.0));
    assert_eq!(sim.paddle_y(Side::Left), 200.0 - half);

    // No pointer sample: paddle stays
    sim.step(1.0, &InputSnapshot::new());
    assert_eq!(sim.paddle_y(Side::Left), 200.0 - half);
}

#[test]
fn test_same_seed_same_match() {
    let mut a = Simulation::new(Viewport::new(1024.0, 768.0), 5);
    let mut b = Simulation::new(Viewport::new(1024.0, 768.0), 5);

    for frame in 0..600 {
        let input = InputSnapshot::with_pointer((frame as f32 * 3.7) % 768.0);
        a.step(1.0, &input);
        b.step(1.0, &input);
    }

    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_long_autoplay_keeps_invariants() {
    let mut sim = Simulation::new(Viewport::new(1440.0, 900.0), 31337);
    let viewport = sim.viewport();

    for frame in 0..20_000 {
        if sim.phase() == MatchPhase::Ended {
            sim.control(MatchAction::TogglePause, frame as f64);
        }
        // Player follows the ball loosely
        let input = InputSnapshot::with_pointer(sim.ball().pos.y + 30.0);
        sim.step(1.3, &input);

        let snap = sim.snapshot();
        for rect in [snap.left, snap.right] {
            assert!(rect.y >= 0.0 && rect.y <= viewport.max_paddle_y());
        }
        assert!(sim.ball().speed() <= viewport.max_ball_speed() + 1e-3);
        assert!(snap.score.left <= 7 && snap.score.right <= 7);
    }
}
