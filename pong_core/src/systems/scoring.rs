use hecs::World;

use crate::components::{Ball, Side};
use crate::config::Config;
use crate::geometry::Viewport;
use crate::resources::{Events, GameRng, Score};

/// Award a point once the ball has fully left the court, then re-serve.
///
/// The serve goes toward the side that just won the point, so the player who
/// conceded gets a moment before the ball comes back.
pub fn check_scoring(
    world: &mut World,
    viewport: &Viewport,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let radius = viewport.dimensions().ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x + radius < 0.0 {
            Side::Right
        } else if ball.pos.x - radius > viewport.width() {
            Side::Left
        } else {
            continue;
        };

        score.award(scorer);
        match scorer {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
        log::debug!("{:?} scored, now {}:{}", scorer, score.left, score.right);

        ball.serve(viewport, config, scorer, rng);
    }
}
