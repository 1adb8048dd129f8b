use hecs::World;

use crate::ai::OpponentController;
use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::geometry::Viewport;
use crate::resources::{Events, GameRng, Score};

/// Let the CPU controller move the right paddle
#[allow(clippy::too_many_arguments)]
pub fn drive_opponent(
    world: &mut World,
    viewport: &Viewport,
    config: &Config,
    score: &Score,
    ai: &mut OpponentController,
    rng: &mut GameRng,
    events: &mut Events,
    dt: f32,
) {
    // The controller only reads the ball
    let ball = match world.query::<&Ball>().iter().next().map(|(_e, b)| *b) {
        Some(ball) => ball,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Right {
            continue;
        }
        let step = ai.update(paddle.y, &ball, score, viewport, config, rng, dt);
        paddle.y = step.y;
        events.forced_miss |= step.forced_miss;
    }
}
