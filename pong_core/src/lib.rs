pub mod ai;
pub mod clock;
pub mod components;
pub mod config;
pub mod geometry;
pub mod match_state;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod snapshot;
pub mod systems;

pub use ai::*;
pub use clock::*;
pub use components::*;
pub use config::*;
pub use geometry::*;
pub use match_state::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Run one deterministic Pong simulation step
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    viewport: &Viewport,
    config: &Config,
    score: &mut Score,
    ai: &mut OpponentController,
    input: &InputSnapshot,
    events: &mut Events,
    rng: &mut GameRng,
    dt: f32,
) {
    // Clamp dt to prevent large jumps
    let dt = sanitize_dt(dt);

    // Clear events at start of frame
    events.clear();

    // 1. Paddles: player from pointer, CPU from its controller
    apply_player_input(world, viewport, input);
    drive_opponent(world, viewport, config, score, ai, rng, events, dt);

    // 2. Move ball
    move_ball(world, config, dt);

    // 3. Check collisions (walls, then paddles)
    check_collisions(world, viewport, config, events);

    // 4. Check scoring (ball left the court)
    check_scoring(world, viewport, config, score, events, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
