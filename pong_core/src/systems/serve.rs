use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::geometry::Viewport;
use crate::resources::GameRng;

/// Center both paddles vertically
pub fn reset_paddles(world: &mut World, viewport: &Viewport) {
    let y = viewport.centered_paddle_y();
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = y;
    }
}

/// Center the ball and launch it toward `toward`
pub fn serve_ball(world: &mut World, viewport: &Viewport, config: &Config, toward: Side, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.serve(viewport, config, toward, rng);
    }
}

/// Spawn the two paddles and the ball for a fresh court
pub fn spawn_court(world: &mut World, viewport: &Viewport) {
    let y = viewport.centered_paddle_y();
    crate::create_paddle(world, Side::Left, y);
    crate::create_paddle(world, Side::Right, y);
    crate::create_ball(world, viewport.center(), Vec2::ZERO);
}
