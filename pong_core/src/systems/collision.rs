use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::geometry::{Rect, Viewport};
use crate::resources::Events;

/// Reflect off the top/bottom walls.
///
/// Only a ball still heading out of bounds is reflected, so running this twice
/// on the same state flips the velocity at most once.
pub fn reflect_off_walls(ball: &mut Ball, radius: f32, height: f32) -> bool {
    if ball.pos.y - radius < 0.0 && ball.vel.y < 0.0 {
        ball.pos.y = radius;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.pos.y + radius > height && ball.vel.y > 0.0 {
        ball.pos.y = height - radius;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Bounce off one paddle.
///
/// The hit point decides the outgoing angle: the center sends the ball back
/// flat, the tips at up to `max_bounce_angle`. Each hit speeds the ball up,
/// capped at `max_speed`.
pub fn bounce_off_paddle(
    ball: &mut Ball,
    side: Side,
    paddle: Rect,
    radius: f32,
    max_speed: f32,
    config: &Config,
) -> bool {
    if !side.is_approached_by(ball.vel.x) || !paddle.spans_y(ball.pos.y) {
        return false;
    }
    let touching = match side {
        Side::Left => ball.pos.x - radius < paddle.right(),
        Side::Right => ball.pos.x + radius > paddle.x,
    };
    if !touching {
        return false;
    }

    // Push ball out to the paddle face
    ball.pos.x = match side {
        Side::Left => paddle.right() + radius,
        Side::Right => paddle.x - radius,
    };

    let half_height = paddle.h / 2.0;
    let rel = ((ball.pos.y - paddle.center().y) / half_height).clamp(-1.0, 1.0);
    let angle = rel * config.max_bounce_angle;
    let speed = (ball.speed() * config.ball_speed_increase).min(max_speed);

    // Outgoing travel is toward the other side
    let dir = side.opposite().direction();
    ball.vel = Vec2::new(angle.cos() * speed * dir, angle.sin() * speed);
    true
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, viewport: &Viewport, config: &Config, events: &mut Events) {
    let dims = viewport.dimensions();
    let max_speed = viewport.max_ball_speed();

    // Collect paddle rects before borrowing the ball mutably
    let paddles: Vec<(Side, Rect)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, viewport.paddle_rect(p.side, p.y)))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if reflect_off_walls(ball, dims.ball_radius, viewport.height()) {
            events.ball_hit_wall = true;
        }

        for &(side, rect) in &paddles {
            if bounce_off_paddle(ball, side, rect, dims.ball_radius, max_speed, config) {
                events.ball_hit_paddle = true;
            }
        }
    }
}
