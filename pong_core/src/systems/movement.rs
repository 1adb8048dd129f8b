use hecs::World;

use crate::components::Ball;
use crate::config::Config;

/// Move ball based on velocity and advance its cosmetic spin
pub fn move_ball(world: &mut World, config: &Config, dt: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * dt;
        ball.rotation += ball.speed() * config.ball_spin_rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    #[test]
    fn test_ball_integrates_velocity() {
        let mut world = World::new();
        let config = Config::new();
        create_ball(&mut world, Vec2::new(100.0, 100.0), Vec2::new(6.0, -8.0));

        move_ball(&mut world, &config, 0.5);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(103.0, 96.0));
            assert!((ball.rotation - 10.0 * config.ball_spin_rate).abs() < 1e-6);
        }
    }

    #[test]
    fn test_zero_dt_keeps_position() {
        let mut world = World::new();
        let config = Config::new();
        create_ball(&mut world, Vec2::new(50.0, 60.0), Vec2::new(6.0, 6.0));

        move_ball(&mut world, &config, 0.0);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(50.0, 60.0));
        }
    }
}
