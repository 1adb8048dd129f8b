use hecs::World;

use crate::components::{Paddle, Side};
use crate::geometry::Viewport;
use crate::resources::InputSnapshot;

/// Center the player paddle on the pointer. No pointer yet means no movement.
pub fn apply_player_input(world: &mut World, viewport: &Viewport, input: &InputSnapshot) {
    let Some(pointer_y) = input.pointer_y.filter(|y| y.is_finite()) else {
        return;
    };
    let half_height = viewport.dimensions().paddle_height / 2.0;

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Left {
            paddle.y = viewport.clamp_paddle_y(pointer_y - half_height);
        }
    }
}
