//! Player movement: held directions, world clamp, obstacle rollback.

use chamber_core::commands::Movement;
use chamber_core::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use chamber_core::player::Player;
use chamber_core::types::Rect;

/// Move the player by `speed` along each held axis. Overlapping any
/// obstacle reverts to the position at the start of the tick.
pub fn run(player: &mut Player, movement: Movement, speed: f64, obstacles: &[Rect]) {
    player.previous = player.position;

    let mut dx = 0.0;
    let mut dy = 0.0;
    if movement.left {
        dx -= speed;
    }
    if movement.right {
        dx += speed;
    }
    if movement.up {
        dy -= speed;
    }
    if movement.down {
        dy += speed;
    }

    player.position = player
        .position
        .offset(dx, dy)
        .clamped(WORLD_WIDTH, WORLD_HEIGHT);

    let body = player.collision_box();
    if obstacles.iter().any(|o| o.overlaps(&body)) {
        player.position = player.previous;
    }
}
