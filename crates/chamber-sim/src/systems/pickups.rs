//! Instant pickups: lifetime, magnet pull, collection and the shrink
//! animation that precedes the effect.

use hecs::{Entity, World};

use chamber_core::components::Pickup;
use chamber_core::constants::*;
use chamber_core::enums::PickupKind;
use chamber_core::events::GameEvent;
use chamber_core::player::Player;
use chamber_core::types::Position;

use crate::world_setup;

/// A pickup is marked `picked` on contact, shrinks on later ticks, and
/// applies its effect exactly once when its size reaches zero, in the same
/// pass that removes it.
pub fn run(
    world: &mut World,
    player: &mut Player,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let mut consumed: Vec<(PickupKind, Position)> = Vec::new();
    let collect_sq = PICKUP_COLLECT_RADIUS * PICKUP_COLLECT_RADIUS;

    for (entity, (pos, pickup)) in world.query_mut::<(&mut Position, &mut Pickup)>() {
        pickup.ttl = pickup.ttl.saturating_sub(1);
        if pickup.ttl == 0 {
            despawn_buffer.push(entity);
            continue;
        }

        if !pickup.picked {
            let dx = player.position.x - pos.x;
            let dy = player.position.y - pos.y;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > 0.0 && dist < MAGNET_RADIUS {
                // Unit direction times MAGNET_STRENGTH * dist.
                pos.x += dx * MAGNET_STRENGTH;
                pos.y += dy * MAGNET_STRENGTH;
            }
        }

        if pickup.picked {
            pickup.size = (pickup.size - pickup.shrink_rate).max(0.0);
            if pickup.size <= 0.0 {
                consumed.push((pickup.kind, *pos));
                despawn_buffer.push(entity);
            }
        } else if pos.distance_sq_to(&player.position) <= collect_sq {
            pickup.picked = true;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for (kind, pos) in consumed {
        apply(world, player, score, kind, pos);
        events.push(GameEvent::PickupCollected { kind });
    }
}

fn apply(world: &mut World, player: &mut Player, score: &mut u32, kind: PickupKind, pos: Position) {
    match kind {
        PickupKind::Coin => {
            *score += SCORE_PER_COIN;
            world_setup::spawn_popup(world, pos, &format!("+{SCORE_PER_COIN}"), FOAM);
        }
        PickupKind::Ammo => {
            player.refill_ammo(AMMO_PICKUP_MIN.max(player.max_ammo / 2));
            world_setup::spawn_popup(world, pos, "+Ammo", GREEN);
        }
        PickupKind::Health => {
            player.heal(HEALTH_PICKUP_AMOUNT);
            world_setup::spawn_popup(world, pos, "+HP", RED);
        }
    }
}
