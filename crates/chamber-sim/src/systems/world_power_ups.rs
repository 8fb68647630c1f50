//! Collectible power-ups lying in the world.

use hecs::{Entity, World};

use chamber_core::components::PowerUp;
use chamber_core::constants::POWER_UP_PICKUP_DISTANCE;
use chamber_core::events::GameEvent;
use chamber_core::types::Position;

use crate::systems::power_ups::ActivePowerUps;

/// Despawn expired power-ups; collect those the player is touching.
pub fn run(
    world: &mut World,
    player_position: Position,
    active: &mut ActivePowerUps,
    now: f64,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (entity, (pos, power_up)) in world.query_mut::<(&Position, &PowerUp)>() {
        if now - power_up.created_at > power_up.lifespan {
            despawn_buffer.push(entity);
            continue;
        }
        if pos.distance_to(&player_position) < POWER_UP_PICKUP_DISTANCE {
            active.activate(power_up.kind, now, power_up.duration);
            tracing::info!(kind = power_up.kind.as_str(), duration = power_up.duration, "Power-up collected");
            events.push(GameEvent::PowerUpCollected {
                kind: power_up.kind,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
