//! Cleanup system: removes enemies whose death animation has finished.

use hecs::{Entity, World};

use chamber_core::components::Enemy;

/// Remove dead enemies once `death_time >= death_duration`.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if !enemy.alive && enemy.death_time >= enemy.death_duration {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// True while any enemy is still alive.
pub fn any_enemy_alive(world: &World) -> bool {
    world.query::<&Enemy>().iter().any(|(_, enemy)| enemy.alive)
}
