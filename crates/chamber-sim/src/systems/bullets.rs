//! Bullet flight and bullet-enemy hits.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use chamber_core::components::{Bullet, Enemy};
use chamber_core::constants::*;
use chamber_core::enums::{KillCause, PowerUpKind};
use chamber_core::events::GameEvent;
use chamber_core::types::Position;

use crate::systems::loot;
use crate::world_setup;

/// Advance every bullet, cull those leaving the world, and resolve hits.
/// A bullet kills at most one enemy and is consumed by the hit.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    bullet_speed: f64,
    score: &mut u32,
    unlocked: &[PowerUpKind],
    now: f64,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let mut bullets: Vec<(Entity, Position, Bullet)> = world
        .query::<(&Position, &Bullet)>()
        .iter()
        .map(|(entity, (pos, bullet))| (entity, *pos, bullet.clone()))
        .collect();
    let mut targets: Vec<(Entity, Position, bool, [u8; 3])> = world
        .query::<(&Position, &Enemy)>()
        .iter()
        .map(|(entity, (pos, enemy))| (entity, *pos, enemy.alive, enemy.color))
        .collect();
    let mut killed: Vec<Entity> = Vec::new();

    for (entity, pos, bullet) in bullets.iter_mut() {
        *pos = pos.offset(bullet.dir_x * bullet_speed, bullet.dir_y * bullet_speed);
        bullet.trail_counter += 1;
        if bullet.trail_counter % BULLET_TRAIL_INTERVAL == 0 {
            world_setup::spawn_particles(world, rng, *pos, ACCENT, 1);
        }

        if pos.x < 0.0 || pos.x > WORLD_WIDTH || pos.y < 0.0 || pos.y > WORLD_HEIGHT {
            despawn_buffer.push(*entity);
            continue;
        }

        let here = *pos;
        let hit = targets.iter_mut().find(|(_, enemy_pos, alive, _)| {
            *alive && enemy_pos.within(&here, ENEMY_HIT_RADIUS + BULLET_RADIUS)
        });
        if let Some((enemy_entity, enemy_pos, alive, color)) = hit {
            *alive = false;
            killed.push(*enemy_entity);
            *score += SCORE_PER_KILL;
            world_setup::spawn_particles(world, rng, *enemy_pos, *color, KILL_BURST_PARTICLES);
            let drop = loot::drop_loot(world, rng, *enemy_pos, unlocked, now);
            tracing::debug!(?drop, "Enemy shot down");
            events.push(GameEvent::EnemyKilled {
                position: *enemy_pos,
                cause: KillCause::Bullet,
            });
            despawn_buffer.push(*entity);
        }
    }

    for enemy_entity in killed {
        if let Ok(mut enemy) = world.get::<&mut Enemy>(enemy_entity) {
            enemy.alive = false;
            enemy.death_time = 0;
        }
    }

    for (entity, pos, bullet) in bullets {
        if let Ok((p, b)) = world.query_one_mut::<(&mut Position, &mut Bullet)>(entity) {
            *p = pos;
            *b = bullet;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chamber_core::components::{Pickup, PowerUp};
    use rand::SeedableRng;

    fn loot_count(world: &World) -> usize {
        world.query::<&Pickup>().iter().count() + world.query::<&PowerUp>().iter().count()
    }

    #[test]
    fn bullet_leaving_the_world_is_removed() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let b = world_setup::spawn_bullet(&mut world, Position::new(WORLD_WIDTH - 2.0, 100.0), 1.0, 0.0);
        let mut score = 0;
        let mut events = Vec::new();
        let mut buffer = Vec::new();
        run(&mut world, &mut rng, 8.0, &mut score, &[], 0.0, &mut events, &mut buffer);
        assert!(!world.contains(b));
    }

    #[test]
    fn coincident_bullet_always_hits() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let spot = Position::new(500.0, 500.0);
        let e = world_setup::spawn_enemy(&mut world, &mut rng, spot, 1.0);
        // Zero direction keeps the bullet exactly on the enemy.
        let b = world_setup::spawn_bullet(&mut world, spot, 0.0, 0.0);
        let mut score = 0;
        let mut events = Vec::new();
        let mut buffer = Vec::new();
        run(&mut world, &mut rng, 8.0, &mut score, &[], 0.0, &mut events, &mut buffer);

        assert!(!world.get::<&Enemy>(e).unwrap().alive);
        assert!(!world.contains(b));
        assert_eq!(score, SCORE_PER_KILL);
        assert_eq!(loot_count(&world), 1);
    }

    #[test]
    fn one_bullet_kills_at_most_one_enemy() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let spot = Position::new(500.0, 500.0);
        let a = world_setup::spawn_enemy(&mut world, &mut rng, spot, 1.0);
        let b = world_setup::spawn_enemy(&mut world, &mut rng, spot.offset(1.0, 0.0), 1.0);
        world_setup::spawn_bullet(&mut world, spot, 0.0, 0.0);
        let mut score = 0;
        let mut events = Vec::new();
        let mut buffer = Vec::new();
        run(&mut world, &mut rng, 8.0, &mut score, &[], 0.0, &mut events, &mut buffer);

        let alive = [a, b]
            .iter()
            .filter(|e| world.get::<&Enemy>(**e).unwrap().alive)
            .count();
        assert_eq!(alive, 1);
        assert_eq!(score, SCORE_PER_KILL);
    }

    #[test]
    fn dead_enemies_are_not_hit_again() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let spot = Position::new(500.0, 500.0);
        let e = world_setup::spawn_enemy(&mut world, &mut rng, spot, 1.0);
        world.get::<&mut Enemy>(e).unwrap().alive = false;
        let b = world_setup::spawn_bullet(&mut world, spot, 0.0, 0.0);
        let mut score = 0;
        let mut events = Vec::new();
        let mut buffer = Vec::new();
        run(&mut world, &mut rng, 8.0, &mut score, &[], 0.0, &mut events, &mut buffer);

        assert!(world.contains(b));
        assert_eq!(score, 0);
        assert_eq!(loot_count(&world), 0);
    }
}
