//! Enemy update: steering, death countdown, and contact with the player.
//!
//! Enemies are updated one after another against a working copy of the
//! roster, so each enemy steers around its neighbors' already-updated
//! positions and an enemy killed earlier in the pass no longer repels.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use chamber_ai::steering::{steer, SteeringContext};
use chamber_core::components::Enemy;
use chamber_core::constants::*;
use chamber_core::enums::{KillCause, PickupKind};
use chamber_core::events::GameEvent;
use chamber_core::player::Player;
use chamber_core::types::Position;

use crate::world_setup;

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: &mut Player,
    enemy_speed: f64,
    shield_active: bool,
    events: &mut Vec<GameEvent>,
) {
    let mut roster: Vec<(Entity, Position, Enemy)> = world
        .query::<(&Position, &Enemy)>()
        .iter()
        .map(|(entity, (pos, enemy))| (entity, *pos, enemy.clone()))
        .collect();

    let contact_sq = (ENEMY_BODY_RADIUS + PLAYER_RADIUS).powi(2);

    for i in 0..roster.len() {
        roster[i].2.speed = enemy_speed;

        if roster[i].2.alive {
            let neighbors: Vec<Position> = roster
                .iter()
                .enumerate()
                .filter(|(j, (_, _, other))| *j != i && other.alive)
                .map(|(_, (_, pos, _))| *pos)
                .collect();
            let (_, pos, enemy) = &roster[i];
            let ctx = SteeringContext {
                position: *pos,
                target: player.position,
                speed: enemy.speed,
                avoid_radius: enemy.avoid_radius,
            };
            let step = steer(&ctx, &neighbors);
            let next = pos.offset(step.x, step.y);
            roster[i].1 = next;
        } else {
            roster[i].2.death_time += 1;
        }

        let (_, pos, enemy) = &mut roster[i];
        if !enemy.alive || pos.distance_sq_to(&player.position) > contact_sq {
            continue;
        }

        if shield_active {
            let dx = pos.x - player.position.x;
            let dy = pos.y - player.position.y;
            let dist = (dx * dx + dy * dy).sqrt();
            let (nx, ny) = if dist == 0.0 {
                let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
                (angle.cos(), angle.sin())
            } else {
                (dx / dist, dy / dist)
            };
            *pos = pos.offset(nx * SHIELD_PUSH_IMPULSE, ny * SHIELD_PUSH_IMPULSE);
            world_setup::spawn_particles(world, rng, *pos, enemy.color, SHIELD_SPARK_PARTICLES);
            events.push(GameEvent::ShieldBlocked { position: *pos });
        } else {
            enemy.alive = false;
            enemy.death_time = 0;
            player.take_hit();
            world_setup::spawn_particles(world, rng, *pos, enemy.color, CONTACT_BURST_PARTICLES);
            world_setup::spawn_pickup(world, *pos, PickupKind::Coin);
            events.push(GameEvent::EnemyKilled {
                position: *pos,
                cause: KillCause::Contact,
            });
            events.push(GameEvent::PlayerHit { hp: player.hp });
        }
    }

    for (entity, pos, enemy) in roster {
        if let Ok((p, e)) = world.query_one_mut::<(&mut Position, &mut Enemy)>(entity) {
            *p = pos;
            *e = enemy;
        }
    }
}
