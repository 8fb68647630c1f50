//! Entity spawn factories.
//!
//! Creates enemies, bullets, loot, and cosmetic entities with the
//! appropriate component bundles. Every entity carries a `Position`.

use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use chamber_core::components::*;
use chamber_core::constants::*;
use chamber_core::enums::*;
use chamber_core::types::Position;

/// Spawn `count` enemies on a ring around `center`: uniform angle, radius
/// uniform in `[SPAWN_RADIUS_MIN, SPAWN_RADIUS_MAX]`, clamped into the world.
pub fn spawn_enemy_ring(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    center: Position,
    count: u32,
    speed: f64,
) {
    for _ in 0..count {
        let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let radius: f64 = rng.gen_range(SPAWN_RADIUS_MIN..=SPAWN_RADIUS_MAX);
        let position = center
            .offset(angle.cos() * radius, angle.sin() * radius)
            .clamped(WORLD_WIDTH, WORLD_HEIGHT);
        spawn_enemy(world, rng, position, speed);
    }
}

/// Spawn a single alive enemy with a random palette tint.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    position: Position,
    speed: f64,
) -> Entity {
    let color = *ENEMY_PALETTE.choose(rng).unwrap_or(&ACCENT);
    world.spawn((
        position,
        Enemy {
            speed,
            alive: true,
            death_time: 0,
            death_duration: ENEMY_DEATH_DURATION,
            avoid_radius: ENEMY_AVOID_RADIUS,
            color,
        },
    ))
}

/// Spawn a bullet travelling along the unit vector `(dir_x, dir_y)`.
pub fn spawn_bullet(world: &mut World, position: Position, dir_x: f64, dir_y: f64) -> Entity {
    world.spawn((
        position,
        Bullet {
            dir_x,
            dir_y,
            trail_counter: 0,
        },
    ))
}

pub fn spawn_pickup(world: &mut World, position: Position, kind: PickupKind) -> Entity {
    world.spawn((
        position,
        Pickup {
            kind,
            ttl: PICKUP_TTL,
            picked: false,
            size: PICKUP_SIZE,
            shrink_rate: PICKUP_SHRINK_RATE,
        },
    ))
}

/// Spawn a collectible power-up. Its effect length depends on the kind.
pub fn spawn_power_up(world: &mut World, position: Position, kind: PowerUpKind, now: f64) -> Entity {
    let duration = match kind {
        PowerUpKind::RapidFire => RAPID_FIRE_DURATION,
        PowerUpKind::SpeedBoost => SPEED_BOOST_DURATION,
        PowerUpKind::Invincibility => INVINCIBILITY_DURATION,
    };
    world.spawn((
        position,
        PowerUp {
            kind,
            created_at: now,
            lifespan: POWER_UP_LIFESPAN,
            duration,
        },
    ))
}

/// Burst of `count` cosmetic particles.
pub fn spawn_particles(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    position: Position,
    color: [u8; 3],
    count: usize,
) {
    for _ in 0..count {
        let life = rng.gen_range(PARTICLE_LIFE_MIN..=PARTICLE_LIFE_MAX);
        let particle = Particle {
            vx: rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
            vy: rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
            life,
            max_life: life,
            color,
            size: rng.gen_range(2.0..=4.0),
        };
        world.spawn((position, particle));
    }
}

/// Floating text a little above `position`.
pub fn spawn_popup(world: &mut World, position: Position, text: &str, color: [u8; 3]) -> Entity {
    world.spawn((
        position.offset(0.0, -8.0),
        Popup {
            text: text.to_string(),
            life: POPUP_LIFE,
            vy: POPUP_RISE_SPEED,
            color,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn ring_spawns_alive_enemies_between_the_radii() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let center = Position::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);
        spawn_enemy_ring(&mut world, &mut rng, center, 40, 2.0);

        let mut count = 0;
        for (_, (pos, enemy)) in world.query::<(&Position, &Enemy)>().iter() {
            let d = pos.distance_to(&center);
            assert!((SPAWN_RADIUS_MIN - 1e-9..=SPAWN_RADIUS_MAX + 1e-9).contains(&d));
            assert!(enemy.alive);
            assert_eq!(enemy.speed, 2.0);
            assert!(ENEMY_PALETTE.contains(&enemy.color));
            count += 1;
        }
        assert_eq!(count, 40);
    }

    #[test]
    fn ring_near_a_corner_stays_inside_the_world() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        spawn_enemy_ring(&mut world, &mut rng, Position::new(0.0, 0.0), 30, 1.0);

        for (_, (pos, _)) in world.query::<(&Position, &Enemy)>().iter() {
            assert!((0.0..=WORLD_WIDTH).contains(&pos.x));
            assert!((0.0..=WORLD_HEIGHT).contains(&pos.y));
        }
    }

    #[test]
    fn power_up_duration_depends_on_kind() {
        let mut world = World::new();
        let e = spawn_power_up(&mut world, Position::new(5.0, 5.0), PowerUpKind::SpeedBoost, 3.0);
        let power_up = world.get::<&PowerUp>(e).unwrap();
        assert_eq!(power_up.duration, SPEED_BOOST_DURATION);
        assert_eq!(power_up.created_at, 3.0);
        assert_eq!(power_up.lifespan, POWER_UP_LIFESPAN);
    }
}
