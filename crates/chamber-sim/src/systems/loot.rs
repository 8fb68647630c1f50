//! Loot dropped by enemies killed with a bullet.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use chamber_core::constants::{LOOT_AMMO_CHANCE, LOOT_COIN_CHANCE, LOOT_POWER_UP_CHANCE};
use chamber_core::enums::{PickupKind, PowerUpKind};
use chamber_core::types::Position;

use crate::world_setup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loot {
    Pickup(PickupKind),
    PowerUp(PowerUpKind),
}

/// Map two uniform rolls in `[0, 1)` to a drop. The primary roll splits
/// coin / ammo / other; for "other" the secondary roll decides between a
/// power-up (only if any are unlocked, picked by `choice`) and health.
pub fn classify_loot(primary: f64, secondary: f64, unlocked: &[PowerUpKind], choice: usize) -> Loot {
    if primary < LOOT_COIN_CHANCE {
        Loot::Pickup(PickupKind::Coin)
    } else if primary < LOOT_AMMO_CHANCE {
        Loot::Pickup(PickupKind::Ammo)
    } else if secondary < LOOT_POWER_UP_CHANCE && !unlocked.is_empty() {
        Loot::PowerUp(unlocked[choice % unlocked.len()])
    } else {
        Loot::Pickup(PickupKind::Health)
    }
}

/// Roll and spawn exactly one loot item at `position`.
pub fn drop_loot(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    position: Position,
    unlocked: &[PowerUpKind],
    now: f64,
) -> Loot {
    let primary: f64 = rng.gen();
    let secondary: f64 = rng.gen();
    let choice = if unlocked.is_empty() {
        0
    } else {
        rng.gen_range(0..unlocked.len())
    };
    let loot = classify_loot(primary, secondary, unlocked, choice);
    match loot {
        Loot::Pickup(kind) => {
            world_setup::spawn_pickup(world, position, kind);
        }
        Loot::PowerUp(kind) => {
            world_setup::spawn_power_up(world, position, kind, now);
        }
    }
    loot
}
