//! Active power-up effects and the per-tick stat modifiers they grant.

use std::collections::BTreeMap;

use chamber_core::constants::{RAPID_FIRE_DIVISOR, SHOOT_DELAY, SPEED_BOOST_FACTOR};
use chamber_core::enums::PowerUpKind;
use chamber_core::settings::Settings;

/// Effect kind -> expiry timestamp (simulation seconds).
#[derive(Debug, Clone, Default)]
pub struct ActivePowerUps {
    expiries: BTreeMap<PowerUpKind, f64>,
}

impl ActivePowerUps {
    /// Start (or refresh) an effect lasting `duration` seconds from `now`.
    pub fn activate(&mut self, kind: PowerUpKind, now: f64, duration: f64) {
        self.expiries.insert(kind, now + duration);
    }

    /// Drop every effect whose expiry is at or before `now`.
    pub fn expire(&mut self, now: f64) {
        self.expiries.retain(|_, expiry| *expiry > now);
    }

    /// True while the effect's expiry is still ahead of `now`. An entry that
    /// has run out counts as inactive even before `expire` drops it.
    pub fn is_active(&self, kind: PowerUpKind, now: f64) -> bool {
        self.expiries.get(&kind).is_some_and(|expiry| *expiry > now)
    }

    pub fn expiry(&self, kind: PowerUpKind) -> Option<f64> {
        self.expiries.get(&kind).copied()
    }

    /// `(kind, seconds remaining)` for the HUD.
    pub fn remaining(&self, now: f64) -> Vec<(PowerUpKind, f64)> {
        self.expiries
            .iter()
            .map(|(kind, expiry)| (*kind, (expiry - now).max(0.0)))
            .collect()
    }

    pub fn clear(&mut self) {
        self.expiries.clear();
    }
}

/// Player stats for the current tick after power-up modifiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveStats {
    pub speed: f64,
    pub shoot_delay: f64,
}

pub fn effective_stats(active: &ActivePowerUps, settings: &Settings, now: f64) -> EffectiveStats {
    let mut speed = settings.player_speed;
    let mut shoot_delay = SHOOT_DELAY;
    if active.is_active(PowerUpKind::SpeedBoost, now) {
        speed *= SPEED_BOOST_FACTOR;
    }
    if active.is_active(PowerUpKind::RapidFire, now) {
        shoot_delay /= RAPID_FIRE_DIVISOR;
    }
    EffectiveStats { speed, shoot_delay }
}

/// Expire finished effects, hold the shield up through invincibility, and
/// return this tick's effective stats.
pub fn run(
    active: &mut ActivePowerUps,
    settings: &Settings,
    shield_end: &mut f64,
    now: f64,
) -> EffectiveStats {
    active.expire(now);
    if let Some(expiry) = active.expiry(PowerUpKind::Invincibility) {
        *shield_end = shield_end.max(expiry);
    }
    effective_stats(active, settings, now)
}
