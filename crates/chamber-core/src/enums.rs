//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Timed effect granted by a world power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Halves the shoot delay.
    RapidFire,
    /// Multiplies player speed by 1.5.
    SpeedBoost,
    /// Holds the shield up until the effect expires.
    Invincibility,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::RapidFire,
        PowerUpKind::SpeedBoost,
        PowerUpKind::Invincibility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RapidFire => "rapid_fire",
            Self::SpeedBoost => "speed_boost",
            Self::Invincibility => "invincibility",
        }
    }
}

/// Instant pickup dropped by enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    Coin,
    Ammo,
    Health,
}

/// Top-level scenes. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneId {
    #[default]
    Menu,
    Settings,
    Upgrades,
    Game,
}

/// Simulation session phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session in progress (menus).
    #[default]
    Idle,
    Active,
    Paused,
}

/// Upgrade category: repeatable stat bumps or one-time power-up unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeCategory {
    Stat,
    PowerUp,
}

/// What killed an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KillCause {
    Bullet,
    Contact,
}

/// Price of the next level of an upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeCost {
    Price(u32),
    /// One-time unlock already purchased.
    Unlocked,
}
