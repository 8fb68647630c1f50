//! Tunable game settings.
//!
//! The six keyed tunables are editable from the settings scene within their
//! clamp ranges. Upgrades add to them directly without clamping.

use serde::{Deserialize, Serialize};

/// Keys of the user-editable tunables, in settings-scene order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingKey {
    PlayerSpeed,
    EnemyCount,
    EnemySpeed,
    FpsLimit,
    MaxAmmo,
    BulletSpeed,
}

/// Clamp range and step for one tunable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SettingKey {
    pub const ALL: [SettingKey; 6] = [
        SettingKey::PlayerSpeed,
        SettingKey::EnemyCount,
        SettingKey::EnemySpeed,
        SettingKey::FpsLimit,
        SettingKey::MaxAmmo,
        SettingKey::BulletSpeed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlayerSpeed => "player_speed",
            Self::EnemyCount => "enemy_count",
            Self::EnemySpeed => "enemy_speed",
            Self::FpsLimit => "fps_limit",
            Self::MaxAmmo => "max_ammo",
            Self::BulletSpeed => "bullet_speed",
        }
    }

    pub fn range(&self) -> SettingRange {
        let (min, max, step) = match self {
            Self::PlayerSpeed => (1.0, 20.0, 1.0),
            Self::EnemyCount => (1.0, 50.0, 1.0),
            Self::EnemySpeed => (0.1, 10.0, 0.1),
            Self::FpsLimit => (15.0, 240.0, 5.0),
            Self::MaxAmmo => (1.0, 99.0, 1.0),
            Self::BulletSpeed => (1.0, 30.0, 1.0),
        };
        SettingRange { min, max, step }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Player displacement per tick.
    pub player_speed: f64,
    /// Base enemy count, used by waves that omit an explicit count.
    pub enemy_count: f64,
    /// Enemy displacement per tick.
    pub enemy_speed: f64,
    /// Target frames (ticks) per second.
    pub fps_limit: f64,
    pub max_ammo: f64,
    /// Bullet displacement per tick.
    pub bullet_speed: f64,
    /// Seconds the shield stays up once activated.
    pub shield_duration: f64,
    /// Seconds between shield activations.
    pub shield_cooldown: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_speed: 3.0,
            enemy_count: 3.0,
            enemy_speed: 1.2,
            fps_limit: 60.0,
            max_ammo: 12.0,
            bullet_speed: 8.0,
            shield_duration: 3.0,
            shield_cooldown: 10.0,
        }
    }
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> f64 {
        match key {
            SettingKey::PlayerSpeed => self.player_speed,
            SettingKey::EnemyCount => self.enemy_count,
            SettingKey::EnemySpeed => self.enemy_speed,
            SettingKey::FpsLimit => self.fps_limit,
            SettingKey::MaxAmmo => self.max_ammo,
            SettingKey::BulletSpeed => self.bullet_speed,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: f64) {
        let slot = match key {
            SettingKey::PlayerSpeed => &mut self.player_speed,
            SettingKey::EnemyCount => &mut self.enemy_count,
            SettingKey::EnemySpeed => &mut self.enemy_speed,
            SettingKey::FpsLimit => &mut self.fps_limit,
            SettingKey::MaxAmmo => &mut self.max_ammo,
            SettingKey::BulletSpeed => &mut self.bullet_speed,
        };
        *slot = value;
    }

    /// Step a tunable up (`direction > 0`) or down by its range step,
    /// clamped to its range. Values are rounded to two decimals so repeated
    /// 0.1 steps do not drift.
    pub fn adjust(&mut self, key: SettingKey, direction: i32) {
        let range = key.range();
        let raw = self.get(key) + range.step * f64::from(direction.signum());
        let rounded = (raw * 100.0).round() / 100.0;
        self.set(key, rounded.clamp(range.min, range.max));
    }

    pub fn enemy_count(&self) -> u32 {
        self.enemy_count.max(0.0) as u32
    }

    pub fn max_ammo(&self) -> u32 {
        self.max_ammo.max(0.0) as u32
    }

    /// Seconds per tick at the configured frame rate.
    pub fn tick_duration(&self) -> f64 {
        1.0 / self.fps_limit.max(1.0)
    }
}
