use serde::{Deserialize, Serialize};
use thiserror::Error;

use chamber_core::enums::{PowerUpKind, UpgradeCategory, UpgradeCost};
use chamber_core::settings::{SettingKey, Settings};

/// What an upgrade modifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeKey {
    /// Adds `increment` to a keyed setting.
    Setting(SettingKey),
    /// Adds `increment` seconds of shield uptime.
    ShieldDuration,
    /// Removes `increment` seconds of shield cooldown, floored at zero.
    ShieldCooldown,
    /// Adds the power-up to the drop pool.
    PowerUp(PowerUpKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpgradeError {
    #[error("no upgrade at index {0}")]
    UnknownUpgrade(usize),
    #[error("{0} is already unlocked")]
    AlreadyUnlocked(String),
    #[error("insufficient coins: have {have}, need {need}")]
    InsufficientFunds { have: u32, need: u32 },
}

/// Receipt for a successful purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purchase {
    pub cost: u32,
    pub new_level: u32,
    pub key: UpgradeKey,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Upgrade {
    pub name: String,
    pub key: UpgradeKey,
    pub increment: f64,
    pub base_cost: u32,
    pub cost_scaling: f64,
    pub level: u32,
    pub category: UpgradeCategory,
}

impl Upgrade {
    pub fn stat(name: &str, key: UpgradeKey, increment: f64, base_cost: u32, cost_scaling: f64) -> Self {
        Self {
            name: name.to_string(),
            key,
            increment,
            base_cost,
            cost_scaling,
            level: 0,
            category: UpgradeCategory::Stat,
        }
    }

    pub fn power_up(name: &str, kind: PowerUpKind, cost: u32) -> Self {
        Self {
            name: name.to_string(),
            key: UpgradeKey::PowerUp(kind),
            increment: 0.0,
            base_cost: cost,
            cost_scaling: 1.0,
            level: 0,
            category: UpgradeCategory::PowerUp,
        }
    }

    /// Price of the next level: `floor(base_cost * cost_scaling^level)` for
    /// stats, a flat price or `Unlocked` for power-ups.
    pub fn cost(&self) -> UpgradeCost {
        match self.category {
            UpgradeCategory::Stat => {
                let scaled = f64::from(self.base_cost) * self.cost_scaling.powi(self.level as i32);
                UpgradeCost::Price(scaled.floor() as u32)
            }
            UpgradeCategory::PowerUp if self.level > 0 => UpgradeCost::Unlocked,
            UpgradeCategory::PowerUp => UpgradeCost::Price(self.base_cost),
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.category == UpgradeCategory::PowerUp && self.level > 0
    }

    fn apply(&self, settings: &mut Settings) {
        match self.key {
            UpgradeKey::Setting(key) => settings.set(key, settings.get(key) + self.increment),
            UpgradeKey::ShieldDuration => settings.shield_duration += self.increment,
            UpgradeKey::ShieldCooldown => {
                settings.shield_cooldown = (settings.shield_cooldown - self.increment).max(0.0);
            }
            UpgradeKey::PowerUp(_) => {}
        }
    }
}

/// The purchasable upgrade catalogue and its levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeBook {
    pub upgrades: Vec<Upgrade>,
}

impl Default for UpgradeBook {
    fn default() -> Self {
        Self {
            upgrades: vec![
                Upgrade::stat("Max Ammo", UpgradeKey::Setting(SettingKey::MaxAmmo), 2.0, 20, 1.5),
                Upgrade::stat("Move Speed", UpgradeKey::Setting(SettingKey::PlayerSpeed), 1.0, 25, 1.6),
                Upgrade::stat("Bullet Speed", UpgradeKey::Setting(SettingKey::BulletSpeed), 1.0, 15, 1.4),
                Upgrade::stat("Shield Duration", UpgradeKey::ShieldDuration, 0.5, 30, 1.5),
                Upgrade::stat("Shield Cooldown", UpgradeKey::ShieldCooldown, 0.5, 30, 1.5),
                Upgrade::power_up("Rapid Fire", PowerUpKind::RapidFire, 50),
                Upgrade::power_up("Speed Boost", PowerUpKind::SpeedBoost, 50),
                Upgrade::power_up("Invincibility", PowerUpKind::Invincibility, 80),
            ],
        }
    }
}

impl UpgradeBook {
    pub fn len(&self) -> usize {
        self.upgrades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upgrades.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Upgrade> {
        self.upgrades.get(index)
    }

    /// Buy the next level of an upgrade. On success the price is deducted
    /// from `coins`, the level rises and the effect is applied to
    /// `settings`. On failure nothing changes.
    pub fn purchase(
        &mut self,
        index: usize,
        coins: &mut u32,
        settings: &mut Settings,
    ) -> Result<Purchase, UpgradeError> {
        let upgrade = self
            .upgrades
            .get_mut(index)
            .ok_or(UpgradeError::UnknownUpgrade(index))?;
        let cost = match upgrade.cost() {
            UpgradeCost::Unlocked => return Err(UpgradeError::AlreadyUnlocked(upgrade.name.clone())),
            UpgradeCost::Price(cost) => cost,
        };
        if *coins < cost {
            return Err(UpgradeError::InsufficientFunds {
                have: *coins,
                need: cost,
            });
        }
        *coins -= cost;
        upgrade.level += 1;
        upgrade.apply(settings);
        Ok(Purchase {
            cost,
            new_level: upgrade.level,
            key: upgrade.key,
        })
    }

    /// Power-up kinds that may drop from enemies.
    pub fn unlocked_power_ups(&self) -> Vec<PowerUpKind> {
        self.upgrades
            .iter()
            .filter(|u| u.is_unlocked())
            .filter_map(|u| match u.key {
                UpgradeKey::PowerUp(kind) => Some(kind),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(book: &UpgradeBook, name: &str) -> usize {
        book.upgrades.iter().position(|u| u.name == name).unwrap()
    }

    #[test]
    fn stat_cost_curve_is_exponential_and_floored() {
        let mut up = Upgrade::stat("Test", UpgradeKey::ShieldDuration, 1.0, 10, 1.5);
        assert_eq!(up.cost(), UpgradeCost::Price(10));
        up.level = 1;
        assert_eq!(up.cost(), UpgradeCost::Price(15));
        up.level = 2;
        // floor(10 * 2.25) = 22
        assert_eq!(up.cost(), UpgradeCost::Price(22));
    }

    #[test]
    fn purchase_deducts_and_levels_up() {
        let mut book = UpgradeBook::default();
        let mut settings = Settings::default();
        let mut coins = 100;
        let i = index_of(&book, "Max Ammo");

        let receipt = book.purchase(i, &mut coins, &mut settings).unwrap();
        assert_eq!(receipt.cost, 20);
        assert_eq!(receipt.new_level, 1);
        assert_eq!(coins, 80);
        assert_eq!(settings.max_ammo, 14.0);
        // Next level costs floor(20 * 1.5) = 30.
        assert_eq!(book.get(i).unwrap().cost(), UpgradeCost::Price(30));
    }

    #[test]
    fn purchase_fails_without_funds_and_changes_nothing() {
        let mut book = UpgradeBook::default();
        let mut settings = Settings::default();
        let mut coins = 5;
        let i = index_of(&book, "Move Speed");

        let err = book.purchase(i, &mut coins, &mut settings).unwrap_err();
        assert_eq!(err, UpgradeError::InsufficientFunds { have: 5, need: 25 });
        assert_eq!(coins, 5);
        assert_eq!(book.get(i).unwrap().level, 0);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn shield_upgrades_add_and_subtract() {
        let mut book = UpgradeBook::default();
        let mut settings = Settings::default();
        settings.shield_cooldown = 0.25;
        let mut coins = 1000;

        book.purchase(index_of(&book, "Shield Duration"), &mut coins, &mut settings)
            .unwrap();
        assert_eq!(settings.shield_duration, 3.5);

        book.purchase(index_of(&book, "Shield Cooldown"), &mut coins, &mut settings)
            .unwrap();
        assert_eq!(settings.shield_cooldown, 0.0, "cooldown floors at zero");
    }

    #[test]
    fn power_up_unlock_is_one_time() {
        let mut book = UpgradeBook::default();
        let mut settings = Settings::default();
        let mut coins = 200;
        let i = index_of(&book, "Rapid Fire");
        assert!(book.unlocked_power_ups().is_empty());

        book.purchase(i, &mut coins, &mut settings).unwrap();
        assert_eq!(coins, 150);
        assert_eq!(book.get(i).unwrap().cost(), UpgradeCost::Unlocked);
        assert_eq!(book.unlocked_power_ups(), vec![PowerUpKind::RapidFire]);

        let err = book.purchase(i, &mut coins, &mut settings).unwrap_err();
        assert!(matches!(err, UpgradeError::AlreadyUnlocked(_)));
        assert_eq!(coins, 150);
        assert_eq!(book.get(i).unwrap().level, 1);
    }

    #[test]
    fn unknown_index_is_an_error() {
        let mut book = UpgradeBook::default();
        let mut settings = Settings::default();
        let mut coins = 1000;
        assert_eq!(
            book.purchase(99, &mut coins, &mut settings),
            Err(UpgradeError::UnknownUpgrade(99))
        );
    }
}
