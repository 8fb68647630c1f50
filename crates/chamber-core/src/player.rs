//! The player record. Owned by the simulation engine, not stored in the ECS world.

use serde::{Deserialize, Serialize};

use crate::constants::{PLAYER_MAX_HP, PLAYER_SIZE, WORLD_HEIGHT, WORLD_WIDTH};
use crate::types::{Position, Rect};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    /// Position at the start of the current tick, restored on obstacle overlap.
    pub previous: Position,
    pub hp: u32,
    pub max_hp: u32,
    pub ammo: u32,
    pub max_ammo: u32,
    /// Side of the square collision box.
    pub size: f64,
}

impl Player {
    /// New player at the world center with full health and ammo.
    pub fn new(max_ammo: u32) -> Self {
        let center = Position::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);
        Self {
            position: center,
            previous: center,
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
            ammo: max_ammo,
            max_ammo,
            size: PLAYER_SIZE,
        }
    }

    /// Return to the world center at full health and ammo.
    pub fn reset(&mut self, max_ammo: u32) {
        *self = Self::new(max_ammo);
    }

    pub fn collision_box(&self) -> Rect {
        Rect::centered(self.position, self.size)
    }

    /// Lose one hit point, never going below zero.
    pub fn take_hit(&mut self) {
        self.hp = self.hp.saturating_sub(1);
    }

    pub fn heal(&mut self, amount: u32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    pub fn refill_ammo(&mut self, amount: u32) {
        self.ammo = (self.ammo + amount).min(self.max_ammo);
    }

    /// Change the magazine size, keeping `ammo <= max_ammo`.
    pub fn set_max_ammo(&mut self, max_ammo: u32) {
        self.max_ammo = max_ammo;
        self.ammo = self.ammo.min(max_ammo);
    }

    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }
}
