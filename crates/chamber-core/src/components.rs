//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components. Every entity also
//! carries a `Position`.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Hostile chaser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Distance covered per tick while alive.
    pub speed: f64,
    pub alive: bool,
    /// Ticks since death started (0 while alive).
    pub death_time: u32,
    /// Death countdown length; removed once `death_time >= death_duration`.
    pub death_duration: u32,
    /// Separation radius used by steering.
    pub avoid_radius: f64,
    pub color: [u8; 3],
}

/// Player projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    /// Unit direction of travel.
    pub dir_x: f64,
    pub dir_y: f64,
    /// Ticks alive, drives the cosmetic trail.
    pub trail_counter: u32,
}

/// Collectible world power-up. Distinct from instant pickups: it grants a
/// timed effect and despawns on its own after `lifespan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    /// Simulation time the power-up appeared.
    pub created_at: f64,
    /// Seconds before it despawns uncollected.
    pub lifespan: f64,
    /// Effect length once collected (seconds).
    pub duration: f64,
}

/// Instant pickup (coin/ammo/health).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
    /// Remaining ticks before it vanishes.
    pub ttl: u32,
    /// One-way flag; once set the pickup shrinks and then applies its effect.
    pub picked: bool,
    pub size: f64,
    pub shrink_rate: f64,
}

/// Cosmetic particle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub vx: f64,
    pub vy: f64,
    pub life: u32,
    pub max_life: u32,
    pub color: [u8; 3],
    pub size: f64,
}

/// Floating text popup (e.g. "+10").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Popup {
    pub text: String,
    pub life: u32,
    pub vy: f64,
    pub color: [u8; 3],
}
