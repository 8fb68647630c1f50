//! Renderer-facing state: the game snapshot built each tick and the
//! per-scene views. Renderers only ever receive these copies, so they cannot
//! mutate simulation state.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Camera, Position, Rect, SimTime};

/// What the active scene wants drawn this frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "scene")]
pub enum Frame {
    Menu(MenuView),
    Settings(SettingsView),
    Upgrades(UpgradesView),
    Game(Box<GameStateSnapshot>),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuView {
    pub title: String,
    pub items: Vec<String>,
    pub selected: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsView {
    /// (label, value) rows.
    pub rows: Vec<(String, f64)>,
    pub selected: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeRow {
    pub name: String,
    pub level: u32,
    pub category: UpgradeCategory,
    pub cost: UpgradeCost,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpgradesView {
    pub rows: Vec<UpgradeRow>,
    pub selected: usize,
    pub coins: u32,
    /// Result of the last purchase attempt.
    pub message: Option<String>,
}

/// Complete visible game state handed to the renderer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub map_name: String,
    pub world_width: f64,
    pub world_height: f64,
    pub camera: Camera,
    pub obstacles: Vec<Rect>,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<Position>,
    pub pickups: Vec<PickupView>,
    pub power_ups: Vec<PowerUpView>,
    pub particles: Vec<ParticleView>,
    pub popups: Vec<PopupView>,
    pub hud: HudView,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub hp: u32,
    pub max_hp: u32,
    pub ammo: u32,
    pub max_ammo: u32,
    /// Remaining shield fraction (0.0 when down).
    pub shield: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub alive: bool,
    /// 0.0 at death start, 1.0 when about to be removed.
    pub death_progress: f64,
    pub color: [u8; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub position: Position,
    pub kind: PickupKind,
    pub size: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub position: Position,
    pub kind: PowerUpKind,
    /// Seconds until it despawns.
    pub remaining_secs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    pub color: [u8; 3],
    /// Size already scaled by remaining life.
    pub size: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupView {
    pub position: Position,
    pub text: String,
    pub color: [u8; 3],
    /// 1.0 fresh, fading to 0.0.
    pub alpha: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    pub wave: u32,
    pub waves_total: u32,
    /// Reload progress in [0, 1] while reloading.
    pub reload_progress: Option<f64>,
    /// Seconds until the shield can be raised again (0 when ready).
    pub shield_cooldown_secs: f64,
    /// Active effects with seconds remaining.
    pub active_power_ups: Vec<(PowerUpKind, f64)>,
    pub paused: bool,
}
