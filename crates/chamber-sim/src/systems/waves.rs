//! Wave progression: clear detection, inter-wave delay, next-wave spawn.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use chamber_core::constants::WAVE_DELAY;
use chamber_core::events::GameEvent;
use chamber_core::settings::Settings;
use chamber_core::types::Position;
use chamber_progression::maps::MapData;

use crate::systems::cleanup::any_enemy_alive;
use crate::world_setup;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveState {
    /// 1-based index of the last wave spawned on this map (0 before the first).
    pub wave: u32,
    /// A spawned wave still has living enemies.
    pub active: bool,
    /// Earliest time the next wave may spawn.
    pub timer: f64,
}

impl WaveState {
    /// Back to "before wave 1", spawning on the first tick at or after `now`.
    pub fn reset(&mut self, now: f64) {
        *self = Self {
            wave: 0,
            active: false,
            timer: now,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveOutcome {
    Idle,
    Cleared { wave: u32 },
    Started { wave: u32, count: u32 },
    /// No waves remain on this map.
    MapComplete,
}

/// Count for the next wave. Maps without waves fall back to the endless
/// formula only when `endless` is set.
pub fn next_wave_count(map: &MapData, wave_number: u32, base_count: u32, endless: bool) -> Option<u32> {
    match map.waves.get(wave_number.saturating_sub(1) as usize) {
        Some(def) => Some(def.enemy_count(base_count, wave_number)),
        None if endless => Some(base_count.saturating_mul(wave_number)),
        None => None,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    state: &mut WaveState,
    map: &MapData,
    endless: bool,
    settings: &Settings,
    player_position: Position,
    now: f64,
    events: &mut Vec<GameEvent>,
) -> WaveOutcome {
    if state.active && !any_enemy_alive(world) {
        state.active = false;
        state.timer = now + WAVE_DELAY;
        tracing::info!(wave = state.wave, map = %map.name, "Wave cleared");
        events.push(GameEvent::WaveCleared { wave: state.wave });
        return WaveOutcome::Cleared { wave: state.wave };
    }

    if state.active || now < state.timer {
        return WaveOutcome::Idle;
    }

    let next = state.wave + 1;
    let Some(count) = next_wave_count(map, next, settings.enemy_count(), endless) else {
        return WaveOutcome::MapComplete;
    };

    state.wave = next;
    state.active = true;
    world_setup::spawn_enemy_ring(world, rng, player_position, count, settings.enemy_speed);
    tracing::info!(wave = next, count, map = %map.name, "Wave started");
    events.push(GameEvent::WaveStarted { wave: next, count });
    WaveOutcome::Started { wave: next, count }
}
