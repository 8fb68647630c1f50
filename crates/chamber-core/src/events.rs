//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    EnemyKilled { position: Position, cause: KillCause },
    /// Player took contact damage.
    PlayerHit { hp: u32 },
    /// Shield repelled an enemy.
    ShieldBlocked { position: Position },
    PickupCollected { kind: PickupKind },
    PowerUpCollected { kind: PowerUpKind },
    WaveStarted { wave: u32, count: u32 },
    WaveCleared { wave: u32 },
    /// All waves of a map cleared; the rotation moves on.
    MapCompleted { map: String },
    PlayerDied,
}
