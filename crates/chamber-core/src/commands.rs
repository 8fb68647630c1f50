//! Input events and player commands.
//!
//! Frontends translate raw device input into an `InputFrame` once per frame.
//! The game scene turns that frame into `PlayerCommand`s, which the engine
//! queues and processes at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Logical keys the scenes react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Backspace,
    Char(char),
}

/// Discrete input event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    /// Primary click at viewport coordinates.
    PointerDown { x: f64, y: f64 },
    /// Window closed / interrupt.
    Quit,
}

/// Continuously held movement directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Everything a scene sees of the input devices for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
    pub held: Movement,
}

impl InputFrame {
    pub fn with_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            held: Movement::default(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.events.iter().filter_map(|e| match e {
            InputEvent::KeyDown(k) => Some(*k),
            _ => None,
        })
    }
}

/// All possible in-game player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Replace the held-direction state.
    SetMovement { movement: Movement },
    /// Fire one bullet toward a world position.
    Fire { target: Position },
    /// Refill the magazine.
    Reload,
    /// Pause or resume the simulation.
    TogglePause,
    /// Raise the shield (rate limited by its cooldown).
    ActivateShield,
    /// Spawn extra enemies around the player.
    SpawnExtraEnemies { count: u32 },
}
