//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for
//! read-only) plus the engine state they need. They do not own state.
//! The engine calls them in a fixed order; see `SimulationEngine::run_systems`.

pub mod bullets;
pub mod camera;
pub mod cleanup;
pub mod effects;
pub mod enemies;
pub mod loot;
pub mod movement;
pub mod pickups;
pub mod power_ups;
pub mod snapshot;
pub mod waves;
pub mod world_power_ups;
