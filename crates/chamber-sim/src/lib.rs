//! Simulation engine for Chamber.
//!
//! Owns the hecs ECS world, runs systems once per frame, drives the scene
//! state machine, and produces snapshots and frames for the frontend.

pub mod engine;
pub mod scenes;
pub mod systems;
pub mod world_setup;

pub use chamber_core as core;
pub use engine::{SimConfig, SimulationEngine, TickReport};
pub use scenes::{Scene, SceneMachine, Transition};
