//! Core types and definitions for the Chamber simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, settings, state snapshots, events, and constants.
//! It has no dependency on the ECS, the terminal, or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod layout;
pub mod player;
pub mod settings;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
