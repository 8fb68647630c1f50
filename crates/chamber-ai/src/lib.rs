//! Enemy AI for Chamber.
//!
//! Implements flocking-lite steering: chase the player while keeping
//! apart from nearby enemies. Pure functions over plain data, no ECS.

pub mod steering;

pub use chamber_core as core;
