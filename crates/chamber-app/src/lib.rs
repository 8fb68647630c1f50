//! Terminal frontend for Chamber.
//!
//! Wires the scene machine to crossterm: a reader thread for input, a
//! renderer that draws each `Frame`, and the frame loop between them.

pub mod config;
pub mod game_loop;
pub mod input;
pub mod render;

pub use chamber_sim::core;
