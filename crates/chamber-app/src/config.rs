//! Runtime configuration read from the environment.
//!
//! `CHAMBER_SEED` picks the RNG seed. `CHAMBER_MAP_DIR` points at a directory
//! of `<name>.json` map files to use instead of the embedded ones.

use std::path::PathBuf;

use chamber_progression::maps::{DirMapLoader, MapRotation, DEFAULT_ROTATION};
use chamber_sim::SimConfig;

pub const SEED_VAR: &str = "CHAMBER_SEED";
pub const MAP_DIR_VAR: &str = "CHAMBER_MAP_DIR";

/// Log output goes to a file because the terminal is in raw mode.
pub const LOG_FILE: &str = "chamber.log";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub seed: u64,
    pub map_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: SimConfig::default().seed,
            map_dir: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = seed,
                Err(e) => tracing::warn!(value = %raw, error = %e, "Ignoring invalid {SEED_VAR}"),
            }
        }

        config.map_dir = lookup(MAP_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        config
    }

    pub fn sim_config(&self) -> SimConfig {
        let maps = match &self.map_dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "Loading maps from directory");
                MapRotation::load(&DirMapLoader::new(dir), &DEFAULT_ROTATION)
            }
            None => MapRotation::builtin(),
        };
        SimConfig {
            seed: self.seed,
            maps,
            ..Default::default()
        }
    }
}
