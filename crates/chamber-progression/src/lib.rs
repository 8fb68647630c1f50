//! Progression and content for Chamber: the upgrade catalogue bought with
//! score, and the map/wave data the simulation plays through.

pub mod maps;
pub mod upgrades;

pub use maps::{MapData, MapError, MapLoader, MapRotation, WaveDef};
pub use upgrades::{Purchase, Upgrade, UpgradeBook, UpgradeError, UpgradeKey};
