//! Map and wave data.
//!
//! A map is a named list of rectangular obstacles plus an ordered list of
//! waves. Maps are read from JSON, either from a directory on disk or from
//! the set embedded in the binary. Load failures never reach the game loop:
//! [`load_or_empty`] logs them and substitutes an empty map.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use chamber_core::types::Rect;

/// Maps played in order when nothing else is configured.
pub const DEFAULT_ROTATION: [&str; 3] = ["reef", "trench", "abyss"];

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One wave of enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveDef {
    /// Enemies to spawn. `None` scales with the wave number.
    pub count: Option<u32>,
}

impl WaveDef {
    /// Enemies this wave spawns. `wave_number` is 1-based.
    pub fn enemy_count(&self, base_count: u32, wave_number: u32) -> u32 {
        self.count
            .unwrap_or_else(|| base_count.saturating_mul(wave_number))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    pub name: String,
    pub obstacles: Vec<Rect>,
    pub waves: Vec<WaveDef>,
}

#[derive(Deserialize)]
struct RawMap {
    #[serde(default)]
    obstacles: Vec<[f64; 4]>,
    #[serde(default)]
    waves: Vec<RawWave>,
}

#[derive(Deserialize)]
struct RawWave {
    count: Option<i64>,
}

impl MapData {
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            obstacles: Vec::new(),
            waves: Vec::new(),
        }
    }

    /// Parse the on-disk JSON shape. A negative wave count ends the wave
    /// list at that point.
    pub fn from_json(name: &str, json: &str) -> Result<Self, MapError> {
        let raw: RawMap = serde_json::from_str(json)?;
        let obstacles = raw
            .obstacles
            .iter()
            .map(|[x, y, w, h]| Rect::new(*x, *y, *w, *h))
            .collect();
        let waves = raw
            .waves
            .iter()
            .map_while(|w| match w.count {
                None => Some(WaveDef { count: None }),
                Some(n) if n >= 0 => Some(WaveDef {
                    count: Some(u32::try_from(n).unwrap_or(u32::MAX)),
                }),
                Some(_) => None,
            })
            .collect();
        Ok(Self {
            name: name.to_string(),
            obstacles,
            waves,
        })
    }

    pub fn wave_count(&self) -> u32 {
        self.waves.len() as u32
    }
}

/// Source of named maps.
pub trait MapLoader {
    fn load(&self, name: &str) -> Result<MapData, MapError>;
}

/// Reads `<dir>/<name>.json`.
pub struct DirMapLoader {
    dir: PathBuf,
}

impl DirMapLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl MapLoader for DirMapLoader {
    fn load(&self, name: &str) -> Result<MapData, MapError> {
        let path = self.dir.join(format!("{name}.json"));
        if !path.is_file() {
            return Err(MapError::NotFound(path.display().to_string()));
        }
        let json = fs::read_to_string(&path)?;
        MapData::from_json(name, &json)
    }
}

/// Maps compiled into the binary.
pub struct BuiltinMaps;

impl MapLoader for BuiltinMaps {
    fn load(&self, name: &str) -> Result<MapData, MapError> {
        let json = match name {
            "reef" => include_str!("../maps/reef.json"),
            "trench" => include_str!("../maps/trench.json"),
            "abyss" => include_str!("../maps/abyss.json"),
            _ => return Err(MapError::NotFound(name.to_string())),
        };
        MapData::from_json(name, json)
    }
}

/// Load a map, logging any failure and falling back to an empty map.
pub fn load_or_empty(loader: &dyn MapLoader, name: &str) -> MapData {
    match loader.load(name) {
        Ok(map) => {
            tracing::debug!(
                map = name,
                obstacles = map.obstacles.len(),
                waves = map.waves.len(),
                "Map loaded"
            );
            map
        }
        Err(e) => {
            tracing::error!(map = name, error = %e, "Failed to load map, using an empty one");
            MapData::empty(name)
        }
    }
}

/// Ordered maps played one after another, wrapping at the end.
#[derive(Debug, Clone)]
pub struct MapRotation {
    maps: Vec<MapData>,
    index: usize,
}

impl MapRotation {
    /// An empty list becomes a single empty map so `current()` always has
    /// something to return.
    pub fn new(mut maps: Vec<MapData>) -> Self {
        if maps.is_empty() {
            maps.push(MapData::empty("open_water"));
        }
        Self { maps, index: 0 }
    }

    pub fn load(loader: &dyn MapLoader, names: &[&str]) -> Self {
        Self::new(names.iter().map(|n| load_or_empty(loader, n)).collect())
    }

    pub fn builtin() -> Self {
        Self::load(&BuiltinMaps, &DEFAULT_ROTATION)
    }

    pub fn current(&self) -> &MapData {
        &self.maps[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// True when no map in the rotation defines any waves.
    pub fn is_endless(&self) -> bool {
        self.maps.iter().all(|m| m.waves.is_empty())
    }

    /// Move to the next map, wrapping back to the first.
    pub fn advance(&mut self) -> &MapData {
        self.index = (self.index + 1) % self.maps.len();
        self.current()
    }
}

impl Default for MapRotation {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_obstacles_and_waves() {
        let map = MapData::from_json(
            "cove",
            r#"{"obstacles": [[10, 20, 30, 40]], "waves": [{"count": 2}, {"count": 0}]}"#,
        )
        .unwrap();
        assert_eq!(map.name, "cove");
        assert_eq!(map.obstacles, vec![Rect::new(10.0, 20.0, 30.0, 40.0)]);
        assert_eq!(
            map.waves,
            vec![WaveDef { count: Some(2) }, WaveDef { count: Some(0) }]
        );
    }

    #[test]
    fn negative_count_ends_the_wave_list() {
        let map = MapData::from_json(
            "cove",
            r#"{"waves": [{"count": 4}, {"count": -1}, {"count": 9}]}"#,
        )
        .unwrap();
        assert_eq!(map.waves, vec![WaveDef { count: Some(4) }]);
        assert!(map.obstacles.is_empty());
    }

    #[test]
    fn missing_count_scales_with_wave_number() {
        let map = MapData::from_json("cove", r#"{"waves": [{}]}"#).unwrap();
        assert_eq!(map.waves[0].enemy_count(3, 4), 12);
        assert_eq!(WaveDef { count: Some(7) }.enemy_count(3, 4), 7);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = MapData::from_json("cove", "{ not json").unwrap_err();
        assert!(matches!(err, MapError::Parse(_)));
    }

    #[test]
    fn builtin_maps_all_parse_and_keep_the_center_clear() {
        let center = chamber_core::player::Player::new(1).collision_box();
        for name in DEFAULT_ROTATION {
            let map = BuiltinMaps.load(name).unwrap();
            assert!(!map.waves.is_empty(), "{name} has no waves");
            assert!(
                map.obstacles.iter().all(|o| !o.overlaps(&center)),
                "{name} blocks the spawn point"
            );
        }
    }

    #[test]
    fn dir_loader_reads_files_and_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("kelp.json"),
            r#"{"obstacles": [], "waves": [{"count": 1}]}"#,
        )
        .unwrap();
        let loader = DirMapLoader::new(dir.path());

        let map = loader.load("kelp").unwrap();
        assert_eq!(map.wave_count(), 1);

        assert!(matches!(loader.load("missing"), Err(MapError::NotFound(_))));
    }

    #[test]
    fn load_or_empty_substitutes_an_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "[1, 2").unwrap();
        let loader = DirMapLoader::new(dir.path());

        let broken = load_or_empty(&loader, "broken");
        assert_eq!(broken, MapData::empty("broken"));
        let missing = load_or_empty(&loader, "nowhere");
        assert!(missing.waves.is_empty() && missing.obstacles.is_empty());
    }

    #[test]
    fn rotation_wraps_around() {
        let mut rotation = MapRotation::new(vec![MapData::empty("a"), MapData::empty("b")]);
        assert_eq!(rotation.current().name, "a");
        assert_eq!(rotation.advance().name, "b");
        assert_eq!(rotation.advance().name, "a");
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn empty_rotation_still_has_a_map() {
        let mut rotation = MapRotation::new(Vec::new());
        assert_eq!(rotation.len(), 1);
        assert!(rotation.current().waves.is_empty());
        let next = rotation.advance().name.clone();
        assert_eq!(next, rotation.current().name);
        assert!(rotation.is_endless());
        assert!(!MapRotation::builtin().is_endless());
    }
}
