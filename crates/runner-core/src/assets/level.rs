//! Parsed level data: the contract between the host's loader and the core.
//!
//! The core never fetches anything itself. The host loads level files
//! however it likes (the reference game ships them as JSON) and hands over
//! one `LevelData` per level before the first step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One parsed level: grid dimensions, row-major tile codes, spawn lists.
///
/// Immutable once handed to the simulation. Tile codes: 0 empty, 1 ground,
/// 2 platform, 3 spike, 4 crate, 5 checkpoint, 6 goal, 7+ decorative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    /// Grid width in tiles.
    pub width: u32,
    /// Grid height in tiles.
    pub height: u32,
    /// Tile codes, row-major: index = ty * width + tx.
    pub tiles: Vec<u8>,
    /// Player spawn position in world units.
    pub spawn: SpawnPoint,
    /// Enemy spawn positions.
    #[serde(default)]
    pub enemies: Vec<EnemySpawn>,
    /// Collectible positions.
    #[serde(default)]
    pub peppers: Vec<PepperSpawn>,
}

/// Player spawn position, doubling as the level's first checkpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
}

/// Where one enemy starts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub x: f32,
    pub y: f32,
}

/// Where one pepper sits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PepperSpawn {
    pub x: f32,
    pub y: f32,
}

impl LevelData {
    /// Parse a level from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Spawn position as a vector.
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.spawn.x, self.spawn.y)
    }
}
