//! Tile lookup and classification over one level's grid.
//!
//! The grid is immutable for the lifetime of a level and answers one
//! question: what occupies a given world position? Collision response,
//! hazards and triggers are all built on that answer.

use glam::Vec2;

use crate::assets::level::LevelData;

/// Side length of one tile in world units.
pub const TILE_SIZE: f32 = 16.0;

/// Behavior class of one grid cell.
///
/// The mapping from raw codes is fixed; codes 7 and above are decorative:
/// drawn by the renderer, invisible to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Empty,
    Ground,
    Platform,
    Spike,
    Crate,
    Checkpoint,
    Goal,
    Decor,
}

impl TileKind {
    /// Map a raw level tile code to its behavior class.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => TileKind::Empty,
            1 => TileKind::Ground,
            2 => TileKind::Platform,
            3 => TileKind::Spike,
            4 => TileKind::Crate,
            5 => TileKind::Checkpoint,
            6 => TileKind::Goal,
            _ => TileKind::Decor,
        }
    }

    /// Whether actors collide with this tile.
    pub fn is_solid(self) -> bool {
        matches!(self, TileKind::Ground | TileKind::Platform | TileKind::Crate)
    }

    /// Whether touching this tile damages the player.
    pub fn is_hazard(self) -> bool {
        self == TileKind::Spike
    }
}

/// Read-only tile lookup for one level.
///
/// Tiles are stored in row-major order: index = ty * width + tx.
#[derive(Debug, Clone)]
pub struct TileGrid {
    width: u32,
    height: u32,
    codes: Vec<u8>,
}

impl TileGrid {
    /// Build a grid from parsed level data.
    pub fn from_level(level: &LevelData) -> Self {
        Self {
            width: level.width,
            height: level.height,
            codes: level.tiles.clone(),
        }
    }

    /// Grid width in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Level extent in world units.
    pub fn pixel_extent(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) * TILE_SIZE
    }

    /// Raw tile code at a world position. Anywhere outside the grid is
    /// empty: the level border is permeable, not solid.
    pub fn code_at(&self, pos: Vec2) -> u8 {
        let tx = (pos.x / TILE_SIZE).floor() as i32;
        let ty = (pos.y / TILE_SIZE).floor() as i32;
        self.code_at_cell(tx, ty)
    }

    /// Raw tile code at a cell index. Signed so callers can probe past the
    /// border without wrapping.
    pub fn code_at_cell(&self, tx: i32, ty: i32) -> u8 {
        if tx < 0 || ty < 0 || tx >= self.width as i32 || ty >= self.height as i32 {
            return 0;
        }
        let index = ty as usize * self.width as usize + tx as usize;
        self.codes.get(index).copied().unwrap_or(0)
    }

    /// Behavior class at a world position.
    pub fn kind_at(&self, pos: Vec2) -> TileKind {
        TileKind::from_code(self.code_at(pos))
    }
}
