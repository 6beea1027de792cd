use glam::Vec2;

/// Pepper AABB extent in world units.
pub const PEPPER_SIZE: Vec2 = Vec2::new(10.0, 10.0);

/// One collectible pepper. Taken peppers stay in the level list so the
/// renderer can suppress them without the list reindexing underneath it.
#[derive(Debug, Clone, Copy)]
pub struct Pepper {
    /// Top-left corner of the AABB.
    pub pos: Vec2,
    pub size: Vec2,
    pub taken: bool,
}

impl Pepper {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: PEPPER_SIZE,
            taken: false,
        }
    }
}
