use glam::Vec2;

/// Shared kinematic shape for anything that moves through the tile grid.
///
/// The player record and enemy pool slots both embed an `Actor`; controller
/// and AI state layer on top by composition.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    /// Top-left corner of the AABB in world units.
    pub pos: Vec2,
    /// Velocity in world units per second.
    pub vel: Vec2,
    /// AABB extent.
    pub size: Vec2,
    /// Proven by a downward collision during this step's resolution.
    pub on_ground: bool,
    /// Ground-contact grace window, refreshed on every downward collision.
    pub coyote: f32,
}

impl Actor {
    /// Create an actor at rest.
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            on_ground: false,
            coyote: 0.0,
        }
    }

    /// AABB center.
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// AABB overlap test against another actor.
    pub fn overlaps(&self, other: &Actor) -> bool {
        aabb_overlap(self.pos, self.size, other.pos, other.size)
    }
}

/// Open-interval AABB overlap: rectangles that merely touch do not count.
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}
