use glam::Vec2;

use crate::core::pool::PoolSlot;

/// Projectile AABB extent in world units.
pub const PROJECTILE_SIZE: Vec2 = Vec2::new(8.0, 4.0);

/// Horizontal flight speed in world units per second.
pub const PROJECTILE_SPEED: f32 = 280.0;

/// Seconds a projectile stays live without hitting anything.
pub const PROJECTILE_TTL: f32 = 0.9;

/// One pooled projectile. Flies horizontally, unaffected by gravity, and
/// expires on a timer.
#[derive(Debug, Clone)]
pub struct Projectile {
    /// Top-left corner of the AABB.
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Remaining flight time.
    pub ttl: f32,
    pub active: bool,
}

impl Projectile {
    /// A live projectile launched from `pos` toward `facing` (±1).
    pub fn fired(pos: Vec2, facing: f32) -> Self {
        Self {
            pos,
            vel: Vec2::new(facing * PROJECTILE_SPEED, 0.0),
            size: PROJECTILE_SIZE,
            ttl: PROJECTILE_TTL,
            active: true,
        }
    }
}

impl Default for Projectile {
    /// A free pool slot.
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: PROJECTILE_SIZE,
            ttl: 0.0,
            active: false,
        }
    }
}

impl PoolSlot for Projectile {
    fn is_active(&self) -> bool {
        self.active
    }
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
