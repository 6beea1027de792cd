use glam::Vec2;

use crate::core::pool::PoolSlot;

/// Seconds an explosion effect stays live.
pub const EXPLOSION_LIFETIME: f32 = 0.4;

/// One pooled explosion effect: a position and an elapsed-time counter the
/// renderer maps onto animation frames.
#[derive(Debug, Clone, Copy)]
pub struct Explosion {
    pub pos: Vec2,
    /// Seconds since the effect started.
    pub elapsed: f32,
    pub active: bool,
}

impl Explosion {
    /// A live effect starting at `pos`.
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            elapsed: 0.0,
            active: true,
        }
    }
}

impl Default for Explosion {
    /// A free pool slot.
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            elapsed: 0.0,
            active: false,
        }
    }
}

impl PoolSlot for Explosion {
    fn is_active(&self) -> bool {
        self.active
    }
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
