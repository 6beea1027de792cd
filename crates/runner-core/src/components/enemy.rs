use glam::Vec2;

use crate::core::actor::Actor;
use crate::core::pool::PoolSlot;

/// Enemy AABB extent in world units.
pub const ENEMY_SIZE: Vec2 = Vec2::new(14.0, 12.0);

/// Hit points of a freshly spawned enemy.
pub const ENEMY_HP: i32 = 2;

/// One pooled chaser enemy.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub actor: Actor,
    pub hp: i32,
    /// Delay until the next bite attempt.
    pub bite_cooldown: f32,
    /// Within melee range of the player; the renderer keys the lunge pose off it.
    pub lunge: bool,
    pub active: bool,
}

impl Enemy {
    /// A live enemy at the given spawn position.
    pub fn spawned(pos: Vec2) -> Self {
        Self {
            actor: Actor::new(pos, ENEMY_SIZE),
            hp: ENEMY_HP,
            bite_cooldown: 0.0,
            lunge: false,
            active: true,
        }
    }
}

impl Default for Enemy {
    /// A free pool slot.
    fn default() -> Self {
        Self {
            actor: Actor::new(Vec2::ZERO, ENEMY_SIZE),
            hp: 0,
            bite_cooldown: 0.0,
            lunge: false,
            active: false,
        }
    }
}

impl PoolSlot for Enemy {
    fn is_active(&self) -> bool {
        self.active
    }
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
