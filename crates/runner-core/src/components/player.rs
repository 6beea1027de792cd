//! The player record: hit points, timers, checkpoint, score.
//!
//! Movement itself lives in `systems::player`; this module owns the state
//! and the damage/respawn/score transitions that both the player controller
//! and the enemy AI route through.

use glam::Vec2;

use crate::core::actor::Actor;

/// Player AABB extent in world units.
pub const PLAYER_SIZE: Vec2 = Vec2::new(12.0, 14.0);

/// Hearts restored on spawn and respawn.
pub const MAX_HEARTS: u8 = 3;

/// Lives at the start of a session.
pub const STARTING_LIVES: i32 = 3;

/// Damage grace window in seconds.
pub const INVULN_WINDOW: f32 = 1.0;

/// Score multiple that grants an extra life.
pub const EXTRA_LIFE_SCORE: u32 = 100;

/// What one damage attempt did to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Invulnerability window still open; nothing changed.
    Ignored,
    /// Lost a heart.
    Hurt,
    /// Lost the last heart: a life was consumed and the player went back
    /// to the checkpoint.
    Respawned,
}

/// The player. Created once per session, mutated every step, reset on
/// respawn or level entry; never destroyed.
#[derive(Debug, Clone)]
pub struct Player {
    pub actor: Actor,
    /// Horizontal facing: +1.0 right, -1.0 left.
    pub facing: f32,
    pub hearts: u8,
    /// Signed so the host can observe exhaustion; the core never reacts to
    /// lives going negative.
    pub lives: i32,
    pub score: u32,
    /// Remaining damage grace window.
    pub invuln: f32,
    /// Early-press jump grace window.
    pub jump_buffer: f32,
    /// Delay until the next projectile may fire.
    pub fire_cooldown: f32,
    /// Respawn position, updated by checkpoint tiles.
    pub checkpoint: Vec2,
    /// Reserved for the host's game-over flow; the core never sets it.
    pub dead: bool,
}

impl Player {
    /// Create the player at a level spawn point, which doubles as the
    /// first checkpoint.
    pub fn new(spawn: Vec2) -> Self {
        Self {
            actor: Actor::new(spawn, PLAYER_SIZE),
            facing: 1.0,
            hearts: MAX_HEARTS,
            lives: STARTING_LIVES,
            score: 0,
            invuln: 0.0,
            jump_buffer: 0.0,
            fire_cooldown: 0.0,
            checkpoint: spawn,
            dead: false,
        }
    }

    /// Move to a new level's spawn point, clearing motion and the stored
    /// checkpoint. Hearts, lives and score carry across levels.
    pub fn enter_level(&mut self, spawn: Vec2) {
        self.actor.pos = spawn;
        self.actor.vel = Vec2::ZERO;
        self.actor.on_ground = false;
        self.checkpoint = spawn;
    }

    /// Apply one hit. The invulnerability window swallows repeats; losing
    /// the last heart consumes a life and respawns at the checkpoint.
    pub fn take_damage(&mut self) -> DamageOutcome {
        if self.invuln > 0.0 {
            return DamageOutcome::Ignored;
        }
        self.invuln = INVULN_WINDOW;
        if self.hearts > 1 {
            self.hearts -= 1;
            DamageOutcome::Hurt
        } else {
            self.hearts = MAX_HEARTS;
            self.lives -= 1;
            self.respawn();
            DamageOutcome::Respawned
        }
    }

    /// Snap back to the checkpoint with zeroed motion and a fresh
    /// invulnerability window.
    pub fn respawn(&mut self) {
        self.actor.pos = self.checkpoint;
        self.actor.vel = Vec2::ZERO;
        self.actor.on_ground = false;
        self.invuln = INVULN_WINDOW;
        log::debug!(
            "player respawned at ({}, {}), {} lives left",
            self.checkpoint.x,
            self.checkpoint.y,
            self.lives
        );
    }

    /// Bank one collected pepper. Returns true when the new total crosses
    /// an extra-life multiple, on that step only.
    pub fn collect_pepper(&mut self) -> bool {
        self.score += 1;
        if self.score % EXTRA_LIFE_SCORE == 0 {
            self.lives += 1;
            true
        } else {
            false
        }
    }
}
