//! Player controller: movement, jumping, firing, hazards, triggers.
//!
//! The "state machine" here is a set of independent timers (jump buffer,
//! coyote, invulnerability, fire cooldown) rather than exclusive states:
//! grounded/airborne and vulnerable/invulnerable overlap freely.

use glam::Vec2;

use crate::api::events::SimEvent;
use crate::components::pepper::Pepper;
use crate::components::player::{DamageOutcome, Player};
use crate::components::projectile::Projectile;
use crate::core::actor::aabb_overlap;
use crate::core::grid::{TileGrid, TileKind, TILE_SIZE};
use crate::core::physics::{integrate_and_resolve, GRAVITY, PROBE_INSET, PROBE_STEP};
use crate::core::pool::Pool;
use crate::input::intent::IntentSnapshot;

/// Peak horizontal speed in world units per second.
pub const MAX_SPEED: f32 = 120.0;

/// Horizontal acceleration while a move intent is held.
pub const ACCEL: f32 = 600.0;

/// Horizontal deceleration with no move intent held.
pub const FRICTION: f32 = 700.0;

/// Launch velocity of a jump; negative is up.
pub const JUMP_VEL: f32 = -220.0;

/// Seconds an early jump press stays buffered.
pub const JUMP_BUFFER: f32 = 0.12;

/// Extra gravity while ascending with the jump intent released, cutting
/// the arc short.
pub const JUMP_CUT_GRAVITY: f32 = 600.0;

/// Seconds between projectile spawns.
pub const FIRE_COOLDOWN: f32 = 0.25;

/// Height of the muzzle below the player's top edge.
const MUZZLE_DROP: f32 = 8.0;

/// Advance the player by one step. Returns true when the goal tile was
/// reached, so the context can reload after the step completes.
pub fn update(
    player: &mut Player,
    intent: &IntentSnapshot,
    grid: &TileGrid,
    projectiles: &mut Pool<Projectile>,
    peppers: &mut [Pepper],
    events: &mut Vec<SimEvent>,
    dt: f32,
) -> bool {
    // Grace timers tick down every step, floored at zero.
    player.invuln = (player.invuln - dt).max(0.0);
    player.fire_cooldown = (player.fire_cooldown - dt).max(0.0);

    // Horizontal intent accelerates toward the cap; no intent bleeds speed
    // off toward zero without overshooting. Left wins when both are held.
    if intent.move_left {
        player.actor.vel.x = (player.actor.vel.x - ACCEL * dt).max(-MAX_SPEED);
        player.facing = -1.0;
    } else if intent.move_right {
        player.actor.vel.x = (player.actor.vel.x + ACCEL * dt).min(MAX_SPEED);
        player.facing = 1.0;
    } else if player.actor.vel.x > 0.0 {
        player.actor.vel.x = (player.actor.vel.x - FRICTION * dt).max(0.0);
    } else if player.actor.vel.x < 0.0 {
        player.actor.vel.x = (player.actor.vel.x + FRICTION * dt).min(0.0);
    }

    // Gravity accumulates before resolution; grounding must be re-proven
    // by a downward hit every step.
    player.actor.vel.y += GRAVITY * dt;
    player.actor.on_ground = false;

    // Jump buffer x coyote: an early press and a late ledge step both
    // still jump, as long as the two grace windows overlap. Firing
    // consumes both so one press cannot launch twice.
    if intent.jump {
        player.jump_buffer = JUMP_BUFFER;
    }
    if player.jump_buffer > 0.0 && player.actor.coyote > 0.0 {
        player.actor.vel.y = JUMP_VEL;
        player.jump_buffer = 0.0;
        player.actor.coyote = 0.0;
    }
    player.jump_buffer = (player.jump_buffer - dt).max(0.0);
    player.actor.coyote = (player.actor.coyote - dt).max(0.0);

    // Releasing jump while still ascending shortens the arc; holding it
    // never adds height beyond the launch velocity.
    if !intent.jump && player.actor.vel.y < 0.0 {
        player.actor.vel.y += JUMP_CUT_GRAVITY * dt;
    }

    integrate_and_resolve(&mut player.actor, grid, dt);

    // Fire: one projectile from the facing-side edge. The cooldown resets
    // even when the pool is exhausted and the spawn was dropped.
    if intent.fire && player.fire_cooldown <= 0.0 {
        let muzzle = Vec2::new(
            if player.facing > 0.0 {
                player.actor.pos.x + player.actor.size.x
            } else {
                player.actor.pos.x
            },
            player.actor.pos.y + MUZZLE_DROP,
        );
        if projectiles.spawn(Projectile::fired(muzzle, player.facing)) {
            events.push(SimEvent::ProjectileFired);
        }
        player.fire_cooldown = FIRE_COOLDOWN;
    }

    // Hazard tiles probed along the foot line.
    let foot_y = player.actor.pos.y + player.actor.size.y;
    let mut offset = 0.0;
    while offset < player.actor.size.x {
        let probe = Vec2::new(player.actor.pos.x + offset + PROBE_INSET, foot_y);
        if grid.kind_at(probe).is_hazard() {
            report_damage(player, events);
            break;
        }
        offset += PROBE_STEP;
    }

    // Checkpoint and goal triggers read the tile under the AABB center.
    let center = player.actor.center();
    let mut reached_goal = false;
    match grid.kind_at(center) {
        TileKind::Checkpoint => {
            let tx = (center.x / TILE_SIZE).floor();
            let ty = (center.y / TILE_SIZE).floor();
            // Respawn one tile above the trigger
            player.checkpoint = Vec2::new(tx * TILE_SIZE, (ty - 1.0) * TILE_SIZE);
        }
        TileKind::Goal => reached_goal = true,
        _ => {}
    }

    // Collectibles.
    for pepper in peppers.iter_mut() {
        if !pepper.taken
            && aabb_overlap(player.actor.pos, player.actor.size, pepper.pos, pepper.size)
        {
            pepper.taken = true;
            let extra_life = player.collect_pepper();
            events.push(SimEvent::PepperCollected {
                score: player.score,
            });
            if extra_life {
                events.push(SimEvent::ExtraLife);
            }
        }
    }

    reached_goal
}

/// Route one damage attempt through the player and record what happened.
/// Shared with the enemy AI, which bites through the same path.
pub(crate) fn report_damage(player: &mut Player, events: &mut Vec<SimEvent>) {
    match player.take_damage() {
        DamageOutcome::Ignored => {}
        DamageOutcome::Hurt => events.push(SimEvent::PlayerHurt),
        DamageOutcome::Respawned => {
            events.push(SimEvent::PlayerHurt);
            events.push(SimEvent::PlayerRespawned);
        }
    }
}
