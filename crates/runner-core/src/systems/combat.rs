//! Projectile flight and hit resolution, plus explosion aging.

use glam::Vec2;

use crate::api::events::SimEvent;
use crate::components::enemy::Enemy;
use crate::components::explosion::{Explosion, EXPLOSION_LIFETIME};
use crate::components::projectile::Projectile;
use crate::core::actor::aabb_overlap;
use crate::core::grid::TileGrid;
use crate::core::pool::Pool;

/// Advance every active projectile: horizontal flight, ttl expiry, wall
/// hits, then enemy hits. A projectile damages at most one enemy and dies
/// doing it; there is no pass-through.
pub fn update_projectiles(
    projectiles: &mut Pool<Projectile>,
    enemies: &mut Pool<Enemy>,
    explosions: &mut Pool<Explosion>,
    grid: &TileGrid,
    events: &mut Vec<SimEvent>,
    dt: f32,
) {
    for projectile in projectiles.iter_active_mut() {
        // Horizontal flight only; gravity does not apply.
        projectile.pos.x += projectile.vel.x * dt;
        projectile.ttl -= dt;
        if projectile.ttl <= 0.0 {
            projectile.active = false;
            continue;
        }

        // A solid tile at the nose stops it.
        let nose_x = if projectile.vel.x > 0.0 {
            projectile.pos.x + projectile.size.x
        } else {
            projectile.pos.x
        };
        if grid.kind_at(Vec2::new(nose_x, projectile.pos.y)).is_solid() {
            projectile.active = false;
            continue;
        }

        // First overlapping enemy takes the hit.
        for enemy in enemies.iter_active_mut() {
            if aabb_overlap(
                projectile.pos,
                projectile.size,
                enemy.actor.pos,
                enemy.actor.size,
            ) {
                projectile.active = false;
                enemy.hp -= 1;
                if enemy.hp <= 0 {
                    enemy.active = false;
                    explosions.spawn(Explosion::at(enemy.actor.pos));
                    events.push(SimEvent::EnemyDefeated);
                }
                break;
            }
        }
    }
}

/// Age out explosion effects.
pub fn update_explosions(explosions: &mut Pool<Explosion>, dt: f32) {
    for explosion in explosions.iter_active_mut() {
        explosion.elapsed += dt;
        if explosion.elapsed > EXPLOSION_LIFETIME {
            explosion.active = false;
        }
    }
}
