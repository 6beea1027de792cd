//! Velocity integration and tile-grid collision resolution.
//!
//! One routine, shared by the player and every enemy: advance an actor by
//! its velocity and push it back out of solid tiles, one axis at a time.

use glam::Vec2;

use crate::core::actor::Actor;
use crate::core::grid::{TileGrid, TILE_SIZE};

/// Downward acceleration in world units per second squared.
pub const GRAVITY: f32 = 800.0;

/// Seconds of ground-contact grace after leaving a ledge.
pub const COYOTE_TIME: f32 = 0.12;

/// Spacing between probe points along an AABB edge.
pub(crate) const PROBE_STEP: f32 = 8.0;

/// Probe inset from the AABB corner so a probe never lands exactly on the
/// neighboring tile's boundary.
pub(crate) const PROBE_INSET: f32 = 1.0;

/// Offset past a tile face when snapping, keeping the resolved edge from
/// re-triggering the same tile next step.
const SNAP_EPSILON: f32 = 0.001;

/// Advance an actor one step and resolve collisions against the grid,
/// horizontal axis first. Resolving the axes separately lets a diagonal
/// move slide along a wall instead of being rejected by a corner tile.
///
/// The leading edge is probed every [`PROBE_STEP`] units across the
/// perpendicular extent; the first solid hit snaps the actor to the tile
/// face and zeroes that velocity component. A downward hit additionally
/// grounds the actor and refreshes its coyote window. There is no
/// sub-stepping past the first contact, so per-step travel must stay well
/// below one tile; callers clamp dt (see [`crate::core::clock::StepClock`]).
pub fn integrate_and_resolve(actor: &mut Actor, grid: &TileGrid, dt: f32) {
    // Horizontal
    actor.pos.x += actor.vel.x * dt;
    if actor.vel.x != 0.0 {
        let moving_right = actor.vel.x > 0.0;
        let leading_x = if moving_right {
            actor.pos.x + actor.size.x
        } else {
            actor.pos.x
        };
        let mut offset = 0.0;
        while offset < actor.size.y {
            let probe = Vec2::new(leading_x, actor.pos.y + offset + PROBE_INSET);
            if grid.kind_at(probe).is_solid() {
                let tile_x = (leading_x / TILE_SIZE).floor();
                if moving_right {
                    actor.pos.x = tile_x * TILE_SIZE - actor.size.x - SNAP_EPSILON;
                } else {
                    actor.pos.x = (tile_x + 1.0) * TILE_SIZE + SNAP_EPSILON;
                }
                actor.vel.x = 0.0;
                break;
            }
            offset += PROBE_STEP;
        }
    }

    // Vertical
    actor.pos.y += actor.vel.y * dt;
    if actor.vel.y != 0.0 {
        let falling = actor.vel.y > 0.0;
        let leading_y = if falling {
            actor.pos.y + actor.size.y
        } else {
            actor.pos.y
        };
        let mut offset = 0.0;
        while offset < actor.size.x {
            let probe = Vec2::new(actor.pos.x + offset + PROBE_INSET, leading_y);
            if grid.kind_at(probe).is_solid() {
                let tile_y = (leading_y / TILE_SIZE).floor();
                if falling {
                    actor.pos.y = tile_y * TILE_SIZE - actor.size.y - SNAP_EPSILON;
                    actor.on_ground = true;
                    actor.coyote = COYOTE_TIME;
                } else {
                    actor.pos.y = (tile_y + 1.0) * TILE_SIZE + SNAP_EPSILON;
                }
                actor.vel.y = 0.0;
                break;
            }
            offset += PROBE_STEP;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::level::{LevelData, SpawnPoint};

    /// Build a grid from digit rows, e.g. `["000", "111"]`.
    fn grid_from_rows(rows: &[&str]) -> TileGrid {
        let width = rows[0].len() as u32;
        let height = rows.len() as u32;
        let tiles = rows
            .iter()
            .flat_map(|row| row.chars().map(|c| c.to_digit(10).unwrap() as u8))
            .collect();
        TileGrid::from_level(&LevelData {
            width,
            height,
            tiles,
            spawn: SpawnPoint { x: 0.0, y: 0.0 },
            enemies: vec![],
            peppers: vec![],
        })
    }

    #[test]
    fn falling_actor_lands_on_ground() {
        let grid = grid_from_rows(&["000", "000", "111"]);
        let mut actor = Actor::new(Vec2::new(2.0, 10.0), Vec2::new(12.0, 14.0));
        actor.vel.y = 100.0;

        for _ in 0..20 {
            integrate_and_resolve(&mut actor, &grid, 1.0 / 60.0);
        }

        // Ground row starts at y=32; feet rest just above it.
        assert!(actor.on_ground, "actor should be grounded");
        assert_eq!(actor.vel.y, 0.0);
        assert!(
            (actor.pos.y - (32.0 - 14.0)).abs() < 0.01,
            "feet should sit on the tile face, y={}",
            actor.pos.y
        );
        assert!(actor.coyote > 0.0, "landing refreshes the coyote window");
    }

    #[test]
    fn rightward_motion_stops_at_a_wall() {
        let grid = grid_from_rows(&["001"]);
        let mut actor = Actor::new(Vec2::new(0.0, 1.0), Vec2::new(12.0, 14.0));
        actor.vel.x = 250.0;

        integrate_and_resolve(&mut actor, &grid, 0.1);

        // Wall tile starts at x=32; right edge snaps just short of it.
        assert_eq!(actor.vel.x, 0.0);
        assert!(
            (actor.pos.x - (32.0 - 12.0)).abs() < 0.01,
            "right edge should meet the wall face, x={}",
            actor.pos.x
        );
        // No overlap with the wall after resolution
        assert!(actor.pos.x + actor.size.x < 32.0);
    }

    #[test]
    fn leftward_motion_stops_at_a_wall() {
        let grid = grid_from_rows(&["100"]);
        let mut actor = Actor::new(Vec2::new(30.0, 1.0), Vec2::new(12.0, 14.0));
        actor.vel.x = -200.0;

        integrate_and_resolve(&mut actor, &grid, 0.1);

        assert_eq!(actor.vel.x, 0.0);
        assert!(
            (actor.pos.x - 16.0).abs() < 0.01,
            "left edge should meet the wall face, x={}",
            actor.pos.x
        );
    }

    #[test]
    fn ascending_actor_bumps_its_head() {
        let grid = grid_from_rows(&["111", "000", "000"]);
        let mut actor = Actor::new(Vec2::new(2.0, 30.0), Vec2::new(12.0, 14.0));
        actor.vel.y = -300.0;

        integrate_and_resolve(&mut actor, &grid, 0.1);

        // Ceiling row ends at y=16; head snaps just below it.
        assert_eq!(actor.vel.y, 0.0);
        assert!(!actor.on_ground, "a ceiling hit does not ground the actor");
        assert!((actor.pos.y - 16.0).abs() < 0.01, "y={}", actor.pos.y);
    }

    #[test]
    fn free_fall_through_open_space_is_untouched() {
        let grid = grid_from_rows(&["000", "000"]);
        let mut actor = Actor::new(Vec2::new(4.0, 0.0), Vec2::new(12.0, 14.0));
        actor.vel = Vec2::new(30.0, 40.0);

        integrate_and_resolve(&mut actor, &grid, 0.1);

        assert_eq!(actor.vel, Vec2::new(30.0, 40.0));
        assert!((actor.pos.x - 7.0).abs() < 1e-4);
        assert!((actor.pos.y - 4.0).abs() < 1e-4);
    }

    #[test]
    fn platform_and_crate_tiles_block_like_ground() {
        for row in ["002", "004"] {
            let grid = grid_from_rows(&[row]);
            let mut actor = Actor::new(Vec2::new(0.0, 1.0), Vec2::new(12.0, 14.0));
            actor.vel.x = 250.0;
            integrate_and_resolve(&mut actor, &grid, 0.1);
            assert_eq!(actor.vel.x, 0.0, "tile row {row:?} should block");
        }
    }

    #[test]
    fn hazard_tiles_do_not_block_motion() {
        let grid = grid_from_rows(&["003"]);
        let mut actor = Actor::new(Vec2::new(0.0, 1.0), Vec2::new(12.0, 14.0));
        actor.vel.x = 250.0;
        integrate_and_resolve(&mut actor, &grid, 0.1);
        assert!(actor.vel.x > 0.0, "spikes are not solid");
    }

    #[test]
    fn actor_can_fall_past_the_grid_border() {
        let grid = grid_from_rows(&["000"]);
        let mut actor = Actor::new(Vec2::new(4.0, 10.0), Vec2::new(12.0, 14.0));
        actor.vel.y = 400.0;

        for _ in 0..30 {
            integrate_and_resolve(&mut actor, &grid, 1.0 / 60.0);
        }

        assert!(actor.pos.y > 16.0, "border is permeable, y={}", actor.pos.y);
        assert!(!actor.on_ground);
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let grid = grid_from_rows(&["111"]);
        let mut actor = Actor::new(Vec2::new(2.0, -30.0), Vec2::new(12.0, 14.0));
        actor.vel = Vec2::new(50.0, 50.0);
        let before = actor.pos;

        integrate_and_resolve(&mut actor, &grid, 0.0);

        assert_eq!(actor.pos, before);
    }
}
