//! Chase-and-bite enemy behavior.

use crate::api::events::SimEvent;
use crate::components::enemy::Enemy;
use crate::components::player::Player;
use crate::core::grid::TileGrid;
use crate::core::physics::{integrate_and_resolve, GRAVITY};
use crate::core::pool::Pool;
use crate::systems::player::report_damage;

/// Horizontal acceleration toward the player.
pub const CHASE_ACCEL: f32 = 200.0;

/// Chase speed cap.
pub const CHASE_MAX_SPEED: f32 = 60.0;

/// Horizontal distance that arms a bite.
pub const MELEE_RANGE: f32 = 20.0;

/// Seconds between bite attempts.
pub const BITE_COOLDOWN: f32 = 0.8;

/// Horizontal shove applied to a bitten player, away from the enemy.
pub const KNOCKBACK_X: f32 = 150.0;

/// Upward launch applied to a bitten player.
pub const KNOCKBACK_Y: f32 = -140.0;

/// How far below the level bottom a fallen enemy despawns.
pub const DESPAWN_MARGIN: f32 = 64.0;

/// Advance every active enemy by one step: chase, resolve against the
/// grid, bite when close, despawn when fallen out of the level.
pub fn update(
    enemies: &mut Pool<Enemy>,
    player: &mut Player,
    grid: &TileGrid,
    events: &mut Vec<SimEvent>,
    dt: f32,
) {
    let despawn_line = grid.pixel_extent().y + DESPAWN_MARGIN;

    for enemy in enemies.iter_active_mut() {
        // Chase: nudge horizontal velocity toward the player, capped.
        let dir = horizontal_sign(player.actor.pos.x - enemy.actor.pos.x);
        enemy.actor.vel.x = (enemy.actor.vel.x + dir * CHASE_ACCEL * dt)
            .clamp(-CHASE_MAX_SPEED, CHASE_MAX_SPEED);
        enemy.actor.vel.y += GRAVITY * dt;
        integrate_and_resolve(&mut enemy.actor, grid, dt);

        // Bite when close, off cooldown, and actually overlapping. The
        // knockback lands even if the grace window swallowed the damage.
        enemy.bite_cooldown = (enemy.bite_cooldown - dt).max(0.0);
        let distance = (player.actor.pos.x - enemy.actor.pos.x).abs();
        enemy.lunge = distance < MELEE_RANGE;
        if distance < MELEE_RANGE
            && enemy.bite_cooldown <= 0.0
            && enemy.actor.overlaps(&player.actor)
        {
            report_damage(player, events);
            enemy.bite_cooldown = BITE_COOLDOWN;
            let away = horizontal_sign(player.actor.pos.x - enemy.actor.pos.x);
            player.actor.vel.x += KNOCKBACK_X * away;
            player.actor.vel.y = KNOCKBACK_Y;
        }

        // The only despawn besides death: falling out of the level.
        if enemy.actor.pos.y > despawn_line {
            enemy.active = false;
        }
    }
}

/// Three-way sign: 0.0 stays 0.0, unlike `f32::signum`.
fn horizontal_sign(dx: f32) -> f32 {
    if dx > 0.0 {
        1.0
    } else if dx < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::level::{LevelData, SpawnPoint};
    use crate::components::player::MAX_HEARTS;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    /// Open 20-column room with a floor whose top sits at y=32.
    fn room() -> TileGrid {
        let rows = [
            "00000000000000000000",
            "00000000000000000000",
            "11111111111111111111",
        ];
        let tiles = rows
            .iter()
            .flat_map(|row| row.chars().map(|c| c.to_digit(10).unwrap() as u8))
            .collect();
        TileGrid::from_level(&LevelData {
            width: 20,
            height: 3,
            tiles,
            spawn: SpawnPoint { x: 0.0, y: 0.0 },
            enemies: vec![],
            peppers: vec![],
        })
    }

    #[test]
    fn enemy_accelerates_toward_the_player() {
        let grid = room();
        let mut player = Player::new(Vec2::new(200.0, 18.0));
        let mut enemies = Pool::new(4);
        enemies.spawn(Enemy::spawned(Vec2::new(20.0, 20.0)));
        let mut events = Vec::new();

        update(&mut enemies, &mut player, &grid, &mut events, DT);

        let enemy = enemies.iter_active().next().unwrap();
        assert!(enemy.actor.vel.x > 0.0, "enemy should chase rightward");
    }

    #[test]
    fn chase_speed_is_clamped() {
        let grid = room();
        let mut player = Player::new(Vec2::new(300.0, 18.0));
        let mut enemies = Pool::new(4);
        enemies.spawn(Enemy::spawned(Vec2::new(20.0, 20.0)));
        let mut events = Vec::new();

        for _ in 0..120 {
            update(&mut enemies, &mut player, &grid, &mut events, DT);
            let enemy = enemies.iter_active().next().unwrap();
            assert!(
                enemy.actor.vel.x.abs() <= CHASE_MAX_SPEED,
                "chase speed {} exceeded the cap",
                enemy.actor.vel.x
            );
        }
    }

    #[test]
    fn overlapping_bite_hurts_and_knocks_back() {
        let grid = room();
        let mut player = Player::new(Vec2::new(100.0, 18.0));
        let mut enemies = Pool::new(4);
        // Slightly left of the player, overlapping
        enemies.spawn(Enemy::spawned(Vec2::new(94.0, 19.0)));
        let mut events = Vec::new();

        update(&mut enemies, &mut player, &grid, &mut events, DT);

        assert_eq!(player.hearts, MAX_HEARTS - 1);
        assert!(events.contains(&SimEvent::PlayerHurt));
        assert!(player.actor.vel.x > 0.0, "shoved away from the enemy");
        assert_eq!(player.actor.vel.y, KNOCKBACK_Y);
        let enemy = enemies.iter_active().next().unwrap();
        assert_eq!(enemy.bite_cooldown, BITE_COOLDOWN);
        assert!(enemy.lunge);
    }

    #[test]
    fn bite_respects_its_cooldown() {
        let grid = room();
        let mut player = Player::new(Vec2::new(100.0, 18.0));
        player.invuln = 0.0;
        let mut enemies = Pool::new(4);
        let mut fresh = Enemy::spawned(Vec2::new(94.0, 19.0));
        fresh.bite_cooldown = 0.5;
        enemies.spawn(fresh);
        let mut events = Vec::new();

        update(&mut enemies, &mut player, &grid, &mut events, DT);

        assert_eq!(player.hearts, MAX_HEARTS, "cooldown should hold the bite");
        assert!(events.is_empty());
    }

    #[test]
    fn out_of_range_enemy_does_not_bite() {
        let grid = room();
        let mut player = Player::new(Vec2::new(100.0, 18.0));
        let mut enemies = Pool::new(4);
        enemies.spawn(Enemy::spawned(Vec2::new(160.0, 18.0)));
        let mut events = Vec::new();

        update(&mut enemies, &mut player, &grid, &mut events, DT);

        assert_eq!(player.hearts, MAX_HEARTS);
        let enemy = enemies.iter_active().next().unwrap();
        assert!(!enemy.lunge);
    }

    #[test]
    fn fallen_enemy_is_returned_to_the_pool() {
        let grid = room();
        let mut player = Player::new(Vec2::new(8.0, 18.0));
        let mut enemies = Pool::new(4);
        // Below the level bottom (48) plus the margin
        enemies.spawn(Enemy::spawned(Vec2::new(200.0, 150.0)));
        let mut events = Vec::new();

        update(&mut enemies, &mut player, &grid, &mut events, DT);

        assert_eq!(enemies.active_count(), 0);
    }
}
