//! The simulation context: owns all mutable state and runs fixed steps.
//!
//! One `Simulation` per session, owned by the caller; no globals, no
//! process-wide state. A step is synchronous and atomic from the host's
//! view; level (re)loads are barriers that never interleave with a step.

use glam::Vec2;

use crate::api::events::SimEvent;
use crate::assets::level::LevelData;
use crate::components::enemy::Enemy;
use crate::components::explosion::Explosion;
use crate::components::pepper::Pepper;
use crate::components::player::Player;
use crate::components::projectile::Projectile;
use crate::core::camera::Camera;
use crate::core::grid::TileGrid;
use crate::core::pool::Pool;
use crate::input::intent::IntentSnapshot;
use crate::systems;

/// Pool capacities. Exhaustion drops spawns silently, so these are soft
/// ceilings on simultaneously live entities.
const ENEMY_CAPACITY: usize = 32;
const PROJECTILE_CAPACITY: usize = 16;
const EXPLOSION_CAPACITY: usize = 16;

/// Knobs the host provides once at construction.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Camera view extent in world units.
    pub viewport: Vec2,
    /// Camera lead in the player's facing direction.
    pub look_ahead: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(320.0, 180.0),
            look_ahead: 24.0,
        }
    }
}

/// The whole simulation: level sequence, player, pools, camera, events.
pub struct Simulation {
    levels: Vec<LevelData>,
    level_index: usize,
    grid: TileGrid,
    player: Player,
    enemies: Pool<Enemy>,
    projectiles: Pool<Projectile>,
    explosions: Pool<Explosion>,
    peppers: Vec<Pepper>,
    camera: Camera,
    events: Vec<SimEvent>,
}

impl Simulation {
    /// Build a session over a level sequence and load the first level.
    /// Returns `None` when `levels` is empty: the simulation only exists
    /// once level data does, so stepping never has to check readiness.
    pub fn new(levels: Vec<LevelData>, config: SimConfig) -> Option<Self> {
        let (grid, spawn) = {
            let first = levels.first()?;
            (TileGrid::from_level(first), first.spawn_point())
        };
        let mut sim = Self {
            levels,
            level_index: 0,
            grid,
            player: Player::new(spawn),
            enemies: Pool::new(ENEMY_CAPACITY),
            projectiles: Pool::new(PROJECTILE_CAPACITY),
            explosions: Pool::new(EXPLOSION_CAPACITY),
            peppers: Vec::new(),
            camera: Camera::new(config.viewport, config.look_ahead),
            events: Vec::new(),
        };
        sim.load_level(0);
        Some(sim)
    }

    /// Run one fixed step. `dt` is the step delta in seconds; the caller
    /// clamps oversized deltas (see [`crate::core::clock::StepClock`]).
    ///
    /// Order per the control flow contract: player, enemies, combat,
    /// effects, camera, then any goal-triggered level load, so the load
    /// stays a barrier between steps rather than a mutation inside one.
    pub fn step(&mut self, intent: &IntentSnapshot, dt: f32) {
        self.events.clear();

        let reached_goal = systems::player::update(
            &mut self.player,
            intent,
            &self.grid,
            &mut self.projectiles,
            &mut self.peppers,
            &mut self.events,
            dt,
        );
        systems::enemy::update(
            &mut self.enemies,
            &mut self.player,
            &self.grid,
            &mut self.events,
            dt,
        );
        systems::combat::update_projectiles(
            &mut self.projectiles,
            &mut self.enemies,
            &mut self.explosions,
            &self.grid,
            &mut self.events,
            dt,
        );
        systems::combat::update_explosions(&mut self.explosions, dt);

        self.camera.follow(
            self.player.actor.pos,
            self.player.facing,
            self.grid.pixel_extent(),
        );

        if reached_goal {
            let next = (self.level_index + 1) % self.levels.len();
            self.events.push(SimEvent::LevelCompleted { next_level: next });
            self.load_level(next);
        }
    }

    /// Advance to the next level in the sequence, wrapping past the end.
    pub fn advance_level(&mut self) {
        let next = (self.level_index + 1) % self.levels.len();
        self.load_level(next);
    }

    /// Reload the current level (player back to its spawn, pools cleared).
    pub fn reload_level(&mut self) {
        self.load_level(self.level_index);
    }

    /// Replace all level-scoped state with level `index` (wrapped).
    fn load_level(&mut self, index: usize) {
        self.level_index = index % self.levels.len();
        let level = &self.levels[self.level_index];
        self.grid = TileGrid::from_level(level);
        self.player.enter_level(level.spawn_point());

        self.enemies.reset_all();
        self.projectiles.reset_all();
        self.explosions.reset_all();
        for spawn in &level.enemies {
            self.enemies.spawn(Enemy::spawned(Vec2::new(spawn.x, spawn.y)));
        }

        self.peppers.clear();
        self.peppers.extend(
            level
                .peppers
                .iter()
                .map(|p| Pepper::new(Vec2::new(p.x, p.y))),
        );

        log::info!(
            "level {} loaded: {}x{} tiles, {} enemies, {} peppers",
            self.level_index,
            level.width,
            level.height,
            self.enemies.active_count(),
            self.peppers.len()
        );
    }

    // -- Read-only state for the renderer --

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn peppers(&self) -> &[Pepper] {
        &self.peppers
    }

    /// Live enemies, in slot order.
    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter_active()
    }

    /// Live projectiles, in slot order.
    pub fn projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter_active()
    }

    /// Live explosion effects, in slot order.
    pub fn explosions(&self) -> impl Iterator<Item = &Explosion> {
        self.explosions.iter_active()
    }

    /// Everything that happened during the latest step.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }
}
