pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use crate::api::events::SimEvent;
pub use crate::api::sim::{SimConfig, Simulation};
pub use crate::assets::level::{EnemySpawn, LevelData, PepperSpawn, SpawnPoint};
pub use crate::components::enemy::Enemy;
pub use crate::components::explosion::Explosion;
pub use crate::components::pepper::Pepper;
pub use crate::components::player::{DamageOutcome, Player};
pub use crate::components::projectile::Projectile;
pub use crate::core::actor::{aabb_overlap, Actor};
pub use crate::core::camera::Camera;
pub use crate::core::clock::StepClock;
pub use crate::core::grid::{TileGrid, TileKind, TILE_SIZE};
pub use crate::core::physics::{integrate_and_resolve, GRAVITY};
pub use crate::core::pool::{Pool, PoolSlot};
pub use crate::input::intent::IntentSnapshot;
