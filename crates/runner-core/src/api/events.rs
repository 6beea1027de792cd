/// Things that happened during one simulation step.
///
/// The buffer clears at the start of every step and the core never reads
/// it back; it exists for hosts to drive audio and UI feedback without
/// diffing simulation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// A pepper was collected; `score` is the new total.
    PepperCollected { score: u32 },
    /// The score crossed an extra-life multiple.
    ExtraLife,
    /// The player lost a heart.
    PlayerHurt,
    /// The player lost the last heart and went back to the checkpoint.
    PlayerRespawned,
    /// A projectile left the muzzle.
    ProjectileFired,
    /// An enemy ran out of hit points.
    EnemyDefeated,
    /// The goal tile was reached; `next_level` is the wrapped index that
    /// loads right after this step.
    LevelCompleted { next_level: usize },
}
