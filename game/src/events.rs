use crate::game::GamePhase;
use crate::world_data::{BlockId, PowerupKind};

/// Something noteworthy that happened during an update, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    BallLaunched,
    WallHit,
    PaddleHit { offset: f32 },
    BlockDamaged { id: BlockId, hits_left: u32 },
    BlockDestroyed { id: BlockId, score: u32 },
    PowerupSpawned(PowerupKind),
    PowerupCollected(PowerupKind),
    PiercingExpired,
    LifeLost { lives_left: u32 },
}
