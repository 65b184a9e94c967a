//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: здоровье (Health) — получатель урона
//! - movement: navigation handle (NavAgent)
//! - pose: флаги анимации и прогресс клипа (Pose, PoseFlag)
//! - player: player marker (Player)
//!
//! AI-компоненты (EnemyState, EnemyStats, EnemyBrain) живут в crate::ai.

pub mod actor;
pub mod movement;
pub mod player;
pub mod pose;

// Re-exports для удобного импорта
pub use actor::*;
pub use movement::*;
pub use player::*;
pub use pose::*;
