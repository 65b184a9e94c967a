//! Combat module
//!
//! ECS ответственность:
//! - Health цели, применение урона от ударов врагов
//! - Death bookkeeping: Dead state врагов, game-over при смерти игрока
//! - Events: StrikeLanded → DamageDealt, EntityDied
//!
//! Анимация удара и hit VFX — на стороне host'а.

use bevy::prelude::*;

pub mod damage;

#[cfg(test)]
mod damage_tests;

// Re-export основных типов
pub use damage::{apply_strikes, end_game_on_player_death, mark_dead_enemies, DamageDealt, EntityDied, StrikeLanded};

use crate::SimulationSet;

/// Combat Plugin
///
/// Порядок выполнения (SimulationSet::Resolve, после FSM):
/// 1. apply_strikes — StrikeLanded → Health → DamageDealt/EntityDied
/// 2. mark_dead_enemies — Health == 0 → EnemyState::Dead
/// 3. end_game_on_player_death — EntityDied(Player) → GameState.game_over
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<StrikeLanded>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>()
            .add_systems(
                FixedUpdate,
                (apply_strikes, mark_dead_enemies, end_game_on_player_death)
                    .chain()
                    .in_set(SimulationSet::Resolve),
            );
    }
}
