//! AI decision-making module
//!
//! Enemy FSM: Idle → Wander → Chase → Attack.
//! - perception: distance / view cone / reach (чистые функции)
//! - components: EnemyState, EnemyBrain, EnemyStats, варианты
//! - systems: тик FSM, spawn helper

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod perception;
pub mod systems;

#[cfg(test)]
mod perception_tests;

// Re-export основных типов
pub use components::*;
pub use events::TargetNoticed;
pub use systems::{enemy_fsm_tick, spawn_enemy, EnemyAgent, TickContext, TickEffects};

use crate::SimulationSet;

/// AI Plugin
///
/// Регистрирует FSM в FixedUpdate (SimulationSet::Decide).
/// Требует DeterministicRng и GameState (их вставляет SimulationPlugin).
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TargetNoticed>()
            .init_resource::<VariantTable>()
            .register_type::<EnemyState>()
            .register_type::<EnemyBrain>()
            .register_type::<EnemyStats>()
            .add_systems(FixedUpdate, enemy_fsm_tick.in_set(SimulationSet::Decide));
    }
}
