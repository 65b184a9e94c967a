//! Spawn helper для врагов

use bevy::prelude::*;

use crate::ai::{ChaseTarget, Enemy, EnemyStats};
use crate::components::NavAgent;

/// Спавнит врага с полным набором компонентов
///
/// - Enemy (Required: EnemyState, EnemyBrain, NavAgent, Pose, Transform)
/// - EnemyStats из пресета варианта
/// - ChaseTarget, если цель уже известна
///
/// Враг смотрит вдоль -Z (Bevy forward) и стартует в Idle.
pub fn spawn_enemy(commands: &mut Commands, stats: EnemyStats, position: Vec3, target: Option<Entity>) -> Entity {
    crate::log(&format!("AI: spawning {} at {:?}", stats.name(), position));

    let mut entity = commands.spawn((Enemy, stats, Transform::from_translation(position), NavAgent::default()));
    if let Some(target) = target {
        entity.insert(ChaseTarget(target));
    }
    entity.id()
}
