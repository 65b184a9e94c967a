//! AI Events — что FSM сообщает наружу
//!
//! Host (аудио) слушает TargetNoticed и проигрывает звук "заметил игрока".

use bevy::prelude::*;

/// Враг заметил цель (переход в Chase из Idle или Wander)
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TargetNoticed {
    /// Кто заметил
    pub enemy: Entity,
    /// Кого заметил (None если ChaseTarget не задан)
    pub target: Option<Entity>,
}
