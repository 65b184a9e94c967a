//! FSM AI components (state, brain memory, target handle).

use bevy::prelude::*;

use crate::components::{NavAgent, Pose, PoseFlag};

/// Состояния врага
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
#[reflect(Component)]
pub enum EnemyState {
    /// Стоит на месте, ждёт цель; периодически решает пойти побродить
    #[default]
    Idle,
    /// Бродит по случайным точкам вокруг себя
    Wander,
    /// Преследует цель
    Chase,
    /// Бьёт цель
    Attack,
    /// Мёртв — выставляется health bookkeeping, FSM такого врага пропускает
    Dead,
}

impl EnemyState {
    /// Поза, которая соответствует состоянию
    ///
    /// Dead позы не имеет: все флаги выключены.
    pub fn pose(self) -> Option<PoseFlag> {
        match self {
            EnemyState::Idle => Some(PoseFlag::Idle),
            EnemyState::Wander => Some(PoseFlag::Walk),
            EnemyState::Chase => Some(PoseFlag::Run),
            EnemyState::Attack => Some(PoseFlag::Attack),
            EnemyState::Dead => None,
        }
    }
}

/// Память FSM между тиками
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct EnemyBrain {
    /// Сколько простояли в Idle с последнего wander roll (секунды)
    pub idle_timer: f32,
    /// Удар ещё не нанесён в текущем swing cycle
    pub strike_armed: bool,
}

impl Default for EnemyBrain {
    fn default() -> Self {
        Self {
            idle_timer: 0.0,
            strike_armed: true,
        }
    }
}

/// Marker: entity — враг под управлением FSM
///
/// Тянет за собой всё, что нужно FSM, через Required Components.
/// `EnemyStats` и `ChaseTarget` задаются при спавне.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(EnemyState, EnemyBrain, NavAgent, Pose, Transform)]
pub struct Enemy;

/// Цель врага (обычно игрок)
///
/// Враг не владеет целью: если entity пропал, цель считается бесконечно далёкой.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct ChaseTarget(pub Entity);
