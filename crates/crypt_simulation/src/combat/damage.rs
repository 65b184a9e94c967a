//! Damage application и death bookkeeping
//!
//! FSM не трогает Health напрямую: он пишет StrikeLanded, а эта система
//! применяет урон к цели и сообщает о результате.

use bevy::prelude::*;

use crate::ai::EnemyState;
use crate::components::{Health, NavAgent, Player, Pose};
use crate::shared::GameState;

/// Событие: удар врага дошёл до цели (цель была в strike range)
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct StrikeLanded {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: u32,
}

/// Событие: урон нанесен
///
/// Генерируется после применения damage к Health.
/// Используется для UI, звуков, эффектов.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: u32,
    pub target_died: bool,
}

/// Событие: entity умер (health дошёл до 0)
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct EntityDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Система: apply damage от StrikeLanded событий
///
/// 1. Читаем StrikeLanded
/// 2. Применяем damage к Health цели
/// 3. Генерируем DamageDealt и (на переходе alive → dead) EntityDied
pub fn apply_strikes(
    mut strikes: EventReader<StrikeLanded>,
    mut damage_dealt_events: EventWriter<DamageDealt>,
    mut entity_died_events: EventWriter<EntityDied>,
    mut targets: Query<&mut Health>,
) {
    for strike in strikes.read() {
        let Ok(mut health) = targets.get_mut(strike.target) else {
            crate::log_warning(&format!(
                "StrikeLanded: target {:?} has no Health component",
                strike.target
            ));
            continue;
        };

        let was_alive = health.is_alive();
        health.take_damage(strike.damage);
        let died = was_alive && !health.is_alive();

        crate::log_info(&format!(
            "⚔️ {:?} hit {:?} for {} (health: {}/{})",
            strike.attacker, strike.target, strike.damage, health.current, health.max
        ));

        damage_dealt_events.write(DamageDealt {
            attacker: strike.attacker,
            target: strike.target,
            damage: strike.damage,
            target_died: died,
        });

        if died {
            entity_died_events.write(EntityDied {
                entity: strike.target,
                killer: Some(strike.attacker),
            });
            crate::log_info(&format!("💀 Entity {:?} killed by {:?}", strike.target, strike.attacker));
        }
    }
}

/// Система: враг с нулевым Health переходит в Dead
///
/// Единственный путь в Dead: FSM сам туда не переходит.
/// Dead враг стоит (навигация выключена) и без позы.
pub fn mark_dead_enemies(mut enemies: Query<(Entity, &Health, &mut EnemyState, &mut NavAgent, &mut Pose), Changed<Health>>) {
    for (entity, health, mut state, mut nav, mut pose) in enemies.iter_mut() {
        if health.is_alive() || *state == EnemyState::Dead {
            continue;
        }
        *state = EnemyState::Dead;
        nav.set_enabled(false);
        pose.clear_all();
        crate::log_info(&format!("Enemy {:?} died → AI disabled (Dead state)", entity));
    }
}

/// Система: смерть игрока заканчивает игру
pub fn end_game_on_player_death(
    mut deaths: EventReader<EntityDied>,
    players: Query<(), With<Player>>,
    mut game_state: ResMut<GameState>,
) {
    for death in deaths.read() {
        if players.contains(death.entity) && !game_state.game_over {
            game_state.end_game();
            crate::log_info(&format!("☠️ Player {:?} died → game over", death.entity));
        }
    }
}
