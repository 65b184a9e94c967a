//! Enemy FSM: решение на каждый тик (Idle / Wander / Chase / Attack).
//!
//! Логика живёт в `EnemyAgent::tick` — обычная функция над заимствованными
//! компонентами, без ECS. Система `enemy_fsm_tick` только собирает
//! компоненты, вызывает tick и превращает `TickEffects` в события.

use bevy::prelude::*;
use rand::Rng;

use crate::ai::events::TargetNoticed;
use crate::ai::perception::{can_see_target, reached_target, within_strike_range};
use crate::ai::{ChaseTarget, Enemy, EnemyBrain, EnemyState, EnemyStats};
use crate::combat::StrikeLanded;
use crate::components::{NavAgent, Pose, PoseFlag};
use crate::physics::{ground_ahead, ground_below, wall_ahead, NoSurfaces, SurfaceProbe, SurfaceProbes};
use crate::shared::GameState;
use crate::DeterministicRng;

/// Интервал между wander roll в Idle (секунды)
pub const IDLE_INTERVAL: f32 = 4.0;

/// Roll в [0, WANDER_ROLL_RANGE); Wander если roll > WANDER_ROLL_THRESHOLD
pub const WANDER_ROLL_RANGE: u32 = 100;
pub const WANDER_ROLL_THRESHOLD: u32 = 70;

/// Контекст тика: то, что раньше было глобальным состоянием
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    /// Прошедшее время (секунды)
    pub delta: f32,
    /// Игра закончилась — цель для всех бесконечно далеко
    pub game_over: bool,
}

/// Что тик попросил сделать снаружи FSM
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEffects {
    /// Враг заметил цель (звук "notice")
    pub noticed_target: bool,
    /// Удар попал: урон для Combat collaborator
    pub strike: Option<u32>,
}

/// Один враг на время одного тика
pub struct EnemyAgent<'a> {
    pub stats: &'a EnemyStats,
    pub state: &'a mut EnemyState,
    pub brain: &'a mut EnemyBrain,
    pub transform: &'a mut Transform,
    pub nav: &'a mut NavAgent,
    pub pose: &'a mut Pose,
}

impl EnemyAgent<'_> {
    /// Один шаг FSM
    ///
    /// `target` — текущая позиция цели, `None` если цели нет.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        ctx: &TickContext,
        target: Option<Vec3>,
        probe: &dyn SurfaceProbe,
        rng: &mut R,
    ) -> TickEffects {
        let mut effects = TickEffects::default();

        match *self.state {
            EnemyState::Dead => {}

            EnemyState::Idle => {
                self.nav.set_enabled(false);

                if self.sees(ctx, target) {
                    effects.noticed_target = true;
                    self.transition_to(EnemyState::Chase);
                } else {
                    self.brain.idle_timer += ctx.delta;

                    if self.brain.idle_timer > IDLE_INTERVAL {
                        self.brain.idle_timer = 0.0;

                        if wander_roll(rng) {
                            self.transition_to(EnemyState::Wander);
                        }
                    }
                }
            }

            EnemyState::Wander => {
                self.nav.set_enabled(true);

                if !self.nav.has_path() {
                    // Без пути: ищем новую точку, остальное в этот тик не проверяем
                    self.try_pick_wander_destination(probe, rng);
                    return effects;
                }

                if self.sees(ctx, target) {
                    effects.noticed_target = true;
                    self.transition_to(EnemyState::Chase);
                } else if self.nav.path_complete() {
                    self.transition_to(EnemyState::Idle);
                }

                // Визуальный override: state не трогаем
                if wall_ahead(probe, &*self.transform) || !ground_ahead(probe, &*self.transform) {
                    self.pose.set_exclusive(PoseFlag::Idle);
                }
            }

            EnemyState::Chase => {
                self.nav.set_enabled(true);
                self.pose.set_exclusive(PoseFlag::Run);

                if let Some(target_pos) = target {
                    let from = self.transform.translation;
                    self.nav.set_destination(from, target_pos);
                    face_target(self.transform, target_pos);
                }
                self.nav.set_speed(self.stats.run_speed());

                if ctx.game_over || !self.sees(ctx, target) {
                    self.transition_to(EnemyState::Idle);
                }

                // Проверяется всегда: reach перезаписывает Idle в том же тике
                if self.reached(ctx, target) {
                    self.transition_to(EnemyState::Attack);
                }
            }

            EnemyState::Attack => {
                if ctx.game_over {
                    self.transition_to(EnemyState::Wander);
                    return effects;
                }

                self.nav.set_enabled(false);
                if let Some(target_pos) = target {
                    face_target(self.transform, target_pos);
                }
                self.pose.set_exclusive(PoseFlag::Attack);

                effects.strike = self.resolve_strike(target);

                // Swing доигран: отпускаем позу, следующий swing снова может ударить.
                // Между swing'ами поза пустая до следующего тика, это нормально.
                if self.pose.clip_finished() {
                    self.pose.set_flag(PoseFlag::Attack, false);
                    self.brain.strike_armed = true;
                }

                if !self.reached(ctx, target) {
                    self.transition_to(EnemyState::Chase);
                }
            }
        }

        effects
    }

    /// Переход: сбросить все флаги позы, включить один, записать state
    pub fn transition_to(&mut self, next: EnemyState) {
        if *self.state == EnemyState::Idle && next != EnemyState::Idle {
            self.brain.idle_timer = 0.0;
        }
        if next == EnemyState::Attack && *self.state != EnemyState::Attack {
            self.brain.strike_armed = true;
        }

        match next.pose() {
            Some(flag) => self.pose.set_exclusive(flag),
            None => self.pose.clear_all(),
        }
        *self.state = next;
    }

    fn sees(&self, ctx: &TickContext, target: Option<Vec3>) -> bool {
        can_see_target(
            &*self.transform,
            target,
            self.stats.perception_radius(),
            self.stats.view_half_angle_deg(),
            ctx.game_over,
        )
    }

    fn reached(&self, ctx: &TickContext, target: Option<Vec3>) -> bool {
        reached_target(self.transform.translation, target, self.nav.stopping_distance, ctx.game_over)
    }

    /// Удар: не больше одного за swing, только если цель в strike range
    fn resolve_strike(&mut self, target: Option<Vec3>) -> Option<u32> {
        let target_pos = target?;
        if !self.brain.strike_armed || !within_strike_range(self.transform.translation, target_pos) {
            return None;
        }
        self.brain.strike_armed = false;
        Some(self.stats.attack_power())
    }

    /// Случайная точка вокруг себя; коммитим только если под ней пол
    fn try_pick_wander_destination<R: Rng + ?Sized>(&mut self, probe: &dyn SurfaceProbe, rng: &mut R) -> bool {
        let radius = self.stats.wander_radius();
        let origin = self.transform.translation;
        let candidate = origin + Vec3::new(wander_offset(rng, radius), 0.0, wander_offset(rng, radius));

        if !ground_below(probe, candidate) {
            return false;
        }

        self.nav.set_speed(self.stats.walk_speed());
        self.nav.set_destination(origin, candidate);
        self.pose.set_exclusive(PoseFlag::Walk);
        true
    }
}

/// Roll: uniform integer в [0, 100), успех если > 70
pub fn wander_roll<R: Rng + ?Sized>(rng: &mut R) -> bool {
    wander_roll_succeeds(rng.gen_range(0..WANDER_ROLL_RANGE))
}

pub fn wander_roll_succeeds(roll: u32) -> bool {
    roll > WANDER_ROLL_THRESHOLD
}

/// Смещение по одной горизонтальной оси в [-radius, radius]
fn wander_offset<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> f32 {
    if !radius.is_finite() || radius <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-radius..=radius)
}

/// Развернуться к цели только по yaw (цель на высоте агента)
pub fn face_target(transform: &mut Transform, target: Vec3) {
    let flat_target = Vec3::new(target.x, transform.translation.y, target.z);
    if flat_target.distance_squared(transform.translation) > 1e-8 {
        transform.look_at(flat_target, Vec3::Y);
    }
}

/// Система: один тик FSM для всех врагов
///
/// Цели читаются через `Without<Enemy>`: враги не преследуют друг друга,
/// а запрос Transform не конфликтует с мутабельным Transform врагов.
pub fn enemy_fsm_tick(
    mut enemies: Query<
        (
            Entity,
            &EnemyStats,
            &mut EnemyState,
            &mut EnemyBrain,
            &mut Transform,
            &mut NavAgent,
            &mut Pose,
            Option<&ChaseTarget>,
        ),
        With<Enemy>,
    >,
    targets: Query<&Transform, Without<Enemy>>,
    probes: Option<Res<SurfaceProbes>>,
    game_state: Res<GameState>,
    time: Res<Time<Fixed>>,
    mut rng: ResMut<DeterministicRng>,
    mut noticed_events: EventWriter<TargetNoticed>,
    mut strike_events: EventWriter<StrikeLanded>,
) {
    let ctx = TickContext {
        delta: time.delta_secs(),
        game_over: game_state.game_over,
    };
    let no_surfaces = NoSurfaces;
    let probe: &dyn SurfaceProbe = match probes.as_deref() {
        Some(probes) => probes as &dyn SurfaceProbe,
        None => &no_surfaces,
    };

    for (entity, stats, mut state, mut brain, mut transform, mut nav, mut pose, chase_target) in enemies.iter_mut() {
        let target_entity = chase_target.map(|t| t.0);
        let target_pos = target_entity
            .and_then(|t| targets.get(t).ok())
            .map(|t| t.translation);

        let previous = *state;
        let mut agent = EnemyAgent {
            stats,
            state: &mut *state,
            brain: &mut *brain,
            transform: &mut *transform,
            nav: &mut *nav,
            pose: &mut *pose,
        };
        let effects = agent.tick(&ctx, target_pos, probe, &mut rng.rng);

        if *state != previous {
            crate::log(&format!(
                "AI: {:?} ({}) {:?} → {:?}",
                entity,
                stats.name(),
                previous,
                *state
            ));
        }

        if effects.noticed_target {
            crate::log(&format!("👁️ {:?} ({}) noticed target {:?}", entity, stats.name(), target_entity));
            noticed_events.write(TargetNoticed {
                enemy: entity,
                target: target_entity,
            });
        }

        if let (Some(damage), Some(target)) = (effects.strike, target_entity) {
            strike_events.write(StrikeLanded {
                attacker: entity,
                target,
                damage,
            });
        }
    }
}
