//! Perception & distance oracle
//!
//! Чистые функции над текущими позициями: никаких side effects.
//! Game-over делает цель бесконечно далёкой, поэтому после конца игры
//! все проверки видимости и досягаемости детерминированно проваливаются.

use bevy::prelude::*;

/// Расстояние удара: урон проходит только если цель ближе (строго)
pub const STRIKE_RANGE: f32 = 1.5;

/// Расстояние от агента до цели
///
/// `f32::INFINITY` если game-over или цели нет.
pub fn distance_to_target(agent_pos: Vec3, target_pos: Option<Vec3>, game_over: bool) -> f32 {
    if game_over {
        return f32::INFINITY;
    }
    match target_pos {
        Some(target) => agent_pos.distance(target),
        None => f32::INFINITY,
    }
}

/// Видит ли агент цель
///
/// Цель должна быть в радиусе восприятия И внутри конуса обзора:
/// угол между forward агента и направлением на цель ≤ half angle.
pub fn can_see_target(
    agent: &Transform,
    target_pos: Option<Vec3>,
    perception_radius: f32,
    view_half_angle_deg: f32,
    game_over: bool,
) -> bool {
    let distance = distance_to_target(agent.translation, target_pos, game_over);
    if distance > perception_radius {
        return false;
    }
    let Some(target) = target_pos else {
        return false;
    };

    let direction = target - agent.translation;
    view_angle_deg(agent.forward().as_vec3(), direction) <= view_half_angle_deg
}

/// Дошёл ли агент до цели (в пределах stopping distance навигации)
pub fn reached_target(agent_pos: Vec3, target_pos: Option<Vec3>, stopping_distance: f32, game_over: bool) -> bool {
    distance_to_target(agent_pos, target_pos, game_over) <= stopping_distance
}

/// Цель в зоне удара
pub fn within_strike_range(agent_pos: Vec3, target_pos: Vec3) -> bool {
    (target_pos - agent_pos).length() < STRIKE_RANGE
}

/// Угол между forward и направлением на цель (градусы)
///
/// Вырожденный вектор (цель в той же точке) даёт 0°.
pub fn view_angle_deg(forward: Vec3, direction: Vec3) -> f32 {
    const EPSILON_SQ: f32 = 1e-10;
    if forward.length_squared() < EPSILON_SQ || direction.length_squared() < EPSILON_SQ {
        return 0.0;
    }
    forward.angle_between(direction).to_degrees()
}
