//! Headless navigation driver
//!
//! Stand-in для navmesh агента движка: прямая линия к destination,
//! без препятствий. Отвечает FSM тем же языком, что и настоящая навигация:
//! path_pending, remaining_distance, has_path.

use bevy::prelude::*;

use crate::components::{horizontal_distance, NavAgent};

/// Горизонтальный зазор, который считается "стоим прямо над/под точкой"
const ARRIVAL_EPSILON: f32 = 1e-3;

/// Продвинуть одного агента на `delta` секунд
///
/// - pending путь считается мгновенно (в этом же шаге)
/// - движение только в плоскости XZ, высота не меняется
/// - остановка по 3D расстоянию (как reached у FSM) либо когда
///   по горизонтали идти уже некуда
/// - агент разворачивается по направлению движения
/// - после прибытия путь остаётся активным
pub fn advance_nav_agent(nav: &mut NavAgent, transform: &mut Transform, delta: f32) {
    if !nav.enabled {
        return;
    }
    let Some(destination) = nav.destination else {
        return;
    };

    nav.path_pending = false;

    let position = transform.translation;
    let horizontal = horizontal_distance(position, destination);
    let arrived = position.distance(destination) <= nav.stopping_distance || horizontal <= ARRIVAL_EPSILON;

    if !arrived && nav.speed > 0.0 && delta > 0.0 {
        let heading = Vec3::new(destination.x - position.x, 0.0, destination.z - position.z) / horizontal;
        let step = (nav.speed * delta).min(horizontal);

        transform.translation += heading * step;
        transform.look_to(heading, Vec3::Y);
    }

    nav.remaining_distance = horizontal_distance(transform.translation, destination);
}

/// Система: headless навигация для всех агентов
pub fn drive_nav_agents(mut agents: Query<(&mut NavAgent, &mut Transform)>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for (mut nav, mut transform) in agents.iter_mut() {
        advance_nav_agent(&mut nav, &mut transform, delta);
    }
}
