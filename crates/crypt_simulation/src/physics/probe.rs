//! Spatial probe — ray queries против геометрии уровня
//!
//! Host (physics движка) отвечает на вопрос "что лежит вдоль луча".
//! FSM использует ответ для трёх проверок:
//! - есть ли пол под кандидатом wander-точки
//! - есть ли стена прямо перед врагом
//! - есть ли пол чуть впереди врага

use bevy::prelude::*;

/// Дальность всех probe лучей врага (метры)
pub const PROBE_DISTANCE: f32 = 1.0;

/// Смещение вперёд для проверки пола перед врагом (метры)
pub const GROUND_AHEAD_OFFSET: f32 = 0.1;

/// Тег поверхности, в которую попал луч
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum SurfaceKind {
    /// Проходимый пол
    Ground,
    /// Стена / препятствие
    Wall,
    /// Всё остальное (декор, ящики)
    Prop,
}

/// Ближайшее попадание луча
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub kind: SurfaceKind,
    pub distance: f32,
}

/// Capability: ray query с ограниченной дальностью
///
/// Возвращает ближайшую поверхность вдоль `direction` не дальше
/// `max_distance`, либо `None` если луч никуда не попал.
pub trait SurfaceProbe: Send + Sync {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<SurfaceHit>;
}

/// Probe, который никуда не попадает (нет геометрии)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSurfaces;

impl SurfaceProbe for NoSurfaces {
    fn cast_ray(&self, _origin: Vec3, _direction: Vec3, _max_distance: f32) -> Option<SurfaceHit> {
        None
    }
}

/// Resource: probe, которым пользуются AI системы
///
/// Если resource не вставлен, AI ведёт себя как с `NoSurfaces`.
#[derive(Resource)]
pub struct SurfaceProbes(pub Box<dyn SurfaceProbe>);

impl SurfaceProbes {
    pub fn new(probe: impl SurfaceProbe + 'static) -> Self {
        Self(Box::new(probe))
    }
}

impl SurfaceProbe for SurfaceProbes {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<SurfaceHit> {
        self.0.cast_ray(origin, direction, max_distance)
    }
}

fn hit_kind(probe: &dyn SurfaceProbe, origin: Vec3, direction: Vec3) -> Option<SurfaceKind> {
    probe.cast_ray(origin, direction, PROBE_DISTANCE).map(|hit| hit.kind)
}

/// Пол под точкой (луч вниз на PROBE_DISTANCE)
pub fn ground_below(probe: &dyn SurfaceProbe, point: Vec3) -> bool {
    hit_kind(probe, point, Vec3::NEG_Y) == Some(SurfaceKind::Ground)
}

/// Стена прямо перед агентом
pub fn wall_ahead(probe: &dyn SurfaceProbe, transform: &Transform) -> bool {
    hit_kind(probe, transform.translation, transform.forward().as_vec3()) == Some(SurfaceKind::Wall)
}

/// Пол чуть впереди агента (луч вниз из точки на GROUND_AHEAD_OFFSET перед ним)
pub fn ground_ahead(probe: &dyn SurfaceProbe, transform: &Transform) -> bool {
    let origin = transform.translation + transform.forward().as_vec3() * GROUND_AHEAD_OFFSET;
    hit_kind(probe, origin, transform.down().as_vec3()) == Some(SurfaceKind::Ground)
}
