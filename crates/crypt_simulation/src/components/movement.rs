//! Navigation handle: что ECS просит у навигации и что навигация отвечает
//!
//! Архитектура:
//! - FSM пишет intent: enabled, speed, destination
//! - Host navigation (navmesh агент движка или headless driver) пишет отчёт:
//!   has_path, remaining_distance, path_pending
//! - Алгоритм поиска пути здесь не живёт

use bevy::prelude::*;

/// Stopping distance по умолчанию (метры)
///
/// Меньше strike range (1.5), чтобы враг, дошедший до цели, доставал ударом.
pub const DEFAULT_STOPPING_DISTANCE: f32 = 1.2;

/// Навигационный агент врага
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct NavAgent {
    /// Агент следует по пути только когда enabled
    pub enabled: bool,
    /// Скорость движения по пути (м/с)
    pub speed: f32,
    /// Текущая точка назначения (world coordinates)
    pub destination: Option<Vec3>,
    /// Есть активный путь (в том числе уже пройденный до конца)
    pub has_path: bool,
    /// Оставшаяся длина пути (метры)
    pub remaining_distance: f32,
    /// На каком расстоянии от цели агент считает её достигнутой
    pub stopping_distance: f32,
    /// Путь ещё вычисляется
    pub path_pending: bool,
}

impl Default for NavAgent {
    fn default() -> Self {
        Self {
            enabled: false,
            speed: 0.0,
            destination: None,
            has_path: false,
            remaining_distance: 0.0,
            stopping_distance: DEFAULT_STOPPING_DISTANCE,
            path_pending: false,
        }
    }
}

impl NavAgent {
    /// Включить/выключить следование по пути
    ///
    /// Выключенный агент теряет путь: после повторного включения
    /// `has_path() == false`, пока не задан новый destination.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            self.clear_path();
        }
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Запросить путь к точке
    ///
    /// Путь сразу считается активным, но pending до ответа навигации.
    /// `from` нужен чтобы remaining_distance не был 0 пока путь считается.
    pub fn set_destination(&mut self, from: Vec3, point: Vec3) {
        self.destination = Some(point);
        self.has_path = true;
        self.path_pending = true;
        self.remaining_distance = horizontal_distance(from, point);
    }

    pub fn has_path(&self) -> bool {
        self.has_path
    }

    /// Путь пройден: осталось не больше stopping distance и ничего не считается
    pub fn path_complete(&self) -> bool {
        self.remaining_distance <= self.stopping_distance && !self.path_pending
    }

    fn clear_path(&mut self) {
        self.destination = None;
        self.has_path = false;
        self.path_pending = false;
        self.remaining_distance = 0.0;
    }
}

/// Расстояние в горизонтальной плоскости (XZ)
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.z - b.z).length()
}
