//! Enemy stat presets: data-driven конфигурация вместо подклассов
//!
//! Один FSM на всех врагов. Разница между "зомби" и "скелетом" — только
//! в числах: EnemyVariant → EnemyStats через таблицу.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

/// Половина угла обзора по умолчанию (градусы)
pub const DEFAULT_VIEW_HALF_ANGLE_DEG: f32 = 30.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("enemy name must not be empty")]
    EmptyName,

    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidScalar { field: &'static str, value: f32 },

    #[error("view half angle must be in (0, 180] degrees, got {0}")]
    InvalidViewAngle(f32),

    #[error("unknown enemy variant '{0}'")]
    UnknownVariant(String),

    #[error("variant '{0}' is already registered")]
    DuplicateVariant(String),
}

/// Характеристики врага
///
/// Неизменяемы после создания: поля приватные, наружу только getters.
/// Serde нужен host'у для загрузки пресетов; после загрузки вызвать `validate()`.
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct EnemyStats {
    name: String,
    attack_power: u32,
    walk_speed: f32,
    run_speed: f32,
    wander_radius: f32,
    perception_radius: f32,
    #[serde(default = "default_view_half_angle")]
    view_half_angle_deg: f32,
}

fn default_view_half_angle() -> f32 {
    DEFAULT_VIEW_HALF_ANGLE_DEG
}

impl EnemyStats {
    pub fn new(
        name: impl Into<String>,
        attack_power: u32,
        walk_speed: f32,
        run_speed: f32,
        wander_radius: f32,
        perception_radius: f32,
    ) -> Result<Self, StatsError> {
        let stats = Self {
            name: name.into(),
            attack_power,
            walk_speed,
            run_speed,
            wander_radius,
            perception_radius,
            view_half_angle_deg: DEFAULT_VIEW_HALF_ANGLE_DEG,
        };
        stats.validate()?;
        Ok(stats)
    }

    pub fn with_view_half_angle(mut self, degrees: f32) -> Result<Self, StatsError> {
        self.view_half_angle_deg = degrees;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), StatsError> {
        if self.name.trim().is_empty() {
            return Err(StatsError::EmptyName);
        }

        let scalars = [
            ("walk_speed", self.walk_speed),
            ("run_speed", self.run_speed),
            ("wander_radius", self.wander_radius),
            ("perception_radius", self.perception_radius),
        ];
        for (field, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(StatsError::InvalidScalar { field, value });
            }
        }

        if !(self.view_half_angle_deg > 0.0 && self.view_half_angle_deg <= 180.0) {
            return Err(StatsError::InvalidViewAngle(self.view_half_angle_deg));
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    pub fn walk_speed(&self) -> f32 {
        self.walk_speed
    }

    pub fn run_speed(&self) -> f32 {
        self.run_speed
    }

    pub fn wander_radius(&self) -> f32 {
        self.wander_radius
    }

    pub fn perception_radius(&self) -> f32 {
        self.perception_radius
    }

    pub fn view_half_angle_deg(&self) -> f32 {
        self.view_half_angle_deg
    }
}

/// Встроенные варианты врагов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum EnemyVariant {
    Zombie,
    Skeleton,
}

impl EnemyVariant {
    pub const ALL: [EnemyVariant; 2] = [EnemyVariant::Zombie, EnemyVariant::Skeleton];

    pub fn label(self) -> &'static str {
        match self {
            EnemyVariant::Zombie => "Zombie",
            EnemyVariant::Skeleton => "Skeleton",
        }
    }

    /// Пресет характеристик: (attack, walk, run, wander radius, perception radius)
    pub fn stats(self) -> EnemyStats {
        let (attack_power, walk_speed, run_speed, wander_radius, perception_radius) = match self {
            EnemyVariant::Zombie => (5, 4.0, 6.0, 5.0, 6.0),
            EnemyVariant::Skeleton => (4, 3.0, 5.0, 5.0, 6.0),
        };
        EnemyStats {
            name: self.label().to_string(),
            attack_power,
            walk_speed,
            run_speed,
            wander_radius,
            perception_radius,
            view_half_angle_deg: DEFAULT_VIEW_HALF_ANGLE_DEG,
        }
    }
}

impl FromStr for EnemyVariant {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnemyVariant::ALL
            .into_iter()
            .find(|variant| variant.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StatsError::UnknownVariant(s.to_string()))
    }
}

/// Resource: таблица пресетов по имени
///
/// Встроенные варианты регистрируются в `Default`, host может добавить свои.
#[derive(Resource, Debug, Clone)]
pub struct VariantTable {
    presets: HashMap<String, EnemyStats>,
}

impl Default for VariantTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for variant in EnemyVariant::ALL {
            let stats = variant.stats();
            table.presets.insert(stats.name().to_ascii_lowercase(), stats);
        }
        table
    }
}

impl VariantTable {
    pub fn empty() -> Self {
        Self {
            presets: HashMap::new(),
        }
    }

    /// Зарегистрировать пресет (ключ — имя без учёта регистра)
    pub fn register(&mut self, stats: EnemyStats) -> Result<(), StatsError> {
        stats.validate()?;
        let key = stats.name().to_ascii_lowercase();
        if self.presets.contains_key(&key) {
            return Err(StatsError::DuplicateVariant(stats.name().to_string()));
        }
        self.presets.insert(key, stats);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<&EnemyStats, StatsError> {
        self.presets
            .get(&name.trim().to_ascii_lowercase())
            .ok_or_else(|| StatsError::UnknownVariant(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
