//! CRYPT Simulation Core
//!
//! ECS-симуляция врагов на Bevy 0.16 (headless)
//!
//! HYBRID ARCHITECTURE:
//! - ECS = решения (FSM врагов, perception, урон, game-over)
//! - Host = навигация, физика, анимация (в headless режиме — stand-in'ы
//!   из movement/animation/physics::arena)

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod animation;
pub mod combat;
pub mod components;
pub mod logger;
pub mod movement;
pub mod physics;
pub mod shared;

// Re-export базовых типов для удобства
pub use ai::{
    spawn_enemy, AIPlugin, ChaseTarget, Enemy, EnemyBrain, EnemyState, EnemyStats, EnemyVariant, StatsError,
    TargetNoticed, VariantTable,
};
pub use animation::HeadlessAnimationPlugin;
pub use combat::{CombatPlugin, DamageDealt, EntityDied, StrikeLanded};
pub use components::*;
pub use logger::{
    init_logger, log, log_error, log_info, log_level, log_warning, log_with_level, set_log_level, set_logger,
    set_logger_if_needed, ConsoleLogger, LogLevel, LogPrinter,
};
pub use movement::HeadlessNavigationPlugin;
pub use physics::{ArenaGeometry, SurfaceKind, SurfaceProbe, SurfaceProbes};
pub use shared::GameState;

/// Порядок внутри одного fixed тика
///
/// Decide (FSM) → Move (навигация) → Animate (часы позы) → Resolve (урон, смерть)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Decide,
    Move,
    Animate,
    Resolve,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Детерминистичный RNG (seed по умолчанию)
            .insert_resource(DeterministicRng::new(42))
            .init_resource::<GameState>()
            .register_type::<GameState>()
            .register_type::<Health>()
            .register_type::<NavAgent>()
            .register_type::<Pose>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Decide,
                    SimulationSet::Move,
                    SimulationSet::Animate,
                    SimulationSet::Resolve,
                )
                    .chain(),
            )
            // Подсистемы (ECS strategic layer)
            .add_plugins((CombatPlugin, AIPlugin));
    }
}

/// Headless stand-in'ы host'а: навигация + часы анимации
///
/// В игре их место занимает движок. Нужен для runner'а и интеграционных тестов.
pub struct HeadlessHostPlugin;

impl Plugin for HeadlessHostPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((HeadlessNavigationPlugin, HeadlessAnimationPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Seed перезаписывает дефолтный RNG из SimulationPlugin.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .add_plugins((SimulationPlugin, HeadlessHostPlugin))
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
