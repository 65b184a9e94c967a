//! Headless симуляция CRYPT
//!
//! Запускает Bevy App без рендера: арена, игрок, несколько врагов.
//! Полезно для проверки поведения FSM и детерминизма по seed.

use std::process::ExitCode;
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use crypt_simulation::{
    create_headless_app, log_error, log_info, set_log_level, spawn_enemy, ArenaGeometry, EnemyState, GameState, Health,
    LogLevel, Player, SurfaceProbes, VariantTable,
};

/// Headless enemy behavior simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed детерминистичного RNG
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Сколько fixed тиков (60 Hz) прогнать
    #[arg(long, default_value_t = 1000)]
    ticks: u32,

    /// Вариант врага (zombie, skeleton)
    #[arg(long, default_value = "zombie")]
    variant: String,

    /// Количество врагов
    #[arg(long, default_value_t = 3)]
    enemies: usize,

    /// Минимальный уровень логов (debug, info, warning, error)
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

/// Высота агентов над полом (пол на y = 0)
const AGENT_HEIGHT: f32 = 0.5;

fn main() -> ExitCode {
    let args = Args::parse();
    set_log_level(args.log_level);

    let mut app = create_headless_app(args.seed);
    // Ровно один fixed шаг на update, независимо от реального времени
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / 60.0)));

    let stats = match app.world().resource::<VariantTable>().lookup(&args.variant) {
        Ok(stats) => stats.clone(),
        Err(err) => {
            log_error(&format!("{err}"));
            return ExitCode::FAILURE;
        }
    };

    log_info(&format!(
        "Starting CRYPT headless simulation (seed: {}, ticks: {}, {} x {})",
        args.seed,
        args.ticks,
        args.enemies,
        stats.name()
    ));

    app.insert_resource(SurfaceProbes::new(
        ArenaGeometry::new().with_floor(Vec2::ZERO, Vec2::splat(30.0), 0.0),
    ));

    let player = app
        .world_mut()
        .spawn((Player, Health::new(100), Transform::from_xyz(0.0, AGENT_HEIGHT, 0.0)))
        .id();

    {
        let mut commands = app.world_mut().commands();
        for i in 0..args.enemies {
            // Ряд врагов позади игрока по +Z, все смотрят на -Z (в сторону игрока)
            let x = (i as f32 - (args.enemies as f32 - 1.0) * 0.5) * 2.0;
            spawn_enemy(&mut commands, stats.clone(), Vec3::new(x, AGENT_HEIGHT, 5.0), Some(player));
        }
    }
    app.world_mut().flush();

    for tick in 0..args.ticks {
        app.update();

        if tick % 100 == 0 {
            report(&mut app, tick, player);
        }

        if app.world().resource::<GameState>().game_over {
            log_info(&format!("Game over at tick {}", tick));
            report(&mut app, tick, player);
            break;
        }
    }

    log_info("Simulation complete!");
    ExitCode::SUCCESS
}

fn report(app: &mut App, tick: u32, player: Entity) {
    let player_health = app.world().get::<Health>(player).map(|h| h.current).unwrap_or(0);

    let mut query = app.world_mut().query::<(Entity, &EnemyState)>();
    let states: Vec<String> = query
        .iter(app.world())
        .map(|(entity, state)| format!("{:?}={:?}", entity, state))
        .collect();

    log_info(&format!(
        "Tick {}: player health {}, enemies [{}]",
        tick,
        player_health,
        states.join(", ")
    ));
}
