//! Movement domain — headless stand-in навигации
//!
//! В игре NavAgent обслуживает navmesh движка. Для headless симуляции
//! и тестов — прямолинейный driver (navigation.rs).

use bevy::prelude::*;

pub mod navigation;

pub use navigation::{advance_nav_agent, drive_nav_agents};

use crate::SimulationSet;

/// Plugin: headless навигация (SimulationSet::Move, после FSM)
pub struct HeadlessNavigationPlugin;

impl Plugin for HeadlessNavigationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, drive_nav_agents.in_set(SimulationSet::Move));
    }
}
