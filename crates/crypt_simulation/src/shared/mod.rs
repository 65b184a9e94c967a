//! Shared domain — cross-cutting состояние мира
//!
//! GameState читают все враги каждый тик (polling, без сигналов).

use bevy::prelude::*;

/// Resource: состояние партии
///
/// `game_over` выставляется когда умирает игрок (combat::end_game_on_player_death)
/// или host'ом напрямую. После game-over цель для всех врагов бесконечно далеко.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct GameState {
    pub game_over: bool,
}

impl GameState {
    pub fn end_game(&mut self) {
        self.game_over = true;
    }

    pub fn restart(&mut self) {
        self.game_over = false;
    }
}
