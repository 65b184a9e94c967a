//! Player marker component
//!
//! Отмечает entity игрока — типичную цель врагов.

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// Смерть entity с этим маркером переводит мир в game-over
/// (см. `combat::end_game_on_player_death`).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
