//! Tests for damage systems.

#[cfg(test)]
mod tests {
    use crate::ai::{Enemy, EnemyState};
    use crate::combat::{apply_strikes, end_game_on_player_death, mark_dead_enemies, DamageDealt, EntityDied, StrikeLanded};
    use crate::components::{Health, NavAgent, Player, Pose};
    use crate::shared::GameState;
    use bevy::prelude::*;

    /// App только с combat системами в Update (без fixed timestep)
    fn combat_app() -> App {
        let mut app = App::new();
        app.init_resource::<GameState>()
            .add_event::<StrikeLanded>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>()
            .add_systems(Update, (apply_strikes, mark_dead_enemies, end_game_on_player_death).chain());
        app
    }

    fn strike(app: &mut App, attacker: Entity, target: Entity, damage: u32) {
        app.world_mut().send_event(StrikeLanded { attacker, target, damage });
        app.update();
    }

    fn drain<E: Event + Clone>(app: &mut App) -> Vec<E> {
        app.world_mut().resource_mut::<Events<E>>().drain().collect()
    }

    #[test]
    fn test_strike_reduces_target_health() {
        let mut app = combat_app();
        let attacker = app.world_mut().spawn_empty().id();
        let target = app.world_mut().spawn(Health::new(20)).id();

        strike(&mut app, attacker, target, 5);

        assert_eq!(app.world().get::<Health>(target).map(|h| h.current), Some(15));
        let dealt = drain::<DamageDealt>(&mut app);
        assert_eq!(
            dealt,
            vec![DamageDealt { attacker, target, damage: 5, target_died: false }]
        );
    }

    #[test]
    fn test_lethal_strike_emits_death_once() {
        let mut app = combat_app();
        let attacker = app.world_mut().spawn_empty().id();
        let target = app.world_mut().spawn(Health::new(4)).id();

        strike(&mut app, attacker, target, 5);
        strike(&mut app, attacker, target, 5); // Уже мёртв: урон есть, смерти нет

        let died = drain::<EntityDied>(&mut app);
        assert_eq!(died, vec![EntityDied { entity: target, killer: Some(attacker) }]);
    }

    #[test]
    fn test_strike_on_target_without_health_is_ignored() {
        let mut app = combat_app();
        let attacker = app.world_mut().spawn_empty().id();
        let target = app.world_mut().spawn_empty().id();

        strike(&mut app, attacker, target, 5);

        assert!(drain::<DamageDealt>(&mut app).is_empty());
    }

    #[test]
    fn test_enemy_at_zero_health_enters_dead() {
        let mut app = combat_app();
        let attacker = app.world_mut().spawn_empty().id();
        let enemy = app.world_mut().spawn((Enemy, Health::new(3))).id();
        if let Some(mut nav) = app.world_mut().get_mut::<NavAgent>(enemy) {
            nav.set_enabled(true);
        }

        strike(&mut app, attacker, enemy, 10);

        let world = app.world();
        assert_eq!(world.get::<EnemyState>(enemy), Some(&EnemyState::Dead));
        assert_eq!(world.get::<Pose>(enemy).map(|p| p.active_count()), Some(0));
        assert_eq!(world.get::<NavAgent>(enemy).map(|n| n.enabled), Some(false));
    }

    #[test]
    fn test_player_death_ends_game() {
        let mut app = combat_app();
        let attacker = app.world_mut().spawn_empty().id();
        let player = app.world_mut().spawn((Player, Health::new(5))).id();

        strike(&mut app, attacker, player, 4);
        assert!(!app.world().resource::<GameState>().game_over);

        strike(&mut app, attacker, player, 4);
        assert!(app.world().resource::<GameState>().game_over);
    }

    #[test]
    fn test_non_player_death_keeps_game_running() {
        let mut app = combat_app();
        let attacker = app.world_mut().spawn_empty().id();
        let dummy = app.world_mut().spawn(Health::new(1)).id();

        strike(&mut app, attacker, dummy, 1);

        assert!(!app.world().resource::<GameState>().game_over);
    }
}
