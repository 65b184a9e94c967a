//! Tests for perception oracle.

#[cfg(test)]
mod tests {
    use crate::ai::perception::*;
    use bevy::prelude::*;
    use proptest::prelude::*;

    /// Точка на расстоянии `distance` под углом `angle_deg` от forward (-Z) агента в начале координат
    fn point_at(distance: f32, angle_deg: f32) -> Vec3 {
        let angle = angle_deg.to_radians();
        Vec3::new(distance * angle.sin(), 0.0, -distance * angle.cos())
    }

    #[test]
    fn test_distance_is_euclidean_3d() {
        let d = distance_to_target(Vec3::ZERO, Some(Vec3::new(2.0, 3.0, 6.0)), false);
        assert!((d - 7.0).abs() < 1e-5);
    }

    #[test]
    fn test_distance_infinite_on_game_over() {
        let d = distance_to_target(Vec3::ZERO, Some(Vec3::X), true);
        assert_eq!(d, f32::INFINITY);
    }

    #[test]
    fn test_distance_infinite_without_target() {
        assert_eq!(distance_to_target(Vec3::ZERO, None, false), f32::INFINITY);
    }

    #[test]
    fn test_target_beyond_perception_radius_not_visible() {
        // Цель в 10м, радиус восприятия 6м
        let agent = Transform::IDENTITY;
        assert!(!can_see_target(&agent, Some(point_at(10.0, 0.0)), 6.0, 30.0, false));
    }

    #[test]
    fn test_target_inside_cone_visible() {
        // 5м, 10° от forward, радиус 6м
        let agent = Transform::IDENTITY;
        assert!(can_see_target(&agent, Some(point_at(5.0, 10.0)), 6.0, 30.0, false));
    }

    #[test]
    fn test_target_outside_cone_not_visible() {
        let agent = Transform::IDENTITY;
        assert!(!can_see_target(&agent, Some(point_at(3.0, 45.0)), 6.0, 30.0, false));
        // Прямо за спиной
        assert!(!can_see_target(&agent, Some(point_at(3.0, 180.0)), 6.0, 30.0, false));
    }

    #[test]
    fn test_cone_follows_agent_facing() {
        // Агент смотрит на +X, цель на +X — видна; та же цель для агента, смотрящего на -Z, — нет
        let target = Vec3::new(4.0, 0.0, 0.0);
        let facing_x = Transform::IDENTITY.looking_at(Vec3::X, Vec3::Y);
        assert!(can_see_target(&facing_x, Some(target), 6.0, 30.0, false));
        assert!(!can_see_target(&Transform::IDENTITY, Some(target), 6.0, 30.0, false));
    }

    #[test]
    fn test_cone_edge_is_inclusive_for_radius() {
        let agent = Transform::IDENTITY;
        assert!(can_see_target(&agent, Some(point_at(6.0, 0.0)), 6.0, 30.0, false));
    }

    #[test]
    fn test_target_on_top_of_agent_visible() {
        let agent = Transform::from_xyz(1.0, 0.0, 1.0);
        assert!(can_see_target(&agent, Some(Vec3::new(1.0, 0.0, 1.0)), 6.0, 30.0, false));
    }

    #[test]
    fn test_nothing_visible_on_game_over() {
        let agent = Transform::IDENTITY;
        assert!(!can_see_target(&agent, Some(point_at(1.0, 0.0)), 6.0, 30.0, true));
    }

    #[test]
    fn test_reached_uses_stopping_distance() {
        assert!(reached_target(Vec3::ZERO, Some(point_at(1.2, 0.0)), 1.2, false));
        assert!(!reached_target(Vec3::ZERO, Some(point_at(1.3, 0.0)), 1.2, false));
        assert!(!reached_target(Vec3::ZERO, Some(Vec3::ZERO), 1.2, true));
    }

    #[test]
    fn test_strike_range_is_strict() {
        assert!(within_strike_range(Vec3::ZERO, point_at(1.49, 0.0)));
        assert!(!within_strike_range(Vec3::ZERO, point_at(1.5, 0.0)));
    }

    proptest! {
        #[test]
        fn prop_game_over_blinds_everyone(
            ax in -50.0f32..50.0, az in -50.0f32..50.0,
            tx in -50.0f32..50.0, tz in -50.0f32..50.0,
            yaw in 0.0f32..360.0,
            radius in 0.0f32..100.0,
        ) {
            let agent = Transform::from_xyz(ax, 0.0, az)
                .with_rotation(Quat::from_rotation_y(yaw.to_radians()));
            let target = Some(Vec3::new(tx, 0.0, tz));

            prop_assert_eq!(distance_to_target(agent.translation, target, true), f32::INFINITY);
            prop_assert!(!can_see_target(&agent, target, radius, 30.0, true));
            prop_assert!(!reached_target(agent.translation, target, radius, true));
        }

        #[test]
        fn prop_visible_implies_in_radius_and_cone(
            tx in -20.0f32..20.0, tz in -20.0f32..20.0,
            yaw in 0.0f32..360.0,
        ) {
            let agent = Transform::from_rotation(Quat::from_rotation_y(yaw.to_radians()));
            let target = Vec3::new(tx, 0.0, tz);

            if can_see_target(&agent, Some(target), 6.0, 30.0, false) {
                prop_assert!(target.length() <= 6.0);
                prop_assert!(view_angle_deg(agent.forward().as_vec3(), target) <= 30.0);
            }
        }
    }
}
