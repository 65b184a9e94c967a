//! Headless pose playback
//!
//! В игре клипы проигрывает animator host'а. Здесь — простые часы:
//! один клип на активный флаг, normalized_time растёт на dt / clip_length,
//! после 1.0 animator "уходит в transition".

use bevy::prelude::*;

use crate::components::Pose;
use crate::SimulationSet;

/// Продвинуть часы позы на `delta` секунд
///
/// Смена активного флага = новый клип с нуля.
pub fn advance_pose(pose: &mut Pose, delta: f32) {
    let active = pose.active();

    if active != pose.playing {
        pose.playing = active;
        pose.normalized_time = 0.0;
        pose.in_transition = false;
        return;
    }

    if pose.playing.is_none() || pose.clip_length <= 0.0 {
        return;
    }

    pose.normalized_time += delta / pose.clip_length;
    if pose.normalized_time > 1.0 {
        pose.in_transition = true;
    }
}

/// Система: headless часы анимации для всех поз
pub fn advance_pose_clock(mut poses: Query<&mut Pose>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for mut pose in poses.iter_mut() {
        advance_pose(&mut pose, delta);
    }
}

/// Plugin: headless animator (SimulationSet::Animate)
pub struct HeadlessAnimationPlugin;

impl Plugin for HeadlessAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, advance_pose_clock.in_set(SimulationSet::Animate));
    }
}
