//! Pose: видимое состояние анимации врага
//!
//! ECS пишет boolean флаги (Idle/Walk/Run/Attack), animator host'а
//! выбирает клип. Обратно host отдаёт прогресс текущего клипа
//! (normalized_time) и идёт ли blend в другое состояние (in_transition).

use bevy::prelude::*;

/// Именованный флаг позы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum PoseFlag {
    Idle,
    Walk,
    Run,
    Attack,
}

impl PoseFlag {
    pub const ALL: [PoseFlag; 4] = [PoseFlag::Idle, PoseFlag::Walk, PoseFlag::Run, PoseFlag::Attack];
}

/// Длина клипа по умолчанию (секунды) для headless playback
pub const DEFAULT_CLIP_LENGTH: f32 = 1.0;

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Pose {
    pub idle: bool,
    pub walk: bool,
    pub run: bool,
    pub attack: bool,
    /// Прогресс текущего клипа: 0.0 = старт, 1.0 = конец первого проигрывания
    pub normalized_time: f32,
    /// Animator сейчас в переходе между состояниями
    pub in_transition: bool,
    /// Длина клипа (секунды), используется headless clock
    pub clip_length: f32,
    /// Флаг, клип которого сейчас проигрывается (для restart при смене)
    pub playing: Option<PoseFlag>,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            idle: true,
            walk: false,
            run: false,
            attack: false,
            normalized_time: 0.0,
            in_transition: false,
            clip_length: DEFAULT_CLIP_LENGTH,
            playing: Some(PoseFlag::Idle),
        }
    }
}

impl Pose {
    pub fn is_set(&self, flag: PoseFlag) -> bool {
        match flag {
            PoseFlag::Idle => self.idle,
            PoseFlag::Walk => self.walk,
            PoseFlag::Run => self.run,
            PoseFlag::Attack => self.attack,
        }
    }

    pub fn set_flag(&mut self, flag: PoseFlag, on: bool) {
        match flag {
            PoseFlag::Idle => self.idle = on,
            PoseFlag::Walk => self.walk = on,
            PoseFlag::Run => self.run = on,
            PoseFlag::Attack => self.attack = on,
        }
    }

    /// Сбросить все флаги и включить ровно один
    pub fn set_exclusive(&mut self, flag: PoseFlag) {
        self.clear_all();
        self.set_flag(flag, true);
    }

    pub fn clear_all(&mut self) {
        for flag in PoseFlag::ALL {
            self.set_flag(flag, false);
        }
    }

    /// Первый включённый флаг (при корректной работе FSM — единственный)
    pub fn active(&self) -> Option<PoseFlag> {
        PoseFlag::ALL.into_iter().find(|flag| self.is_set(*flag))
    }

    pub fn active_count(&self) -> usize {
        PoseFlag::ALL.into_iter().filter(|flag| self.is_set(*flag)).count()
    }

    /// Клип доиграл и animator уже уводит из него
    pub fn clip_finished(&self) -> bool {
        self.normalized_time > 1.0 && self.in_transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_default_is_idle() {
        let pose = Pose::default();
        assert_eq!(pose.active(), Some(PoseFlag::Idle));
        assert_eq!(pose.active_count(), 1);
    }

    #[test]
    fn test_set_exclusive_leaves_one_flag() {
        let mut pose = Pose::default();
        pose.set_flag(PoseFlag::Walk, true);
        pose.set_flag(PoseFlag::Attack, true);
        assert_eq!(pose.active_count(), 3);

        pose.set_exclusive(PoseFlag::Run);
        assert_eq!(pose.active_count(), 1);
        assert!(pose.run);
    }

    #[test]
    fn test_clip_finished_needs_transition() {
        let mut pose = Pose::default();
        pose.normalized_time = 1.2;
        assert!(!pose.clip_finished());

        pose.in_transition = true;
        assert!(pose.clip_finished());

        pose.normalized_time = 1.0; // Строго больше 1.0
        assert!(!pose.clip_finished());
    }
}
