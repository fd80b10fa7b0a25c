//! Контракты коллабораторов PushPolicy
//!
//! Policy не знает про XR runtime, Rapier или Bevy ECS: только про три
//! capability-трейта ниже. В игре их реализуют `XrHands`, `Transform` и
//! `RapierBody`, в тестах: scripted fakes.

use bevy::prelude::*;

/// Порог deadzone для джойстика (squared magnitude)
///
/// Всё, что `<= PUSH_DEADZONE_SQUARED`, считаем отсутствием input
/// (дрейф стика у idle контроллера не должен толкать коробку).
pub const PUSH_DEADZONE_SQUARED: f32 = 0.01;

/// Какой из двух трекаемых контроллеров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Hand {
    Left,
    Right,
}

/// Мгновенный срез input (не хранится между тиками)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    pub button_pressed: bool,
    pub axis: Vec2,
}

impl InputSample {
    pub fn new(button_pressed: bool, axis: Vec2) -> Self {
        Self {
            button_pressed,
            axis,
        }
    }

    /// Стик отклонён сильнее deadzone
    pub fn axis_active(&self) -> bool {
        axis_outside_deadzone(self.axis)
    }
}

pub fn axis_outside_deadzone(axis: Vec2) -> bool {
    axis.length_squared() > PUSH_DEADZONE_SQUARED
}

/// Источник input: два независимых handle (left/right)
///
/// Невалидный handle деградирует в нейтральные значения
/// (button = false, axis = ZERO): реализации обязаны это соблюдать.
pub trait InputSource {
    fn is_valid(&self, hand: Hand) -> bool;

    /// Primary button (false если handle невалиден)
    fn button_pressed(&self, hand: Hand) -> bool;

    /// Primary 2D axis (ZERO если handle невалиден)
    fn axis_2d(&self, hand: Hand) -> Vec2;

    /// Собрать sample: кнопка с одной руки, стик с другой
    fn sample(&self, button_hand: Hand, axis_hand: Hand) -> InputSample {
        InputSample {
            button_pressed: self.button_pressed(button_hand),
            axis: self.axis_2d(axis_hand),
        }
    }
}

/// World-space поза трекаемого handle
pub trait PoseSource {
    fn position(&self) -> Vec3;
    fn orientation(&self) -> Quat;
}

/// Физическое тело, которое толкаем
///
/// Состояние тела принадлежит физическому движку; policy только читает
/// position/velocity и шлёт команды (additive force или полный reset).
pub trait PhysicsBody {
    fn position(&self) -> Vec3;
    fn velocity(&self) -> Vec3;

    /// Additive continuous force на текущий шаг (не impulse, не velocity override)
    fn add_force(&mut self, force: Vec3);

    fn set_transform(&mut self, position: Vec3, orientation: Quat);
    fn set_velocity(&mut self, velocity: Vec3);
    fn set_angular_velocity(&mut self, angular_velocity: Vec3);
}

/// Фиксированная поза (удобно для host'ов без Transform и для тестов)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticPose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl StaticPose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

impl Default for StaticPose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY)
    }
}

impl PoseSource for StaticPose {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn orientation(&self) -> Quat {
        self.orientation
    }
}

impl PoseSource for Transform {
    fn position(&self) -> Vec3 {
        self.translation
    }

    fn orientation(&self) -> Quat {
        self.rotation
    }
}

impl PoseSource for GlobalTransform {
    fn position(&self) -> Vec3 {
        self.translation()
    }

    fn orientation(&self) -> Quat {
        self.compute_transform().rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_pose() {
        let transform = Transform::from_xyz(1.0, 2.0, 3.0).with_rotation(Quat::from_rotation_y(0.5));
        assert_eq!(PoseSource::position(&transform), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(PoseSource::orientation(&transform), Quat::from_rotation_y(0.5));
    }

    #[test]
    fn test_global_transform_pose() {
        let rotation = Quat::from_rotation_x(0.25);
        let global = GlobalTransform::from(Transform::from_xyz(-1.0, 0.0, 4.0).with_rotation(rotation));

        assert!(global.position().abs_diff_eq(Vec3::new(-1.0, 0.0, 4.0), 1e-5));
        assert!(global.orientation().abs_diff_eq(rotation, 1e-5));
    }

    #[test]
    fn test_deadzone_threshold() {
        assert!(!axis_outside_deadzone(Vec2::ZERO));
        assert!(!axis_outside_deadzone(Vec2::new(0.05, 0.05)));
        assert!(axis_outside_deadzone(Vec2::new(0.0, 0.2)));
    }
}
