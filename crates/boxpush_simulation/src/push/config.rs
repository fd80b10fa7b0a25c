//! PushConfig: настройки толкания + reset pose

use bevy::math::EulerRot;
use bevy::prelude::*;

use super::sources::Hand;

/// Сила толкания по умолчанию (Newtons)
pub const DEFAULT_FORCE_MAGNITUDE: f32 = 100.0;

/// Максимальная дистанция hand → box, на которой толкание работает (m)
pub const DEFAULT_MAX_DISTANCE: f32 = 5.0;

/// Настройки PushPolicy
///
/// Мутируются только через setters (slider → `set_force_magnitude`).
/// Валидации нет: оба скаляра считаются положительными по контракту.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct PushConfig {
    /// Множитель силы (N)
    pub force_magnitude: f32,
    /// Строгий порог дистанции (distance < max_distance)
    pub max_distance: f32,
    pub reset_position: Vec3,
    pub reset_orientation: Quat,
    /// Рука с кнопкой-gate (A button)
    pub button_hand: Hand,
    /// Рука со стиком (направление толкания)
    pub axis_hand: Hand,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            force_magnitude: DEFAULT_FORCE_MAGNITUDE,
            max_distance: DEFAULT_MAX_DISTANCE,
            reset_position: Vec3::ZERO,
            reset_orientation: Quat::IDENTITY,
            button_hand: Hand::Right,
            axis_hand: Hand::Left,
        }
    }
}

impl PushConfig {
    pub fn with_force_magnitude(mut self, force_magnitude: f32) -> Self {
        self.force_magnitude = force_magnitude;
        self
    }

    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn with_reset(mut self, position: Vec3, orientation: Quat) -> Self {
        self.reset_position = position;
        self.reset_orientation = orientation;
        self
    }

    pub fn with_hands(mut self, button_hand: Hand, axis_hand: Hand) -> Self {
        self.button_hand = button_hand;
        self.axis_hand = axis_hand;
        self
    }

    /// Применить reset pose; незаданные части берутся из стартового transform тела
    pub fn with_resolved_reset(self, reset: ResetPose, startup: &Transform) -> Self {
        let (position, orientation) = reset.resolve(startup);
        self.with_reset(position, orientation)
    }
}

/// Reset pose, заданная снаружи (частично или никак)
///
/// `None` = "взять текущий transform коробки при старте".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResetPose {
    pub position: Option<Vec3>,
    pub orientation: Option<Quat>,
}

impl ResetPose {
    /// Reset в стартовую позу коробки
    pub fn startup() -> Self {
        Self::default()
    }

    pub fn at(position: Vec3, orientation: Quat) -> Self {
        Self {
            position: Some(position),
            orientation: Some(orientation),
        }
    }

    /// Orientation из Euler углов в градусах (порядок Z → X → Y, как в XR rig'ах)
    pub fn from_euler_degrees(position: Vec3, euler_degrees: Vec3) -> Self {
        Self::at(position, euler_degrees_to_quat(euler_degrees))
    }

    pub fn resolve(&self, startup: &Transform) -> (Vec3, Quat) {
        (
            self.position.unwrap_or(startup.translation),
            self.orientation.unwrap_or(startup.rotation),
        )
    }
}

/// Euler (x, y, z) в градусах → Quat; вращение применяется Z, затем X, затем Y
pub fn euler_degrees_to_quat(euler_degrees: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        euler_degrees.y.to_radians(),
        euler_degrees.x.to_radians(),
        euler_degrees.z.to_radians(),
    )
}
