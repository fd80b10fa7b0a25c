//! HUD state: slider range и строки для labels

use bevy::prelude::*;

use crate::push::DEFAULT_FORCE_MAGNITUDE;

/// Диапазон force slider'а (N)
///
/// Ограничение UI, не policy: `PushPolicy::set_force_magnitude` сам ничего
/// не валидирует.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct ForceSlider {
    pub min: f32,
    pub max: f32,
}

impl Default for ForceSlider {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
        }
    }
}

impl ForceSlider {
    /// Значение в диапазоне slider'а; при `min > max` не паникует (побеждает `max`)
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }
}

/// Текст labels (force + velocity), host UI просто копирует строки
///
/// HUD показывает одну коробку: `target` = первая заспавненная. Slider и
/// reset button при этом действуют на все коробки.
#[derive(Resource, Debug, Clone, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct PushHud {
    pub target: Option<Entity>,
    pub force_label: String,
    pub velocity_label: String,
}

impl Default for PushHud {
    fn default() -> Self {
        Self {
            target: None,
            force_label: format_force(DEFAULT_FORCE_MAGNITUDE),
            velocity_label: format_velocity(0.0),
        }
    }
}

/// Сила: один знак после запятой ("100.0")
pub fn format_force(force_magnitude: f32) -> String {
    format!("{:.1}", force_magnitude)
}

/// Скорость: два знака + единицы ("1.25 m/s")
pub fn format_velocity(speed: f32) -> String {
    format!("{:.2} m/s", speed)
}
