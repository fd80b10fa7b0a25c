//! XR hand devices: состояние двух контроллеров как ECS resource
//!
//! Host (OpenXR bridge, headless runner, тесты) пишет сюда сырые значения
//! каждый frame; `XrHands` реализует `InputSource` для PushPolicy.
//! Пока контроллер не подключен (`is_valid == false`), он отдаёт
//! нейтральные значения: толкания не будет, ошибки тоже.

use bevy::prelude::*;

use crate::push::{Hand, InputSource};

pub mod scripted;

pub use scripted::*;

/// Состояние одного контроллера на текущий frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct HandDevice {
    pub is_valid: bool,
    /// Primary button (A/X)
    pub primary_button: bool,
    /// Primary 2D axis (thumbstick), [-1, 1] по каждой оси
    pub primary_axis: Vec2,
}

impl HandDevice {
    pub fn connected() -> Self {
        Self {
            is_valid: true,
            ..default()
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }
}

/// Оба контроллера (left + right)
#[derive(Resource, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Resource)]
pub struct XrHands {
    pub left: HandDevice,
    pub right: HandDevice,
}

impl XrHands {
    pub fn connected() -> Self {
        Self {
            left: HandDevice::connected(),
            right: HandDevice::connected(),
        }
    }

    pub fn device(&self, hand: Hand) -> &HandDevice {
        match hand {
            Hand::Left => &self.left,
            Hand::Right => &self.right,
        }
    }

    pub fn device_mut(&mut self, hand: Hand) -> &mut HandDevice {
        match hand {
            Hand::Left => &mut self.left,
            Hand::Right => &mut self.right,
        }
    }

    pub fn set_button(&mut self, hand: Hand, pressed: bool) {
        self.device_mut(hand).primary_button = pressed;
    }

    pub fn set_axis(&mut self, hand: Hand, axis: Vec2) {
        self.device_mut(hand).primary_axis = axis;
    }
}

impl InputSource for XrHands {
    fn is_valid(&self, hand: Hand) -> bool {
        self.device(hand).is_valid
    }

    fn button_pressed(&self, hand: Hand) -> bool {
        let device = self.device(hand);
        device.is_valid && device.primary_button
    }

    fn axis_2d(&self, hand: Hand) -> Vec2 {
        let device = self.device(hand);
        if device.is_valid {
            device.primary_axis
        } else {
            Vec2::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_device_is_neutral() {
        let hands = XrHands {
            left: HandDevice {
                is_valid: false,
                primary_button: true,
                primary_axis: Vec2::new(0.8, 0.2),
            },
            right: HandDevice {
                is_valid: false,
                primary_button: true,
                primary_axis: Vec2::ONE,
            },
        };

        assert!(!hands.button_pressed(Hand::Right));
        assert_eq!(hands.axis_2d(Hand::Left), Vec2::ZERO);

        let sample = hands.sample(Hand::Right, Hand::Left);
        assert!(!sample.button_pressed);
        assert!(!sample.axis_active());
    }

    #[test]
    fn test_hands_are_independent() {
        let mut hands = XrHands::connected();
        hands.set_button(Hand::Right, true);
        hands.set_axis(Hand::Left, Vec2::new(0.0, 1.0));

        assert!(hands.button_pressed(Hand::Right));
        assert!(!hands.button_pressed(Hand::Left));
        assert_eq!(hands.axis_2d(Hand::Left), Vec2::Y);
        assert_eq!(hands.axis_2d(Hand::Right), Vec2::ZERO);
    }

    #[test]
    fn test_default_is_disconnected() {
        let hands = XrHands::default();
        assert!(!hands.is_valid(Hand::Left));
        assert!(!hands.is_valid(Hand::Right));
    }
}
