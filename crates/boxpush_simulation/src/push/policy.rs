//! PushPolicy: условное применение силы к коробке
//!
//! Каждый физический тик:
//! 1. sample input (кнопка + стик) и позы руки
//! 2. predicate: кнопка нажата && стик вне deadzone && рука ближе max_distance
//! 3. true → пересэмплировать стик, посчитать силу, `add_force` (additive)
//! 4. false → ничего не трогаем, коробка "скользит" под инерцией/drag движка
//!
//! Гистерезиса нет: решение пересчитывается с нуля каждый тик.

use bevy::prelude::*;

use super::config::PushConfig;
use super::sources::{axis_outside_deadzone, InputSample, InputSource, PhysicsBody, PoseSource};

#[derive(Debug, Clone, Default, Reflect)]
pub struct PushPolicy {
    config: PushConfig,
    /// Последнее вычисленное решение (только для логов/HUD, в predicate не участвует)
    pushing: bool,
}

impl PushPolicy {
    pub fn new(config: PushConfig) -> Self {
        Self {
            config,
            pushing: false,
        }
    }

    pub fn config(&self) -> &PushConfig {
        &self.config
    }

    pub fn is_pushing(&self) -> bool {
        self.pushing
    }

    /// Чистый predicate толкания (зависит только от аргументов и config)
    pub fn sample_and_decide(
        &self,
        input: &InputSample,
        handle_position: Vec3,
        _handle_orientation: Quat,
        body_position: Vec3,
    ) -> bool {
        input.button_pressed
            && axis_outside_deadzone(input.axis)
            && handle_position.distance(body_position) < self.config.max_distance
    }

    /// World-space сила из стика
    ///
    /// Стик (x, y) → локальное направление (x, 0, y), нормализуем,
    /// поворачиваем ориентацией руки, масштабируем.
    /// Нулевой стик даёт нулевую силу (normalize_or_zero), хотя вызывающий
    /// код и так проверяет deadzone раньше.
    pub fn compute_force(axis: Vec2, handle_orientation: Quat, force_magnitude: f32) -> Vec3 {
        let local_direction = Vec3::new(axis.x, 0.0, axis.y).normalize_or_zero();
        handle_orientation * local_direction * force_magnitude
    }

    /// Один физический шаг
    ///
    /// Стик читается ДВАЖДЫ: для решения и для силы. Значение между
    /// чтениями может поменяться: это ожидаемое поведение. Если второй
    /// sample ушёл в deadzone, силы в этом шаге нет.
    pub fn tick<I, P, B>(&mut self, input: &I, pose: &P, body: &mut B) -> bool
    where
        I: InputSource + ?Sized,
        P: PoseSource + ?Sized,
        B: PhysicsBody + ?Sized,
    {
        let sample = input.sample(self.config.button_hand, self.config.axis_hand);
        let decision = self.sample_and_decide(
            &sample,
            pose.position(),
            pose.orientation(),
            body.position(),
        );

        if decision != self.pushing {
            crate::log(&format!(
                "PushPolicy: {} (button: {}, axis: {:?})",
                if decision { "push started" } else { "push stopped, gliding" },
                sample.button_pressed,
                sample.axis
            ));
        }
        self.pushing = decision;

        if !decision {
            return false;
        }

        let axis = input.axis_2d(self.config.axis_hand);
        if axis_outside_deadzone(axis) {
            let force = Self::compute_force(axis, pose.orientation(), self.config.force_magnitude);
            body.add_force(force);
        }

        true
    }

    /// Без валидации (диапазон ограничивает UI), применяется со следующего тика
    pub fn set_force_magnitude(&mut self, value: f32) {
        self.config.force_magnitude = value;
    }

    /// Полный override состояния тела: reset pose + нулевые скорости
    pub fn reset_body<B: PhysicsBody + ?Sized>(&mut self, body: &mut B) {
        body.set_transform(self.config.reset_position, self.config.reset_orientation);
        body.set_velocity(Vec3::ZERO);
        body.set_angular_velocity(Vec3::ZERO);
        self.pushing = false;

        crate::log_info(&format!(
            "PushPolicy: body reset to {:?}",
            self.config.reset_position
        ));
    }
}
