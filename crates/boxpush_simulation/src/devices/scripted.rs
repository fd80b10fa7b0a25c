//! Scripted hands для headless прогонов (без реального XR runtime)
//!
//! Сценарий по фиксированным тикам:
//! - `push_ticks`: A button зажата, стик вперёд + шум (seeded RNG)
//! - затем кнопка отпущена, стик дрейфует внутри deadzone → коробка скользит

use bevy::prelude::*;
use rand::Rng;

use super::XrHands;
use crate::push::Hand;
use crate::DeterministicRng;

/// Амплитуда дрейфа idle стика (остаётся внутри deadzone)
pub const IDLE_DRIFT: f32 = 0.05;

/// Амплитуда шума поверх "вперёд" во время толкания
pub const PUSH_JITTER: f32 = 0.2;

#[derive(Resource, Debug, Clone, Copy, Reflect)]
#[reflect(Resource)]
pub struct HandScript {
    /// Сколько fixed тиков держим кнопку
    pub push_ticks: u32,
    pub elapsed_ticks: u32,
}

impl HandScript {
    pub fn new(push_ticks: u32) -> Self {
        Self {
            push_ticks,
            elapsed_ticks: 0,
        }
    }

    pub fn is_push_phase(&self) -> bool {
        self.elapsed_ticks < self.push_ticks
    }
}

impl Default for HandScript {
    fn default() -> Self {
        Self::new(120) // 2 sec при 60Hz
    }
}

/// Система: выставить XrHands на текущий тик сценария
pub fn drive_scripted_hands(
    mut script: ResMut<HandScript>,
    mut rng: ResMut<DeterministicRng>,
    mut hands: ResMut<XrHands>,
) {
    let pushing = script.is_push_phase();

    let axis = if pushing {
        let jitter = rng.rng.gen_range(-PUSH_JITTER..PUSH_JITTER);
        Vec2::new(jitter, 1.0)
    } else {
        Vec2::new(
            rng.rng.gen_range(-IDLE_DRIFT..IDLE_DRIFT),
            rng.rng.gen_range(-IDLE_DRIFT..IDLE_DRIFT),
        )
    };

    hands.left.is_valid = true;
    hands.right.is_valid = true;
    hands.set_button(Hand::Right, pushing);
    hands.set_axis(Hand::Left, axis);

    if script.elapsed_ticks == script.push_ticks {
        crate::log_info(&format!(
            "HandScript: released A button after {} ticks",
            script.push_ticks
        ));
    }
    script.elapsed_ticks += 1;
}

/// Plugin: scripted input до push систем в том же FixedUpdate
pub struct ScriptedHandsPlugin {
    pub push_ticks: u32,
}

impl Default for ScriptedHandsPlugin {
    fn default() -> Self {
        Self {
            push_ticks: HandScript::default().push_ticks,
        }
    }
}

impl Plugin for ScriptedHandsPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(crate::DEFAULT_SEED));
        }

        app.insert_resource(HandScript::new(self.push_ticks))
            .add_systems(
                FixedUpdate,
                drive_scripted_hands.before(crate::physics::clear_push_forces),
            );
    }
}
