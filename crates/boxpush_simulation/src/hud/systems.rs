//! HUD системы: slider → policy, reset button → body, labels ← velocity

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::labels::{format_force, format_velocity, ForceSlider, PushHud};
use crate::physics::{PushBox, PushController, RapierBody};

/// Slider сдвинули (значение в единицах силы, до clamp)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PushForceChanged(pub f32);

/// Нажали reset button
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetBoxPressed;

/// Система: привязать HUD к первой заспавненной коробке
///
/// Slider и label стартуют со значения из PushConfig, а не с дефолта HUD.
/// Коробки, заспавненные позже, label не перетирают.
pub fn sync_force_label_on_spawn(
    spawned: Query<(Entity, &PushController), Added<PushController>>,
    mut hud: ResMut<PushHud>,
) {
    if hud.target.is_some() {
        return;
    }

    if let Some((entity, controller)) = spawned.iter().min_by_key(|(entity, _)| entity.index()) {
        hud.target = Some(entity);
        hud.force_label = format_force(controller.policy.config().force_magnitude);
    }
}

/// Система: slider → `set_force_magnitude` (clamp по диапазону slider'а)
pub fn handle_force_slider(
    mut slider_events: EventReader<PushForceChanged>,
    slider: Res<ForceSlider>,
    mut controllers: Query<&mut PushController>,
    mut hud: ResMut<PushHud>,
) {
    for PushForceChanged(raw_value) in slider_events.read() {
        let value = slider.clamp(*raw_value);

        for mut controller in controllers.iter_mut() {
            controller.policy.set_force_magnitude(value);
        }
        hud.force_label = format_force(value);

        crate::log(&format!(
            "HUD: push force → {:.1} (slider raw {:.2})",
            value, raw_value
        ));
    }
}

/// Система: reset button → `reset_body` для каждой коробки
///
/// Несколько нажатий за frame = один reset (результат идемпотентен).
pub fn handle_reset_button(
    mut reset_events: EventReader<ResetBoxPressed>,
    mut boxes: Query<
        (
            &mut PushController,
            &mut Transform,
            &mut Velocity,
            &mut ExternalForce,
        ),
        With<PushBox>,
    >,
    mut hud: ResMut<PushHud>,
) {
    if reset_events.read().count() == 0 {
        return;
    }

    for (mut controller, transform, velocity, external_force) in boxes.iter_mut() {
        let mut body = RapierBody::new(transform, velocity, external_force);
        controller.policy.reset_body(&mut body);
    }

    hud.velocity_label = format_velocity(0.0);
}

/// Система: velocity label раз в frame из скорости `PushHud::target`
///
/// Коробку despawn'или: отвязываемся, следующая заспавненная станет target.
pub fn refresh_velocity_label(boxes: Query<&Velocity, With<PushBox>>, mut hud: ResMut<PushHud>) {
    let Some(target) = hud.target else {
        return;
    };
    let Ok(velocity) = boxes.get(target) else {
        hud.target = None;
        return;
    };

    let label = format_velocity(velocity.linvel.length());
    if hud.velocity_label != label {
        hud.velocity_label = label;
    }
}

/// Plugin HUD: resources, events, per-frame системы
pub struct PushHudPlugin;

impl Plugin for PushHudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ForceSlider>()
            .init_resource::<PushHud>()
            .add_event::<PushForceChanged>()
            .add_event::<ResetBoxPressed>()
            .add_systems(
                Update,
                (
                    sync_force_label_on_spawn,
                    handle_force_slider,
                    handle_reset_button,
                    refresh_velocity_label,
                )
                    .chain(),
            );
    }
}
