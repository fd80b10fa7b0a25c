//! Push системы (FixedUpdate) и spawn helpers
//!
//! Порядок в каждом фиксированном шаге (до Rapier step):
//! 1. `clear_push_forces`: обнуляем накопленную силу прошлого шага
//! 2. `apply_push`: PushPolicy::tick для каждой коробки
//!
//! Rapier хранит `ExternalForce` между шагами, поэтому без шага 1 сила
//! "залипала" бы после отпускания кнопки. С ним `add_force` ведёт себя как
//! continuous force на один шаг, а без толкания коробка просто скользит.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::body::RapierBody;
use crate::devices::XrHands;
use crate::push::{PushConfig, PushPolicy, ResetPose};

/// Half-extent коробки (куб 1×1×1 m, density 1 → масса 1 kg)
pub const BOX_HALF_EXTENT: f32 = 0.5;

/// Коробка без linear damping: после толкания скользит по инерции
pub const BOX_LINEAR_DAMPING: f32 = 0.0;
pub const BOX_ANGULAR_DAMPING: f32 = 0.05;

/// Marker: коробка, которую можно толкать
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PushBox;

/// Marker: трекаемая рука
///
/// Host пишет позу контроллера в `Transform` (обычно child XR rig'а),
/// policy читает world-space позу из `GlobalTransform`.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PushHand;

/// Контроллер толкания на entity коробки
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct PushController {
    pub policy: PushPolicy,
    /// Рука, чья поза задаёт дистанцию и ориентацию силы
    pub hand_entity: Entity,
}

impl PushController {
    pub fn new(hand_entity: Entity, config: PushConfig) -> Self {
        Self {
            policy: PushPolicy::new(config),
            hand_entity,
        }
    }
}

/// Система: обнулить силу толкания перед новым шагом
///
/// Пишем только если сила ненулевая (лишний change detection = лишняя
/// синхронизация с Rapier).
pub fn clear_push_forces(mut forces: Query<&mut ExternalForce, With<PushController>>) {
    for mut external_force in forces.iter_mut() {
        if external_force.force != Vec3::ZERO {
            external_force.force = Vec3::ZERO;
        }
    }
}

/// Система: один тик PushPolicy для каждой коробки
pub fn apply_push(
    hands_input: Res<XrHands>,
    mut boxes: Query<
        (
            Entity,
            &mut PushController,
            &mut Transform,
            &mut Velocity,
            &mut ExternalForce,
        ),
        Without<PushHand>,
    >,
    hand_poses: Query<&GlobalTransform, With<PushHand>>,
) {
    for (entity, mut controller, transform, velocity, external_force) in boxes.iter_mut() {
        let Ok(hand_pose) = hand_poses.get(controller.hand_entity) else {
            crate::log_warning(&format!(
                "apply_push: hand {:?} for box {:?} not found, skipping",
                controller.hand_entity, entity
            ));
            continue;
        };

        let mut body = RapierBody::new(transform, velocity, external_force);
        controller.policy.tick(&*hands_input, hand_pose, &mut body);
    }
}

/// Spawn helper: коробка с полным набором компонентов
///
/// - Transform
/// - PushBox + PushController (reset pose резолвится от стартового transform)
/// - Rapier: RigidBody::Dynamic + Collider (cuboid) + Velocity + ExternalForce + Damping
pub fn spawn_push_box(
    commands: &mut Commands,
    transform: Transform,
    hand_entity: Entity,
    config: PushConfig,
    reset: ResetPose,
) -> Entity {
    let config = config.with_resolved_reset(reset, &transform);

    crate::log_info(&format!(
        "spawn_push_box: at {:?}, reset to {:?}, force {:.1}",
        transform.translation, config.reset_position, config.force_magnitude
    ));

    commands
        .spawn((
            transform,
            PushBox,
            PushController::new(hand_entity, config),
            // Rapier physics
            RigidBody::Dynamic,
            Collider::cuboid(BOX_HALF_EXTENT, BOX_HALF_EXTENT, BOX_HALF_EXTENT),
            Velocity::zero(),
            ExternalForce::default(),
            Damping {
                linear_damping: BOX_LINEAR_DAMPING,
                angular_damping: BOX_ANGULAR_DAMPING,
            },
        ))
        .id()
}

/// Spawn helper: трекаемая рука (без физики, поза пишется host'ом)
pub fn spawn_push_hand(commands: &mut Commands, transform: Transform) -> Entity {
    commands.spawn((transform, PushHand)).id()
}

/// Plugin толкания: XrHands resource + системы в FixedUpdate до Rapier step
pub struct PushPhysicsPlugin;

impl Plugin for PushPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<XrHands>().add_systems(
            FixedUpdate,
            (clear_push_forces, apply_push)
                .chain()
                .before(PhysicsSet::SyncBackend),
        );
    }
}
