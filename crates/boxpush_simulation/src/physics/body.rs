//! RapierBody: адаптер PhysicsBody поверх bevy_rapier3d компонентов

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::push::PhysicsBody;

/// PhysicsBody над `Transform` + `Velocity` + `ExternalForce` одной entity
///
/// Держит `Mut<T>`, а не `&mut T`: чтение не триггерит change detection,
/// иначе bevy_rapier каждый шаг телепортировал бы тело в его же Transform.
pub struct RapierBody<'a> {
    pub transform: Mut<'a, Transform>,
    pub velocity: Mut<'a, Velocity>,
    pub external_force: Mut<'a, ExternalForce>,
}

impl<'a> RapierBody<'a> {
    pub fn new(
        transform: Mut<'a, Transform>,
        velocity: Mut<'a, Velocity>,
        external_force: Mut<'a, ExternalForce>,
    ) -> Self {
        Self {
            transform,
            velocity,
            external_force,
        }
    }
}

impl PhysicsBody for RapierBody<'_> {
    fn position(&self) -> Vec3 {
        self.transform.translation
    }

    fn velocity(&self) -> Vec3 {
        self.velocity.linvel
    }

    fn add_force(&mut self, force: Vec3) {
        // Накапливаем: несколько add_force за шаг складываются
        self.external_force.force += force;
    }

    fn set_transform(&mut self, position: Vec3, orientation: Quat) {
        self.transform.translation = position;
        self.transform.rotation = orientation;
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity.linvel = velocity;
    }

    fn set_angular_velocity(&mut self, angular_velocity: Vec3) {
        self.velocity.angvel = angular_velocity;
    }
}
