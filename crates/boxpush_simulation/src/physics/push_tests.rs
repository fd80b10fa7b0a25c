//! Tests for push systems (ECS, без Rapier step).

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use bevy::transform::TransformPlugin;
    use bevy_rapier3d::prelude::*;

    use crate::devices::XrHands;
    use crate::physics::{spawn_push_box, spawn_push_hand, PushController, PushPhysicsPlugin};
    use crate::push::{Hand, PushConfig, ResetPose};

    /// App только с push системами + propagation; FixedUpdate гоняем вручную
    fn setup(box_position: Vec3) -> (App, Entity, Entity) {
        let mut app = App::new();
        app.add_plugins((TransformPlugin, PushPhysicsPlugin));
        app.insert_resource(XrHands::connected());

        let world = app.world_mut();
        let hand = spawn_push_hand(&mut world.commands(), Transform::IDENTITY);
        world.flush();
        let push_box = spawn_push_box(
            &mut world.commands(),
            Transform::from_translation(box_position),
            hand,
            PushConfig::default(),
            ResetPose::startup(),
        );
        world.flush();

        (app, hand, push_box)
    }

    fn press(app: &mut App, button: bool, axis: Vec2) {
        let mut hands = app.world_mut().resource_mut::<XrHands>();
        hands.set_button(Hand::Right, button);
        hands.set_axis(Hand::Left, axis);
    }

    /// Один шаг: GlobalTransform рук обновлены (PostUpdate прошлого frame), затем FixedUpdate
    fn step(app: &mut App) {
        app.world_mut().run_schedule(PostUpdate);
        app.world_mut().run_schedule(FixedUpdate);
    }

    /// Рука становится child'ом XR rig'а с заданной world позой
    fn attach_to_rig(app: &mut App, hand: Entity, rig_transform: Transform) -> Entity {
        let world = app.world_mut();
        let rig = world.spawn(rig_transform).id();
        world.entity_mut(hand).insert(ChildOf(rig));
        rig
    }

    fn force_on(app: &App, entity: Entity) -> Vec3 {
        app.world()
            .get::<ExternalForce>(entity)
            .map(|external_force| external_force.force)
            .unwrap_or(Vec3::NAN)
    }

    #[test]
    fn test_spawned_box_has_physics_components() {
        let (app, hand, push_box) = setup(Vec3::new(0.0, 0.0, 2.0));
        let world = app.world();

        assert!(world.get::<RigidBody>(push_box).is_some());
        assert!(world.get::<Collider>(push_box).is_some());
        assert!(world.get::<Velocity>(push_box).is_some());

        let controller = world.get::<PushController>(push_box).unwrap();
        assert_eq!(controller.hand_entity, hand);
        // Reset pose по умолчанию = стартовая позиция
        assert_eq!(controller.policy.config().reset_position, Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_push_applies_force_in_fixed_step() {
        let (mut app, _, push_box) = setup(Vec3::new(0.0, 0.0, 2.0));

        press(&mut app, true, Vec2::new(0.0, 1.0));
        step(&mut app);

        assert_eq!(force_on(&app, push_box), Vec3::new(0.0, 0.0, 100.0));
        assert!(app.world().get::<PushController>(push_box).unwrap().policy.is_pushing());
    }

    #[test]
    fn test_force_does_not_accumulate_across_steps() {
        let (mut app, _, push_box) = setup(Vec3::new(0.0, 0.0, 2.0));

        press(&mut app, true, Vec2::new(1.0, 0.0));
        for _ in 0..5 {
            step(&mut app);
        }

        // Каждый шаг: clear → add, а не += поверх прошлого шага
        assert_eq!(force_on(&app, push_box), Vec3::new(100.0, 0.0, 0.0));
    }

    #[test]
    fn test_release_clears_force_and_glides() {
        let (mut app, _, push_box) = setup(Vec3::new(0.0, 0.0, 2.0));

        press(&mut app, true, Vec2::new(0.0, 1.0));
        step(&mut app);

        // Коробка уже едет (скорость пишет Rapier, здесь подставляем руками)
        app.world_mut().get_mut::<Velocity>(push_box).unwrap().linvel = Vec3::new(0.0, 0.0, 3.0);

        press(&mut app, false, Vec2::new(0.0, 1.0));
        step(&mut app);

        assert_eq!(force_on(&app, push_box), Vec3::ZERO);
        // Скорость policy не трогает
        assert_eq!(
            app.world().get::<Velocity>(push_box).unwrap().linvel,
            Vec3::new(0.0, 0.0, 3.0)
        );
        assert!(!app.world().get::<PushController>(push_box).unwrap().policy.is_pushing());
    }

    #[test]
    fn test_out_of_range_box_is_not_pushed() {
        let (mut app, _, push_box) = setup(Vec3::new(0.0, 0.0, 6.0));

        press(&mut app, true, Vec2::new(0.0, 1.0));
        step(&mut app);

        assert_eq!(force_on(&app, push_box), Vec3::ZERO);
    }

    #[test]
    fn test_disconnected_hands_do_not_push() {
        let (mut app, _, push_box) = setup(Vec3::new(0.0, 0.0, 1.0));

        press(&mut app, true, Vec2::new(0.0, 1.0));
        app.world_mut().resource_mut::<XrHands>().right.is_valid = false;
        step(&mut app);

        assert_eq!(force_on(&app, push_box), Vec3::ZERO);
    }

    #[test]
    fn test_force_rotates_with_hand() {
        let (mut app, hand, push_box) = setup(Vec3::new(1.0, 0.0, 0.0));

        // Рука развёрнута на 90° вокруг Y: "вперёд" по стику = world +X
        app.world_mut().get_mut::<Transform>(hand).unwrap().rotation =
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);

        press(&mut app, true, Vec2::new(0.0, 1.0));
        step(&mut app);

        let force = force_on(&app, push_box);
        assert!(force.abs_diff_eq(Vec3::new(100.0, 0.0, 0.0), 1e-3), "force = {:?}", force);
    }

    #[test]
    fn test_missing_hand_skips_box() {
        let (mut app, hand, push_box) = setup(Vec3::new(0.0, 0.0, 1.0));
        app.world_mut().despawn(hand);

        press(&mut app, true, Vec2::new(0.0, 1.0));
        step(&mut app);

        assert_eq!(force_on(&app, push_box), Vec3::ZERO);
    }

    #[test]
    fn test_distance_uses_hand_world_position() {
        // Локально рука в нуле, но rig стоит в 20m: коробка вне досягаемости
        let (mut app, hand, push_box) = setup(Vec3::new(0.0, 0.0, 1.0));
        attach_to_rig(&mut app, hand, Transform::from_xyz(20.0, 0.0, 0.0));

        press(&mut app, true, Vec2::new(0.0, 1.0));
        step(&mut app);

        assert_eq!(force_on(&app, push_box), Vec3::ZERO);
        assert!(!app.world().get::<PushController>(push_box).unwrap().policy.is_pushing());
    }

    #[test]
    fn test_force_follows_rig_rotation() {
        // Rig в (20, 0, 0), развёрнут на 90° вокруг Y; коробка в 1m от руки в world
        let (mut app, hand, push_box) = setup(Vec3::new(20.0, 0.0, 1.0));
        attach_to_rig(
            &mut app,
            hand,
            Transform::from_xyz(20.0, 0.0, 0.0)
                .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
        );

        press(&mut app, true, Vec2::new(0.0, 1.0));
        step(&mut app);

        let force = force_on(&app, push_box);
        assert!(force.abs_diff_eq(Vec3::new(100.0, 0.0, 0.0), 1e-3), "force = {:?}", force);
    }
}
