//! Headless прогон BoxPush
//!
//! Scripted руки толкают коробку 2 секунды, потом отпускают кнопку -
//! коробка скользит без linear damping (тормозит только трение о пол).
//! Rapier step в FixedUpdate.

use bevy::prelude::*;
use bevy::transform::TransformPlugin;
use bevy_rapier3d::prelude::*;
use boxpush_simulation::{
    create_headless_app, spawn_push_box, spawn_push_hand, BoxPushPlugin, PushBox, PushConfig,
    PushHud, ResetPose, ScriptedHandsPlugin, DEFAULT_SEED, FIXED_HZ,
};

const TICK_COUNT: usize = 600;

fn main() {
    let seed = DEFAULT_SEED;
    boxpush_simulation::init_logger();
    boxpush_simulation::log_info(&format!(
        "Starting BoxPush headless simulation (seed: {})",
        seed
    ));

    let mut app = create_headless_app(seed);
    app.add_plugins((
        TransformPlugin,
        RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule(),
        BoxPushPlugin,
        ScriptedHandsPlugin::default(),
    ))
    // Rapier step = наш fixed тик
    .insert_resource(TimestepMode::Fixed {
        dt: (1.0 / FIXED_HZ) as f32,
        substeps: 1,
    });

    {
        let world = app.world_mut();
        // Пол: коробка стоит на нём, трение Rapier по умолчанию
        world.spawn((
            Transform::from_xyz(0.0, -0.1, 0.0),
            RigidBody::Fixed,
            Collider::cuboid(50.0, 0.1, 50.0),
        ));
        let hand = spawn_push_hand(&mut world.commands(), Transform::from_xyz(0.0, 1.2, 0.0));
        world.flush();
        spawn_push_box(
            &mut world.commands(),
            Transform::from_xyz(0.0, 0.5, 1.5),
            hand,
            PushConfig::default().with_force_magnitude(20.0),
            ResetPose::startup(),
        );
        world.flush();
    }

    for tick in 0..TICK_COUNT {
        app.update();

        if tick % 60 == 0 {
            let world = app.world_mut();
            let mut boxes = world.query_filtered::<&Transform, With<PushBox>>();
            let position = boxes.iter(world).next().map(|transform| transform.translation);
            let velocity_label = world.resource::<PushHud>().velocity_label.clone();

            boxpush_simulation::log_info(&format!(
                "Tick {}: box at {:?}, speed {}",
                tick, position, velocity_label
            ));
        }
    }

    boxpush_simulation::log_info("Simulation complete!");
}
