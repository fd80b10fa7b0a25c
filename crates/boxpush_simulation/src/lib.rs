//! BoxPush Simulation Core
//!
//! VR-толкание физической коробки на Bevy 0.16 ECS + Rapier.
//!
//! Правило толкания (PushPolicy):
//! - A button на правом контроллере зажата
//! - стик левого контроллера вне deadzone
//! - правая рука ближе `max_distance` к коробке
//!
//! Тогда каждый fixed тик в коробку идёт additive force по направлению
//! стика (в осях руки). Иначе коробка скользит по инерции.
//!
//! Слои:
//! - `push`: чистая policy + контракты InputSource / PoseSource / PhysicsBody
//! - `devices`: XrHands resource (+ scripted hands для headless)
//! - `physics`: RapierBody адаптер, push системы, spawn helpers
//! - `hud`: slider / reset button / labels как events + resource

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod devices;
pub mod hud;
pub mod logger;
pub mod physics;
pub mod push;

// Re-export базовых типов для удобства
pub use devices::{HandDevice, HandScript, ScriptedHandsPlugin, XrHands};
pub use hud::{ForceSlider, PushForceChanged, PushHud, PushHudPlugin, ResetBoxPressed};
pub use logger::*;
pub use physics::{
    spawn_push_box, spawn_push_hand, PushBox, PushController, PushHand, PushPhysicsPlugin,
    RapierBody,
};
pub use push::{
    Hand, InputSample, InputSource, PhysicsBody, PoseSource, PushConfig, PushPolicy, ResetPose,
    PUSH_DEADZONE_SQUARED,
};

/// Частота физического шага (Hz)
pub const FIXED_HZ: f64 = 60.0;

/// Seed по умолчанию для scripted input
pub const DEFAULT_SEED: u64 = 42;

/// Главный plugin (push физика + HUD bindings)
///
/// Rapier plugin host добавляет сам (`in_fixed_schedule()`), чтобы push
/// системы и Rapier step жили в одном FixedUpdate.
pub struct BoxPushPlugin;

impl Plugin for BoxPushPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для physics tick
            .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
            .add_plugins((PushPhysicsPlugin, PushHudPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время двигается вручную: после первого `app.update()` каждый следующий
/// = ровно один fixed тик, независимо от wall clock.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / FIXED_HZ,
        )));

    app
}

/// Snapshot компонентов для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Debug формат: простейшая сериализация
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
