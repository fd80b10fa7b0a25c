//! Physics domain: коробка на Rapier + системы толкания
//!
//! Архитектура:
//! - Коробка = `RigidBody::Dynamic` (Rapier интегрирует массу/инерцию/коллизии)
//! - `PushController` живёт на entity коробки и ссылается на entity руки
//! - Сила идёт через `ExternalForce` (additive, не impulse и не velocity override)

pub mod body;
pub mod systems;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod push_tests;

pub use body::*;
pub use systems::*;
