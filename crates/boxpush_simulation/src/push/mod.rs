//! Push domain: policy толкания коробки и контракты её коллабораторов
//!
//! - `sources`: InputSource / PoseSource / PhysicsBody, InputSample, Hand
//! - `config`: PushConfig, ResetPose
//! - `policy`: PushPolicy (decide → force → add_force, reset)

pub mod config;
pub mod policy;
pub mod sources;


pub use config::*;
pub use policy::*;
pub use sources::*;
