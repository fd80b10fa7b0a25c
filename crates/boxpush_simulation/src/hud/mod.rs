//! HUD domain: UI binding surface для толкания
//!
//! # Architecture
//!
//! Виджеты (slider, reset button, text labels) рисует host UI. ECS видит
//! только:
//! - **events**: `PushForceChanged` (slider), `ResetBoxPressed` (button)
//! - **resource**: `PushHud` с готовыми строками для labels
//!
//! Все системы в `Update` (per-frame), не в FixedUpdate.

pub mod labels;
pub mod systems;


pub use labels::*;
pub use systems::*;
