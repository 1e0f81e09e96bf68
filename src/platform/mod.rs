//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key codes and pointer presses to commands)
//! - Frame scheduling (requestAnimationFrame on web, manual pumping natively)

pub mod frame;
pub mod input;

pub use frame::{FrameId, FrameScheduler, ManualScheduler};
pub use input::{Command, command_for_key, command_for_pointer};
