//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed step per frame, no wall-clock time
//! - Randomness only through an injected RNG
//! - No rendering, audio or storage dependencies

pub mod actor;
pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod state;
pub mod tick;

pub use actor::{Actor, Pose};
pub use clock::{Clock, DangerZone, Sweep, advance};
pub use collision::{CollisionResult, should_end};
pub use difficulty::{SpeedLabel, next_speed};
pub use state::{GameEvent, GamePhase, RenderState, Session};
pub use tick::tick;
