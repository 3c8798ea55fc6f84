//! Platform abstraction layer
//!
//! Handles the host-facing pieces of the loop:
//! - Input events (held keys + key-down queue)
//! - Frame pacing

pub mod input;
pub mod time;

pub use input::{InputState, Key};
pub use time::FrameLimiter;
