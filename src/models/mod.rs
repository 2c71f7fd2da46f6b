//! Data models for backlight zones, colors, and set commands.
//!
//! This module contains the core data structures used throughout the
//! application. Models are independent of the HTTP layer and of the
//! external control utility.

pub mod color;
pub mod command;
pub mod zone;

// Re-export all model types
pub use color::ColorValue;
pub use command::SetCommand;
pub use zone::{KeyboardState, Zone};
