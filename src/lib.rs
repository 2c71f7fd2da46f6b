//! Keyboard Backlight Web Bridge
//!
//! This library provides core functionality for the kbd-led-web service,
//! including color validation, the per-zone keyboard state model, and the
//! HTTP layer that drives the external backlight control utility.

// Module declarations
pub mod config;
pub mod device;
pub mod models;
pub mod web;
