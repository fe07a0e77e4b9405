//! Configuration system for the code-glance minimap.
//!
//! This crate provides the settings model shared by the minimap renderer
//! and the settings panel. It includes:
//!
//! - The [`Config`] struct with per-field serde defaults
//! - YAML persistence with atomic writes
//! - Option enums backing the settings combo boxes
//! - Viewport color validation helpers
//! - A [`ConfigService`] that owns the live config and notifies listeners

pub mod color;
pub mod config;
pub mod defaults;
mod error;
mod persistence;
pub mod service;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use service::{ConfigService, ListenerId};
pub use types::{Alignment, JumpTrigger, RenderStyle};
