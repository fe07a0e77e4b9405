//! Settings UI for the code-glance minimap.
//!
//! This crate provides an egui-based settings panel for configuring the
//! minimap at runtime. It is decoupled from the host editor: the panel
//! edits a working copy of [`Config`] and hands results back through
//! [`SettingsAction`].

use code_glance_config::Config;

pub mod scroll;
pub mod section;

mod panel;
mod settings_ui;
pub use settings_ui::SettingsUI;

// Re-export types that settings consumers need
pub use code_glance_config::{self as config, Alignment, JumpTrigger, RenderStyle};

/// Result of processing one frame of the settings panel.
///
/// This enum bridges the settings UI crate with the host application,
/// which processes the action after the frame is drawn.
#[derive(Debug, Clone)]
pub enum SettingsAction {
    /// No action needed
    None,
    /// Close the settings window
    Close,
    /// Apply config changes to the live minimap
    Apply(Config),
    /// Apply config changes and persist them
    Save(Config),
}
