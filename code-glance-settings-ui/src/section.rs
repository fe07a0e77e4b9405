//! Layout helpers shared by the settings panel.
//!
//! Provides consistent sizing and spacing for the form rows.

/// Standard width for text input controls
pub const INPUT_WIDTH: f32 = 150.0;

/// Standard width for spinner-style drag values
pub const SPINNER_WIDTH: f32 = 150.0;

/// Standard control height
pub const CONTROL_HEIGHT: f32 = 18.0;

/// Standard width for combo boxes
pub const COMBO_WIDTH: f32 = 200.0;

/// Helper to show a section heading with consistent styling.
pub fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(8.0);
    ui.heading(title);
    ui.add_space(4.0);
}

/// Helper to add spacing after a section.
pub fn section_spacing(ui: &mut egui::Ui) {
    ui.add_space(12.0);
}
