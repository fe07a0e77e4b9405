//! Default value functions for configuration.
//!
//! Each free function is referenced from a
//! `#[serde(default = "crate::defaults::...")]` attribute on [`Config`]
//! fields. The range and step constants below are the single source of
//! truth for the spinner widgets in the settings panel.
//!
//! [`Config`]: crate::Config

// Minimap column width spinner: range in pixels and scroll step.
pub const WIDTH_MIN: u32 = 50;
pub const WIDTH_MAX: u32 = 250;
pub const WIDTH_STEP: u32 = 5;

// Minimum-lines visibility threshold spinner.
pub const MIN_LINE_COUNT_MIN: u32 = 0;
pub const MIN_LINE_COUNT_MAX: u32 = 100;
pub const MIN_LINE_COUNT_STEP: u32 = 10;

// Minimum-window-width visibility threshold spinner.
pub const MIN_WINDOW_WIDTH_MIN: u32 = 0;
pub const MIN_WINDOW_WIDTH_MAX: u32 = 32767;
pub const MIN_WINDOW_WIDTH_STEP: u32 = 10;

/// Pixel density options offered by the settings combo, in combo order.
pub const PIXELS_PER_LINE_OPTIONS: [u8; 4] = [1, 2, 3, 4];

pub fn disabled() -> bool {
    false
}

pub fn locked() -> bool {
    false
}

pub fn pixels_per_line() -> u8 {
    4
}

pub fn jump_on_mouse_down() -> bool {
    true
}

pub fn viewport_color() -> String {
    "A0A0A0".to_string()
}

pub fn clean() -> bool {
    true // Clean render style by default
}

pub fn right_aligned() -> bool {
    true // Dock on the right edge by default
}

pub fn width() -> u32 {
    110
}

pub fn min_line_count() -> u32 {
    1
}

pub fn min_window_width() -> u32 {
    0 // No window-width threshold by default
}
