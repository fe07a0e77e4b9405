//! Scroll-wheel value adjustment for the settings widgets.
//!
//! The adjustment rules live here as plain functions over
//! (value, step, modifiers, bounds) so they can be wired onto any widget
//! and tested without a UI.
//!
//! Rotation follows the wheel convention where `+1` is one notch toward
//! the user (scroll down); scrolling up therefore increases a spinner
//! value and moves a combo selection toward index 0.

use egui::Modifiers;
use std::ops::RangeInclusive;

/// Step size after applying modifier keys.
///
/// Ctrl doubles the base step and shift halves it (integer division);
/// holding both forces single-stepping regardless of the base step.
pub fn effective_step(base: u32, modifiers: Modifiers) -> u32 {
    match (modifiers.ctrl, modifiers.shift) {
        (true, false) => base * 2,
        (false, true) => base / 2,
        (true, true) => 1,
        (false, false) => base,
    }
}

/// Clamped scroll adjustment for a spinner-style integer field.
pub fn adjust_value(
    current: u32,
    base_step: u32,
    modifiers: Modifiers,
    range: RangeInclusive<u32>,
    rotation: i32,
) -> u32 {
    let step = i64::from(effective_step(base_step, modifiers));
    let next = i64::from(current) - step * i64::from(rotation.signum());
    next.clamp(i64::from(*range.start()), i64::from(*range.end())) as u32
}

/// Clamped scroll adjustment for a combo selection. No wraparound.
pub fn adjust_selection(current: usize, item_count: usize, rotation: i32) -> usize {
    if item_count == 0 {
        return 0;
    }
    let next = current as i64 + i64::from(rotation.signum());
    next.clamp(0, item_count as i64 - 1) as usize
}

/// Convert an egui scroll delta into a wheel rotation sign.
///
/// egui reports positive y when scrolling up; wheel rotation is positive
/// toward the user (scroll down).
pub fn wheel_rotation(scroll_y: f32) -> i32 {
    if scroll_y > 0.0 {
        -1
    } else if scroll_y < 0.0 {
        1
    } else {
        0
    }
}

/// Rotation for a widget this frame: non-zero only while the pointer
/// hovers the widget and the wheel moved.
pub fn hovered_rotation(ui: &egui::Ui, response: &egui::Response) -> i32 {
    if response.hovered() {
        wheel_rotation(ui.input(|i| i.raw_scroll_delta.y))
    } else {
        0
    }
}
