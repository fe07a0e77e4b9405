//! SettingsUI struct, state management, and the typed accessor surface.
//!
//! Display code lives in `panel.rs`.

use code_glance_config::{Config, color, defaults};

/// Settings panel manager using egui.
///
/// One instance is created per settings-dialog invocation: the host
/// populates it from the persisted config (via [`SettingsUI::new`] or
/// [`SettingsUI::reset_from`]), the user edits, and the host commits the
/// result with [`SettingsUI::apply_to`] or by handling the actions
/// returned from `show`.
pub struct SettingsUI {
    /// Whether the settings window is currently visible
    pub visible: bool,

    /// Working copy of config being edited
    pub config: Config,

    /// Whether the panel has edits not yet applied or saved
    pub has_changes: bool,

    /// Text being edited in the viewport color field. May be invalid;
    /// validation on focus loss is advisory only.
    pub temp_viewport_color: String,

    /// Validation error shown under the color field
    pub viewport_color_error: Option<String>,

    /// Config state the panel was last populated from or committed to,
    /// used by the Discard button and the unsaved-changes cue.
    pub(crate) baseline: Config,
}

impl SettingsUI {
    /// Create a new settings panel populated from `config`.
    pub fn new(config: Config) -> Self {
        Self {
            visible: false,
            temp_viewport_color: config.viewport_color.clone(),
            viewport_color_error: None,
            baseline: config.clone(),
            config,
            has_changes: false,
        }
    }

    // ========================================================================
    // Accessors: one get/set pair per field, a pure mapping between the
    // widget state and a typed value. Setters do not clamp; range
    // enforcement happens in the widgets and the scroll-adjust path.
    // ========================================================================

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    pub fn is_locked(&self) -> bool {
        self.config.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.config.locked = locked;
    }

    pub fn pixels_per_line(&self) -> u8 {
        self.config.pixels_per_line
    }

    pub fn set_pixels_per_line(&mut self, pixels_per_line: u8) {
        self.config.pixels_per_line = pixels_per_line;
    }

    pub fn jump_on_mouse_down(&self) -> bool {
        self.config.jump_on_mouse_down
    }

    pub fn set_jump_on_mouse_down(&mut self, jump: bool) {
        self.config.jump_on_mouse_down = jump;
    }

    /// The color field text as typed, even when it fails validation.
    pub fn viewport_color(&self) -> &str {
        &self.temp_viewport_color
    }

    pub fn set_viewport_color(&mut self, color: &str) {
        self.temp_viewport_color = color.to_string();
        self.viewport_color_error = None;
    }

    pub fn clean_style(&self) -> bool {
        self.config.clean
    }

    pub fn set_clean_style(&mut self, clean: bool) {
        self.config.clean = clean;
    }

    pub fn is_right_aligned(&self) -> bool {
        self.config.right_aligned
    }

    pub fn set_right_aligned(&mut self, right_aligned: bool) {
        self.config.right_aligned = right_aligned;
    }

    pub fn width(&self) -> u32 {
        self.config.width
    }

    pub fn set_width(&mut self, width: u32) {
        self.config.width = width;
    }

    pub fn min_line_count(&self) -> u32 {
        self.config.min_line_count
    }

    pub fn set_min_line_count(&mut self, min_line_count: u32) {
        self.config.min_line_count = min_line_count;
    }

    pub fn min_window_width(&self) -> u32 {
        self.config.min_window_width
    }

    pub fn set_min_window_width(&mut self, min_window_width: u32) {
        self.config.min_window_width = min_window_width;
    }

    // ========================================================================
    // Commit surface
    // ========================================================================

    /// True when any panel value differs from `config`.
    pub fn is_modified(&self, config: &Config) -> bool {
        config.disabled != self.config.disabled
            || config.locked != self.config.locked
            || config.pixels_per_line != self.config.pixels_per_line
            || config.jump_on_mouse_down != self.config.jump_on_mouse_down
            || config.viewport_color != self.temp_viewport_color
            || config.clean != self.config.clean
            || config.right_aligned != self.config.right_aligned
            || config.width != self.config.width
            || config.min_line_count != self.config.min_line_count
            || config.min_window_width != self.config.min_window_width
    }

    /// Commit the panel values into `config`.
    ///
    /// Width is coerced to at least the minimum, and color text that fails
    /// validation is replaced by the default color. No other field is
    /// adjusted on the way out.
    pub fn apply_to(&self, config: &mut Config) {
        config.disabled = self.config.disabled;
        config.locked = self.config.locked;
        config.pixels_per_line = self.config.pixels_per_line;
        config.jump_on_mouse_down = self.config.jump_on_mouse_down;
        config.width = self.config.width.max(defaults::WIDTH_MIN);
        config.viewport_color = if color::is_valid_hex(&self.temp_viewport_color) {
            self.temp_viewport_color.clone()
        } else {
            defaults::viewport_color()
        };
        config.min_line_count = self.config.min_line_count;
        config.min_window_width = self.config.min_window_width;
        config.clean = self.config.clean;
        config.right_aligned = self.config.right_aligned;
    }

    /// Populate the panel from `config`, clearing any pending edits.
    pub fn reset_from(&mut self, config: &Config) {
        self.config = config.clone();
        self.temp_viewport_color = config.viewport_color.clone();
        self.viewport_color_error = None;
        self.baseline = config.clone();
        self.has_changes = false;
    }

    /// The panel values as a committed config (see [`SettingsUI::apply_to`]).
    pub(crate) fn committed_config(&self) -> Config {
        let mut config = self.baseline.clone();
        self.apply_to(&mut config);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_backed_booleans_round_trip() {
        let mut ui = SettingsUI::new(Config::default());

        ui.set_right_aligned(true);
        assert!(ui.is_right_aligned());
        ui.set_right_aligned(false);
        assert!(!ui.is_right_aligned());

        ui.set_clean_style(false);
        assert!(!ui.clean_style());

        ui.set_jump_on_mouse_down(false);
        assert!(!ui.jump_on_mouse_down());
    }

    #[test]
    fn setters_do_not_clamp() {
        let mut ui = SettingsUI::new(Config::default());

        ui.set_width(10);
        assert_eq!(ui.width(), 10);
        ui.set_width(9999);
        assert_eq!(ui.width(), 9999);
        ui.set_min_line_count(500);
        assert_eq!(ui.min_line_count(), 500);
        ui.set_pixels_per_line(9);
        assert_eq!(ui.pixels_per_line(), 9);
    }

    #[test]
    fn invalid_color_text_is_readable_back() {
        let mut ui = SettingsUI::new(Config::default());
        ui.set_viewport_color("gg00aa");
        assert_eq!(ui.viewport_color(), "gg00aa");
    }

    #[test]
    fn apply_coerces_width_to_minimum() {
        let mut ui = SettingsUI::new(Config::default());
        ui.set_width(10);

        let mut config = Config::default();
        ui.apply_to(&mut config);
        assert_eq!(config.width, 50);
    }

    #[test]
    fn apply_does_not_coerce_width_above_maximum() {
        // Only the lower bound is enforced on commit; the widgets and the
        // scroll path own the upper bound.
        let mut ui = SettingsUI::new(Config::default());
        ui.set_width(9999);

        let mut config = Config::default();
        ui.apply_to(&mut config);
        assert_eq!(config.width, 9999);
    }

    #[test]
    fn apply_substitutes_default_for_invalid_color() {
        let mut ui = SettingsUI::new(Config::default());
        ui.set_viewport_color("ff00a");

        let mut config = Config::default();
        ui.apply_to(&mut config);
        assert_eq!(config.viewport_color, "A0A0A0");
    }

    #[test]
    fn apply_keeps_valid_color_as_typed() {
        let mut ui = SettingsUI::new(Config::default());
        ui.set_viewport_color("ff00aa");

        let mut config = Config::default();
        ui.apply_to(&mut config);
        assert_eq!(config.viewport_color, "ff00aa");
    }

    #[test]
    fn is_modified_tracks_each_field() {
        let saved = Config::default();
        let mut ui = SettingsUI::new(saved.clone());
        assert!(!ui.is_modified(&saved));

        ui.set_min_window_width(640);
        assert!(ui.is_modified(&saved));

        ui.set_min_window_width(saved.min_window_width);
        assert!(!ui.is_modified(&saved));

        // The raw color text counts, valid or not.
        ui.set_viewport_color("zzzzzz");
        assert!(ui.is_modified(&saved));
    }

    #[test]
    fn reset_restores_panel_from_config() {
        let mut saved = Config::default();
        saved.width = 145;
        saved.viewport_color = "336699".to_string();

        let mut ui = SettingsUI::new(Config::default());
        ui.set_width(70);
        ui.set_viewport_color("bogus!");
        ui.has_changes = true;

        ui.reset_from(&saved);
        assert_eq!(ui.width(), 145);
        assert_eq!(ui.viewport_color(), "336699");
        assert!(!ui.has_changes);
        assert!(ui.viewport_color_error.is_none());
        assert!(!ui.is_modified(&saved));
    }
}
