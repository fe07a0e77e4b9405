//! Core `Config` struct definition.

use serde::{Deserialize, Serialize};

/// Persisted settings for the minimap.
///
/// Every field carries a serde default so config files written by older
/// versions keep loading unchanged when new fields appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // ========================================================================
    // Master switches
    // ========================================================================
    /// Disable minimap rendering entirely
    #[serde(default = "crate::defaults::disabled")]
    pub disabled: bool,

    /// Lock the minimap width (hides the resize gutter)
    #[serde(default = "crate::defaults::locked")]
    pub locked: bool,

    // ========================================================================
    // Rendering
    // ========================================================================
    /// Vertical pixels drawn per source line (1-4)
    #[serde(default = "crate::defaults::pixels_per_line")]
    pub pixels_per_line: u8,

    /// Use the clean render style rather than the accurate one
    #[serde(default = "crate::defaults::clean")]
    pub clean: bool,

    /// Highlight color of the visible region: six hex digits, no leading '#'
    #[serde(default = "crate::defaults::viewport_color")]
    pub viewport_color: String,

    // ========================================================================
    // Layout
    // ========================================================================
    /// Dock the minimap on the right edge of the editor
    #[serde(default = "crate::defaults::right_aligned")]
    pub right_aligned: bool,

    /// Width of the minimap column in pixels
    #[serde(default = "crate::defaults::width")]
    pub width: u32,

    // ========================================================================
    // Behavior & visibility thresholds
    // ========================================================================
    /// Jump to the clicked line on mouse-down rather than mouse-up
    #[serde(default = "crate::defaults::jump_on_mouse_down")]
    pub jump_on_mouse_down: bool,

    /// Hide the minimap for documents shorter than this many lines
    #[serde(default = "crate::defaults::min_line_count")]
    pub min_line_count: u32,

    /// Hide the minimap when the editor window is narrower than this
    #[serde(default = "crate::defaults::min_window_width")]
    pub min_window_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            disabled: crate::defaults::disabled(),
            locked: crate::defaults::locked(),
            pixels_per_line: crate::defaults::pixels_per_line(),
            clean: crate::defaults::clean(),
            viewport_color: crate::defaults::viewport_color(),
            right_aligned: crate::defaults::right_aligned(),
            width: crate::defaults::width(),
            jump_on_mouse_down: crate::defaults::jump_on_mouse_down(),
            min_line_count: crate::defaults::min_line_count(),
            min_window_width: crate::defaults::min_window_width(),
        }
    }
}

impl Config {
    /// Viewport color as RGB.
    ///
    /// The stored text is not guaranteed valid (the settings field only
    /// validates advisorily), so this falls back to the default color
    /// rather than failing.
    pub fn viewport_rgb(&self) -> [u8; 3] {
        crate::color::parse_hex(&self.viewport_color).unwrap_or([0xA0, 0xA0, 0xA0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_initial_values() {
        let config = Config::default();
        assert!(!config.disabled);
        assert!(!config.locked);
        assert_eq!(config.pixels_per_line, 4);
        assert!(config.jump_on_mouse_down);
        assert_eq!(config.viewport_color, "A0A0A0");
        assert!(config.clean);
        assert!(config.right_aligned);
        assert_eq!(config.width, 110);
        assert_eq!(config.min_line_count, 1);
        assert_eq!(config.min_window_width, 0);
    }

    #[test]
    fn missing_yaml_keys_fall_back_to_defaults() {
        let config: Config = serde_yaml_ng::from_str("width: 200\ndisabled: true\n").unwrap();
        assert!(config.disabled);
        assert_eq!(config.width, 200);
        // Everything not present in the file takes its default.
        assert_eq!(config.pixels_per_line, 4);
        assert_eq!(config.viewport_color, "A0A0A0");
        assert_eq!(config.min_line_count, 1);
    }

    #[test]
    fn yaml_round_trip_preserves_all_fields() {
        let mut config = Config::default();
        config.disabled = true;
        config.pixels_per_line = 2;
        config.viewport_color = "FF00AA".to_string();
        config.right_aligned = false;
        config.width = 145;
        config.min_window_width = 600;

        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let back: Config = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn viewport_rgb_parses_stored_color() {
        let mut config = Config::default();
        config.viewport_color = "ff00aa".to_string();
        assert_eq!(config.viewport_rgb(), [0xFF, 0x00, 0xAA]);
    }

    #[test]
    fn viewport_rgb_falls_back_on_invalid_text() {
        let mut config = Config::default();
        config.viewport_color = "not-a-color".to_string();
        assert_eq!(config.viewport_rgb(), [0xA0, 0xA0, 0xA0]);
    }
}
