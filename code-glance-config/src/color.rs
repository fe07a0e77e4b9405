//! Viewport color helpers.
//!
//! Viewport colors are stored as six hex digits without a leading `#`.
//! Validation here is shared by the settings panel (advisory cue on focus
//! loss) and by the commit path, which substitutes the default color for
//! invalid text.

use regex::Regex;
use std::sync::OnceLock;

/// Pattern a viewport color must match: exactly six hex digits.
const HEX_COLOR_PATTERN: &str = "^[a-fA-F0-9]{6}$";

fn hex_color_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(HEX_COLOR_PATTERN).expect("hex color pattern compiles"))
}

/// Whether `text` is a valid six-digit hex color.
pub fn is_valid_hex(text: &str) -> bool {
    hex_color_regex().is_match(text)
}

/// Parse a six-digit hex color into RGB.
///
/// Returns `None` when the text does not match [`is_valid_hex`].
pub fn parse_hex(text: &str) -> Option<[u8; 3]> {
    if !is_valid_hex(text) {
        return None;
    }
    let r = u8::from_str_radix(&text[0..2], 16).ok()?;
    let g = u8::from_str_radix(&text[2..4], 16).ok()?;
    let b = u8::from_str_radix(&text[4..6], 16).ok()?;
    Some([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_six_hex_digits_either_case() {
        assert!(is_valid_hex("ff00aa"));
        assert!(is_valid_hex("FF00AA"));
        assert!(is_valid_hex("A0A0A0"));
        assert!(is_valid_hex("000000"));
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(!is_valid_hex("gg00aa"));
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(!is_valid_hex("ff00a"));
        assert!(!is_valid_hex("ff00aab"));
        assert!(!is_valid_hex(""));
    }

    #[test]
    fn rejects_leading_hash() {
        assert!(!is_valid_hex("#ff00aa"));
    }

    #[test]
    fn parses_channels() {
        assert_eq!(parse_hex("ff00aa"), Some([0xFF, 0x00, 0xAA]));
        assert_eq!(parse_hex("A0A0A0"), Some([0xA0, 0xA0, 0xA0]));
        assert_eq!(parse_hex("nope"), None);
    }
}
