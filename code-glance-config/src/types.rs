//! Option enums backing the settings combo boxes.
//!
//! Each enum maps onto a stored boolean in [`Config`](crate::Config); the
//! first variant is the `true` side and sits at combo index 0.

use serde::{Deserialize, Serialize};

/// Which edge of the editor the minimap docks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Dock on the right edge (default)
    #[default]
    Right,
    /// Dock on the left edge
    Left,
}

impl Alignment {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Alignment::Right => "Right",
            Alignment::Left => "Left",
        }
    }

    /// All variants in combo order
    pub fn all() -> &'static [Alignment] {
        &[Alignment::Right, Alignment::Left]
    }

    /// Combo index of this variant
    pub fn index(self) -> usize {
        match self {
            Alignment::Right => 0,
            Alignment::Left => 1,
        }
    }

    /// Variant at the given combo index
    pub fn from_index(index: usize) -> Alignment {
        if index == 0 {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }

    pub fn is_right(self) -> bool {
        self == Alignment::Right
    }
}

impl From<bool> for Alignment {
    fn from(right_aligned: bool) -> Self {
        if right_aligned {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }
}

/// Mouse event that triggers a jump-to-position on the minimap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JumpTrigger {
    /// Jump as soon as the button is pressed (default)
    #[default]
    MouseDown,
    /// Jump when the button is released
    MouseUp,
}

impl JumpTrigger {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            JumpTrigger::MouseDown => "Mouse Down",
            JumpTrigger::MouseUp => "Mouse Up",
        }
    }

    /// All variants in combo order
    pub fn all() -> &'static [JumpTrigger] {
        &[JumpTrigger::MouseDown, JumpTrigger::MouseUp]
    }

    /// Combo index of this variant
    pub fn index(self) -> usize {
        match self {
            JumpTrigger::MouseDown => 0,
            JumpTrigger::MouseUp => 1,
        }
    }

    /// Variant at the given combo index
    pub fn from_index(index: usize) -> JumpTrigger {
        if index == 0 {
            JumpTrigger::MouseDown
        } else {
            JumpTrigger::MouseUp
        }
    }

    pub fn on_mouse_down(self) -> bool {
        self == JumpTrigger::MouseDown
    }
}

impl From<bool> for JumpTrigger {
    fn from(jump_on_mouse_down: bool) -> Self {
        if jump_on_mouse_down {
            JumpTrigger::MouseDown
        } else {
            JumpTrigger::MouseUp
        }
    }
}

/// How document lines are rasterized into minimap pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Uniform-weight rendering, easier to scan (default)
    #[default]
    Clean,
    /// Per-character weighting that tracks the actual text
    Accurate,
}

impl RenderStyle {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            RenderStyle::Clean => "Clean",
            RenderStyle::Accurate => "Accurate",
        }
    }

    /// All variants in combo order
    pub fn all() -> &'static [RenderStyle] {
        &[RenderStyle::Clean, RenderStyle::Accurate]
    }

    /// Combo index of this variant
    pub fn index(self) -> usize {
        match self {
            RenderStyle::Clean => 0,
            RenderStyle::Accurate => 1,
        }
    }

    /// Variant at the given combo index
    pub fn from_index(index: usize) -> RenderStyle {
        if index == 0 {
            RenderStyle::Clean
        } else {
            RenderStyle::Accurate
        }
    }

    pub fn is_clean(self) -> bool {
        self == RenderStyle::Clean
    }
}

impl From<bool> for RenderStyle {
    fn from(clean: bool) -> Self {
        if clean {
            RenderStyle::Clean
        } else {
            RenderStyle::Accurate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_variant_is_index_zero_and_true() {
        assert_eq!(Alignment::from(true), Alignment::Right);
        assert_eq!(Alignment::Right.index(), 0);
        assert!(Alignment::from_index(0).is_right());

        assert_eq!(JumpTrigger::from(true), JumpTrigger::MouseDown);
        assert!(JumpTrigger::from_index(0).on_mouse_down());

        assert_eq!(RenderStyle::from(false), RenderStyle::Accurate);
        assert_eq!(RenderStyle::Accurate.index(), 1);
    }

    #[test]
    fn combo_order_matches_indices() {
        for (i, style) in RenderStyle::all().iter().enumerate() {
            assert_eq!(style.index(), i);
            assert_eq!(RenderStyle::from_index(i), *style);
        }
        for (i, alignment) in Alignment::all().iter().enumerate() {
            assert_eq!(alignment.index(), i);
        }
        for (i, trigger) in JumpTrigger::all().iter().enumerate() {
            assert_eq!(trigger.index(), i);
        }
    }
}
