//! Hex color validation and the named color preset table.
//!
//! Only the 6-digit `#RRGGBB` form is accepted. Validation is a boolean
//! result; callers decide whether to reject or fall back.

use ratatui::style::Color;
use regex::Regex;
use std::sync::OnceLock;

const HEX_COLOR_PATTERN: &str = r"^#[0-9A-Fa-f]{6}$";

static HEX_COLOR_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// A human label mapped to a `#RRGGBB` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPreset {
    pub label: &'static str,
    pub hex: &'static str,
}

impl ColorPreset {
    pub fn all() -> &'static [ColorPreset] {
        &COLOR_PRESETS
    }

    /// Find a preset by label (case-insensitive).
    pub fn by_label(label: &str) -> Option<&'static ColorPreset> {
        COLOR_PRESETS
            .iter()
            .find(|p| p.label.eq_ignore_ascii_case(label))
    }
}

static COLOR_PRESETS: [ColorPreset; 8] = [
    ColorPreset {
        label: "Neon Cyan",
        hex: "#00F0FF",
    },
    ColorPreset {
        label: "Electric Purple",
        hex: "#B026FF",
    },
    ColorPreset {
        label: "Chartreuse",
        hex: "#DFFF00",
    },
    ColorPreset {
        label: "Hot Pink",
        hex: "#FF2E97",
    },
    ColorPreset {
        label: "Blaze Orange",
        hex: "#FF6B00",
    },
    ColorPreset {
        label: "Laser Lime",
        hex: "#39FF14",
    },
    ColorPreset {
        label: "Void Black",
        hex: "#0A0A0F",
    },
    ColorPreset {
        label: "Ghost White",
        hex: "#F5F5FA",
    },
];

/// `#` followed by exactly six hex digits.
pub fn is_valid_hex_color(value: &str) -> bool {
    HEX_COLOR_RE
        .get_or_init(|| Regex::new(HEX_COLOR_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

/// Parse `#RRGGBB` into its channels.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    if !is_valid_hex_color(value) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&value[range], 16).ok();
    Some((channel(1..3)?, channel(3..5)?, channel(5..7)?))
}

pub fn to_terminal_color(value: &str) -> Option<Color> {
    parse_hex_color(value).map(|(r, g, b)| Color::Rgb(r, g, b))
}

/// Parse `value`, or use `fallback` when it is not a valid hex color.
pub fn color_or(value: &str, fallback: Color) -> Color {
    to_terminal_color(value).unwrap_or(fallback)
}
