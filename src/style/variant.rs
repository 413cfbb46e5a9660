//! # Variant Styles
//!
//! One table maps each color variant key to its style descriptor. Component
//! templates, the global stylesheet and the preview gallery all iterate this
//! table instead of spelling out per-variant styling by hand.
//!
//! | Key | Primary |
//! |-----|---------|
//! | `cyan` | Neon Cyan |
//! | `purple` | Electric Purple |
//! | `chartreuse` | Chartreuse |
//! | `pink` | Hot Pink |
//! | `orange` | Blaze Orange |
//! | `lime` | Laser Lime |

use super::color::{color_or, ColorPreset};
use ratatui::style::Color;

/// Colors and shadow tokens for one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantStyle {
    /// Lookup key, also the CSS/TSX variant name.
    pub key: &'static str,
    pub label: &'static str,
    /// Border, text and glow color.
    pub primary: &'static str,
    /// Text color on a filled `primary` background.
    pub on_primary: &'static str,
}

const VOID: &str = "#0A0A0F";

impl VariantStyle {
    /// All variants in display order.
    pub fn all() -> &'static [VariantStyle] {
        &VARIANTS
    }

    /// Find a variant by key or label (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static VariantStyle> {
        let name = name.trim();
        VARIANTS
            .iter()
            .find(|v| v.key.eq_ignore_ascii_case(name) || v.label.eq_ignore_ascii_case(name))
    }

    pub fn default_variant() -> &'static VariantStyle {
        &VARIANTS[0]
    }

    /// `by_name`, falling back to the default variant.
    pub fn resolve(name: Option<&str>) -> &'static VariantStyle {
        name.and_then(Self::by_name)
            .unwrap_or_else(Self::default_variant)
    }

    /// CSS `box-shadow` value for the glow.
    pub fn shadow_token(&self) -> String {
        format!("0 0 8px {p}80, 0 0 24px {p}40", p = self.primary)
    }

    /// Tailwind arbitrary-value classes for an outlined element.
    pub fn outline_classes(&self) -> String {
        format!(
            "border-[{p}] text-[{p}] shadow-[0_0_8px_{p}80,0_0_24px_{p}40]",
            p = self.primary
        )
    }

    /// Tailwind classes for a filled element.
    pub fn solid_classes(&self) -> String {
        format!(
            "bg-[{p}] text-[{on}] shadow-[0_0_12px_{p}99]",
            p = self.primary,
            on = self.on_primary
        )
    }

    pub fn primary_color(&self) -> Color {
        color_or(self.primary, Color::Cyan)
    }

    pub fn on_primary_color(&self) -> Color {
        color_or(self.on_primary, Color::Black)
    }

    /// The preset this variant is built from, if any.
    pub fn preset(&self) -> Option<&'static ColorPreset> {
        ColorPreset::by_label(self.label)
    }
}

static VARIANTS: [VariantStyle; 6] = [
    VariantStyle {
        key: "cyan",
        label: "Neon Cyan",
        primary: "#00F0FF",
        on_primary: VOID,
    },
    VariantStyle {
        key: "purple",
        label: "Electric Purple",
        primary: "#B026FF",
        on_primary: "#F5F5FA",
    },
    VariantStyle {
        key: "chartreuse",
        label: "Chartreuse",
        primary: "#DFFF00",
        on_primary: VOID,
    },
    VariantStyle {
        key: "pink",
        label: "Hot Pink",
        primary: "#FF2E97",
        on_primary: VOID,
    },
    VariantStyle {
        key: "orange",
        label: "Blaze Orange",
        primary: "#FF6B00",
        on_primary: VOID,
    },
    VariantStyle {
        key: "lime",
        label: "Laser Lime",
        primary: "#39FF14",
        on_primary: VOID,
    },
];
