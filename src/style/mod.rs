//! # Style Module
//!
//! Data tables shared by the scaffolded templates and the preview gallery:
//! hex color validation and presets, the per-variant style table, and the
//! reduced-motion flag.

pub mod color;
pub mod motion;
pub mod variant;

pub use color::{color_or, is_valid_hex_color, parse_hex_color, to_terminal_color, ColorPreset};
pub use motion::MotionPreference;
pub use variant::VariantStyle;
