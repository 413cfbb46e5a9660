//! # UI Module
//!
//! Terminal preview gallery for the interactive controls.
//!
//! ## Components
//!
//! - [`App`] - Gallery state: controls, focus, animation tick, change log
//! - [`mod@render`] - Rendering functions for drawing the TUI
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │            Header (variant, motion)             │
//! ├─────────────────────────────────────────────────┤
//! │ Input                                           │
//! │ Textarea                                        │
//! │ Switch (controlled)                             │
//! │ Radio                                           │
//! │ Dropdown / Dropdown (multi)                     │
//! │ Modal trigger                                   │
//! ├─────────────────────────────────────────────────┤
//! │            onChange event log                   │
//! ├─────────────────────────────────────────────────┤
//! │                    Footer                       │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! An open modal is drawn over everything and receives all keys.

pub mod app;
pub mod render;

pub use app::{App, GalleryItem};
pub use render::render;
