//! # Control Module
//!
//! Stateful interactive controls and the value reconciler they share.
//!
//! ## Controls
//!
//! | Control | Value type | User input |
//! |---------|------------|------------|
//! | [`TextInput`] | `String` | keystrokes |
//! | [`Textarea`] | `String` | keystrokes, `Enter` inserts a newline |
//! | [`Switch`] | `bool` | `Space` / `Enter` |
//! | [`RadioGroup`] | `Option<String>` | `Space` / `Enter` on the highlighted option |
//! | [`Dropdown`] | `Option<String>` or `BTreeSet<String>` | `Enter` on the highlighted option |
//! | [`Modal`] | `bool` (open) | `Esc` closes |
//!
//! Every control routes user input through [`ControlledValue::on_user_input`],
//! so the controlled/uncontrolled rule is identical for all of them.

pub mod dropdown;
pub mod input;
pub mod modal;
pub mod toggle;
pub mod value;

pub use dropdown::{Dropdown, DropdownOption, Selection};
pub use input::{TextInput, Textarea};
pub use modal::Modal;
pub use toggle::{RadioGroup, Switch};
pub use value::{
    is_controlled, resolve_value, ChangeCallback, ControlMode, ControlledValue, ModeChange,
    Notification,
};

use crossterm::event::KeyEvent;

/// A control that reacts to key presses.
pub trait HandleKey {
    /// Returns `true` when the key was consumed.
    fn handle_key(&mut self, key: KeyEvent) -> bool;
}
