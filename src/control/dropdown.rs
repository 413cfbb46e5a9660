//! Dropdown with single or multiple selection.
//!
//! Single-select replaces the value and closes the list. Multi-select toggles
//! membership of the highlighted option (add if absent, remove if present) and
//! keeps the list open. Both resolve controlled/uncontrolled the same way.
//!
//! The open/closed state is purely local and never owner-controlled.

use super::value::{ControlledValue, ModeChange, Notification};
use super::HandleKey;
use crossterm::event::{KeyCode, KeyEvent};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Selection state, one variant per mode.
#[derive(Debug)]
pub enum Selection {
    Single(ControlledValue<Option<String>>),
    Multi(ControlledValue<BTreeSet<String>>),
}

/// Add `value` if absent, remove it if present.
pub fn toggle_member(set: &BTreeSet<String>, value: &str) -> BTreeSet<String> {
    let mut next = set.clone();
    if !next.remove(value) {
        next.insert(value.to_string());
    }
    next
}

#[derive(Debug)]
pub struct Dropdown {
    options: Vec<DropdownOption>,
    selection: Selection,
    open: bool,
    highlighted: usize,
    placeholder: String,
}

impl Dropdown {
    pub fn single(
        options: Vec<DropdownOption>,
        external: Option<Option<String>>,
        default: Option<String>,
    ) -> Self {
        Self::with_selection(options, Selection::Single(ControlledValue::new(external, default)))
    }

    pub fn multi(
        options: Vec<DropdownOption>,
        external: Option<BTreeSet<String>>,
        default: BTreeSet<String>,
    ) -> Self {
        Self::with_selection(options, Selection::Multi(ControlledValue::new(external, default)))
    }

    fn with_selection(options: Vec<DropdownOption>, selection: Selection) -> Self {
        Self {
            options,
            selection,
            open: false,
            highlighted: 0,
            placeholder: "Select...".to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Owner callback for single-select dropdowns. Ignored in multi mode.
    pub fn on_select(mut self, callback: impl FnMut(&Option<String>) + 'static) -> Self {
        if let Selection::Single(value) = &mut self.selection {
            value.set_on_change(callback);
        }
        self
    }

    /// Owner callback for multi-select dropdowns. Ignored in single mode.
    pub fn on_select_many(mut self, callback: impl FnMut(&BTreeSet<String>) + 'static) -> Self {
        if let Selection::Multi(value) = &mut self.selection {
            value.set_on_change(callback);
        }
        self
    }

    pub fn options(&self) -> &[DropdownOption] {
        &self.options
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_multi(&self) -> bool {
        matches!(self.selection, Selection::Multi(_))
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn is_selected(&self, value: &str) -> bool {
        match &self.selection {
            Selection::Single(v) => v.value().as_deref() == Some(value),
            Selection::Multi(v) => v.value().contains(value),
        }
    }

    /// Text shown on the closed trigger.
    pub fn summary(&self) -> String {
        let labels: Vec<&str> = self
            .options
            .iter()
            .filter(|o| self.is_selected(&o.value))
            .map(|o| o.label.as_str())
            .collect();
        if labels.is_empty() {
            self.placeholder.clone()
        } else {
            labels.join(", ")
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Choose an option by value. Disabled and unknown options are ignored.
    pub fn choose(&mut self, value: &str) -> Option<Notification> {
        let index = self
            .options
            .iter()
            .position(|o| o.value == value && !o.disabled)?;
        self.highlighted = index;

        let notification = match &mut self.selection {
            Selection::Single(selected) => {
                self.open = false;
                selected.on_user_input(Some(value.to_string()))
            }
            Selection::Multi(selected) => {
                let next = toggle_member(selected.value(), value);
                selected.on_user_input(next)
            }
        };
        Some(notification)
    }

    pub fn sync_single(&mut self, external: Option<Option<String>>) -> Option<ModeChange> {
        match &mut self.selection {
            Selection::Single(selected) => Some(selected.sync_external(external)),
            Selection::Multi(_) => None,
        }
    }

    pub fn sync_multi(&mut self, external: Option<BTreeSet<String>>) -> Option<ModeChange> {
        match &mut self.selection {
            Selection::Multi(selected) => Some(selected.sync_external(external)),
            Selection::Single(_) => None,
        }
    }

    fn move_highlight(&mut self, forward: bool) {
        let count = self.options.len();
        if count == 0 {
            return;
        }
        self.highlighted = if forward {
            (self.highlighted + 1) % count
        } else {
            (self.highlighted + count - 1) % count
        };
    }
}

impl HandleKey for Dropdown {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.open {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                    self.open();
                    true
                }
                _ => false,
            };
        }

        match key.code {
            KeyCode::Esc => self.close(),
            KeyCode::Down | KeyCode::Char('j') => self.move_highlight(true),
            KeyCode::Up | KeyCode::Char('k') => self.move_highlight(false),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(option) = self.options.get(self.highlighted) {
                    let value = option.value.clone();
                    self.choose(&value);
                }
            }
            _ => return false,
        }
        true
    }
}
