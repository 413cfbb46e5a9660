//! Switch and radio group.
//!
//! Toggle-style controls treat one discrete key press as one user input.

use super::value::{ControlledValue, ModeChange, Notification};
use super::HandleKey;
use crossterm::event::{KeyCode, KeyEvent};

fn is_activation(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char(' ') | KeyCode::Enter)
}

/// On/off switch.
#[derive(Debug)]
pub struct Switch {
    checked: ControlledValue<bool>,
    label: String,
    disabled: bool,
}

impl Switch {
    pub fn new(label: impl Into<String>, external: Option<bool>, default: bool) -> Self {
        Self {
            checked: ControlledValue::new(external, default),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn uncontrolled(label: impl Into<String>, default: bool) -> Self {
        Self::new(label, None, default)
    }

    pub fn with_on_change(mut self, callback: impl FnMut(&bool) + 'static) -> Self {
        self.checked.set_on_change(callback);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_checked(&self) -> bool {
        *self.checked.value()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn state(&self) -> &ControlledValue<bool> {
        &self.checked
    }

    /// Flip the displayed state and notify the owner.
    pub fn toggle(&mut self) -> Notification {
        let next = !self.is_checked();
        self.checked.on_user_input(next)
    }

    pub fn sync_external(&mut self, external: Option<bool>) -> ModeChange {
        self.checked.sync_external(external)
    }
}

impl HandleKey for Switch {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.disabled || !is_activation(key.code) {
            return false;
        }
        self.toggle();
        true
    }
}

/// Radio group: at most one selected value among its options.
#[derive(Debug)]
pub struct RadioGroup {
    options: Vec<(String, String)>,
    selected: ControlledValue<Option<String>>,
    highlighted: usize,
}

impl RadioGroup {
    /// `options` are `(value, label)` pairs.
    pub fn new<V, L>(
        options: impl IntoIterator<Item = (V, L)>,
        external: Option<Option<String>>,
        default: Option<String>,
    ) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        let options: Vec<(String, String)> = options
            .into_iter()
            .map(|(v, l)| (v.into(), l.into()))
            .collect();
        let selected = ControlledValue::new(external, default);
        let highlighted = selected
            .value()
            .as_ref()
            .and_then(|v| options.iter().position(|(value, _)| value == v))
            .unwrap_or(0);
        Self {
            options,
            selected,
            highlighted,
        }
    }

    pub fn with_on_change(mut self, callback: impl FnMut(&Option<String>) + 'static) -> Self {
        self.selected.set_on_change(callback);
        self
    }

    pub fn options(&self) -> &[(String, String)] {
        &self.options
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.value().as_deref()
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected() == Some(value)
    }

    pub fn state(&self) -> &ControlledValue<Option<String>> {
        &self.selected
    }

    /// Select an option by value. Unknown values are ignored.
    pub fn select(&mut self, value: &str) -> Option<Notification> {
        let index = self.options.iter().position(|(v, _)| v == value)?;
        self.highlighted = index;
        let chosen = self.options[index].0.clone();
        Some(self.selected.on_user_input(Some(chosen)))
    }

    pub fn sync_external(&mut self, external: Option<Option<String>>) -> ModeChange {
        self.selected.sync_external(external)
    }

    fn move_highlight(&mut self, forward: bool) {
        let count = self.options.len();
        if count == 0 {
            return;
        }
        self.highlighted = if forward {
            (self.highlighted + 1) % count
        } else if self.highlighted == 0 {
            count - 1
        } else {
            self.highlighted - 1
        };
    }
}

impl HandleKey for RadioGroup {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.move_highlight(true),
            KeyCode::Up | KeyCode::Char('k') => self.move_highlight(false),
            code if is_activation(code) => {
                if let Some((value, _)) = self.options.get(self.highlighted) {
                    let value = value.clone();
                    self.select(&value);
                }
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn sizes() -> Vec<(&'static str, &'static str)> {
        vec![("sm", "Small"), ("md", "Medium"), ("lg", "Large")]
    }

    #[test]
    fn test_switch_toggles_uncontrolled() {
        let mut switch = Switch::uncontrolled("Glow", false);
        assert!(switch.handle_key(key(KeyCode::Char(' '))));
        assert!(switch.is_checked());
        assert!(switch.handle_key(key(KeyCode::Enter)));
        assert!(!switch.is_checked());
    }

    #[test]
    fn test_switch_ignores_other_keys() {
        let mut switch = Switch::uncontrolled("Glow", false);
        assert!(!switch.handle_key(key(KeyCode::Char('x'))));
        assert!(!switch.is_checked());
    }

    #[test]
    fn test_controlled_switch_reports_toggle_but_keeps_owner_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut switch = Switch::new("Glow", Some(false), false)
            .with_on_change(move |v: &bool| sink.borrow_mut().push(*v));

        switch.toggle();

        assert!(!switch.is_checked());
        assert_eq!(*seen.borrow(), vec![true]);

        // Owner accepts the change on the next render.
        switch.sync_external(Some(true));
        assert!(switch.is_checked());
    }

    #[test]
    fn test_disabled_switch() {
        let mut switch = Switch::uncontrolled("Glow", true).with_disabled(true);
        assert!(!switch.handle_key(key(KeyCode::Enter)));
        assert!(switch.is_checked());
    }

    #[test]
    fn test_radio_highlight_starts_on_selection() {
        let radio = RadioGroup::new(sizes(), None, Some("lg".to_string()));
        assert_eq!(radio.highlighted(), 2);
        assert!(radio.is_selected("lg"));
    }

    #[test]
    fn test_radio_navigation_and_select() {
        let mut radio = RadioGroup::new(sizes(), None, None);
        assert_eq!(radio.selected(), None);

        radio.handle_key(key(KeyCode::Down));
        radio.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(radio.selected(), Some("md"));

        radio.handle_key(key(KeyCode::Up));
        radio.handle_key(key(KeyCode::Up));
        assert_eq!(radio.highlighted(), 2);
        radio.handle_key(key(KeyCode::Enter));
        assert_eq!(radio.selected(), Some("lg"));
    }

    #[test]
    fn test_radio_select_unknown_value() {
        let mut radio = RadioGroup::new(sizes(), None, None);
        assert!(radio.select("xl").is_none());
        assert_eq!(radio.selected(), None);
    }
}
