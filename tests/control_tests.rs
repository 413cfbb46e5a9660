//! Controlled/uncontrolled value tests
//!
//! Drives the controls through key events the way the gallery does and checks
//! the value each one reports.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use neonkit::control::{
    resolve_value, ControlMode, ControlledValue, Dropdown, DropdownOption, HandleKey, Modal,
    ModeChange, Notification, RadioGroup, Switch, TextInput,
};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Helper to create a key event
fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn type_text(control: &mut impl HandleKey, text: &str) {
    for c in text.chars() {
        control.handle_key(key(KeyCode::Char(c)));
    }
}

fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl FnMut(&T) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |value: &T| sink.borrow_mut().push(value.clone()))
}

#[test]
fn test_controlled_value_always_reflects_owner() {
    let owner_values = ["", "n", "ne", "neo", "neon"];
    let mut input = TextInput::new(Some(String::new()), "");

    for (i, c) in "xyzw".chars().enumerate() {
        input.handle_key(key(KeyCode::Char(c)));
        // Before the owner re-renders, the displayed value is still the owner's.
        assert_eq!(input.value(), owner_values[i]);
        input.sync_external(Some(owner_values[i + 1].to_string()));
        assert_eq!(input.value(), owner_values[i + 1]);
    }
}

#[test]
fn test_uncontrolled_value_tracks_last_input() {
    let mut value = ControlledValue::uncontrolled(0);
    for n in [3, 1, 4, 1, 5, 9] {
        value.on_user_input(n);
        assert_eq!(*value.value(), n);
        assert_eq!(value.sync_external(None), ModeChange::Unchanged);
        assert_eq!(*value.value(), n);
    }
}

#[test]
fn test_callback_runs_once_per_input_in_both_modes() {
    let (seen, callback) = recorder::<String>();
    let mut controlled = TextInput::new(Some("fixed".to_string()), "").with_on_change(callback);
    type_text(&mut controlled, "ab");
    assert_eq!(*seen.borrow(), vec!["fixeda".to_string(), "fixedb".to_string()]);

    let (seen, callback) = recorder::<String>();
    let mut uncontrolled = TextInput::uncontrolled("").with_on_change(callback);
    type_text(&mut uncontrolled, "ab");
    assert_eq!(*seen.borrow(), vec!["a".to_string(), "ab".to_string()]);
}

#[test]
fn test_mode_flip_is_reported_as_usage_error() {
    let mut switch = Switch::uncontrolled("Glow", false);
    let change = switch.sync_external(Some(true));
    assert_eq!(
        change,
        ModeChange::Unsupported {
            from: ControlMode::Uncontrolled,
            to: ControlMode::Controlled,
        }
    );
    // The owner value still wins for display.
    assert!(switch.is_checked());

    let mut modal = Modal::new("Title", Some(true), false);
    assert_eq!(
        modal.sync_external(None),
        ModeChange::Unsupported {
            from: ControlMode::Controlled,
            to: ControlMode::Uncontrolled,
        }
    );
}

#[test]
fn test_falsy_external_values_still_control() {
    let empty = String::new();
    let internal = "typed".to_string();
    assert_eq!(resolve_value(Some(&empty), &internal), "");

    let mut switch = Switch::new("Glow", Some(false), true);
    assert!(!switch.is_checked());
    switch.handle_key(key(KeyCode::Char(' ')));
    assert!(!switch.is_checked());
}

#[test]
fn test_panicking_callback_keeps_value() {
    let mut value = ControlledValue::uncontrolled(1).with_on_change(|_: &i32| panic!("owner bug"));
    assert_eq!(value.on_user_input(2), Notification::ListenerPanicked);
    assert_eq!(*value.value(), 2);
}

#[test]
fn test_radio_and_dropdown_selection() {
    let (seen, callback) = recorder::<Option<String>>();
    let mut radio = RadioGroup::new([("a", "A"), ("b", "B")], None, None).with_on_change(callback);
    radio.handle_key(key(KeyCode::Down));
    radio.handle_key(key(KeyCode::Enter));
    assert_eq!(radio.selected(), Some("b"));
    assert_eq!(*seen.borrow(), vec![Some("b".to_string())]);

    let (seen, callback) = recorder::<BTreeSet<String>>();
    let options = vec![
        DropdownOption::new("x", "X"),
        DropdownOption::new("y", "Y").disabled(),
        DropdownOption::new("z", "Z"),
    ];
    let mut dropdown = Dropdown::multi(options, None, BTreeSet::new()).on_select_many(callback);
    assert!(dropdown.choose("y").is_none());
    dropdown.choose("x");
    dropdown.choose("z");
    dropdown.choose("x");
    assert_eq!(dropdown.summary(), "Z");
    assert_eq!(seen.borrow().len(), 3);
}
