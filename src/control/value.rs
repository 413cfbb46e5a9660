//! # Controlled/Uncontrolled Value Reconciler
//!
//! Every interactive control resolves its current value with one rule:
//!
//! | Owner supplied a value? | Effective value |
//! |-------------------------|-----------------|
//! | yes (controlled)        | the owner's value |
//! | no (uncontrolled)       | the control's own internal value |
//!
//! "Supplied" means `Some(_)`. `Some(String::new())` and `Some(false)` are
//! supplied values.
//!
//! User input always writes the internal value first and then notifies the
//! owner, in both modes. The owner decides whether to feed the new value back.
//!
//! A control's mode is fixed by the first observation of the external value.
//! Flipping modes later is not supported: [`ControlledValue::sync_external`]
//! reports it as [`ModeChange::Unsupported`] and applies the new external value
//! as given, without any migration.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use tracing::warn;

/// Owner change callback, invoked with the new value after every user input.
pub type ChangeCallback<T> = Box<dyn FnMut(&T)>;

/// True iff the owner supplied a value.
pub fn is_controlled<T>(external: Option<&T>) -> bool {
    external.is_some()
}

/// Pick the owner's value when controlled, otherwise the internal one.
pub fn resolve_value<'a, T>(external: Option<&'a T>, internal: &'a T) -> &'a T {
    match external {
        Some(value) => value,
        None => internal,
    }
}

/// Which side owns the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    Uncontrolled,
    Controlled,
}

impl ControlMode {
    fn of<T>(external: Option<&T>) -> Self {
        if is_controlled(external) {
            Self::Controlled
        } else {
            Self::Uncontrolled
        }
    }
}

/// Result of re-syncing the owner's value on a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    /// Same mode as first observed.
    Unchanged,
    /// The control switched modes after mount. This is a usage error.
    Unsupported { from: ControlMode, to: ControlMode },
}

/// What happened to the owner notification for one user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Delivered,
    NoListener,
    /// The callback panicked. The internal value was already updated.
    ListenerPanicked,
}

/// Value state for one control instance.
pub struct ControlledValue<T> {
    external: Option<T>,
    internal: T,
    mode: ControlMode,
    on_change: Option<ChangeCallback<T>>,
}

impl<T> ControlledValue<T> {
    /// Create the value state at mount.
    ///
    /// `external` is the owner-supplied value (if any) and `default` seeds the
    /// internal fallback. The mode is fixed from `external` here.
    pub fn new(external: Option<T>, default: T) -> Self {
        let mode = ControlMode::of(external.as_ref());
        Self {
            external,
            internal: default,
            mode,
            on_change: None,
        }
    }

    /// A control that manages its own value.
    pub fn uncontrolled(default: T) -> Self {
        Self::new(None, default)
    }

    /// Attach the owner's change callback.
    pub fn with_on_change(mut self, callback: impl FnMut(&T) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn set_on_change(&mut self, callback: impl FnMut(&T) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Whether the owner currently supplies the value.
    pub fn is_controlled(&self) -> bool {
        is_controlled(self.external.as_ref())
    }

    /// The mode observed at mount.
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// The effective value.
    pub fn value(&self) -> &T {
        resolve_value(self.external.as_ref(), &self.internal)
    }

    /// The self-managed fallback, regardless of mode.
    pub fn internal(&self) -> &T {
        &self.internal
    }

    /// Apply one user interaction.
    ///
    /// The internal value is replaced first, then the owner callback runs with
    /// the new value. A panicking callback is caught and logged; the internal
    /// value is not rolled back.
    pub fn on_user_input(&mut self, new_value: T) -> Notification {
        self.internal = new_value;

        let Some(callback) = self.on_change.as_mut() else {
            return Notification::NoListener;
        };

        let internal = &self.internal;
        match panic::catch_unwind(AssertUnwindSafe(|| callback(internal))) {
            Ok(()) => Notification::Delivered,
            Err(_) => {
                warn!("change callback panicked; keeping the new value");
                Notification::ListenerPanicked
            }
        }
    }

    /// Re-render with the owner's current value.
    ///
    /// The new external value is always stored. A presence flip relative to
    /// the mount-time mode is reported, not reconciled.
    pub fn sync_external(&mut self, external: Option<T>) -> ModeChange {
        let to = ControlMode::of(external.as_ref());
        self.external = external;

        if to == self.mode {
            ModeChange::Unchanged
        } else {
            warn!(from = ?self.mode, to = ?to, "control switched between controlled and uncontrolled after mount");
            ModeChange::Unsupported {
                from: self.mode,
                to,
            }
        }
    }
}

impl<T: Default> Default for ControlledValue<T> {
    fn default() -> Self {
        Self::uncontrolled(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for ControlledValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlledValue")
            .field("external", &self.external)
            .field("internal", &self.internal)
            .field("mode", &self.mode)
            .field("has_listener", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_is_controlled_counts_empty_and_false() {
        assert!(is_controlled(Some(&String::new())));
        assert!(is_controlled(Some(&false)));
        assert!(!is_controlled::<bool>(None));
    }

    #[test]
    fn test_resolve_value_prefers_external() {
        assert_eq!(*resolve_value(Some(&1), &2), 1);
        assert_eq!(*resolve_value(None, &2), 2);
    }

    #[test]
    fn test_mode_is_fixed_at_mount() {
        let value = ControlledValue::new(Some(String::new()), "x".to_string());
        assert_eq!(value.mode(), ControlMode::Controlled);
        assert_eq!(value.value(), "");

        let value = ControlledValue::uncontrolled(true);
        assert_eq!(value.mode(), ControlMode::Uncontrolled);
        assert!(*value.value());
    }

    #[test]
    fn test_user_input_updates_internal_in_controlled_mode() {
        let mut value = ControlledValue::new(Some(1), 0);
        value.on_user_input(5);
        assert_eq!(*value.value(), 1);
        assert_eq!(*value.internal(), 5);
    }

    #[test]
    fn test_notification_without_listener() {
        let mut value = ControlledValue::uncontrolled(0);
        assert_eq!(value.on_user_input(3), Notification::NoListener);
        assert_eq!(*value.value(), 3);
    }

    #[test]
    fn test_panicking_callback_keeps_value() {
        let mut value = ControlledValue::uncontrolled(String::new())
            .with_on_change(|_: &String| panic!("owner blew up"));

        let outcome = value.on_user_input("typed".to_string());

        assert_eq!(outcome, Notification::ListenerPanicked);
        assert_eq!(value.value(), "typed");
    }

    #[test]
    fn test_callback_still_works_after_panic() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let mut value = ControlledValue::uncontrolled(0).with_on_change(move |v: &i32| {
            *counter.borrow_mut() += 1;
            if *v == 1 {
                panic!("first one fails");
            }
        });

        assert_eq!(value.on_user_input(1), Notification::ListenerPanicked);
        assert_eq!(value.on_user_input(2), Notification::Delivered);
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn test_sync_external_same_mode() {
        let mut value = ControlledValue::new(Some(1), 0);
        assert_eq!(value.sync_external(Some(7)), ModeChange::Unchanged);
        assert_eq!(*value.value(), 7);
    }

    #[test]
    fn test_default_is_uncontrolled() {
        let value: ControlledValue<String> = ControlledValue::default();
        assert!(!value.is_controlled());
        assert_eq!(value.value(), "");
    }
}
