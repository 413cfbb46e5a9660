//! Modal open/closed state.
//!
//! The open flag goes through the reconciler with a boolean payload, so an
//! owner can control visibility while the modal still reports close requests.

use super::value::{ControlledValue, ModeChange, Notification};
use super::HandleKey;
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug)]
pub struct Modal {
    open: ControlledValue<bool>,
    title: String,
    body: String,
    close_on_escape: bool,
}

impl Modal {
    pub fn new(title: impl Into<String>, external: Option<bool>, default_open: bool) -> Self {
        Self {
            open: ControlledValue::new(external, default_open),
            title: title.into(),
            body: String::new(),
            close_on_escape: true,
        }
    }

    pub fn uncontrolled(title: impl Into<String>) -> Self {
        Self::new(title, None, false)
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_close_on_escape(mut self, close_on_escape: bool) -> Self {
        self.close_on_escape = close_on_escape;
        self
    }

    pub fn on_open_change(mut self, callback: impl FnMut(&bool) + 'static) -> Self {
        self.open.set_on_change(callback);
        self
    }

    pub fn is_open(&self) -> bool {
        *self.open.value()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn request_open(&mut self) -> Notification {
        self.open.on_user_input(true)
    }

    pub fn request_close(&mut self) -> Notification {
        self.open.on_user_input(false)
    }

    pub fn sync_external(&mut self, external: Option<bool>) -> ModeChange {
        self.open.sync_external(external)
    }
}

impl HandleKey for Modal {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.is_open() {
            return false;
        }
        match key.code {
            KeyCode::Esc if self.close_on_escape => {
                self.request_close();
            }
            KeyCode::Enter => {
                self.request_close();
            }
            _ => {}
        }
        // An open modal swallows every key.
        true
    }
}
