//! Text input and textarea state.
//!
//! Both controls keep their text in a [`ControlledValue<String>`]. Edits are
//! applied to the effective value the user currently sees, and the result is
//! committed through `on_user_input`. `max_length` is enforced by ignoring
//! keystrokes past the limit and truncating pasted or owner-supplied text,
//! never by returning an error.

use super::value::{ControlledValue, ModeChange, Notification};
use super::HandleKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(byte, _)| byte)
}

/// Truncate to at most `max` characters.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    &s[..byte_index(s, max)]
}

/// Single-line text input.
#[derive(Debug)]
pub struct TextInput {
    value: ControlledValue<String>,
    cursor: usize,
    max_length: Option<usize>,
    placeholder: String,
    disabled: bool,
}

impl TextInput {
    pub fn new(external: Option<String>, default: impl Into<String>) -> Self {
        let value = ControlledValue::new(external, default.into());
        let cursor = char_len(value.value());
        Self {
            value,
            cursor,
            max_length: None,
            placeholder: String::new(),
            disabled: false,
        }
    }

    pub fn uncontrolled(default: impl Into<String>) -> Self {
        Self::new(None, default)
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self.cursor = self.cursor.min(max_length);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_on_change(mut self, callback: impl FnMut(&String) + 'static) -> Self {
        self.value.set_on_change(callback);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The text as displayed, clamped to `max_length`.
    pub fn value(&self) -> &str {
        let raw = self.value.value().as_str();
        match self.max_length {
            Some(max) => truncate_chars(raw, max),
            None => raw,
        }
    }

    pub fn state(&self) -> &ControlledValue<String> {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Cursor position in characters, clamped to the displayed text.
    pub fn cursor(&self) -> usize {
        self.cursor.min(char_len(self.value()))
    }

    /// Re-render with the owner's value.
    pub fn sync_external(&mut self, external: Option<String>) -> ModeChange {
        let change = self.value.sync_external(external);
        self.cursor = self.cursor();
        change
    }

    fn remaining(&self) -> Option<usize> {
        self.max_length
            .map(|max| max.saturating_sub(char_len(self.value())))
    }

    fn commit(&mut self, text: String, cursor: usize) -> Notification {
        self.cursor = cursor;
        self.value.on_user_input(text)
    }

    /// Insert text at the cursor, truncated to the remaining capacity.
    ///
    /// Returns `None` when nothing could be inserted.
    pub fn insert_str(&mut self, text: &str) -> Option<Notification> {
        let text = match self.remaining() {
            Some(room) => truncate_chars(text, room),
            None => text,
        };
        if text.is_empty() {
            return None;
        }

        let mut current = self.value().to_string();
        let cursor = self.cursor();
        current.insert_str(byte_index(&current, cursor), text);
        Some(self.commit(current, cursor + char_len(text)))
    }

    pub fn insert_char(&mut self, c: char) -> Option<Notification> {
        let mut buf = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut buf))
    }

    pub fn delete_backward(&mut self) -> Option<Notification> {
        let cursor = self.cursor();
        if cursor == 0 {
            return None;
        }
        let mut current = self.value().to_string();
        current.remove(byte_index(&current, cursor - 1));
        Some(self.commit(current, cursor - 1))
    }

    pub fn delete_forward(&mut self) -> Option<Notification> {
        let cursor = self.cursor();
        if cursor >= char_len(self.value()) {
            return None;
        }
        let mut current = self.value().to_string();
        current.remove(byte_index(&current, cursor));
        Some(self.commit(current, cursor))
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor().saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor() + 1).min(char_len(self.value()));
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = char_len(self.value());
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(char_len(self.value()));
    }
}

impl HandleKey for TextInput {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.disabled {
            return false;
        }
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c);
            }
            KeyCode::Backspace => {
                self.delete_backward();
            }
            KeyCode::Delete => {
                self.delete_forward();
            }
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }
}

/// Multi-line text input.
///
/// `Enter` inserts a newline; `Up`/`Down` move between lines keeping the
/// column where possible.
#[derive(Debug)]
pub struct Textarea {
    input: TextInput,
    rows: u16,
}

impl Textarea {
    pub fn new(external: Option<String>, default: impl Into<String>) -> Self {
        Self {
            input: TextInput::new(external, default),
            rows: 4,
        }
    }

    pub fn uncontrolled(default: impl Into<String>) -> Self {
        Self::new(None, default)
    }

    pub fn with_rows(mut self, rows: u16) -> Self {
        self.rows = rows.max(1);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.input = self.input.with_max_length(max_length);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input = self.input.with_placeholder(placeholder);
        self
    }

    pub fn with_on_change(mut self, callback: impl FnMut(&String) + 'static) -> Self {
        self.input = self.input.with_on_change(callback);
        self
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn sync_external(&mut self, external: Option<String>) -> ModeChange {
        self.input.sync_external(external)
    }

    /// Cursor as (line, column), both zero-based.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before: String = self.value().chars().take(self.input.cursor()).collect();
        let line = before.matches('\n').count();
        let column = before
            .rsplit('\n')
            .next()
            .map_or(0, char_len);
        (line, column)
    }

    fn move_vertical(&mut self, down: bool) {
        let (line, column) = self.cursor_position();
        let lines: Vec<&str> = self.value().split('\n').collect();
        let target = if down {
            if line + 1 >= lines.len() {
                return;
            }
            line + 1
        } else {
            if line == 0 {
                return;
            }
            line - 1
        };

        let offset: usize = lines[..target].iter().map(|l| char_len(l) + 1).sum();
        let column = column.min(char_len(lines[target]));
        self.input.set_cursor(offset + column);
    }
}

impl HandleKey for Textarea {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.input.is_disabled() {
            return false;
        }
        match key.code {
            KeyCode::Enter => {
                self.input.insert_char('\n');
                true
            }
            KeyCode::Up => {
                self.move_vertical(false);
                true
            }
            KeyCode::Down => {
                self.move_vertical(true);
                true
            }
            _ => self.input.handle_key(key),
        }
    }
}
