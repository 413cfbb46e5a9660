//! Preview gallery state.
//!
//! The gallery plays the role of an embedding application: it owns the
//! glow switch's value (controlled mode) and leaves every other control
//! uncontrolled. All change callbacks append to a shared event log.

use crate::control::{
    Dropdown, DropdownOption, HandleKey, Modal, RadioGroup, Switch, TextInput, Textarea,
};
use crate::style::{MotionPreference, VariantStyle};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;

/// Most recent change events kept for the log panel.
pub const EVENT_LOG_LIMIT: usize = 5;

/// Focusable gallery entries in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryItem {
    Input,
    Textarea,
    Switch,
    Radio,
    Dropdown,
    MultiDropdown,
    ModalTrigger,
}

impl GalleryItem {
    pub const ALL: [GalleryItem; 7] = [
        GalleryItem::Input,
        GalleryItem::Textarea,
        GalleryItem::Switch,
        GalleryItem::Radio,
        GalleryItem::Dropdown,
        GalleryItem::MultiDropdown,
        GalleryItem::ModalTrigger,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Textarea => "Textarea",
            Self::Switch => "Switch (controlled)",
            Self::Radio => "Radio",
            Self::Dropdown => "Dropdown",
            Self::MultiDropdown => "Dropdown (multi)",
            Self::ModalTrigger => "Modal",
        }
    }
}

#[derive(Debug, Default)]
struct EventLog {
    entries: VecDeque<String>,
}

impl EventLog {
    fn push(&mut self, entry: String) {
        self.entries.push_back(entry);
        if self.entries.len() > EVENT_LOG_LIMIT {
            self.entries.pop_front();
        }
    }
}

pub struct App {
    pub variant: &'static VariantStyle,
    pub motion: MotionPreference,
    pub input: TextInput,
    pub textarea: Textarea,
    pub switch: Switch,
    pub radio: RadioGroup,
    pub dropdown: Dropdown,
    pub tags: Dropdown,
    pub modal: Modal,
    pub focus: usize,
    pub tick: u64,
    pub should_quit: bool,
    log: Rc<RefCell<EventLog>>,
    glow_enabled: Rc<Cell<bool>>,
}

fn logger<T: 'static>(
    log: &Rc<RefCell<EventLog>>,
    name: &'static str,
    describe: fn(&T) -> String,
) -> impl FnMut(&T) + 'static {
    let log = Rc::clone(log);
    move |value: &T| log.borrow_mut().push(format!("{}: {}", name, describe(value)))
}

#[allow(clippy::ptr_arg)]
fn describe_text(value: &String) -> String {
    format!("{:?}", value)
}

fn describe_bool(value: &bool) -> String {
    value.to_string()
}

fn describe_choice(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "none".to_string())
}

fn describe_set(value: &BTreeSet<String>) -> String {
    let items: Vec<&str> = value.iter().map(String::as_str).collect();
    format!("[{}]", items.join(", "))
}

impl App {
    pub fn new(variant: &'static VariantStyle, motion: MotionPreference) -> Self {
        let log = Rc::new(RefCell::new(EventLog::default()));
        let glow_enabled = Rc::new(Cell::new(true));

        let input = TextInput::uncontrolled("")
            .with_placeholder("Type something neon...")
            .with_max_length(32)
            .with_on_change(logger(&log, "input", describe_text));

        let textarea = Textarea::uncontrolled("")
            .with_rows(3)
            .with_max_length(140)
            .with_placeholder("Leave a message")
            .with_on_change(logger(&log, "textarea", describe_text));

        // Owner accepts every toggle; the value flows back on the next sync.
        let owner = Rc::clone(&glow_enabled);
        let mut log_switch = logger(&log, "switch", describe_bool);
        let switch = Switch::new("Glow effects", Some(glow_enabled.get()), false).with_on_change(
            move |checked: &bool| {
                owner.set(*checked);
                log_switch(checked);
            },
        );

        let radio = RadioGroup::new(
            [("sm", "Small"), ("md", "Medium"), ("lg", "Large")],
            None,
            Some("md".to_string()),
        )
        .with_on_change(logger(&log, "radio", describe_choice));

        let frameworks = vec![
            DropdownOption::new("react", "React"),
            DropdownOption::new("vue", "Vue"),
            DropdownOption::new("svelte", "Svelte"),
            DropdownOption::new("angular", "Angular").disabled(),
        ];
        let dropdown = Dropdown::single(frameworks, None, None)
            .with_placeholder("Pick a framework")
            .on_select(logger(&log, "dropdown", describe_choice));

        let tag_options = VariantStyle::all()
            .iter()
            .map(|v| DropdownOption::new(v.key, v.label))
            .collect();
        let tags = Dropdown::multi(tag_options, None, BTreeSet::new())
            .with_placeholder("Pick colors")
            .on_select_many(logger(&log, "tags", describe_set));

        let modal = Modal::uncontrolled("Neon Modal")
            .with_body("Copy the source, own the component.")
            .on_open_change(logger(&log, "modal", describe_bool));

        Self {
            variant,
            motion,
            input,
            textarea,
            switch,
            radio,
            dropdown,
            tags,
            modal,
            focus: 0,
            tick: 0,
            should_quit: false,
            log,
            glow_enabled,
        }
    }

    pub fn focused(&self) -> GalleryItem {
        GalleryItem::ALL[self.focus % GalleryItem::ALL.len()]
    }

    pub fn events(&self) -> Vec<String> {
        self.log.borrow().entries.iter().cloned().collect()
    }

    pub fn glow_enabled(&self) -> bool {
        self.glow_enabled.get()
    }

    /// Whether focused borders should be lit this frame.
    pub fn glow_lit(&self) -> bool {
        self.glow_enabled() && self.motion.glow_on(self.tick)
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn focus_next(&mut self) {
        self.close_dropdowns();
        self.focus = (self.focus + 1) % GalleryItem::ALL.len();
    }

    pub fn focus_previous(&mut self) {
        self.close_dropdowns();
        let count = GalleryItem::ALL.len();
        self.focus = (self.focus + count - 1) % count;
    }

    fn close_dropdowns(&mut self) {
        self.dropdown.close();
        self.tags.close();
    }

    /// Re-render step: push owner-held values into controlled controls.
    fn sync_owner_state(&mut self) {
        self.switch.sync_external(Some(self.glow_enabled.get()));
    }

    fn route_to_focused(&mut self, key: KeyEvent) -> bool {
        match self.focused() {
            GalleryItem::Input => self.input.handle_key(key),
            GalleryItem::Textarea => self.textarea.handle_key(key),
            GalleryItem::Switch => self.switch.handle_key(key),
            GalleryItem::Radio => self.radio.handle_key(key),
            GalleryItem::Dropdown => self.dropdown.handle_key(key),
            GalleryItem::MultiDropdown => self.tags.handle_key(key),
            GalleryItem::ModalTrigger => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.modal.request_open();
                    true
                }
                _ => false,
            },
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.modal.is_open() {
            self.modal.handle_key(key);
            return;
        }

        match key.code {
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            _ => {
                let consumed = self.route_to_focused(key);
                if !consumed && matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    self.should_quit = true;
                }
            }
        }

        self.sync_owner_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn app() -> App {
        App::new(VariantStyle::default_variant(), MotionPreference::default())
    }

    #[test]
    fn test_q_types_into_input_instead_of_quitting() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.input.value(), "q");
    }

    #[test]
    fn test_q_quits_on_switch() {
        let mut app = app();
        app.focus = 2;
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_event_log_is_bounded() {
        let mut app = app();
        for c in "abcdefgh".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        let events = app.events();
        assert_eq!(events.len(), EVENT_LOG_LIMIT);
        assert_eq!(events[0], "input: \"abcd\"");
        assert_eq!(events.last().map(String::as_str), Some("input: \"abcdefgh\""));
    }

    #[test]
    fn test_focus_wraps() {
        let mut app = app();
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.focused(), GalleryItem::ModalTrigger);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focused(), GalleryItem::Input);
    }
}
