use crate::config::AppConfig;
use crate::counter::{CounterIntent, CounterReducer, CounterState};
use crate::mvi::Store;
use crate::shopping::{ShoppingError, ShoppingIntent, ShoppingListState, ShoppingReducer};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Counter,
    Shopping,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Counter => "Counter",
            Screen::Shopping => "Shopping List",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Screen::Counter => Screen::Shopping,
            Screen::Shopping => Screen::Counter,
        }
    }
}

/// Which text field of the add dialog or inline editor receives typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Quantity,
}

impl FormField {
    pub fn toggled(self) -> Self {
        match self {
            FormField::Name => FormField::Quantity,
            FormField::Quantity => FormField::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub shown_at: Instant,
}

/// Owns both screen stores plus the UI-only bits the stores don't model
/// (active screen, row selection, focused field, status line).
pub struct AppState {
    pub config: AppConfig,
    pub screen: Screen,
    pub counter: Store<CounterReducer>,
    pub shopping: Store<ShoppingReducer>,
    pub selected: usize,
    pub form_field: FormField,
    pub status_message: Option<StatusMessage>,
    pub should_quit: bool,
    dirty: Rc<Cell<bool>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let dirty = Rc::new(Cell::new(true));

        let mut counter = Store::new(CounterReducer);
        let flag = Rc::clone(&dirty);
        counter.subscribe(move |_: &CounterState| flag.set(true));

        let mut shopping = Store::new(ShoppingReducer::new(config.shopping.id_policy));
        let flag = Rc::clone(&dirty);
        shopping.subscribe(move |_: &ShoppingListState| flag.set(true));

        Self {
            screen: config.ui.start_screen,
            config,
            counter,
            shopping,
            selected: 0,
            form_field: FormField::Name,
            status_message: None,
            should_quit: false,
            dirty,
        }
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Returns whether a redraw is due and clears the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    pub fn list(&self) -> &ShoppingListState {
        self.shopping.state()
    }

    pub fn count(&self) -> i64 {
        self.counter.state().count
    }

    pub fn dispatch_counter(&mut self, intent: CounterIntent) {
        match self.counter.dispatch(intent) {
            Ok(_) => {}
            Err(never) => match never {},
        }
    }

    pub fn dispatch_shopping(&mut self, intent: ShoppingIntent) -> Result<bool, ShoppingError> {
        let changed = self.shopping.dispatch(intent)?;
        self.clamp_selection();
        Ok(changed)
    }

    pub fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            self.screen = screen;
            self.mark_dirty();
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.list().items.len() {
            self.selected += 1;
            self.mark_dirty();
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.mark_dirty();
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.mark_dirty();
    }

    pub fn select_last(&mut self) {
        self.selected = self.list().items.len().saturating_sub(1);
        self.mark_dirty();
    }

    pub fn toggle_form_field(&mut self) {
        self.form_field = self.form_field.toggled();
        self.mark_dirty();
    }

    pub fn info(&mut self, text: String) {
        self.set_status(text, StatusKind::Info);
    }

    pub fn error(&mut self, text: String) {
        self.set_status(text, StatusKind::Error);
    }

    fn set_status(&mut self, text: String, kind: StatusKind) {
        self.status_message = Some(StatusMessage {
            text,
            kind,
            shown_at: Instant::now(),
        });
        self.mark_dirty();
    }

    /// Drop the status message once it has been up for the configured timeout.
    pub fn expire_status(&mut self, now: Instant) {
        let timeout = Duration::from_secs(self.config.ui.status_timeout_secs);
        let expired = self
            .status_message
            .as_ref()
            .is_some_and(|msg| now.duration_since(msg.shown_at) >= timeout);
        if expired {
            self.status_message = None;
            self.mark_dirty();
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.list().items.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
