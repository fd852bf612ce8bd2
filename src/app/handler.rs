use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::counter::CounterIntent;
use crate::shopping::ShoppingIntent;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.expire_status(Instant::now());
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.mark_dirty();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Text entry captures all input while active
    if state.screen == Screen::Shopping {
        if state.list().is_add_dialog_open {
            return handle_add_dialog_key(state, key);
        }
        if state.list().is_editing() {
            return handle_editor_key(state, key);
        }
    }

    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Tab => {
            state.set_screen(state.screen.toggled());
            return vec![];
        }
        KeyCode::F(1) | KeyCode::Char('1') => {
            state.set_screen(Screen::Counter);
            return vec![];
        }
        KeyCode::F(2) | KeyCode::Char('2') => {
            state.set_screen(Screen::Shopping);
            return vec![];
        }
        _ => {}
    }

    match state.screen {
        Screen::Counter => handle_counter_key(state, key),
        Screen::Shopping => handle_list_key(state, key),
    }
}

fn handle_counter_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up | KeyCode::Char('k') => {
            state.dispatch_counter(CounterIntent::Increment);
        }
        KeyCode::Char('-') | KeyCode::Down | KeyCode::Char('j') => {
            state.dispatch_counter(CounterIntent::Decrement);
        }
        _ => {}
    }
    vec![]
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let selected = state.selected;
    let has_selection = selected < state.list().items.len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Home => state.select_first(),
        KeyCode::End => state.select_last(),
        KeyCode::Char('a') => {
            state.form_field = FormField::Name;
            dispatch(state, ShoppingIntent::OpenAddDialog);
        }
        KeyCode::Char('e') | KeyCode::Enter if has_selection => {
            state.form_field = FormField::Name;
            dispatch(state, ShoppingIntent::BeginEditAt(selected));
        }
        KeyCode::Char('d') | KeyCode::Delete if has_selection => {
            let before = state.list().items.len();
            let name = state.list().items[selected].name.clone();
            dispatch(state, ShoppingIntent::DeleteAt(selected));
            if state.list().items.len() < before {
                state.info(format!("Deleted {}", name));
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_add_dialog_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => dispatch(state, ShoppingIntent::CancelAddDialog),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            state.toggle_form_field()
        }
        KeyCode::Enter => return confirm_add(state),
        _ => {
            let list = state.list();
            let intent = match state.form_field {
                FormField::Name => {
                    edited(&list.draft_name, key).map(ShoppingIntent::UpdateDraftName)
                }
                FormField::Quantity => {
                    edited(&list.draft_quantity_text, key).map(ShoppingIntent::UpdateDraftQuantity)
                }
            };
            if let Some(intent) = intent {
                dispatch(state, intent);
            }
        }
    }
    vec![]
}

fn confirm_add(state: &mut AppState) -> Vec<Action> {
    let before = state.list().items.len();
    match state.dispatch_shopping(ShoppingIntent::ConfirmAdd) {
        Ok(_) => {
            let added = state.list().items.get(before).map(|item| item.name.clone());
            if let Some(name) = added {
                state.select_last();
                state.info(format!("Added {}", name));
            }
            vec![]
        }
        Err(e) => {
            tracing::warn!(error = %e, "add rejected");
            state.error(format!("Cannot add item: {}", e));
            if state.config.behavior.bell_on_error {
                vec![Action::Bell]
            } else {
                vec![]
            }
        }
    }
}

fn handle_editor_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let list = state.list();
    let Some(id) = list.editing_item().map(|item| item.id) else {
        return vec![];
    };
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            state.toggle_form_field()
        }
        KeyCode::Enter => {
            let intent = ShoppingIntent::SaveEdit {
                id,
                name: list.edit_name.clone(),
                quantity_text: list.edit_quantity_text.clone(),
            };
            dispatch(state, intent);
        }
        _ => {
            let intent = match state.form_field {
                FormField::Name => edited(&list.edit_name, key).map(ShoppingIntent::UpdateEditName),
                FormField::Quantity => {
                    edited(&list.edit_quantity_text, key).map(ShoppingIntent::UpdateEditQuantity)
                }
            };
            if let Some(intent) = intent {
                dispatch(state, intent);
            }
        }
    }
    vec![]
}

/// Dispatch an intent that cannot be rejected.
fn dispatch(state: &mut AppState, intent: ShoppingIntent) {
    if let Err(e) = state.dispatch_shopping(intent) {
        state.error(e.to_string());
    }
}

/// Apply a typing key to a text buffer. `None` for keys that don't edit text.
fn edited(text: &str, key: KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut next = text.to_string();
            next.push(c);
            Some(next)
        }
        KeyCode::Backspace => {
            let mut next = text.to_string();
            next.pop()?;
            Some(next)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::shopping::IdPolicy;

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        handle_event(state, AppEvent::Terminal(CEvent::Key(key)))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn shopping_app() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, KeyCode::F(2));
        state
    }

    fn add_item(state: &mut AppState, name: &str, qty: &str) -> Vec<Action> {
        press(state, KeyCode::Char('a'));
        type_text(state, name);
        press(state, KeyCode::Tab);
        type_text(state, qty);
        press(state, KeyCode::Enter)
    }

    #[test]
    fn counter_keys_increment_and_decrement() {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, KeyCode::Char('+'));
        press(&mut state, KeyCode::Up);
        press(&mut state, KeyCode::Char('-'));
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Down);
        assert_eq!(state.count(), -1);
    }

    #[test]
    fn ctrl_c_and_q_quit() {
        let mut state = AppState::new(AppConfig::default());
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let actions = handle_event(&mut state, AppEvent::Terminal(CEvent::Key(key)));
        assert_eq!(actions, vec![Action::Quit]);
        assert_eq!(press(&mut state, KeyCode::Char('q')), vec![Action::Quit]);
    }

    #[test]
    fn tab_switches_screens() {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.screen, Screen::Shopping);
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.screen, Screen::Counter);
    }

    #[test]
    fn add_dialog_flow_appends_item() {
        let mut state = shopping_app();
        let actions = add_item(&mut state, "Milk", "2");

        assert!(actions.is_empty());
        let list = state.list();
        assert!(!list.is_add_dialog_open);
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].name, "Milk");
        assert_eq!(list.items[0].quantity, 2);
        assert_eq!(state.status_message.as_ref().map(|m| m.kind), Some(StatusKind::Info));
    }

    #[test]
    fn typing_q_in_dialog_does_not_quit() {
        let mut state = shopping_app();
        press(&mut state, KeyCode::Char('a'));
        assert!(press(&mut state, KeyCode::Char('q')).is_empty());
        press(&mut state, KeyCode::Char('x'));
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.list().draft_name, "q");
    }

    #[test]
    fn bad_quantity_keeps_dialog_open_and_rings_bell() {
        let mut state = shopping_app();
        let actions = add_item(&mut state, "Milk", "abc");

        assert_eq!(actions, vec![Action::Bell]);
        let list = state.list();
        assert!(list.is_add_dialog_open);
        assert!(list.items.is_empty());
        assert_eq!(list.draft_quantity_text, "abc");
        assert_eq!(state.status_message.as_ref().map(|m| m.kind), Some(StatusKind::Error));
    }

    #[test]
    fn bell_can_be_disabled() {
        let mut config = AppConfig::default();
        config.behavior.bell_on_error = false;
        let mut state = AppState::new(config);
        press(&mut state, KeyCode::F(2));
        assert!(add_item(&mut state, "Milk", "").is_empty());
    }

    #[test]
    fn escape_cancels_add_dialog() {
        let mut state = shopping_app();
        press(&mut state, KeyCode::Char('a'));
        type_text(&mut state, "Milk");
        press(&mut state, KeyCode::Esc);

        let list = state.list();
        assert!(!list.is_add_dialog_open);
        assert!(list.draft_name.is_empty());
    }

    #[test]
    fn inline_edit_saves_with_fallback_quantity() {
        let mut state = shopping_app();
        add_item(&mut state, "Milk", "2");
        press(&mut state, KeyCode::Char('e'));
        assert!(state.list().is_editing_row(0));

        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Backspace);
        type_text(&mut state, "Eggs");
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Backspace);
        type_text(&mut state, "x");
        press(&mut state, KeyCode::Enter);

        let list = state.list();
        assert!(!list.is_editing());
        assert_eq!(list.items[0].name, "Eggs");
        assert_eq!(list.items[0].quantity, 1);
    }

    #[test]
    fn delete_removes_selected_row() {
        let mut state = shopping_app();
        add_item(&mut state, "Milk", "1");
        add_item(&mut state, "Bread", "1");
        add_item(&mut state, "Eggs", "1");
        press(&mut state, KeyCode::Home);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char('d'));

        let names: Vec<&str> = state.list().items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Eggs"]);
    }

    #[test]
    fn duplicate_ids_act_on_the_selected_row() {
        let mut config = AppConfig::default();
        config.shopping.id_policy = IdPolicy::ListLength;
        let mut state = AppState::new(config);
        press(&mut state, KeyCode::F(2));
        add_item(&mut state, "Milk", "1");
        add_item(&mut state, "Bread", "1");
        add_item(&mut state, "Eggs", "1");
        press(&mut state, KeyCode::Home);
        press(&mut state, KeyCode::Char('d'));
        add_item(&mut state, "Tea", "1");
        let ids: Vec<_> = state.list().items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3, 3]);

        press(&mut state, KeyCode::End);
        press(&mut state, KeyCode::Char('e'));
        assert_eq!(state.list().editing_index(), Some(2));
        assert_eq!(state.list().edit_name, "Tea");
        type_text(&mut state, "!");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.list().items[1].name, "Eggs");
        assert_eq!(state.list().items[2].name, "Tea!");

        press(&mut state, KeyCode::Char('d'));
        let names: Vec<&str> = state.list().items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Bread", "Eggs"]);
        let status = state.status_message.as_ref().map(|m| m.text.as_str());
        assert_eq!(status, Some("Deleted Tea!"));
    }

    #[test]
    fn list_keys_on_empty_list_are_harmless() {
        let mut state = shopping_app();
        press(&mut state, KeyCode::Char('d'));
        press(&mut state, KeyCode::Char('e'));
        press(&mut state, KeyCode::Down);
        assert_eq!(state.selected, 0);
        assert!(!state.list().is_editing());
    }
}
