use crossterm::event::KeyCode;

use crate::app::{AppState, EventForm, Mode, ViewType};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('h') | KeyCode::Left => state.move_cursor_days(-1),
        KeyCode::Char('l') | KeyCode::Right => state.move_cursor_days(1),
        KeyCode::Char('j') | KeyCode::Down => {
            if has_events_on_cursor_date(state) {
                state.move_event_selection_down();
            } else {
                state.move_cursor_days(7);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if has_events_on_cursor_date(state) {
                state.move_event_selection_up();
            } else {
                state.move_cursor_days(-7);
            }
        }
        KeyCode::Char('n') => state.next_period(),
        KeyCode::Char('p') => state.previous_period(),
        KeyCode::Char('t') => state.go_to_today(),
        KeyCode::Char('m') => state.set_view(ViewType::Month),
        KeyCode::Char('w') => state.set_view(ViewType::Week),
        KeyCode::Char('a') => open_create_form(state),
        KeyCode::Char('e') | KeyCode::Enter => open_edit_form(state),
        KeyCode::Char('x') => request_delete(state),
        _ => {}
    }
}

fn has_events_on_cursor_date(state: &AppState) -> bool {
    !state.events_for_date(state.cursor_date()).is_empty()
}

fn open_create_form(state: &mut AppState) {
    state.status = None;
    state.event_form = Some(EventForm::new(state.cursor_date()));
    state.mode = Mode::Insert;
}

fn open_edit_form(state: &mut AppState) {
    if let Some(event) = state.selected_event() {
        let form = EventForm::for_event(event);
        state.status = None;
        state.event_form = Some(form);
        state.mode = Mode::Insert;
    }
}

fn request_delete(state: &mut AppState) {
    if let Some(event) = state.selected_event() {
        state.pending_delete = Some(event.id.clone());
        state.mode = Mode::Confirm;
    }
}
