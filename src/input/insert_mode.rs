use crossterm::event::KeyCode;

use crate::app::{AppState, FormField};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    let Some(form) = state.event_form.as_mut() else {
        return;
    };

    match key {
        KeyCode::Tab => {
            form.normalize_time_buffers();
            form.next_field();
        }
        KeyCode::BackTab => {
            form.normalize_time_buffers();
            form.prev_field();
        }
        KeyCode::Left => match form.active_field {
            FormField::Color => form.cycle_color(-1),
            FormField::Category => form.cycle_category(-1),
            _ => {}
        },
        KeyCode::Right => match form.active_field {
            FormField::Color => form.cycle_color(1),
            FormField::Category => form.cycle_category(1),
            _ => {}
        },
        KeyCode::Backspace => match form.active_field {
            FormField::Title => {
                form.title.pop();
            }
            FormField::StartTime => {
                form.start_input.pop();
            }
            FormField::EndTime => {
                form.end_input.pop();
            }
            FormField::Description => {
                form.description.pop();
            }
            FormField::Color | FormField::Category => {}
        },
        KeyCode::Char(c) => match form.active_field {
            FormField::Title => form.title.push(c),
            FormField::StartTime => {
                if (c.is_ascii_digit() || c == ':') && form.start_input.len() < 5 {
                    form.start_input.push(c);
                }
            }
            FormField::EndTime => {
                if (c.is_ascii_digit() || c == ':') && form.end_input.len() < 5 {
                    form.end_input.push(c);
                }
            }
            FormField::Description => form.description.push(c),
            FormField::Color | FormField::Category => {}
        },
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::EventForm;
    use crate::calendar::{EVENT_COLORS, EventStore, SequentialIdGenerator};
    use chrono::NaiveDate;

    fn setup_state_with_form() -> AppState {
        let mut state = AppState::new(EventStore::new(Box::new(SequentialIdGenerator::default())));
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        state.event_form = Some(EventForm::starting_at(date, 9));
        state
    }

    fn form(state: &AppState) -> &EventForm {
        state.event_form.as_ref().unwrap()
    }

    #[test]
    fn tab_moves_to_next_field() {
        let mut state = setup_state_with_form();
        assert_eq!(form(&state).active_field, FormField::Title);

        handle_key(KeyCode::Tab, &mut state);
        assert_eq!(form(&state).active_field, FormField::StartTime);
    }

    #[test]
    fn backtab_moves_to_previous_field() {
        let mut state = setup_state_with_form();
        state.event_form.as_mut().unwrap().active_field = FormField::StartTime;

        handle_key(KeyCode::BackTab, &mut state);
        assert_eq!(form(&state).active_field, FormField::Title);
    }

    #[test]
    fn tab_normalizes_a_shorthand_time_buffer() {
        let mut state = setup_state_with_form();
        {
            let form = state.event_form.as_mut().unwrap();
            form.active_field = FormField::StartTime;
            form.start_input = "930".to_string();
        }

        handle_key(KeyCode::Tab, &mut state);
        assert_eq!(form(&state).start_input, "09:30");
    }

    #[test]
    fn chars_append_to_the_title() {
        let mut state = setup_state_with_form();

        handle_key(KeyCode::Char('H'), &mut state);
        handle_key(KeyCode::Char('i'), &mut state);

        assert_eq!(form(&state).title, "Hi");
    }

    #[test]
    fn backspace_removes_from_the_title() {
        let mut state = setup_state_with_form();
        state.event_form.as_mut().unwrap().title = "Hello".to_string();

        handle_key(KeyCode::Backspace, &mut state);
        assert_eq!(form(&state).title, "Hell");
    }

    #[test]
    fn time_field_accepts_only_digits_and_colon() {
        let mut state = setup_state_with_form();
        {
            let form = state.event_form.as_mut().unwrap();
            form.active_field = FormField::StartTime;
            form.start_input.clear();
        }

        for c in ['1', '4', 'x', ':', '3', '0'] {
            handle_key(KeyCode::Char(c), &mut state);
        }

        assert_eq!(form(&state).start_input, "14:30");
    }

    #[test]
    fn time_field_caps_buffer_length() {
        let mut state = setup_state_with_form();
        {
            let form = state.event_form.as_mut().unwrap();
            form.active_field = FormField::EndTime;
            form.end_input = "12:34".to_string();
        }

        handle_key(KeyCode::Char('5'), &mut state);
        assert_eq!(form(&state).end_input, "12:34");
    }

    #[test]
    fn arrows_cycle_the_color_palette() {
        let mut state = setup_state_with_form();
        state.event_form.as_mut().unwrap().active_field = FormField::Color;

        handle_key(KeyCode::Right, &mut state);
        assert_eq!(form(&state).color_index, 1);

        handle_key(KeyCode::Left, &mut state);
        handle_key(KeyCode::Left, &mut state);
        assert_eq!(form(&state).color_index, EVENT_COLORS.len() - 1);
    }

    #[test]
    fn typing_into_the_color_field_is_ignored() {
        let mut state = setup_state_with_form();
        state.event_form.as_mut().unwrap().active_field = FormField::Color;

        handle_key(KeyCode::Char('z'), &mut state);
        assert_eq!(form(&state).color_index, 0);
        assert!(form(&state).title.is_empty());
    }
}
