use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState, ResultMessage, Tone},
};
use crate::domain::matcher::matching_indices;
use crate::domain::models::GuestRecord;
use crate::domain::resolve::{resolve, table_result, Outcome};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TextAreaInput(key) => {
            if state.mode == AppMode::Editing {
                let before = state.query();
                state.input.text_area.input(*key);
                state.input.flatten_lines();
                if state.query() != before {
                    on_query_changed(state);
                }
            }
            UpdateResult::Handled
        }
        Action::Paste(text) => {
            if state.mode == AppMode::Editing {
                let text: String = text.chars().filter(|c| !c.is_control()).collect();
                if !text.is_empty() {
                    state.input.text_area.insert_str(&text);
                    on_query_changed(state);
                }
            }
            UpdateResult::Handled
        }
        Action::Submit => {
            submit(state);
            UpdateResult::Handled
        }
        Action::FocusInput => {
            state.mode = AppMode::Editing;
            if !state.query().is_empty() {
                state.dropdown.reopen();
            }
            UpdateResult::Handled
        }
        Action::BlurInput => {
            state.mode = AppMode::Released;
            UpdateResult::Handled
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Re-derive the candidate list after the user edits the name.
fn on_query_changed(state: &mut AppState) {
    let query = state.query();
    state.result = None;
    state.matches = matching_indices(&query, &state.records);
    state.scroll_offset = 0;
    if query.is_empty() {
        state.dropdown.close();
    } else {
        state.dropdown = crate::app::state::Dropdown::Open { highlight: 0 };
    }
}

fn submit(state: &mut AppState) {
    state.result = None;
    let query = state.query();
    let records = std::sync::Arc::clone(&state.records);
    let outcome = resolve(&query, &records);
    tracing::debug!(outcome = outcome.label(), "submitted name");

    match &outcome {
        Outcome::EmptyInput => {
            state.result = Some(ResultMessage::new(outcome.message(), Tone::Notice));
        }
        Outcome::ExactMatch(record) | Outcome::UniquePartialMatch(record) => {
            commit(state, record);
        }
        Outcome::Ambiguous(_) => {
            state.dropdown.reopen();
            state.result = Some(ResultMessage::new(outcome.message(), Tone::Notice));
        }
        Outcome::NotFound => {
            state.result = Some(ResultMessage::new(outcome.message(), Tone::Error));
            state.mode = AppMode::Released;
        }
    }
}

/// Seat the guest: show their table, put their full name in the field,
/// close the list and release focus.
pub fn commit(state: &mut AppState, record: &GuestRecord) {
    tracing::info!(key = %record.key, table = %record.table_number, "guest seated");
    state.input.set_text(&record.full_name);
    state.matches = matching_indices(&record.full_name, &state.records);
    state.dropdown.close();
    state.scroll_offset = 0;
    state.result = Some(ResultMessage::new(table_result(record), Tone::Success));
    state.mode = AppMode::Released;
}
