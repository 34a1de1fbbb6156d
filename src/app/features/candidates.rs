use crate::app::{
    action::{Action, UpdateResult},
    state::{dropdown::scroll_to_highlight, AppState},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    let len = state.matches.len();
    match action {
        Action::HighlightNext => {
            state.dropdown.next(len);
            follow_highlight(state);
            UpdateResult::Handled
        }
        Action::HighlightPrev => {
            state.dropdown.prev(len);
            follow_highlight(state);
            UpdateResult::Handled
        }
        Action::HoverCandidate(idx) => {
            state.dropdown.hover(*idx, len);
            UpdateResult::Handled
        }
        Action::ConfirmHighlight => {
            if state.is_list_navigable() {
                if let Some(record) = state.highlighted_candidate().cloned() {
                    super::query::commit(state, &record);
                }
            }
            UpdateResult::Handled
        }
        Action::PickCandidate(idx) => {
            if state.is_list_navigable() {
                if let Some(record) = state.candidate(*idx).cloned() {
                    super::query::commit(state, &record);
                }
            }
            UpdateResult::Handled
        }
        Action::CloseCandidates => {
            if state.is_list_navigable() {
                state.dropdown.close();
            }
            UpdateResult::Handled
        }
        Action::ClickOutside => {
            state.dropdown.close();
            UpdateResult::Handled
        }
        _ => UpdateResult::NotHandled,
    }
}

fn follow_highlight(state: &mut AppState) {
    if let Some(h) = state.dropdown.highlight() {
        state.scroll_offset = scroll_to_highlight(state.scroll_offset, h, state.max_visible);
    }
}
