use super::{
    action::{Action, UpdateResult},
    features,
    state::AppState,
};

pub fn update(state: &mut AppState, action: Action) {
    let handlers: [fn(&mut AppState, &Action) -> UpdateResult; 3] = [
        features::ui::update,
        features::candidates::update,
        features::query::update,
    ];

    for handler in handlers {
        if handler(state, &action) == UpdateResult::Handled {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::AppConfig;
    use crate::app::state::{AppMode, Dropdown, Tone};
    use crate::domain::directory::GuestDirectory;
    use crate::domain::models::TableEntry;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn state_with(tables: Vec<TableEntry>) -> AppState<'static> {
        AppState::new(&GuestDirectory::new(tables), &AppConfig::default())
    }

    fn wedding() -> AppState<'static> {
        state_with(vec![
            TableEntry::new(1, "555-0001", &["Mary Jones", "Ann"]),
            TableEntry::new(2, "555-0002", &["Mary Smith", "Annabelle"]),
            TableEntry::new(4, "555-0101", &["Jonathan Smith"]),
        ])
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            update(
                state,
                Action::TextAreaInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
    }

    fn result_text(state: &AppState) -> Option<String> {
        state.result.as_ref().map(|r| r.text.clone())
    }

    #[test]
    fn test_typing_opens_list_at_top() {
        let mut state = wedding();
        type_text(&mut state, "mary");
        assert_eq!(state.dropdown, Dropdown::Open { highlight: 0 });
        assert_eq!(state.matches, vec![0, 2]);
    }

    #[test]
    fn test_clearing_input_closes_list() {
        let mut state = wedding();
        type_text(&mut state, "m");
        update(
            &mut state,
            Action::TextAreaInput(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
        );
        assert_eq!(state.dropdown, Dropdown::Closed);
        assert!(state.matches.is_empty());
    }

    #[test]
    fn test_typing_clears_previous_result() {
        let mut state = wedding();
        update(&mut state, Action::Submit);
        assert!(state.result.is_some());
        type_text(&mut state, "a");
        assert_eq!(state.result, None);
    }

    #[test]
    fn test_arrow_keys_wrap() {
        let mut state = wedding();
        type_text(&mut state, "a"); // Mary Jones, Ann, Mary Smith, Annabelle, Jonathan Smith
        assert_eq!(state.matches.len(), 5);

        update(&mut state, Action::HighlightPrev);
        assert_eq!(state.dropdown.highlight(), Some(4));
        update(&mut state, Action::HighlightNext);
        assert_eq!(state.dropdown.highlight(), Some(0));
    }

    #[test]
    fn test_scroll_follows_highlight() {
        let mut state = wedding();
        state.max_visible = 2;
        type_text(&mut state, "a");
        update(&mut state, Action::HighlightNext);
        update(&mut state, Action::HighlightNext);
        assert_eq!(state.scroll_offset, 1);
        update(&mut state, Action::HighlightPrev);
        update(&mut state, Action::HighlightPrev);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_submit_empty() {
        let mut state = wedding();
        type_text(&mut state, "   ");
        update(&mut state, Action::Submit);
        assert_eq!(
            result_text(&state).as_deref(),
            Some("Please enter your name.")
        );
        assert_eq!(state.mode, AppMode::Editing);
    }

    #[test]
    fn test_submit_exact_beats_partial() {
        let mut state = wedding();
        type_text(&mut state, "ann");
        assert_eq!(state.matches.len(), 2);
        update(&mut state, Action::Submit);

        assert_eq!(result_text(&state).as_deref(), Some("TABLE 1 555-0001"));
        assert_eq!(state.query(), "Ann");
        assert_eq!(state.dropdown, Dropdown::Closed);
        assert_eq!(state.mode, AppMode::Released);
    }

    #[test]
    fn test_submit_unique_partial_fills_full_name() {
        let mut state = wedding();
        type_text(&mut state, "jona");
        update(&mut state, Action::Submit);

        assert_eq!(result_text(&state).as_deref(), Some("TABLE 4 555-0101"));
        assert_eq!(state.query(), "Jonathan Smith");
        assert_eq!(state.result.unwrap().tone, Tone::Success);
    }

    #[test]
    fn test_submit_ambiguous_reopens_list() {
        let mut state = wedding();
        type_text(&mut state, "mary");
        update(&mut state, Action::CloseCandidates);
        assert_eq!(state.dropdown, Dropdown::Closed);

        update(&mut state, Action::Submit);
        assert_eq!(
            result_text(&state).as_deref(),
            Some("Multiple matches found — please select your full name.")
        );
        assert!(state.dropdown.is_open());
        assert_eq!(state.mode, AppMode::Editing);
        let names: Vec<_> = state.candidates().map(|r| r.full_name.clone()).collect();
        assert_eq!(names, vec!["Mary Jones", "Mary Smith"]);
    }

    #[test]
    fn test_submit_not_found_releases_focus() {
        let mut state = wedding();
        type_text(&mut state, "Zzzz");
        update(&mut state, Action::Submit);
        assert_eq!(result_text(&state).as_deref(), Some("Guest not found"));
        assert_eq!(state.result.as_ref().unwrap().tone, Tone::Error);
        assert_eq!(state.mode, AppMode::Released);
    }

    #[test]
    fn test_confirm_highlight_commits() {
        let mut state = wedding();
        type_text(&mut state, "mary");
        update(&mut state, Action::HighlightNext);
        update(&mut state, Action::ConfirmHighlight);

        assert_eq!(result_text(&state).as_deref(), Some("TABLE 2 555-0002"));
        assert_eq!(state.query(), "Mary Smith");
        assert_eq!(state.dropdown, Dropdown::Closed);
    }

    #[test]
    fn test_pick_and_hover() {
        let mut state = wedding();
        type_text(&mut state, "smith");
        update(&mut state, Action::HoverCandidate(1));
        assert_eq!(state.dropdown.highlight(), Some(1));

        update(&mut state, Action::PickCandidate(1));
        assert_eq!(result_text(&state).as_deref(), Some("TABLE 4 555-0101"));
        assert_eq!(state.query(), "Jonathan Smith");
    }

    #[test]
    fn test_pick_out_of_range_is_ignored() {
        let mut state = wedding();
        type_text(&mut state, "smith");
        update(&mut state, Action::PickCandidate(7));
        assert_eq!(state.result, None);
        assert!(state.dropdown.is_open());
    }

    #[test]
    fn test_click_outside_closes() {
        let mut state = wedding();
        type_text(&mut state, "mary");
        update(&mut state, Action::ClickOutside);
        assert_eq!(state.dropdown, Dropdown::Closed);
        assert_eq!(state.query(), "mary");
    }

    #[test]
    fn test_keys_do_nothing_while_closed() {
        let mut state = wedding();
        type_text(&mut state, "mary");
        update(&mut state, Action::CloseCandidates);
        update(&mut state, Action::HighlightNext);
        update(&mut state, Action::ConfirmHighlight);
        assert_eq!(state.dropdown, Dropdown::Closed);
        assert_eq!(state.result, None);
    }

    #[test]
    fn test_focus_reopens_list_for_existing_text() {
        let mut state = wedding();
        type_text(&mut state, "mary");
        update(&mut state, Action::ClickOutside);
        update(&mut state, Action::BlurInput);
        assert_eq!(state.mode, AppMode::Released);

        update(&mut state, Action::FocusInput);
        assert_eq!(state.mode, AppMode::Editing);
        assert_eq!(state.dropdown, Dropdown::Open { highlight: 0 });
    }

    #[test]
    fn test_typing_ignored_while_released() {
        let mut state = wedding();
        update(&mut state, Action::BlurInput);
        type_text(&mut state, "mary");
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut state = wedding();
        update(&mut state, Action::Paste("Jonathan\nSmith".to_string()));
        assert_eq!(state.query(), "JonathanSmith");
        update(&mut state, Action::Paste("\n".to_string()));
        assert_eq!(state.query(), "JonathanSmith");
    }

    #[test]
    fn test_help_and_quit() {
        let mut state = wedding();
        update(&mut state, Action::ToggleHelp);
        assert!(state.show_help);
        update(&mut state, Action::ToggleHelp);
        assert!(!state.show_help);
        update(&mut state, Action::Quit);
        assert!(state.should_quit);
    }
}
