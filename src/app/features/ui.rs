use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ToggleHelp => {
            state.show_help = !state.show_help;
            UpdateResult::Handled
        }
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled
        }
        // Layout is recomputed on every draw
        Action::Resize(_, _) => UpdateResult::Handled,
        _ => UpdateResult::NotHandled,
    }
}
