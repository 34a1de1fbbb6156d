use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

/// Candidate index under the pointer, accounting for the list border and scroll.
pub fn resolve_clicked_candidate(
    app_state: &AppState<'_>,
    list_area: Rect,
    column: u16,
    row: u16,
) -> Option<usize> {
    let inner = Rect {
        x: list_area.x + 1,
        y: list_area.y + 1,
        width: list_area.width.saturating_sub(2),
        height: list_area.height.saturating_sub(2),
    };
    if !hit(inner, column, row) {
        return None;
    }
    let idx = app_state.scroll_offset + (row - inner.y) as usize;
    (idx < app_state.matches.len()).then_some(idx)
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Paste(text) if app_state.mode == AppMode::Editing && !app_state.show_help => {
            Some(Action::Paste(text))
        }
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            map_key(key, app_state)
        }
        Event::Mouse(mouse) => {
            if app_state.show_help {
                return None;
            }
            let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
            let layout = ui::get_layout(area, app_state);
            let (column, row) = (mouse.column, mouse.row);

            if let Some(list_area) = layout.candidates {
                if hit(list_area, column, row) {
                    let idx = resolve_clicked_candidate(app_state, list_area, column, row);
                    return match mouse.kind {
                        MouseEventKind::Down(MouseButton::Left) => idx.map(Action::PickCandidate),
                        MouseEventKind::Moved => idx.map(Action::HoverCandidate),
                        MouseEventKind::ScrollDown => Some(Action::HighlightNext),
                        MouseEventKind::ScrollUp => Some(Action::HighlightPrev),
                        _ => None,
                    };
                }
            }

            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if hit(layout.input, column, row) {
                        Some(Action::FocusInput)
                    } else if hit(layout.form, column, row) {
                        None
                    } else {
                        Some(Action::ClickOutside)
                    }
                }
                _ => None,
            }
        }
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    if app_state.show_help {
        return match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
            _ => None,
        };
    }

    match app_state.keymap.get_action(key, app_state.mode) {
        Some(action) => refine(action, app_state),
        None if app_state.mode == AppMode::Editing => match key.code {
            // Single-line field: no tabs, no line breaks
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Enter => None,
            _ => Some(Action::TextAreaInput(key)),
        },
        None => None,
    }
}

// The same key means different things depending on whether the list is usable.
fn refine(action: Action, app_state: &AppState<'_>) -> Option<Action> {
    let navigable = app_state.is_list_navigable();
    match action {
        Action::Submit if app_state.highlighted_candidate().is_some() && navigable => {
            Some(Action::ConfirmHighlight)
        }
        Action::HighlightNext | Action::HighlightPrev if !navigable => None,
        Action::CloseCandidates if !navigable => Some(Action::BlurInput),
        other => Some(other),
    }
}
