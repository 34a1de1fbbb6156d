use crate::app::state::{AppMode, AppState};
use crate::components::guest_list::GuestList;
use crate::components::help::HelpModal;
use crate::components::helpers::centered_rect_fixed;
use crate::components::key_hints::KeyHints;
use crate::components::result_banner::ResultBanner;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub const FORM_WIDTH: u16 = 56;
const TITLE_HEIGHT: u16 = 2;
const INPUT_HEIGHT: u16 = 3;
const BANNER_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub form: Rect,
    pub title: Rect,
    pub input: Rect,
    pub banner: Rect,
    pub candidates: Option<Rect>, // Below the banner
    pub footer: Rect,
}

pub fn get_layout(area: Rect, app_state: &AppState) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);
    let body = main[0];

    let form_height = TITLE_HEIGHT + INPUT_HEIGHT + BANNER_HEIGHT;
    let form = centered_rect_fixed(FORM_WIDTH, form_height, body);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(BANNER_HEIGHT),
        ])
        .split(form);

    let candidates = if app_state.is_list_navigable() {
        let wanted = app_state.matches.len().min(app_state.max_visible) as u16 + 2;
        let top = rows[2].bottom();
        let height = wanted.min(body.bottom().saturating_sub(top));
        let list = Rect::new(rows[1].x, top, rows[1].width, height);
        (height > 2).then_some(list)
    } else {
        None
    };

    AppLayout {
        form,
        title: rows[0],
        input: rows[1],
        banner: rows[2],
        candidates,
        footer: main[1],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let focused = app_state.mode == AppMode::Editing;
    let cursor_style = if focused {
        app_state.theme.cursor
    } else {
        ratatui::style::Style::default()
    };
    app_state.input.text_area.set_cursor_style(cursor_style);

    let layout = get_layout(f.area(), app_state);
    let theme = &app_state.theme;

    // --- Title ---
    let title = Line::from(Span::styled(app_state.title.as_str(), theme.title));
    let title = Paragraph::new(title).alignment(Alignment::Center);
    f.render_widget(title, layout.title);

    // --- Name field ---
    let border = if focused {
        theme.border_focus
    } else {
        theme.border
    };
    let input_block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled("Your name", theme.input_label),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);
    let inner = input_block.inner(layout.input);
    f.render_widget(input_block, layout.input);
    if inner.width > 0 && inner.height > 0 {
        f.render_widget(&app_state.input.text_area, inner);
    }

    // --- Result ---
    f.render_widget(
        ResultBanner {
            result: app_state.result.as_ref(),
            theme,
        },
        layout.banner,
    );

    // --- Candidates ---
    if let Some(list_area) = layout.candidates {
        f.render_widget(
            GuestList {
                candidates: app_state.candidates().collect(),
                highlight: app_state.dropdown.highlight(),
                scroll_offset: app_state.scroll_offset,
                theme,
            },
            list_area,
        );
    }

    // --- Footer ---
    if layout.footer.width > 0 && layout.footer.height > 0 {
        f.render_widget(
            KeyHints {
                state: app_state,
                theme,
            },
            layout.footer,
        );
    }

    if app_state.show_help {
        f.render_widget(
            HelpModal {
                state: app_state,
                theme,
            },
            f.area(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::config::AppConfig;
    use crate::app::reducer::update;
    use crate::domain::directory::GuestDirectory;
    use crate::domain::models::TableEntry;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn state() -> AppState<'static> {
        AppState::new(
            &GuestDirectory::new(vec![
                TableEntry::new(1, "555-0001", &["Mary Jones"]),
                TableEntry::new(2, "555-0002", &["Mary Smith"]),
            ]),
            &AppConfig::default(),
        )
    }

    fn screen(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            update(
                state,
                Action::TextAreaInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
    }

    #[test]
    fn test_initial_screen() {
        let mut state = state();
        let text = screen(&mut state);
        assert!(text.contains("FIND YOUR TABLE"));
        assert!(text.contains("Your name"));
        assert!(text.contains("2 guests · 2 tables"));
        assert!(text.contains("find table"));
    }

    #[test]
    fn test_candidates_listed_with_tables() {
        let mut state = state();
        type_text(&mut state, "mary");
        let text = screen(&mut state);
        assert!(text.contains("> Mary Jones"));
        assert!(text.contains("Mary Smith"));
        assert!(text.contains("Table 2"));
    }

    #[test]
    fn test_result_banner_after_pick() {
        let mut state = state();
        type_text(&mut state, "smith");
        update(&mut state, Action::Submit);
        let text = screen(&mut state);
        assert!(text.contains("TABLE 2 555-0002"));
        assert!(!text.contains("> Mary"));
        assert!(text.contains("search again"));
    }

    #[test]
    fn test_ambiguous_message_visible_with_list_open() {
        let mut state = state();
        type_text(&mut state, "mary");
        update(&mut state, Action::CloseCandidates);
        update(&mut state, Action::Submit);
        assert!(state.dropdown.is_open());

        let text = screen(&mut state);
        let message = "Multiple matches found — please select your full name.";
        assert!(text.contains(message));
        assert!(text.contains("> Mary Jones"));
        assert!(text.contains("Mary Smith"));
    }

    #[test]
    fn test_list_does_not_cover_banner() {
        let mut state = state();
        type_text(&mut state, "mary");
        let layout = get_layout(Rect::new(0, 0, 80, 24), &state);
        let list = layout.candidates.unwrap();
        assert!(list.intersection(layout.banner).is_empty());
        assert_eq!(list.y, layout.banner.bottom());
    }

    #[test]
    fn test_layout_stays_inside_tiny_terminal() {
        let mut state = state();
        type_text(&mut state, "mary");
        let area = Rect::new(0, 0, 20, 6);
        let layout = get_layout(area, &state);
        assert!(layout.form.width <= 20);
        if let Some(list) = layout.candidates {
            assert!(list.bottom() <= 5);
        }

        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal.draw(|f| draw(f, &mut state)).unwrap();
    }

    #[test]
    fn test_help_overlay() {
        let mut state = state();
        update(&mut state, Action::ToggleHelp);
        let text = screen(&mut state);
        assert!(text.contains("HELP - KEYS"));
        assert!(text.contains("Pick the highlighted name"));
    }
}
