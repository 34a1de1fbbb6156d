use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Bottom bar: the keys that do something right now, and the directory size.
pub struct KeyHints<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

fn hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
    match state.mode {
        AppMode::Editing if state.is_list_navigable() => &[
            ("↑/↓", "choose"),
            ("Enter", "select"),
            ("Esc", "close list"),
            ("F1", "help"),
        ],
        AppMode::Editing => &[
            ("Enter", "find table"),
            ("Esc", "done"),
            ("F1", "help"),
        ],
        AppMode::Released => &[("Enter/i", "search again"), ("?", "help"), ("q", "quit")],
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.footer);

        let mut spans = Vec::new();
        for (key, label) in hints(self.state) {
            spans.push(Span::styled(format!(" {key} "), self.theme.footer_key));
            spans.push(Span::styled(format!(" {label}  "), self.theme.footer));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);

        let stats = format!(
            " {} guests · {} tables ",
            self.state.records.len(),
            self.state.table_count
        );
        let width = stats.chars().count() as u16;
        if area.width > width {
            let x = area.right() - width;
            buf.set_string(x, area.y, stats, self.theme.footer_text);
        }
    }
}
