use crate::app::state::AppState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

pub struct HelpModal<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Typing",
        &[
            (" a-z", "Type your name (accents optional)"),
            (" Enter", "Find your table"),
            (" Esc", "Close the list, then leave the field"),
        ],
    ),
    (
        "Matches",
        &[
            (" \u{2193} / \u{2191}", "Next / previous name"),
            (" Enter", "Pick the highlighted name"),
            (" Click", "Pick a name"),
        ],
    ),
    (
        "General",
        &[
            (" Enter / i", "Search again"),
            (" F1 / ?", "Show this help"),
            (" q / Ctrl-C", "Quit"),
        ],
    ),
];

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 70, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.state.palette_type.label(), self.theme.dimmed),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let mut rows = Vec::new();
        for (i, (category, entries)) in BINDINGS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*category, self.theme.input_label)),
                Cell::from(""),
            ]));
            for (key, desc) in *entries {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*key, self.theme.footer_key)),
                    Cell::from(Span::styled(*desc, self.theme.list_item)),
                ]));
            }
        }

        let widths = [Constraint::Percentage(30), Constraint::Percentage(70)];
        Table::new(rows, widths).block(block).render(help_area, buf);
    }
}
