use crate::domain::models::GuestRecord;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

/// The candidate dropdown: one row per matching guest, name on the left and
/// table on the right, drawn under the result banner.
pub struct GuestList<'a> {
    pub candidates: Vec<&'a GuestRecord>,
    pub highlight: Option<usize>,
    pub scroll_offset: usize,
    pub theme: &'a Theme,
}

impl Widget for GuestList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        let inner = block.inner(area);
        block.render(area, buf);

        let visible = self
            .candidates
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner.height as usize);

        for (row, (idx, record)) in visible.enumerate() {
            let y = inner.y + row as u16;
            let selected = self.highlight == Some(idx);
            let (style, meta_style) = if selected {
                (self.theme.list_selected, self.theme.list_selected)
            } else {
                (self.theme.list_item, self.theme.list_meta)
            };

            let prefix = if selected { "> " } else { "  " };
            let table = format!("Table {} ", record.table_number);
            let table_width = table.chars().count();
            let name_width = (inner.width as usize).saturating_sub(table_width + 1);

            buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);
            buf.set_line(
                inner.x,
                y,
                &Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(record.full_name.as_str(), style),
                ]),
                name_width as u16,
            );
            let table_x = inner.x + inner.width.saturating_sub(table_width as u16);
            buf.set_string(table_x, y, &table, meta_style);
        }

        // Scroll hints
        if self.scroll_offset > 0 {
            buf.set_string(
                area.right().saturating_sub(3),
                area.y,
                "▲",
                self.theme.list_meta,
            );
        }
        if self.scroll_offset + (inner.height as usize) < self.candidates.len() {
            buf.set_string(
                area.right().saturating_sub(3),
                area.bottom().saturating_sub(1),
                "▼",
                self.theme.list_meta,
            );
        }
    }
}
