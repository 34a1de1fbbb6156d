use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

/// `TextArea` with the `Clone`/`PartialEq`/`Debug` impls the app state needs.
#[derive(Default)]
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        area.set_cursor_line_style(self.0.cursor_line_style());
        area.set_cursor_style(self.0.cursor_style());
        area.set_placeholder_text(self.0.placeholder_text());
        Self(area)
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for AppTextArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

/// The single-line name field.
#[derive(Debug, Clone, PartialEq)]
pub struct InputState<'a> {
    pub text_area: AppTextArea<'a>,
}

impl Default for InputState<'_> {
    fn default() -> Self {
        Self::with_text("")
    }
}

impl InputState<'_> {
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut area = TextArea::new(vec![text.to_string()]);
        area.set_cursor_line_style(Style::default());
        area.set_placeholder_text("Your name");
        area.move_cursor(CursorMove::End);
        Self {
            text_area: AppTextArea(area),
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text_area.lines().concat()
    }

    /// Replace the contents, cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        let cursor_style = self.text_area.cursor_style();
        *self = Self::with_text(text);
        self.text_area.set_cursor_style(cursor_style);
    }

    /// Fold any inserted line breaks back into one line.
    pub fn flatten_lines(&mut self) {
        if self.text_area.lines().len() > 1 {
            let text = self.text();
            self.set_text(&text);
        }
    }
}
