use crate::app::state::{ResultMessage, Tone};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub struct ResultBanner<'a> {
    pub result: Option<&'a ResultMessage>,
    pub theme: &'a Theme,
}

impl Widget for ResultBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(result) = self.result else {
            return;
        };

        let style = match result.tone {
            Tone::Success => self.theme.status_success,
            Tone::Notice => self.theme.status_notice,
            Tone::Error => self.theme.status_error,
        };

        // Leave a blank row between the input and the banner
        let area = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1),
            ..area
        };
        Paragraph::new(Line::from(Span::styled(result.text.as_str(), style)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
