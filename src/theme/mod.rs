use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod nord;
pub mod palette;

pub use palette::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub title: Style,
    pub input_label: Style,
    pub cursor: Style,

    pub list_item: Style,
    pub list_selected: Style,
    pub list_meta: Style,

    pub status_success: Style,
    pub status_notice: Style,
    pub status_error: Style,

    pub header_active: Style,
    pub footer: Style,
    pub footer_key: Style,
    pub footer_text: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    CatppuccinMocha,
    Nord,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
        }
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            title: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),
            input_label: Style::default().fg(p.subtext0),
            cursor: Style::default().add_modifier(Modifier::REVERSED),

            list_item: Style::default().fg(p.text),
            list_selected: Style::default()
                .bg(p.surface1)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            list_meta: Style::default().fg(p.overlay0),

            status_success: Style::default().fg(p.green).add_modifier(Modifier::BOLD),
            status_notice: Style::default().fg(p.yellow).add_modifier(Modifier::BOLD),
            status_error: Style::default().fg(p.red).add_modifier(Modifier::BOLD),

            header_active: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            footer: Style::default().bg(p.crust).fg(p.subtext0),
            footer_key: Style::default()
                .bg(p.surface0)
                .fg(p.peach)
                .add_modifier(Modifier::BOLD),
            footer_text: Style::default().bg(p.base).fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}
