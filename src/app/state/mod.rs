use super::config::AppConfig;
use super::keymap::{KeyConfig, KeyMap};
use crate::domain::directory::GuestDirectory;
use crate::domain::models::GuestRecord;
use std::sync::Arc;

pub mod dropdown;
pub mod input;

// Re-exports
pub use dropdown::Dropdown;
pub use input::{AppTextArea, InputState};

pub const DEFAULT_TITLE: &str = "FIND YOUR TABLE";
pub const DEFAULT_MAX_VISIBLE: usize = 5;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Editing,  // Name field has focus
    Released, // Focus released after a result (or Esc)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tone {
    Success,
    Notice,
    Error,
}

/// Text shown in the result banner.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultMessage {
    pub text: String,
    pub tone: Tone,
}

impl ResultMessage {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Lifecycle ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub show_help: bool,

    // --- Guest Directory (read-only) ---
    pub records: Arc<[GuestRecord]>,
    pub table_count: usize,

    // --- Query ---
    pub input: InputState<'a>,
    pub matches: Vec<usize>, // Indices into `records`

    // --- Candidate list ---
    pub dropdown: Dropdown,
    pub scroll_offset: usize,
    pub max_visible: usize,

    // --- Result banner ---
    pub result: Option<ResultMessage>,

    // --- Config ---
    pub title: String,
    pub keymap: Arc<KeyMap>,
    pub palette_type: crate::theme::PaletteType,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(directory: &GuestDirectory, config: &AppConfig) -> Self {
        Self {
            records: directory.shared_records(),
            table_count: directory.table_count(),
            title: config.title.clone(),
            max_visible: config.max_visible.max(1),
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            palette_type: config.theme,
            theme: crate::theme::Theme::from_palette_type(config.theme),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn query(&self) -> String {
        self.input.text()
    }

    /// The candidate list as records, in directory order.
    pub fn candidates(&self) -> impl Iterator<Item = &GuestRecord> {
        self.matches.iter().filter_map(|&i| self.records.get(i))
    }

    #[must_use]
    pub fn candidate(&self, index: usize) -> Option<&GuestRecord> {
        self.matches.get(index).and_then(|&i| self.records.get(i))
    }

    #[must_use]
    pub fn highlighted_candidate(&self) -> Option<&GuestRecord> {
        self.dropdown.highlight().and_then(|h| self.candidate(h))
    }

    /// Whether the candidate list is drawn and arrow keys, Enter and Esc act on it.
    #[must_use]
    pub fn is_list_navigable(&self) -> bool {
        self.dropdown.is_open() && !self.matches.is_empty()
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Editing,
            show_help: false,
            records: Arc::from(Vec::new()),
            table_count: 0,
            input: InputState::default(),
            matches: Vec::new(),
            dropdown: Dropdown::Closed,
            scroll_offset: 0,
            max_visible: DEFAULT_MAX_VISIBLE,
            result: None,
            title: DEFAULT_TITLE.to_string(),
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            palette_type: crate::theme::PaletteType::CatppuccinMocha,
            theme: crate::theme::Theme::default(),
        }
    }
}
