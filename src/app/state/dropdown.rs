/// Open/closed state of the candidate list, with the highlighted row while open.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Dropdown {
    #[default]
    Closed,
    Open { highlight: usize },
}

impl Dropdown {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Dropdown::Open { .. })
    }

    #[must_use]
    pub fn highlight(&self) -> Option<usize> {
        match self {
            Dropdown::Open { highlight } => Some(*highlight),
            Dropdown::Closed => None,
        }
    }

    /// Open without disturbing an existing highlight.
    pub fn reopen(&mut self) {
        if !self.is_open() {
            *self = Dropdown::Open { highlight: 0 };
        }
    }

    pub fn close(&mut self) {
        *self = Dropdown::Closed;
    }

    pub fn next(&mut self, len: usize) {
        if let Dropdown::Open { highlight } = self {
            if len > 0 {
                *highlight = (*highlight + 1) % len;
            }
        }
    }

    pub fn prev(&mut self, len: usize) {
        if let Dropdown::Open { highlight } = self {
            if len > 0 {
                *highlight = (*highlight % len + len - 1) % len;
            }
        }
    }

    pub fn hover(&mut self, index: usize, len: usize) {
        if let Dropdown::Open { highlight } = self {
            if index < len {
                *highlight = index;
            }
        }
    }
}

/// First visible row so that `highlight` stays inside a window of `visible` rows.
#[must_use]
pub fn scroll_to_highlight(offset: usize, highlight: usize, visible: usize) -> usize {
    if visible == 0 {
        return highlight;
    }
    if highlight < offset {
        highlight
    } else if highlight >= offset + visible {
        highlight + 1 - visible
    } else {
        offset
    }
}
