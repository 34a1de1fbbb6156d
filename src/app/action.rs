#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Resize(u16, u16),
    Quit,
    ToggleHelp,

    // --- Input ---
    TextAreaInput(crossterm::event::KeyEvent), // Edit the name field
    Paste(String),                             // Bracketed paste into the name field
    FocusInput,                                // Click on the field, or Enter/i while released
    BlurInput,                                 // Release focus (Esc with no open list)
    Submit,                                    // Resolve the typed name

    // --- Candidate list ---
    HighlightNext,         // Down
    HighlightPrev,         // Up
    ConfirmHighlight,      // Enter on the highlighted candidate
    HoverCandidate(usize), // Pointer over a row
    PickCandidate(usize),  // Click on a row
    CloseCandidates,       // Esc
    ClickOutside,          // Pointer down outside the form
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResult {
    Handled,
    NotHandled,
}
