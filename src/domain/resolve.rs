use crate::domain::matcher::find_matches;
use crate::domain::models::GuestRecord;
use crate::domain::normalize::normalize;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter your name.";
pub const AMBIGUOUS_MESSAGE: &str = "Multiple matches found — please select your full name.";
pub const NOT_FOUND_MESSAGE: &str = "Guest not found";

/// What a submitted name resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'r> {
    EmptyInput,
    ExactMatch(&'r GuestRecord),
    UniquePartialMatch(&'r GuestRecord),
    Ambiguous(Vec<&'r GuestRecord>),
    NotFound,
}

impl Outcome<'_> {
    /// The record this outcome seats the guest at, if any.
    #[must_use]
    pub fn record(&self) -> Option<&GuestRecord> {
        match self {
            Outcome::ExactMatch(r) | Outcome::UniquePartialMatch(r) => Some(r),
            _ => None,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Outcome::EmptyInput => EMPTY_INPUT_MESSAGE.to_string(),
            Outcome::ExactMatch(r) | Outcome::UniquePartialMatch(r) => table_result(r),
            Outcome::Ambiguous(_) => AMBIGUOUS_MESSAGE.to_string(),
            Outcome::NotFound => NOT_FOUND_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::EmptyInput => "empty",
            Outcome::ExactMatch(_) => "exact",
            Outcome::UniquePartialMatch(_) => "unique-partial",
            Outcome::Ambiguous(_) => "ambiguous",
            Outcome::NotFound => "not-found",
        }
    }
}

#[must_use]
pub fn table_result(record: &GuestRecord) -> String {
    format!("TABLE {} {}", record.table_number, record.text_number)
}

pub fn resolve<'r>(input: &str, records: &'r [GuestRecord]) -> Outcome<'r> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Outcome::EmptyInput;
    }

    // Exact beats any number of partials. With duplicate keys the first in
    // flattened order wins; GuestDirectory warns about those at load time.
    let wanted = normalize(trimmed);
    if let Some(exact) = records.iter().find(|r| r.normalized_name() == wanted) {
        return Outcome::ExactMatch(exact);
    }

    let mut candidates = find_matches(input, records);
    match candidates.len() {
        0 => Outcome::NotFound,
        1 => Outcome::UniquePartialMatch(candidates.remove(0)),
        _ => Outcome::Ambiguous(candidates),
    }
}
