use crate::domain::normalize::normalize;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Table identifier as written in the guest directory. Displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TableNumber(pub String);

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TableNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<i32> for TableNumber {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for TableNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Data files use bare integers for numbered tables and strings for named ones ("Head").
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuestName(pub String);

impl From<&str> for GuestName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for GuestName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bare(String),
            Detailed { name: String },
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Bare(name) | Raw::Detailed { name } => Self(name),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableEntry {
    #[serde(alias = "tableNumber")]
    pub table_number: TableNumber,
    #[serde(alias = "textNumber")]
    pub text_number: String,
    #[serde(default)]
    pub guests: Vec<GuestName>,
}

impl TableEntry {
    #[must_use]
    pub fn new(table_number: impl Into<TableNumber>, text_number: &str, guests: &[&str]) -> Self {
        Self {
            table_number: table_number.into(),
            text_number: text_number.to_string(),
            guests: guests.iter().map(|g| GuestName::from(*g)).collect(),
        }
    }
}

/// One guest paired with their table, as produced by flattening the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestRecord {
    pub full_name: String,
    pub table_number: TableNumber,
    pub text_number: String,
    pub key: String,
    normalized_name: String,
}

impl GuestRecord {
    #[must_use]
    pub fn new(full_name: &str, table_number: TableNumber, text_number: &str) -> Self {
        Self {
            key: format!("{full_name}-{table_number}"),
            normalized_name: normalize(full_name),
            full_name: full_name.to_string(),
            table_number,
            text_number: text_number.to_string(),
        }
    }

    #[must_use]
    pub fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}
