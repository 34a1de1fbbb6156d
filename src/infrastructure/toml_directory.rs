use crate::domain::directory::DirectorySource;
use crate::domain::models::TableEntry;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

const BUNDLED_GUESTS: &str = include_str!("../../data/guests.toml");

#[derive(Debug, Default, Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    tables: Vec<TableEntry>,
}

pub fn parse_directory(text: &str) -> Result<Vec<TableEntry>> {
    let file: DirectoryFile = toml::from_str(text)?;
    Ok(file.tables)
}

/// Guest directory read from a TOML file on disk.
pub struct TomlDirectory {
    path: PathBuf,
}

impl TomlDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DirectorySource for TomlDirectory {
    async fn load(&self) -> Result<Vec<TableEntry>> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading guest directory {}", self.path.display()))?;
        parse_directory(&text)
            .with_context(|| format!("parsing guest directory {}", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The sample seating chart compiled into the binary.
#[derive(Debug, Default)]
pub struct EmbeddedDirectory;

#[async_trait]
impl DirectorySource for EmbeddedDirectory {
    async fn load(&self) -> Result<Vec<TableEntry>> {
        parse_directory(BUNDLED_GUESTS).context("parsing bundled guest directory")
    }

    fn describe(&self) -> String {
        "bundled sample".to_string()
    }
}
