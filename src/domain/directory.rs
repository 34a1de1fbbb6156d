use crate::domain::models::{GuestRecord, TableEntry};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

/// Where the guest directory comes from (a file, the bundled sample, ...).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectorySource: Send + Sync {
    async fn load(&self) -> Result<Vec<TableEntry>>;

    // Human-readable origin, used in logs and error messages
    fn describe(&self) -> String;
}

/// The loaded tables plus their flattened guest records, computed once.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestDirectory {
    tables: Vec<TableEntry>,
    records: Arc<[GuestRecord]>,
}

impl GuestDirectory {
    #[must_use]
    pub fn new(tables: Vec<TableEntry>) -> Self {
        let records: Arc<[GuestRecord]> = flatten(&tables).into();
        let directory = Self { tables, records };

        let duplicates = directory.duplicate_keys();
        if !duplicates.is_empty() {
            tracing::warn!(
                keys = ?duplicates,
                "same guest listed twice at one table; the first entry wins exact matches"
            );
        }

        directory
    }

    pub async fn load_from(source: &dyn DirectorySource) -> Result<Self> {
        let tables = source.load().await?;
        let directory = Self::new(tables);
        tracing::info!(
            source = %source.describe(),
            tables = directory.table_count(),
            guests = directory.guest_count(),
            "guest directory loaded"
        );
        Ok(directory)
    }

    #[must_use]
    pub fn tables(&self) -> &[TableEntry] {
        &self.tables
    }

    #[must_use]
    pub fn records(&self) -> &[GuestRecord] {
        &self.records
    }

    #[must_use]
    pub fn shared_records(&self) -> Arc<[GuestRecord]> {
        Arc::clone(&self.records)
    }

    #[must_use]
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn guest_count(&self) -> usize {
        self.records.len()
    }

    /// Record keys that appear more than once, in first-seen order.
    #[must_use]
    pub fn duplicate_keys(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for record in self.records.iter() {
            let key = record.key.as_str();
            if !seen.insert(key) && reported.insert(key) {
                duplicates.push(key);
            }
        }
        duplicates
    }
}

/// One record per guest, tables in order and guests in order within each table.
#[must_use]
pub fn flatten(tables: &[TableEntry]) -> Vec<GuestRecord> {
    tables
        .iter()
        .flat_map(|table| {
            table.guests.iter().map(move |guest| {
                GuestRecord::new(&guest.0, table.table_number.clone(), &table.text_number)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::TableNumber;

    fn sample_tables() -> Vec<TableEntry> {
        vec![
            TableEntry::new(1, "555-0001", &["Mary Jones", "Peter Jones"]),
            TableEntry::new(2, "555-0002", &["Mary Smith"]),
            TableEntry::new("Head", "555-0000", &[]),
        ]
    }

    #[test]
    fn test_flatten_preserves_order() {
        let records = flatten(&sample_tables());
        let keys: Vec<_> = records.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["Mary Jones-1", "Peter Jones-1", "Mary Smith-2"]);
        assert_eq!(records[2].table_number, TableNumber::from(2));
        assert_eq!(records[2].text_number, "555-0002");
    }

    #[test]
    fn test_directory_keeps_source_tables() {
        let tables = sample_tables();
        let directory = GuestDirectory::new(tables.clone());
        assert_eq!(directory.tables(), tables.as_slice());
        assert_eq!(directory.table_count(), 3);
        assert_eq!(directory.guest_count(), 3);
        assert!(directory.duplicate_keys().is_empty());
    }

    #[test]
    fn test_shared_records_point_at_same_allocation() {
        let directory = GuestDirectory::new(sample_tables());
        let a = directory.shared_records();
        let b = directory.shared_records();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_duplicate_keys_reported_once() {
        let directory = GuestDirectory::new(vec![
            TableEntry::new(1, "a", &["Sam Lee", "Sam Lee", "Sam Lee"]),
            TableEntry::new(2, "b", &["Sam Lee"]),
        ]);
        assert_eq!(directory.duplicate_keys(), vec!["Sam Lee-1"]);
    }

    #[tokio::test]
    async fn test_load_from_source() {
        let mut source = MockDirectorySource::new();
        source.expect_load().returning(|| Ok(sample_tables()));
        source.expect_describe().returning(|| "mock".to_string());

        let directory = GuestDirectory::load_from(&source).await.unwrap();
        assert_eq!(directory.guest_count(), 3);
        assert_eq!(directory.records()[0].full_name, "Mary Jones");
    }

    #[tokio::test]
    async fn test_load_from_source_propagates_errors() {
        let mut source = MockDirectorySource::new();
        source
            .expect_load()
            .returning(|| Err(anyhow::anyhow!("disk on fire")));
        source.expect_describe().returning(|| "mock".to_string());

        let err = GuestDirectory::load_from(&source).await.unwrap_err();
        assert!(err.to_string().contains("disk on fire"));
    }
}
