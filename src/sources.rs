use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregate::{DocumentAggregator, PrefixDateExtractor};
use crate::config::Config;
use crate::models::sentinel_date;
use crate::store::DocumentStore;

/// Health summary of the configured journal folder.
#[derive(Debug, Clone, Serialize)]
pub struct JournalStatus {
    pub path: String,
    pub exists: bool,
    pub documents: usize,
    pub dated: usize,
    pub earliest: Option<NaiveDate>,
    pub latest: Option<NaiveDate>,
}

pub async fn journal_status(store: &dyn DocumentStore, config: &Config) -> Result<JournalStatus> {
    let path = &config.journal.path;
    let documents = store.list_children(path).await?;
    let total = documents.len();

    let aggregator =
        DocumentAggregator::new(Box::new(PrefixDateExtractor::from_config(&config.journal)));
    let dates: Vec<NaiveDate> = aggregator
        .candidates(documents)
        .into_iter()
        .map(|c| c.document_date)
        .filter(|d| *d != sentinel_date())
        .collect();

    Ok(JournalStatus {
        path: path.display().to_string(),
        exists: path.is_dir(),
        documents: total,
        dated: dates.len(),
        earliest: dates.iter().min().copied(),
        latest: dates.iter().max().copied(),
    })
}

pub async fn list_sources(store: &dyn DocumentStore, config: &Config) -> Result<()> {
    let status = journal_status(store, config).await?;

    let state = if status.exists {
        "OK"
    } else {
        "MISSING (folder does not exist)"
    };

    println!("{:<10} {}", "JOURNAL", status.path);
    println!("{:<10} {}", "STATUS", state);
    println!("{:<10} {}", "FILES", status.documents);
    println!("{:<10} {}", "DATED", status.dated);
    if let (Some(first), Some(last)) = (status.earliest, status.latest) {
        println!("{:<10} {} .. {}", "RANGE", first, last);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FsDocumentStore;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_status_counts_dated_entries() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("2023-01-01.md"), "a").unwrap();
        fs::write(tmp.path().join("2023-03-09.md"), "b").unwrap();
        fs::write(tmp.path().join("Ideas.md"), "c").unwrap();

        let cfg = Config::minimal(tmp.path());
        let store = FsDocumentStore::new(&cfg.journal.include_globs).unwrap();
        let status = journal_status(&store, &cfg).await.unwrap();

        assert!(status.exists);
        assert_eq!(status.documents, 3);
        assert_eq!(status.dated, 2);
        assert_eq!(status.earliest, NaiveDate::from_ymd_opt(2023, 1, 1));
        assert_eq!(status.latest, NaiveDate::from_ymd_opt(2023, 3, 9));
    }

    #[tokio::test]
    async fn test_status_missing_folder() {
        let tmp = TempDir::new().unwrap();
        let cfg = Config::minimal(tmp.path().join("nope"));
        let store = FsDocumentStore::new(&cfg.journal.include_globs).unwrap();
        let status = journal_status(&store, &cfg).await.unwrap();

        assert!(!status.exists);
        assert_eq!(status.documents, 0);
        assert!(status.earliest.is_none());
    }
}
