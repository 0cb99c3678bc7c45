//! Document stores: where journal entries come from.
//!
//! The aggregator never touches the filesystem directly. It lists and reads
//! through a [`DocumentStore`], so tests and alternative backends can supply
//! their own documents.

use async_trait::async_trait;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::StoreError;
use crate::models::Document;

/// Source of journal documents.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use journal_context::error::StoreError;
/// use journal_context::models::Document;
/// use journal_context::store::DocumentStore;
/// use std::path::Path;
///
/// pub struct EmptyStore;
///
/// #[async_trait]
/// impl DocumentStore for EmptyStore {
///     async fn list_children(&self, _folder: &Path) -> Result<Vec<Document>, StoreError> {
///         Ok(vec![])
///     }
///
///     async fn read(&self, document: &Document) -> Result<String, StoreError> {
///         Err(StoreError::Read {
///             name: document.name.clone(),
///             source: std::io::ErrorKind::NotFound.into(),
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Lists the documents directly inside `folder`.
    ///
    /// A folder that does not exist yields an empty list. Any other failure
    /// to enumerate is an error.
    async fn list_children(&self, folder: &Path) -> Result<Vec<Document>, StoreError>;

    /// Reads the full text of a document.
    async fn read(&self, document: &Document) -> Result<String, StoreError>;
}

/// Filesystem-backed store. Lists regular files in a folder (non-recursive)
/// whose names match the include globs.
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    include: GlobSet,
}

impl FsDocumentStore {
    pub fn new(include_globs: &[String]) -> Result<Self, StoreError> {
        Ok(Self {
            include: build_globset(include_globs)?,
        })
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    async fn list_children(&self, folder: &Path) -> Result<Vec<Document>, StoreError> {
        let is_dir = match tokio::fs::metadata(folder).await {
            Ok(meta) => meta.is_dir(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(source) => {
                return Err(StoreError::List {
                    path: folder.to_path_buf(),
                    source,
                })
            }
        };
        if !is_dir {
            tracing::warn!(folder = %folder.display(), "journal folder not found; treating as empty");
            return Ok(Vec::new());
        }

        let target: PathBuf = folder.to_path_buf();
        let include = self.include.clone();
        let listed = tokio::task::spawn_blocking(move || scan_folder(&target, &include)).await;

        match listed {
            Ok(result) => result,
            Err(e) => Err(StoreError::List {
                path: folder.to_path_buf(),
                source: std::io::Error::other(e),
            }),
        }
    }

    async fn read(&self, document: &Document) -> Result<String, StoreError> {
        tokio::fs::read_to_string(&document.path)
            .await
            .map_err(|source| StoreError::Read {
                name: document.name.clone(),
                source,
            })
    }
}

fn scan_folder(folder: &Path, include: &GlobSet) -> Result<Vec<Document>, StoreError> {
    let mut documents = Vec::new();

    let walker = WalkDir::new(folder).min_depth(1).max_depth(1);
    for entry in walker {
        let entry = entry.map_err(|e| StoreError::List {
            path: folder.to_path_buf(),
            source: e.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if !include.is_match(&name) {
            continue;
        }

        documents.push(Document::new(name, entry.path()));
    }

    // Sort for deterministic ordering
    documents.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(documents)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, StoreError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| StoreError::Glob {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| StoreError::Glob {
        pattern: patterns.join(","),
        source,
    })
}
