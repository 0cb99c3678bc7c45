//! Caller-facing entry point: free text in, journal context out.

use anyhow::Result;

use crate::aggregate::{DocumentAggregator, PrefixDateExtractor};
use crate::config::Config;
use crate::date_range::DateRangeResolver;
use crate::models::JournalContext;
use crate::store::DocumentStore;

/// Wires a resolver and an aggregator together for one journal folder.
pub struct JournalContextBuilder {
    resolver: DateRangeResolver,
    aggregator: DocumentAggregator,
}

impl JournalContextBuilder {
    pub fn new(resolver: DateRangeResolver, aggregator: DocumentAggregator) -> Self {
        Self {
            resolver,
            aggregator,
        }
    }

    /// Natural-language resolver anchored at today, extractor from config.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            DateRangeResolver::default(),
            DocumentAggregator::new(Box::new(PrefixDateExtractor::from_config(&config.journal))),
        )
    }

    /// Resolves `input`, lists the journal folder, and aggregates the
    /// matching entries.
    ///
    /// Returns `Ok(None)` when `input` names no date. Fails only when the
    /// journal folder exists but cannot be listed; unreadable entries are
    /// skipped.
    pub async fn build(
        &self,
        store: &dyn DocumentStore,
        config: &Config,
        input: &str,
    ) -> Result<Option<JournalContext>> {
        let Some(interval) = self.resolver.resolve(input) else {
            return Ok(None);
        };

        let documents = store.list_children(&config.journal.path).await?;
        let result = self.aggregator.aggregate(store, documents, &interval).await;

        tracing::info!(
            entries = result.included.len(),
            chars = result.combined_text.chars().count(),
            start = %result.resolved_start,
            end = %result.resolved_end,
            "built journal context"
        );

        Ok(Some(result.into()))
    }
}

/// One-shot form of [`JournalContextBuilder::build`] with default parsing.
pub async fn get_journal_context(
    store: &dyn DocumentStore,
    config: &Config,
    input: &str,
) -> Result<Option<JournalContext>> {
    JournalContextBuilder::from_config(config)
        .build(store, config, input)
        .await
}
