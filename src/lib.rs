//! # journal-context
//!
//! Turns a natural-language date range into a bounded block of journal text
//! that can be handed to a local chat model as conversation context.
//!
//! ## Architecture
//!
//! ```text
//! "2 months ago to today"
//!          │
//!          ▼
//! ┌──────────────────┐   ┌──────────────────┐   ┌──────────────┐
//! │ DateRangeResolver│──▶│DocumentAggregator│──▶│ ChatSession  │
//! │  (first match)   │   │ filter+read+cap  │   │ context slot │
//! └──────────────────┘   └────────┬─────────┘   └──────────────┘
//!                                 │
//!                          ┌──────┴──────┐
//!                          │DocumentStore│
//!                          │ (fs / other)│
//!                          └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! jctx --journal ~/vault/Journal resolve "last month"
//! jctx --journal ~/vault/Journal context "1 jan 2023 to 31 jan 2023" --print
//! jctx --journal ~/vault/Journal prompt --range "last week" "How did I sleep?"
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Intervals, documents, results |
//! | [`date_range`] | Date-range resolution policy |
//! | [`natural_date`] | Built-in natural-language date parser |
//! | [`store`] | Document store trait and filesystem store |
//! | [`aggregate`] | Filtering, concurrent reads, concatenation |
//! | [`journal`] | Caller-facing entry point |
//! | [`session`] | In-memory chat session and commands |
//! | [`sources`] | Journal folder health |

pub mod aggregate;
pub mod config;
pub mod date_range;
pub mod error;
pub mod journal;
pub mod models;
pub mod natural_date;
pub mod session;
pub mod sources;
pub mod store;
