//! Relabel Search - incremental query compiler for the rename dialog.
//!
//! This crate turns free-text operator input into a matcher usable against
//! each list item's searchable text. Queries are rebuilt on every input
//! event, so compilation is infallible and cheap; a debounce scheduler
//! coalesces keystrokes so only the most recent input within the quiescence
//! window is ever evaluated.
//!
//! # Features
//!
//! - Multi-term queries with AND semantics, independent of term order
//! - `*` (any run) and `?` (any single character) wildcards per term
//! - `'...'` / `"..."` quoting for terms with embedded whitespace
//! - Case-insensitive matching against the full searchable text
//! - Trailing-edge debounce of raw input with cancellation
//!
//! # Example
//!
//! ```
//! use relabel_search::SearchQuery;
//!
//! let query = SearchQuery::compile("sel '7SJ85'");
//! assert!(query.is_match("SIPROTEC 7SJ85 SEL_Relay_1"));
//! assert!(!query.is_match("SIPROTEC 7SL87 ABB_Relay_2"));
//! ```

mod debounce;
mod query;

pub use debounce::{DEFAULT_QUIESCENCE, SearchDebouncer};
pub use query::SearchQuery;
