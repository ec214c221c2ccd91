//! Search query compilation and matching.

use regex::{Regex, RegexBuilder};
use tracing::debug;

/// Regex metacharacters that must be matched literally in a search term.
/// `*` and `?` are absent on purpose; they carry wildcard meaning.
const ESCAPED_METACHARACTERS: &[char] = &[
    '.', '+', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// A compiled search query.
///
/// A query is an ordered sequence of terms combined with AND semantics:
/// a candidate matches when every term occurs somewhere in it, in any
/// position and any order, case-insensitively. The empty query matches
/// every candidate.
///
/// Queries are immutable once built and are intended to be rebuilt from
/// raw input on every (debounced) input event.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    terms: Vec<Regex>,
}

impl SearchQuery {
    /// Compiles raw operator input into a query.
    ///
    /// Compilation never fails: empty input yields the match-all query,
    /// malformed quoting degrades to a best-effort split, and a term that
    /// cannot be compiled is skipped with a diagnostic.
    pub fn compile(raw: &str) -> Self {
        let terms = tokenize(raw)
            .iter()
            .filter_map(|term| {
                let compiled = term_regex(term);
                if compiled.is_none() {
                    debug!(%term, "skipping uncompilable search term");
                }
                compiled
            })
            .collect();
        Self { terms }
    }

    /// Tests a candidate string against the query.
    ///
    /// The candidate is expected to be an item's full searchable text, so a
    /// term may match descriptive metadata, the proposed name, or the
    /// original name interchangeably.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.terms.iter().all(|term| term.is_match(candidate))
    }

    /// True when the query places no constraint on candidates.
    pub fn is_match_all(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of compiled terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

/// Splits raw input into term texts.
///
/// A term is either a maximal run of non-whitespace, non-quote characters,
/// or a quoted run delimited by matching `'...'` / `"..."`. Quote characters
/// always act as term boundaries and are stripped, never matched literally.
/// An unterminated quote swallows the rest of the input as one term.
fn tokenize(raw: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' => {
                if !current.is_empty() {
                    terms.push(std::mem::take(&mut current));
                }
                let mut quoted = String::new();
                for q in chars.by_ref() {
                    if q == c {
                        break;
                    }
                    quoted.push(q);
                }
                if !quoted.is_empty() {
                    terms.push(quoted);
                }
            }
            c if c.is_whitespace() => {
                if !current.is_empty() {
                    terms.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        terms.push(current);
    }
    terms
}

/// Compiles one term into an unanchored, case-insensitive regex.
///
/// `*` maps to "zero or more characters", `?` to "exactly one character";
/// everything else is literal. Escaping covers the full metacharacter set,
/// so the build is expected to succeed for any input.
fn term_regex(term: &str) -> Option<Regex> {
    let mut pattern = String::with_capacity(term.len() * 2);
    for c in term.chars() {
        match c {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            c if ESCAPED_METACHARACTERS.contains(&c) => {
                pattern.push('\\');
                pattern.push(c);
            }
            c => pattern.push(c),
        }
    }

    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .ok()
}
