//! Hierarchical account/category paths
//!
//! QIF names categories and accounts with colon-separated hierarchies such as
//! `Expenses:Food:Groceries`. A name wrapped in brackets (`[Savings]`) refers to
//! a transfer account; the brackets carry no meaning for aggregation and are
//! removed before the name is split.

use std::fmt;

/// Segment separator inside a hierarchical name
pub const SEGMENT_SEPARATOR: char = ':';

/// An ordered sequence of path segments
///
/// Immutable once derived. Its canonical form (segments joined by `:`) is the
/// key used in the totals map.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountPath {
    segments: Vec<String>,
}

impl AccountPath {
    /// Derive a path from the raw payload of an `L` or `S` line
    ///
    /// A leading `[` and its matching trailing `]` are removed first. An empty
    /// value yields a single empty segment, the uncategorized path.
    pub fn parse(raw: &str) -> Self {
        let name = strip_transfer_brackets(raw);
        AccountPath {
            segments: name.split(SEGMENT_SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// The path used for amounts recorded before any `L`/`S` line
    pub fn uncategorized() -> Self {
        AccountPath {
            segments: vec![String::new()],
        }
    }

    /// Number of segments (always at least 1)
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Canonical key form, segments rejoined with `:`
    pub fn canonical(&self) -> String {
        self.segments.join(":")
    }
}

impl fmt::Display for AccountPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// Count the segments of a canonical key without building a path
pub fn key_depth(key: &str) -> usize {
    key.split(SEGMENT_SEPARATOR).count()
}

fn strip_transfer_brackets(raw: &str) -> &str {
    match raw.strip_prefix('[') {
        Some(inner) => inner.strip_suffix(']').unwrap_or(inner),
        None => raw,
    }
}
