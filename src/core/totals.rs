//! Totals per hierarchical path
//!
//! This module provides the `Totals` component that maps each canonical
//! account/category path to its accumulated amount, and tracks the widest path
//! seen so the CSV output can reserve enough name columns.
//!
//! # Width tracking
//!
//! The width is raised when a path is declared by an `L`/`S` line, before any
//! amount is recorded against it, and never lowered. Recording an amount also
//! checks the width so that no key can ever be wider than it.

use crate::types::account_path::{key_depth, AccountPath};
use std::collections::HashMap;

/// Accumulated totals keyed by canonical path
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    /// Map of canonical path to accumulated amount
    amounts: HashMap<String, f64>,
    /// Maximum segment count of any declared or recorded path
    max_width: usize,
}

impl Totals {
    /// Create an empty map with a width of zero
    pub fn new() -> Self {
        Totals {
            amounts: HashMap::new(),
            max_width: 0,
        }
    }

    /// Note a path discovered in the input, widening if it is deeper than any so far
    pub fn declare(&mut self, path: &AccountPath) {
        if path.depth() > self.max_width {
            self.max_width = path.depth();
        }
    }

    /// Add an amount to a path, creating the entry at zero first if absent
    pub fn add(&mut self, path: &AccountPath, amount: f64) {
        self.declare(path);
        *self.amounts.entry(path.canonical()).or_insert(0.0) += amount;
    }

    /// Accumulated total for a canonical key
    pub fn get(&self, key: &str) -> Option<f64> {
        self.amounts.get(key).copied()
    }

    /// Maximum number of segments of any path seen
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Number of distinct paths with a total
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Iterate over all entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.amounts.iter().map(|(key, amount)| (key.as_str(), *amount))
    }

    /// All entries sorted by canonical key
    ///
    /// This provides deterministic output for CSV generation.
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Segment count of the widest key currently stored
    pub fn widest_key(&self) -> usize {
        self.amounts.keys().map(|key| key_depth(key)).max().unwrap_or(0)
    }
}
