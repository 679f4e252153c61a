//! Aggregation of entries into label totals
//!
//! Sums are exact decimals, so the result does not depend on entry order.

use std::collections::HashMap;

use crate::models::{Entry, Money};

/// Which field of an entry labels its bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Category,
    Subcategory,
}

impl GroupBy {
    fn key<'a>(&self, entry: &'a Entry) -> &'a str {
        match self {
            GroupBy::Category => &entry.category,
            GroupBy::Subcategory => &entry.subcategory,
        }
    }

    /// Lowercase name for report titles
    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::Category => "category",
            GroupBy::Subcategory => "subcategory",
        }
    }
}

/// Label to running total, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bucket {
    rows: Vec<(String, Money)>,
    index: HashMap<String, usize>,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount to a label's total, creating the label if needed
    pub fn add(&mut self, label: &str, amount: Money) {
        match self.index.get(label) {
            Some(&i) => {
                if let Some((_, total)) = self.rows.get_mut(i) {
                    *total += amount;
                }
            }
            None => {
                self.index.insert(label.to_string(), self.rows.len());
                self.rows.push((label.to_string(), amount));
            }
        }
    }

    /// Total for a label, if it has one
    pub fn get(&self, label: &str) -> Option<Money> {
        self.index
            .get(label)
            .and_then(|&i| self.rows.get(i))
            .map(|(_, total)| *total)
    }

    /// Labels and totals in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.rows.iter().map(|(label, total)| (label.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Labels sorted by magnitude, largest first; equal magnitudes keep
    /// insertion order
    pub fn sorted_by_magnitude(&self) -> Vec<(&str, Money)> {
        let mut rows: Vec<_> = self.iter().collect();
        rows.sort_by(|a, b| b.1.abs().cmp(&a.1.abs()));
        rows
    }

    /// Largest absolute total, zero when empty
    pub fn max_magnitude(&self) -> Money {
        self.rows
            .iter()
            .map(|(_, total)| total.abs())
            .max()
            .unwrap_or_default()
    }
}

/// Sum entries into a bucket keyed by category or subcategory
///
/// With a `category` filter only that category's entries contribute
/// (drill-down); the caller usually pairs it with `GroupBy::Subcategory`.
pub fn aggregate<'a, I>(entries: I, group_by: GroupBy, category: Option<&str>) -> Bucket
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut bucket = Bucket::new();
    for entry in entries {
        if category.is_some_and(|c| c != entry.category) {
            continue;
        }
        bucket.add(group_by.key(entry), entry.amount);
    }
    bucket
}

/// Net balance: income minus expenses
pub fn total<'a, I>(entries: I) -> Money
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries.into_iter().map(|e| e.amount).sum()
}
