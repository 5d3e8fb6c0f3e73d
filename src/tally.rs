//! Cumulative occurrence counts of rank labels.

use std::collections::HashMap;

use crate::ranks::RankGroup;

/// The summed count of one rank group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCount {
    name: &'static str,
    count: u64,
}

impl GroupCount {
    pub fn new(name: &'static str, count: u64) -> GroupCount {
        GroupCount { name, count }
    }

    /// The display name of the group.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The summed count of all member labels.
    pub fn count(&self) -> u64 {
        self.count
    }
}

/// A tally of rank labels.
///
/// Counts only ever grow, until the tally is explicitly cleared.
#[derive(Debug, Default, Clone)]
pub struct Tally {
    counts: HashMap<String, u64>,
    total: u64,
}

impl Tally {
    /// Create an empty tally.
    pub fn new() -> Tally {
        Tally::default()
    }

    /// Record one line, keyed by its trimmed content.
    pub fn record(&mut self, line: &str) {
        let label = line.trim();
        match self.counts.get_mut(label) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(label.to_owned(), 1);
            }
        }
        self.total += 1;
    }

    /// Get the number of times `label` was recorded.
    pub fn count(&self, label: &str) -> u64 {
        self.counts.get(label).cloned().unwrap_or(0)
    }

    /// Get the number of distinct labels recorded.
    pub fn labels(&self) -> usize {
        self.counts.len()
    }

    /// Get the total number of lines recorded.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Check if this tally recorded anything.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Forget all recorded labels.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.total = 0;
    }

    /// Sum the counts of each group's members, in the order of `groups`.
    pub fn group_counts(&self, groups: &[RankGroup]) -> Vec<GroupCount> {
        groups
            .iter()
            .map(|g| {
                let count = g.members().iter().map(|m| self.count(m)).sum();
                GroupCount::new(g.name(), count)
            })
            .collect()
    }
}
