//! ASCII bar chart of grouped rank counts.

use std::cmp;
use std::fmt;

use crate::tally::GroupCount;

/// Number of dashes drawn for the largest group.
pub const BAR_WIDTH: u64 = 100;

/// Column the bars start in; the group label is padded up to it.
const LABEL_WIDTH: usize = 15;

/// A snapshot of grouped counts, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankReport {
    groups: Vec<GroupCount>,
    max: u64,
}

impl RankReport {
    pub fn new(groups: Vec<GroupCount>) -> RankReport {
        let max = groups.iter().map(|g| g.count()).fold(0, cmp::max);
        RankReport { groups, max }
    }

    /// Get the grouped counts, in table order.
    pub fn groups(&self) -> &[GroupCount] {
        &self.groups
    }

    /// Get the largest grouped count.
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Get the sum of all grouped counts.
    pub fn total(&self) -> u64 {
        self.groups.iter().map(|g| g.count()).sum()
    }

    /// Get the number of dashes drawn for `count`.
    ///
    /// Scales relative to the maximum; with a zero maximum all bars are empty.
    pub fn bar_width(&self, count: u64) -> u64 {
        if self.max == 0 {
            return 0;
        }
        BAR_WIDTH * count / self.max
    }
}

/// Format `n` with a comma between every group of three digits.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl fmt::Display for RankReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut label = String::with_capacity(LABEL_WIDTH);

        for group in &self.groups {
            label.clear();
            label.push_str(group.name());
            label.push(':');

            write!(f, "{:width$} ", label, width = LABEL_WIDTH)?;
            for _ in 0..self.bar_width(group.count()) {
                write!(f, "-")?;
            }
            writeln!(f, " ({})", thousands(group.count()))?;
        }

        Ok(())
    }
}
