//! # Taxonomy data tools
//!
//! Two small line-oriented tools for taxonomy data:
//!
//! * a [`Reporter`] that tallies rank labels and keeps rewriting a bar chart
//!   of the counts, grouped into the [`RANK_GROUPS`],
//! * a [`bulk`] uploader that turns tab-separated records into OpenSearch
//!   bulk requests.
//!
//! ## Example
//!
//! ```rust
//! # use taxa_tools::{RankReport, Tally, RANK_GROUPS};
//! let mut tally = Tally::new();
//!
//! for label in &["species", "strain", "subgenus", "clade"] {
//!     tally.record(label);
//! }
//!
//! let report = RankReport::new(tally.group_counts(RANK_GROUPS));
//! assert_eq!(4, tally.total());
//! assert_eq!(3, report.total());
//!
//! print!("{}", report);
//! ```

#[macro_use]
extern crate serde_derive;

pub mod bulk;
pub mod logging;
pub mod ranks;
pub mod report;
pub mod reporter;
pub mod tally;

pub use ranks::{find_group, RankGroup, RANK_GROUPS};
pub use report::{thousands, RankReport, BAR_WIDTH};
pub use reporter::{FileSink, ReportSink, Reporter, ReporterSummary, FLUSH_INTERVAL};
pub use tally::{GroupCount, Tally};
