//! Bulk uploads of tab-separated records to an OpenSearch index.
//!
//! Lines are collected into batches; every batch is converted into
//! action/document pairs, encoded as newline-delimited JSON and posted to
//! the `_bulk` endpoint. Any failure ends the upload.

mod config;
mod convert;
mod error;
mod indexer;
mod payload;
mod transport;

pub use self::config::{IndexerArgs, IndexerConfig, DEFAULT_BATCH_SIZE, DEFAULT_URL};
pub use self::convert::{convert_line, trim_record, Record};
pub use self::error::BulkError;
pub use self::indexer::{BulkIndexer, IndexerSummary};
pub use self::payload::{BulkPayload, CONTENT_TYPE};
pub use self::transport::{BulkResponse, BulkTransport, HttpTransport};
