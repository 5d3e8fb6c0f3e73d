//! Batches input lines and uploads each batch.

use std::io::BufRead;
use std::mem;

use tracing::{debug, error, info};

use super::{convert_line, trim_record, BulkError, BulkPayload, BulkTransport, IndexerConfig};

/// Upper bound on the lines reserved up front; larger batches grow as they fill.
const PREALLOCATED_LINES: usize = 1024;

/// What a finished run uploaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexerSummary {
    pub records: u64,
    pub batches: u64,
}

/// Collects lines into batches of the configured size and uploads them.
///
/// The first failure is returned and nothing after it is sent.
#[derive(Debug)]
pub struct BulkIndexer<T: BulkTransport> {
    config: IndexerConfig,
    transport: T,
    pending: Vec<String>,
    lines: u64,
    summary: IndexerSummary,
}

impl<T: BulkTransport> BulkIndexer<T> {
    pub fn new(config: IndexerConfig, transport: T) -> BulkIndexer<T> {
        let pending = Vec::with_capacity(config.batch_size().min(PREALLOCATED_LINES));
        BulkIndexer {
            config,
            transport,
            pending,
            lines: 0,
            summary: IndexerSummary::default(),
        }
    }

    pub fn config(&self) -> &IndexerConfig {
        &self.config
    }

    /// Number of lines waiting for the next batch.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// What has been uploaded so far.
    pub fn summary(&self) -> IndexerSummary {
        self.summary
    }

    /// Queue a line, uploading the batch once it is full.
    pub fn push_line(&mut self, line: &str) -> Result<(), BulkError> {
        self.pending.push(trim_record(line).to_owned());
        self.lines += 1;

        if self.pending.len() >= self.config.batch_size() {
            self.flush()?;
        }
        Ok(())
    }

    /// Upload whatever is left in a partial batch.
    pub fn finish(&mut self) -> Result<IndexerSummary, BulkError> {
        if !self.pending.is_empty() {
            self.flush()?;
        }
        Ok(self.summary)
    }

    /// Upload every line of `reader`, then the final partial batch.
    pub fn run<R: BufRead>(&mut self, mut reader: R) -> Result<IndexerSummary, BulkError> {
        let mut line = String::new();
        while reader.read_line(&mut line)? > 0 {
            self.push_line(&line)?;
            line.clear();
        }

        let summary = self.finish()?;
        info!(
            records = summary.records,
            batches = summary.batches,
            index = self.config.index_name(),
            "upload complete"
        );
        Ok(summary)
    }

    fn flush(&mut self) -> Result<(), BulkError> {
        let batch = mem::take(&mut self.pending);
        let first_line = self.lines - batch.len() as u64 + 1;

        let records = batch
            .iter()
            .zip(first_line..)
            .map(|(line, line_no)| convert_line(line, line_no, &self.config))
            .collect::<Result<Vec<_>, _>>()?;
        let payload = BulkPayload::encode(&records, &self.config)?;
        let count = payload.records() as u64;

        debug!(
            batch = self.summary.batches + 1,
            records = count,
            bytes = payload.as_bytes().len(),
            "posting bulk request"
        );
        let response = self.transport.post_bulk(payload)?;
        let status = response.status();
        if let Err(e) = response.check() {
            error!(batch = self.summary.batches + 1, status, "bulk upload failed");
            return Err(e);
        }

        self.summary.records += count;
        self.summary.batches += 1;
        self.pending = batch;
        self.pending.clear();
        Ok(())
    }

    /// Give back the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }
}
