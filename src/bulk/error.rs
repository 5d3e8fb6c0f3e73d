use std::io::{self, Write};

use thiserror::Error;

/// Everything that can stop a bulk upload.
#[derive(Debug, Error)]
pub enum BulkError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("line {line}: expected {expected} tab-separated columns, found {found}")]
    MissingColumns {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("failed to encode bulk payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("bulk request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("bulk upload rejected with status {status}")]
    Rejected { status: u16, body: String },
    #[error("bulk response with status {status} is not valid JSON")]
    InvalidResponse { status: u16, body: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl BulkError {
    /// The raw response body, if the search service answered.
    pub fn response_body(&self) -> Option<&str> {
        match *self {
            BulkError::Rejected { ref body, .. } | BulkError::InvalidResponse { ref body, .. } => {
                Some(body.as_str())
            }
            _ => None,
        }
    }

    /// Describe this failure for a human on `out`.
    ///
    /// A rejected batch is reported with the service's raw response body.
    pub fn write_diagnostic<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.response_body() {
            Some(body) => writeln!(out, "Error uploading batch:\n{}", body),
            None => writeln!(out, "error: {}", self),
        }
    }
}
