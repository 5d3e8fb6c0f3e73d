//! Command line and validated settings of the bulk indexer.

use clap::Parser;

use super::BulkError;

pub const DEFAULT_BATCH_SIZE: usize = 1000;
pub const DEFAULT_URL: &str = "http://localhost:9200";

/// Upload tab-separated records from stdin to an OpenSearch index.
#[derive(Debug, Clone, Parser)]
#[command(name = "bulk-index", version, about)]
pub struct IndexerArgs {
    /// The index name to upload data to
    #[arg(long)]
    pub index_name: String,

    /// Comma-delimited list of field names for the TSV columns, in column order
    #[arg(long)]
    pub fields: String,

    /// The field to use as the document ID
    #[arg(long)]
    pub id_field: String,

    /// Number of records in each bulk request
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Base URL of the OpenSearch instance
    #[arg(long, default_value = DEFAULT_URL)]
    pub opensearch_url: String,
}

/// Validated indexer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerConfig {
    index_name: String,
    fields: Vec<String>,
    id_index: usize,
    batch_size: usize,
    base_url: String,
}

impl IndexerConfig {
    pub fn new<S: Into<String>>(
        index_name: S,
        fields: Vec<String>,
        id_field: &str,
        batch_size: usize,
        base_url: &str,
    ) -> Result<IndexerConfig, BulkError> {
        let index_name = index_name.into();
        if index_name.is_empty() {
            return Err(BulkError::Config("index name must not be empty".into()));
        }
        if fields.iter().any(|f| f.is_empty()) {
            return Err(BulkError::Config("field names must not be empty".into()));
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].contains(field) {
                return Err(BulkError::Config(format!("duplicate field '{}'", field)));
            }
        }
        let id_index = fields.iter().position(|f| f == id_field).ok_or_else(|| {
            BulkError::Config(format!(
                "id field '{}' is not one of the fields ({})",
                id_field,
                fields.join(",")
            ))
        })?;
        if batch_size == 0 {
            return Err(BulkError::Config("batch size must be at least 1".into()));
        }

        Ok(IndexerConfig {
            index_name,
            fields,
            id_index,
            batch_size,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Field names, in column order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Column position of the document ID.
    pub fn id_index(&self) -> usize {
        self.id_index
    }

    pub fn id_field(&self) -> &str {
        &self.fields[self.id_index]
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The bulk API endpoint.
    pub fn bulk_url(&self) -> String {
        format!("{}/_bulk", self.base_url)
    }
}

impl TryFrom<IndexerArgs> for IndexerConfig {
    type Error = BulkError;

    fn try_from(args: IndexerArgs) -> Result<IndexerConfig, BulkError> {
        let fields = args.fields.split(',').map(String::from).collect();
        IndexerConfig::new(
            args.index_name,
            fields,
            &args.id_field,
            args.batch_size,
            &args.opensearch_url,
        )
    }
}
