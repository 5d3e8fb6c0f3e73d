//! Newline-delimited JSON bodies for the bulk API.
//!
//! Every record becomes two lines: an `index` action naming the target
//! index and document ID, followed by the document itself.

use std::io::{self, Write};

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::Formatter;

use super::{BulkError, IndexerConfig, Record};

pub const CONTENT_TYPE: &str = "application/x-ndjson";

#[derive(Serialize)]
struct Action<'a> {
    index: Target<'a>,
}

#[derive(Serialize)]
struct Target<'a> {
    #[serde(rename = "_index")]
    index: &'a str,
    #[serde(rename = "_id")]
    id: &'a str,
}

/// A record's values keyed by field name, in field order.
struct Document<'a> {
    fields: &'a [String],
    values: &'a [String],
}

impl<'a> Serialize for Document<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, value) in self.fields.iter().zip(self.values) {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

/// Separates members with `", "` and keys from values with `": "`, and
/// writes everything outside printable ASCII as `\uXXXX` escapes.
#[derive(Debug, Clone, Copy, Default)]
struct BulkFormatter;

impl Formatter for BulkFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c <= '~' {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// An encoded bulk request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkPayload {
    body: Vec<u8>,
    records: usize,
}

impl BulkPayload {
    /// Encode `records` as action/document line pairs.
    pub fn encode(records: &[Record], config: &IndexerConfig) -> Result<BulkPayload, BulkError> {
        let mut payload = BulkPayload {
            body: Vec::new(),
            records: 0,
        };
        for record in records {
            payload.push(record, config)?;
        }
        Ok(payload)
    }

    fn push(&mut self, record: &Record, config: &IndexerConfig) -> Result<(), BulkError> {
        let action = Action {
            index: Target {
                index: config.index_name(),
                id: record.id(config),
            },
        };
        let document = Document {
            fields: config.fields(),
            values: record.values(),
        };

        self.write_line(&action)?;
        self.write_line(&document)?;
        self.records += 1;
        Ok(())
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<(), BulkError> {
        {
            let mut ser = serde_json::Serializer::with_formatter(&mut self.body, BulkFormatter);
            value.serialize(&mut ser)?;
        }
        self.body.push(b'\n');
        Ok(())
    }

    /// Number of records in this payload.
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }
}
