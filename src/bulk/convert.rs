//! Turns tab-separated lines into records.

use super::{BulkError, IndexerConfig};

/// One input line, cut down to the configured fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<String>,
}

impl Record {
    /// Column values, in field order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The value of the configured ID field.
    pub fn id<'a>(&'a self, config: &IndexerConfig) -> &'a str {
        &self.values[config.id_index()]
    }
}

/// Drop the line terminator and any other trailing whitespace.
///
/// Trailing tabs go too, so a record ending in empty columns comes up short.
pub fn trim_record(line: &str) -> &str {
    line.trim_end()
}

/// Split `line` on tabs and pair the columns with the configured fields.
///
/// `line_no` is 1-based and only used for error reporting.
/// Columns beyond the last field are ignored.
pub fn convert_line(line: &str, line_no: u64, config: &IndexerConfig) -> Result<Record, BulkError> {
    let expected = config.fields().len();
    let values: Vec<String> = trim_record(line)
        .split('\t')
        .take(expected)
        .map(String::from)
        .collect();

    if values.len() < expected {
        return Err(BulkError::MissingColumns {
            line: line_no,
            expected,
            found: values.len(),
        });
    }

    Ok(Record { values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bulk::config::DEFAULT_URL;

    fn config(fields: &[&str], id: &str) -> IndexerConfig {
        let fields = fields.iter().map(|s| s.to_string()).collect();
        IndexerConfig::new("idx", fields, id, 10, DEFAULT_URL).unwrap()
    }

    #[test]
    fn trailing_whitespace() {
        assert_eq!("a\tb", trim_record("a\tb\n"));
        assert_eq!("a\tb", trim_record("a\tb\r\n"));
        assert_eq!("a", trim_record("a\t\n"));
        assert_eq!("a", trim_record("a "));
        assert_eq!(" a\tb", trim_record(" a\tb"));
    }

    #[test]
    fn last_column_loses_trailing_spaces() {
        let c = config(&["a", "b"], "a");
        let r = convert_line("1\tfoo  \n", 1, &c).unwrap();

        assert_eq!(&["1".to_string(), "foo".to_string()], r.values());
    }

    #[test]
    fn positional() {
        let c = config(&["a", "b"], "a");
        let r = convert_line("1\tfoo\n", 1, &c).unwrap();

        assert_eq!(&["1".to_string(), "foo".to_string()], r.values());
        assert_eq!("1", r.id(&c));
    }

    #[test]
    fn id_from_any_column() {
        let c = config(&["name", "rank", "taxon_id"], "taxon_id");
        let r = convert_line("Escherichia coli\tspecies\t562", 1, &c).unwrap();

        assert_eq!("562", r.id(&c));
    }

    #[test]
    fn inner_empty_columns_are_kept() {
        let c = config(&["a", "b", "c"], "a");
        let r = convert_line("1\t\tx\n", 1, &c).unwrap();

        assert_eq!(&["1".to_string(), String::new(), "x".to_string()], r.values());
    }

    #[test]
    fn trailing_empty_columns_are_missing() {
        let c = config(&["a", "b", "c"], "a");
        match convert_line("1\t\t\n", 4, &c) {
            Err(BulkError::MissingColumns { line, found, .. }) => {
                assert_eq!(4, line);
                assert_eq!(1, found);
            }
            other => panic!("expected missing columns, got {:?}", other),
        }
    }

    #[test]
    fn extra_columns_are_ignored() {
        let c = config(&["a", "b"], "b");
        let r = convert_line("1\t2\t3\t4", 1, &c).unwrap();

        assert_eq!(2, r.values().len());
        assert_eq!("2", r.id(&c));
    }

    #[test]
    fn missing_columns() {
        let c = config(&["a", "b", "c"], "a");
        match convert_line("1\tfoo", 7, &c) {
            Err(BulkError::MissingColumns {
                line,
                expected,
                found,
            }) => {
                assert_eq!(7, line);
                assert_eq!(3, expected);
                assert_eq!(2, found);
            }
            other => panic!("expected missing columns, got {:?}", other),
        }
    }
}
