//! Line oriented reference table reader.
//!
//! Tables are tab separated text. Lines starting with `#` are comments and
//! blank lines are ignored. Fields are taken verbatim; there is no quoting.

use std::io::Cursor;

use crate::error::{Result, StandardsError};

/// A single table row with its fields in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line number in the source text.
    pub line: u64,
    /// Field values in column order.
    pub fields: Vec<String>,
}

impl RawRecord {
    /// Get a field by column index, or an empty string if absent.
    pub fn field(&self, idx: usize) -> &str {
        self.fields.get(idx).map(String::as_str).unwrap_or("")
    }
}

/// Read every record of a table, checking that each row has `width` fields.
///
/// `table` names the source in error messages and logs.
///
/// # Errors
///
/// Returns [`StandardsError::Read`] if the reader fails and
/// [`StandardsError::FieldCount`] for the first row with the wrong width.
pub fn load_records(content: &str, table: &str, width: usize) -> Result<Vec<RawRecord>> {
    let cursor = Cursor::new(content.as_bytes());
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .comment(Some(b'#'))
        .quoting(false)
        .flexible(true)
        .from_reader(cursor);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| StandardsError::Read {
            table: table.to_string(),
            source,
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() != width {
            return Err(StandardsError::FieldCount {
                table: table.to_string(),
                line,
                expected: width,
                found: record.len(),
            });
        }

        tracing::trace!(table = %table, line, "Read reference record");
        records.push(RawRecord {
            line,
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(records)
}

/// Parse a numeric field, reporting the table position on failure.
pub(crate) fn parse_number<T: std::str::FromStr>(
    record: &RawRecord,
    idx: usize,
    table: &str,
    field: &'static str,
) -> Result<T> {
    let raw = record.field(idx);
    raw.trim()
        .parse::<T>()
        .map_err(|_| StandardsError::InvalidValue {
            table: table.to_string(),
            line: record.line,
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        let content = "# header\nA\t1\n\n# trailing comment\nB\t2\n";
        let records = load_records(content, "test", 2).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fields, vec!["A", "1"]);
        assert_eq!(records[1].field(0), "B");
        assert!(records[1].line > records[0].line);
    }

    #[test]
    fn keeps_quotes_verbatim() {
        let records = load_records("C\"te d'Ivoire\tx\n", "test", 2).unwrap();
        assert_eq!(records[0].field(0), "C\"te d'Ivoire");
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = load_records("A\t1\nB\t2\t3\n", "test", 2).unwrap_err();
        match err {
            StandardsError::FieldCount {
                expected, found, ..
            } => {
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_field_is_empty() {
        let record = RawRecord {
            line: 1,
            fields: vec!["A".to_string()],
        };
        assert_eq!(record.field(3), "");
    }

    #[test]
    fn parse_number_reports_position() {
        let record = RawRecord {
            line: 7,
            fields: vec!["NL".to_string(), "eighteen".to_string()],
        };
        let err = parse_number::<usize>(&record, 1, "iban-formats.txt", "length").unwrap_err();
        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("eighteen"));
    }
}
