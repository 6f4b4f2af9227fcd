//! IBAN format registry.

use std::collections::BTreeMap;

use super::format::IbanFormat;
use super::grammar::BbanGrammar;
use crate::error::{Result, StandardsError};
use crate::loader::{RawRecord, load_records, parse_number};

/// Columns: country, total length, BBAN grammar, IBAN fields.
pub const IBAN_TABLE_WIDTH: usize = 4;

/// Immutable map from country code to IBAN format.
#[derive(Debug, Clone)]
pub struct IbanRegistry {
    formats: BTreeMap<String, IbanFormat>,
    minimum_length: usize,
}

impl IbanRegistry {
    /// Load and compile every format of an IBAN table.
    ///
    /// # Errors
    ///
    /// Any malformed row, grammar or duplicate country code aborts the load;
    /// a registry is never built from a partial table.
    pub fn load_from_str(content: &str, table: &str) -> Result<Self> {
        let records = load_records(content, table, IBAN_TABLE_WIDTH)?;

        let mut formats = BTreeMap::new();
        for record in &records {
            let format = parse_format(record, table)?;
            let key = format.country_code.clone();
            if formats.contains_key(&key) {
                return Err(StandardsError::DuplicateKey {
                    table: table.to_string(),
                    line: record.line,
                    key,
                });
            }
            tracing::trace!(
                table = %table,
                country_code = %key,
                length = format.length,
                bban = %format.grammar,
                "Compiled IBAN format"
            );
            formats.insert(key, format);
        }

        let registry = Self::from_formats(formats, table)?;
        tracing::debug!(
            table = %table,
            formats = registry.len(),
            minimum_length = registry.minimum_length,
            "Loaded IBAN formats"
        );
        Ok(registry)
    }

    fn from_formats(formats: BTreeMap<String, IbanFormat>, table: &str) -> Result<Self> {
        let minimum_length = formats
            .values()
            .map(|f| f.length)
            .min()
            .ok_or_else(|| StandardsError::EmptyTable {
                table: table.to_string(),
            })?;
        Ok(Self {
            formats,
            minimum_length,
        })
    }

    /// Get the format for a two letter country code.
    pub fn get(&self, country_code: &str) -> Option<&IbanFormat> {
        self.formats.get(country_code)
    }

    /// Check whether a country code has a format.
    pub fn contains(&self, country_code: &str) -> bool {
        self.formats.contains_key(country_code)
    }

    /// Smallest total length across all formats.
    pub fn minimum_length(&self) -> usize {
        self.minimum_length
    }

    /// Number of formats in the registry.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Iterate over formats in country code order.
    pub fn iter(&self) -> impl Iterator<Item = &IbanFormat> {
        self.formats.values()
    }

    /// Country codes in sorted order.
    pub fn country_codes(&self) -> impl Iterator<Item = &str> {
        self.formats.keys().map(String::as_str)
    }
}

fn parse_format(record: &RawRecord, table: &str) -> Result<IbanFormat> {
    let country = record.field(0);
    let length: usize = parse_number(record, 1, table, "length")?;
    let grammar = BbanGrammar::parse(record.field(2))?;
    let fields = record.field(3);

    let country_code = fields.get(..2).unwrap_or(fields);
    if country_code.len() != 2 || !country_code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(StandardsError::InvalidValue {
            table: table.to_string(),
            line: record.line,
            field: "country code",
            value: fields.to_string(),
        });
    }

    IbanFormat::new(country, country_code, length, grammar, fields)
}
