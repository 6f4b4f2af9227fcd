//! ISO 4217 currency table.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Result, StandardsError};
use crate::loader::{load_records, parse_number};

/// Columns: code, numeric code, name, locations.
pub const CURRENCY_TABLE_WIDTH: usize = 4;

/// Length of an ISO 4217 alphabetic code.
pub const CURRENCY_CODE_LENGTH: usize = 3;

/// An ISO 4217 currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    /// Alphabetic code (e.g. "EUR").
    pub code: String,
    /// Numeric code (e.g. 978).
    pub numeric_code: u16,
    /// Currency name.
    pub name: String,
    /// Where the currency is in use, as free text.
    pub locations: String,
}

/// Immutable map from alphabetic code to currency.
#[derive(Debug, Clone)]
pub struct CurrencyRegistry {
    currencies: BTreeMap<String, Currency>,
    by_numeric: BTreeMap<u16, String>,
}

impl CurrencyRegistry {
    /// Load every currency of an ISO 4217 table.
    ///
    /// # Errors
    ///
    /// Malformed rows, codes that are not three upper case letters and
    /// duplicate alphabetic or numeric codes abort the load.
    pub fn load_from_str(content: &str, table: &str) -> Result<Self> {
        let records = load_records(content, table, CURRENCY_TABLE_WIDTH)?;

        let mut currencies = BTreeMap::new();
        let mut by_numeric = BTreeMap::new();
        for record in &records {
            let code = record.field(0).to_string();
            if code.len() != CURRENCY_CODE_LENGTH || !code.chars().all(|c| c.is_ascii_uppercase())
            {
                return Err(StandardsError::InvalidValue {
                    table: table.to_string(),
                    line: record.line,
                    field: "currency code",
                    value: code,
                });
            }
            let numeric_code: u16 = parse_number(record, 1, table, "numeric code")?;

            if currencies.contains_key(&code) {
                return Err(StandardsError::DuplicateKey {
                    table: table.to_string(),
                    line: record.line,
                    key: code,
                });
            }

            if let Some(existing) = by_numeric.get(&numeric_code) {
                tracing::debug!(
                    table = %table,
                    code = %code,
                    existing = %existing,
                    numeric_code,
                    "Numeric currency code already taken"
                );
                return Err(StandardsError::DuplicateKey {
                    table: table.to_string(),
                    line: record.line,
                    key: format!("{numeric_code:03}"),
                });
            }

            tracing::trace!(table = %table, code = %code, numeric_code, "Read currency");
            by_numeric.insert(numeric_code, code.clone());
            currencies.insert(
                code.clone(),
                Currency {
                    code,
                    numeric_code,
                    name: record.field(2).to_string(),
                    locations: record.field(3).to_string(),
                },
            );
        }

        if currencies.is_empty() {
            return Err(StandardsError::EmptyTable {
                table: table.to_string(),
            });
        }

        tracing::debug!(table = %table, currencies = currencies.len(), "Loaded currencies");
        Ok(Self {
            currencies,
            by_numeric,
        })
    }

    /// Get a currency by its alphabetic code (exact match).
    pub fn get(&self, code: &str) -> Option<&Currency> {
        self.currencies.get(code)
    }

    /// Get a currency by its numeric code.
    pub fn get_by_numeric(&self, numeric_code: u16) -> Option<&Currency> {
        self.by_numeric
            .get(&numeric_code)
            .and_then(|code| self.currencies.get(code))
    }

    /// Check whether an alphabetic code is in the table (exact match).
    pub fn contains(&self, code: &str) -> bool {
        self.currencies.contains_key(code)
    }

    /// Number of currencies in the registry.
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Iterate over currencies in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.currencies.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_TABLE: &str = "\
# code\tnumeric\tname\tlocations
EUR\t978\tEuro\tNetherlands, Belgium
JPY\t392\tJapanese yen\tJapan
";

    #[test]
    fn loads_and_looks_up() {
        let registry = CurrencyRegistry::load_from_str(SMALL_TABLE, "small").unwrap();
        assert_eq!(registry.len(), 2);
        let eur = registry.get("EUR").unwrap();
        assert_eq!(eur.numeric_code, 978);
        assert_eq!(eur.locations, "Netherlands, Belgium");
        assert_eq!(registry.get_by_numeric(392).unwrap().code, "JPY");
        assert!(!registry.contains("eur"));
    }

    #[test]
    fn numeric_code_keeps_leading_zero_value() {
        let registry =
            CurrencyRegistry::load_from_str("ALL\t008\tAlbanian lek\tAlbania\n", "lek").unwrap();
        assert_eq!(registry.get("ALL").unwrap().numeric_code, 8);
    }

    #[test]
    fn rejects_bad_code() {
        let err = CurrencyRegistry::load_from_str("EURO\t978\tEuro\tEU\n", "bad").unwrap_err();
        assert!(matches!(
            err,
            StandardsError::InvalidValue {
                field: "currency code",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_numeric_code() {
        let err = CurrencyRegistry::load_from_str("EUR\tnine\tEuro\tEU\n", "bad").unwrap_err();
        assert!(matches!(
            err,
            StandardsError::InvalidValue {
                field: "numeric code",
                ..
            }
        ));
    }

    #[test]
    fn rejects_duplicate_code() {
        let table = format!("{SMALL_TABLE}EUR\t978\tEuro\tEU\n");
        let err = CurrencyRegistry::load_from_str(&table, "dup").unwrap_err();
        assert!(matches!(err, StandardsError::DuplicateKey { .. }));
    }

    #[test]
    fn rejects_duplicate_numeric_code() {
        let table = format!("{SMALL_TABLE}XEU\t978\tEuropean unit\tEU\n");
        let err = CurrencyRegistry::load_from_str(&table, "dup").unwrap_err();
        assert!(matches!(err, StandardsError::DuplicateKey { ref key, .. } if key == "978"));
    }

    #[test]
    fn rejects_short_rows() {
        let err = CurrencyRegistry::load_from_str("EUR\t978\tEuro\n", "short").unwrap_err();
        assert!(matches!(err, StandardsError::FieldCount { found: 3, .. }));
    }
}
