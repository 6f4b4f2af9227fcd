//! Embedded reference tables.
//!
//! Both tables are compiled into the library with `include_str!()` so the
//! default engine needs no file I/O.

/// File name of the IBAN format table.
pub const IBAN_FORMATS_FILE: &str = "iban-formats.txt";

/// File name of the ISO 4217 currency table.
pub const CURRENCIES_FILE: &str = "iso4217-currencies.txt";

/// IBAN formats per country.
pub const IBAN_FORMATS: &str = include_str!("../data/iban-formats.txt");

/// ISO 4217 currencies.
pub const CURRENCIES: &str = include_str!("../data/iso4217-currencies.txt");
