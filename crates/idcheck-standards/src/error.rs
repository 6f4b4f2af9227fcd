//! Error types for reference table loading.
//!
//! Every variant describes a configuration problem found while building the
//! tables. None of them is produced while validating a value.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading and compiling reference tables.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Reference data directory not found.
    #[error("Reference data directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read a reference table from disk.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tab separated reader failed on a record.
    #[error("Failed to read table {table}: {source}")]
    Read {
        table: String,
        #[source]
        source: csv::Error,
    },

    /// A record has the wrong number of fields.
    #[error("{table} line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        table: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Invalid value in a table field.
    #[error("{table} line {line}: invalid {field} value '{value}'")]
    InvalidValue {
        table: String,
        line: u64,
        field: &'static str,
        value: String,
    },

    /// A BBAN grammar token is not of the form `<count><letter>`.
    #[error("Invalid BBAN format token '{token}' in '{grammar}'")]
    InvalidGrammarToken { token: String, grammar: String },

    /// A BBAN grammar token uses an unknown character class letter.
    #[error("Unknown BBAN character class '{letter}' in '{grammar}'")]
    UnknownCharacterClass { letter: char, grammar: String },

    /// Declared IBAN length disagrees with the BBAN grammar.
    #[error("IBAN format for {country_code} declares length {declared}, grammar implies {implied}")]
    LengthMismatch {
        country_code: String,
        declared: usize,
        implied: usize,
    },

    /// The same lookup key appears twice in one table.
    #[error("Duplicate key '{key}' in {table} (line {line})")]
    DuplicateKey {
        table: String,
        line: u64,
        key: String,
    },

    /// A table contains no definitions.
    #[error("Table {table} contains no definitions")]
    EmptyTable { table: String },

    /// The compiled matcher was rejected by the regex engine.
    #[error("Failed to compile IBAN pattern for {country_code}: {source}")]
    Pattern {
        country_code: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for reference table operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
