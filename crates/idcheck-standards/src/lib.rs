//! Reference tables and format engine for identifier validation.
//!
//! This crate provides:
//!
//! - **Table loading** from tab separated reference data ([`loader`])
//! - **IBAN formats**: BBAN grammar compiler, modulo-97 checksum and the
//!   per-country registry ([`iban`])
//! - **ISO 4217** currency table ([`currency`])
//! - **ISO 3166-1 alpha-3** country codes ([`country`])
//! - **Process-wide tables** with one-time build and atomic reload
//!   ([`tables`])
//!
//! Everything here is build-time work. Errors are configuration errors; the
//! query side lives in `idcheck-validate`.
//!
//! # Example
//!
//! ```
//! use idcheck_standards::tables;
//!
//! let tables = tables::current();
//! let nl = tables.iban().get("NL").unwrap();
//! assert_eq!(nl.length, 18);
//! assert!(nl.matches("NL91ABNA0417164300"));
//! ```

pub mod config;
pub mod country;
pub mod currency;
pub mod embedded;
pub mod error;
pub mod hash;
pub mod iban;
pub mod loader;
pub mod tables;

// Error types
pub use error::{Result, StandardsError};

// Configuration
pub use config::{DATA_DIR_ENV_VAR, DataConfig, DataSource};

// Registries and definitions
pub use country::is_alpha3_code;
pub use currency::{CURRENCY_CODE_LENGTH, Currency, CurrencyRegistry};
pub use iban::{BbanGrammar, CharClass, GrammarToken, IbanFormat, IbanRegistry};
pub use loader::{RawRecord, load_records};
pub use tables::{ReferenceTables, TableSource};
