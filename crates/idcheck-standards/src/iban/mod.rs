//! IBAN formats: grammar compiler, checksum engine and registry.

pub mod checksum;
pub mod format;
pub mod grammar;
pub mod registry;

pub use checksum::{check_digits, is_valid_checksum};
pub use format::IbanFormat;
pub use grammar::{BbanGrammar, CharClass, GrammarToken};
pub use registry::IbanRegistry;
