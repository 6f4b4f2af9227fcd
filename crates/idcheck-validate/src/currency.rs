//! ISO 4217 currency code validation.

use std::sync::Arc;

use idcheck_standards::{CURRENCY_CODE_LENGTH, CurrencyRegistry, tables};

use crate::validator::{Presence, Validator};

/// Validate `value` against the active currency table.
///
/// The lookup ignores case: `"eur"` is accepted.
pub fn is_valid_currency(value: &str) -> bool {
    validate_with(tables::current().currencies(), value)
}

fn validate_with(registry: &CurrencyRegistry, value: &str) -> bool {
    match Presence::of(value) {
        Presence::Empty => true,
        Presence::Blank => false,
        Presence::Present(value) => {
            value.chars().count() == CURRENCY_CODE_LENGTH
                && registry.contains(&value.to_ascii_uppercase())
        }
    }
}

/// ISO 4217 validator.
///
/// Reads the active tables on every call unless pinned to a registry.
#[derive(Debug, Clone, Default)]
pub struct CurrencyPredicate {
    registry: Option<Arc<CurrencyRegistry>>,
}

impl CurrencyPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: Arc<CurrencyRegistry>) -> Self {
        Self {
            registry: Some(registry),
        }
    }
}

impl Validator for CurrencyPredicate {
    fn validate(&self, value: &str) -> bool {
        match &self.registry {
            Some(registry) => validate_with(registry, value),
            None => is_valid_currency(value),
        }
    }
}
