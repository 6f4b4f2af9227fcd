//! IBAN validation against the loaded format registry.
//!
//! A value is valid when, after dropping separators and upper-casing, its
//! country has a registered format, the length and BBAN pattern match that
//! format, and the modulo-97 checksum holds.

use std::collections::BTreeSet;
use std::sync::Arc;

use idcheck_common::redact_value;
use idcheck_standards::{IbanRegistry, tables};

use crate::validator::{Presence, Validator};

/// Strip every non-alphanumeric character and upper-case the rest.
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Country code of a normalized IBAN candidate.
pub fn country_code(candidate: &str) -> Option<&str> {
    candidate.get(..2)
}

/// Validate `value` against the active reference tables.
pub fn is_valid_iban(value: &str) -> bool {
    validate_with(tables::current().iban(), value)
}

fn validate_with(registry: &IbanRegistry, value: &str) -> bool {
    let value = match Presence::of(value) {
        Presence::Empty => return true,
        Presence::Blank => return false,
        Presence::Present(value) => value,
    };

    let candidate = normalize(value);
    if candidate.len() < registry.minimum_length() {
        return false;
    }
    let Some(code) = country_code(&candidate) else {
        return false;
    };

    match registry.get(code) {
        Some(format) => format.matches(&candidate),
        None => {
            tracing::error!(
                country_code = code,
                iban = redact_value(value),
                "No IBAN format registered for country"
            );
            false
        }
    }
}

/// IBAN validator.
///
/// By default every call reads the active tables, so a reload is picked up
/// immediately. [`IbanPredicate::with_registry`] pins a specific registry.
#[derive(Debug, Clone, Default)]
pub struct IbanPredicate {
    registry: Option<Arc<IbanRegistry>>,
}

impl IbanPredicate {
    /// Validator over the active tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator over a fixed registry.
    pub fn with_registry(registry: Arc<IbanRegistry>) -> Self {
        Self {
            registry: Some(registry),
        }
    }
}

impl Validator for IbanPredicate {
    fn validate(&self, value: &str) -> bool {
        match &self.registry {
            Some(registry) => validate_with(registry, value),
            None => is_valid_iban(value),
        }
    }
}

/// IBAN validator restricted to a set of countries.
///
/// The country is the first two characters of the value as given,
/// upper-cased.
#[derive(Debug, Clone)]
pub struct IbanOfCountryPredicate {
    iban: IbanPredicate,
    allowed: BTreeSet<String>,
}

impl IbanOfCountryPredicate {
    /// Accept only IBANs issued in one of `countries` (case-insensitive).
    pub fn new<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_iban(IbanPredicate::new(), countries)
    }

    /// Restrict an existing IBAN validator.
    pub fn with_iban<I, S>(iban: IbanPredicate, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = countries
            .into_iter()
            .map(|country| country.as_ref().to_ascii_uppercase())
            .collect();
        Self { iban, allowed }
    }

    /// The permitted country codes, upper-cased.
    pub fn allowed(&self) -> &BTreeSet<String> {
        &self.allowed
    }
}

impl Validator for IbanOfCountryPredicate {
    fn validate(&self, value: &str) -> bool {
        if value.is_empty() {
            return true;
        }
        if !self.iban.validate(value) {
            return false;
        }
        // The raw prefix, not the normalized one: leading separators fail.
        value
            .get(..2)
            .map(str::to_ascii_uppercase)
            .is_some_and(|code| self.allowed.contains(&code))
    }
}
