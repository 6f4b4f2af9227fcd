//! ISO 3166-1 alpha-3 country code validation.

use idcheck_standards::is_alpha3_code;

use crate::validator::{Presence, Validator};

/// Exact, case-sensitive membership in the ISO 3166-1 alpha-3 list.
pub fn is_valid_alpha3(value: &str) -> bool {
    match Presence::of(value) {
        Presence::Empty => true,
        Presence::Blank => false,
        Presence::Present(code) => is_alpha3_code(code),
    }
}

/// ISO 3166-1 alpha-3 validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alpha3Predicate;

impl Validator for Alpha3Predicate {
    fn validate(&self, value: &str) -> bool {
        is_valid_alpha3(value)
    }
}
