//! ITU E.123 and MSISDN phone number validation.

use crate::validator::{Presence, Validator};

/// Country prefix required by [`MsisdnPredicate::default`].
pub const DEFAULT_MSISDN_PREFIX: &str = "316";

/// Digits and spaces only.
pub fn is_itu_e123(value: &str) -> bool {
    match Presence::of(value) {
        Presence::Empty => true,
        Presence::Blank => false,
        Presence::Present(number) => number.chars().all(|c| c.is_ascii_digit() || c == ' '),
    }
}

/// MSISDN validator: an E.123 number starting with a fixed prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsisdnPredicate {
    prefix: String,
}

impl MsisdnPredicate {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for MsisdnPredicate {
    fn default() -> Self {
        Self::new(DEFAULT_MSISDN_PREFIX)
    }
}

impl Validator for MsisdnPredicate {
    fn validate(&self, value: &str) -> bool {
        if value.is_empty() {
            return true;
        }
        is_itu_e123(value) && value.starts_with(&self.prefix)
    }
}

/// [`MsisdnPredicate`] with the default prefix.
pub fn is_msisdn(value: &str) -> bool {
    MsisdnPredicate::default().validate(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn e123_digits_and_spaces() {
        assert!(is_itu_e123("31 6 12345678"));
        assert!(is_itu_e123("0201234567"));
        assert!(!is_itu_e123("+31612345678"));
        assert!(!is_itu_e123("06-12345678"));
        assert!(!is_itu_e123("   "));
        assert!(is_itu_e123(""));
    }

    #[test]
    fn msisdn_prefix() {
        assert!(is_msisdn("31612345678"));
        assert!(!is_msisdn("0612345678"));
        assert!(!is_msisdn(" 31612345678"));
        assert!(!is_msisdn("316-12345678"));
        assert!(is_msisdn(""));
    }

    #[test]
    fn configurable_prefix() {
        let belgium = MsisdnPredicate::new("324");
        assert_eq!(belgium.prefix(), "324");
        assert!(belgium.validate("32470123456"));
        assert!(!belgium.validate("31612345678"));
    }
}
