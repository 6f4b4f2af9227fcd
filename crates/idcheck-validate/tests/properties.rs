//! Property tests for normalization and determinism.

use idcheck_validate::{
    IbanOfCountryPredicate, Validator, is_iso8601_date, is_iso8601_date_time, is_itu_e123,
    is_valid_alpha3, is_valid_currency, is_valid_iban,
};
use proptest::prelude::*;

const VALID_IBANS: &[&str] = &[
    "BE68539007547034",
    "NL91ABNA0417164300",
    "DE89370400440532013000",
    "GB82WEST12345698765432",
];

/// Interleave `separators` into `iban` and apply the case mask.
fn decorate(iban: &str, separators: &[(bool, char)], lower: &[bool]) -> String {
    let mut out = String::new();
    for (idx, c) in iban.chars().enumerate() {
        if lower.get(idx).copied().unwrap_or(false) {
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
        if let Some((true, sep)) = separators.get(idx) {
            out.push(*sep);
        }
    }
    out
}

proptest! {
    #[test]
    fn separators_and_case_never_change_validity(
        idx in 0..VALID_IBANS.len(),
        separators in prop::collection::vec((any::<bool>(), prop::sample::select(vec![' ', '-', '.', '/'])), 34),
        lower in prop::collection::vec(any::<bool>(), 34),
    ) {
        let decorated = decorate(VALID_IBANS[idx], &separators, &lower);
        prop_assert!(is_valid_iban(&decorated), "{}", decorated);
    }

    #[test]
    fn any_single_digit_change_is_detected(
        idx in 0..VALID_IBANS.len(),
        position in 0usize..34,
        delta in 1u8..10,
    ) {
        let iban = VALID_IBANS[idx];
        let position = position % iban.len();
        let bytes = iban.as_bytes();
        prop_assume!(bytes[position].is_ascii_digit());

        let mut mutated = bytes.to_vec();
        mutated[position] = b'0' + (bytes[position] - b'0' + delta) % 10;
        let mutated = String::from_utf8(mutated).unwrap();
        prop_assert!(!is_valid_iban(&mutated), "{}", mutated);
    }

    #[test]
    fn validation_is_idempotent(value in ".{0,40}") {
        let scoped = IbanOfCountryPredicate::new(["NL", "BE"]);
        prop_assert_eq!(is_valid_iban(&value), is_valid_iban(&value));
        prop_assert_eq!(scoped.validate(&value), scoped.validate(&value));
        prop_assert_eq!(is_valid_currency(&value), is_valid_currency(&value));
        prop_assert_eq!(is_valid_alpha3(&value), is_valid_alpha3(&value));
        prop_assert_eq!(is_iso8601_date(&value), is_iso8601_date(&value));
        prop_assert_eq!(is_iso8601_date_time(&value), is_iso8601_date_time(&value));
    }

    #[test]
    fn whitespace_only_is_always_invalid(value in "[ \t\n]{1,8}") {
        prop_assert!(!is_valid_iban(&value));
        prop_assert!(!is_valid_currency(&value));
        prop_assert!(!is_valid_alpha3(&value));
        prop_assert!(!is_itu_e123(&value));
        prop_assert!(!is_iso8601_date(&value));
    }

    #[test]
    fn e123_accepts_digit_space_strings(value in "[0-9][0-9 ]{0,15}") {
        prop_assert!(is_itu_e123(&value));
    }
}
