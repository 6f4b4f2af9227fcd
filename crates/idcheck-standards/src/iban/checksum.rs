//! IBAN modulo-97 check (ISO 7064 MOD 97-10).
//!
//! The candidate is rotated so the country code and check digits move to the
//! end, every letter is replaced by its two-digit value (`A` = 10 ... `Z` = 35)
//! and the resulting decimal numeral must be congruent to 1 modulo 97.
//!
//! The numeral is reduced one decimal digit at a time, so the remainder is
//! exact for numerals of any length.

use super::grammar::IBAN_PREFIX_LEN;

/// Modulus of the IBAN check.
pub const MODULUS: u32 = 97;

/// Remainder a valid IBAN leaves.
pub const VALID_REMAINDER: u32 = 1;

/// Numeric value of an IBAN character.
///
/// Digits map to themselves, upper case letters to 10..=35. Anything else
/// (including lower case) has no value.
pub fn char_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Reduce the numeric re-encoding of `chars` modulo 97.
///
/// Returns `None` if any character has no numeric value.
pub fn mod97<I>(chars: I) -> Option<u32>
where
    I: IntoIterator<Item = char>,
{
    let mut remainder = 0u32;
    for c in chars {
        let value = char_value(c)?;
        remainder = if value >= 10 {
            (remainder * 100 + value) % MODULUS
        } else {
            (remainder * 10 + value) % MODULUS
        };
    }
    Some(remainder)
}

/// Remainder of a full IBAN after rotating the first four characters.
///
/// Returns `None` for candidates shorter than the country code plus check
/// digits, or containing characters other than `0-9` and `A-Z`.
pub fn iban_remainder(candidate: &str) -> Option<u32> {
    if candidate.len() < IBAN_PREFIX_LEN || !candidate.is_ascii() {
        return None;
    }
    let (head, tail) = candidate.split_at(IBAN_PREFIX_LEN);
    mod97(tail.chars().chain(head.chars()))
}

/// Check the modulo-97 checksum of an upper case, separator free IBAN.
pub fn is_valid_checksum(candidate: &str) -> bool {
    iban_remainder(candidate) == Some(VALID_REMAINDER)
}

/// Compute the two check digits for `country_code` and `bban`.
///
/// Uses the ISO 13616 rule `98 - (bban ++ country ++ "00") mod 97`. Returns
/// `None` if the country code is not two upper case letters or the BBAN
/// contains characters outside `0-9` and `A-Z`.
pub fn check_digits(country_code: &str, bban: &str) -> Option<u8> {
    if country_code.len() != 2 || !country_code.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }
    let remainder = mod97(bban.chars().chain(country_code.chars()).chain(['0', '0']))?;
    u8::try_from(98 - remainder).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_ibans_leave_remainder_one() {
        for iban in [
            "BE68539007547034",
            "NL91ABNA0417164300",
            "DE89370400440532013000",
            "FR1420041010050500013M02606",
            "GB82WEST12345698765432",
        ] {
            assert_eq!(iban_remainder(iban), Some(1), "{iban}");
        }
    }

    #[test]
    fn changed_check_digit_fails() {
        assert!(!is_valid_checksum("NL91ABNA0417164301"));
        assert!(!is_valid_checksum("GB82WEST12345698765430"));
    }

    #[test]
    fn rejects_non_alphanumeric_and_short_input() {
        assert_eq!(iban_remainder("NL9"), None);
        assert_eq!(iban_remainder("NL91 ABNA"), None);
        assert_eq!(iban_remainder("nl91abna0417164300"), None);
        assert!(!is_valid_checksum(""));
    }

    #[test]
    fn letter_values() {
        assert_eq!(char_value('A'), Some(10));
        assert_eq!(char_value('Z'), Some(35));
        assert_eq!(char_value('7'), Some(7));
        assert_eq!(char_value('a'), None);
    }

    #[test]
    fn numeral_wider_than_u64_is_exact() {
        // 3214282912345698765432161182 is the rotated GB example; 28 digits.
        let numeral = "3214282912345698765432161182";
        let expected = (numeral.parse::<u128>().unwrap() % 97) as u32;
        assert_eq!(mod97(numeral.chars()), Some(expected));
        assert_eq!(expected, 1);
    }

    #[test]
    fn computes_known_check_digits() {
        assert_eq!(check_digits("NL", "ABNA0417164300"), Some(91));
        assert_eq!(check_digits("GB", "WEST12345698765432"), Some(82));
        assert_eq!(check_digits("nl", "ABNA0417164300"), None);
        assert_eq!(check_digits("NL", "abna0417164300"), None);
    }

    proptest! {
        #[test]
        fn matches_wide_integer_remainder(digits in "[0-9]{1,38}") {
            let expected = (digits.parse::<u128>().unwrap() % 97) as u32;
            prop_assert_eq!(mod97(digits.chars()), Some(expected));
        }

        #[test]
        fn computed_check_digits_validate(bban in "[A-Z0-9]{8,30}") {
            let digits = check_digits("DE", &bban).unwrap();
            let iban = format!("DE{digits:02}{bban}");
            prop_assert!(is_valid_checksum(&iban));
        }
    }
}
