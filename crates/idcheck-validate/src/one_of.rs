//! Membership in a fixed set of permitted values.
//!
//! The set is built from explicit strings and from the variant names of
//! enums implementing [`NamedVariants`]. Values of other types are compared
//! through their canonical text, so `42` matches the permitted value `"42"`.

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::validator::{Presence, Validator};

/// An enum whose variant names may be used as permitted values.
pub trait NamedVariants {
    /// Variant names, as written in source.
    const VARIANT_NAMES: &'static [&'static str];
}

/// A value that can be checked against a [`OneOf`] set.
pub trait OneOfValue {
    /// The text compared against the permitted values.
    fn one_of_key(&self) -> Cow<'_, str>;
}

impl OneOfValue for str {
    fn one_of_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl OneOfValue for String {
    fn one_of_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

macro_rules! impl_one_of_value_for_integers {
    ($($ty:ty),*) => {
        $(
            impl OneOfValue for $ty {
                fn one_of_key(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_one_of_value_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Validator accepting only permitted values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OneOf {
    permitted: BTreeSet<String>,
}

impl OneOf {
    /// Permit each of `values`.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            permitted: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Also permit every variant name of `E`.
    #[must_use]
    pub fn with_variants<E: NamedVariants>(mut self) -> Self {
        self.permitted
            .extend(E::VARIANT_NAMES.iter().map(|name| (*name).to_string()));
        self
    }

    /// The permitted values.
    pub fn permitted(&self) -> &BTreeSet<String> {
        &self.permitted
    }

    /// Check a value of any supported type.
    ///
    /// Empty text is accepted and whitespace-only text rejected, as for
    /// every other validator.
    pub fn permits<V: OneOfValue + ?Sized>(&self, value: &V) -> bool {
        let key = value.one_of_key();
        match Presence::of(&key) {
            Presence::Empty => true,
            Presence::Blank => false,
            Presence::Present(key) => self.permitted.contains(key),
        }
    }
}

impl Validator for OneOf {
    fn validate(&self, value: &str) -> bool {
        self.permits(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Channel {
        Email,
        Sms,
    }

    impl NamedVariants for Channel {
        const VARIANT_NAMES: &'static [&'static str] = &["Email", "Sms"];
    }

    #[test]
    fn explicit_values() {
        let one_of = OneOf::new(["A", "B"]);
        assert!(one_of.validate("A"));
        assert!(!one_of.validate("a"));
        assert!(!one_of.validate("C"));
        assert!(one_of.validate(""));
        assert!(!one_of.validate("  "));
    }

    #[test]
    fn enum_variants() {
        let one_of = OneOf::new(["Post"]).with_variants::<Channel>();
        assert!(one_of.validate("Email"));
        assert!(one_of.validate("Sms"));
        assert!(one_of.validate("Post"));
        assert!(!one_of.validate("SMS"));
        assert_eq!(one_of.permitted().len(), 3);
        // The variants exist only to be named above.
        let _ = (Channel::Email, Channel::Sms);
    }

    #[test]
    fn integers_compare_as_text() {
        let one_of = OneOf::new(["1", "2", "10"]);
        assert!(one_of.permits(&10_i32));
        assert!(one_of.permits(&2_u8));
        assert!(!one_of.permits(&3_i64));
        assert!(!one_of.permits(&-1_i32));
        assert!(one_of.permits(&String::from("1")));
    }
}
