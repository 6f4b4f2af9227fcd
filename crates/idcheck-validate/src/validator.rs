//! The shared validator abstraction.

/// A check that accepts or rejects a single string value.
///
/// Implementations never fail: anything that is not a valid instance of the
/// format is simply `false`.
pub trait Validator: Send + Sync {
    /// Returns true if `value` is acceptable.
    fn validate(&self, value: &str) -> bool;
}

impl<F> Validator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn validate(&self, value: &str) -> bool {
        self(value)
    }
}

/// How much content a value carries.
///
/// Every validator accepts [`Presence::Empty`] (absence is checked
/// elsewhere) and rejects [`Presence::Blank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence<'a> {
    /// The empty string.
    Empty,
    /// Whitespace only.
    Blank,
    /// Anything else.
    Present(&'a str),
}

impl<'a> Presence<'a> {
    /// Classify `value`.
    pub fn of(value: &'a str) -> Self {
        if value.is_empty() {
            Self::Empty
        } else if value.chars().all(char::is_whitespace) {
            Self::Blank
        } else {
            Self::Present(value)
        }
    }
}
