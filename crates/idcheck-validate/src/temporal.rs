//! Validators comparing ISO 8601 strings with the current time.
//!
//! "Now" comes from a [`Clock`], so tests and hosts with their own notion
//! of time can fix it.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone};

use crate::datetime::{parse_date, parse_date_time};
use crate::validator::{Presence, Validator};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock that always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Instant named by `value`: a date-time, or a date at midnight.
///
/// Values without an offset are read in the clock's offset.
fn instant(value: &str, local_offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let (local, offset) = if let Some(parsed) = parse_date_time(value) {
        (parsed.local, parsed.offset)
    } else {
        let parsed = parse_date(value)?;
        (parsed.date.and_hms_opt(0, 0, 0)?, parsed.offset)
    };
    offset
        .unwrap_or(local_offset)
        .from_local_datetime(&local)
        .single()
}

fn compare_with_now<C: Clock>(
    clock: &C,
    value: &str,
    accept: impl Fn(DateTime<FixedOffset>, DateTime<FixedOffset>) -> bool,
) -> bool {
    match Presence::of(value) {
        Presence::Empty => true,
        Presence::Blank => false,
        Presence::Present(value) => {
            let now = clock.now();
            instant(value, *now.offset()).is_some_and(|at| accept(at, now))
        }
    }
}

/// Accepts instants strictly after now.
#[derive(Debug, Clone, Default)]
pub struct FuturePredicate<C = SystemClock> {
    clock: C,
}

impl FuturePredicate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> FuturePredicate<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> Validator for FuturePredicate<C> {
    fn validate(&self, value: &str) -> bool {
        compare_with_now(&self.clock, value, |at, now| at > now)
    }
}

/// Accepts instants strictly before now.
#[derive(Debug, Clone, Default)]
pub struct PastPredicate<C = SystemClock> {
    clock: C,
}

impl PastPredicate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> PastPredicate<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> Validator for PastPredicate<C> {
    fn validate(&self, value: &str) -> bool {
        compare_with_now(&self.clock, value, |at, now| at < now)
    }
}

/// Accepts plain ISO dates (no offset) up to and including today.
#[derive(Debug, Clone, Default)]
pub struct PastOrPresentPredicate<C = SystemClock> {
    clock: C,
}

impl PastOrPresentPredicate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> PastOrPresentPredicate<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }
}

impl<C: Clock> Validator for PastOrPresentPredicate<C> {
    fn validate(&self, value: &str) -> bool {
        match Presence::of(value) {
            Presence::Empty => true,
            Presence::Blank => false,
            Presence::Present(value) => parse_date(value)
                .filter(|parsed| parsed.offset.is_none())
                .is_some_and(|parsed| parsed.date <= self.today()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> FixedClock {
        let instant = DateTime::parse_from_rfc3339("2024-06-15T12:00:00+02:00").unwrap();
        FixedClock::new(instant)
    }

    #[test]
    fn future() {
        let predicate = FuturePredicate::with_clock(clock());
        assert!(predicate.validate("2024-06-15T12:00:01"));
        assert!(predicate.validate("2024-06-16"));
        assert!(!predicate.validate("2024-06-15T12:00:00"));
        assert!(!predicate.validate("2024-06-15"));
        assert!(!predicate.validate("not a date"));
    }

    #[test]
    fn offsets_compare_as_instants() {
        let predicate = FuturePredicate::with_clock(clock());
        // 10:30Z is 12:30 at +02:00.
        assert!(predicate.validate("2024-06-15T10:30:00Z"));
        assert!(!predicate.validate("2024-06-15T09:30:00Z"));
    }

    #[test]
    fn past() {
        let predicate = PastPredicate::with_clock(clock());
        assert!(predicate.validate("2024-06-15T11:59:59"));
        assert!(predicate.validate("2024-06-15"));
        assert!(!predicate.validate("2024-06-16"));
        assert!(!predicate.validate("2024-13-01"));
    }

    #[test]
    fn past_or_present() {
        let predicate = PastOrPresentPredicate::with_clock(clock());
        assert!(predicate.validate("2024-06-15"));
        assert!(predicate.validate("1999-01-01"));
        assert!(!predicate.validate("2024-06-16"));
        assert!(!predicate.validate("2024-06-14T10:00:00"));
        assert!(!predicate.validate("2024-06-14Z"));
    }

    #[test]
    fn presence_contract() {
        assert!(FuturePredicate::with_clock(clock()).validate(""));
        assert!(!PastPredicate::with_clock(clock()).validate("  "));
        assert!(PastOrPresentPredicate::with_clock(clock()).validate(""));
        assert!(!PastOrPresentPredicate::with_clock(clock()).validate(" "));
    }

    #[test]
    fn system_clock_is_usable() {
        assert!(FuturePredicate::new().validate("9999-12-31"));
        assert!(PastPredicate::new().validate("1970-01-01T00:00"));
        assert!(PastOrPresentPredicate::new().validate("1970-01-01"));
    }
}
