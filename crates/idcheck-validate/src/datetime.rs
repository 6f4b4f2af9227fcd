//! ISO 8601 date and date-time validation.
//!
//! Extended format only (`YYYY-MM-DD`, `YYYY-MM-DDThh:mm[:ss[.fff]]`).
//! Both accept a trailing UTC offset (`Z`, `+hh:mm`, `+hh:mm:ss`); a
//! date-time with an offset may add a bracketed zone id such as
//! `[Europe/Amsterdam]`. Calendar values are checked, so `2019-02-30` is
//! rejected.

use std::sync::LazyLock;

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};

use crate::validator::{Presence, Validator};

/// Largest offset magnitude accepted, in seconds.
const MAX_OFFSET_SECONDS: i32 = 18 * 3600;

static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})(Z|[+-][0-9]{2}:[0-9]{2}(?::[0-9]{2})?)?$")
        .expect("Invalid ISO 8601 date regex")
});

static DATE_TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2})T([0-9]{2}):([0-9]{2})(?::([0-9]{2})(?:\.([0-9]{1,9}))?)?(?:(Z|[+-][0-9]{2}:[0-9]{2}(?::[0-9]{2})?)(?:\[([A-Za-z][A-Za-z0-9_+\-./]*)\])?)?$",
    )
    .expect("Invalid ISO 8601 date-time regex")
});

/// A calendar date with an optional offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoDate {
    pub date: NaiveDate,
    pub offset: Option<FixedOffset>,
}

/// A local date-time with an optional offset and zone id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDateTime {
    pub local: NaiveDateTime,
    pub offset: Option<FixedOffset>,
    pub zone: Option<String>,
}

/// Parse an ISO 8601 date.
pub fn parse_date(value: &str) -> Option<IsoDate> {
    let caps = DATE_REGEX.captures(value)?;
    let date = date_from(&caps)?;
    let offset = optional_offset(caps.get(4).map(|m| m.as_str()))?;
    Some(IsoDate { date, offset })
}

/// Parse an ISO 8601 date-time.
pub fn parse_date_time(value: &str) -> Option<IsoDateTime> {
    let caps = DATE_TIME_REGEX.captures(value)?;
    let date = date_from(&caps)?;

    let hour = number(&caps, 4)?;
    let minute = number(&caps, 5)?;
    let second = caps.get(6).map_or(Some(0), |m| m.as_str().parse().ok())?;
    let nano = caps.get(7).map_or(Some(0), |m| fraction_nanos(m.as_str()))?;
    let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nano)?;

    let offset = optional_offset(caps.get(8).map(|m| m.as_str()))?;
    let zone = caps.get(9).map(|m| m.as_str().to_string());

    Some(IsoDateTime {
        local: NaiveDateTime::new(date, time),
        offset,
        zone,
    })
}

/// Returns true for an empty value or a valid ISO 8601 date.
pub fn is_iso8601_date(value: &str) -> bool {
    match Presence::of(value) {
        Presence::Empty => true,
        Presence::Blank => false,
        Presence::Present(value) => parse_date(value).is_some(),
    }
}

/// Returns true for an empty value or a valid ISO 8601 date-time.
pub fn is_iso8601_date_time(value: &str) -> bool {
    match Presence::of(value) {
        Presence::Empty => true,
        Presence::Blank => false,
        Presence::Present(value) => parse_date_time(value).is_some(),
    }
}

/// ISO 8601 date validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso8601DatePredicate;

impl Validator for Iso8601DatePredicate {
    fn validate(&self, value: &str) -> bool {
        is_iso8601_date(value)
    }
}

/// ISO 8601 date-time validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso8601DateTimePredicate;

impl Validator for Iso8601DateTimePredicate {
    fn validate(&self, value: &str) -> bool {
        is_iso8601_date_time(value)
    }
}

fn number(caps: &Captures<'_>, idx: usize) -> Option<u32> {
    caps.get(idx)?.as_str().parse().ok()
}

fn date_from(caps: &Captures<'_>) -> Option<NaiveDate> {
    let year = caps.get(1)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, number(caps, 2)?, number(caps, 3)?)
}

/// `.5` is half a second: pad to nine digits.
fn fraction_nanos(digits: &str) -> Option<u32> {
    format!("{digits:0<9}").parse().ok()
}

/// Outer `None` means the offset text is out of range.
fn optional_offset(text: Option<&str>) -> Option<Option<FixedOffset>> {
    match text {
        None => Some(None),
        Some(text) => parse_offset(text).map(Some),
    }
}

fn parse_offset(text: &str) -> Option<FixedOffset> {
    if text == "Z" {
        return FixedOffset::east_opt(0);
    }
    let (sign, rest) = match text.split_at_checked(1)? {
        ("+", rest) => (1, rest),
        ("-", rest) => (-1, rest),
        _ => return None,
    };

    let mut parts = rest.split(':').map(str::parse::<i32>);
    let hours = parts.next()?.ok()?;
    let minutes = parts.next()?.ok()?;
    let seconds = parts.next().transpose().ok()?.unwrap_or(0);
    if minutes > 59 || seconds > 59 {
        return None;
    }

    let total = hours * 3600 + minutes * 60 + seconds;
    if total > MAX_OFFSET_SECONDS {
        return None;
    }
    FixedOffset::east_opt(sign * total)
}
