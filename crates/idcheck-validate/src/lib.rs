//! Validators for internationally standardized identifiers.
//!
//! Each family has a free function and a type implementing [`Validator`]:
//!
//! | Family | Function | Validator |
//! |---|---|---|
//! | IBAN | [`is_valid_iban`] | [`IbanPredicate`], [`IbanOfCountryPredicate`] |
//! | ISO 4217 currency | [`is_valid_currency`] | [`CurrencyPredicate`] |
//! | ISO 3166-1 alpha-3 | [`is_valid_alpha3`] | [`Alpha3Predicate`] |
//! | ITU E.123 / MSISDN | [`is_itu_e123`], [`is_msisdn`] | [`MsisdnPredicate`] |
//! | ISO 8601 | [`is_iso8601_date`], [`is_iso8601_date_time`] | [`Iso8601DatePredicate`], [`Iso8601DateTimePredicate`] |
//! | Relative to now | | [`FuturePredicate`], [`PastPredicate`], [`PastOrPresentPredicate`] |
//! | Fixed set | | [`OneOf`] |
//!
//! All validators share one contract: the empty string is valid (absence is
//! someone else's concern), a whitespace-only string is invalid, and every
//! other outcome is a plain `bool`.
//!
//! Reference tables come from `idcheck_standards::tables` and are loaded on
//! first use. Call `idcheck_standards::tables::initialize` at startup to
//! handle load errors instead of panicking.
//!
//! ```
//! use idcheck_validate::{IbanOfCountryPredicate, Validator, is_valid_iban};
//!
//! assert!(is_valid_iban("NL91 ABNA 0417 1643 00"));
//! assert!(!is_valid_iban("NL91 ABNA 0417 1643 01"));
//!
//! let dutch = IbanOfCountryPredicate::new(["nl"]);
//! assert!(!dutch.validate("BE68539007547034"));
//! ```

pub mod country;
pub mod currency;
pub mod datetime;
pub mod iban;
pub mod one_of;
pub mod phone;
pub mod temporal;
pub mod validator;

pub use country::{Alpha3Predicate, is_valid_alpha3};
pub use currency::{CurrencyPredicate, is_valid_currency};
pub use datetime::{
    IsoDate, IsoDateTime, Iso8601DatePredicate, Iso8601DateTimePredicate, is_iso8601_date,
    is_iso8601_date_time, parse_date, parse_date_time,
};
pub use iban::{IbanOfCountryPredicate, IbanPredicate, is_valid_iban};
pub use one_of::{NamedVariants, OneOf, OneOfValue};
pub use phone::{DEFAULT_MSISDN_PREFIX, MsisdnPredicate, is_itu_e123, is_msisdn};
pub use temporal::{
    Clock, FixedClock, FuturePredicate, PastOrPresentPredicate, PastPredicate, SystemClock,
};
pub use validator::{Presence, Validator};
