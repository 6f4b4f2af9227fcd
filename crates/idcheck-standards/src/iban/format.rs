//! Per-country IBAN format definition.

use regex::Regex;
use serde::Serialize;

use super::checksum::is_valid_checksum;
use super::grammar::BbanGrammar;
use crate::error::{Result, StandardsError};

/// A country's IBAN format with its compiled matcher.
///
/// Built once while loading the IBAN table and never modified afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct IbanFormat {
    /// Country display name (e.g. "Netherlands").
    pub country: String,
    /// Two letter lookup key (e.g. "NL").
    pub country_code: String,
    /// Total IBAN length including country code and check digits.
    pub length: usize,
    /// Parsed BBAN grammar.
    pub grammar: BbanGrammar,
    /// Descriptive field layout (e.g. "NLkk bbbb cccc cccc cc").
    pub fields: String,
    #[serde(skip)]
    pattern: Regex,
}

impl IbanFormat {
    /// Build and compile a format definition.
    ///
    /// # Errors
    ///
    /// - [`StandardsError::LengthMismatch`] if `length` is not the length the
    ///   grammar describes.
    /// - [`StandardsError::Pattern`] if the matcher fails to compile.
    pub fn new(
        country: impl Into<String>,
        country_code: impl Into<String>,
        length: usize,
        grammar: BbanGrammar,
        fields: impl Into<String>,
    ) -> Result<Self> {
        let country_code = country_code.into();
        let implied = grammar.iban_length();
        if implied != length {
            return Err(StandardsError::LengthMismatch {
                country_code,
                declared: length,
                implied,
            });
        }
        let pattern = grammar.compile(&country_code)?;

        Ok(Self {
            country: country.into(),
            country_code,
            length,
            grammar,
            fields: fields.into(),
            pattern,
        })
    }

    /// The compiled whole-string matcher.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Check a normalized (upper case, separator free) IBAN against this
    /// format: exact length, structure and checksum.
    pub fn matches(&self, candidate: &str) -> bool {
        self.length_matches(candidate)
            && self.pattern_matches(candidate)
            && is_valid_checksum(candidate)
    }

    /// Whether the candidate has exactly this format's length.
    pub fn length_matches(&self, candidate: &str) -> bool {
        candidate.len() == self.length
    }

    /// Whether the candidate matches the compiled structure.
    pub fn pattern_matches(&self, candidate: &str) -> bool {
        self.pattern.is_match(candidate)
    }
}
