//! BBAN grammar compiler.
//!
//! A grammar is a comma separated list of `<count><letter>` tokens, e.g.
//! `4a,10n` for the Netherlands. Letters map to character classes:
//!
//! | Letter | Class        | Pattern     |
//! |--------|--------------|-------------|
//! | `n`    | digit        | `[0-9]`     |
//! | `a`    | upper letter | `[A-Z]`     |
//! | `c`    | alphanumeric | `[A-Z0-9]`  |
//!
//! The compiled matcher is anchored at both ends and prefixed with the
//! country code and the two check digits.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::Serialize;

use crate::error::{Result, StandardsError};

/// Number of characters before the BBAN: country code plus check digits.
pub const IBAN_PREFIX_LEN: usize = 4;

/// Longest IBAN allowed by ISO 13616.
pub const MAX_IBAN_LENGTH: usize = 34;

/// Longest BBAN a grammar may describe.
pub const MAX_BBAN_LENGTH: usize = MAX_IBAN_LENGTH - IBAN_PREFIX_LEN;

/// Character class of a BBAN grammar token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CharClass {
    /// `n`: decimal digit.
    Digit,
    /// `a`: upper case latin letter.
    Upper,
    /// `c`: upper case latin letter or digit.
    AlphaNumeric,
}

impl CharClass {
    /// Map a grammar letter to its class.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'n' => Some(Self::Digit),
            'a' => Some(Self::Upper),
            'c' => Some(Self::AlphaNumeric),
            _ => None,
        }
    }

    /// The grammar letter for this class.
    pub const fn letter(&self) -> char {
        match self {
            Self::Digit => 'n',
            Self::Upper => 'a',
            Self::AlphaNumeric => 'c',
        }
    }

    /// Regex character class for this class.
    pub const fn pattern(&self) -> &'static str {
        match self {
            Self::Digit => "[0-9]",
            Self::Upper => "[A-Z]",
            Self::AlphaNumeric => "[A-Z0-9]",
        }
    }

}

/// One `<count><letter>` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrammarToken {
    pub count: usize,
    pub class: CharClass,
}

impl fmt::Display for GrammarToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.class.letter())
    }
}

/// A parsed BBAN grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BbanGrammar {
    source: String,
    tokens: Vec<GrammarToken>,
}

impl BbanGrammar {
    /// Parse a grammar string such as `10n,11c,2n`.
    ///
    /// # Errors
    ///
    /// - [`StandardsError::InvalidGrammarToken`] when a token is not a
    ///   positive count followed by exactly one letter, or when the tokens
    ///   add up to more than [`MAX_BBAN_LENGTH`] characters.
    /// - [`StandardsError::UnknownCharacterClass`] for letters other than
    ///   `n`, `a` and `c`.
    pub fn parse(grammar: &str) -> Result<Self> {
        let mut tokens = Vec::new();
        let mut width = 0usize;
        for text in grammar.split(',') {
            let token = parse_token(text, grammar)?;
            width += token.count;
            if width > MAX_BBAN_LENGTH {
                return Err(StandardsError::InvalidGrammarToken {
                    token: text.to_string(),
                    grammar: grammar.to_string(),
                });
            }
            tokens.push(token);
        }

        Ok(Self {
            source: grammar.to_string(),
            tokens,
        })
    }

    /// The grammar text as it appeared in the table.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Parsed tokens in order.
    pub fn tokens(&self) -> &[GrammarToken] {
        &self.tokens
    }

    /// Number of BBAN characters the grammar describes.
    pub fn width(&self) -> usize {
        self.tokens.iter().map(|t| t.count).sum()
    }

    /// Total IBAN length implied by this grammar.
    pub fn iban_length(&self) -> usize {
        IBAN_PREFIX_LEN + self.width()
    }

    /// Regex source for a full IBAN of `country_code` with this BBAN.
    pub fn to_pattern(&self, country_code: &str) -> String {
        let mut pattern = String::with_capacity(8 + self.tokens.len() * 12);
        pattern.push('^');
        pattern.push_str(country_code);
        pattern.push_str("[0-9]{2}");
        for token in &self.tokens {
            pattern.push_str(token.class.pattern());
            pattern.push('{');
            pattern.push_str(&token.count.to_string());
            pattern.push('}');
        }
        pattern.push('$');
        pattern
    }

    /// Compile the whole-string matcher for `country_code`.
    ///
    /// # Errors
    ///
    /// Returns [`StandardsError::Pattern`] if the regex engine rejects the
    /// generated pattern (e.g. a repetition count above its limit).
    pub fn compile(&self, country_code: &str) -> Result<Regex> {
        Regex::new(&self.to_pattern(country_code)).map_err(|source| StandardsError::Pattern {
            country_code: country_code.to_string(),
            source,
        })
    }
}

impl FromStr for BbanGrammar {
    type Err = StandardsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BbanGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn parse_token(token: &str, grammar: &str) -> Result<GrammarToken> {
    let invalid = || StandardsError::InvalidGrammarToken {
        token: token.to_string(),
        grammar: grammar.to_string(),
    };

    let split = token
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(idx, _)| idx)
        .ok_or_else(invalid)?;
    let (digits, rest) = token.split_at(split);

    let mut rest_chars = rest.chars();
    let (Some(letter), None) = (rest_chars.next(), rest_chars.next()) else {
        return Err(invalid());
    };
    if digits.is_empty() {
        return Err(invalid());
    }

    let count: usize = digits.parse().map_err(|_| invalid())?;
    if count == 0 || count > MAX_BBAN_LENGTH {
        return Err(invalid());
    }

    let class =
        CharClass::from_letter(letter).ok_or_else(|| StandardsError::UnknownCharacterClass {
            letter,
            grammar: grammar.to_string(),
        })?;

    Ok(GrammarToken { count, class })
}
