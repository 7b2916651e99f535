//! Locale tag and locale-aware string collation
//!
//! The collator compares strings in three levels, like a UCA collator:
//! - primary: character class (whitespace < punctuation < symbols < digits <
//!   letters), then the case- and accent-folded character. With numeric
//!   ordering enabled, a run of ASCII digits is a single element compared by
//!   value, so "channel-2" sorts before "channel-10".
//! - secondary: accents.
//! - tertiary: letter case (order depends on the locale) and leading zeros.
//!
//! Collation goes through a derived [`SortKey`], so `compare` is a total order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::DomainError;

/// Languages whose collation puts upper case before lower case
const UPPER_FIRST_LANGUAGES: &[&str] = &["da", "mt"];

/// BCP 47 style locale tag (e.g. `en`, `en-US`, `da_DK`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Create a locale from a tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Parse and validate a tag: ASCII letters, digits, `-` and `_`, starting with a letter
    pub fn parse(tag: &str) -> Result<Self, DomainError> {
        let tag = tag.trim();
        let valid = tag.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
            && tag
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self::new(tag))
        } else {
            Err(DomainError::InvalidLocale(tag.to_string()))
        }
    }

    /// Get the full tag
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag, lowercased
    pub fn language(&self) -> String {
        self.0
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }

    /// Case ordering used by this locale's collation
    pub fn case_first(&self) -> CaseFirst {
        if UPPER_FIRST_LANGUAGES.contains(&self.language().as_str()) {
            CaseFirst::Upper
        } else {
            CaseFirst::Lower
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

/// Which letter case sorts first when two strings differ only by case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseFirst {
    #[default]
    Lower,
    Upper,
}

/// Primary character classes in collation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum CharClass {
    Whitespace,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            Self::Whitespace
        } else if c.is_alphabetic() {
            Self::Letter
        } else if c.is_numeric() {
            Self::Digit
        } else if is_symbol(c) {
            Self::Symbol
        } else {
            Self::Punctuation
        }
    }
}

fn is_symbol(c: char) -> bool {
    matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~')
        || (!c.is_ascii() && !c.is_alphanumeric() && !c.is_whitespace())
}

/// Primary collation element
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Primary {
    class: CharClass,
    /// Significant digit count for numeric runs, zero otherwise
    magnitude: usize,
    text: String,
}

/// Precomputed collation key; comparing keys is equivalent to [`Collator::compare`]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    primary: Vec<Primary>,
    secondary: Vec<u8>,
    tertiary: Vec<u32>,
    identical: String,
}

/// Locale-aware string comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collator {
    case_first: CaseFirst,
    numeric: bool,
}

impl Collator {
    /// Create a collator for a locale with numeric ordering disabled
    pub fn new(locale: &Locale) -> Self {
        Self {
            case_first: locale.case_first(),
            numeric: false,
        }
    }

    /// Enable or disable numeric ordering of digit runs
    pub fn numeric(mut self, numeric: bool) -> Self {
        self.numeric = numeric;
        self
    }

    /// Compare two strings
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.sort_key(a).cmp(&self.sort_key(b))
    }

    /// Build the collation key for a string
    pub fn sort_key(&self, text: &str) -> SortKey {
        let mut key = SortKey {
            primary: Vec::new(),
            secondary: Vec::new(),
            tertiary: Vec::new(),
            identical: text.to_string(),
        };

        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if self.numeric && c.is_ascii_digit() {
                let mut run = String::from(c);
                while let Some(&next) = chars.peek() {
                    if !next.is_ascii_digit() {
                        break;
                    }
                    run.push(next);
                    chars.next();
                }
                let significant = run.trim_start_matches('0');
                let leading_zeros = run.len() - significant.len();
                key.primary.push(Primary {
                    class: CharClass::Digit,
                    magnitude: significant.len(),
                    text: significant.to_string(),
                });
                key.secondary.push(0);
                key.tertiary.push(leading_zeros as u32);
                continue;
            }

            let (base, accented) = fold_accent(c);
            key.primary.push(Primary {
                class: CharClass::of(c),
                magnitude: 0,
                text: base.to_lowercase().collect(),
            });
            key.secondary.push(u8::from(accented));
            key.tertiary.push(self.case_weight(c));
        }

        key
    }

    fn case_weight(&self, c: char) -> u32 {
        let upper = c.is_uppercase();
        match (self.case_first, upper) {
            (CaseFirst::Lower, false) | (CaseFirst::Upper, true) => 0,
            _ => 1,
        }
    }
}

/// Map common Latin accented letters to their base letter
fn fold_accent(c: char) -> (char, bool) {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'ç' => 'c',
        'Ç' => 'C',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        _ => return (c, false),
    };
    (base, true)
}
