//! Negative-number pattern validation and matching
//!
//! When negative-number parsing is enabled, tokens that start with `-`
//! are tested against a pattern to decide whether they are numeric
//! values rather than options. The pattern is user-replaceable, so it is
//! vetted at parser construction through three gates, in order:
//!
//! 1. Compile: the pattern must be a valid regular expression.
//! 2. Non-empty match: the compiled pattern must not match the empty
//!    string. A pattern that does would classify a lone `-` (and
//!    worse) as a number.
//! 3. Nested quantifiers: a quantified group whose interior itself
//!    carries `+` or `*` is rejected. The check is the textual
//!    heuristic `\([^)]*[+*][^)]*\)[+*]`; alternation-based
//!    catastrophic patterns are not caught by it.
//!
//! Every gate failure is a [SpecError::InvalidPattern]. The compiled
//! matcher is built once per parser and reused for every classification.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::args::error::SpecError;

/// Pattern used when the configuration does not supply one: an optionally
/// fractional decimal number with an optional exponent.
pub const DEFAULT_NEGATIVE_NUMBER_PATTERN: &str = r"^-\d+\.?\d*([eE][+-]?\d+)?$";

/// Textual heuristic for a quantified group with a quantifier inside it.
static NESTED_QUANTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^)]*[+*][^)]*\)[+*]").unwrap());

/// A vetted, pre-compiled negative-number matcher.
#[derive(Debug, Clone)]
pub struct NegativeNumberMatcher {
    regex: Regex,
}

impl NegativeNumberMatcher {
    /// Compile and vet a pattern. Gates run in order; the first failure wins.
    pub fn compile(pattern: &str) -> Result<NegativeNumberMatcher, SpecError> {
        let regex = Regex::new(pattern).map_err(|err| SpecError::InvalidPattern {
            reason: format!("pattern does not compile: {err}"),
        })?;
        if regex.is_match("") {
            return Err(SpecError::InvalidPattern {
                reason: format!("pattern '{pattern}' matches the empty string"),
            });
        }
        if NESTED_QUANTIFIER.is_match(pattern) {
            return Err(SpecError::InvalidPattern {
                reason: format!(
                    "pattern '{pattern}' contains a quantified group with a nested quantifier"
                ),
            });
        }
        Ok(NegativeNumberMatcher { regex })
    }

    /// The vetted default matcher.
    pub fn default_pattern() -> NegativeNumberMatcher {
        // The default passes all three gates; see tests below.
        NegativeNumberMatcher::compile(DEFAULT_NEGATIVE_NUMBER_PATTERN)
            .expect("default negative-number pattern is valid")
    }

    /// Whether `token` is a negative-number literal under this pattern.
    ///
    /// Tokens without a leading `-` never match, independent of the pattern.
    pub fn matches(&self, token: &str) -> bool {
        token.starts_with('-') && self.regex.is_match(token)
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}
