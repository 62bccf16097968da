//! Option declarations
//!
//! An [OptionSpec] declares one named option: its long name, optional
//! short name, arity, accumulation mode, and an optional default value.
//! Construction is fluent and infallible; every invariant is checked when
//! the enclosing [CommandSpec](super::command::CommandSpec) is built, so
//! a half-configured spec can never be parsed against.

use serde::Serialize;
use std::fmt;

use super::arity::Arity;

/// Policy for collapsing multiple occurrences of the same option into a
/// single result value.
///
/// The set is closed: the accumulation engine dispatches with a total match,
/// so adding a mode is a compile-visible change everywhere it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccumulationMode {
    /// Occurrences append; the result is one ordered value sequence.
    Collect,
    /// The result is the number of occurrences; value payloads are ignored.
    Count,
    /// The first occurrence's values are kept, later ones discarded.
    FirstWins,
    /// The last occurrence's values are kept.
    LastWins,
    /// A second occurrence is a parse error.
    Error,
}

impl fmt::Display for AccumulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccumulationMode::Collect => "collect",
            AccumulationMode::Count => "count",
            AccumulationMode::FirstWins => "first-wins",
            AccumulationMode::LastWins => "last-wins",
            AccumulationMode::Error => "error",
        };
        write!(f, "{name}")
    }
}

/// Declaration of a single named option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    long: String,
    short: Option<char>,
    arity: Arity,
    is_flag: bool,
    accumulation: AccumulationMode,
    description: String,
    default_value: Option<String>,
}

impl OptionSpec {
    /// A value-taking option. Defaults: arity [Arity::EXACTLY_ONE], last
    /// occurrence wins.
    pub fn new(long: impl Into<String>) -> OptionSpec {
        OptionSpec {
            long: long.into(),
            short: None,
            arity: Arity::EXACTLY_ONE,
            is_flag: false,
            accumulation: AccumulationMode::LastWins,
            description: String::new(),
            default_value: None,
        }
    }

    /// A flag: zero arity, counted occurrences.
    pub fn flag(long: impl Into<String>) -> OptionSpec {
        OptionSpec {
            long: long.into(),
            short: None,
            arity: Arity::ZERO,
            is_flag: true,
            accumulation: AccumulationMode::Count,
            description: String::new(),
            default_value: None,
        }
    }

    pub fn short(mut self, short: char) -> OptionSpec {
        self.short = Some(short);
        self
    }

    pub fn arity(mut self, arity: Arity) -> OptionSpec {
        self.arity = arity;
        self
    }

    pub fn accumulate(mut self, mode: AccumulationMode) -> OptionSpec {
        self.accumulation = mode;
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> OptionSpec {
        self.description = description.into();
        self
    }

    /// Value reported when the option never occurs on the input. Rejected at
    /// spec build for zero-arity options.
    pub fn default_value(mut self, value: impl Into<String>) -> OptionSpec {
        self.default_value = Some(value.into());
        self
    }

    pub fn long_name(&self) -> &str {
        &self.long
    }

    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    pub fn value_arity(&self) -> Arity {
        self.arity
    }

    pub fn is_flag(&self) -> bool {
        self.is_flag
    }

    /// Whether this option consumes values at all (`max > 0`).
    pub fn takes_values(&self) -> bool {
        self.arity.max() != Some(0)
    }

    pub fn accumulation(&self) -> AccumulationMode {
        self.accumulation
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn default(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// The option as the user spells it: `--name`.
    pub fn display_name(&self) -> String {
        format!("--{}", self.long)
    }
}
