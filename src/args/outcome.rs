//! Parse results
//!
//! A [ParseResult] is the immutable outcome of one successful parse.
//! Every option declared on the resolved command appears in it, absent
//! ones as [OptionValue::Unset]; every declared positional appears,
//! possibly empty. Results compare structurally: two parses of the same
//! input on the same parser are equal.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final value of one declared option after accumulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionValue {
    /// The option never occurred and declares no default.
    Unset,
    /// The option's collected values. `Values(vec![])` means the option was
    /// present without values (a bare flag, or a satisfied zero-minimum
    /// occurrence) and is distinct from [OptionValue::Unset].
    Values(Vec<String>),
    /// Occurrence count, for options accumulated with
    /// [AccumulationMode::Count](crate::args::spec::AccumulationMode).
    Count(u64),
}

impl OptionValue {
    /// Whether the option carries a value in the result. Note that a
    /// declared default makes an otherwise absent option present here.
    pub fn is_present(&self) -> bool {
        !matches!(self, OptionValue::Unset)
    }

    /// The collected values, empty for `Unset` and `Count`.
    pub fn values(&self) -> &[String] {
        match self {
            OptionValue::Values(values) => values,
            OptionValue::Unset | OptionValue::Count(_) => &[],
        }
    }

    /// The first collected value, if any.
    pub fn first(&self) -> Option<&str> {
        self.values().first().map(String::as_str)
    }

    /// The occurrence count for `Count` accumulation.
    pub fn count(&self) -> Option<u64> {
        match self {
            OptionValue::Count(count) => Some(*count),
            OptionValue::Unset | OptionValue::Values(_) => None,
        }
    }
}

/// Immutable outcome of one parse level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    command: String,
    options: BTreeMap<String, OptionValue>,
    positionals: BTreeMap<String, Vec<String>>,
    subcommand: Option<Box<ParseResult>>,
}

impl ParseResult {
    pub(crate) fn new(
        command: String,
        options: BTreeMap<String, OptionValue>,
        positionals: BTreeMap<String, Vec<String>>,
        subcommand: Option<ParseResult>,
    ) -> ParseResult {
        ParseResult {
            command,
            options,
            positionals,
            subcommand: subcommand.map(Box::new),
        }
    }

    /// Name of the command this level parsed against.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Value of a declared option. `None` only for names the spec does not
    /// declare; absent-but-declared options are `Some(&OptionValue::Unset)`.
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    /// Values of a declared positional, empty when none arrived.
    pub fn positional(&self, name: &str) -> Option<&[String]> {
        self.positionals.get(name).map(Vec::as_slice)
    }

    /// The nested result for the invoked subcommand, if one was.
    pub fn subcommand(&self) -> Option<&ParseResult> {
        self.subcommand.as_deref()
    }

    /// All option values, keyed by long name.
    pub fn options(&self) -> &BTreeMap<String, OptionValue> {
        &self.options
    }

    /// All positional values, keyed by name.
    pub fn positionals(&self) -> &BTreeMap<String, Vec<String>> {
        &self.positionals
    }
}
