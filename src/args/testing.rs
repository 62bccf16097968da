//! Testing utilities for parse-result assertions
//!
//! Fluent assertion helpers for [ParseResult], used by the crate's own
//! integration tests and available to downstream test suites. Each
//! helper panics with a message naming the expectation and what was
//! actually found, so a failing test reads without a debugger:
//!
//! ```rust,ignore
//! assert_result(&result)
//!     .command("calc")
//!     .option_values("temp", &["-273.15"])
//!     .positional("values", &["-10", "5", "-3"])
//!     .unset("verbose");
//! ```

use crate::args::outcome::{OptionValue, ParseResult};

/// Entry point for fluent assertions over a parse result.
pub fn assert_result(result: &ParseResult) -> ResultAssert<'_> {
    ResultAssert { result }
}

/// Chained assertions over one [ParseResult].
#[derive(Debug, Clone, Copy)]
pub struct ResultAssert<'r> {
    result: &'r ParseResult,
}

impl<'r> ResultAssert<'r> {
    pub fn command(self, expected: &str) -> Self {
        assert_eq!(
            self.result.command(),
            expected,
            "expected result for command '{expected}', got '{}'",
            self.result.command()
        );
        self
    }

    fn option(self, name: &str) -> &'r OptionValue {
        match self.result.option(name) {
            Some(value) => value,
            None => panic!("option '--{name}' is not declared on this result"),
        }
    }

    /// The option occurred and collected exactly these values, in order.
    pub fn option_values(self, name: &str, expected: &[&str]) -> Self {
        let value = self.option(name);
        match value {
            OptionValue::Values(values) => {
                let actual: Vec<&str> = values.iter().map(String::as_str).collect();
                assert_eq!(
                    actual, expected,
                    "option '--{name}': expected values {expected:?}, got {actual:?}"
                );
            }
            other => panic!("option '--{name}': expected values {expected:?}, got {other:?}"),
        }
        self
    }

    /// The option accumulated to exactly this occurrence count.
    pub fn option_count(self, name: &str, expected: u64) -> Self {
        let value = self.option(name);
        assert_eq!(
            value.count(),
            Some(expected),
            "option '--{name}': expected count {expected}, got {value:?}"
        );
        self
    }

    /// The option never occurred and carries no default.
    pub fn unset(self, name: &str) -> Self {
        let value = self.option(name);
        assert_eq!(
            value,
            &OptionValue::Unset,
            "option '--{name}': expected unset, got {value:?}"
        );
        self
    }

    /// The positional collected exactly these values, in order.
    pub fn positional(self, name: &str, expected: &[&str]) -> Self {
        match self.result.positional(name) {
            Some(values) => {
                let actual: Vec<&str> = values.iter().map(String::as_str).collect();
                assert_eq!(
                    actual, expected,
                    "positional '{name}': expected {expected:?}, got {actual:?}"
                );
            }
            None => panic!("positional '{name}' is not declared on this result"),
        }
        self
    }

    /// No subcommand was invoked.
    pub fn no_subcommand(self) -> Self {
        assert!(
            self.result.subcommand().is_none(),
            "expected no subcommand, got '{}'",
            self.result.subcommand().map(ParseResult::command).unwrap_or("?")
        );
        self
    }

    /// A subcommand was invoked; run nested assertions on its result.
    pub fn subcommand(self, check: impl FnOnce(ResultAssert<'_>)) -> Self {
        match self.result.subcommand() {
            Some(sub) => check(assert_result(sub)),
            None => panic!(
                "expected a subcommand on result for '{}', found none",
                self.result.command()
            ),
        }
        self
    }
}
