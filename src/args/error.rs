//! Error types for spec construction and parsing
//!
//! Errors are split along the lifecycle boundary: everything that can go
//! wrong while building a spec or a parser is a [SpecError], everything
//! that can go wrong while consuming a token stream is a [ParseError].
//! A parser that constructed successfully never surfaces a construction
//! error at parse time.
//!
//! Parse errors carry the offending token index (where one exists) and
//! the command path from the root spec down to the level that failed, so
//! errors raised inside a subcommand point at the right invocation.

use std::fmt;

/// Errors raised while constructing arities, specs, or parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// Arity bounds are inconsistent (`min > max`).
    InvalidArity { reason: String },
    /// A spec invariant is violated (name collision, misplaced variadic
    /// positional, flag with non-zero arity, constraint naming an
    /// undeclared option).
    InvalidSpec { reason: String },
    /// The negative-number pattern failed one of the validation gates.
    InvalidPattern { reason: String },
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::InvalidArity { reason } => write!(f, "invalid arity: {reason}"),
            SpecError::InvalidSpec { reason } => write!(f, "invalid spec: {reason}"),
            SpecError::InvalidPattern { reason } => {
                write!(f, "invalid negative-number pattern: {reason}")
            }
        }
    }
}

impl std::error::Error for SpecError {}

/// Errors raised while parsing a token stream.
///
/// `command_path` lists command names from the root spec down to the level
/// where the error was raised. `index` is the position of the offending token
/// in the original argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A long or short option name is not declared at the active level.
    ///
    /// `numeric_hint` is set when the token looks like a negative number and
    /// the negative-number feature is disabled; the rendered message then
    /// suggests the disambiguation mechanisms.
    UnknownOption {
        option: String,
        index: usize,
        command_path: Vec<String>,
        numeric_hint: bool,
    },
    /// An inline value was supplied to a zero-arity option.
    FlagTakesNoValue {
        option: String,
        index: usize,
        command_path: Vec<String>,
    },
    /// An option occurrence ended with fewer values than its minimum arity.
    InsufficientOptionValues {
        option: String,
        index: usize,
        command_path: Vec<String>,
    },
    /// A second occurrence of an option with `Error` accumulation mode.
    OptionCannotBeSpecifiedMultipleTimes {
        option: String,
        index: usize,
        command_path: Vec<String>,
    },
    /// A positional arrived after every positional slot was saturated.
    TooManyPositionals {
        index: usize,
        command_path: Vec<String>,
    },
    /// A required positional was under-saturated at end of stream.
    MissingPositional {
        positional: String,
        command_path: Vec<String>,
    },
    /// A command-level constraint rule was violated after a successful parse
    /// of the level.
    ConstraintViolation {
        message: String,
        command_path: Vec<String>,
    },
}

impl ParseError {
    /// The offending token's index in the original argument vector, where
    /// one exists for this error kind.
    pub fn index(&self) -> Option<usize> {
        match self {
            ParseError::UnknownOption { index, .. }
            | ParseError::FlagTakesNoValue { index, .. }
            | ParseError::InsufficientOptionValues { index, .. }
            | ParseError::OptionCannotBeSpecifiedMultipleTimes { index, .. }
            | ParseError::TooManyPositionals { index, .. } => Some(*index),
            ParseError::MissingPositional { .. } | ParseError::ConstraintViolation { .. } => None,
        }
    }

    /// Command names from the root spec down to the failing level.
    pub fn command_path(&self) -> &[String] {
        match self {
            ParseError::UnknownOption { command_path, .. }
            | ParseError::FlagTakesNoValue { command_path, .. }
            | ParseError::InsufficientOptionValues { command_path, .. }
            | ParseError::OptionCannotBeSpecifiedMultipleTimes { command_path, .. }
            | ParseError::TooManyPositionals { command_path, .. }
            | ParseError::MissingPositional { command_path, .. }
            | ParseError::ConstraintViolation { command_path, .. } => command_path,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownOption {
                option,
                index,
                command_path,
                numeric_hint,
            } => {
                write!(
                    f,
                    "unknown option '{option}' at position {index} (command '{}')",
                    command_path.join(" ")
                )?;
                if *numeric_hint {
                    write!(
                        f,
                        "; if this is a negative number, enable negative-number parsing, \
                         place it after '--', or pass it as an option value"
                    )?;
                }
                Ok(())
            }
            ParseError::FlagTakesNoValue {
                option,
                index,
                command_path,
            } => write!(
                f,
                "option '{option}' at position {index} takes no value (command '{}')",
                command_path.join(" ")
            ),
            ParseError::InsufficientOptionValues {
                option,
                index,
                command_path,
            } => write!(
                f,
                "option '{option}' at position {index} received fewer values than required \
                 (command '{}')",
                command_path.join(" ")
            ),
            ParseError::OptionCannotBeSpecifiedMultipleTimes {
                option,
                index,
                command_path,
            } => write!(
                f,
                "option '{option}' cannot be specified multiple times; second occurrence at \
                 position {index} (command '{}')",
                command_path.join(" ")
            ),
            ParseError::TooManyPositionals {
                index,
                command_path,
            } => write!(
                f,
                "unexpected positional argument at position {index}: all positional slots are \
                 filled (command '{}')",
                command_path.join(" ")
            ),
            ParseError::MissingPositional {
                positional,
                command_path,
            } => write!(
                f,
                "missing required positional '{positional}' (command '{}')",
                command_path.join(" ")
            ),
            ParseError::ConstraintViolation {
                message,
                command_path,
            } => write!(f, "{message} (command '{}')", command_path.join(" ")),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_option_renders_hint_only_when_set() {
        let plain = ParseError::UnknownOption {
            option: "-x".to_string(),
            index: 0,
            command_path: vec!["app".to_string()],
            numeric_hint: false,
        };
        assert!(!plain.to_string().contains("negative number"));

        let hinted = ParseError::UnknownOption {
            option: "-1".to_string(),
            index: 0,
            command_path: vec!["app".to_string()],
            numeric_hint: true,
        };
        assert!(hinted.to_string().contains("negative number"));
    }

    #[test]
    fn index_is_reported_where_applicable() {
        let err = ParseError::MissingPositional {
            positional: "input".to_string(),
            command_path: vec!["app".to_string()],
        };
        assert_eq!(err.index(), None);

        let err = ParseError::TooManyPositionals {
            index: 4,
            command_path: vec!["app".to_string(), "sub".to_string()],
        };
        assert_eq!(err.index(), Some(4));
        assert_eq!(err.command_path(), &["app".to_string(), "sub".to_string()]);
    }
}
