//! Argument parsing core
//!
//! A parse call flows through the submodules in order: raw tokens are
//! classified one at a time ([classifying]), the dispatch engine applies
//! the transition for each class ([parsing]), occurrences are collapsed
//! into final values ([accumulating]), constraint rules are checked
//! ([constraint]), and the immutable result is assembled ([outcome]).
//! The [spec] module holds the declarations all of this runs against,
//! [pattern] the negative-number matcher, and [error] the two error
//! families.

pub mod accumulating;
pub mod classifying;
pub mod constraint;
pub mod error;
pub mod outcome;
pub mod parsing;
pub mod pattern;
pub mod pipeline;
pub mod spec;
pub mod testing;

pub use constraint::Constraint;
pub use error::{ParseError, SpecError};
pub use outcome::{OptionValue, ParseResult};
pub use pattern::DEFAULT_NEGATIVE_NUMBER_PATTERN;
pub use pipeline::{Parser, ParserConfig};
pub use spec::{AccumulationMode, Arity, CommandSpec, OptionSpec, PositionalSpec};
