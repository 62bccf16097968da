//! # aclaf
//!
//! A command-line argument parser library. A [Parser] turns a pre-split
//! argument vector into an immutable [ParseResult] according to a
//! user-supplied [CommandSpec]: long and short options with arity bounds and
//! accumulation policies, ordered positionals, nested subcommands, the `--`
//! end-of-options delimiter, and opt-in negative-number disambiguation with
//! a vetted pattern.
//!
//! The parser returns strings; value conversion, help rendering, and shell
//! completion are left to the caller. Parsers are immutable after
//! construction and safe to share across threads.
//!
//! ```
//! use aclaf::{Arity, CommandSpec, OptionSpec, Parser, ParserConfig, PositionalSpec};
//!
//! let spec = CommandSpec::builder("calc")
//!     .option(OptionSpec::new("precision").short('p'))
//!     .positional(PositionalSpec::new("values", Arity::ZERO_OR_MORE))
//!     .build()?;
//! let parser = Parser::new(
//!     spec,
//!     ParserConfig {
//!         allow_negative_numbers: true,
//!         negative_number_pattern: None,
//!     },
//! )?;
//!
//! let result = parser.parse(["-p", "2", "-10", "5", "-3"]).unwrap();
//! assert_eq!(result.option("precision").unwrap().first(), Some("2"));
//! assert_eq!(result.positional("values").unwrap(), ["-10", "5", "-3"]);
//! # Ok::<(), aclaf::SpecError>(())
//! ```

pub mod args;

pub use args::{
    AccumulationMode, Arity, CommandSpec, Constraint, OptionSpec, OptionValue, ParseError,
    ParseResult, Parser, ParserConfig, PositionalSpec, SpecError,
    DEFAULT_NEGATIVE_NUMBER_PATTERN,
};
