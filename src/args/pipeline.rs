//! Parser assembly
//!
//! A [Parser] bundles a validated [CommandSpec] with a [ParserConfig]
//! and the pre-compiled negative-number matcher. Construction performs
//! every remaining validation, so `parse` can only fail with parse
//! errors. A constructed parser is immutable and freely shareable
//! across threads; concurrent parses are independent.

use crate::args::error::{ParseError, SpecError};
use crate::args::outcome::ParseResult;
use crate::args::parsing::engine;
use crate::args::pattern::{NegativeNumberMatcher, DEFAULT_NEGATIVE_NUMBER_PATTERN};
use crate::args::spec::CommandSpec;

/// Parser behavior switches. Immutable once the parser is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Classify pattern-matching tokens that start with `-` as values
    /// rather than options, where a value can go.
    pub allow_negative_numbers: bool,
    /// Replacement for [DEFAULT_NEGATIVE_NUMBER_PATTERN]. Validated at
    /// parser construction; unused while `allow_negative_numbers` is off.
    pub negative_number_pattern: Option<String>,
}

impl Default for ParserConfig {
    fn default() -> ParserConfig {
        ParserConfig {
            allow_negative_numbers: false,
            negative_number_pattern: None,
        }
    }
}

/// An immutable, reentrant argument parser for one command spec.
#[derive(Debug, Clone)]
pub struct Parser {
    spec: CommandSpec,
    config: ParserConfig,
    matcher: Option<NegativeNumberMatcher>,
}

impl Parser {
    /// Build a parser. When negative numbers are enabled the pattern is
    /// compiled and vetted here, once; classification reuses the compiled
    /// matcher.
    pub fn new(spec: CommandSpec, config: ParserConfig) -> Result<Parser, SpecError> {
        let matcher = if config.allow_negative_numbers {
            let pattern = config
                .negative_number_pattern
                .as_deref()
                .unwrap_or(DEFAULT_NEGATIVE_NUMBER_PATTERN);
            Some(NegativeNumberMatcher::compile(pattern)?)
        } else {
            None
        };
        Ok(Parser {
            spec,
            config,
            matcher,
        })
    }

    /// Build a parser with the default configuration.
    pub fn with_defaults(spec: CommandSpec) -> Result<Parser, SpecError> {
        Parser::new(spec, ParserConfig::default())
    }

    pub fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a pre-split argument vector. The input is read, never
    /// modified; empty strings and non-ASCII tokens pass through verbatim.
    pub fn parse<I, T>(&self, tokens: I) -> Result<ParseResult, ParseError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(|token| token.as_ref().to_string())
            .collect();
        engine::parse_level(
            &self.spec,
            self.matcher.as_ref(),
            &tokens,
            0,
            vec![self.spec.name().to_string()],
        )
    }
}
