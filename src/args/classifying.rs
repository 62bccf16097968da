//! Token classification
//!
//! Core classification logic for deciding what a raw token is, given the
//! dispatcher's current state. Classification is a pure function: the
//! same token in the same context always classifies the same way, and
//! every token classifies as something.
//!
//! The rules apply top-down, first match wins:
//!
//! 1. After the end-of-options delimiter, everything is a positional.
//! 2. The literal `--` is the delimiter.
//! 3. The literal `-` is a positional (stdin convention).
//! 4. `--name` / `--name=value` is a long option; only the first `=`
//!    splits, and an empty name is malformed.
//! 5. A token starting with `-` and textually equal to a declared
//!    subcommand is that subcommand.
//! 6. A token starting with `-` is a negative-number literal when the
//!    feature is enabled, the pattern matches, and there is somewhere
//!    for a value to go: either the context is value-consuming, or
//!    the leading short character is undeclared and a positional slot
//!    is open. A declared leading short always wins outside
//!    value-consuming contexts.
//! 7. Any other token starting with `-` is a short-option cluster.
//!    The body is returned raw; inline/glued value resolution needs
//!    spec knowledge and belongs to the dispatcher.
//! 8. A token equal to a declared subcommand, while subcommands are
//!    still recognizable, is a subcommand keyword.
//! 9. Everything else is a positional.

use crate::args::pattern::NegativeNumberMatcher;
use crate::args::spec::CommandSpec;

/// What a raw token is, in the context it appeared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenClass<'t> {
    /// The end-of-options delimiter `--`.
    Delimiter,
    /// A long option, split on the first `=`.
    LongOption {
        name: &'t str,
        inline: Option<&'t str>,
    },
    /// A short-option token; `body` is everything after the leading `-`,
    /// unsplit.
    ShortCluster { body: &'t str },
    /// A declared subcommand keyword.
    Subcommand { name: &'t str },
    /// A token the negative-number pattern accepts as a value.
    NegativeNumber,
    /// A positional value.
    Positional,
    /// An option-shaped token with no name (`--=value`).
    MalformedOption,
}

/// Dispatcher state the classifier consults. Built per token by the engine.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyContext<'a> {
    pub spec: &'a CommandSpec,
    pub matcher: Option<&'a NegativeNumberMatcher>,
    /// The delimiter has been consumed at this level.
    pub after_delimiter: bool,
    /// A pending option is collecting values.
    pub value_consuming: bool,
    /// A positional slot can still accept a value.
    pub positional_open: bool,
    /// No positional has been consumed yet and the delimiter has not been
    /// seen, so subcommand keywords are still recognizable.
    pub subcommands_open: bool,
}

/// Classify one raw token. Total and deterministic given the context.
pub fn classify<'t>(token: &'t str, ctx: &ClassifyContext<'_>) -> TokenClass<'t> {
    if ctx.after_delimiter {
        return TokenClass::Positional;
    }
    if token == "--" {
        return TokenClass::Delimiter;
    }
    if token == "-" {
        return TokenClass::Positional;
    }
    if let Some(rest) = token.strip_prefix("--") {
        let (name, inline) = match rest.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (rest, None),
        };
        if name.is_empty() {
            return TokenClass::MalformedOption;
        }
        return TokenClass::LongOption { name, inline };
    }
    if let Some(body) = token.strip_prefix('-') {
        // A token spelled exactly like a declared subcommand is that
        // subcommand, even when the negative-number pattern would accept it.
        if ctx.subcommands_open && ctx.spec.subcommand(token).is_some() {
            return TokenClass::Subcommand { name: token };
        }
        if let Some(matcher) = ctx.matcher {
            let lead_declared = body
                .chars()
                .next()
                .is_some_and(|lead| ctx.spec.find_short(lead).is_some());
            let negative_context =
                ctx.value_consuming || (!lead_declared && ctx.positional_open);
            if negative_context && matcher.matches(token) {
                return TokenClass::NegativeNumber;
            }
        }
        return TokenClass::ShortCluster { body };
    }
    if ctx.subcommands_open && ctx.spec.subcommand(token).is_some() {
        return TokenClass::Subcommand { name: token };
    }
    TokenClass::Positional
}
