//! Dispatch engine
//!
//! The single left-to-right pass that turns a classified token stream
//! into a parse result. Each token is classified against the current
//! state and dispatched:
//!
//! - options open an occurrence and, unless an inline value settles
//!   it, consume following tokens as values within their arity
//!   bounds
//! - positionals and negative-number literals fill positional slots
//! - the delimiter closes option interpretation for the rest of the
//!   stream
//! - a subcommand keyword finishes this level and recurses into the
//!   child spec with the remaining tokens
//!
//! Value consumption for a pending option stops when its max arity is
//! reached, when an option-shaped token arrives with the min already
//! satisfied, or at the delimiter. A token the negative-number pattern
//! accepts is consumed as a value even though it starts with `-`, and an
//! option-shaped token arriving before the min is satisfied is consumed
//! as a value too; the occurrence is checked against its bounds when it
//! is finalized.
//!
//! Errors are values all the way through; nothing in this module panics
//! on user input.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::args::accumulating::{collapse, Occurrence};
use crate::args::classifying::{classify, ClassifyContext, TokenClass};
use crate::args::error::ParseError;
use crate::args::outcome::ParseResult;
use crate::args::pattern::NegativeNumberMatcher;
use crate::args::spec::{CommandSpec, OptionSpec};

use super::state::ParseState;

/// Parse `tokens` against one command level. `base` is the offset of
/// `tokens[0]` in the original argument vector; `command_path` already ends
/// with this level's command name.
pub(crate) fn parse_level(
    spec: &CommandSpec,
    matcher: Option<&NegativeNumberMatcher>,
    tokens: &[String],
    base: usize,
    command_path: Vec<String>,
) -> Result<ParseResult, ParseError> {
    let mut state = ParseState::new(spec);
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        let ctx = ClassifyContext {
            spec,
            matcher,
            after_delimiter: state.after_delimiter,
            value_consuming: false,
            positional_open: state.positional_open(),
            subcommands_open: state.subcommands_open(),
        };
        match classify(token, &ctx) {
            TokenClass::Delimiter => {
                state.after_delimiter = true;
                i += 1;
            }
            TokenClass::LongOption { name, inline } => {
                let Some(option) = spec.find_long(name) else {
                    return Err(ParseError::UnknownOption {
                        option: format!("--{name}"),
                        index: base + i,
                        command_path,
                        numeric_hint: false,
                    });
                };
                i = open_occurrence(
                    option,
                    option.display_name(),
                    inline,
                    spec,
                    matcher,
                    tokens,
                    i,
                    base,
                    &command_path,
                    &mut state,
                )?;
            }
            TokenClass::ShortCluster { body } => {
                i = dispatch_cluster(
                    body,
                    spec,
                    matcher,
                    tokens,
                    i,
                    base,
                    &command_path,
                    &mut state,
                )?;
            }
            TokenClass::Subcommand { name } => {
                if let Some(child) = spec.subcommand(name) {
                    let mut child_path = command_path.clone();
                    child_path.push(child.name().to_string());
                    let child_result =
                        parse_level(child, matcher, &tokens[i + 1..], base + i + 1, child_path)?;
                    return finish_level(spec, state, command_path, Some(child_result));
                }
                // The classifier only emits declared names; an undeclared one
                // would be a positional anyway.
                if !state.push_positional(token.clone()) {
                    return Err(ParseError::TooManyPositionals {
                        index: base + i,
                        command_path,
                    });
                }
                i += 1;
            }
            TokenClass::NegativeNumber | TokenClass::Positional => {
                if !state.push_positional(token.clone()) {
                    return Err(ParseError::TooManyPositionals {
                        index: base + i,
                        command_path,
                    });
                }
                i += 1;
            }
            TokenClass::MalformedOption => {
                return Err(ParseError::UnknownOption {
                    option: token.clone(),
                    index: base + i,
                    command_path,
                    numeric_hint: false,
                });
            }
        }
    }

    finish_level(spec, state, command_path, None)
}

/// Record one occurrence of `option`, whose name token sits at `i`. Returns
/// the index of the next unconsumed token.
#[allow(clippy::too_many_arguments)]
fn open_occurrence(
    option: &OptionSpec,
    spelled: String,
    inline: Option<&str>,
    spec: &CommandSpec,
    matcher: Option<&NegativeNumberMatcher>,
    tokens: &[String],
    i: usize,
    base: usize,
    command_path: &[String],
    state: &mut ParseState<'_>,
) -> Result<usize, ParseError> {
    if let Some(value) = inline {
        if !option.takes_values() {
            return Err(ParseError::FlagTakesNoValue {
                option: spelled,
                index: base + i,
                command_path: command_path.to_vec(),
            });
        }
        // An inline value settles the occurrence; it never spills into
        // following tokens, so the bounds check is against exactly one value.
        if !option.value_arity().satisfied_by(1) {
            return Err(ParseError::InsufficientOptionValues {
                option: spelled,
                index: base + i,
                command_path: command_path.to_vec(),
            });
        }
        state.record_occurrence(
            option.long_name(),
            Occurrence {
                index: base + i,
                values: vec![value.to_string()],
            },
        );
        return Ok(i + 1);
    }
    if !option.takes_values() {
        state.record_occurrence(
            option.long_name(),
            Occurrence {
                index: base + i,
                values: Vec::new(),
            },
        );
        return Ok(i + 1);
    }
    let (values, next) = consume_values(option, spec, matcher, tokens, i + 1);
    if !option.value_arity().satisfied_by(values.len()) {
        return Err(ParseError::InsufficientOptionValues {
            option: spelled,
            index: base + i,
            command_path: command_path.to_vec(),
        });
    }
    state.record_occurrence(
        option.long_name(),
        Occurrence {
            index: base + i,
            values,
        },
    );
    Ok(next)
}

/// Collect values for a pending option starting at token `i`. Returns the
/// values and the index of the first unconsumed token. Bounds are not
/// checked here; the caller finalizes the occurrence.
fn consume_values(
    option: &OptionSpec,
    spec: &CommandSpec,
    matcher: Option<&NegativeNumberMatcher>,
    tokens: &[String],
    mut i: usize,
) -> (Vec<String>, usize) {
    let arity = option.value_arity();
    let mut values = Vec::new();
    while arity.admits_more(values.len()) {
        let Some(token) = tokens.get(i) else {
            break;
        };
        let ctx = ClassifyContext {
            spec,
            matcher,
            after_delimiter: false,
            value_consuming: true,
            positional_open: false,
            subcommands_open: false,
        };
        match classify(token, &ctx) {
            TokenClass::Delimiter => break,
            TokenClass::LongOption { .. }
            | TokenClass::ShortCluster { .. }
            | TokenClass::MalformedOption => {
                if arity.satisfied_by(values.len()) {
                    break;
                }
                values.push(token.clone());
                i += 1;
            }
            TokenClass::NegativeNumber
            | TokenClass::Positional
            | TokenClass::Subcommand { .. } => {
                values.push(token.clone());
                i += 1;
            }
        }
    }
    (values, i)
}

/// Dispatch a short-option token. Every character must resolve to a declared
/// short; the first value-taking character consumes the rest of the token as
/// its glued value, or opens a pending occurrence when it is last.
#[allow(clippy::too_many_arguments)]
fn dispatch_cluster(
    body: &str,
    spec: &CommandSpec,
    matcher: Option<&NegativeNumberMatcher>,
    tokens: &[String],
    i: usize,
    base: usize,
    command_path: &[String],
    state: &mut ParseState<'_>,
) -> Result<usize, ParseError> {
    for (pos, c) in body.char_indices() {
        let spelled = format!("-{c}");
        let Some(option) = spec.find_short(c) else {
            return Err(ParseError::UnknownOption {
                option: spelled,
                index: base + i,
                command_path: command_path.to_vec(),
                numeric_hint: matcher.is_none() && c.is_ascii_digit(),
            });
        };
        let rest = &body[pos + c.len_utf8()..];
        if option.takes_values() {
            if rest.is_empty() {
                return open_occurrence(
                    option, spelled, None, spec, matcher, tokens, i, base, command_path, state,
                );
            }
            // Glued value; a leading `=` is inline-value syntax, anything
            // after it belongs to the value.
            let value = rest.strip_prefix('=').unwrap_or(rest);
            return open_occurrence(
                option,
                spelled,
                Some(value),
                spec,
                matcher,
                tokens,
                i,
                base,
                command_path,
                state,
            );
        }
        if rest.starts_with('=') {
            return Err(ParseError::FlagTakesNoValue {
                option: spelled,
                index: base + i,
                command_path: command_path.to_vec(),
            });
        }
        state.record_occurrence(
            option.long_name(),
            Occurrence {
                index: base + i,
                values: Vec::new(),
            },
        );
    }
    Ok(i + 1)
}

/// Finalize a level: enforce positional minima, collapse occurrences, check
/// constraints, and build the result.
fn finish_level(
    spec: &CommandSpec,
    state: ParseState<'_>,
    command_path: Vec<String>,
    subcommand: Option<ParseResult>,
) -> Result<ParseResult, ParseError> {
    for (positional, values) in spec.positionals().iter().zip(state.positional_values()) {
        if !positional.value_arity().satisfied_by(values.len()) {
            return Err(ParseError::MissingPositional {
                positional: positional.name().to_string(),
                command_path,
            });
        }
    }

    let mut options = BTreeMap::new();
    for option in spec.options() {
        let occurrences = state
            .option_occurrences
            .get(option.long_name())
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let value = collapse(option, occurrences, &command_path)?;
        options.insert(option.long_name().to_string(), value);
    }

    let present: BTreeSet<&str> = state
        .option_occurrences
        .keys()
        .map(String::as_str)
        .collect();
    for constraint in spec.constraints() {
        if let Some(message) = constraint.check(&present) {
            return Err(ParseError::ConstraintViolation {
                message,
                command_path,
            });
        }
    }

    let positionals = spec
        .positionals()
        .iter()
        .map(|positional| positional.name().to_string())
        .zip(state.into_positional_values())
        .collect();

    Ok(ParseResult::new(
        spec.name().to_string(),
        options,
        positionals,
        subcommand,
    ))
}
