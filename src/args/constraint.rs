//! Command-level constraint rules
//!
//! Constraints relate the presence of options within one command level.
//! They are declared on the [CommandSpec](crate::args::spec::CommandSpec)
//! and checked after the level parsed successfully, against the set of
//! options that actually occurred on the input. A declared default value
//! does not count as presence.
//!
//! Rules are checked in declaration order; the first violation aborts the
//! parse with a [ParseError::ConstraintViolation](crate::args::error::ParseError).

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// A presence rule over the options of one command level.
///
/// Option names are long names without the `--` prefix; rules naming an
/// undeclared option are rejected when the command spec is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Constraint {
    /// The named options conflict as a group: at most one may be present.
    ConflictsWith { options: Vec<String> },
    /// At most one of the named options may be present.
    MutuallyExclusive { options: Vec<String> },
    /// Exactly one of the named options must be present.
    ExactlyOneOf { options: Vec<String> },
    /// At least one of the named options must be present.
    AtLeastOneOf { options: Vec<String> },
    /// At most one of the named options may be present.
    AtMostOneOf { options: Vec<String> },
    /// If `source` is present, every option in `required` must be too.
    Requires {
        source: String,
        required: Vec<String>,
    },
    /// If `source` is present, no option in `forbidden` may be.
    Forbids {
        source: String,
        forbidden: Vec<String>,
    },
}

fn names(options: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    options.into_iter().map(Into::into).collect()
}

fn spell(names: &[&str]) -> String {
    names
        .iter()
        .map(|n| format!("'--{n}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Constraint {
    pub fn conflicts_with(options: impl IntoIterator<Item = impl Into<String>>) -> Constraint {
        Constraint::ConflictsWith {
            options: names(options),
        }
    }

    pub fn mutually_exclusive(options: impl IntoIterator<Item = impl Into<String>>) -> Constraint {
        Constraint::MutuallyExclusive {
            options: names(options),
        }
    }

    pub fn exactly_one_of(options: impl IntoIterator<Item = impl Into<String>>) -> Constraint {
        Constraint::ExactlyOneOf {
            options: names(options),
        }
    }

    pub fn at_least_one_of(options: impl IntoIterator<Item = impl Into<String>>) -> Constraint {
        Constraint::AtLeastOneOf {
            options: names(options),
        }
    }

    pub fn at_most_one_of(options: impl IntoIterator<Item = impl Into<String>>) -> Constraint {
        Constraint::AtMostOneOf {
            options: names(options),
        }
    }

    pub fn requires(
        source: impl Into<String>,
        required: impl IntoIterator<Item = impl Into<String>>,
    ) -> Constraint {
        Constraint::Requires {
            source: source.into(),
            required: names(required),
        }
    }

    pub fn forbids(
        source: impl Into<String>,
        forbidden: impl IntoIterator<Item = impl Into<String>>,
    ) -> Constraint {
        Constraint::Forbids {
            source: source.into(),
            forbidden: names(forbidden),
        }
    }

    /// Every option name the rule refers to.
    pub(crate) fn referenced_options(&self) -> Vec<&str> {
        match self {
            Constraint::ConflictsWith { options }
            | Constraint::MutuallyExclusive { options }
            | Constraint::ExactlyOneOf { options }
            | Constraint::AtLeastOneOf { options }
            | Constraint::AtMostOneOf { options } => {
                options.iter().map(String::as_str).collect()
            }
            Constraint::Requires { source, required } => {
                let mut all = vec![source.as_str()];
                all.extend(required.iter().map(String::as_str));
                all
            }
            Constraint::Forbids { source, forbidden } => {
                let mut all = vec![source.as_str()];
                all.extend(forbidden.iter().map(String::as_str));
                all
            }
        }
    }

    /// Check the rule against the set of options that occurred on the input.
    /// Returns a violation message, or `None` when the rule holds.
    pub(crate) fn check(&self, present: &BTreeSet<&str>) -> Option<String> {
        fn provided<'a>(options: &'a [String], present: &BTreeSet<&str>) -> Vec<&'a str> {
            options
                .iter()
                .map(String::as_str)
                .filter(|name| present.contains(name))
                .collect()
        }
        match self {
            Constraint::ConflictsWith { options } => {
                let hits = provided(options, present);
                (hits.len() > 1).then(|| {
                    format!(
                        "options {} conflict with each other and cannot be provided together",
                        spell(&hits)
                    )
                })
            }
            Constraint::MutuallyExclusive { options } => {
                let hits = provided(options, present);
                (hits.len() > 1).then(|| {
                    format!(
                        "options {} are mutually exclusive; only one can be provided",
                        spell(&hits)
                    )
                })
            }
            Constraint::ExactlyOneOf { options } => {
                let hits = provided(options, present);
                match hits.len() {
                    1 => None,
                    0 => Some(format!(
                        "exactly one of {} must be provided",
                        spell(&options.iter().map(String::as_str).collect::<Vec<_>>())
                    )),
                    n => Some(format!(
                        "exactly one option required, but {n} provided: {}",
                        spell(&hits)
                    )),
                }
            }
            Constraint::AtLeastOneOf { options } => {
                let hits = provided(options, present);
                hits.is_empty().then(|| {
                    format!(
                        "at least one of {} must be provided",
                        spell(&options.iter().map(String::as_str).collect::<Vec<_>>())
                    )
                })
            }
            Constraint::AtMostOneOf { options } => {
                let hits = provided(options, present);
                (hits.len() > 1).then(|| {
                    format!(
                        "at most one of {} can be provided, but {} were provided",
                        spell(&options.iter().map(String::as_str).collect::<Vec<_>>()),
                        hits.len()
                    )
                })
            }
            Constraint::Requires { source, required } => {
                if !present.contains(source.as_str()) {
                    return None;
                }
                let missing: Vec<&str> = required
                    .iter()
                    .map(String::as_str)
                    .filter(|name| !present.contains(name))
                    .collect();
                (!missing.is_empty()).then(|| {
                    format!("option '--{source}' requires: {}", spell(&missing))
                })
            }
            Constraint::Forbids { source, forbidden } => {
                if !present.contains(source.as_str()) {
                    return None;
                }
                let hits: Vec<&str> = forbidden
                    .iter()
                    .map(String::as_str)
                    .filter(|name| present.contains(name))
                    .collect();
                (!hits.is_empty())
                    .then(|| format!("option '--{source}' forbids: {}", spell(&hits)))
            }
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::ConflictsWith { options } => {
                write!(f, "conflicts-with({})", options.join(", "))
            }
            Constraint::MutuallyExclusive { options } => {
                write!(f, "mutually-exclusive({})", options.join(", "))
            }
            Constraint::ExactlyOneOf { options } => {
                write!(f, "exactly-one-of({})", options.join(", "))
            }
            Constraint::AtLeastOneOf { options } => {
                write!(f, "at-least-one-of({})", options.join(", "))
            }
            Constraint::AtMostOneOf { options } => {
                write!(f, "at-most-one-of({})", options.join(", "))
            }
            Constraint::Requires { source, required } => {
                write!(f, "requires({source} => {})", required.join(", "))
            }
            Constraint::Forbids { source, forbidden } => {
                write!(f, "forbids({source} => {})", forbidden.join(", "))
            }
        }
    }
}
