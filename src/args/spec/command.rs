//! Command declarations
//!
//! A [CommandSpec] is the immutable root of everything the parser knows:
//! options, positionals in order, subcommands, and constraint rules. It
//! is produced by a fluent [CommandSpecBuilder] whose `build` performs
//! every cross-field validation in one place:
//!
//! - long names unique within the command
//! - short names unique within the command
//! - subcommand names distinct, and distinct from option long names
//! - at most one positional that can hold more than one value, and
//!   it must be last (later slots would be unreachable)
//! - flags keep zero arity
//! - defaults only on value-taking options
//! - constraint rules refer only to declared options
//!
//! Violations fail fast with [SpecError::InvalidSpec]; a `CommandSpec`
//! in circulation always satisfies all of the above.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::args::constraint::Constraint;
use crate::args::error::SpecError;

use super::option::OptionSpec;
use super::positional::PositionalSpec;

/// Immutable declaration of one command level. Serializable for inspection;
/// construction goes through the validating builder only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    name: String,
    options: Vec<OptionSpec>,
    positionals: Vec<PositionalSpec>,
    subcommands: Vec<CommandSpec>,
    constraints: Vec<Constraint>,
}

impl CommandSpec {
    pub fn builder(name: impl Into<String>) -> CommandSpecBuilder {
        CommandSpecBuilder {
            name: name.into(),
            options: Vec::new(),
            positionals: Vec::new(),
            subcommands: Vec::new(),
            constraints: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    pub fn positionals(&self) -> &[PositionalSpec] {
        &self.positionals
    }

    pub fn subcommands(&self) -> &[CommandSpec] {
        &self.subcommands
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Look up an option by its long name.
    pub fn find_long(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|opt| opt.long_name() == name)
    }

    /// Look up an option by its short name.
    pub fn find_short(&self, short: char) -> Option<&OptionSpec> {
        self.options.iter().find(|opt| opt.short_name() == Some(short))
    }

    /// Look up a subcommand by name.
    pub fn subcommand(&self, name: &str) -> Option<&CommandSpec> {
        self.subcommands.iter().find(|sub| sub.name() == name)
    }
}

/// Fluent builder for [CommandSpec]. All validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct CommandSpecBuilder {
    name: String,
    options: Vec<OptionSpec>,
    positionals: Vec<PositionalSpec>,
    subcommands: Vec<CommandSpec>,
    constraints: Vec<Constraint>,
}

impl CommandSpecBuilder {
    pub fn option(mut self, option: OptionSpec) -> CommandSpecBuilder {
        self.options.push(option);
        self
    }

    pub fn positional(mut self, positional: PositionalSpec) -> CommandSpecBuilder {
        self.positionals.push(positional);
        self
    }

    pub fn subcommand(mut self, subcommand: CommandSpec) -> CommandSpecBuilder {
        self.subcommands.push(subcommand);
        self
    }

    pub fn constraint(mut self, constraint: Constraint) -> CommandSpecBuilder {
        self.constraints.push(constraint);
        self
    }

    pub fn build(self) -> Result<CommandSpec, SpecError> {
        let CommandSpecBuilder {
            name,
            options,
            positionals,
            subcommands,
            constraints,
        } = self;

        let invalid = |reason: String| SpecError::InvalidSpec { reason };

        let mut longs = BTreeSet::new();
        let mut shorts = BTreeSet::new();
        for option in &options {
            if option.long_name().is_empty() {
                return Err(invalid(format!(
                    "command '{name}' declares an option with an empty long name"
                )));
            }
            if !longs.insert(option.long_name()) {
                return Err(invalid(format!(
                    "command '{name}' declares option '--{}' more than once",
                    option.long_name()
                )));
            }
            if let Some(short) = option.short_name() {
                if !shorts.insert(short) {
                    return Err(invalid(format!(
                        "command '{name}' declares short option '-{short}' more than once"
                    )));
                }
            }
            if option.is_flag() && option.value_arity().max() != Some(0) {
                return Err(invalid(format!(
                    "flag '--{}' must keep zero arity, found {}",
                    option.long_name(),
                    option.value_arity()
                )));
            }
            if option.default().is_some() && !option.takes_values() {
                return Err(invalid(format!(
                    "zero-arity option '--{}' cannot carry a default value",
                    option.long_name()
                )));
            }
        }

        let mut positional_names = BTreeSet::new();
        for positional in &positionals {
            if !positional_names.insert(positional.name()) {
                return Err(invalid(format!(
                    "command '{name}' declares positional '{}' more than once",
                    positional.name()
                )));
            }
        }
        // Any slot that can hold more than one value swallows everything, so
        // it must be the last slot.
        for positional in positionals.iter().rev().skip(1) {
            if positional.is_variadic() {
                return Err(invalid(format!(
                    "positional '{}' accepts multiple values but is not last; later \
                     positionals would be unreachable",
                    positional.name()
                )));
            }
        }

        let mut sub_names = BTreeSet::new();
        for sub in &subcommands {
            if !sub_names.insert(sub.name()) {
                return Err(invalid(format!(
                    "command '{name}' declares subcommand '{}' more than once",
                    sub.name()
                )));
            }
            if longs.contains(sub.name()) {
                return Err(invalid(format!(
                    "subcommand '{}' collides with option '--{}'",
                    sub.name(),
                    sub.name()
                )));
            }
        }

        for constraint in &constraints {
            for referenced in constraint.referenced_options() {
                if !longs.contains(referenced) {
                    return Err(invalid(format!(
                        "constraint {constraint} refers to undeclared option '--{referenced}'"
                    )));
                }
            }
        }

        Ok(CommandSpec {
            name,
            options,
            positionals,
            subcommands,
            constraints,
        })
    }
}
