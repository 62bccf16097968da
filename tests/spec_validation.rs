//! Integration tests for spec construction validation
//!
//! Every structural invariant fails fast at build time with a reason; a
//! spec that builds is safe to parse against.

use aclaf::{Arity, CommandSpec, Constraint, OptionSpec, PositionalSpec, SpecError};
use rstest::rstest;

fn reason(err: SpecError) -> String {
    match err {
        SpecError::InvalidSpec { reason } => reason,
        other => panic!("expected InvalidSpec, got {other:?}"),
    }
}

#[test]
fn arity_construction_validates_bounds() {
    assert!(Arity::new(0, Some(0)).is_ok());
    assert!(Arity::new(2, None).is_ok());
    assert!(Arity::new(2, Some(2)).is_ok());
    let err = Arity::new(2, Some(1)).unwrap_err();
    assert!(matches!(err, SpecError::InvalidArity { .. }));
}

#[rstest]
#[case::long_collision(
    CommandSpec::builder("app")
        .option(OptionSpec::new("output"))
        .option(OptionSpec::flag("output")),
    "output"
)]
#[case::short_collision(
    CommandSpec::builder("app")
        .option(OptionSpec::new("output").short('o'))
        .option(OptionSpec::flag("overwrite").short('o')),
    "-o"
)]
fn name_collisions_are_rejected(
    #[case] builder: aclaf::args::spec::CommandSpecBuilder,
    #[case] mentioned: &str,
) {
    let message = reason(builder.build().unwrap_err());
    assert!(
        message.contains(mentioned),
        "expected '{mentioned}' in '{message}'"
    );
}

#[test]
fn duplicate_positional_names_are_rejected() {
    let err = CommandSpec::builder("app")
        .positional(PositionalSpec::new("input", Arity::EXACTLY_ONE))
        .positional(PositionalSpec::new("input", Arity::EXACTLY_ONE))
        .build()
        .unwrap_err();
    assert!(reason(err).contains("input"));
}

#[test]
fn only_the_last_positional_may_be_variadic() {
    let err = CommandSpec::builder("app")
        .positional(PositionalSpec::new("inputs", Arity::ONE_OR_MORE))
        .positional(PositionalSpec::new("output", Arity::EXACTLY_ONE))
        .build()
        .unwrap_err();
    assert!(reason(err).contains("unreachable"));

    // A bounded multi-value slot counts as variadic too.
    let err = CommandSpec::builder("app")
        .positional(PositionalSpec::new("pair", Arity::new(2, Some(2)).unwrap()))
        .positional(PositionalSpec::new("output", Arity::EXACTLY_ONE))
        .build()
        .unwrap_err();
    assert!(reason(err).contains("unreachable"));
}

#[test]
fn flag_arity_must_stay_zero() {
    let err = CommandSpec::builder("app")
        .option(OptionSpec::flag("verbose").arity(Arity::EXACTLY_ONE))
        .build()
        .unwrap_err();
    assert!(reason(err).contains("verbose"));
}

#[test]
fn subcommand_name_collisions_are_rejected() {
    let a = CommandSpec::builder("sync").build().unwrap();
    let b = CommandSpec::builder("sync").build().unwrap();
    let err = CommandSpec::builder("app")
        .subcommand(a)
        .subcommand(b)
        .build()
        .unwrap_err();
    assert!(reason(err).contains("sync"));
}

#[test]
fn subcommand_option_collision_is_rejected() {
    let sub = CommandSpec::builder("list").build().unwrap();
    let err = CommandSpec::builder("app")
        .option(OptionSpec::new("list"))
        .subcommand(sub)
        .build()
        .unwrap_err();
    assert!(reason(err).contains("list"));
}

#[test]
fn constraint_must_reference_declared_options() {
    let err = CommandSpec::builder("app")
        .option(OptionSpec::flag("json"))
        .constraint(Constraint::exactly_one_of(["json", "toml"]))
        .build()
        .unwrap_err();
    assert!(reason(err).contains("toml"));
}

#[test]
fn default_on_zero_arity_option_is_rejected() {
    let err = CommandSpec::builder("app")
        .option(OptionSpec::flag("verbose").default_value("yes"))
        .build()
        .unwrap_err();
    assert!(reason(err).contains("verbose"));
}

#[test]
fn same_short_across_sibling_commands_is_fine() {
    // Uniqueness is per command level, not global.
    let add = CommandSpec::builder("add")
        .option(OptionSpec::flag("verbose").short('v'))
        .build()
        .unwrap();
    let spec = CommandSpec::builder("app")
        .option(OptionSpec::flag("verbose").short('v'))
        .subcommand(add)
        .build();
    assert!(spec.is_ok());
}
