//! Integration tests for subcommand resolution
//!
//! Subcommand keywords are only recognized before the first positional at
//! their level and before the delimiter. Recognition hands the remaining
//! tokens to the child spec; the child's result hangs off the parent's.

use aclaf::args::testing::assert_result;
use aclaf::{
    Arity, CommandSpec, OptionSpec, ParseError, Parser, ParserConfig, PositionalSpec,
};

fn calculator() -> CommandSpec {
    let add = CommandSpec::builder("add")
        .positional(PositionalSpec::new("operands", Arity::ONE_OR_MORE))
        .build()
        .unwrap();
    let scale = CommandSpec::builder("scale")
        .option(OptionSpec::new("factor").short('f'))
        .positional(PositionalSpec::new("operands", Arity::ONE_OR_MORE))
        .build()
        .unwrap();
    CommandSpec::builder("calc")
        .option(OptionSpec::flag("verbose").short('v'))
        .subcommand(add)
        .subcommand(scale)
        .build()
        .unwrap()
}

#[test]
fn subcommand_receives_the_remaining_tokens() {
    let parser = Parser::with_defaults(calculator()).unwrap();
    let result = parser.parse(["add", "1", "2", "3"]).unwrap();
    assert_result(&result)
        .command("calc")
        .subcommand(|sub| {
            sub.command("add").positional("operands", &["1", "2", "3"]);
        });
}

#[test]
fn parent_options_may_precede_the_keyword() {
    let parser = Parser::with_defaults(calculator()).unwrap();
    let result = parser.parse(["-v", "scale", "-f", "2", "10"]).unwrap();
    assert_result(&result)
        .option_count("verbose", 1)
        .subcommand(|sub| {
            sub.command("scale")
                .option_values("factor", &["2"])
                .positional("operands", &["10"]);
        });
}

#[test]
fn negative_operands_flow_into_the_subcommand() {
    let parser = Parser::new(
        calculator(),
        ParserConfig {
            allow_negative_numbers: true,
            negative_number_pattern: None,
        },
    )
    .unwrap();
    let result = parser.parse(["add", "-10", "5", "-3"]).unwrap();
    assert_result(&result).subcommand(|sub| {
        sub.positional("operands", &["-10", "5", "-3"]);
    });
}

#[test]
fn keyword_after_a_positional_is_a_positional() {
    let child = CommandSpec::builder("add").build().unwrap();
    let spec = CommandSpec::builder("app")
        .positional(PositionalSpec::new("args", Arity::ZERO_OR_MORE))
        .subcommand(child)
        .build()
        .unwrap();
    let parser = Parser::with_defaults(spec).unwrap();
    let result = parser.parse(["x", "add"]).unwrap();
    assert_result(&result)
        .positional("args", &["x", "add"])
        .no_subcommand();
}

#[test]
fn keyword_after_the_delimiter_is_a_positional() {
    let child = CommandSpec::builder("add").build().unwrap();
    let spec = CommandSpec::builder("app")
        .positional(PositionalSpec::new("args", Arity::ZERO_OR_MORE))
        .subcommand(child)
        .build()
        .unwrap();
    let parser = Parser::with_defaults(spec).unwrap();
    let result = parser.parse(["--", "add"]).unwrap();
    assert_result(&result).positional("args", &["add"]).no_subcommand();
}

#[test]
fn keyword_inside_a_value_window_is_a_value() {
    let child = CommandSpec::builder("add").build().unwrap();
    let spec = CommandSpec::builder("app")
        .option(OptionSpec::new("label"))
        .subcommand(child)
        .build()
        .unwrap();
    let parser = Parser::with_defaults(spec).unwrap();
    let result = parser.parse(["--label", "add"]).unwrap();
    assert_result(&result)
        .option_values("label", &["add"])
        .no_subcommand();
}

#[test]
fn nesting_recurses_through_levels() {
    let leaf = CommandSpec::builder("leaf")
        .positional(PositionalSpec::new("value", Arity::EXACTLY_ONE))
        .build()
        .unwrap();
    let middle = CommandSpec::builder("middle").subcommand(leaf).build().unwrap();
    let root = CommandSpec::builder("root").subcommand(middle).build().unwrap();
    let parser = Parser::with_defaults(root).unwrap();
    let result = parser.parse(["middle", "leaf", "x"]).unwrap();
    assert_result(&result).subcommand(|middle| {
        middle.command("middle").subcommand(|leaf| {
            leaf.command("leaf").positional("value", &["x"]);
        });
    });
}

#[test]
fn child_errors_carry_the_full_command_path() {
    let parser = Parser::with_defaults(calculator()).unwrap();
    let err = parser.parse(["add", "--bogus"]).unwrap_err();
    match err {
        ParseError::UnknownOption {
            option,
            index,
            command_path,
            ..
        } => {
            assert_eq!(option, "--bogus");
            assert_eq!(index, 1);
            assert_eq!(command_path, ["calc".to_string(), "add".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn child_minimums_are_enforced() {
    let parser = Parser::with_defaults(calculator()).unwrap();
    let err = parser.parse(["add"]).unwrap_err();
    assert!(matches!(
        err,
        ParseError::MissingPositional { ref positional, .. } if positional == "operands"
    ));
}

#[test]
fn parent_minimums_are_enforced_when_a_subcommand_runs() {
    let child = CommandSpec::builder("go").build().unwrap();
    let spec = CommandSpec::builder("app")
        .option(OptionSpec::new("profile").arity(Arity::EXACTLY_ONE))
        .positional(PositionalSpec::new("target", Arity::EXACTLY_ONE))
        .subcommand(child)
        .build()
        .unwrap();
    // `go` is recognized before any positional, so `target` never fills.
    let err = Parser::with_defaults(spec).unwrap().parse(["go"]).unwrap_err();
    assert!(matches!(
        err,
        ParseError::MissingPositional { ref positional, .. } if positional == "target"
    ));
}
