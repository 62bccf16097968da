//! Integration tests for negative-number pattern vetting
//!
//! The three gates run in order at parser construction: compile, non-empty
//! match, nested-quantifier heuristic. Every failure is an InvalidPattern
//! raised at build, never at parse.

use aclaf::{CommandSpec, Parser, ParserConfig, SpecError};
use rstest::rstest;

fn try_build(pattern: Option<&str>, enabled: bool) -> Result<Parser, SpecError> {
    let spec = CommandSpec::builder("app").build().unwrap();
    Parser::new(
        spec,
        ParserConfig {
            allow_negative_numbers: enabled,
            negative_number_pattern: pattern.map(str::to_string),
        },
    )
}

fn pattern_reason(pattern: &str) -> String {
    match try_build(Some(pattern), true).unwrap_err() {
        SpecError::InvalidPattern { reason } => reason,
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

#[test]
fn default_pattern_is_accepted() {
    assert!(try_build(None, true).is_ok());
}

#[rstest]
#[case::unclosed_group(r"^-(\d+$")]
#[case::unclosed_class(r"^-[0-9$")]
#[case::dangling_quantifier(r"*")]
fn non_compiling_patterns_fail_the_first_gate(#[case] pattern: &str) {
    assert!(pattern_reason(pattern).contains("compile"));
}

#[rstest]
#[case::bare_star(r".*")]
#[case::all_optional(r"^-?\d*$")]
#[case::empty(r"")]
fn empty_matching_patterns_fail_the_second_gate(#[case] pattern: &str) {
    assert!(pattern_reason(pattern).contains("empty"));
}

#[rstest]
#[case::plus_in_plus(r"^-(\d+)+$")]
#[case::star_in_star(r"^-(a*)*$")]
#[case::mixed(r"^-(x+y)*$")]
fn nested_quantifier_patterns_fail_the_third_gate(#[case] pattern: &str) {
    assert!(pattern_reason(pattern).contains("nested"));
}

#[test]
fn optional_groups_pass_the_heuristic() {
    // The default pattern's own exponent group has this shape.
    assert!(try_build(Some(r"^-\d+([eE][+-]?\d+)?$"), true).is_ok());
}

#[test]
fn gates_do_not_run_while_the_feature_is_off() {
    assert!(try_build(Some(r"("), false).is_ok());
    assert!(try_build(Some(r".*"), false).is_ok());
}

#[test]
fn compile_gate_reports_before_the_nesting_gate() {
    // Both broken and nested; the compile failure wins.
    assert!(pattern_reason(r"^-((\d+)+$").contains("compile"));
}
