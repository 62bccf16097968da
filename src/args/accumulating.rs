//! Occurrence accumulation
//!
//! The dispatch engine records raw per-occurrence value vectors and
//! nothing else; this module collapses them into final option values in
//! a separate pass. Keeping the collapse out of the dispatcher leaves it
//! free of mode-specific branching and makes this a pure function of
//! occurrences + spec, testable on its own.
//!
//! The dispatch over [AccumulationMode] is a total match: a new mode is
//! a compile error here until it is handled.

use crate::args::error::ParseError;
use crate::args::outcome::OptionValue;
use crate::args::spec::{AccumulationMode, OptionSpec};

/// One appearance of an option on the input: the index of its name token and
/// the values that occurrence collected. Empty values mean a bare flag or a
/// satisfied zero-minimum occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Occurrence {
    pub index: usize,
    pub values: Vec<String>,
}

/// Collapse the occurrences of one option into its final value.
///
/// Never-observed options yield the declared default, or
/// [OptionValue::Unset]. The selection modes return the chosen occurrence's
/// whole payload, which may legitimately be empty.
pub(crate) fn collapse(
    option: &OptionSpec,
    occurrences: &[Occurrence],
    command_path: &[String],
) -> Result<OptionValue, ParseError> {
    if occurrences.is_empty() {
        return Ok(match option.default() {
            Some(default) => OptionValue::Values(vec![default.to_string()]),
            None => OptionValue::Unset,
        });
    }
    match option.accumulation() {
        AccumulationMode::Collect => Ok(OptionValue::Values(
            occurrences
                .iter()
                .flat_map(|occurrence| occurrence.values.iter().cloned())
                .collect(),
        )),
        AccumulationMode::Count => Ok(OptionValue::Count(occurrences.len() as u64)),
        AccumulationMode::FirstWins => Ok(OptionValue::Values(occurrences[0].values.clone())),
        AccumulationMode::LastWins => Ok(OptionValue::Values(
            occurrences[occurrences.len() - 1].values.clone(),
        )),
        AccumulationMode::Error => {
            if occurrences.len() > 1 {
                return Err(ParseError::OptionCannotBeSpecifiedMultipleTimes {
                    option: option.display_name(),
                    index: occurrences[1].index,
                    command_path: command_path.to_vec(),
                });
            }
            Ok(OptionValue::Values(occurrences[0].values.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::spec::Arity;

    fn occurrence(index: usize, values: &[&str]) -> Occurrence {
        Occurrence {
            index,
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    fn path() -> Vec<String> {
        vec!["app".to_string()]
    }

    #[test]
    fn collect_flattens_in_order() {
        let option = OptionSpec::new("input")
            .arity(Arity::ONE_OR_MORE)
            .accumulate(AccumulationMode::Collect);
        let value = collapse(
            &option,
            &[occurrence(0, &["a", "b"]), occurrence(3, &["c"])],
            &path(),
        )
        .unwrap();
        assert_eq!(
            value,
            OptionValue::Values(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn count_ignores_payloads() {
        let option = OptionSpec::flag("verbose");
        let value = collapse(
            &option,
            &[occurrence(0, &[]), occurrence(1, &[]), occurrence(2, &[])],
            &path(),
        )
        .unwrap();
        assert_eq!(value, OptionValue::Count(3));
    }

    #[test]
    fn first_and_last_select_whole_payloads() {
        let option = OptionSpec::new("mode").accumulate(AccumulationMode::FirstWins);
        let occurrences = [occurrence(0, &["fast"]), occurrence(2, &["slow"])];
        assert_eq!(
            collapse(&option, &occurrences, &path()).unwrap(),
            OptionValue::Values(vec!["fast".to_string()])
        );

        let option = OptionSpec::new("mode").accumulate(AccumulationMode::LastWins);
        assert_eq!(
            collapse(&option, &occurrences, &path()).unwrap(),
            OptionValue::Values(vec!["slow".to_string()])
        );
    }

    #[test]
    fn first_wins_with_empty_payload_does_not_panic() {
        // An occurrence with zero values under a zero-minimum arity is legal;
        // selection must return the empty payload rather than index into it.
        let option = OptionSpec::new("opt")
            .arity(Arity::new(0, Some(5)).unwrap())
            .accumulate(AccumulationMode::FirstWins);
        let value = collapse(&option, &[occurrence(0, &[])], &path()).unwrap();
        assert_eq!(value, OptionValue::Values(vec![]));
    }

    #[test]
    fn error_mode_rejects_second_occurrence() {
        let option = OptionSpec::new("config").accumulate(AccumulationMode::Error);
        let err = collapse(
            &option,
            &[occurrence(0, &["a.toml"]), occurrence(2, &["b.toml"])],
            &path(),
        )
        .unwrap_err();
        match err {
            ParseError::OptionCannotBeSpecifiedMultipleTimes { option, index, .. } => {
                assert_eq!(option, "--config");
                assert_eq!(index, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn absent_option_yields_unset_or_default() {
        let option = OptionSpec::new("mode");
        assert_eq!(collapse(&option, &[], &path()).unwrap(), OptionValue::Unset);

        let option = OptionSpec::new("mode").default_value("auto");
        assert_eq!(
            collapse(&option, &[], &path()).unwrap(),
            OptionValue::Values(vec!["auto".to_string()])
        );
    }
}
