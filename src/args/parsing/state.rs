//! Dispatcher state
//!
//! One struct holds everything the dispatch loop tracks for a command
//! level. Positional values are kept in a vector parallel to the spec's
//! positional declarations; the map form of the result is produced at
//! level finish.

use std::collections::BTreeMap;

use crate::args::accumulating::Occurrence;
use crate::args::spec::CommandSpec;

#[derive(Debug)]
pub(crate) struct ParseState<'s> {
    spec: &'s CommandSpec,
    /// Index into `spec.positionals()` of the slot currently filling.
    positional_cursor: usize,
    /// Values collected per positional, parallel to `spec.positionals()`.
    positional_values: Vec<Vec<String>>,
    /// Raw occurrences per option long name, in input order.
    pub option_occurrences: BTreeMap<String, Vec<Occurrence>>,
    pub after_delimiter: bool,
    /// A positional has been consumed at this level, which closes the
    /// subcommand-recognition window.
    positionals_started: bool,
}

impl<'s> ParseState<'s> {
    pub fn new(spec: &'s CommandSpec) -> ParseState<'s> {
        ParseState {
            spec,
            positional_cursor: 0,
            positional_values: vec![Vec::new(); spec.positionals().len()],
            option_occurrences: BTreeMap::new(),
            after_delimiter: false,
            positionals_started: false,
        }
    }

    pub fn record_occurrence(&mut self, long_name: &str, occurrence: Occurrence) {
        self.option_occurrences
            .entry(long_name.to_string())
            .or_default()
            .push(occurrence);
    }

    /// Whether some positional slot can still accept a value.
    pub fn positional_open(&self) -> bool {
        self.spec.positionals()[self.positional_cursor..]
            .iter()
            .enumerate()
            .any(|(offset, positional)| {
                let filled = self.positional_values[self.positional_cursor + offset].len();
                positional.value_arity().admits_more(filled)
            })
    }

    /// Append a value to the current positional slot, advancing the cursor
    /// past saturated slots. Returns false when every slot is saturated.
    pub fn push_positional(&mut self, value: String) -> bool {
        while self.positional_cursor < self.spec.positionals().len() {
            let positional = &self.spec.positionals()[self.positional_cursor];
            let slot = &mut self.positional_values[self.positional_cursor];
            if positional.value_arity().admits_more(slot.len()) {
                slot.push(value);
                if !positional.value_arity().admits_more(slot.len()) {
                    self.positional_cursor += 1;
                }
                self.positionals_started = true;
                return true;
            }
            self.positional_cursor += 1;
        }
        false
    }

    pub fn subcommands_open(&self) -> bool {
        !self.positionals_started
            && !self.after_delimiter
            && !self.spec.subcommands().is_empty()
    }

    /// Collected positional values, parallel to `spec.positionals()`.
    pub fn into_positional_values(self) -> Vec<Vec<String>> {
        self.positional_values
    }

    pub fn positional_values(&self) -> &[Vec<String>] {
        &self.positional_values
    }
}
