//! Positional declarations
//!
//! A positional is a named slot filled by tokens that are not options,
//! in declaration order. Slots are filled greedily left to right: the
//! dispatcher keeps appending to the current slot until its max arity is
//! reached, then moves to the next one. Because of this, only the last
//! positional may accept more than one value; anything after it would be
//! unreachable, and the command builder rejects such specs.

use serde::Serialize;

use super::arity::Arity;

/// Declaration of a single positional slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionalSpec {
    name: String,
    arity: Arity,
}

impl PositionalSpec {
    pub fn new(name: impl Into<String>, arity: Arity) -> PositionalSpec {
        PositionalSpec {
            name: name.into(),
            arity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_arity(&self) -> Arity {
        self.arity
    }

    /// Whether this slot can hold more than one value.
    pub fn is_variadic(&self) -> bool {
        match self.arity.max() {
            Some(max) => max > 1,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variadic_detection() {
        assert!(!PositionalSpec::new("x", Arity::EXACTLY_ONE).is_variadic());
        assert!(!PositionalSpec::new("x", Arity::ZERO_OR_ONE).is_variadic());
        assert!(PositionalSpec::new("x", Arity::ZERO_OR_MORE).is_variadic());
        assert!(PositionalSpec::new("x", Arity::new(0, Some(2)).unwrap()).is_variadic());
    }
}
