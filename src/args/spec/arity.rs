//! Arity bounds for options and positionals
//!
//! An arity is the permitted range of per-occurrence value counts,
//! `min..=max`, where an absent max means unbounded. The named constants
//! cover the usual shapes; `Arity::new` is for anything else and fails
//! fast on inconsistent bounds.

use serde::Serialize;
use std::fmt;

use crate::args::error::SpecError;

/// Permitted range of per-occurrence value counts.
///
/// Invariant: `max.is_none() || min <= max`. Enforced at construction; every
/// `Arity` in circulation satisfies it. Serialization is one-way: specs can
/// be inspected but only builders construct them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Arity {
    min: u32,
    max: Option<u32>,
}

impl Arity {
    /// No values. The arity of flags.
    pub const ZERO: Arity = Arity {
        min: 0,
        max: Some(0),
    };
    /// Zero or one value.
    pub const ZERO_OR_ONE: Arity = Arity {
        min: 0,
        max: Some(1),
    };
    /// Exactly one value. The default for value-taking options.
    pub const EXACTLY_ONE: Arity = Arity {
        min: 1,
        max: Some(1),
    };
    /// Any number of values, including none.
    pub const ZERO_OR_MORE: Arity = Arity { min: 0, max: None };
    /// One or more values.
    pub const ONE_OR_MORE: Arity = Arity { min: 1, max: None };

    /// Build an arity from explicit bounds. `max = None` means unbounded.
    pub fn new(min: u32, max: Option<u32>) -> Result<Arity, SpecError> {
        if let Some(max) = max {
            if min > max {
                return Err(SpecError::InvalidArity {
                    reason: format!("min {min} exceeds max {max}"),
                });
            }
        }
        Ok(Arity { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> Option<u32> {
        self.max
    }

    /// Whether `count` values satisfy the lower bound.
    pub fn satisfied_by(&self, count: usize) -> bool {
        count as u64 >= self.min as u64
    }

    /// Whether another value may be added to a collection of `count` values.
    pub fn admits_more(&self, count: usize) -> bool {
        match self.max {
            Some(max) => (count as u64) < max as u64,
            None => true,
        }
    }

    /// Whether `count` values lie within `min..=max`.
    pub fn contains(&self, count: usize) -> bool {
        self.satisfied_by(count) && !self.exceeded_by(count)
    }

    fn exceeded_by(&self, count: usize) -> bool {
        match self.max {
            Some(max) => count as u64 > max as u64,
            None => false,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{}", self.min),
            Some(max) => write!(f, "{}..{}", self.min, max),
            None => write!(f, "{}..", self.min),
        }
    }
}
