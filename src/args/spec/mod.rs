//! Command specification model
//!
//! The immutable declarations the parser runs against: arity bounds,
//! option and positional declarations, and the command tree. Specs are
//! built once through validating builders and never mutated; a spec in
//! circulation satisfies every structural invariant.

pub mod arity;
pub mod command;
pub mod option;
pub mod positional;

pub use arity::Arity;
pub use command::{CommandSpec, CommandSpecBuilder};
pub use option::{AccumulationMode, OptionSpec};
pub use positional::PositionalSpec;
