//! Parsing module
//!
//! The dispatch machinery for one parse call:
//!
//! 1. Classification: each raw token is classified against the
//!    current state. See [classifying](crate::args::classifying).
//! 2. Dispatch: the engine applies the transition for the class,
//!    collecting option occurrences and positional values.
//! 3. Accumulation: occurrences are collapsed per accumulation mode.
//!    See [accumulating](crate::args::accumulating).
//! 4. Constraints: presence rules are checked per level. See
//!    [constraint](crate::args::constraint).
//!
//! Parsing is synchronous, strictly left-to-right, and runs to
//! completion or to a terminal error. There is no lookahead beyond one
//! token: the pending-option machinery examines the next token's
//! classification without committing to consume it.

pub(crate) mod engine;
pub(crate) mod state;
