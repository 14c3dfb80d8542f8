/*! Names the events that the crate reports through [`tracing`].

Every event carries an `event` field set to one of the constants below, so that a
subscriber can filter on it.

[`tracing`]: https://docs.rs/tracing
*/

/// A formula is being simplified.
pub const SIMPLIFY: &str = "SIMPLIFY";

/// A formula is being negated with the negation pushed to its atoms.
pub const NEGATE: &str = "NEGATE";

/// A formula is being transformed to negation normal form.
pub const NNF: &str = "NNF";

/// The predecessor of a minimal identifier was requested.
pub const NO_PREDECESSOR: &str = "NO_PREDECESSOR";

/// A symbol was found with two different arities while building a signature.
pub const SIGNATURE: &str = "SIGNATURE";
