/*! Defines an abstract syntax tree (AST) for first-order terms and formulae with equality. */
pub mod formula;
mod ident;
mod kind;
mod macros;
mod pretty;
mod signature;
mod symbol;
mod term;

pub use formula::{fof::Fof, Formula};
pub use ident::{Ident, StaticIdent, MAX_STATIC_IDENT_LEN};
pub use kind::{Classify, Kind};
pub use pretty::{Pretty, PrettyConfig};
pub use signature::{FSig, PSig, Sig};
pub use symbol::{Func, Pred, Var};
pub use term::{App, Term};

use thiserror::Error;

/// Is the type of errors arising from building identifiers, terms and formulae or from
/// inconsistencies among their symbols.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum Error {
    /// Is returned when an identifier is made from an empty string.
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    /// Is returned when an identifier contains a character other than ASCII letters and digits.
    #[error("invalid character `{character}` in identifier `{name}`; expecting ASCII letters and digits")]
    InvalidCharacter { name: String, character: char },

    /// Is returned when the predecessor of a minimal identifier (`a`, `A` or `0`) is requested.
    ///
    /// **Note**: callers that enumerate identifiers downward stop on this error.
    #[error("there is no identifier before `{name}`")]
    NoPredecessor { name: Ident },

    /// Is returned when a variable is expected but a function application is found.
    #[error("term `{}` is not a variable", .term.to_string())]
    NotAVariable { term: Term },

    /// Is returned when an atomic formula of a given kind is expected but a formula of
    /// another kind is found.
    #[error("expecting {expected}, found {found}")]
    UnexpectedKind { expected: Kind, found: Kind },

    /// Is returned when the same function symbol is applied with two different arities.
    #[error("incompatible function signatures: `{this}` and `{other}`")]
    InconsistentFuncSig { this: FSig, other: FSig },

    /// Is returned when the same predicate symbol is applied with two different arities.
    #[error("incompatible predicate signatures: `{this}` and `{other}`")]
    InconsistentPredSig { this: PSig, other: PSig },

    /// Is returned when the pretty printer is configured without any brackets.
    #[error("pretty printer needs at least one pair of brackets")]
    EmptyBrackets,
}
