/*! Defines [`Kind`], a tag for every kind of syntactic object, and [`Classify`] for asking
an object about its kind.

Functions that only make sense for some kinds of objects are gated by Rust types; [`Kind`]
is for the places where a value of a wider type is inspected at runtime, such as the
fallible conversions out of [`Fof`] and the pretty printer.

[`Fof`]: crate::syntax::Fof
*/
use super::{
    formula::{Atom, Equals},
    App, Fof, Func, Ident, Pred, StaticIdent, Term, Var,
};
use std::fmt;

/// Is the kind of an identifier, term, atomic formula or formula.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Kind {
    Identifier,
    Variable,
    Function,
    Predicate,
    Equality,
    Not,
    And,
    Or,
    Implies,
    Equivalent,
    Forall,
    Exists,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Identifier => "identifier",
            Self::Variable => "variable",
            Self::Function => "function application",
            Self::Predicate => "predicate",
            Self::Equality => "equality",
            Self::Not => "negation",
            Self::And => "conjunction",
            Self::Or => "disjunction",
            Self::Implies => "implication",
            Self::Equivalent => "bi-implication",
            Self::Forall => "universal quantifier",
            Self::Exists => "existential quantifier",
        };
        write!(f, "{}", name)
    }
}

/// Is implemented by syntactic objects that can report their [`Kind`].
///
/// **Example**:
/// ```rust
/// # use fol_rewrite::syntax::{Fof, Pred, Var};
/// use fol_rewrite::syntax::{Classify, Kind};
///
/// let x = Var::new("x").unwrap();
/// let p = Pred::new("p").unwrap().app(vec![x.clone().into()]);
/// let formula = Fof::exists(x, p.clone());
///
/// assert!(p.is_atom());
/// assert!(formula.is_quantifier());
/// assert_eq!(Kind::Exists, formula.kind());
/// ```
pub trait Classify {
    /// Returns the kind of the receiver.
    fn kind(&self) -> Kind;

    /// Returns true if the receiver is an identifier or a bare function or predicate symbol.
    #[inline]
    fn is_identifier(&self) -> bool {
        self.kind() == Kind::Identifier
    }

    /// Returns true if the receiver is a variable or a function application.
    #[inline]
    fn is_term(&self) -> bool {
        matches!(self.kind(), Kind::Variable | Kind::Function)
    }

    /// Returns true if the receiver is a predicate application or an equality.
    #[inline]
    fn is_atom(&self) -> bool {
        matches!(self.kind(), Kind::Predicate | Kind::Equality)
    }

    /// Returns true if the receiver is a formula, atomic or not.
    #[inline]
    fn is_formula(&self) -> bool {
        !matches!(
            self.kind(),
            Kind::Identifier | Kind::Variable | Kind::Function
        )
    }

    /// Returns true if the receiver is a universally or existentially quantified formula.
    #[inline]
    fn is_quantifier(&self) -> bool {
        matches!(self.kind(), Kind::Forall | Kind::Exists)
    }
}

impl Classify for Ident {
    fn kind(&self) -> Kind {
        Kind::Identifier
    }
}

impl Classify for StaticIdent {
    fn kind(&self) -> Kind {
        Kind::Identifier
    }
}

impl Classify for Var {
    fn kind(&self) -> Kind {
        Kind::Variable
    }
}

// A bare symbol is a name, not an application.
impl Classify for Func {
    fn kind(&self) -> Kind {
        Kind::Identifier
    }
}

impl Classify for Pred {
    fn kind(&self) -> Kind {
        Kind::Identifier
    }
}

impl Classify for App {
    fn kind(&self) -> Kind {
        Kind::Function
    }
}

impl Classify for Term {
    fn kind(&self) -> Kind {
        match self {
            Self::Var(_) => Kind::Variable,
            Self::App(_) => Kind::Function,
        }
    }
}

impl Classify for Atom {
    fn kind(&self) -> Kind {
        Kind::Predicate
    }
}

impl Classify for Equals {
    fn kind(&self) -> Kind {
        Kind::Equality
    }
}

impl Classify for Fof {
    fn kind(&self) -> Kind {
        match self {
            Self::Atom(_) => Kind::Predicate,
            Self::Equals(_) => Kind::Equality,
            Self::Not(_) => Kind::Not,
            Self::And(_) => Kind::And,
            Self::Or(_) => Kind::Or,
            Self::Implies(_) => Kind::Implies,
            Self::Equivalent(_) => Kind::Equivalent,
            Self::Forall(_) => Kind::Forall,
            Self::Exists(_) => Kind::Exists,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fof, func, ident, pred, test_prelude::*};

    #[test]
    fn test_identifier() {
        assert!(ident!(x).is_identifier());
        assert!(Ident::from(ident!(x)).is_identifier());
        assert!(!ident!(x).is_term());
        assert!(!ident!(x).is_formula());
    }

    #[test]
    fn test_term() {
        assert_eq!(Kind::Variable, x().kind());
        assert_eq!(Kind::Variable, _x().kind());
        assert_eq!(Kind::Function, a().kind());
        assert_eq!(Kind::Identifier, f().kind());
        assert!(x().is_term());
        assert!(f().app(vec![x()]).is_term());
        assert!(!x().is_atom());
        assert!(!a().is_formula());
    }

    #[test]
    fn test_formula() {
        assert_eq!(Kind::Predicate, fof!(P(x)).kind());
        assert_eq!(Kind::Identifier, P().kind());
        assert_eq!(Kind::Equality, fof!((x) = (y)).kind());
        assert_eq!(Kind::Not, fof!(~(P(x))).kind());
        assert_eq!(Kind::And, fof!((P(x)) & (Q(x))).kind());
        assert_eq!(Kind::Or, fof!((P(x)) | (Q(x))).kind());
        assert_eq!(Kind::Implies, fof!((P(x)) -> (Q(x))).kind());
        assert_eq!(Kind::Equivalent, fof!((P(x)) <=> (Q(x))).kind());
        assert_eq!(Kind::Forall, fof!(!x. (P(x))).kind());
        assert_eq!(Kind::Exists, fof!(?x. (P(x))).kind());

        assert!(fof!(P(x)).is_atom());
        assert!(fof!((x) = (y)).is_atom());
        assert!(!fof!(~(P(x))).is_atom());
        assert!(fof!(~(P(x))).is_formula());
        assert!(fof!(P(x)).is_formula());
        assert!(fof!(!x. (P(x))).is_quantifier());
        assert!(!fof!((P(x)) & (Q(x))).is_quantifier());
        assert!(!fof!(P(x)).is_term());
    }

    #[test]
    fn test_symbols_are_identifiers() {
        assert!(pred!(P).is_identifier());
        assert!(!pred!(P).is_atom());
        assert!(!pred!(P).is_formula());
        assert!(func!(f).is_identifier());
        assert!(!func!(f).is_term());
        assert!(!func!(f).is_formula());
        assert!(pred!(P).app(vec![]).is_atom());
        assert!(func!(f).app(vec![x()]).is_term());
    }

    #[test]
    fn test_kind_to_string() {
        assert_eq!("predicate", Kind::Predicate.to_string());
        assert_eq!("universal quantifier", Kind::Forall.to_string());
    }
}
