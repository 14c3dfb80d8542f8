/*! Defines the syntax of first-order formulae with equality.*/
use super::*;
use crate::syntax::{
    pretty::DEFAULT_BRACKETS, Classify, Kind, Pretty, PrettyConfig,
};
use itertools::Itertools;
use std::{convert::TryFrom, fmt};

/// Is an abstract syntax tree (AST) for first-order formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fof {
    /// Is an atomic first-order formula, wrapping an [`Atom`].
    Atom(Atom),

    /// Is a first-order equality, wrapping an [`Equals`].
    ///
    /// **Note**: Equality is a special type of atomic first-order formula.
    Equals(Equals),

    /// Is the negation of a first-order formula, wrapping a [`Not`].
    Not(Box<Not<Fof>>),

    /// Is a conjunction of a list of first-order formulae, wrapping an [`And`].
    And(Box<And<Fof>>),

    /// Is a disjunction of a list of first-order formulae, wrapping an [`Or`].
    Or(Box<Or<Fof>>),

    /// Is an implication between two first-order formulae, wrapping an [`Implies`].
    Implies(Box<Implies<Fof>>),

    /// Is a bi-implication between two first-order formulae, wrapping an [`Equivalent`].
    Equivalent(Box<Equivalent<Fof>>),

    /// Is a universally quantified formula, wrapping a [`Forall`].
    Forall(Box<Forall<Fof>>),

    /// Is an existentially quantified formula, wrapping an [`Exists`].
    Exists(Box<Exists<Fof>>),
}

impl From<Atom> for Fof {
    fn from(value: Atom) -> Self {
        Self::Atom(value)
    }
}

impl From<Equals> for Fof {
    fn from(value: Equals) -> Self {
        Self::Equals(value)
    }
}

impl From<Not<Fof>> for Fof {
    fn from(value: Not<Fof>) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<And<Fof>> for Fof {
    fn from(value: And<Fof>) -> Self {
        Self::And(Box::new(value))
    }
}

impl From<Or<Fof>> for Fof {
    fn from(value: Or<Fof>) -> Self {
        Self::Or(Box::new(value))
    }
}

impl From<Implies<Fof>> for Fof {
    fn from(value: Implies<Fof>) -> Self {
        Self::Implies(Box::new(value))
    }
}

impl From<Equivalent<Fof>> for Fof {
    fn from(value: Equivalent<Fof>) -> Self {
        Self::Equivalent(Box::new(value))
    }
}

impl From<Forall<Fof>> for Fof {
    fn from(value: Forall<Fof>) -> Self {
        Self::Forall(Box::new(value))
    }
}

impl From<Exists<Fof>> for Fof {
    fn from(value: Exists<Fof>) -> Self {
        Self::Exists(Box::new(value))
    }
}

impl TryFrom<Fof> for Atom {
    type Error = Error;

    fn try_from(value: Fof) -> Result<Self, Self::Error> {
        match value {
            Fof::Atom(this) => Ok(this),
            _ => Err(Error::UnexpectedKind {
                expected: Kind::Predicate,
                found: value.kind(),
            }),
        }
    }
}

impl TryFrom<Fof> for Equals {
    type Error = Error;

    fn try_from(value: Fof) -> Result<Self, Self::Error> {
        match value {
            Fof::Equals(this) => Ok(this),
            _ => Err(Error::UnexpectedKind {
                expected: Kind::Equality,
                found: value.kind(),
            }),
        }
    }
}

impl Fof {
    /// Returns the negation of `formula`.
    #[allow(clippy::should_implement_trait)]
    // Disallow `formula.not()` intentionally:
    #[inline(always)]
    pub fn not(formula: Self) -> Self {
        Not::new(formula).into()
    }

    /// Returns a universally quantified first-order formula over `variable` and `formula`.
    #[inline(always)]
    pub fn forall(variable: Var, formula: Self) -> Self {
        Forall::new(variable, formula).into()
    }

    /// Returns an existentially quantified first-order formula over `variable` and `formula`.
    #[inline(always)]
    pub fn exists(variable: Var, formula: Self) -> Self {
        Exists::new(variable, formula).into()
    }

    /// Returns a conjunction of the receiver and `formula`.
    ///
    /// **Note**: the result is a two-element conjunction even when the receiver is itself a
    /// conjunction; use [`Fof::conjunction`] for longer lists.
    #[inline(always)]
    pub fn and(self, formula: Self) -> Self {
        And::new(vec![self, formula]).into()
    }

    /// Returns a disjunction of the receiver and `formula`.
    #[inline(always)]
    pub fn or(self, formula: Self) -> Self {
        Or::new(vec![self, formula]).into()
    }

    /// Returns an implication between the receiver and `formula`.
    #[inline(always)]
    pub fn implies(self, formula: Self) -> Self {
        Implies::new(self, formula).into()
    }

    /// Returns a bi-implication between the receiver and `formula`.
    #[inline(always)]
    pub fn iff(self, formula: Self) -> Self {
        Equivalent::new(self, formula).into()
    }

    /// Returns the conjunction of `formulae`, in the given order.
    #[inline(always)]
    pub fn conjunction(formulae: Vec<Self>) -> Self {
        And::new(formulae).into()
    }

    /// Returns the disjunction of `formulae`, in the given order.
    #[inline(always)]
    pub fn disjunction(formulae: Vec<Self>) -> Self {
        Or::new(formulae).into()
    }

    /// Returns a precedence-aware rendering of the receiver with the default brackets.
    ///
    /// **Example**:
    /// ```rust
    /// # use fol_rewrite::syntax::{Fof, Pred, Var};
    /// let x = Var::new("x").unwrap();
    /// let y = Var::new("y").unwrap();
    /// let p = Pred::new("p").unwrap();
    /// let q = Pred::new("q").unwrap();
    ///
    /// let formula = Fof::forall(
    ///     x.clone(),
    ///     Fof::exists(
    ///         y.clone(),
    ///         p.app(vec![x.clone().into()]).and(q.app(vec![y.into()])),
    ///     ),
    /// );
    /// assert_eq!("AxEy: ([p(x) & q(y)])", formula.pretty().to_string());
    /// ```
    pub fn pretty(&self) -> Pretty<'_> {
        Pretty::new(self, DEFAULT_BRACKETS)
    }

    /// Returns a precedence-aware rendering of the receiver with the brackets of `config`.
    pub fn pretty_with<'a>(&'a self, config: &'a PrettyConfig) -> Pretty<'a> {
        Pretty::new(self, config.brackets())
    }
}

impl Formula for Fof {
    fn free_vars(&self) -> Vec<&Var> {
        match self {
            Self::Atom(this) => this.free_vars(),
            Self::Equals(this) => this.free_vars(),
            Self::Not(this) => this.free_vars(),
            Self::And(this) => this.free_vars(),
            Self::Or(this) => this.free_vars(),
            Self::Implies(this) => this.free_vars(),
            Self::Equivalent(this) => this.free_vars(),
            Self::Forall(this) => this.free_vars(),
            Self::Exists(this) => this.free_vars(),
        }
    }

    fn vars(&self) -> Vec<&Var> {
        match self {
            Self::Atom(this) => this.vars(),
            Self::Equals(this) => this.vars(),
            Self::Not(this) => this.vars(),
            Self::And(this) => this.vars(),
            Self::Or(this) => this.vars(),
            Self::Implies(this) => this.vars(),
            Self::Equivalent(this) => this.vars(),
            Self::Forall(this) => this.vars(),
            Self::Exists(this) => this.vars(),
        }
    }

    fn signature(&self) -> Result<Sig, Error> {
        match self {
            Self::Atom(this) => this.signature(),
            Self::Equals(this) => this.signature(),
            Self::Not(this) => this.signature(),
            Self::And(this) => this.signature(),
            Self::Or(this) => this.signature(),
            Self::Implies(this) => this.signature(),
            Self::Equivalent(this) => this.signature(),
            Self::Forall(this) => this.signature(),
            Self::Exists(this) => this.signature(),
        }
    }
}

impl fmt::Display for Fof {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Atom(this) => write!(f, "{}", this),
            Self::Equals(this) => write!(f, "{}", this),
            Self::Not(this) => write!(f, "-{}", this.formula),
            Self::And(this) => write!(f, "{}", this.formulae.iter().join(" & ")),
            Self::Or(this) => write!(f, "{}", this.formulae.iter().join(" | ")),
            Self::Implies(this) => write!(f, "{} -> {}", this.premise, this.consequence),
            Self::Equivalent(this) => write!(f, "{} <-> {}", this.left, this.right),
            Self::Forall(this) => write!(f, "A{}: {}", this.variable, this.formula),
            Self::Exists(this) => write!(f, "E{}: {}", this.variable, this.formula),
        }
    }
}

impl fmt::Debug for Fof {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, fof, term, test_prelude::*};

    #[test]
    fn test_fof_to_string() {
        assert_eq!("P", fof!(P()).to_string());
        assert_eq!("P(x, f(y))", fof!(P(x, f(y))).to_string());
        assert_eq!("x = f(a)", fof!((x) = (f(a()))).to_string());
        assert_eq!("-P(x)", fof!(~(P(x))).to_string());
        assert_eq!("P(x) & Q(y)", fof!((P(x)) & (Q(y))).to_string());
        assert_eq!("P(x) | Q(y)", fof!((P(x)) | (Q(y))).to_string());
        assert_eq!("P(x) -> Q(y)", fof!((P(x)) -> (Q(y))).to_string());
        assert_eq!("P(x) <-> Q(y)", fof!((P(x)) <=> (Q(y))).to_string());
        assert_eq!("Ax: P(x)", fof!(!x. (P(x))).to_string());
        assert_eq!("Ex: P(x)", fof!(?x. (P(x))).to_string());
        assert_eq!(
            "P & Q & R",
            Fof::conjunction(vec![fof!(P()), fof!(Q()), fof!(R())]).to_string()
        );
        assert_eq!(
            "Ax: Ey: -P(x) | x = y",
            fof!(!x. (?y. ((~(P(x))) | ((x) = (y))))).to_string()
        );
        assert_eq!("Ax: Ay: P(x, y)", fof!(!x, y. (P(x, y))).to_string());
    }

    #[test]
    fn test_fof_debug() {
        assert_debug_string!("-Ax: P(x)", Fof::not(fof!(!x. (P(x)))));
        assert_debug_string!("P(x) -> x = y", fof!((P(x)) -> ((x) = (y))));
    }

    #[test]
    fn test_constructors() {
        let p = fof!(P(x));
        let q = fof!(Q(y));
        assert_eq!(fof!((P(x)) & (Q(y))), p.clone().and(q.clone()));
        assert_eq!(fof!((P(x)) | (Q(y))), p.clone().or(q.clone()));
        assert_eq!(fof!((P(x)) -> (Q(y))), p.clone().implies(q.clone()));
        assert_eq!(fof!((P(x)) <=> (Q(y))), p.clone().iff(q.clone()));
        assert_eq!(fof!(~(P(x))), Fof::not(p.clone()));
        assert_eq!(fof!(!x. (P(x))), Fof::forall(_x(), p.clone()));
        assert_eq!(fof!(?x. (P(x))), Fof::exists(_x(), p.clone()));
        assert_eq!(fof!((x) = (y)), x().equals(y()));
        assert_eq!(
            Fof::conjunction(vec![p.clone(), q.clone()]),
            p.clone().and(q.clone())
        );
        assert_eq!(Fof::disjunction(vec![p.clone(), q.clone()]), p.or(q));
    }

    #[test]
    fn test_structural_equality() {
        let a = fof!(P(x));
        let b = fof!(Q(x));
        assert_eq!(a.clone().and(b.clone()), a.clone().and(b.clone()));
        assert_ne!(a.clone().and(b.clone()), b.clone().and(a.clone()));
        assert_ne!(a.clone().and(b.clone()), a.clone().or(b.clone()));
        assert_ne!(
            Fof::conjunction(vec![a.clone(), b.clone()]),
            Fof::conjunction(vec![a.clone(), b.clone(), b.clone()])
        );
        assert_ne!(fof!(!x. (P(x))), fof!(?x. (P(x))));
        assert_ne!(fof!(!x. (P(x))), fof!(!y. (P(x))));
        assert_ne!(fof!(P(x)), fof!(P(x())));
        assert_ne!(fof!((x) = (y)), fof!((y) = (x)));
    }

    #[test]
    fn test_to_atom() {
        assert_eq!(
            Ok(Atom::new(P(), vec![term!(x)])),
            Atom::try_from(fof!(P(x)))
        );
        assert_eq!(
            Err(Error::UnexpectedKind {
                expected: Kind::Predicate,
                found: Kind::Not,
            }),
            Atom::try_from(fof!(~(P(x))))
        );
        assert_eq!(Ok(Equals::new(x(), y())), Equals::try_from(fof!((x) = (y))));
        assert_eq!(
            Err(Error::UnexpectedKind {
                expected: Kind::Equality,
                found: Kind::Predicate,
            }),
            Equals::try_from(fof!(P(x)))
        );
    }
}
