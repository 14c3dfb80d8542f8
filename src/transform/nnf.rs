/*! Implements an algorithm for transforming a formula to Negation Normal Form (NNF).

**Hint**: An NNF is a formula where negation is applied only to its atomic (including
equations) sub-formulae, and implications and bi-implications are eliminated.
*/
use super::Simplify;
use crate::syntax::{
    formula::{And, Atom, Equals, Equivalent, Exists, Forall, Implies, Not, Or},
    Fof,
};
use tracing::trace;

/// Is the trait of formulae that can be negated or transformed to NNF.
pub trait ToNnf: Simplify {
    /// Returns the NNF of the negation of the receiver.
    ///
    /// **Note**: negating an atom wraps it in a `Not`; negating a negation returns the NNF
    /// of the negated formula, so no double negation is ever built.
    ///
    /// **Example**:
    /// ```rust
    /// # use fol_rewrite::syntax::{Fof, Pred, Var};
    /// use fol_rewrite::transform::ToNnf;
    ///
    /// let x = Var::new("x").unwrap();
    /// let p = Pred::new("p").unwrap();
    /// let q = Pred::new("q").unwrap();
    ///
    /// let formula = Fof::forall(
    ///     x.clone(),
    ///     p.app(vec![x.clone().into()]).or(Fof::not(q.app(vec![x.into()]))),
    /// );
    /// assert_eq!("Ex: -p(x) & q(x)", formula.negate().to_string());
    /// ```
    fn negate(&self) -> Fof;

    /// Transforms the receiver to NNF.
    ///
    /// **Example**:
    /// ```rust
    /// # use fol_rewrite::syntax::{Fof, Pred};
    /// use fol_rewrite::transform::ToNnf;
    ///
    /// let p = Pred::new("p").unwrap().app(vec![]);
    /// let q = Pred::new("q").unwrap().app(vec![]);
    ///
    /// let formula = Fof::not(p.iff(q));
    /// assert_eq!("p & -q | q & -p", formula.nnf().to_string());
    /// ```
    fn nnf(&self) -> Fof;
}

impl ToNnf for Atom {
    fn negate(&self) -> Fof {
        Fof::not(self.clone().into())
    }

    fn nnf(&self) -> Fof {
        self.clone().into()
    }
}

impl ToNnf for Equals {
    fn negate(&self) -> Fof {
        Fof::not(self.clone().into())
    }

    fn nnf(&self) -> Fof {
        self.clone().into()
    }
}

impl ToNnf for Not<Fof> {
    fn negate(&self) -> Fof {
        self.formula().nnf()
    }

    fn nnf(&self) -> Fof {
        self.formula().negate()
    }
}

impl ToNnf for And<Fof> {
    fn negate(&self) -> Fof {
        Fof::disjunction(self.formulae().iter().map(ToNnf::negate).collect())
    }

    fn nnf(&self) -> Fof {
        Fof::conjunction(self.formulae().iter().map(ToNnf::nnf).collect())
    }
}

impl ToNnf for Or<Fof> {
    fn negate(&self) -> Fof {
        Fof::conjunction(self.formulae().iter().map(ToNnf::negate).collect())
    }

    fn nnf(&self) -> Fof {
        Fof::disjunction(self.formulae().iter().map(ToNnf::nnf).collect())
    }
}

impl ToNnf for Implies<Fof> {
    fn negate(&self) -> Fof {
        self.simplified().negate()
    }

    fn nnf(&self) -> Fof {
        self.simplified().nnf()
    }
}

impl ToNnf for Equivalent<Fof> {
    fn negate(&self) -> Fof {
        self.simplified().negate()
    }

    fn nnf(&self) -> Fof {
        self.simplified().nnf()
    }
}

impl ToNnf for Forall<Fof> {
    fn negate(&self) -> Fof {
        Fof::exists(self.variable().clone(), self.formula().negate())
    }

    fn nnf(&self) -> Fof {
        Fof::forall(self.variable().clone(), self.formula().nnf())
    }
}

impl ToNnf for Exists<Fof> {
    fn negate(&self) -> Fof {
        Fof::forall(self.variable().clone(), self.formula().negate())
    }

    fn nnf(&self) -> Fof {
        Fof::exists(self.variable().clone(), self.formula().nnf())
    }
}

impl ToNnf for Fof {
    fn negate(&self) -> Fof {
        trace!(event = crate::trace::NEGATE, formula = %self);
        match self {
            Self::Atom(this) => this.negate(),
            Self::Equals(this) => this.negate(),
            Self::Not(this) => this.negate(),
            Self::And(this) => this.negate(),
            Self::Or(this) => this.negate(),
            Self::Implies(this) => this.negate(),
            Self::Equivalent(this) => this.negate(),
            Self::Forall(this) => this.negate(),
            Self::Exists(this) => this.negate(),
        }
    }

    fn nnf(&self) -> Fof {
        trace!(event = crate::trace::NNF, formula = %self);
        match self {
            Self::Atom(this) => this.nnf(),
            Self::Equals(this) => this.nnf(),
            Self::Not(this) => this.nnf(),
            Self::And(this) => this.nnf(),
            Self::Or(this) => this.nnf(),
            Self::Implies(this) => this.nnf(),
            Self::Equivalent(this) => this.nnf(),
            Self::Forall(this) => this.nnf(),
            Self::Exists(this) => this.nnf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, fof, test_prelude::*};

    // Returns true if negation in `formula` is applied to atoms only and no implication
    // or bi-implication is left.
    fn is_nnf(formula: &Fof) -> bool {
        match formula {
            Fof::Atom(_) | Fof::Equals(_) => true,
            Fof::Not(this) => matches!(this.formula(), Fof::Atom(_) | Fof::Equals(_)),
            Fof::And(this) => this.formulae().iter().all(is_nnf),
            Fof::Or(this) => this.formulae().iter().all(is_nnf),
            Fof::Implies(_) | Fof::Equivalent(_) => false,
            Fof::Forall(this) => is_nnf(this.formula()),
            Fof::Exists(this) => is_nnf(this.formula()),
        }
    }

    #[test]
    fn test_nnf() {
        assert_debug_string!("P(x)", fof!(P(x)).nnf());
        assert_debug_string!("x = y", fof!((x) = (y)).nnf());
        assert_debug_string!("-P(x)", fof!(~(P(x))).nnf());
        assert_debug_string!("P(x) & Q(y)", fof!((P(x)) & (Q(y))).nnf());
        assert_debug_string!("P(x) | Q(y)", fof!((P(x)) | (Q(y))).nnf());
        assert_debug_string!("-P(x) | Q(y)", fof!((P(x)) -> (Q(y))).nnf());
        assert_debug_string!(
            "-P(x) | Q(y) & -Q(y) | P(x)",
            fof!((P(x)) <=> (Q(y))).nnf()
        );
        assert_debug_string!("Ex: P(x)", fof!(?x. (P(x))).nnf());
        assert_debug_string!("Ax: P(x)", fof!(!x. (P(x))).nnf());
        // sanity checking
        assert_debug_string!("P(x)", fof!(~(~(P(x)))).nnf());
        assert_debug_string!("-P(x)", fof!(~(~(~(P(x))))).nnf());
        assert_debug_string!("P(x)", fof!(~(~(~(~(P(x)))))).nnf());
        assert_debug_string!("x = y", fof!(~(~((x) = (y)))).nnf());
        assert_debug_string!("-P(x) | -Q(y)", fof!(~((P(x)) & (Q(y)))).nnf());
        assert_debug_string!("-P(x) & -Q(y)", fof!(~((P(x)) | (Q(y)))).nnf());
        assert_debug_string!("P(x) & -Q(y)", fof!(~((P(x)) -> (Q(y)))).nnf());
        assert_debug_string!(
            "P(x) & -Q(y) | Q(y) & -P(x)",
            fof!(~((P(x)) <=> (Q(y)))).nnf()
        );
        assert_debug_string!(
            "-P(x) & -Q(y) | R(z)",
            fof!(((P(x)) | (Q(y))) -> (R(z))).nnf()
        );
        assert_debug_string!("Ex: -P(x)", fof!(~(!x. (P(x)))).nnf());
        assert_debug_string!("Ax: -P(x)", fof!(~(?x. (P(x)))).nnf());
        assert_debug_string!(
            "Ax: Ey: P(x) & -Q(y)",
            fof!(~(?x. (!y. ((P(x)) -> (Q(y)))))).nnf()
        );
    }

    #[test]
    fn test_nnf_negations() {
        assert_eq!(fof!(~(P())), fof!(~(P())).nnf());
        assert_eq!(fof!(P()), fof!(~(~(P()))).nnf());
        assert_eq!(fof!(~(P())), fof!(~(~(~(P())))).nnf());
        assert_eq!(fof!(P()), fof!(~(~(~(~(P()))))).nnf());
    }

    #[test]
    fn test_nnf_de_morgan() {
        assert_eq!(
            fof!((P()) | (~(Q()))),
            fof!(~((~(P())) & (Q()))).nnf()
        );
        assert_eq!(
            fof!((~(P())) & (Q())),
            fof!((~(P())) & (Q())).nnf()
        );
        assert_eq!(
            fof!((P()) & (~(Q()))),
            fof!(~((~(P())) | (Q()))).nnf()
        );
        assert_eq!(
            fof!((~(P())) | (Q())),
            fof!((~(P())) | (Q())).nnf()
        );
        assert_eq!(
            Fof::conjunction(vec![fof!(P(x)), fof!(P(y)), fof!((x) = (y))]),
            Fof::not(Fof::disjunction(vec![
                fof!(~(P(x))),
                fof!(~(P(y))),
                fof!(~((x) = (y))),
            ]))
            .nnf()
        );
    }

    #[test]
    fn test_nnf_quantifiers() {
        assert_eq!(fof!(?x. (P(x))), fof!(~(!x. (~(P(x))))).nnf());
        assert_eq!(fof!(!x. (~(P(x)))), fof!(!x. (~(P(x)))).nnf());
        assert_eq!(fof!(!x. (P(x))), fof!(~(?x. (~(P(x))))).nnf());
        assert_eq!(fof!(?x. (~(P(x)))), fof!(?x. (~(P(x)))).nnf());
    }

    #[test]
    fn test_negate() {
        assert_eq!(fof!(~(P(x))), fof!(P(x)).negate());
        assert_eq!(fof!(~((x) = (y))), fof!((x) = (y)).negate());
        assert_eq!(fof!(P(x)), fof!(~(P(x))).negate());
        assert_eq!(
            fof!((~(P(x))) | (~(Q(x)))),
            fof!((P(x)) & (Q(x))).negate()
        );
        assert_eq!(
            fof!((P(x)) & (~(Q(x)))),
            fof!((P(x)) -> (Q(x))).negate()
        );
        assert_eq!(fof!(?x. (~(P(x)))), fof!(!x. (P(x))).negate());
        assert_eq!(fof!(!x. (P(x))), fof!(?x. (~(P(x)))).negate());
        assert_eq!(
            Fof::not(fof!(P(x))).nnf(),
            fof!(P(x)).negate()
        );
        assert_eq!(
            Atom::new(P(), vec![x()]).negate(),
            fof!(P(x)).negate()
        );
    }

    #[test]
    fn test_nnf_shape() {
        let formulae = vec![
            fof!(~((P(x)) <=> ((Q(x)) -> (~(R(x)))))),
            fof!(~(!x. (?y. ((P(x)) -> (~((Q(y)) | (~((x) = (y))))))))),
            fof!(((~(~(P(x)))) <=> (Q(y))) & (~(~(~(R(z)))))),
        ];
        for formula in &formulae {
            let nnf = formula.nnf();
            assert!(is_nnf(&nnf), "{} is not in NNF", nnf);
            assert_eq!(nnf, nnf.nnf());
            assert_eq!(nnf, formula.simplified().nnf());
        }
    }
}
