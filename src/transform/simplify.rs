/*! Implements a syntactic simplification that eliminates implications and bi-implications
and collapses double negations.*/
use crate::syntax::{
    formula::{And, Atom, Equals, Equivalent, Exists, Forall, Implies, Not, Or},
    Fof, Formula,
};
use tracing::trace;

/// Is the trait of [`Formula`] types that can be simplified to a [`Fof`] built from
/// negation, conjunction, disjunction and the quantifiers only.
pub trait Simplify: Formula {
    /// Returns a logically equivalent formula where `P -> Q` is replaced by `-P | Q`,
    /// `P <-> Q` by `(-P | Q) & (-Q | P)`, and every double negation is removed.
    ///
    /// **Note**: the result has no `Implies` or `Equivalent` node and no `Not` directly
    /// above another `Not`. Negations are not pushed inward; see [`ToNnf`].
    ///
    /// **Example**:
    /// ```rust
    /// # use fol_rewrite::syntax::{Fof, Pred};
    /// use fol_rewrite::transform::Simplify;
    ///
    /// let p = Pred::new("p").unwrap().app(vec![]);
    /// let q = Pred::new("q").unwrap().app(vec![]);
    ///
    /// let formula = Fof::not(p.clone()).iff(q);
    /// assert_eq!("p | q & -q | -p", formula.simplified().to_string());
    ///
    /// let formula = Fof::not(Fof::not(Fof::not(p)));
    /// assert_eq!("-p", formula.simplified().to_string());
    /// ```
    ///
    /// [`ToNnf`]: crate::transform::ToNnf
    fn simplified(&self) -> Fof;
}

impl Simplify for Atom {
    fn simplified(&self) -> Fof {
        self.clone().into()
    }
}

impl Simplify for Equals {
    fn simplified(&self) -> Fof {
        self.clone().into()
    }
}

impl Simplify for Not<Fof> {
    fn simplified(&self) -> Fof {
        simplify_not(self.formula())
    }
}

impl Simplify for And<Fof> {
    fn simplified(&self) -> Fof {
        Fof::conjunction(self.formulae().iter().map(Simplify::simplified).collect())
    }
}

impl Simplify for Or<Fof> {
    fn simplified(&self) -> Fof {
        Fof::disjunction(self.formulae().iter().map(Simplify::simplified).collect())
    }
}

impl Simplify for Implies<Fof> {
    fn simplified(&self) -> Fof {
        simplify_implies(self.premise(), self.consequence())
    }
}

impl Simplify for Equivalent<Fof> {
    fn simplified(&self) -> Fof {
        Fof::conjunction(vec![
            simplify_implies(self.left(), self.right()),
            simplify_implies(self.right(), self.left()),
        ])
    }
}

impl Simplify for Forall<Fof> {
    fn simplified(&self) -> Fof {
        Fof::forall(self.variable().clone(), self.formula().simplified())
    }
}

impl Simplify for Exists<Fof> {
    fn simplified(&self) -> Fof {
        Fof::exists(self.variable().clone(), self.formula().simplified())
    }
}

impl Simplify for Fof {
    fn simplified(&self) -> Fof {
        trace!(event = crate::trace::SIMPLIFY, formula = %self);
        match self {
            Self::Atom(this) => this.simplified(),
            Self::Equals(this) => this.simplified(),
            Self::Not(this) => this.simplified(),
            Self::And(this) => this.simplified(),
            Self::Or(this) => this.simplified(),
            Self::Implies(this) => this.simplified(),
            Self::Equivalent(this) => this.simplified(),
            Self::Forall(this) => this.simplified(),
            Self::Exists(this) => this.simplified(),
        }
    }
}

// Simplifies the negation of `formula`, dropping a double negation.
fn simplify_not(formula: &Fof) -> Fof {
    match formula {
        Fof::Not(this) => this.formula().simplified(),
        _ => Fof::not(formula.simplified()),
    }
}

fn simplify_implies(premise: &Fof, consequence: &Fof) -> Fof {
    Fof::disjunction(vec![simplify_not(premise), consequence.simplified()])
}
