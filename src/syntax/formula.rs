/*! Introduces an abstraction for formulae and the atoms, connectives and quantifiers that
make them.

The connectives are generic over the type of their operands so that each node kind carries
its own rewrite rules (see [`transform`]); [`Fof`] ties them together into first-order
formulae.

[`transform`]: crate::transform
[`Fof`]: crate::syntax::Fof
*/
pub mod fof;

use super::{Error, Pred, Sig, Term, Var};
use itertools::Itertools;
use std::fmt;

/// Is the trait of formulae, including first-order formulae.
pub trait Formula {
    /// Returns a list of free variable symbols in the receiver formula.
    ///
    /// **Note**: In the list of free variables, each variable symbol appears only once
    /// even if it is present at multiple positions of the receiver formula.
    ///
    /// **Example**:
    /// ```rust
    /// # use fol_rewrite::syntax::{Fof, Pred, Var};
    /// use fol_rewrite::syntax::Formula;
    ///
    /// let x = Var::new("x").unwrap();
    /// let y = Var::new("y").unwrap();
    /// let p = Pred::new("P").unwrap();
    ///
    /// // ∀ x. P(x, y)
    /// let formula = Fof::forall(x.clone(), p.app(vec![x.into(), y.clone().into()]));
    /// assert_eq!(vec![&y], formula.free_vars());
    /// ```
    fn free_vars(&self) -> Vec<&Var>;

    /// Returns a list of the variable symbols that occur in the receiver formula, bound or
    /// free, in the order of their first occurrence.
    fn vars(&self) -> Vec<&Var>;

    /// Returns the signature of the receiver, failing if a function or predicate symbol is
    /// applied with different arities.
    fn signature(&self) -> Result<Sig, Error>;
}

/// Represents an atomic formula, obtained by applying a predicate on a list of terms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom {
    predicate: Pred,
    terms: Vec<Term>,
}

impl Atom {
    /// Creates a new atom.
    pub fn new(predicate: Pred, terms: Vec<Term>) -> Self {
        Self { predicate, terms }
    }

    /// Returns the predicate of the receiver.
    #[inline(always)]
    pub fn predicate(&self) -> &Pred {
        &self.predicate
    }

    /// Returns the terms of the receiver.
    #[inline(always)]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the number of terms of the receiver.
    #[inline(always)]
    pub fn arity(&self) -> usize {
        self.terms.len()
    }

    /// Returns an atom of the successor of the receiver's predicate on the same terms.
    pub fn next(self) -> Self {
        Self {
            predicate: self.predicate.next(),
            terms: self.terms,
        }
    }

    /// Returns an atom of the predecessor of the receiver's predicate on the same terms.
    pub fn prev(self) -> Result<Self, Error> {
        Ok(Self {
            predicate: self.predicate.prev()?,
            terms: self.terms,
        })
    }
}

impl Formula for Atom {
    fn free_vars(&self) -> Vec<&Var> {
        self.vars()
    }

    fn vars(&self) -> Vec<&Var> {
        self.terms.iter().flat_map(|t| t.vars()).unique().collect()
    }

    fn signature(&self) -> Result<Sig, Error> {
        let mut sig = Sig::new();
        sig.add_predicate(super::PSig {
            symbol: self.predicate.clone(),
            arity: self.terms.len(),
        })?;
        for term in &self.terms {
            sig.add_term(term)?;
        }
        Ok(sig)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.terms.is_empty() {
            write!(f, "{}", self.predicate)
        } else {
            write!(f, "{}({})", self.predicate, self.terms.iter().join(", "))
        }
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents an equation between two terms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Equals {
    left: Term,
    right: Term,
}

impl Equals {
    /// Creates a new equation.
    pub fn new(left: Term, right: Term) -> Self {
        Self { left, right }
    }

    /// Returns the term on the left of the equation.
    #[inline(always)]
    pub fn left(&self) -> &Term {
        &self.left
    }

    /// Returns the term on the right of the equation.
    #[inline(always)]
    pub fn right(&self) -> &Term {
        &self.right
    }
}

impl Formula for Equals {
    fn free_vars(&self) -> Vec<&Var> {
        self.vars()
    }

    fn vars(&self) -> Vec<&Var> {
        let mut vs = self.left.vars();
        vs.extend(self.right.vars());
        vs.into_iter().unique().collect()
    }

    fn signature(&self) -> Result<Sig, Error> {
        let mut sig = Sig::new();
        sig.add_term(&self.left)?;
        sig.add_term(&self.right)?;
        Ok(sig)
    }
}

impl fmt::Display for Equals {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}

impl fmt::Debug for Equals {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents the negation of a formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Not<F: Formula> {
    formula: F,
}

impl<F: Formula> Not<F> {
    /// Wraps `formula` in a new instance of [`Not`].
    pub fn new(formula: F) -> Self {
        Self { formula }
    }

    /// Returns the formula wrapped in the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &F {
        &self.formula
    }
}

impl<F: Formula> Formula for Not<F> {
    fn free_vars(&self) -> Vec<&Var> {
        self.formula.free_vars()
    }

    fn vars(&self) -> Vec<&Var> {
        self.formula.vars()
    }

    fn signature(&self) -> Result<Sig, Error> {
        self.formula.signature()
    }
}

/// Represents the conjunction of an ordered list of formulae.
///
/// **Note**: conjunctions are compared structurally; `A ∧ B` and `B ∧ A` are different
/// formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct And<F: Formula> {
    formulae: Vec<F>,
}

impl<F: Formula> And<F> {
    /// Returns the conjunction of `formulae`.
    pub fn new(formulae: Vec<F>) -> Self {
        Self { formulae }
    }

    /// Returns the conjuncts of the receiver.
    #[inline(always)]
    pub fn formulae(&self) -> &[F] {
        &self.formulae
    }
}

impl<F: Formula> Formula for And<F> {
    fn free_vars(&self) -> Vec<&Var> {
        self.formulae
            .iter()
            .flat_map(|f| f.free_vars())
            .unique()
            .collect()
    }

    fn vars(&self) -> Vec<&Var> {
        self.formulae.iter().flat_map(|f| f.vars()).unique().collect()
    }

    fn signature(&self) -> Result<Sig, Error> {
        Sig::new_from_signatures(
            self.formulae
                .iter()
                .map(|f| f.signature())
                .collect::<Result<Vec<_>, _>>()?,
        )
    }
}

/// Represents the disjunction of an ordered list of formulae.
///
/// **Note**: disjunctions are compared structurally; `A ∨ B` and `B ∨ A` are different
/// formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Or<F: Formula> {
    formulae: Vec<F>,
}

impl<F: Formula> Or<F> {
    /// Returns the disjunction of `formulae`.
    pub fn new(formulae: Vec<F>) -> Self {
        Self { formulae }
    }

    /// Returns the disjuncts of the receiver.
    #[inline(always)]
    pub fn formulae(&self) -> &[F] {
        &self.formulae
    }
}

impl<F: Formula> Formula for Or<F> {
    fn free_vars(&self) -> Vec<&Var> {
        self.formulae
            .iter()
            .flat_map(|f| f.free_vars())
            .unique()
            .collect()
    }

    fn vars(&self) -> Vec<&Var> {
        self.formulae.iter().flat_map(|f| f.vars()).unique().collect()
    }

    fn signature(&self) -> Result<Sig, Error> {
        Sig::new_from_signatures(
            self.formulae
                .iter()
                .map(|f| f.signature())
                .collect::<Result<Vec<_>, _>>()?,
        )
    }
}

/// Represents an implication between two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Implies<F: Formula> {
    premise: F,
    consequence: F,
}

impl<F: Formula> Implies<F> {
    /// Returns an implication with a `premise` and a `consequence`.
    pub fn new(premise: F, consequence: F) -> Self {
        Self {
            premise,
            consequence,
        }
    }

    /// Returns the premise of the receiver.
    #[inline(always)]
    pub fn premise(&self) -> &F {
        &self.premise
    }

    /// Returns the consequence of the receiver.
    #[inline(always)]
    pub fn consequence(&self) -> &F {
        &self.consequence
    }
}

impl<F: Formula> Formula for Implies<F> {
    fn free_vars(&self) -> Vec<&Var> {
        let mut vs = self.premise.free_vars();
        vs.extend(self.consequence.free_vars());
        vs.into_iter().unique().collect()
    }

    fn vars(&self) -> Vec<&Var> {
        let mut vs = self.premise.vars();
        vs.extend(self.consequence.vars());
        vs.into_iter().unique().collect()
    }

    fn signature(&self) -> Result<Sig, Error> {
        self.premise
            .signature()?
            .merge(self.consequence.signature()?)
    }
}

/// Represents a bi-implication between two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Equivalent<F: Formula> {
    left: F,
    right: F,
}

impl<F: Formula> Equivalent<F> {
    /// Returns a bi-implication between `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

impl<F: Formula> Formula for Equivalent<F> {
    fn free_vars(&self) -> Vec<&Var> {
        let mut vs = self.left.free_vars();
        vs.extend(self.right.free_vars());
        vs.into_iter().unique().collect()
    }

    fn vars(&self) -> Vec<&Var> {
        let mut vs = self.left.vars();
        vs.extend(self.right.vars());
        vs.into_iter().unique().collect()
    }

    fn signature(&self) -> Result<Sig, Error> {
        self.left.signature()?.merge(self.right.signature()?)
    }
}

/// Represents a universally quantified formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Forall<F: Formula> {
    variable: Var,
    formula: F,
}

impl<F: Formula> Forall<F> {
    /// Returns a universally quantified formula with bound `variable` and `formula`.
    pub fn new(variable: Var, formula: F) -> Self {
        Self { variable, formula }
    }

    /// Returns the bound variable of the receiver.
    #[inline(always)]
    pub fn variable(&self) -> &Var {
        &self.variable
    }

    /// Returns the formula of the universally quantified receiver.
    #[inline(always)]
    pub fn formula(&self) -> &F {
        &self.formula
    }
}

impl<F: Formula> Formula for Forall<F> {
    fn free_vars(&self) -> Vec<&Var> {
        self.formula
            .free_vars()
            .into_iter()
            .filter(|v| *v != &self.variable)
            .collect()
    }

    fn vars(&self) -> Vec<&Var> {
        std::iter::once(&self.variable)
            .chain(self.formula.vars())
            .unique()
            .collect()
    }

    fn signature(&self) -> Result<Sig, Error> {
        self.formula.signature()
    }
}

/// Represents an existentially quantified formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Exists<F: Formula> {
    variable: Var,
    formula: F,
}

impl<F: Formula> Exists<F> {
    /// Returns an existentially quantified formula with bound `variable` and `formula`.
    pub fn new(variable: Var, formula: F) -> Self {
        Self { variable, formula }
    }

    /// Returns the bound variable of the receiver.
    #[inline(always)]
    pub fn variable(&self) -> &Var {
        &self.variable
    }

    /// Returns the formula of the existentially quantified receiver.
    #[inline(always)]
    pub fn formula(&self) -> &F {
        &self.formula
    }
}

impl<F: Formula> Formula for Exists<F> {
    fn free_vars(&self) -> Vec<&Var> {
        self.formula
            .free_vars()
            .into_iter()
            .filter(|v| *v != &self.variable)
            .collect()
    }

    fn vars(&self) -> Vec<&Var> {
        std::iter::once(&self.variable)
            .chain(self.formula.vars())
            .unique()
            .collect()
    }

    fn signature(&self) -> Result<Sig, Error> {
        self.formula.signature()
    }
}
