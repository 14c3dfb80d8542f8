/*! Defines the symbols of [`Var`], [`Func`] and [`Pred`] for making terms and formulae.

Every symbol is named by an [`Ident`] and steps to its neighbors through the identifier's
successor and predecessor.
*/
use super::{formula::Atom, Error, Fof, Ident, StaticIdent, Term};
use std::fmt;

/// Represents an uninterpreted function symbol with a given name.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Func(Ident);

impl Func {
    /// Creates a function symbol named `name`.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, Error> {
        Ident::new(name).map(Self)
    }

    /// Returns the name of the receiver.
    #[inline(always)]
    pub fn ident(&self) -> &Ident {
        &self.0
    }

    /// Applies the receiver on a list of terms.
    ///
    /// **Note**: the arity of the resulting application is the length of `terms`; a function
    /// symbol does not carry an arity of its own (see [`Sig`] for checking that a symbol is
    /// used consistently).
    ///
    /// [`Sig`]: crate::syntax::Sig
    pub fn app(self, terms: Vec<Term>) -> Term {
        Term::apply(self, terms)
    }

    /// Returns the function symbol named by the successor of the receiver's name.
    pub fn next(self) -> Self {
        Self(self.0.next())
    }

    /// Returns the function symbol named by the predecessor of the receiver's name.
    pub fn prev(self) -> Result<Self, Error> {
        self.0.prev().map(Self)
    }
}

impl From<Ident> for Func {
    fn from(name: Ident) -> Self {
        Self(name)
    }
}

impl From<StaticIdent> for Func {
    fn from(name: StaticIdent) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents a variable symbol with a given name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Var(Ident);

impl Var {
    /// Creates a variable named `name`.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, Error> {
        Ident::new(name).map(Self)
    }

    /// Returns the name of the receiver.
    #[inline(always)]
    pub fn ident(&self) -> &Ident {
        &self.0
    }

    /// Returns the variable named by the successor of the receiver's name.
    pub fn next(self) -> Self {
        Self(self.0.next())
    }

    /// Returns the variable named by the predecessor of the receiver's name.
    pub fn prev(self) -> Result<Self, Error> {
        self.0.prev().map(Self)
    }
}

impl From<Ident> for Var {
    fn from(name: Ident) -> Self {
        Self(name)
    }
}

impl From<StaticIdent> for Var {
    fn from(name: StaticIdent) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents a predicate symbol with a given name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Pred(Ident);

impl Pred {
    /// Creates a predicate symbol named `name`.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, Error> {
        Ident::new(name).map(Self)
    }

    /// Returns the name of the receiver.
    #[inline(always)]
    pub fn ident(&self) -> &Ident {
        &self.0
    }

    /// Applies the receiver on a list of terms, returning an atomic formula.
    ///
    /// **Note**: as with [`Func`], the arity of the atom is the length of `terms`.
    pub fn app(self, terms: Vec<Term>) -> Fof {
        Atom::new(self, terms).into()
    }

    /// Returns the predicate named by the successor of the receiver's name.
    pub fn next(self) -> Self {
        Self(self.0.next())
    }

    /// Returns the predicate named by the predecessor of the receiver's name.
    pub fn prev(self) -> Result<Self, Error> {
        self.0.prev().map(Self)
    }
}

impl From<Ident> for Pred {
    fn from(name: Ident) -> Self {
        Self(name)
    }
}

impl From<StaticIdent> for Pred {
    fn from(name: StaticIdent) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}
