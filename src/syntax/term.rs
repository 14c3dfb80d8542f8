/*! Defines the syntax for first-order terms. */
use super::{formula::Equals, Error, Fof, Func, Var};
use itertools::Itertools;
use std::{convert::TryFrom, fmt};

/// Represents the application of a function symbol on an ordered list of terms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct App {
    function: Func,
    terms: Vec<Term>,
}

impl App {
    /// Creates a new function application.
    pub fn new(function: Func, terms: Vec<Term>) -> Self {
        Self { function, terms }
    }

    /// Returns the function symbol of the receiver.
    #[inline(always)]
    pub fn function(&self) -> &Func {
        &self.function
    }

    /// Returns the arguments of the receiver.
    #[inline(always)]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the number of arguments of the receiver.
    #[inline(always)]
    pub fn arity(&self) -> usize {
        self.terms.len()
    }

    /// Returns an application of the successor of the receiver's function symbol on the
    /// same arguments.
    pub fn next(self) -> Self {
        Self {
            function: self.function.next(),
            terms: self.terms,
        }
    }

    /// Returns an application of the predecessor of the receiver's function symbol on the
    /// same arguments.
    pub fn prev(self) -> Result<Self, Error> {
        Ok(Self {
            function: self.function.prev()?,
            terms: self.terms,
        })
    }

    /// Returns an application with `term` added after the last argument of the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// # use fol_rewrite::syntax::{App, Func, Var};
    /// let f = Func::new("f").unwrap();
    /// let x = Var::new("x").unwrap();
    /// let y = Var::new("y").unwrap();
    ///
    /// let app = App::new(f.clone(), vec![x.clone().into()]).append(y.clone().into());
    /// assert_eq!(App::new(f, vec![x.into(), y.into()]), app);
    /// assert_eq!("f(x, y)", app.to_string());
    /// ```
    pub fn append(mut self, term: Term) -> Self {
        self.terms.push(term);
        self
    }
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        if self.terms.is_empty() {
            write!(f, "{}", self.function)
        } else {
            write!(f, "{}({})", self.function, self.terms.iter().join(", "))
        }
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents a first-order term and consists of variables and function applications.
///
/// **Note**: constants are nullary function applications.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// Is a variable term, wrapping a [variable symbol].
    ///
    /// [variable symbol]: crate::syntax::Var
    Var(Var),

    /// Is a composite term, wrapping an [`App`].
    App(App),
}

impl Term {
    /// Returns the application of `function` on `terms`.
    #[inline(always)]
    pub fn apply(function: Func, terms: Vec<Term>) -> Self {
        App::new(function, terms).into()
    }

    /// Returns a list of all variable symbols in the term.
    ///
    /// **Note**: In the list of variables, each variable symbol appears only once even if it
    /// is present at multiple positions of the receiver term.
    ///
    /// **Example**:
    /// ```rust
    /// # use fol_rewrite::syntax::{Func, Term, Var};
    /// let x_sym = Var::new("x").unwrap();
    /// let y_sym = Var::new("y").unwrap();
    /// let x = Term::from(x_sym.clone());
    /// let y = Term::from(y_sym.clone());
    /// let f = Func::new("f").unwrap();
    /// let g = Func::new("g").unwrap();
    ///
    /// // f(x, g(y, x)):
    /// let t = f.app(vec![x.clone(), g.app(vec![y, x])]);
    /// assert_eq!(vec![&x_sym, &y_sym], t.vars());
    /// ```
    pub fn vars(&self) -> Vec<&Var> {
        match self {
            Term::Var(variable) => vec![variable],
            Term::App(this) => this.terms.iter().flat_map(|t| t.vars()).unique().collect(),
        }
    }

    /// Returns an [equation] (formula) between the receiver and `term`.
    ///
    /// [equation]: crate::syntax::Fof::Equals
    pub fn equals(self, term: Term) -> Fof {
        Equals::new(self, term).into()
    }
}

impl From<Var> for Term {
    fn from(variable: Var) -> Self {
        Self::Var(variable)
    }
}

impl From<App> for Term {
    fn from(app: App) -> Self {
        Self::App(app)
    }
}

impl TryFrom<Term> for Var {
    type Error = Error;

    fn try_from(value: Term) -> Result<Self, Self::Error> {
        match value {
            Term::Var(variable) => Ok(variable),
            term @ Term::App(_) => Err(Error::NotAVariable { term }),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Var(variable) => write!(f, "{}", variable),
            Self::App(this) => write!(f, "{}", this),
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}
