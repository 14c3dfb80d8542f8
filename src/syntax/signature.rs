/*! Defines a ['Sig'] to collect the function and predicate symbols of formulae together
with their arities.

['Sig']: crate::syntax::Sig
*/
use super::{Error, Func, Pred, Term};
use std::{collections::HashMap, fmt};
use tracing::debug;

/// Contains the signature information for a function.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FSig {
    /// Is the function symbol.
    pub symbol: Func,

    /// Is the arity of the function.
    pub arity: usize,
}

impl fmt::Display for FSig {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "function: {}, arity: {}", self.symbol, self.arity)
    }
}

/// Contains the signature information for a predicate.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PSig {
    /// Is the predicate symbol.
    pub symbol: Pred,

    /// Is the arity of the predicate.
    pub arity: usize,
}

impl fmt::Display for PSig {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "predicate: {}, arity: {}", self.symbol, self.arity)
    }
}

/// Is the signature of a formula: every function and predicate symbol in it, each applied
/// with exactly one arity.
///
/// **Note**: constants are nullary functions and equality is not recorded as a predicate.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Sig {
    functions: HashMap<Func, FSig>,
    predicates: HashMap<Pred, PSig>,
}

impl Sig {
    /// Creates an empty signature.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            predicates: HashMap::new(),
        }
    }

    /// Creates a new signature by merging the items of an iterator over signatures.
    pub fn new_from_signatures<I>(value: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Sig>,
    {
        let mut sig = Self::new();
        for s in value {
            sig = sig.merge(s)?;
        }
        Ok(sig)
    }

    /// Adds the signature of a function to the reciever.
    pub fn add_function(&mut self, function: FSig) -> Result<(), Error> {
        if let Some(sig) = self.functions.get(&function.symbol) {
            if *sig != function {
                debug!(event = crate::trace::SIGNATURE, this = %sig, other = %function);
                return Err(Error::InconsistentFuncSig {
                    this: sig.clone(),
                    other: function,
                });
            }
        } else {
            self.functions.insert(function.symbol.clone(), function);
        }
        Ok(())
    }

    /// Adds the signature of a predicate to the reciever.
    pub fn add_predicate(&mut self, predicate: PSig) -> Result<(), Error> {
        if let Some(sig) = self.predicates.get(&predicate.symbol) {
            if *sig != predicate {
                debug!(event = crate::trace::SIGNATURE, this = %sig, other = %predicate);
                return Err(Error::InconsistentPredSig {
                    this: sig.clone(),
                    other: predicate,
                });
            }
        } else {
            self.predicates.insert(predicate.symbol.clone(), predicate);
        }
        Ok(())
    }

    /// Adds the function symbols of `term`, recursively, to the receiver.
    pub fn add_term(&mut self, term: &Term) -> Result<(), Error> {
        if let Term::App(app) = term {
            self.add_function(FSig {
                symbol: app.function().clone(),
                arity: app.arity(),
            })?;
            for t in app.terms() {
                self.add_term(t)?;
            }
        }
        Ok(())
    }

    /// Returns a signature that combines the receiver signature with the signature of `other`.
    pub fn merge(mut self, other: Self) -> Result<Self, Error> {
        for f in other.functions.values() {
            self.add_function(f.clone())?;
        }
        for p in other.predicates.values() {
            self.add_predicate(p.clone())?;
        }

        Ok(self)
    }

    /// Returns the function of this signature.
    pub fn functions(&self) -> &HashMap<Func, FSig> {
        &self.functions
    }

    /// Returns the predicates of this signature.
    pub fn predicates(&self) -> &HashMap<Pred, PSig> {
        &self.predicates
    }
}

impl Default for Sig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fof,
        syntax::{Fof, Formula},
        test_prelude::*,
    };

    #[test]
    fn test_sig_from_formula() {
        {
            let mut sig = Sig::new();
            sig.add_predicate(PSig {
                symbol: P(),
                arity: 0,
            })
            .unwrap();
            assert_eq!(sig, fof!(P()).signature().unwrap());
        }
        {
            let mut sig = Sig::new();
            sig.add_predicate(PSig {
                symbol: P(),
                arity: 1,
            })
            .unwrap();
            sig.add_function(FSig {
                symbol: _c(),
                arity: 0,
            })
            .unwrap();
            assert_eq!(sig, fof!(P(c())).signature().unwrap());
        }
        {
            let mut sig = Sig::new();
            sig.add_function(FSig {
                symbol: _c(),
                arity: 0,
            })
            .unwrap();
            assert_eq!(sig, fof!((c()) = (c())).signature().unwrap());
        }
        {
            let mut sig = Sig::new();
            sig.add_predicate(PSig {
                symbol: P(),
                arity: 3,
            })
            .unwrap();
            sig.add_function(FSig {
                symbol: f(),
                arity: 2,
            })
            .unwrap();
            sig.add_function(FSig {
                symbol: g(),
                arity: 1,
            })
            .unwrap();
            sig.add_function(FSig {
                symbol: _c(),
                arity: 0,
            })
            .unwrap();
            sig.add_function(FSig {
                symbol: _d(),
                arity: 0,
            })
            .unwrap();
            let formula = fof!(P(f(x, c()), d(), f(g(x), y)));
            assert_eq!(sig, formula.signature().unwrap());
        }
        {
            let mut sig = Sig::new();
            sig.add_predicate(PSig {
                symbol: P(),
                arity: 2,
            })
            .unwrap();
            sig.add_predicate(PSig {
                symbol: Q(),
                arity: 1,
            })
            .unwrap();
            sig.add_function(FSig {
                symbol: f(),
                arity: 1,
            })
            .unwrap();
            let formula = fof!(!x. (?y. ((~(P(f(x), y))) -> (Q(x)))));
            assert_eq!(sig, formula.signature().unwrap());
        }
    }

    #[test]
    fn test_inconsistent_signature() {
        assert_eq!(
            Err(Error::InconsistentPredSig {
                this: PSig {
                    symbol: P(),
                    arity: 1
                },
                other: PSig {
                    symbol: P(),
                    arity: 2
                },
            }),
            fof!((P(x)) & (P(x, y))).signature()
        );
        assert!(matches!(
            fof!((P(f(x))) | (Q(f(x, y)))).signature(),
            Err(Error::InconsistentFuncSig { .. })
        ));
        assert!(matches!(
            fof!((f(x)) = (f())).signature(),
            Err(Error::InconsistentFuncSig { .. })
        ));
        assert!(Fof::not(fof!(P(f(f(x))))).signature().is_ok());
    }

    #[test]
    fn test_sig_to_string() {
        let psig = PSig {
            symbol: P(),
            arity: 2,
        };
        let fsig = FSig {
            symbol: f(),
            arity: 1,
        };
        assert_eq!("predicate: P, arity: 2", psig.to_string());
        assert_eq!("function: f, arity: 1", fsig.to_string());
    }
}
