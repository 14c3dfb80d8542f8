/*! Implements a precedence-aware printer for first-order formulae.

Compound subformulae are wrapped in brackets, cycling through the bracket styles of a
[`PrettyConfig`] as they nest, so that the structure of a formula can be read off its text
without precedence rules.
*/
use super::{Classify, Error, Fof};
use itertools::Itertools;
use std::fmt;

pub(crate) const DEFAULT_BRACKETS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}')];

/// Is the list of bracket pairs used by [`Pretty`], in nesting order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PrettyConfig {
    brackets: Vec<(char, char)>,
}

impl PrettyConfig {
    /// Creates a configuration with the given pairs of opening and closing brackets.
    ///
    /// **Example**:
    /// ```rust
    /// # use fol_rewrite::syntax::{Fof, Pred, PrettyConfig};
    /// let p = Pred::new("p").unwrap().app(vec![]);
    /// let q = Pred::new("q").unwrap().app(vec![]);
    /// let config = PrettyConfig::new(vec![('<', '>')]).unwrap();
    ///
    /// let formula = Fof::not(p.and(q));
    /// assert_eq!("-<p & q>", formula.pretty_with(&config).to_string());
    /// assert!(PrettyConfig::new(vec![]).is_err());
    /// ```
    pub fn new(brackets: Vec<(char, char)>) -> Result<Self, Error> {
        if brackets.is_empty() {
            return Err(Error::EmptyBrackets);
        }
        Ok(Self { brackets })
    }

    /// Returns the bracket pairs of the receiver.
    #[inline(always)]
    pub fn brackets(&self) -> &[(char, char)] {
        &self.brackets
    }
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            brackets: DEFAULT_BRACKETS.to_vec(),
        }
    }
}

/// Renders a formula with brackets around every compound subformula.
///
/// Returned by [`Fof::pretty`] and [`Fof::pretty_with`].
pub struct Pretty<'a> {
    formula: &'a Fof,
    brackets: &'a [(char, char)],
}

impl<'a> Pretty<'a> {
    pub(crate) fn new(formula: &'a Fof, brackets: &'a [(char, char)]) -> Self {
        Self { formula, brackets }
    }

    // `index` is `None` at the top level, where connectives are not bracketed.
    fn write(&self, f: &mut fmt::Formatter, formula: &Fof, index: Option<usize>) -> fmt::Result {
        let count = self.brackets.len();
        let next = index.map_or(0, |i| (i + 1) % count);

        match formula {
            Fof::Atom(this) => write!(f, "{}", this),
            Fof::Equals(this) => self.bracketed(f, index, |f| write!(f, "{}", this)),
            Fof::Not(this) => {
                write!(f, "-")?;
                self.write(f, this.formula(), Some(index.unwrap_or(0)))
            }
            Fof::And(this) => {
                self.bracketed(f, index, |f| self.join(f, this.formulae(), " & ", next))
            }
            Fof::Or(this) => {
                self.bracketed(f, index, |f| self.join(f, this.formulae(), " | ", next))
            }
            Fof::Implies(this) => self.bracketed(f, index, |f| {
                self.write(f, this.premise(), Some(next))?;
                write!(f, " -> ")?;
                self.write(f, this.consequence(), Some(next))
            }),
            Fof::Equivalent(this) => self.bracketed(f, index, |f| {
                self.write(f, this.left(), Some(next))?;
                write!(f, " <-> ")?;
                self.write(f, this.right(), Some(next))
            }),
            Fof::Forall(this) => {
                write!(f, "A{}", this.variable())?;
                self.quantified(f, this.formula(), index.unwrap_or(0))
            }
            Fof::Exists(this) => {
                write!(f, "E{}", this.variable())?;
                self.quantified(f, this.formula(), index.unwrap_or(0))
            }
        }
    }

    fn quantified(&self, f: &mut fmt::Formatter, body: &Fof, index: usize) -> fmt::Result {
        if body.is_quantifier() {
            return self.write(f, body, Some(index));
        }

        let (open, close) = self.brackets[index];
        write!(f, ": {}", open)?;
        self.write(f, body, Some((index + 1) % self.brackets.len()))?;
        write!(f, "{}", close)
    }

    fn bracketed<W>(&self, f: &mut fmt::Formatter, index: Option<usize>, inner: W) -> fmt::Result
    where
        W: FnOnce(&mut fmt::Formatter) -> fmt::Result,
    {
        match index {
            Some(i) => {
                let (open, close) = self.brackets[i];
                write!(f, "{}", open)?;
                inner(f)?;
                write!(f, "{}", close)
            }
            None => inner(f),
        }
    }

    fn join(&self, f: &mut fmt::Formatter, formulae: &[Fof], sep: &str, index: usize) -> fmt::Result {
        for (i, formula) in formulae.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", sep)?;
            }
            self.write(f, formula, Some(index))?;
        }
        Ok(())
    }
}

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write(f, self.formula, None)
    }
}

impl fmt::Debug for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Pretty({}; {})",
            self,
            self.brackets
                .iter()
                .map(|(open, close)| format!("{}{}", open, close))
                .join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fof, test_prelude::*};

    #[test]
    fn test_atoms() {
        assert_eq!("P(x, f(y))", fof!(P(x, f(y))).pretty().to_string());
        assert_eq!("x = y", fof!((x) = (y)).pretty().to_string());
        assert_eq!("-P(x)", fof!(~(P(x))).pretty().to_string());
        assert_eq!("-(x = y)", fof!(~((x) = (y))).pretty().to_string());
    }

    #[test]
    fn test_connectives() {
        assert_eq!("P(x) & Q(y)", fof!((P(x)) & (Q(y))).pretty().to_string());
        assert_eq!(
            "P(x) & (Q(y) | R(z))",
            fof!((P(x)) & ((Q(y)) | (R(z)))).pretty().to_string()
        );
        assert_eq!(
            "(P(x) -> Q(y)) <-> (x = y)",
            fof!(((P(x)) -> (Q(y))) <=> ((x) = (y))).pretty().to_string()
        );
        assert_eq!(
            "(P(x) | [Q(x) & R(x)]) -> Q(y)",
            fof!(((P(x)) | ((Q(x)) & (R(x)))) -> (Q(y)))
                .pretty()
                .to_string()
        );
        assert_eq!(
            "-(P(x) & -[Q(x) | R(x)])",
            fof!(~((P(x)) & (~((Q(x)) | (R(x))))))
                .pretty()
                .to_string()
        );
        assert_eq!(
            "P & Q & R",
            Fof::conjunction(vec![fof!(P()), fof!(Q()), fof!(R())])
                .pretty()
                .to_string()
        );
    }

    #[test]
    fn test_quantifiers() {
        assert_eq!("Ax: (P(x))", fof!(!x. (P(x))).pretty().to_string());
        assert_eq!(
            "AxEy: (P(x, y))",
            fof!(!x. (?y. (P(x, y)))).pretty().to_string()
        );
        assert_eq!(
            "AxEy: ([P(x) & Q(y)])",
            fof!(!x. (?y. ((P(x)) & (Q(y))))).pretty().to_string()
        );
        assert_eq!(
            "Ax: ([P(x) -> Q(x)])",
            fof!(!x. ((P(x)) -> (Q(x)))).pretty().to_string()
        );
        assert_eq!(
            "-Ax: (-[x = y])",
            Fof::not(fof!(!x. (~((x) = (y))))).pretty().to_string()
        );
        assert_eq!(
            "P(x) & Ey: ([Q(y) | R(y)])",
            fof!((P(x)) & (?y. ((Q(y)) | (R(y))))).pretty().to_string()
        );
    }

    #[test]
    fn test_custom_brackets() {
        let config = PrettyConfig::new(vec![('<', '>')]).unwrap();
        assert_eq!(
            "Ax: <<P(x) & Q(x)>>",
            fof!(!x. ((P(x)) & (Q(x)))).pretty_with(&config).to_string()
        );
        assert_eq!(Err(Error::EmptyBrackets), PrettyConfig::new(vec![]));
        assert_eq!(DEFAULT_BRACKETS, PrettyConfig::default().brackets());
    }
}
