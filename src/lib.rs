/*! Provides a typed representation of first-order formulae with equality, together with the
syntactic rewrites that simplify a formula into a reduced set of connectives and push its
negations down to the atoms (negation normal form).

**Example**:
```rust
use fol_rewrite::syntax::{Fof, Pred, Var};
use fol_rewrite::transform::{Simplify, ToNnf};

let x = Var::new("x").unwrap();
let p = Pred::new("p").unwrap();
let q = Pred::new("q").unwrap();

// ¬∀x. (p(x) → q(x))
let formula = Fof::not(Fof::forall(
    x.clone(),
    p.app(vec![x.clone().into()]).implies(q.app(vec![x.into()])),
));

assert_eq!("-Ax: p(x) -> q(x)", formula.to_string());
assert_eq!("-Ax: -p(x) | q(x)", formula.simplified().to_string());
assert_eq!("Ex: p(x) & -q(x)", formula.nnf().to_string());
```
*/
pub mod syntax;
#[cfg(test)]
pub mod test_macros;
#[cfg(test)]
mod test_prelude;
pub mod trace;
pub mod transform;
