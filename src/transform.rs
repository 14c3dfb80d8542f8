/*! Implements the syntactic rewrites of first-order formulae: [`Simplify`] reduces a formula
to negation, conjunction, disjunction and the quantifiers, and [`ToNnf`] pushes negation down
to the atomic subformulae.

Every rewrite returns a new formula and leaves its receiver untouched.
*/
mod nnf;
mod simplify;

pub use nnf::ToNnf;
pub use simplify::Simplify;
