use crate::syntax::*;

// Variables
pub fn _x() -> Var { Var::from(crate::ident!(x)) }

pub fn _y() -> Var { Var::from(crate::ident!(y)) }

pub fn _z() -> Var { Var::from(crate::ident!(z)) }

pub fn x() -> Term { _x().into() }

pub fn y() -> Term { _y().into() }

pub fn z() -> Term { _z().into() }

// Functions
pub fn f() -> Func { Func::from(crate::ident!(f)) }

pub fn g() -> Func { Func::from(crate::ident!(g)) }

pub fn h() -> Func { Func::from(crate::ident!(h)) }

// Constants
pub fn _a() -> Func { Func::from(crate::ident!(a)) }

pub fn _c() -> Func { Func::from(crate::ident!(c)) }

pub fn _d() -> Func { Func::from(crate::ident!(d)) }

pub fn a() -> Term { _a().app(vec![]) }

// Predicates
#[allow(non_snake_case)]
pub fn P() -> Pred { Pred::from(crate::ident!(P)) }

#[allow(non_snake_case)]
pub fn Q() -> Pred { Pred::from(crate::ident!(Q)) }

#[allow(non_snake_case)]
pub fn R() -> Pred { Pred::from(crate::ident!(R)) }
