/// Returns a [`StaticIdent`] made at compile time from an identifier token or a string
/// literal. An invalid name fails the build.
///
/// **Example**:
/// ```rust
/// use fol_rewrite::{ident, syntax::Ident};
///
/// let x = ident!(x);
/// assert_eq!(x, 'x');
/// assert_eq!(ident!("9"), Ident::new("9").unwrap());
/// ```
///
/// [`StaticIdent`]: crate::syntax::StaticIdent
#[macro_export]
macro_rules! ident {
    ($name:ident) => {{
        const IDENT: $crate::syntax::StaticIdent =
            $crate::syntax::StaticIdent::new(stringify!($name));
        IDENT
    }};
    ($name:literal) => {{
        const IDENT: $crate::syntax::StaticIdent = $crate::syntax::StaticIdent::new($name);
        IDENT
    }};
}

#[macro_export]
macro_rules! v {
    ($v:ident) => {
        $crate::syntax::Var::from($crate::ident!($v))
    };
}

#[macro_export]
macro_rules! func {
    ($f:ident) => {
        $crate::syntax::Func::from($crate::ident!($f))
    };
}

#[macro_export]
macro_rules! pred {
    ($p:ident) => {
        $crate::syntax::Pred::from($crate::ident!($p))
    };
}

#[macro_export]
macro_rules! term {
    ($v:ident) => {
        $crate::syntax::Term::from($crate::v!($v))
    };
    ($func:ident ($($t:tt)*)) => {
        {
            let ts: Vec<$crate::syntax::Term> = $crate::terms!($($t)*);
            $crate::func!($func).app(ts)
        }
    };
}

#[macro_export]
macro_rules! terms {
    (@acc () -> ($($result:tt)*)) => {
        vec![$($result)*]
    };
    (@acc ($v:ident $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::terms!(@acc ($($($tail)*)?) -> ($($result)* $crate::term!($v),))
    };
    (@acc ($func:ident ($($t:tt)*) $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        {
            let term = $crate::term!($func($($t)*));
            $crate::terms!(@acc ($($($tail)*)?) -> ($($result)* term,))
        }
    };
    ($($tail:tt)*) => {
        $crate::terms!(@acc ($($tail)*) -> ())
    };
}

/// Builds a first-order formula ([`Fof`]).
///
/// Variables are bare identifiers, `f(...)` applies a function symbol and `f()` is a
/// constant. Operands of connectives are wrapped in `()`, `[]` or `{}`; `~` is negation, `&`
/// conjunction, `|` disjunction, `->` implication and `<=>` bi-implication. `!x, y. (...)`
/// and `?x, y. (...)` quantify over one variable at a time, outermost first.
///
/// **Example**:
/// ```rust
/// use fol_rewrite::fof;
///
/// let formula = fof!(!x. ((P(x)) -> (?y. ((x) = (f(y))))));
/// assert_eq!("Ax: P(x) -> Ey: x = f(y)", formula.to_string());
/// ```
///
/// [`Fof`]: crate::syntax::Fof
#[macro_export]
macro_rules! fof {
    // Atom
    ($pred:ident) => {
        $crate::pred!($pred).app(vec![])
    };
    ($pred:ident ($($t:tt)*)) => {
        {
            let ts: Vec<$crate::syntax::Term> = $crate::terms!($($t)*);
            $crate::pred!($pred).app(ts)
        }
    };
    // Equality
    (($($left:tt)*) = ($($right:tt)*)) => {
        $crate::fof!(@equals ($($left)*) ($($right)*))
    };
    ([$($left:tt)*] = [$($right:tt)*]) => {
        $crate::fof!(@equals ($($left)*) ($($right)*))
    };
    ({$($left:tt)*} = {$($right:tt)*}) => {
        $crate::fof!(@equals ($($left)*) ($($right)*))
    };
    // Negation
    (~($($fmla:tt)*)) => {
        $crate::fof!(@not ($($fmla)*))
    };
    (~[$($fmla:tt)*]) => {
        $crate::fof!(@not ($($fmla)*))
    };
    (~{$($fmla:tt)*}) => {
        $crate::fof!(@not ($($fmla)*))
    };
    // Conjunction
    (($($left:tt)*) & ($($right:tt)*)) => {
        $crate::fof!(@and ($($left)*) ($($right)*))
    };
    ([$($left:tt)*] & [$($right:tt)*]) => {
        $crate::fof!(@and ($($left)*) ($($right)*))
    };
    ({$($left:tt)*} & {$($right:tt)*}) => {
        $crate::fof!(@and ($($left)*) ($($right)*))
    };
    // Disjunction
    (($($left:tt)*) | ($($right:tt)*)) => {
        $crate::fof!(@or ($($left)*) ($($right)*))
    };
    ([$($left:tt)*] | [$($right:tt)*]) => {
        $crate::fof!(@or ($($left)*) ($($right)*))
    };
    ({$($left:tt)*} | {$($right:tt)*}) => {
        $crate::fof!(@or ($($left)*) ($($right)*))
    };
    // Implication
    (($($left:tt)*) -> ($($right:tt)*)) => {
        $crate::fof!(@implies ($($left)*) ($($right)*))
    };
    ([$($left:tt)*] -> [$($right:tt)*]) => {
        $crate::fof!(@implies ($($left)*) ($($right)*))
    };
    ({$($left:tt)*} -> {$($right:tt)*}) => {
        $crate::fof!(@implies ($($left)*) ($($right)*))
    };
    // Bi-implication
    (($($left:tt)*) <=> ($($right:tt)*)) => {
        $crate::fof!(@iff ($($left)*) ($($right)*))
    };
    ([$($left:tt)*] <=> [$($right:tt)*]) => {
        $crate::fof!(@iff ($($left)*) ($($right)*))
    };
    ({$($left:tt)*} <=> {$($right:tt)*}) => {
        $crate::fof!(@iff ($($left)*) ($($right)*))
    };
    // Universally quantified
    (! $($v:ident),+ . ($($fmla:tt)*)) => {
        $crate::fof!(@forall ($($v),+) ($($fmla)*))
    };
    (! $($v:ident),+ . [$($fmla:tt)*]) => {
        $crate::fof!(@forall ($($v),+) ($($fmla)*))
    };
    (! $($v:ident),+ . {$($fmla:tt)*}) => {
        $crate::fof!(@forall ($($v),+) ($($fmla)*))
    };
    // Existentially quantified
    (? $($v:ident),+ . ($($fmla:tt)*)) => {
        $crate::fof!(@exists ($($v),+) ($($fmla)*))
    };
    (? $($v:ident),+ . [$($fmla:tt)*]) => {
        $crate::fof!(@exists ($($v),+) ($($fmla)*))
    };
    (? $($v:ident),+ . {$($fmla:tt)*}) => {
        $crate::fof!(@exists ($($v),+) ($($fmla)*))
    };
    // Construction rules
    (@equals ($($left:tt)*) ($($right:tt)*)) => {
        {
            let left = $crate::term!($($left)*);
            let right = $crate::term!($($right)*);
            left.equals(right)
        }
    };
    (@not ($($fmla:tt)*)) => {
        $crate::syntax::Fof::not($crate::fof!($($fmla)*))
    };
    (@and ($($left:tt)*) ($($right:tt)*)) => {
        $crate::fof!($($left)*).and($crate::fof!($($right)*))
    };
    (@or ($($left:tt)*) ($($right:tt)*)) => {
        $crate::fof!($($left)*).or($crate::fof!($($right)*))
    };
    (@implies ($($left:tt)*) ($($right:tt)*)) => {
        $crate::fof!($($left)*).implies($crate::fof!($($right)*))
    };
    (@iff ($($left:tt)*) ($($right:tt)*)) => {
        $crate::fof!($($left)*).iff($crate::fof!($($right)*))
    };
    (@forall ($v:ident) ($($fmla:tt)*)) => {
        $crate::syntax::Fof::forall($crate::v!($v), $crate::fof!($($fmla)*))
    };
    (@forall ($v:ident, $($vs:ident),+) ($($fmla:tt)*)) => {
        $crate::syntax::Fof::forall($crate::v!($v), $crate::fof!(@forall ($($vs),+) ($($fmla)*)))
    };
    (@exists ($v:ident) ($($fmla:tt)*)) => {
        $crate::syntax::Fof::exists($crate::v!($v), $crate::fof!($($fmla)*))
    };
    (@exists ($v:ident, $($vs:ident),+) ($($fmla:tt)*)) => {
        $crate::syntax::Fof::exists($crate::v!($v), $crate::fof!(@exists ($($vs),+) ($($fmla)*)))
    };
}
