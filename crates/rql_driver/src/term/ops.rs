use core::ops::{Add, Div, Mul, Not, Rem, Sub};

use super::{Term, TermType};

macro_rules! impl_binary_op {
    ($($trait:ident :: $method:ident => $term_type:ident),* $(,)?) => {
        $(
            impl<T: Into<Term>> $trait<T> for Term {
                type Output = Term;

                #[inline]
                fn $method(self, rhs: T) -> Term {
                    self.chain(TermType::$term_type, [rhs.into()])
                }
            }
        )*
    };
}

impl_binary_op! {
    Add::add => Add,
    Sub::sub => Sub,
    Mul::mul => Mul,
    Div::div => Div,
    Rem::rem => Mod,
}

impl Not for Term {
    type Output = Term;

    #[inline]
    fn not(self) -> Term {
        self.chain(TermType::Not, [])
    }
}
