//! Branch-free byte comparison for authenticator tags.

use core::ops::{BitXor, Not};

#[derive(Debug, Clone, Copy)]
pub struct Choice(u8);

impl Choice {
    #[inline]
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self.0
    }
}

impl From<Choice> for bool {
    #[inline]
    fn from(value: Choice) -> Self {
        debug_assert!((value.0 == 0) | (value.0 == 1));
        value.0 != 0
    }
}

impl From<u8> for Choice {
    #[inline]
    fn from(value: u8) -> Self {
        Self(black_box(value))
    }
}

impl BitXor for Choice {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        (self.0 ^ rhs.0).into()
    }
}

impl Not for Choice {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        (1 & !self.0).into()
    }
}

// an optimization barrier so comparisons are not folded back into branches
#[inline(never)]
fn black_box(input: u8) -> u8 {
    debug_assert!((input == 0) | (input == 1));
    unsafe { core::ptr::read_volatile(&input) }
}

#[allow(clippy::module_name_repetitions)]
pub trait ConstantTimeEq {
    fn ct_eq(&self, other: &Self) -> Choice;

    #[inline]
    fn ct_ne(&self, other: &Self) -> Choice {
        !self.ct_eq(other)
    }
}

impl ConstantTimeEq for u8 {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        let x = self ^ other;
        let y = (x | x.wrapping_neg()) >> 7;
        (y ^ 1).into()
    }
}

impl<T: ConstantTimeEq> ConstantTimeEq for [T] {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        if self.len() != other.len() {
            return Choice::from(0);
        }
        let mut x = 1;
        for (a, b) in self.iter().zip(other.iter()) {
            x &= a.ct_eq(b).to_u8();
        }
        x.into()
    }
}
