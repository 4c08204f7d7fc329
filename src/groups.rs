//! The algebra a [`FenwickTree`](crate::FenwickTree) folds with.
//!
//! Prefix sums only need an associative, commutative `add` with an identity.
//! Point extraction, range sums and the inverse search also undo an `add`,
//! so the tree asks for a full abelian group.

use std::marker::PhantomData;

pub trait CommutativeMonoid {
    type Elem: Clone;

    /// Identity
    fn id(&self) -> Self::Elem;

    fn add(&self, lhs: Self::Elem, rhs: Self::Elem) -> Self::Elem;
}

pub trait AbelianGroup: CommutativeMonoid {
    /// Must satisfy `sub(add(a, b), b) == a`.
    fn sub(&self, lhs: Self::Elem, rhs: Self::Elem) -> Self::Elem;
}

/// `+` and `-` over any `num` number.
///
/// Unsigned types are fine as long as every point value stays
/// representable, which is the usual case for frequency tables.
#[derive(Clone, Copy, Debug)]
pub struct Additive<T>(PhantomData<T>);

impl<T> Default for Additive<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Additive<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: num::Num + Clone> CommutativeMonoid for Additive<T> {
    type Elem = T;

    #[inline]
    fn id(&self) -> T {
        T::zero()
    }

    #[inline]
    fn add(&self, lhs: T, rhs: T) -> T {
        lhs + rhs
    }
}

impl<T: num::Num + Clone> AbelianGroup for Additive<T> {
    #[inline]
    fn sub(&self, lhs: T, rhs: T) -> T {
        lhs - rhs
    }
}

/// Bitwise xor; every element is its own inverse.
#[derive(Clone, Copy, Debug)]
pub struct Xor<T>(PhantomData<T>);

impl<T> Default for Xor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Xor<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: num::PrimInt> CommutativeMonoid for Xor<T> {
    type Elem = T;

    #[inline]
    fn id(&self) -> T {
        T::zero()
    }

    #[inline]
    fn add(&self, lhs: T, rhs: T) -> T {
        lhs ^ rhs
    }
}

impl<T: num::PrimInt> AbelianGroup for Xor<T> {
    #[inline]
    fn sub(&self, lhs: T, rhs: T) -> T {
        lhs ^ rhs
    }
}
