use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::Add,
};

/// Numeric type usable as an edge cost.
///
/// The type must be totally ordered and hashable, because edges are compared
/// and stored in hash sets together with their costs. That rules out floating
/// point numbers.
pub trait Weight: Copy + Ord + Hash + Debug + Display + Add<Self, Output = Self> {
    /// Additive identity, also the default cost of an edge.
    fn zero() -> Self;

    /// Value stored in adjacency matrix cells of unweighted graphs.
    fn one() -> Self;

    /// Distance of unreachable vertices.
    fn inf() -> Self;

    fn is_unsigned() -> bool;

    /// Addition returning `None` on overflow.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                fn zero() -> Self {
                    0
                }

                fn one() -> Self {
                    1
                }

                fn inf() -> Self {
                    <$ty>::MAX
                }

                fn is_unsigned() -> bool {
                    true
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$ty>::checked_add(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                fn zero() -> Self {
                    0
                }

                fn one() -> Self {
                    1
                }

                fn inf() -> Self {
                    <$ty>::MAX
                }

                fn is_unsigned() -> bool {
                    false
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$ty>::checked_add(self, other)
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32, u64, usize);
impl_signed!(i8, i16, i32, i64, isize);
