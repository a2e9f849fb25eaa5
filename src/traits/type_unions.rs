//! Numeric type-union traits shared by the fixed-width kernels.
//!
//! Extends and constrains the *num-traits* implementations to fit the
//! crate's closed type universe: `i32`/`i64` for integers, `f32`/`f64` for
//! floats. The extra items carry the crate-specific rules the kernels need:
//! the float width a given integer divides into, and a total order for
//! deterministic float sorting.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{Float as NumFloat, Num, NumCast, PrimInt, ToPrimitive};

/// Trait for types valid as float elements in typed vectors.
///
/// Useful when specifying `my_fn::<T: Float>() {}`.
pub trait Float: NumFloat + Copy + Default + Debug + Display + ToPrimitive + 'static {
    /// IEEE-754 total order, used for deterministic sorting.
    fn total_order(self, other: Self) -> Ordering;
}

impl Float for f32 {
    #[inline]
    fn total_order(self, other: Self) -> Ordering {
        self.total_cmp(&other)
    }
}

impl Float for f64 {
    #[inline]
    fn total_order(self, other: Self) -> Ordering {
        self.total_cmp(&other)
    }
}

/// Trait for types valid as integer elements in typed vectors.
pub trait Integer:
    PrimInt + Default + Debug + Display + Hash + Ord + ToPrimitive + 'static
{
    /// The float width this integer type divides into (i32 -> f32, i64 -> f64).
    type DivOutput: Float;

    /// Value conversion into [`Self::DivOutput`].
    fn to_div(self) -> Self::DivOutput;
}

impl Integer for i32 {
    type DivOutput = f32;

    #[inline]
    fn to_div(self) -> f32 {
        self as f32
    }
}

impl Integer for i64 {
    type DivOutput = f64;

    #[inline]
    fn to_div(self) -> f64 {
        self as f64
    }
}

/// Trait for types valid as numerical elements.
///
/// Useful when specifying `my_fn::<T: Numeric>() {}`.
pub trait Numeric: Num + NumCast + Copy + Default + ToPrimitive + PartialEq + 'static {}
impl Numeric for f32 {}
impl Numeric for f64 {}
impl Numeric for i32 {}
impl Numeric for i64 {}
