//! # **Arithmetic Kernels** - *Elementwise Numeric Ops*
//!
//! Vector-vector and vector-scalar arithmetic with simple null propagation:
//! a null at either input position forces a null at that output position,
//! with no short-circuiting. The `add`/`sub`/`mul` family is stamped onto
//! both fixed-width variants by `impl_numeric_arith!`; division and
//! `pow_scala` differ between the integer and float universes and are
//! implemented here directly.
//!
//! Division carries the `zero_div` guard: with it disabled, a literal zero
//! divisor at any evaluated position (both operands valid) is a
//! `ZeroDivision` domain error; with it enabled, IEEE-754 semantics apply.
//! Integer division always lands in the matching float width
//! (`i32 -> f32`, `i64 -> f64`).

use num_traits::Zero;

use crate::enums::error::MinvecError;
use crate::structs::variants::float::FloatArray;
use crate::structs::variants::integer::IntegerArray;
use crate::traits::masked_array::MaskedArray;
use crate::traits::type_unions::{Float, Integer};
use crate::utils::check_len_eq;

/// Binary elementwise kernel: null where either operand is null.
pub fn zip_numeric<A: MaskedArray>(
    a: &A,
    b: &A,
    f: impl Fn(A::Elem, A::Elem) -> A::Elem,
) -> Result<A, MinvecError> {
    check_len_eq(a.len(), b.len())?;
    let out = a
        .iter_opt()
        .zip(b.iter_opt())
        .map(|(x, y)| match (x, y) {
            (Some(p), Some(q)) => Some(f(p, q)),
            _ => None,
        })
        .collect();
    Ok(A::from_options(out))
}

/// Unary elementwise kernel: nulls stay null.
pub fn map_numeric<A: MaskedArray>(a: &A, f: impl Fn(A::Elem) -> A::Elem) -> A {
    let out = a.iter_opt().map(|x| x.map(&f)).collect();
    A::from_options(out)
}

impl<T: Integer> IntegerArray<T> {
    /// Elementwise division into the matching float width. See the module
    /// docs for the `zero_div` contract.
    pub fn div(
        &self,
        other: &Self,
        zero_div: bool,
    ) -> Result<FloatArray<T::DivOutput>, MinvecError> {
        check_len_eq(self.len(), other.len())?;
        if !zero_div {
            for (x, y) in self.iter_opt().zip(other.iter_opt()) {
                if let (Some(_), Some(d)) = (x, y) {
                    if d.is_zero() {
                        return Err(MinvecError::ZeroDivision);
                    }
                }
            }
        }
        let out = self
            .iter_opt()
            .zip(other.iter_opt())
            .map(|(x, y)| match (x, y) {
                (Some(p), Some(q)) => Some(p.to_div() / q.to_div()),
                _ => None,
            })
            .collect();
        Ok(FloatArray::from_options(out))
    }

    /// Scalar division into the matching float width.
    pub fn div_scala(
        &self,
        elem: T::DivOutput,
        zero_div: bool,
    ) -> Result<FloatArray<T::DivOutput>, MinvecError> {
        if !zero_div && elem.is_zero() {
            return Err(MinvecError::ZeroDivision);
        }
        let out = self
            .iter_opt()
            .map(|x| x.map(|v| v.to_div() / elem))
            .collect();
        Ok(FloatArray::from_options(out))
    }

    /// Elementwise power with a non-negative integer exponent. `x^0 == 1`
    /// for every non-null element; null stays null.
    pub fn pow_scala(&self, exp: u32) -> Self {
        map_numeric(self, |x| x.pow(exp))
    }
}

impl<T: Float> FloatArray<T> {
    /// Elementwise division. See the module docs for the `zero_div` contract.
    pub fn div(&self, other: &Self, zero_div: bool) -> Result<Self, MinvecError> {
        check_len_eq(self.len(), other.len())?;
        if !zero_div {
            for (x, y) in self.iter_opt().zip(other.iter_opt()) {
                if let (Some(_), Some(d)) = (x, y) {
                    if d.is_zero() {
                        return Err(MinvecError::ZeroDivision);
                    }
                }
            }
        }
        zip_numeric(self, other, |x, y| x / y)
    }

    /// Scalar division.
    pub fn div_scala(&self, elem: T, zero_div: bool) -> Result<Self, MinvecError> {
        if !zero_div && elem.is_zero() {
            return Err(MinvecError::ZeroDivision);
        }
        Ok(map_numeric(self, |x| x / elem))
    }

    /// Elementwise power via `powi`. `x^0 == 1.0` for every non-null
    /// element; null stays null.
    pub fn pow_scala(&self, exp: i32) -> Self {
        map_numeric(self, |x| x.powi(exp))
    }
}
