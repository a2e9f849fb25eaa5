//! # **Logic Kernels** - *Kleene Three-Valued Boolean Algebra*
//!
//! Genuine SQL/Kleene semantics over `BooleanArray`, not plain null
//! propagation:
//!
//! - `false AND x == false` and `true OR x == true` even when `x` is null —
//!   the unknown only survives where it could change the outcome.
//! - `NOT null == null`.
//! - `all()` / `any()` are the matching three-valued folds with `Some(true)`
//!   / `Some(false)` as their empty-input identities.
//!
//! The combiners run word-wise over the packed value and validity bytes.
//! That relies on the `BooleanArray` invariant that null slots keep their
//! value bit clear; the truth tables then reduce to three bitwise terms per
//! byte. Trailing padding bits are masked back off on construction.

use crate::enums::error::MinvecError;
use crate::structs::bitmask::{Bitmask, domain_mask};
use crate::structs::variants::boolean::BooleanArray;
use crate::structs::variants::index::IndexArray;
use crate::traits::masked_array::MaskedArray;
use crate::utils::check_len_eq;

#[inline]
fn value_byte(arr: &BooleanArray, i: usize) -> u8 {
    arr.data.byte(i)
}

#[inline]
fn valid_byte(arr: &BooleanArray, i: usize) -> u8 {
    match &arr.null_mask {
        Some(mask) => mask.byte(i),
        None => 0xFF,
    }
}

fn from_bytes(value: Vec<u8>, valid: Vec<u8>, len: usize) -> BooleanArray {
    let data = Bitmask::from_bytes(value, len);
    let validity = Bitmask::from_bytes(valid, len);
    let null_mask = if validity.all_set() { None } else { Some(validity) };
    BooleanArray {
        data,
        null_mask,
        len,
    }
}

impl BooleanArray {
    /// Kleene conjunction. `false` with anything is `false`; `true AND true`
    /// is `true`; everything else is null.
    pub fn and_(&self, other: &Self) -> Result<Self, MinvecError> {
        check_len_eq(self.len, other.len)?;
        let n_bytes = self.len.div_ceil(8);
        let mut value = Vec::with_capacity(n_bytes);
        let mut valid = Vec::with_capacity(n_bytes);
        for i in 0..n_bytes {
            let (a, av) = (value_byte(self, i), valid_byte(self, i));
            let (b, bv) = (value_byte(other, i), valid_byte(other, i));
            // Known when both are known, or either side is a definite false.
            let v = (av & bv) | (av & !a) | (bv & !b);
            value.push(a & b & v);
            valid.push(v);
        }
        Ok(from_bytes(value, valid, self.len))
    }

    /// Kleene disjunction. `true` with anything is `true`; `false OR false`
    /// is `false`; everything else is null.
    pub fn or_(&self, other: &Self) -> Result<Self, MinvecError> {
        check_len_eq(self.len, other.len)?;
        let n_bytes = self.len.div_ceil(8);
        let mut value = Vec::with_capacity(n_bytes);
        let mut valid = Vec::with_capacity(n_bytes);
        for i in 0..n_bytes {
            let (a, av) = (value_byte(self, i), valid_byte(self, i));
            let (b, bv) = (value_byte(other, i), valid_byte(other, i));
            // Known when both are known, or either side is a definite true.
            let v = (av & bv) | (av & a) | (bv & b);
            value.push((a | b) & v);
            valid.push(v);
        }
        Ok(from_bytes(value, valid, self.len))
    }

    /// Kleene negation: null stays null.
    pub fn not_(&self) -> Self {
        let n_bytes = self.len.div_ceil(8);
        let mut value = Vec::with_capacity(n_bytes);
        let mut valid = Vec::with_capacity(n_bytes);
        for i in 0..n_bytes {
            let (a, av) = (value_byte(self, i), valid_byte(self, i));
            value.push(!a & av);
            valid.push(av);
        }
        from_bytes(value, valid, self.len)
    }

    /// Kleene-AND fold: any definite `false` wins, otherwise any null makes
    /// the answer unknown. Empty input is `Some(true)`.
    pub fn all(&self) -> Option<bool> {
        let n_bytes = self.len.div_ceil(8);
        let mut saw_null = false;
        for i in 0..n_bytes {
            let dm = domain_mask(self.len, i);
            let (a, av) = (value_byte(self, i), valid_byte(self, i));
            if av & !a & dm != 0 {
                return Some(false);
            }
            if !av & dm != 0 {
                saw_null = true;
            }
        }
        if saw_null { None } else { Some(true) }
    }

    /// Kleene-OR fold: any definite `true` wins, otherwise any null makes
    /// the answer unknown. Empty input is `Some(false)`.
    pub fn any(&self) -> Option<bool> {
        let n_bytes = self.len.div_ceil(8);
        let mut saw_null = false;
        for i in 0..n_bytes {
            let dm = domain_mask(self.len, i);
            let (a, av) = (value_byte(self, i), valid_byte(self, i));
            if av & a & dm != 0 {
                return Some(true);
            }
            if !av & dm != 0 {
                saw_null = true;
            }
        }
        if saw_null { None } else { Some(false) }
    }

    /// Positions that are definitely true; null and false are both excluded.
    pub fn to_index(&self) -> IndexArray {
        let out = (0..self.len)
            .filter(|&i| self.get(i) == Some(true))
            .collect();
        IndexArray::new(out)
    }
}
