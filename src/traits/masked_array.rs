//! Core `MaskedArray` trait, providing the one nullable-vector contract
//! shared by `IntegerArray`, `FloatArray`, `BooleanArray` and `StringArray`.
//!
//! ### Purpose
//! - Enforces interface consistency across the dtype variants: construction
//!   from optional values, placeholder-backed null storage, bounds-checked
//!   mutation, concatenation, filtering and gathering.
//! - Null handling is identical everywhere and therefore lives here as
//!   default methods; only the handful of accessors that touch each
//!   variant's physical layout are left to the implementors (fixed-width
//!   types get those through macros, `BooleanArray` and `StringArray`
//!   implement them directly).
//!
//! The elementwise `equal`/`not_equal` family uses simple null propagation,
//! while `all_equal` is the Kleene reduction answering "are these whole
//! vectors equal" - a deliberate, SQL-mirroring difference.

use rand::Rng;

use crate::enums::error::MinvecError;
use crate::structs::bitmask::Bitmask;
use crate::structs::variants::boolean::BooleanArray;
use crate::structs::variants::index::IndexArray;
use crate::utils::check_len_eq;

/// MaskedArray is implemented by all nullable typed vectors.
pub trait MaskedArray: Clone {
    /// The logical element type (`i64`, `bool`, `String`, ...).
    type Elem: Clone + PartialEq + Default;

    /// Builds a vector from optional values; `None` marks the slot null and
    /// stores the dtype placeholder (`0` / `false` / `""`).
    fn from_options(items: Vec<Option<Self::Elem>>) -> Self;

    /// Number of logical elements, nulls included.
    fn len(&self) -> usize;

    /// Returns a reference to the optional null mask (1 = valid, 0 = null).
    fn null_mask(&self) -> Option<&Bitmask>;

    /// Retrieves the value at `idx`, or `None` if null or beyond length.
    fn get(&self, idx: usize) -> Option<Self::Elem>;

    /// Overwrites slot `idx` in place. Assumes `idx < len()`.
    fn set(&mut self, idx: usize, value: Option<Self::Elem>);

    /// Appends a value (or a null) to the end.
    fn push(&mut self, value: Option<Self::Elem>);

    /// Removes and returns the last element.
    fn pop(&mut self) -> Result<Option<Self::Elem>, MinvecError>;

    /// Appends all values (and validity) from `other` to `self`.
    fn append_array(&mut self, other: &Self);

    /// Returns true if the array is empty.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the value at the given index is null.
    #[inline]
    fn is_null(&self, idx: usize) -> bool {
        match self.null_mask() {
            Some(mask) => !mask.get(idx),
            None => false,
        }
    }

    /// Returns the total number of nulls.
    fn null_count(&self) -> usize {
        match self.null_mask() {
            Some(mask) => mask.count_zeros(),
            None => 0,
        }
    }

    /// Bounds-checked `get`: out-of-range indexes are an error rather than
    /// folding into the null case.
    fn get_checked(&self, idx: usize) -> Result<Option<Self::Elem>, MinvecError> {
        if idx >= self.len() {
            return Err(MinvecError::IndexOutOfRange {
                index: idx,
                len: self.len(),
            });
        }
        Ok(self.get(idx))
    }

    /// Bounds-checked `set`; the vector is untouched on failure.
    fn set_checked(&mut self, idx: usize, value: Option<Self::Elem>) -> Result<(), MinvecError> {
        if idx >= self.len() {
            return Err(MinvecError::IndexOutOfRange {
                index: idx,
                len: self.len(),
            });
        }
        self.set(idx, value);
        Ok(())
    }

    /// Returns an iterator over the values, as `Option<Elem>`.
    fn iter_opt(&self) -> impl Iterator<Item = Option<Self::Elem>> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }

    /// Materializes the logical content, nulls as `None`.
    fn to_options(&self) -> Vec<Option<Self::Elem>> {
        self.iter_opt().collect()
    }

    /// Concatenation into a new vector; nulls preserved positionally.
    fn union_all(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.append_array(other);
        out
    }

    /// Replaces every occurrence of `old` with `new`. Null is an ordinary
    /// matchable value on both sides.
    fn replace(&mut self, old: Option<Self::Elem>, new: Option<Self::Elem>) {
        for i in 0..self.len() {
            if self.get(i) == old {
                self.set(i, new.clone());
            }
        }
    }

    /// Keeps the elements whose condition slot is definitely true; null and
    /// false slots are both dropped. Relative order is preserved.
    fn filter(&self, condition: &BooleanArray) -> Result<Self, MinvecError> {
        check_len_eq(self.len(), condition.len())?;
        let mut out = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            if condition.get(i) == Some(true) {
                out.push(self.get(i));
            }
        }
        Ok(Self::from_options(out))
    }

    /// Gathers elements at the given positions into a new vector. Every
    /// index must be in range.
    fn take(&self, indexes: &IndexArray) -> Result<Self, MinvecError> {
        let mut out = Vec::with_capacity(indexes.len());
        for &j in indexes.iter() {
            if j >= self.len() {
                return Err(MinvecError::IndexOutOfRange {
                    index: j,
                    len: self.len(),
                });
            }
            out.push(self.get(j));
        }
        Ok(Self::from_options(out))
    }

    /// Whole-vector structural equivalence under Kleene semantics: a length
    /// mismatch is definitely `false`; any definite pairwise inequality is
    /// `false` even when other positions are unknown; no inequality with at
    /// least one unknown pair is `None`; otherwise `true`.
    fn all_equal(&self, other: &Self) -> Option<bool> {
        if self.len() != other.len() {
            return Some(false);
        }
        let mut result = Some(true);
        for (x, y) in self.iter_opt().zip(other.iter_opt()) {
            match (x, y) {
                (Some(a), Some(b)) => {
                    if a != b {
                        return Some(false);
                    }
                }
                _ => result = None,
            }
        }
        result
    }

    /// Elementwise equality with simple null propagation: a null on either
    /// side makes that pair's answer null.
    fn equal(&self, other: &Self) -> Result<BooleanArray, MinvecError> {
        check_len_eq(self.len(), other.len())?;
        let out = self
            .iter_opt()
            .zip(other.iter_opt())
            .map(|(x, y)| match (x, y) {
                (Some(a), Some(b)) => Some(a == b),
                _ => None,
            })
            .collect();
        Ok(BooleanArray::from_options(out))
    }

    /// Elementwise inequality with simple null propagation.
    fn not_equal(&self, other: &Self) -> Result<BooleanArray, MinvecError> {
        check_len_eq(self.len(), other.len())?;
        let out = self
            .iter_opt()
            .zip(other.iter_opt())
            .map(|(x, y)| match (x, y) {
                (Some(a), Some(b)) => Some(a != b),
                _ => None,
            })
            .collect();
        Ok(BooleanArray::from_options(out))
    }

    /// Scalar form of [`MaskedArray::equal`].
    fn equal_scala(&self, elem: &Self::Elem) -> BooleanArray {
        let out = self
            .iter_opt()
            .map(|x| x.map(|a| a == *elem))
            .collect();
        BooleanArray::from_options(out)
    }

    /// Scalar form of [`MaskedArray::not_equal`].
    fn not_equal_scala(&self, elem: &Self::Elem) -> BooleanArray {
        let out = self
            .iter_opt()
            .map(|x| x.map(|a| a != *elem))
            .collect();
        BooleanArray::from_options(out)
    }

    /// Fixed-value repetition constructor.
    fn repeat(elem: Self::Elem, size: usize) -> Self {
        Self::from_options(vec![Some(elem); size])
    }

    /// Cyclic sampling from `src` up to `size` elements.
    fn cycle(src: &[Self::Elem], size: usize) -> Self {
        let out = src
            .iter()
            .cloned()
            .cycle()
            .take(size)
            .map(Some)
            .collect();
        Self::from_options(out)
    }

    /// Random sampling (with replacement) from `src` to `size` elements.
    /// An empty source yields an empty vector.
    fn sample(src: &[Self::Elem], size: usize) -> Self {
        if src.is_empty() {
            return Self::from_options(Vec::new());
        }
        let mut rng = rand::thread_rng();
        let out = (0..size)
            .map(|_| Some(src[rng.gen_range(0..src.len())].clone()))
            .collect();
        Self::from_options(out)
    }
}
