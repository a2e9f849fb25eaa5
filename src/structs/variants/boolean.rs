//! # **BooleanArray Module** - *Bit-Packed Nullable Boolean Vector*
//!
//! Boolean vector whose values and validity are both stored as packed
//! [`Bitmask`]s (LSB = first value). The placeholder at null slots is
//! `false` and is kept clear so the word-wise Kleene kernels in
//! `kernels/logic.rs` can operate on raw bytes without re-normalizing.

use std::fmt::{Display, Formatter};

use crate::enums::error::MinvecError;
use crate::structs::bitmask::Bitmask;
use crate::traits::masked_array::MaskedArray;
use crate::traits::print::MAX_PREVIEW;
use crate::utils::validate_null_mask_len;

/// Bit-packed nullable boolean vector.
///
/// ### Fields
/// - `data`: bit-packed boolean values; null slots are kept `false`.
/// - `null_mask`: optional bit-packed validity bitmap (1 = valid, 0 = null).
/// - `len`: number of logical elements (not bytes).
///
/// ## Example
/// ```rust
/// use minvec::{BooleanArray, MaskedArray};
///
/// let arr = BooleanArray::from_options(vec![Some(true), None, Some(false)]);
/// assert_eq!(arr.get(0), Some(true));
/// assert_eq!(arr.get(1), None);
/// assert_eq!(arr.null_count(), 1);
/// ```
#[derive(PartialEq, Clone, Debug, Default)]
pub struct BooleanArray {
    /// Bit-packed boolean values.
    pub data: Bitmask,
    /// Optional null mask (bit-packed; 1=valid, 0=null).
    pub null_mask: Option<Bitmask>,
    /// Number of elements.
    pub len: usize,
}

impl BooleanArray {
    /// Constructs a BooleanArray from parts, validating mask coverage.
    #[inline]
    pub fn new(data: Bitmask, null_mask: Option<Bitmask>) -> Self {
        let len = data.len();
        validate_null_mask_len(len, &null_mask);
        Self {
            data,
            null_mask,
            len,
        }
    }

    /// Constructs a dense BooleanArray from a slice of `bool` (no nulls).
    #[inline]
    pub fn from_slice(slice: &[bool]) -> Self {
        Self {
            data: Bitmask::from_bools(slice),
            null_mask: None,
            len: slice.len(),
        }
    }

    /// Sorts in place: `false < true`, nulls always last.
    pub fn sort(&mut self, ascending: bool) {
        let nulls = self.null_count();
        let trues = self.count_true();
        let falses = self.len - nulls - trues;
        let mut out: Vec<Option<bool>> = Vec::with_capacity(self.len);
        if ascending {
            out.extend(std::iter::repeat(Some(false)).take(falses));
            out.extend(std::iter::repeat(Some(true)).take(trues));
        } else {
            out.extend(std::iter::repeat(Some(true)).take(trues));
            out.extend(std::iter::repeat(Some(false)).take(falses));
        }
        out.extend(std::iter::repeat(None).take(nulls));
        *self = Self::from_options(out);
    }

    /// Distinct values ascending (`false`, then `true`), with at most one
    /// null entry collapsed to the end.
    pub fn unique(&self) -> Self {
        let nulls = self.null_count();
        let trues = self.count_true();
        let falses = self.len - nulls - trues;
        let mut out = Vec::new();
        if falses > 0 {
            out.push(Some(false));
        }
        if trues > 0 {
            out.push(Some(true));
        }
        if nulls > 0 {
            out.push(None);
        }
        Self::from_options(out)
    }

    /// Number of definitely-true elements.
    pub(crate) fn count_true(&self) -> usize {
        match &self.null_mask {
            Some(mask) => (&self.data & mask).count_ones(),
            None => self.data.count_ones(),
        }
    }
}

impl MaskedArray for BooleanArray {
    type Elem = bool;

    fn from_options(items: Vec<Option<bool>>) -> Self {
        let len = items.len();
        let mut data = Bitmask::new_set_all(len, false);
        let mut null_mask = None;
        for (i, item) in items.iter().enumerate() {
            match item {
                Some(v) => {
                    if *v {
                        data.set(i, true);
                    }
                }
                None => {
                    crate::utils::clear_validity(&mut null_mask, len, i);
                }
            }
        }
        Self {
            data,
            null_mask,
            len,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn null_mask(&self) -> Option<&Bitmask> {
        self.null_mask.as_ref()
    }

    #[inline]
    fn get(&self, idx: usize) -> Option<bool> {
        if idx >= self.len || self.is_null(idx) {
            None
        } else {
            Some(self.data.get(idx))
        }
    }

    fn set(&mut self, idx: usize, value: Option<bool>) {
        match value {
            Some(v) => {
                self.data.set(idx, v);
                if let Some(mask) = &mut self.null_mask {
                    mask.set(idx, true);
                }
            }
            None => {
                self.data.set(idx, false);
                crate::utils::clear_validity(&mut self.null_mask, self.len, idx);
            }
        }
    }

    fn push(&mut self, value: Option<bool>) {
        let old_len = self.len;
        match value {
            Some(v) => {
                self.data.push(v);
                crate::utils::push_validity(&mut self.null_mask, old_len, true);
            }
            None => {
                self.data.push(false);
                crate::utils::push_validity(&mut self.null_mask, old_len, false);
            }
        }
        self.len += 1;
    }

    fn pop(&mut self) -> Result<Option<bool>, MinvecError> {
        if self.len == 0 {
            return Err(MinvecError::IndexOutOfRange { index: 0, len: 0 });
        }
        let last = self.len - 1;
        let out = self.get(last);
        self.data.resize(last, false);
        if let Some(mask) = &mut self.null_mask {
            mask.resize(last, true);
        }
        self.len = last;
        Ok(out)
    }

    fn append_array(&mut self, other: &Self) {
        let old_len = self.len;
        for i in 0..other.len {
            self.data.push(other.data.get(i));
        }
        crate::utils::merge_validity(&mut self.null_mask, old_len, &other.null_mask, other.len);
        self.len += other.len;
    }
}

impl Display for BooleanArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let nulls = self.null_count();
        writeln!(f, "BooleanArray [{} values] (dtype: bool, nulls: {})", self.len, nulls)?;

        write!(f, "[")?;
        for i in 0..usize::min(self.len, MAX_PREVIEW) {
            if i > 0 {
                write!(f, ", ")?;
            }
            let val = match self.get(i) {
                Some(true) => "true",
                Some(false) => "false",
                None => "null",
            };
            write!(f, "{val}")?;
        }
        if self.len > MAX_PREVIEW {
            write!(f, ", … ({} total)", self.len)?;
        }
        write!(f, "]")
    }
}
