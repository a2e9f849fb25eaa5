//! # **StringArray Module** - *Offset-Based Nullable UTF-8 Vector*
//!
//! Variable-length string vector over two flat buffers: an `offsets` vector
//! with one extra terminal entry, and a contiguous UTF-8 byte buffer. The
//! null placeholder is the empty slot (equal consecutive offsets), with the
//! validity mask distinguishing genuine empty strings from nulls.

use std::fmt::{Display, Formatter};

use crate::enums::error::MinvecError;
use crate::structs::bitmask::Bitmask;
use crate::traits::masked_array::MaskedArray;
use crate::traits::print::MAX_PREVIEW;

/// Nullable UTF-8 string vector with offset-based storage.
///
/// ### Fields
/// - `offsets`: slot boundaries into `data`; always `len + 1` entries,
///   starting at 0 and non-decreasing.
/// - `data`: contiguous UTF-8 bytes of every value.
/// - `null_mask`: optional bit-packed validity bitmap (1 = valid, 0 = null).
#[derive(PartialEq, Clone, Debug)]
pub struct StringArray {
    /// Slot boundaries; `offsets[i]..offsets[i + 1]` is element `i`.
    pub offsets: Vec<usize>,
    /// Contiguous UTF-8 value bytes.
    pub data: Vec<u8>,
    /// Optional null mask (bit-packed; 1=valid, 0=null).
    pub null_mask: Option<Bitmask>,
}

impl Default for StringArray {
    fn default() -> Self {
        Self {
            offsets: vec![0],
            data: Vec::new(),
            null_mask: None,
        }
    }
}

impl StringArray {
    /// Constructs a dense StringArray from string slices (no nulls).
    pub fn from_slice<S: AsRef<str>>(slice: &[S]) -> Self {
        let mut out = Self::default();
        for s in slice {
            out.push(Some(s.as_ref().to_string()));
        }
        out
    }

    /// Borrowed view of element `idx`, or `None` if null or out of range.
    pub fn get_str(&self, idx: usize) -> Option<&str> {
        if idx >= self.len() || self.is_null(idx) {
            return None;
        }
        let bytes = &self.data[self.offsets[idx]..self.offsets[idx + 1]];
        std::str::from_utf8(bytes).ok()
    }

    /// Sorts in place, bytewise ascending or descending; nulls always last.
    pub fn sort(&mut self, ascending: bool) {
        let nulls = self.null_count();
        let mut valid: Vec<String> = self.iter_opt().flatten().collect();
        valid.sort_unstable();
        if !ascending {
            valid.reverse();
        }
        let mut out: Vec<Option<String>> = valid.into_iter().map(Some).collect();
        out.extend(std::iter::repeat_with(|| None).take(nulls));
        *self = Self::from_options(out);
    }

    /// Distinct values sorted ascending, with at most one null entry
    /// collapsed to the end.
    pub fn unique(&self) -> Self {
        let had_null = self.null_count() > 0;
        let mut valid: Vec<String> = self.iter_opt().flatten().collect();
        valid.sort_unstable();
        valid.dedup();
        let mut out: Vec<Option<String>> = valid.into_iter().map(Some).collect();
        if had_null {
            out.push(None);
        }
        Self::from_options(out)
    }

    /// Rewrites slot `idx` with `bytes`, shifting the tail offsets.
    fn splice_slot(&mut self, idx: usize, bytes: &[u8]) {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        self.data.splice(start..end, bytes.iter().copied());
        let old_width = end - start;
        let new_width = bytes.len();
        if new_width >= old_width {
            let grow = new_width - old_width;
            for off in &mut self.offsets[idx + 1..] {
                *off += grow;
            }
        } else {
            let shrink = old_width - new_width;
            for off in &mut self.offsets[idx + 1..] {
                *off -= shrink;
            }
        }
    }
}

impl MaskedArray for StringArray {
    type Elem = String;

    fn from_options(items: Vec<Option<String>>) -> Self {
        let len = items.len();
        let mut out = Self {
            offsets: Vec::with_capacity(len + 1),
            data: Vec::new(),
            null_mask: None,
        };
        out.offsets.push(0);
        for (i, item) in items.into_iter().enumerate() {
            match item {
                Some(s) => {
                    out.data.extend_from_slice(s.as_bytes());
                    out.offsets.push(out.data.len());
                }
                None => {
                    out.offsets.push(out.data.len());
                    crate::utils::clear_validity(&mut out.null_mask, len, i);
                }
            }
        }
        out
    }

    #[inline]
    fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    fn null_mask(&self) -> Option<&Bitmask> {
        self.null_mask.as_ref()
    }

    #[inline]
    fn get(&self, idx: usize) -> Option<String> {
        self.get_str(idx).map(|s| s.to_string())
    }

    fn set(&mut self, idx: usize, value: Option<String>) {
        match value {
            Some(s) => {
                self.splice_slot(idx, s.as_bytes());
                if let Some(mask) = &mut self.null_mask {
                    mask.set(idx, true);
                }
            }
            None => {
                self.splice_slot(idx, &[]);
                let len = self.len();
                crate::utils::clear_validity(&mut self.null_mask, len, idx);
            }
        }
    }

    fn push(&mut self, value: Option<String>) {
        let old_len = self.len();
        match value {
            Some(s) => {
                self.data.extend_from_slice(s.as_bytes());
                self.offsets.push(self.data.len());
                crate::utils::push_validity(&mut self.null_mask, old_len, true);
            }
            None => {
                self.offsets.push(self.data.len());
                crate::utils::push_validity(&mut self.null_mask, old_len, false);
            }
        }
    }

    fn pop(&mut self) -> Result<Option<String>, MinvecError> {
        let len = self.len();
        if len == 0 {
            return Err(MinvecError::IndexOutOfRange { index: 0, len: 0 });
        }
        let out = self.get(len - 1);
        self.data.truncate(self.offsets[len - 1]);
        self.offsets.pop();
        if let Some(mask) = &mut self.null_mask {
            mask.resize(len - 1, true);
        }
        Ok(out)
    }

    fn append_array(&mut self, other: &Self) {
        let old_len = self.len();
        let base = self.data.len();
        self.data.extend_from_slice(&other.data);
        for off in &other.offsets[1..] {
            self.offsets.push(base + off);
        }
        crate::utils::merge_validity(&mut self.null_mask, old_len, &other.null_mask, other.len());
    }
}

impl Display for StringArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let len = self.len();
        let nulls = self.null_count();
        writeln!(f, "StringArray [{} values] (dtype: string, nulls: {})", len, nulls)?;

        write!(f, "[")?;
        for i in 0..usize::min(len, MAX_PREVIEW) {
            if i > 0 {
                write!(f, ", ")?;
            }
            match self.get_str(i) {
                Some(s) => write!(f, "\"{}\"", s)?,
                None => write!(f, "null")?,
            }
        }
        if len > MAX_PREVIEW {
            write!(f, ", … ({} total)", len)?;
        }
        write!(f, "]")
    }
}
