//! Shared validation helpers used across kernels and array types.

use crate::enums::error::MinvecError;
use crate::structs::bitmask::Bitmask;

/// Checks that two vectors agree on length, the precondition for every
/// binary elementwise kernel.
#[inline]
pub fn check_len_eq(expected: usize, found: usize) -> Result<(), MinvecError> {
    if expected != found {
        Err(MinvecError::LengthMismatch { expected, found })
    } else {
        Ok(())
    }
}

/// Marks slot `idx` null, materializing an all-valid mask first when the
/// vector had none.
pub(crate) fn clear_validity(mask: &mut Option<Bitmask>, len: usize, idx: usize) {
    match mask {
        Some(m) => m.set(idx, false),
        None => {
            let mut m = Bitmask::new_set_all(len, true);
            m.set(idx, false);
            *mask = Some(m);
        }
    }
}

/// Appends one validity bit for a freshly pushed slot. `old_len` is the
/// length before the push. A maskless vector stays maskless for valid
/// pushes and grows a mask lazily on the first null.
pub(crate) fn push_validity(mask: &mut Option<Bitmask>, old_len: usize, valid: bool) {
    match mask {
        Some(m) => m.push(valid),
        None => {
            if !valid {
                let mut m = Bitmask::new_set_all(old_len, true);
                m.push(false);
                *mask = Some(m);
            }
        }
    }
}

/// Merges the validity of `src` (length `src_len`) onto the end of a vector
/// that already holds `dst_len` elements.
pub(crate) fn merge_validity(
    dst: &mut Option<Bitmask>,
    dst_len: usize,
    src: &Option<Bitmask>,
    src_len: usize,
) {
    match (dst.as_mut(), src) {
        (None, None) => {}
        (Some(m), None) => m.resize(dst_len + src_len, true),
        (Some(m), Some(s)) => {
            for i in 0..src_len {
                m.push(s.get(i));
            }
        }
        (None, Some(s)) => {
            if !s.all_set() {
                let mut m = Bitmask::new_set_all(dst_len, true);
                for i in 0..src_len {
                    m.push(s.get(i));
                }
                *dst = Some(m);
            }
        }
    }
}

/// Debug-asserts that a null mask, when present, covers exactly `len` slots.
#[inline]
pub fn validate_null_mask_len(len: usize, null_mask: &Option<Bitmask>) {
    if let Some(mask) = null_mask {
        debug_assert_eq!(
            mask.len(),
            len,
            "null mask length {} does not cover {} elements",
            mask.len(),
            len
        );
    }
}
