//! # **Sort / Unique Kernels** - *Deterministic Ordering With Nulls Last*
//!
//! In-place `sort(ascending)` and set-like `unique()` for the fixed-width
//! variants, stamped out by `impl_numeric_sort!` with a per-universe
//! comparator: plain `Ord` for integers, the IEEE total order for floats so
//! NaN sorts deterministically. `BooleanArray` and `StringArray` implement
//! the same contract against their own layouts in their modules.
//!
//! The null rule is fixed and documented: **nulls always land at the end**,
//! for both ascending and descending order. `unique()` returns the distinct
//! values ascending with at most one null entry collapsed to the end.

use crate::impl_numeric_sort;
use crate::structs::variants::float::FloatArray;
use crate::structs::variants::integer::IntegerArray;
use crate::traits::type_unions::Float;

impl_numeric_sort!(IntegerArray, Integer, |a: T, b: T| a.cmp(&b));
impl_numeric_sort!(FloatArray, Float, |a: T, b: T| a.total_order(b));
