//! Impl-generation macros for the fixed-width array variants.
//!
//! `IntegerArray<T>` and `FloatArray<T>` share one physical layout
//! (`data: Vec<T>` + optional `Bitmask`), so their constructors, the
//! `MaskedArray` contract, ordering comparisons and sort/unique kernels are
//! stamped out here rather than duplicated per file. `BooleanArray` (bit
//! packed) and `StringArray` (variable length) implement the same surfaces
//! directly in their own modules.

/// Implements constructors and the [`crate::MaskedArray`] contract for a
/// fixed-width array struct with `data: Vec<T>` + `null_mask` fields.
#[macro_export]
macro_rules! impl_primitive_array {
    ($Arr:ident, $Bound:ident) => {
        impl<T: $crate::traits::type_unions::$Bound> $Arr<T> {
            /// Constructs the array from parts, validating mask coverage.
            #[inline]
            pub fn new(
                data: Vec<T>,
                null_mask: Option<$crate::structs::bitmask::Bitmask>,
            ) -> Self {
                $crate::utils::validate_null_mask_len(data.len(), &null_mask);
                Self { data, null_mask }
            }

            /// Constructs an empty array with reserved capacity.
            #[inline]
            pub fn with_capacity(cap: usize, null_mask: bool) -> Self {
                Self {
                    data: Vec::with_capacity(cap),
                    null_mask: if null_mask {
                        Some($crate::structs::bitmask::Bitmask::with_capacity(cap))
                    } else {
                        None
                    },
                }
            }

            /// Constructs a dense array from a slice (no nulls).
            #[inline]
            pub fn from_slice(slice: &[T]) -> Self {
                Self {
                    data: slice.to_vec(),
                    null_mask: None,
                }
            }
        }

        impl<T: $crate::traits::type_unions::$Bound> $crate::traits::masked_array::MaskedArray
            for $Arr<T>
        {
            type Elem = T;

            fn from_options(items: Vec<Option<T>>) -> Self {
                let mut data = Vec::with_capacity(items.len());
                let mut null_mask = None;
                for (i, item) in items.iter().enumerate() {
                    match item {
                        Some(v) => data.push(*v),
                        None => {
                            data.push(T::default());
                            $crate::utils::clear_validity(&mut null_mask, items.len(), i);
                        }
                    }
                }
                Self { data, null_mask }
            }

            #[inline]
            fn len(&self) -> usize {
                self.data.len()
            }

            #[inline]
            fn null_mask(&self) -> Option<&$crate::structs::bitmask::Bitmask> {
                self.null_mask.as_ref()
            }

            #[inline]
            fn get(&self, idx: usize) -> Option<T> {
                if idx >= self.data.len() || self.is_null(idx) {
                    None
                } else {
                    Some(self.data[idx])
                }
            }

            fn set(&mut self, idx: usize, value: Option<T>) {
                match value {
                    Some(v) => {
                        self.data[idx] = v;
                        if let Some(mask) = &mut self.null_mask {
                            mask.set(idx, true);
                        }
                    }
                    None => {
                        self.data[idx] = T::default();
                        $crate::utils::clear_validity(
                            &mut self.null_mask,
                            self.data.len(),
                            idx,
                        );
                    }
                }
            }

            fn push(&mut self, value: Option<T>) {
                let old_len = self.data.len();
                match value {
                    Some(v) => {
                        self.data.push(v);
                        $crate::utils::push_validity(&mut self.null_mask, old_len, true);
                    }
                    None => {
                        self.data.push(T::default());
                        $crate::utils::push_validity(&mut self.null_mask, old_len, false);
                    }
                }
            }

            fn pop(&mut self) -> Result<Option<T>, $crate::enums::error::MinvecError> {
                if self.data.is_empty() {
                    return Err($crate::enums::error::MinvecError::IndexOutOfRange {
                        index: 0,
                        len: 0,
                    });
                }
                let last = self.data.len() - 1;
                let out = self.get(last);
                self.data.pop();
                if let Some(mask) = &mut self.null_mask {
                    mask.resize(last, true);
                }
                Ok(out)
            }

            fn append_array(&mut self, other: &Self) {
                let old_len = self.data.len();
                self.data.extend_from_slice(&other.data);
                $crate::utils::merge_validity(
                    &mut self.null_mask,
                    old_len,
                    &other.null_mask,
                    other.data.len(),
                );
            }
        }
    };
}

/// Implements the null-propagating ordering comparisons for a fixed-width
/// numeric array type.
#[macro_export]
macro_rules! impl_numeric_compare {
    ($Arr:ident, $Bound:ident) => {
        impl<T: $crate::traits::type_unions::$Bound> $Arr<T> {
            /// Elementwise `>` with simple null propagation.
            pub fn greater_than(
                &self,
                other: &Self,
            ) -> Result<$crate::BooleanArray, $crate::MinvecError> {
                $crate::kernels::compare::cmp_vec(self, other, |x, y| x > y)
            }

            /// Elementwise `<` with simple null propagation.
            pub fn less_than(
                &self,
                other: &Self,
            ) -> Result<$crate::BooleanArray, $crate::MinvecError> {
                $crate::kernels::compare::cmp_vec(self, other, |x, y| x < y)
            }

            /// Elementwise `>=` with simple null propagation.
            pub fn greater_than_or_equal(
                &self,
                other: &Self,
            ) -> Result<$crate::BooleanArray, $crate::MinvecError> {
                $crate::kernels::compare::cmp_vec(self, other, |x, y| x >= y)
            }

            /// Elementwise `<=` with simple null propagation.
            pub fn less_than_or_equal(
                &self,
                other: &Self,
            ) -> Result<$crate::BooleanArray, $crate::MinvecError> {
                $crate::kernels::compare::cmp_vec(self, other, |x, y| x <= y)
            }

            /// Scalar `>` comparison.
            pub fn greater_than_scala(&self, elem: T) -> $crate::BooleanArray {
                $crate::kernels::compare::cmp_scala(self, elem, |x, y| x > y)
            }

            /// Scalar `<` comparison.
            pub fn less_than_scala(&self, elem: T) -> $crate::BooleanArray {
                $crate::kernels::compare::cmp_scala(self, elem, |x, y| x < y)
            }

            /// Scalar `>=` comparison.
            pub fn greater_than_or_equal_scala(&self, elem: T) -> $crate::BooleanArray {
                $crate::kernels::compare::cmp_scala(self, elem, |x, y| x >= y)
            }

            /// Scalar `<=` comparison.
            pub fn less_than_or_equal_scala(&self, elem: T) -> $crate::BooleanArray {
                $crate::kernels::compare::cmp_scala(self, elem, |x, y| x <= y)
            }
        }
    };
}

/// Implements the elementwise `add`/`sub`/`mul` family (vector and scalar
/// forms) for a fixed-width numeric array type. Division and `pow_scala`
/// differ between the integer and float universes and live in
/// `kernels/arithmetic.rs` directly.
#[macro_export]
macro_rules! impl_numeric_arith {
    ($Arr:ident, $Bound:ident) => {
        impl<T: $crate::traits::type_unions::$Bound> $Arr<T> {
            /// Elementwise addition with simple null propagation.
            pub fn add(&self, other: &Self) -> Result<Self, $crate::MinvecError> {
                $crate::kernels::arithmetic::zip_numeric(self, other, |x, y| x + y)
            }

            /// Elementwise subtraction with simple null propagation.
            pub fn sub(&self, other: &Self) -> Result<Self, $crate::MinvecError> {
                $crate::kernels::arithmetic::zip_numeric(self, other, |x, y| x - y)
            }

            /// Elementwise multiplication with simple null propagation.
            pub fn mul(&self, other: &Self) -> Result<Self, $crate::MinvecError> {
                $crate::kernels::arithmetic::zip_numeric(self, other, |x, y| x * y)
            }

            /// Scalar addition; nulls stay null.
            pub fn add_scala(&self, elem: T) -> Self {
                $crate::kernels::arithmetic::map_numeric(self, |x| x + elem)
            }

            /// Scalar subtraction; nulls stay null.
            pub fn sub_scala(&self, elem: T) -> Self {
                $crate::kernels::arithmetic::map_numeric(self, |x| x - elem)
            }

            /// Scalar multiplication; nulls stay null.
            pub fn mul_scala(&self, elem: T) -> Self {
                $crate::kernels::arithmetic::map_numeric(self, |x| x * elem)
            }
        }
    };
}

/// Implements the in-place sort and `unique` kernels for a fixed-width
/// numeric array type, parameterized on the comparator expression.
#[macro_export]
macro_rules! impl_numeric_sort {
    ($Arr:ident, $Bound:ident, $cmp:expr) => {
        impl<T: $crate::traits::type_unions::$Bound> $Arr<T> {
            /// Sorts in place. Nulls always land at the end, for both
            /// directions; the valid prefix is ordered per `ascending`.
            pub fn sort(&mut self, ascending: bool) {
                use $crate::traits::masked_array::MaskedArray;
                let nulls = self.null_count();
                let mut valid: Vec<T> = self.iter_opt().flatten().collect();
                let cmp = $cmp;
                valid.sort_unstable_by(|a: &T, b: &T| cmp(*a, *b));
                if !ascending {
                    valid.reverse();
                }
                let mut out: Vec<Option<T>> = valid.into_iter().map(Some).collect();
                out.extend(std::iter::repeat_with(|| None).take(nulls));
                *self = Self::from_options(out);
            }

            /// Distinct values sorted ascending, with at most one null entry
            /// collapsed to the end.
            pub fn unique(&self) -> Self {
                use $crate::traits::masked_array::MaskedArray;
                let had_null = self.null_count() > 0;
                let mut valid: Vec<T> = self.iter_opt().flatten().collect();
                let cmp = $cmp;
                valid.sort_unstable_by(|a: &T, b: &T| cmp(*a, *b));
                valid.dedup();
                let mut out: Vec<Option<T>> = valid.into_iter().map(Some).collect();
                if had_null {
                    out.push(None);
                }
                Self::from_options(out)
            }
        }
    };
}
