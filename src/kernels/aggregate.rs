//! # **Aggregate Kernels** - *Null-Skipping Statistics*
//!
//! `sum`, `mean`, `max`, `min`, `argmax`, `argmin`, `var(ddof)` and
//! `counter`. Null elements are absent from every statistic (skipped, not
//! treated as zero). Statistics that need at least one value fail with the
//! `NoData` domain error on an empty or entirely-null vector, so callers can
//! tell "no data" apart from validation failures. `var` is defined on the
//! float variants only; float `max`/`min` use the IEEE total order so a NaN
//! cannot produce a nondeterministic result.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use num_traits::{ToPrimitive, Zero};

use crate::enums::error::MinvecError;
use crate::structs::variants::boolean::BooleanArray;
use crate::structs::variants::float::FloatArray;
use crate::structs::variants::integer::IntegerArray;
use crate::structs::variants::string::StringArray;
use crate::traits::masked_array::MaskedArray;
use crate::traits::type_unions::{Float, Integer};

const NO_DATA: &str = "statistic over an empty or all-null vector";

/// Occurrence counts of the non-null values.
pub fn counter<A: MaskedArray>(arr: &A) -> HashMap<A::Elem, usize>
where
    A::Elem: Eq + Hash,
{
    let mut out = HashMap::new();
    for v in arr.iter_opt().flatten() {
        *out.entry(v).or_insert(0) += 1;
    }
    out
}

impl<T: Integer> IntegerArray<T> {
    /// Sum of the non-null elements; an empty or all-null vector sums to 0.
    pub fn sum(&self) -> T {
        self.iter_opt().flatten().fold(T::zero(), |acc, x| acc + x)
    }

    /// Mean of the non-null elements.
    pub fn mean(&self) -> Result<f64, MinvecError> {
        let mut total = 0.0;
        let mut count = 0usize;
        for v in self.iter_opt().flatten() {
            total += v.to_f64().unwrap_or_default();
            count += 1;
        }
        if count == 0 {
            return Err(MinvecError::NoData { message: NO_DATA });
        }
        Ok(total / count as f64)
    }

    /// Largest non-null element.
    pub fn max(&self) -> Result<T, MinvecError> {
        self.iter_opt()
            .flatten()
            .max()
            .ok_or(MinvecError::NoData { message: NO_DATA })
    }

    /// Smallest non-null element.
    pub fn min(&self) -> Result<T, MinvecError> {
        self.iter_opt()
            .flatten()
            .min()
            .ok_or(MinvecError::NoData { message: NO_DATA })
    }

    /// Position of the largest non-null element; first occurrence wins.
    pub fn argmax(&self) -> Result<usize, MinvecError> {
        let mut best: Option<(usize, T)> = None;
        for (i, v) in self.iter_opt().enumerate() {
            if let Some(v) = v {
                let better = match best {
                    Some((_, bv)) => v > bv,
                    None => true,
                };
                if better {
                    best = Some((i, v));
                }
            }
        }
        best.map(|(i, _)| i)
            .ok_or(MinvecError::NoData { message: NO_DATA })
    }

    /// Position of the smallest non-null element; first occurrence wins.
    pub fn argmin(&self) -> Result<usize, MinvecError> {
        let mut best: Option<(usize, T)> = None;
        for (i, v) in self.iter_opt().enumerate() {
            if let Some(v) = v {
                let better = match best {
                    Some((_, bv)) => v < bv,
                    None => true,
                };
                if better {
                    best = Some((i, v));
                }
            }
        }
        best.map(|(i, _)| i)
            .ok_or(MinvecError::NoData { message: NO_DATA })
    }

    /// Occurrence counts of the non-null values.
    pub fn counter(&self) -> HashMap<T, usize> {
        counter(self)
    }
}

impl<T: Float> FloatArray<T> {
    /// Sum of the non-null elements; an empty or all-null vector sums to 0.
    pub fn sum(&self) -> T {
        self.iter_opt().flatten().fold(T::zero(), |acc, x| acc + x)
    }

    /// Mean of the non-null elements.
    pub fn mean(&self) -> Result<f64, MinvecError> {
        let mut total = 0.0;
        let mut count = 0usize;
        for v in self.iter_opt().flatten() {
            total += v.to_f64().unwrap_or_default();
            count += 1;
        }
        if count == 0 {
            return Err(MinvecError::NoData { message: NO_DATA });
        }
        Ok(total / count as f64)
    }

    /// Largest non-null element under the IEEE total order.
    pub fn max(&self) -> Result<T, MinvecError> {
        self.iter_opt()
            .flatten()
            .reduce(|a, b| if b.total_order(a) == Ordering::Greater { b } else { a })
            .ok_or(MinvecError::NoData { message: NO_DATA })
    }

    /// Smallest non-null element under the IEEE total order.
    pub fn min(&self) -> Result<T, MinvecError> {
        self.iter_opt()
            .flatten()
            .reduce(|a, b| if b.total_order(a) == Ordering::Less { b } else { a })
            .ok_or(MinvecError::NoData { message: NO_DATA })
    }

    /// Position of the largest non-null element; first occurrence wins.
    pub fn argmax(&self) -> Result<usize, MinvecError> {
        let mut best: Option<(usize, T)> = None;
        for (i, v) in self.iter_opt().enumerate() {
            if let Some(v) = v {
                let better = match best {
                    Some((_, bv)) => v.total_order(bv) == Ordering::Greater,
                    None => true,
                };
                if better {
                    best = Some((i, v));
                }
            }
        }
        best.map(|(i, _)| i)
            .ok_or(MinvecError::NoData { message: NO_DATA })
    }

    /// Position of the smallest non-null element; first occurrence wins.
    pub fn argmin(&self) -> Result<usize, MinvecError> {
        let mut best: Option<(usize, T)> = None;
        for (i, v) in self.iter_opt().enumerate() {
            if let Some(v) = v {
                let better = match best {
                    Some((_, bv)) => v.total_order(bv) == Ordering::Less,
                    None => true,
                };
                if better {
                    best = Some((i, v));
                }
            }
        }
        best.map(|(i, _)| i)
            .ok_or(MinvecError::NoData { message: NO_DATA })
    }

    /// Sample variance with `ddof` delta degrees of freedom, over the
    /// non-null elements. Fails with `NoData` when fewer than `ddof + 1`
    /// values remain.
    pub fn var(&self, ddof: usize) -> Result<f64, MinvecError> {
        let vals: Vec<f64> = self
            .iter_opt()
            .flatten()
            .map(|v| v.to_f64().unwrap_or_default())
            .collect();
        if vals.is_empty() || vals.len() <= ddof {
            return Err(MinvecError::NoData { message: NO_DATA });
        }
        let mean = vals.iter().sum::<f64>() / vals.len() as f64;
        let ss: f64 = vals.iter().map(|x| (x - mean) * (x - mean)).sum();
        Ok(ss / (vals.len() - ddof) as f64)
    }
}

impl BooleanArray {
    /// Number of definitely-true elements, as a sum over 0/1.
    pub fn sum(&self) -> i64 {
        self.iter_opt()
            .flatten()
            .map(|b| if b { 1 } else { 0 })
            .sum()
    }

    /// Occurrence counts of the non-null values.
    pub fn counter(&self) -> HashMap<bool, usize> {
        counter(self)
    }
}

impl StringArray {
    /// Occurrence counts of the non-null values.
    pub fn counter(&self) -> HashMap<String, usize> {
        counter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_mean_skip_nulls() {
        let a = IntegerArray::<i64>::from_options(vec![Some(1), None, Some(5)]);
        assert_eq!(a.sum(), 6);
        assert_eq!(a.mean(), Ok(3.0));
        // Nulls are absent, not zero.
        let b = IntegerArray::<i64>::from_options(vec![Some(4), None]);
        assert_eq!(b.mean(), Ok(4.0));
    }

    #[test]
    fn test_no_data_errors() {
        let empty = IntegerArray::<i32>::default();
        assert!(empty.max().is_err());
        assert!(empty.mean().is_err());
        let all_null = IntegerArray::<i32>::from_options(vec![None, None]);
        assert!(all_null.min().is_err());
        assert!(all_null.argmax().is_err());
        assert_eq!(all_null.sum(), 0);
    }

    #[test]
    fn test_max_min_arg_first_occurrence() {
        let a = IntegerArray::<i64>::from_options(vec![None, Some(5), Some(2), Some(5)]);
        assert_eq!(a.max(), Ok(5));
        assert_eq!(a.min(), Ok(2));
        assert_eq!(a.argmax(), Ok(1));
        assert_eq!(a.argmin(), Ok(2));
    }

    #[test]
    fn test_float_aggregates_with_nulls() {
        let f = FloatArray::<f64>::from_options(vec![Some(1.0), None, Some(2.0), Some(3.0)]);
        assert_eq!(f.sum(), 6.0);
        assert_eq!(f.mean(), Ok(2.0));
        assert_eq!(f.max(), Ok(3.0));
        assert_eq!(f.argmin(), Ok(0));
    }

    #[test]
    fn test_var_ddof() {
        let f = FloatArray::<f64>::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(f.var(0), Ok(1.25));
        assert!((f.var(1).unwrap() - 5.0 / 3.0).abs() < 1e-12);
        assert!(f.var(4).is_err());
        let short = FloatArray::<f64>::from_options(vec![Some(1.0), None]);
        assert!(short.var(1).is_err());
    }

    #[test]
    fn test_counter_excludes_nulls() {
        let s = StringArray::from_options(vec![
            Some("a".to_string()),
            None,
            Some("a".to_string()),
            Some("b".to_string()),
            None,
        ]);
        let counts = s.counter();
        assert_eq!(counts.get("a"), Some(&2));
        assert_eq!(counts.get("b"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_bool_sum() {
        let b = BooleanArray::from_options(vec![Some(true), Some(false), None, Some(true)]);
        assert_eq!(b.sum(), 2);
    }
}
