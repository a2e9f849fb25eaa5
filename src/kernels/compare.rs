//! # **Comparison Kernels** - *Null-Propagating Ordering Comparisons*
//!
//! The generic zip machinery behind the ordering comparisons that
//! `impl_numeric_compare!` stamps onto the fixed-width variants. A null at
//! either input position yields a null in the Bool result — plain
//! propagation, deliberately unlike the Kleene reduction in
//! `kernels/logic.rs`. Elementwise `equal`/`not_equal` live on the
//! `MaskedArray` trait so the non-numeric dtypes share them.

use crate::enums::error::MinvecError;
use crate::structs::variants::boolean::BooleanArray;
use crate::traits::masked_array::MaskedArray;
use crate::utils::check_len_eq;

/// Binary comparison kernel: null where either operand is null.
pub fn cmp_vec<A: MaskedArray>(
    a: &A,
    b: &A,
    f: impl Fn(A::Elem, A::Elem) -> bool,
) -> Result<BooleanArray, MinvecError> {
    check_len_eq(a.len(), b.len())?;
    let out = a
        .iter_opt()
        .zip(b.iter_opt())
        .map(|(x, y)| match (x, y) {
            (Some(p), Some(q)) => Some(f(p, q)),
            _ => None,
        })
        .collect();
    Ok(BooleanArray::from_options(out))
}

/// Scalar comparison kernel: nulls stay null.
pub fn cmp_scala<A: MaskedArray>(
    a: &A,
    elem: A::Elem,
    f: impl Fn(A::Elem, A::Elem) -> bool,
) -> BooleanArray {
    let out = a
        .iter_opt()
        .map(|x| x.map(|v| f(v, elem.clone())))
        .collect();
    BooleanArray::from_options(out)
}

#[cfg(test)]
mod tests {
    use crate::{FloatArray, IntegerArray, MaskedArray, StringArray};

    #[test]
    fn test_ordering_comparisons() {
        let a = IntegerArray::<i64>::from_slice(&[1, 2, 3]);
        let b = IntegerArray::<i64>::from_slice(&[2, 2, 2]);
        assert_eq!(
            a.less_than(&b).unwrap().to_options(),
            vec![Some(true), Some(false), Some(false)]
        );
        assert_eq!(
            a.greater_than_or_equal(&b).unwrap().to_options(),
            vec![Some(false), Some(true), Some(true)]
        );
    }

    #[test]
    fn test_ordering_null_propagation() {
        let a = FloatArray::<f64>::from_options(vec![Some(1.0), None]);
        let b = FloatArray::<f64>::from_slice(&[0.0, 0.0]);
        assert_eq!(
            a.greater_than(&b).unwrap().to_options(),
            vec![Some(true), None]
        );
        assert_eq!(a.less_than_scala(2.0).to_options(), vec![Some(true), None]);
    }

    #[test]
    fn test_elementwise_equal_simple_propagation() {
        let a = IntegerArray::<i64>::from_options(vec![Some(1), None]);
        let b = IntegerArray::<i64>::from_slice(&[1, 2]);
        assert_eq!(a.equal(&b).unwrap().to_options(), vec![Some(true), None]);
        assert_eq!(
            a.not_equal(&b).unwrap().to_options(),
            vec![Some(false), None]
        );
    }

    #[test]
    fn test_equal_scala_on_strings() {
        let s = StringArray::from_options(vec![
            Some("foo".to_string()),
            None,
            Some("bar".to_string()),
        ]);
        assert_eq!(
            s.equal_scala(&"foo".to_string()).to_options(),
            vec![Some(true), None, Some(false)]
        );
    }

    #[test]
    fn test_all_equal_kleene_reduction() {
        let a = IntegerArray::<i32>::from_slice(&[1, 1]);
        let b = IntegerArray::<i32>::from_slice(&[1, 2]);
        assert_eq!(a.all_equal(&b), Some(false));

        let c = IntegerArray::<i32>::from_options(vec![Some(1), None]);
        assert_eq!(a.all_equal(&c), None);
        // Definite inequality beats unknown.
        let d = IntegerArray::<i32>::from_options(vec![Some(2), None]);
        assert_eq!(a.all_equal(&d), Some(false));
        // Length mismatch is definite inequality, never null.
        let e = IntegerArray::<i32>::from_options(vec![None]);
        assert_eq!(a.all_equal(&e), Some(false));
    }
}
