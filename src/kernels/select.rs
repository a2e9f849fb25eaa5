//! # **Select Kernel** - *First-Match Condition Branching*
//!
//! `select` / case-when: first-match branch selection over parallel Bool
//! condition vectors. For each position the conditions are scanned in order
//! and the first definitely-true one picks its choice; positions matching no
//! condition take the default.
//!
//! A null condition slot makes the branch's contribution ambiguous. The
//! engine refuses to guess: if a null is encountered before any definite
//! true and no later condition is definitely true either, the call fails
//! with `AmbiguousNull` instead of silently defaulting.
//!
//! The `default`'s dtype pins the output dtype; every choice must agree or
//! the call is a type error. [`CaseWhen`] builds the same evaluation
//! incrementally with SQL's `case ... when ... end` shape, type-checking at
//! `when`-time.

use crate::enums::array::Array;
use crate::enums::dtype::DType;
use crate::enums::error::MinvecError;
use crate::enums::scalar::Scalar;
use crate::structs::variants::boolean::BooleanArray;
use crate::traits::masked_array::MaskedArray;
use crate::utils::check_len_eq;

/// Typed first-match selection. `conditions` and `choices` are parallel;
/// all condition vectors must share one length.
pub fn select_typed<A: MaskedArray>(
    conditions: &[BooleanArray],
    choices: &[A::Elem],
    default: A::Elem,
) -> Result<A, MinvecError> {
    if conditions.len() != choices.len() {
        return Err(MinvecError::InvalidArgument {
            message: format!(
                "select takes parallel conditions and choices, got {} and {}",
                conditions.len(),
                choices.len()
            ),
        });
    }
    if conditions.is_empty() {
        return Err(MinvecError::InvalidArgument {
            message: "select requires at least one condition".to_string(),
        });
    }
    let n = conditions[0].len();
    for cond in conditions {
        check_len_eq(n, cond.len())?;
    }

    let mut out = Vec::with_capacity(n);
    for j in 0..n {
        let mut chosen: Option<A::Elem> = None;
        let mut saw_null = false;
        for (i, cond) in conditions.iter().enumerate() {
            match cond.get(j) {
                Some(true) => {
                    chosen = Some(choices[i].clone());
                    break;
                }
                Some(false) => {}
                None => saw_null = true,
            }
        }
        match chosen {
            Some(v) => out.push(Some(v)),
            None if saw_null => return Err(MinvecError::AmbiguousNull { index: j }),
            None => out.push(Some(default.clone())),
        }
    }
    Ok(A::from_options(out))
}

fn choice_mismatch(expected: DType, found: &Scalar) -> MinvecError {
    MinvecError::TypeError {
        expected: expected.name(),
        found: found.dtype().name(),
        message: Some("every choice must share the default's dtype".to_string()),
    }
}

macro_rules! unwrap_choices {
    ($choices:expr, $Variant:ident, $dtype:expr) => {
        $choices
            .iter()
            .map(|c| match c {
                Scalar::$Variant(v) => Ok(v.clone()),
                other => Err(choice_mismatch($dtype, other)),
            })
            .collect::<Result<Vec<_>, MinvecError>>()
    };
}

/// Dtype-dispatching selection: the `default` scalar pins the output dtype.
pub fn select(
    conditions: &[BooleanArray],
    choices: &[Scalar],
    default: Scalar,
) -> Result<Array, MinvecError> {
    match default {
        Scalar::Boolean(d) => {
            let ch = unwrap_choices!(choices, Boolean, DType::Boolean)?;
            Ok(Array::Boolean(select_typed(conditions, &ch, d)?))
        }
        Scalar::Int32(d) => {
            let ch = unwrap_choices!(choices, Int32, DType::Int32)?;
            Ok(Array::Int32(select_typed(conditions, &ch, d)?))
        }
        Scalar::Int64(d) => {
            let ch = unwrap_choices!(choices, Int64, DType::Int64)?;
            Ok(Array::Int64(select_typed(conditions, &ch, d)?))
        }
        Scalar::Float32(d) => {
            let ch = unwrap_choices!(choices, Float32, DType::Float32)?;
            Ok(Array::Float32(select_typed(conditions, &ch, d)?))
        }
        Scalar::Float64(d) => {
            let ch = unwrap_choices!(choices, Float64, DType::Float64)?;
            Ok(Array::Float64(select_typed(conditions, &ch, d)?))
        }
        Scalar::String(d) => {
            let ch = unwrap_choices!(choices, String, DType::String)?;
            Ok(Array::String(select_typed(conditions, &ch, d)?))
        }
    }
}

/// Incremental case-when evaluator over a source vector.
///
/// Built by [`Array::case`]; each [`CaseWhen::when`] computes one condition
/// from the source and registers the value to use where it first matches,
/// and [`CaseWhen::end`] evaluates the accumulated branches as one
/// [`select`] call.
///
/// ## Example
/// ```rust
/// use minvec::{Array, IntegerArray};
///
/// let arr = Array::Int64(IntegerArray::<i64>::arange(0, 6, 1).unwrap());
/// let out = arr
///     .case(2i64)
///     .when(|a| a.less_than_scala(2i64.into()), 0i64)
///     .unwrap()
///     .when(|a| a.less_than_scala(4i64.into()), 1i64)
///     .unwrap()
///     .end()
///     .unwrap();
/// assert_eq!(out, Array::Int64(IntegerArray::from_slice(&[0, 0, 1, 1, 2, 2])));
/// ```
#[derive(Debug)]
pub struct CaseWhen<'a> {
    values: &'a Array,
    default: Scalar,
    conditions: Vec<BooleanArray>,
    choices: Vec<Scalar>,
}

impl<'a> CaseWhen<'a> {
    pub(crate) fn new(values: &'a Array, default: Scalar) -> Self {
        Self {
            values,
            default,
            conditions: Vec::new(),
            choices: Vec::new(),
        }
    }

    /// Registers one branch. The predicate must produce a Bool vector and
    /// `then` must share the default's dtype; both are enforced here, not
    /// deferred to `end`.
    pub fn when<F>(mut self, predicate: F, then: impl Into<Scalar>) -> Result<Self, MinvecError>
    where
        F: FnOnce(&Array) -> Result<BooleanArray, MinvecError>,
    {
        let then = then.into();
        if then.dtype() != self.default.dtype() {
            return Err(MinvecError::TypeError {
                expected: self.default.dtype().name(),
                found: then.dtype().name(),
                message: Some("`then` must share the default's dtype".to_string()),
            });
        }
        let cond = predicate(self.values)?;
        self.conditions.push(cond);
        self.choices.push(then);
        Ok(self)
    }

    /// Evaluates the accumulated branches.
    pub fn end(self) -> Result<Array, MinvecError> {
        select(&self.conditions, &self.choices, self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::variants::integer::IntegerArray;

    fn conditions_over_arange() -> (Vec<BooleanArray>, IntegerArray<i64>) {
        let arr = IntegerArray::<i64>::arange(0, 6, 1).unwrap();
        let conds = vec![arr.less_than_scala(2), arr.less_than_scala(4)];
        (conds, arr)
    }

    #[test]
    fn test_select_first_match() {
        let (conds, _) = conditions_over_arange();
        let out = select(
            &conds,
            &[Scalar::Int64(0), Scalar::Int64(1)],
            Scalar::Int64(2),
        )
        .unwrap();
        assert_eq!(
            out,
            Array::Int64(IntegerArray::from_slice(&[0, 0, 1, 1, 2, 2]))
        );
    }

    #[test]
    fn test_select_choice_dtype_mismatch() {
        let (conds, _) = conditions_over_arange();
        let err = select(
            &conds,
            &[Scalar::Int64(0), Scalar::Float64(1.0)],
            Scalar::Int64(2),
        )
        .unwrap_err();
        assert!(matches!(err, MinvecError::TypeError { .. }));
    }

    #[test]
    fn test_select_length_mismatch() {
        let conds = vec![
            BooleanArray::from_slice(&[true, false]),
            BooleanArray::from_slice(&[true]),
        ];
        let err = select_typed::<IntegerArray<i64>>(&conds, &[1, 2], 0).unwrap_err();
        assert!(matches!(err, MinvecError::LengthMismatch { .. }));
    }

    #[test]
    fn test_select_null_before_any_match_is_ambiguous() {
        let conds = vec![
            BooleanArray::from_options(vec![None, Some(false)]),
            BooleanArray::from_options(vec![Some(false), Some(true)]),
        ];
        let err = select_typed::<IntegerArray<i64>>(&conds, &[1, 2], 0).unwrap_err();
        assert_eq!(err, MinvecError::AmbiguousNull { index: 0 });
    }

    #[test]
    fn test_select_null_rescued_by_later_definite_true() {
        let conds = vec![
            BooleanArray::from_options(vec![None, Some(false)]),
            BooleanArray::from_options(vec![Some(true), Some(true)]),
        ];
        let out = select_typed::<IntegerArray<i64>>(&conds, &[1, 2], 0).unwrap();
        assert_eq!(out.data, vec![2, 2]);
    }

    #[test]
    fn test_select_requires_conditions() {
        let err = select_typed::<IntegerArray<i64>>(&[], &[], 0).unwrap_err();
        assert!(matches!(err, MinvecError::InvalidArgument { .. }));
    }
}
