//! `select` / case-when behavior over the public API.

use minvec::{
    Array, BooleanArray, IntegerArray, MaskedArray, MinvecError, Scalar, select, select_typed,
};

#[test]
fn select_over_arange_matches_first_hit() {
    let a = IntegerArray::<i64>::arange(0, 6, 1).unwrap();
    let conditions = vec![a.less_than_scala(2), a.less_than_scala(4)];
    let out = select(
        &conditions,
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
fn select_output_dtype_is_pinned_by_default() {
    let a = IntegerArray::<i64>::arange(0, 4, 1).unwrap();
    let conditions = vec![a.less_than_scala(2)];
    let as_floats = select(&conditions, &[Scalar::Float64(1.0)], Scalar::Float64(0.0)).unwrap();
    assert_eq!(as_floats.dtype(), minvec::DType::Float64);
    let as_bools = select(&conditions, &[Scalar::Boolean(true)], Scalar::Boolean(false)).unwrap();
    assert_eq!(as_bools.dtype(), minvec::DType::Boolean);
    let as_strings = select(&conditions, &[Scalar::from("lo")], Scalar::from("hi")).unwrap();
    assert_eq!(
        as_strings.get(0).unwrap(),
        Some(Scalar::from("lo"))
    );
}

#[test]
fn select_rejects_mismatched_choice_dtype() {
    let conds = vec![BooleanArray::from_slice(&[true])];
    let err = select(&conds, &[Scalar::Int32(1)], Scalar::Int64(0)).unwrap_err();
    assert!(matches!(err, MinvecError::TypeError { .. }));
}

#[test]
fn select_rejects_condition_length_mismatch() {
    let conds = vec![
        BooleanArray::from_slice(&[true, false, true]),
        BooleanArray::from_slice(&[true, false]),
    ];
    let err = select_typed::<IntegerArray<i64>>(&conds, &[1, 2], 0).unwrap_err();
    assert!(matches!(err, MinvecError::LengthMismatch { .. }));
}

#[test]
fn ambiguous_null_branch_is_an_error_not_a_default() {
    // Position 1: first condition unknown, second definitely false.
    let conds = vec![
        BooleanArray::from_options(vec![Some(true), None]),
        BooleanArray::from_options(vec![Some(false), Some(false)]),
    ];
    let err = select_typed::<IntegerArray<i64>>(&conds, &[1, 2], 0).unwrap_err();
    assert_eq!(err, MinvecError::AmbiguousNull { index: 1 });
}

#[test]
fn null_branch_overridden_by_later_definite_true() {
    let conds = vec![
        BooleanArray::from_options(vec![None]),
        BooleanArray::from_options(vec![Some(true)]),
    ];
    let out = select_typed::<IntegerArray<i64>>(&conds, &[1, 2], 0).unwrap();
    assert_eq!(out.to_options(), vec![Some(2)]);
}

#[test]
fn case_when_end_equals_one_select() {
    let arr = Array::Int64(IntegerArray::arange(0, 6, 1).unwrap());
    let out = arr
        .case(2i64)
        .when(|a| a.less_than_scala(Scalar::Int64(2)), 0i64)
        .unwrap()
        .when(|a| a.less_than_scala(Scalar::Int64(4)), 1i64)
        .unwrap()
        .end()
        .unwrap();
    assert_eq!(
        out,
        Array::Int64(IntegerArray::from_slice(&[0, 0, 1, 1, 2, 2]))
    );
}

#[test]
fn case_when_type_checks_at_when_time() {
    let arr = Array::Int64(IntegerArray::arange(0, 3, 1).unwrap());
    // `then` dtype must match the default's dtype immediately.
    let err = arr
        .case(0i64)
        .when(|a| a.less_than_scala(Scalar::Int64(1)), 1.5f64)
        .unwrap_err();
    assert!(matches!(err, MinvecError::TypeError { .. }));

    // A failing predicate surfaces at when-time too.
    let err = arr
        .case(0i64)
        .when(|a| a.less_than_scala(Scalar::Float32(1.0)), 1i64)
        .unwrap_err();
    assert!(matches!(err, MinvecError::TypeError { .. }));
}
