//! Casting matrix properties over the unified `Array` surface.

use minvec::{Array, DType, FloatArray, IntegerArray, MaskedArray, StringArray};

const ALL_DTYPES: [DType; 6] = [
    DType::Int32,
    DType::Int64,
    DType::Float32,
    DType::Float64,
    DType::Boolean,
    DType::String,
];

#[test]
fn every_ordered_dtype_pair_casts_from_numeric_sources() {
    let arr = Array::Int32(IntegerArray::from_options(vec![Some(1), None, Some(0)]));
    for target in ALL_DTYPES {
        let cast = arr.astype(target).unwrap();
        assert_eq!(cast.dtype(), target);
        assert_eq!(cast.len(), 3);
        // Null positions survive any cast.
        assert_eq!(cast.get(1).unwrap(), None);
        assert_eq!(cast.null_count(), 1);
    }
}

#[test]
fn lossless_roundtrips_reproduce_exactly() {
    let ints = Array::Int64(IntegerArray::from_options(vec![
        Some(i64::MAX),
        Some(i64::MIN),
        None,
        Some(0),
    ]));
    let via_string = ints
        .astype(DType::String)
        .unwrap()
        .astype(DType::Int64)
        .unwrap();
    assert_eq!(via_string, ints);

    let floats = Array::Float64(FloatArray::from_options(vec![
        Some(0.1),
        Some(-1.0e-7),
        None,
    ]));
    let back = floats
        .astype(DType::String)
        .unwrap()
        .astype(DType::Float64)
        .unwrap();
    assert_eq!(back, floats);

    let small = Array::Int32(IntegerArray::from_slice(&[i32::MAX, i32::MIN]));
    let widened = small
        .astype(DType::Int64)
        .unwrap()
        .astype(DType::Int32)
        .unwrap();
    assert_eq!(widened, small);
}

#[test]
fn bool_casts_follow_nonzero_and_zero_one() {
    let nums = Array::Float64(FloatArray::from_options(vec![
        Some(0.0),
        Some(2.5),
        Some(-0.5),
        None,
    ]));
    let bools = nums.astype(DType::Boolean).unwrap();
    assert_eq!(
        bools,
        Array::Boolean(minvec::BooleanArray::from_options(vec![
            Some(false),
            Some(true),
            Some(true),
            None,
        ]))
    );
    let back = bools.astype(DType::Int64).unwrap();
    assert_eq!(
        back,
        Array::Int64(IntegerArray::from_options(vec![
            Some(0),
            Some(1),
            Some(1),
            None
        ]))
    );
}

#[test]
fn string_parse_failures_are_cast_errors() {
    let s = Array::String(StringArray::from_slice(&["1.5", "oops"]));
    assert!(s.astype(DType::Float64).is_err());
    assert!(s.astype(DType::Int32).is_err());
    // The same column parses cleanly as its valid prefix would suggest.
    let ok = Array::String(StringArray::from_slice(&["1.5", "2.5"]));
    assert_eq!(
        ok.astype(DType::Float64).unwrap(),
        Array::Float64(FloatArray::from_slice(&[1.5, 2.5]))
    );
}

#[test]
fn bool_string_formatting_is_canonical() {
    let b = Array::Boolean(minvec::BooleanArray::from_options(vec![
        Some(true),
        Some(false),
        None,
    ]));
    let s = b.astype(DType::String).unwrap();
    assert_eq!(
        s,
        Array::String(StringArray::from_options(vec![
            Some("true".to_string()),
            Some("false".to_string()),
            None,
        ]))
    );
    assert_eq!(s.astype(DType::Boolean).unwrap(), b);
}

#[test]
fn identity_cast_is_a_deep_copy() {
    let arr = Array::String(StringArray::from_slice(&["a", "b"]));
    let copy = arr.astype(DType::String).unwrap();
    assert_eq!(copy, arr);
    let mut copy = match copy {
        Array::String(s) => s,
        _ => unreachable!(),
    };
    copy.set_checked(0, Some("mutated".to_string())).unwrap();
    // Source untouched.
    assert_eq!(arr.get(0).unwrap(), Some(minvec::Scalar::from("a")));
}
