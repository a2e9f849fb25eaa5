//! Three-valued logic laws exercised end-to-end over the public API.

use minvec::{BooleanArray, IntegerArray, MaskedArray};

fn tri(items: &[Option<bool>]) -> BooleanArray {
    BooleanArray::from_options(items.to_vec())
}

#[test]
fn kleene_and_or_are_commutative() {
    let cases = [
        (Some(true), Some(true)),
        (Some(true), Some(false)),
        (Some(true), None),
        (Some(false), None),
        (None, None),
        (Some(false), Some(false)),
    ];
    let a = tri(&cases.iter().map(|c| c.0).collect::<Vec<_>>());
    let b = tri(&cases.iter().map(|c| c.1).collect::<Vec<_>>());

    assert_eq!(
        a.and_(&b).unwrap().to_options(),
        b.and_(&a).unwrap().to_options()
    );
    assert_eq!(
        a.or_(&b).unwrap().to_options(),
        b.or_(&a).unwrap().to_options()
    );
}

#[test]
fn double_negation_is_identity_with_null_fixed() {
    let a = tri(&[Some(true), Some(false), None, Some(true), None]);
    assert_eq!(a.not_().not_().to_options(), a.to_options());
    assert_eq!(a.not_().to_options()[2], None);
}

#[test]
fn false_dominates_and_true_dominates_or() {
    let unknowns = tri(&[None, None, None]);
    let falses = BooleanArray::repeat(false, 3);
    let trues = BooleanArray::repeat(true, 3);

    // false AND unknown == false, not null.
    assert_eq!(
        falses.and_(&unknowns).unwrap().to_options(),
        vec![Some(false); 3]
    );
    // true OR unknown == true, not null.
    assert_eq!(
        trues.or_(&unknowns).unwrap().to_options(),
        vec![Some(true); 3]
    );
    // The non-dominant operands keep the unknown alive.
    assert_eq!(trues.and_(&unknowns).unwrap().to_options(), vec![None; 3]);
    assert_eq!(falses.or_(&unknowns).unwrap().to_options(), vec![None; 3]);
}

#[test]
fn reduction_folds_match_spec_table() {
    assert_eq!(tri(&[Some(true), Some(true), None]).all(), None);
    assert_eq!(tri(&[Some(true), Some(false), None]).all(), Some(false));
    assert_eq!(tri(&[Some(false), Some(false), None]).any(), None);
    assert_eq!(tri(&[Some(true), Some(false), None]).any(), Some(true));
    assert_eq!(tri(&[Some(true), Some(true)]).all(), Some(true));
    assert_eq!(tri(&[Some(false), Some(false)]).any(), Some(false));
}

#[test]
fn all_equal_is_a_kleene_reduction_not_propagation() {
    let a = tri(&[Some(true), Some(true)]);
    assert_eq!(a.all_equal(&tri(&[Some(true), Some(false)])), Some(false));
    assert_eq!(a.all_equal(&tri(&[Some(true), None])), None);
    let f = tri(&[Some(false), Some(false)]);
    assert_eq!(f.all_equal(&tri(&[Some(false), Some(false)])), Some(true));
    // Length mismatch is unconditionally false, no null involved.
    assert_eq!(a.all_equal(&tri(&[Some(true), None, None])), Some(false));
}

#[test]
fn elementwise_equal_contrasts_with_reduction() {
    // equal([1, None], [1, 2]) == [true, None]: pairwise nulls stay pairwise.
    let a = IntegerArray::<i64>::from_options(vec![Some(1), None]);
    let b = IntegerArray::<i64>::from_options(vec![Some(1), Some(2)]);
    assert_eq!(a.equal(&b).unwrap().to_options(), vec![Some(true), None]);
    // ...while the whole-vector question folds the unknown.
    assert_eq!(a.all_equal(&b), None);
}

#[test]
fn to_index_feeds_take() {
    let cond = tri(&[Some(true), Some(false), None, Some(true)]);
    let idx = cond.to_index();
    assert_eq!(idx.to_vec(), vec![0, 3]);

    let values = IntegerArray::<i64>::from_slice(&[10, 20, 30, 40]);
    let gathered = values.take(&idx).unwrap();
    assert_eq!(gathered.to_options(), vec![Some(10), Some(40)]);
}
