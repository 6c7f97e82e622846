//! Equality, hashing and ordering

use crate::common::*;
use calends::{compare, compare_same, equals, Enumeration};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

#[test]
fn equality_within_a_type_is_by_value() {
    assert_eq!(APPLE, APPLE);
    assert_ne!(APPLE, BANANA);
}

#[test]
fn equality_across_types_is_false() {
    // Both have value 1
    assert!(!equals(&APPLE, Some(&CARROT)));
    // Both are named "Apple"
    assert!(!equals(&APPLE, Some(&VEGETABLE_APPLE)));
    assert!(!equals(&APPLE, None));

    let fruit: &dyn Enumeration = &APPLE;
    let vegetable: &dyn Enumeration = &CARROT;
    let same: &dyn Enumeration = &APPLE;
    assert!(fruit != vegetable);
    assert!(fruit == same);
}

#[test]
fn hashing_agrees_with_equality() {
    let set: HashSet<&Fruit> = [&APPLE, &BANANA, &APPLE].into_iter().collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains(&APPLE));
}

#[test]
fn ordering_is_by_value() {
    assert!(APPLE < BANANA);
    assert!(CHERRY > BANANA);
    let sorted: Vec<&str> = [&CHERRY, &APPLE, &BANANA]
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|f| f.name())
        .collect();
    assert_eq!(sorted, ["Apple", "Banana", "Cherry"]);
}

#[test]
fn compare_with_missing_is_greater() {
    assert_eq!(compare(&APPLE, None).unwrap(), Ordering::Greater);
    assert_eq!(compare_same(&APPLE, None), Ordering::Greater);
}

#[test]
fn compare_across_types_fails() {
    let err = compare(&APPLE, Some(&CARROT)).unwrap_err();
    assert!(err.is_argument());
    assert!(err.message().contains("cannot be compared to this"));
    assert!(err.message().contains("Fruit.Apple value"));
    assert!(err.message().ends_with("because the types are not the same."));
}

#[test]
fn compare_within_type() {
    assert_eq!(compare(&CHERRY, Some(&APPLE)).unwrap(), Ordering::Greater);
    assert_eq!(compare_same(&BANANA, Some(&BANANA)), Ordering::Equal);
}
