//! Lookup by value and name

use crate::common::*;
use calends::Enumeration;

#[test]
fn all_returns_declaration_order() {
    let names: Vec<&str> = Fruit::all().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["Apple", "Banana", "Cherry"]);
}

#[test]
fn all_returns_the_same_instances() {
    for (expected, actual) in [&APPLE, &BANANA, &CHERRY].iter().zip(Fruit::all()) {
        assert!(std::ptr::eq(*expected, *actual));
    }
}

#[test]
fn all_is_scoped_to_the_concrete_type() {
    assert_eq!(Fruit::all().len(), 3);
    assert_eq!(Vegetable::all().len(), 2);
}

#[test]
fn from_value_finds_instance() {
    assert!(std::ptr::eq(Fruit::from_value(2).unwrap(), &BANANA));
    assert!(std::ptr::eq(Vegetable::from_value(2).unwrap(), &VEGETABLE_APPLE));
}

#[test]
fn from_value_miss() {
    assert!(Fruit::from_value_or_default(42).is_none());
    let err = Fruit::from_value(42).unwrap_err();
    assert!(err.is_argument());
    assert!(err.message().starts_with("'42' is not a valid value for '"));
    assert!(err.message().ends_with("Fruit'."));
}

#[test]
fn from_name_ignores_case() {
    for name in ["cherry", "CHERRY", "Cherry", "cHeRrY"] {
        assert!(std::ptr::eq(Fruit::from_name(name).unwrap(), &CHERRY), "{}", name);
    }
}

#[test]
fn from_name_miss() {
    assert!(Fruit::from_name_or_default("Durian").is_none());
    let err = Fruit::from_name("Durian").unwrap_err();
    assert!(err.is_format());
    assert!(err.message().starts_with("'Durian' is not a valid name for '"));
}

#[test]
fn from_name_does_not_match_text() {
    assert!(Fruit::from_name("A crisp apple").is_err());
}

#[test]
fn format_specifiers() {
    assert_eq!(APPLE.format(Some("V")).unwrap(), "1");
    assert_eq!(APPLE.format(Some("t")).unwrap(), "A crisp apple");
    assert_eq!(APPLE.format(Some("n")).unwrap(), "Apple");
    assert_eq!(APPLE.format(Some("G")).unwrap(), "Apple");
    assert_eq!(APPLE.format(None).unwrap(), "Apple");
    assert_eq!(CHERRY.format(Some("T")).unwrap(), "Cherry");

    let err = APPLE.format(Some("Q")).unwrap_err();
    assert!(err.is_format());
    assert_eq!(err.message(), "Unsupported format 'Q'");
}

#[test]
fn display_renders_name() {
    assert_eq!(BANANA.to_string(), "Banana");
    assert_eq!(format!("{}", CARROT), "Carrot");
}

#[test]
fn runtime_construction_rejects_empty_name() {
    let err = calends::EnumBase::new(9, "", None).unwrap_err();
    assert_eq!(err.message(), "The name cannot be null or empty.");
}
