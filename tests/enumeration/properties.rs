//! Property tests for lookups and formatting

use crate::common::*;
use calends::Enumeration;
use proptest::prelude::*;

proptest! {
    #[test]
    fn from_value_agrees_with_linear_scan(value in -5i32..10) {
        let expected = Fruit::all().iter().find(|f| f.value() == value).map(|f| f.name());
        prop_assert_eq!(Fruit::from_value_or_default(value).map(|f| f.name()), expected);
    }

    #[test]
    fn value_format_round_trips(index in 0usize..3) {
        let fruit = Fruit::all()[index];
        let digits = fruit.format(Some("V")).unwrap();
        let value: i32 = digits.parse().unwrap();
        prop_assert!(std::ptr::eq(Fruit::from_value(value).unwrap(), fruit));
    }

    #[test]
    fn name_lookup_ignores_case(index in 0usize..3, upper in proptest::bool::ANY) {
        let fruit = Fruit::all()[index];
        let name = if upper { fruit.name().to_uppercase() } else { fruit.name().to_lowercase() };
        prop_assert!(std::ptr::eq(Fruit::from_name(&name).unwrap(), fruit));
    }

    #[test]
    fn unknown_specifiers_fail(spec in "[A-Za-z]{1,3}") {
        let known = matches!(spec.to_ascii_uppercase().as_str(), "V" | "T" | "N" | "G");
        prop_assert_eq!(APPLE.format(Some(&spec)).is_ok(), known);
    }
}
