//! EnumerationConverter

use crate::common::*;
use calends::{EnumerationConverter, StringConverter, TypeDescriptor};

fn sut() -> EnumerationConverter<BooleanEnumeration> {
    EnumerationConverter::new()
}

#[test]
fn can_convert_from_and_to_string() {
    assert!(sut().can_convert_from(TypeDescriptor::of::<String>()));
    assert!(sut().can_convert_to(TypeDescriptor::of::<String>()));
    assert!(!sut().can_convert_from(TypeDescriptor::of::<i32>()));
}

#[test]
fn convert_from() {
    assert!(std::ptr::eq(sut().convert_from(Some(&"True")).unwrap(), &TRUE));
    assert!(std::ptr::eq(sut().convert_from(Some(&"0")).unwrap(), &FALSE));
}

#[test]
fn convert_to_string() {
    assert_eq!(sut().convert_to_string(Some(&FALSE)).unwrap(), "False");
    assert_eq!(sut().convert_to_string(Some(&TRUE)).unwrap(), "True");
}

#[test]
fn convert_to_wrong_destination_type() {
    let err = sut()
        .convert_to(Some(&TRUE), TypeDescriptor::of::<chrono::NaiveDateTime>())
        .unwrap_err();
    assert!(err.is_not_supported());
    assert_eq!(
        err.message(),
        "EnumerationConverter<BooleanEnumeration> is unable to convert BooleanEnumeration to NaiveDateTime."
    );
}

#[test]
fn convert_to_string_wrong_source_type() {
    assert_eq!(
        sut().convert_to_string(Some(&8i32)).unwrap_err().message(),
        "EnumerationConverter<BooleanEnumeration> is unable to convert i32 to String."
    );
    assert_eq!(
        sut()
            .convert_to_string(Some(&"True".to_string()))
            .unwrap_err()
            .message(),
        "EnumerationConverter<BooleanEnumeration> is unable to convert String to String."
    );
}

#[test]
fn convert_to_string_null() {
    assert_eq!(
        sut().convert_to_string(None).unwrap_err().message(),
        "EnumerationConverter<BooleanEnumeration> is unable to convert (null) to String."
    );
    assert_eq!(
        sut().null_to_empty_string(true).convert_to_string(None).unwrap(),
        ""
    );
}

#[test]
fn convert_from_invalid_input() {
    let cases: [(Option<&dyn calends::AnyValue>, &str, bool); 4] = [
        (Some(&8i32), "cannot convert from i32.", false),
        (None, "cannot convert from (null).", false),
        (Some(&""), "cannot convert from String.Empty.", true),
        (Some(&"bogus"), "cannot convert from 'bogus'.", true),
    ];
    for (input, suffix, is_format) in cases {
        let err = sut().convert_from(input).unwrap_err();
        assert_eq!(
            err.message(),
            format!("EnumerationConverter<BooleanEnumeration> {}", suffix)
        );
        assert_eq!(err.is_format(), is_format, "{}", suffix);
        assert_eq!(err.is_not_supported(), !is_format, "{}", suffix);
    }
}

#[test]
fn to_value_converter() {
    let sut = EnumerationConverter::<BooleanEnumeration>::to_value();
    assert_eq!(sut.convert_to_string(Some(&TRUE)).unwrap(), "1");
    assert!(std::ptr::eq(sut.convert_from(Some(&"1")).unwrap(), &TRUE));
    assert_eq!(
        sut.convert_from(Some(&"7")).unwrap_err().message(),
        "EnumerationToValueConverter<BooleanEnumeration> cannot convert from '7'."
    );
}
