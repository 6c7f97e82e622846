//! Rendering dates with the named profiles

use crate::common::*;
use calends::date_format::{self, DAY_MONTH_YEAR, DEFAULT, ISO, LONG, REVERSE_ISO, SHORT, YEAR_MONTH_DAY};
use calends::{culture, CultureScope, DateFormat, Enumeration};

#[test]
fn invariant_profiles() {
    let christmas_eve = date(2015, 12, 24);
    assert_eq!(christmas_eve.to_string_with(&DEFAULT), "24/12-2015");
    assert_eq!(christmas_eve.to_string_with(&ISO), "2015-12-24");
    assert_eq!(christmas_eve.to_string_with(&YEAR_MONTH_DAY), "20151224");
    assert_eq!(christmas_eve.to_string_with(&DAY_MONTH_YEAR), "24122015");
    assert_eq!(christmas_eve.to_string_with(&REVERSE_ISO), "24-12-2015");
}

#[test]
fn default_profile_has_no_padding() {
    assert_eq!(date(1970, 6, 3).to_string(), "3/6-1970");
    assert_eq!(date(2003, 1, 27).to_default_string(), "27/1-2003");
}

#[test]
fn fixed_length_profiles() {
    for value in [date(1, 1, 1), date(2003, 1, 27), date(9999, 12, 31)] {
        assert_eq!(value.to_string_with(&DAY_MONTH_YEAR).len(), 8);
        assert_eq!(value.to_string_with(&YEAR_MONTH_DAY).len(), 8);
        assert_eq!(value.to_string_with(&REVERSE_ISO).len(), 10);
        assert_eq!(value.to_string_with(&ISO).len(), 10);
    }
    assert_eq!(date(1, 1, 1).to_iso_date_string(), "0001-01-01");
}

#[test]
fn ambient_profiles_follow_the_scope() {
    let value = date(2003, 1, 27);
    {
        let _scope = CultureScope::new("da-DK").unwrap();
        assert_eq!(value.to_string_with(&SHORT), "27-01-2003");
        assert_eq!(value.to_string_with(&LONG), "27. januar 2003");
    }
    {
        let _scope = CultureScope::new("en-US").unwrap();
        assert_eq!(value.to_short_date_string(), "1/27/2003");
        assert_eq!(value.to_long_date_string(), "Monday, January 27, 2003");
    }
    {
        let _scope = CultureScope::with(culture::invariant());
        assert_eq!(value.to_short_date_string(), "01/27/2003");
        assert_eq!(value.to_long_date_string(), "Monday, 27 January 2003");
    }
}

#[test]
fn invariant_profiles_ignore_the_scope() {
    let value = date(2015, 12, 24);
    let _scope = CultureScope::new("da-DK").unwrap();
    for format in DateFormat::all().iter().filter(|f| f.is_parseable()) {
        let in_en = {
            let _nested = CultureScope::new("en-US").unwrap();
            value.to_string_with(format)
        };
        assert_eq!(value.to_string_with(format), in_en, "{}", format);
    }
}

#[test]
fn format_accepts_profile_patterns() {
    let value = date(2015, 12, 24);
    for format in DateFormat::all().iter().filter(|f| f.is_parseable()) {
        assert_eq!(
            value.format(Some(format.pattern()), None).unwrap(),
            value.to_string_with(format)
        );
    }
    let da = culture::get("da-DK").unwrap();
    assert_eq!(value.format(Some("d"), Some(&da)).unwrap(), "24-12-2015");
}

#[test]
fn format_rejects_other_patterns() {
    let err = date(2015, 12, 24).format(Some("dd.MM.yyyy"), None).unwrap_err();
    assert!(err.is_format());
    assert_eq!(err.message(), "Unknown format: dd.MM.yyyy");
}

#[test]
fn profile_metadata() {
    assert_eq!(date_format::DEFAULT.text(), "Short human readable format (27/1-2003)");
    assert_eq!(date_format::SHORT.text(), "Short human readable format (27-01-2003)");
    assert_eq!(date_format::LONG.text(), "Long human readable format (27. januar 2003)");
    assert_eq!(
        date_format::DAY_MONTH_YEAR.text(),
        "Machine readable format with fixed length of 8 (27012003)"
    );
    assert_eq!(
        date_format::ISO.text(),
        "Year-first sortable ISO 8601 format with fixed length of 10."
    );
}
