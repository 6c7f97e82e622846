//! Calendar arithmetic

use crate::common::*;
use calends::Date;
use chrono::{FixedOffset, NaiveDate, TimeZone, Utc, Weekday};

#[test]
fn hole_year_difference_table() {
    let cases = [
        ((1970, 6, 3), (1970, 6, 3), 0),
        ((1970, 6, 3), (1970, 6, 4), 0),
        ((1970, 6, 3), (1971, 6, 2), 0),
        ((1970, 6, 3), (1971, 6, 3), 1),
        ((1970, 6, 3), (1971, 6, 4), 1),
        ((2000, 2, 29), (1999, 2, 28), -1),
        ((2000, 2, 29), (1999, 3, 1), 0),
        ((2000, 2, 29), (2001, 2, 28), 0),
        ((2000, 2, 29), (2001, 3, 1), 1),
    ];
    for ((y1, m1, d1), (y2, m2, d2), expected) in cases {
        let (a, b) = (date(y1, m1, d1), date(y2, m2, d2));
        assert_eq!(Date::hole_year_difference(a, b), expected, "{} -> {}", a, b);
    }
}

#[test]
fn easter_sunday_known_years() {
    assert_eq!(Date::easter_sunday(2015).unwrap(), date(2015, 4, 5));
    assert_eq!(Date::easter_sunday(2016).unwrap(), date(2016, 3, 27));
    assert_eq!(Date::easter_sunday(2024).unwrap(), date(2024, 3, 31));
    assert_eq!(Date::easter_sunday(2025).unwrap(), date(2025, 4, 20));
}

#[test]
fn easter_sunday_rejects_year_zero() {
    assert!(Date::easter_sunday(0).unwrap_err().is_argument());
    assert!(Date::easter_sunday(10000).is_err());
}

#[test]
fn min_and_max() {
    let (a, b, c) = (date(2015, 6, 1), date(2015, 6, 2), date(2015, 5, 31));
    assert_eq!(Date::max(a, b), b);
    assert_eq!(Date::min(a, b), a);
    assert_eq!(Date::max3(c, a, b), b);
    assert_eq!(Date::min3(a, b, c), c);
}

#[test]
fn adding_months_and_years() {
    assert_eq!(date(2015, 1, 31).add_months(1).unwrap(), date(2015, 2, 28));
    assert_eq!(date(2015, 3, 31).add_months(-1).unwrap(), date(2015, 2, 28));
    assert_eq!(date(2015, 12, 15).add_months(1).unwrap(), date(2016, 1, 15));
    assert_eq!(date(2016, 2, 29).add_years(-1).unwrap(), date(2015, 2, 28));
    assert_eq!(date(2015, 12, 24).add_days(8).unwrap(), date(2016, 1, 1));
    assert!(Date::MAX.add_years(1).unwrap_err().is_argument());
}

#[test]
fn subtraction_counts_days() {
    assert_eq!(date(2016, 1, 1) - date(2015, 1, 1), 365);
    assert_eq!(date(2017, 1, 1) - date(2016, 1, 1), 366);
    assert_eq!(Date::MAX - Date::MIN, 3_652_058);
}

#[test]
fn ordering() {
    let mut dates = vec![date(2015, 12, 24), date(1970, 6, 3), date(2015, 1, 31)];
    dates.sort();
    assert_eq!(dates, [date(1970, 6, 3), date(2015, 1, 31), date(2015, 12, 24)]);
}

#[test]
fn conversions_keep_wall_clock_date() {
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    let morning = tokyo.with_ymd_and_hms(2015, 12, 25, 1, 0, 0).unwrap();
    assert_eq!(Date::from_datetime(&morning).unwrap(), date(2015, 12, 25));
    assert_eq!(
        Date::from_datetime(&morning.with_timezone(&Utc)).unwrap(),
        date(2015, 12, 24)
    );

    let naive = NaiveDate::from_ymd_opt(2015, 12, 24).unwrap();
    assert_eq!(Date::try_from(naive).unwrap(), date(2015, 12, 24));
    assert_eq!(NaiveDate::from(date(2015, 12, 24)), naive);
    assert!(Date::try_from(NaiveDate::from_ymd_opt(-1, 1, 1).unwrap()).is_err());
}

#[test]
fn helpers() {
    assert_eq!(Date::days_in_month(2015, 2).unwrap(), 28);
    assert_eq!(Date::days_in_month(2016, 2).unwrap(), 29);
    assert_eq!(Date::days_in_year(1900), 365);
    assert_eq!(Date::days_in_year(2000), 366);
    assert_eq!(date(2015, 12, 24).day_of_week(), Weekday::Thu);
    assert_eq!(date(2015, 2, 1).day_of_year(), 32);
    assert!(date(2015, 4, 30).is_end_of_month());
}

#[test]
fn today_accessors_agree_within_a_day() {
    let utc = Date::utc_today();
    for today in [Date::danish_today(), Date::local_today(), Date::today_in(&Utc)] {
        assert!((today - utc).abs() <= 1);
    }
}

#[test]
fn serde_round_trip() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Holiday {
        name: String,
        date: Date,
    }
    let holiday = Holiday {
        name: "Christmas Eve".to_string(),
        date: date(2015, 12, 24),
    };
    let json = serde_json::to_string(&holiday).unwrap();
    assert_eq!(json, r#"{"name":"Christmas Eve","date":"2015-12-24"}"#);
    assert_eq!(serde_json::from_str::<Holiday>(&json).unwrap(), holiday);
}
