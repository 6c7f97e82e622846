//! Europe/Copenhagen wall clock
//!
//! Offsets come from the IANA time zone database, so historic rules apply
//! to historic instants: no summer time between 1949 and 1979, and summer
//! time ending in September before 1996.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::{Europe::Copenhagen, Tz};

/// Offset of Copenhagen wall-clock time at the given UTC instant
pub fn copenhagen_offset(utc: &NaiveDateTime) -> FixedOffset {
    Copenhagen.offset_from_utc_datetime(utc).fix()
}

/// Convert a UTC instant to Copenhagen wall-clock time
pub fn to_copenhagen(utc: DateTime<Utc>) -> DateTime<Tz> {
    utc.with_timezone(&Copenhagen)
}

/// The current Copenhagen wall-clock time
pub fn copenhagen_now() -> DateTime<Tz> {
    to_copenhagen(Utc::now())
}
