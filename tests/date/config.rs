//! Configuration
//!
//! These tests change the process default culture, so they hold a lock and
//! restore the previous default before returning.

use crate::common::*;
use calends::{culture, CalendsConfig};
use parking_lot::Mutex;

static DEFAULT_CULTURE_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn apply_sets_process_default() {
    let _guard = DEFAULT_CULTURE_LOCK.lock();
    let previous = culture::default_culture();

    let config = CalendsConfig::from_toml("culture = \"da-DK\"").unwrap();
    config.apply().unwrap();

    let rendered = std::thread::spawn(|| date(2003, 1, 27).to_long_date_string())
        .join()
        .unwrap();
    assert_eq!(rendered, "27. januar 2003");

    culture::set_default(previous);
}

#[test]
fn apply_rejects_unknown_culture() {
    let _guard = DEFAULT_CULTURE_LOCK.lock();
    let previous = culture::default_culture();

    let config = CalendsConfig::from_toml("culture = \"xx-NOPE\"").unwrap();
    let err = config.apply().unwrap_err();
    assert!(err.is_argument());
    assert_eq!(culture::default_culture(), previous);
}

#[test]
fn default_toml_round_trips() {
    let config = CalendsConfig::from_toml(CalendsConfig::default_toml()).unwrap();
    let text = config.to_toml().unwrap();
    assert_eq!(CalendsConfig::from_toml(&text).unwrap(), config);
}
