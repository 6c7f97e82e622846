//! Cultures: locale data used to render and read dates
//!
//! A [`Culture`] carries the pieces of a locale that date patterns need:
//! separators, the short and long date patterns, and month and day names.
//!
//! ## Built-in cultures
//!
//! | Name | Short | Long |
//! |------|-------|------|
//! | `""` (invariant) | `MM/dd/yyyy` | `dddd, dd MMMM yyyy` |
//! | `da-DK` | `dd-MM-yyyy` | `d. MMMM yyyy` |
//! | `en-US` | `M/d/yyyy` | `dddd, MMMM d, yyyy` |
//!
//! More cultures can be registered at runtime with [`register`].
//!
//! ## Ambient culture
//!
//! [`current`] returns the culture active for the calling thread: a
//! thread-local override installed by [`CultureScope`], or else the
//! process default set by [`set_default`] (invariant until configured).
//! The ambient culture is read at every call, never captured.

use calends_core::{Error, Result};
use chrono::Weekday;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Name of the invariant culture
pub const INVARIANT_NAME: &str = "";

/// Plain description of a culture, as found in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CultureSpec {
    /// Culture identifier, e.g. `"de-DE"`
    pub name: String,
    /// Text substituted for `/` in patterns
    #[serde(default = "default_date_separator")]
    pub date_separator: String,
    /// Pattern used by the short standard format (`d`)
    pub short_date_pattern: String,
    /// Pattern used by the long standard format (`D`)
    pub long_date_pattern: String,
    /// Month names, January first (12 entries)
    pub month_names: Vec<String>,
    /// Abbreviated month names, January first (12 entries)
    pub abbreviated_month_names: Vec<String>,
    /// Day names, Sunday first (7 entries)
    pub day_names: Vec<String>,
    /// Abbreviated day names, Sunday first (7 entries)
    pub abbreviated_day_names: Vec<String>,
}

fn default_date_separator() -> String {
    "/".to_string()
}

/// Locale data for rendering and reading dates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Culture {
    name: String,
    date_separator: String,
    short_date_pattern: String,
    long_date_pattern: String,
    month_names: Vec<String>,
    abbreviated_month_names: Vec<String>,
    day_names: Vec<String>,
    abbreviated_day_names: Vec<String>,
}

impl Culture {
    /// Build a culture from its description
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if the name list sizes are wrong, or if a
    /// date pattern is shorter than two characters (single characters are
    /// reserved for the standard formats).
    pub fn from_spec(spec: CultureSpec) -> Result<Self> {
        check_len(&spec.name, "month_names", &spec.month_names, 12)?;
        check_len(&spec.name, "abbreviated_month_names", &spec.abbreviated_month_names, 12)?;
        check_len(&spec.name, "day_names", &spec.day_names, 7)?;
        check_len(&spec.name, "abbreviated_day_names", &spec.abbreviated_day_names, 7)?;
        for (field, pattern) in [
            ("short_date_pattern", &spec.short_date_pattern),
            ("long_date_pattern", &spec.long_date_pattern),
        ] {
            if pattern.chars().count() < 2 {
                return Err(Error::argument(format!(
                    "Culture '{}' has an invalid {}: '{}'.",
                    spec.name, field, pattern
                )));
            }
        }
        Ok(Culture::from_checked_spec(spec))
    }

    fn from_checked_spec(spec: CultureSpec) -> Self {
        Culture {
            name: spec.name,
            date_separator: spec.date_separator,
            short_date_pattern: spec.short_date_pattern,
            long_date_pattern: spec.long_date_pattern,
            month_names: spec.month_names,
            abbreviated_month_names: spec.abbreviated_month_names,
            day_names: spec.day_names,
            abbreviated_day_names: spec.abbreviated_day_names,
        }
    }

    /// The description this culture was built from
    pub fn to_spec(&self) -> CultureSpec {
        CultureSpec {
            name: self.name.clone(),
            date_separator: self.date_separator.clone(),
            short_date_pattern: self.short_date_pattern.clone(),
            long_date_pattern: self.long_date_pattern.clone(),
            month_names: self.month_names.clone(),
            abbreviated_month_names: self.abbreviated_month_names.clone(),
            day_names: self.day_names.clone(),
            abbreviated_day_names: self.abbreviated_day_names.clone(),
        }
    }

    /// Culture identifier (`""` for the invariant culture)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if this is the invariant culture
    pub fn is_invariant(&self) -> bool {
        self.name == INVARIANT_NAME
    }

    /// Text substituted for `/` in patterns
    pub fn date_separator(&self) -> &str {
        &self.date_separator
    }

    /// Pattern of the short standard format
    pub fn short_date_pattern(&self) -> &str {
        &self.short_date_pattern
    }

    /// Pattern of the long standard format
    pub fn long_date_pattern(&self) -> &str {
        &self.long_date_pattern
    }

    /// Full month name; `month` is 1-based
    pub fn month_name(&self, month: u32) -> &str {
        name_at(&self.month_names, month.wrapping_sub(1) as usize)
    }

    /// Abbreviated month name; `month` is 1-based
    pub fn abbreviated_month_name(&self, month: u32) -> &str {
        name_at(&self.abbreviated_month_names, month.wrapping_sub(1) as usize)
    }

    /// Full day name
    pub fn day_name(&self, day: Weekday) -> &str {
        name_at(&self.day_names, day.num_days_from_sunday() as usize)
    }

    /// Abbreviated day name
    pub fn abbreviated_day_name(&self, day: Weekday) -> &str {
        name_at(&self.abbreviated_day_names, day.num_days_from_sunday() as usize)
    }

    pub(crate) fn month_names(&self) -> &[String] {
        &self.month_names
    }

    pub(crate) fn abbreviated_month_names(&self) -> &[String] {
        &self.abbreviated_month_names
    }

    pub(crate) fn day_names(&self) -> &[String] {
        &self.day_names
    }

    pub(crate) fn abbreviated_day_names(&self) -> &[String] {
        &self.abbreviated_day_names
    }
}

fn name_at(names: &[String], index: usize) -> &str {
    names.get(index).map(String::as_str).unwrap_or("")
}

fn check_len(culture: &str, field: &str, names: &[String], expected: usize) -> Result<()> {
    if names.len() != expected {
        return Err(Error::argument(format!(
            "Culture '{}' must have {} {}, got {}.",
            culture,
            expected,
            field,
            names.len()
        )));
    }
    Ok(())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const ENGLISH_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const ENGLISH_MONTHS_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const ENGLISH_DAYS: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];
const ENGLISH_DAYS_ABBR: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn invariant_spec() -> CultureSpec {
    CultureSpec {
        name: INVARIANT_NAME.to_string(),
        date_separator: "/".to_string(),
        short_date_pattern: "MM/dd/yyyy".to_string(),
        long_date_pattern: "dddd, dd MMMM yyyy".to_string(),
        month_names: strings(&ENGLISH_MONTHS),
        abbreviated_month_names: strings(&ENGLISH_MONTHS_ABBR),
        day_names: strings(&ENGLISH_DAYS),
        abbreviated_day_names: strings(&ENGLISH_DAYS_ABBR),
    }
}

fn en_us_spec() -> CultureSpec {
    CultureSpec {
        name: "en-US".to_string(),
        short_date_pattern: "M/d/yyyy".to_string(),
        long_date_pattern: "dddd, MMMM d, yyyy".to_string(),
        ..invariant_spec()
    }
}

fn da_dk_spec() -> CultureSpec {
    CultureSpec {
        name: "da-DK".to_string(),
        date_separator: "-".to_string(),
        short_date_pattern: "dd-MM-yyyy".to_string(),
        long_date_pattern: "d. MMMM yyyy".to_string(),
        month_names: strings(&[
            "januar", "februar", "marts", "april", "maj", "juni", "juli", "august",
            "september", "oktober", "november", "december",
        ]),
        abbreviated_month_names: strings(&[
            "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
        ]),
        day_names: strings(&[
            "søndag", "mandag", "tirsdag", "onsdag", "torsdag", "fredag", "lørdag",
        ]),
        abbreviated_day_names: strings(&["søn", "man", "tir", "ons", "tor", "fre", "lør"]),
    }
}

fn built_in(spec: CultureSpec) -> Arc<Culture> {
    Arc::new(Culture::from_checked_spec(spec))
}

// =============================================================================
// Registry
// =============================================================================

static INVARIANT: Lazy<Arc<Culture>> = Lazy::new(|| built_in(invariant_spec()));

/// Registered cultures, keyed by lower-cased name
static CULTURES: Lazy<DashMap<String, Arc<Culture>>> = Lazy::new(|| {
    let cultures = DashMap::new();
    cultures.insert(key(INVARIANT_NAME), INVARIANT.clone());
    for spec in [en_us_spec(), da_dk_spec()] {
        let culture = built_in(spec);
        cultures.insert(key(culture.name()), culture);
    }
    cultures
});

fn key(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// The invariant culture
pub fn invariant() -> Arc<Culture> {
    INVARIANT.clone()
}

/// Look up a culture by name, ignoring case
///
/// # Errors
///
/// Returns [`Error::Argument`] if no culture with that name is registered.
pub fn get(name: &str) -> Result<Arc<Culture>> {
    CULTURES
        .get(&key(name))
        .map(|entry| entry.value().clone())
        .ok_or_else(|| {
            Error::argument(format!(
                "Culture is not supported. '{}' is an invalid culture identifier.",
                name
            ))
        })
}

/// Register a culture, replacing any culture with the same name
///
/// # Errors
///
/// Returns [`Error::Argument`] when trying to replace the invariant culture.
pub fn register(culture: Culture) -> Result<Arc<Culture>> {
    if culture.is_invariant() {
        return Err(Error::argument("The invariant culture cannot be replaced."));
    }
    let culture = Arc::new(culture);
    debug!(culture = culture.name(), "registering culture");
    CULTURES.insert(key(culture.name()), culture.clone());
    Ok(culture)
}

/// Names of all registered cultures, sorted
pub fn names() -> Vec<String> {
    let mut names: Vec<String> = CULTURES
        .iter()
        .map(|entry| entry.value().name().to_string())
        .collect();
    names.sort();
    names
}

// =============================================================================
// Ambient Culture
// =============================================================================

static DEFAULT: Lazy<RwLock<Arc<Culture>>> = Lazy::new(|| RwLock::new(invariant()));

thread_local! {
    static CURRENT: RefCell<Option<Arc<Culture>>> = RefCell::new(None);
}

/// The process default culture
pub fn default_culture() -> Arc<Culture> {
    DEFAULT.read().clone()
}

/// Set the process default culture, returning the previous one
pub fn set_default(culture: Arc<Culture>) -> Arc<Culture> {
    std::mem::replace(&mut *DEFAULT.write(), culture)
}

/// The culture active for the calling thread right now
pub fn current() -> Arc<Culture> {
    CURRENT
        .with(|current| current.borrow().clone())
        .unwrap_or_else(default_culture)
}

fn replace_current(culture: Option<Arc<Culture>>) -> Option<Arc<Culture>> {
    CURRENT.with(|current| std::mem::replace(&mut *current.borrow_mut(), culture))
}

/// Thread-local ambient culture override, restored on drop
///
/// Scopes nest; dropping a scope reinstates whatever was active when it
/// was created.
#[must_use = "the culture is only active while the scope is alive"]
pub struct CultureScope {
    previous: Option<Arc<Culture>>,
    // Bound to the thread whose override it replaced
    _not_send: PhantomData<*const ()>,
}

impl CultureScope {
    /// Activate a registered culture by name
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if the culture is not registered.
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self::with(get(name)?))
    }

    /// Activate the given culture
    pub fn with(culture: Arc<Culture>) -> Self {
        CultureScope {
            previous: replace_current(Some(culture)),
            _not_send: PhantomData,
        }
    }
}

impl Drop for CultureScope {
    fn drop(&mut self) {
        replace_current(self.previous.take());
    }
}
