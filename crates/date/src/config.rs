//! Configuration via `calends.toml`
//!
//! Selects the process default culture and registers extra cultures.
//! The crate never touches the filesystem: hand the TOML text to
//! [`CalendsConfig::from_toml`] and call [`CalendsConfig::apply`] at startup.

use crate::culture::{self, Culture, CultureSpec};
use calends_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Conventional config file name
pub const CONFIG_FILE_NAME: &str = "calends.toml";

/// Calends configuration loaded from `calends.toml`.
///
/// # Example
///
/// ```toml
/// # Process default culture; "" is the invariant culture
/// culture = "da-DK"
///
/// # [[cultures]]
/// # name = "nb-NO"
/// # date_separator = "."
/// # ...
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendsConfig {
    /// Name of the process default culture (`""` is invariant)
    #[serde(default)]
    pub culture: String,
    /// Cultures to register before the default is selected
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cultures: Vec<CultureSpec>,
}

impl CalendsConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Calends configuration
#
# Process default culture, used by the Short and Long date formats on
# threads without a CultureScope. "" is the invariant culture.
# Built in: "", "da-DK", "en-US"
culture = ""

# Extra cultures, registered before the default is selected.
# [[cultures]]
# name = "nb-NO"
# date_separator = "."
# short_date_pattern = "dd/MM/yyyy"
# long_date_pattern = "d. MMMM yyyy"
# month_names = ["januar", "februar", "mars", "april", "mai", "juni",
#                "juli", "august", "september", "oktober", "november", "desember"]
# abbreviated_month_names = ["jan", "feb", "mar", "apr", "mai", "jun",
#                            "jul", "aug", "sep", "okt", "nov", "des"]
# day_names = ["søndag", "mandag", "tirsdag", "onsdag", "torsdag", "fredag", "lørdag"]
# abbreviated_day_names = ["søn", "man", "tir", "ons", "tor", "fre", "lør"]
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if the text is not a valid config.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text)
            .map_err(|e| Error::argument(format!("Failed to parse configuration: {}", e)))
    }

    /// Serialize this config to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::argument(format!("Failed to serialize configuration: {}", e)))
    }

    /// Register the configured cultures, then make `culture` the process
    /// default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if a culture description is invalid or
    /// the default culture is unknown. Cultures registered before the
    /// failure stay registered; the default is left unchanged.
    pub fn apply(&self) -> Result<()> {
        for spec in &self.cultures {
            culture::register(Culture::from_spec(spec.clone())?)?;
        }
        let default = culture::get(&self.culture).map_err(|e| {
            warn!(culture = %self.culture, "configured default culture is not registered");
            e
        })?;
        culture::set_default(default);
        info!(
            culture = %self.culture,
            registered = self.cultures.len(),
            "applied calends configuration"
        );
        Ok(())
    }
}
