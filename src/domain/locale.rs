//! Display locale for derived labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locale used for the default title and tag labels.
///
/// Keyword matching is not affected: every rule carries both English and
/// Russian stems, so text in either language is classified the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Title given to an entry whose location text is empty
    pub fn default_title(&self) -> &'static str {
        match self {
            Locale::En => "New entry",
            Locale::Ru => "Новая запись",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ru => write!(f, "ru"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ru" | "russian" => Ok(Locale::Ru),
            _ => Err(format!(
                "Invalid locale: '{}'. Valid locales are: en, ru",
                s
            )),
        }
    }
}
