//! Display language for the public pages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The two supported display languages.
///
/// Every configurable text field exists in both languages as independent
/// values (`*_ar` / `*_en`); nothing ever falls back across languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic — the site's primary language.
    #[default]
    Ar,
    /// English.
    En,
}

impl Language {
    /// Short language tag as used in field names and settings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Field-name suffix for this language (`"_ar"` / `"_en"`).
    pub fn suffix(&self) -> &'static str {
        match self {
            Language::Ar => "_ar",
            Language::En => "_en",
        }
    }

    /// Text direction for rendered pages.
    pub fn dir(&self) -> &'static str {
        match self {
            Language::Ar => "rtl",
            Language::En => "ltr",
        }
    }

    /// The other language.
    pub fn other(&self) -> Language {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ar" | "arabic" => Ok(Language::Ar),
            "en" | "english" => Ok(Language::En),
            _ => Err(Error::UnknownLanguage { tag: s.to_string() }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_arabic() {
        assert_eq!(Language::default(), Language::Ar);
    }

    #[test]
    fn from_str_accepts_tags_and_names() {
        assert_eq!("ar".parse::<Language>().unwrap(), Language::Ar);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("english".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn direction_follows_language() {
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
    }

    #[test]
    fn suffix_matches_field_naming() {
        assert_eq!(Language::Ar.suffix(), "_ar");
        assert_eq!(Language::En.suffix(), "_en");
    }
}
