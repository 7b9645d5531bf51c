//! Typography configuration and the propagated font variables.

use serde::Serialize;
use serde_json::Value;

use crate::language::Language;

/// Heading and body font families for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontSet {
    pub headings: String,
    pub body: String,
}

impl FontSet {
    fn fallback(lang: Language) -> Self {
        // Matches the families the bundled pages ship with.
        match lang {
            Language::Ar => Self {
                headings: "Cairo".to_string(),
                body: "Tajawal".to_string(),
            },
            Language::En => Self {
                headings: "Inter".to_string(),
                body: "Inter".to_string(),
            },
        }
    }

    fn from_value(value: Option<&Value>, lang: Language) -> Self {
        let fallback = Self::fallback(lang);
        let Some(Value::Object(map)) = value else {
            return fallback;
        };
        let pick = |key: &str, default: String| {
            map.get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or(default)
        };
        Self {
            headings: pick("headings", fallback.headings.clone()),
            body: pick("body", fallback.body),
        }
    }
}

/// Per-language typography, as stored in the configuration blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontConfig {
    pub ar: FontSet,
    pub en: FontSet,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            ar: FontSet::fallback(Language::Ar),
            en: FontSet::fallback(Language::En),
        }
    }
}

impl FontConfig {
    /// Lenient extraction from an arbitrary JSON value.
    ///
    /// Missing or malformed entries degrade to the bundled families,
    /// per language and per slot. Never fails.
    pub fn from_value(value: Option<&Value>) -> Self {
        let obj = match value {
            Some(Value::Object(map)) => Some(map),
            _ => None,
        };
        Self {
            ar: FontSet::from_value(obj.and_then(|o| o.get("ar")), Language::Ar),
            en: FontSet::from_value(obj.and_then(|o| o.get("en")), Language::En),
        }
    }

    /// Font set for a language.
    pub fn for_language(&self, lang: Language) -> &FontSet {
        match lang {
            Language::Ar => &self.ar,
            Language::En => &self.en,
        }
    }
}

/// The two typography slots a language exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSlot {
    Headings,
    Body,
}

/// The four effective font-family variables applied after every successful
/// load or publish: Arabic headings/body and English headings/body.
///
/// This is the renderer-facing presentation state. It is owned by the
/// resolver and replaced together with the live configuration — never
/// mutated independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontVars {
    pub ar_headings: String,
    pub ar_body: String,
    pub en_headings: String,
    pub en_body: String,
}

impl FontVars {
    /// Derive the variables from a font configuration.
    pub fn from_config(fonts: &FontConfig) -> Self {
        Self {
            ar_headings: fonts.ar.headings.clone(),
            ar_body: fonts.ar.body.clone(),
            en_headings: fonts.en.headings.clone(),
            en_body: fonts.en.body.clone(),
        }
    }

    /// Effective family for a language/slot pair.
    pub fn var(&self, lang: Language, slot: FontSlot) -> &str {
        match (lang, slot) {
            (Language::Ar, FontSlot::Headings) => &self.ar_headings,
            (Language::Ar, FontSlot::Body) => &self.ar_body,
            (Language::En, FontSlot::Headings) => &self.en_headings,
            (Language::En, FontSlot::Body) => &self.en_body,
        }
    }
}
