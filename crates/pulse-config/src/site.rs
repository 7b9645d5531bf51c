//! The full site configuration value.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::fonts::FontConfig;
use crate::language::Language;
use crate::page::{Page, PageFields};

/// The complete bilingual text and typography configuration for the public
/// pages.
///
/// A `SiteConfig` is immutable once live: edits happen on a [`Draft`]
/// (a deep copy) and a successful publish replaces the live value
/// wholesale. There is no field-level patching of a live config.
///
/// Deserialization is deliberately lenient: the backing blob is externally
/// editable, so *any* JSON value produces a config — missing pages,
/// non-string fields, and malformed font entries degrade field-by-field to
/// empty entries that resolve to compiled fallbacks.
///
/// [`Draft`]: crate::draft::Draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    pub fonts: FontConfig,
    pub home: PageFields,
    pub about: PageFields,
    pub founder: PageFields,
    pub contact: PageFields,
}

impl SiteConfig {
    /// Lenient, total extraction from an arbitrary JSON value.
    pub fn from_value(value: &Value) -> Self {
        let obj = value.as_object();
        let section = |name: &str| obj.and_then(|o| o.get(name));
        Self {
            fonts: FontConfig::from_value(section("fonts")),
            home: PageFields::from_value(section("home")),
            about: PageFields::from_value(section("about")),
            founder: PageFields::from_value(section("founder")),
            contact: PageFields::from_value(section("contact")),
        }
    }

    /// Parse a JSON document.
    ///
    /// Fails only on invalid JSON syntax; any valid JSON value, whatever
    /// its shape, yields a config.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serialize to the canonical pretty-printed JSON document, as
    /// committed to the blob store.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Field map for a page.
    pub fn page(&self, page: Page) -> &PageFields {
        match page {
            Page::Home => &self.home,
            Page::About => &self.about,
            Page::Founder => &self.founder,
            Page::Contact => &self.contact,
        }
    }

    /// Mutable field map for a page.
    pub fn page_mut(&mut self, page: Page) -> &mut PageFields {
        match page {
            Page::Home => &mut self.home,
            Page::About => &mut self.about,
            Page::Founder => &mut self.founder,
            Page::Contact => &mut self.contact,
        }
    }

    /// Look up a field by its full (language-suffixed) name.
    ///
    /// Empty values read as absent so they fall through to fallbacks.
    pub fn field(&self, page: Page, name: &str) -> Option<&str> {
        self.page(page).get(name)
    }

    /// Build the full field name for a base name and language
    /// (`"hero_title"` + `En` → `"hero_title_en"`).
    pub fn localized_field(base: &str, lang: Language) -> String {
        format!("{base}{}", lang.suffix())
    }
}

impl<'de> Deserialize<'de> for SiteConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(SiteConfig::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_is_total() {
        for value in [json!(null), json!(42), json!("text"), json!([1, 2, 3])] {
            let config = SiteConfig::from_value(&value);
            assert!(config.home.is_empty());
            assert_eq!(config.fonts, FontConfig::default());
        }
    }

    #[test]
    fn from_json_accepts_partial_shapes() {
        let config = SiteConfig::from_json(r#"{"home": {"hero_title_en": "Hi"}}"#).unwrap();
        assert_eq!(config.field(Page::Home, "hero_title_en"), Some("Hi"));
        assert_eq!(config.field(Page::Home, "hero_title_ar"), None);
        assert!(config.about.is_empty());
    }

    #[test]
    fn from_json_rejects_only_invalid_syntax() {
        assert!(SiteConfig::from_json("{not json").is_err());
        assert!(SiteConfig::from_json("[]").is_ok());
    }

    #[test]
    fn serialization_round_trips_canonical_shape() {
        let mut config = SiteConfig::default();
        config
            .page_mut(Page::Contact)
            .set("email_label_en", "Email");
        let text = config.to_pretty_json().unwrap();
        let back = SiteConfig::from_json(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn localized_field_appends_suffix() {
        assert_eq!(
            SiteConfig::localized_field("hero_title", Language::En),
            "hero_title_en"
        );
        assert_eq!(
            SiteConfig::localized_field("hero_title", Language::Ar),
            "hero_title_ar"
        );
    }
}
