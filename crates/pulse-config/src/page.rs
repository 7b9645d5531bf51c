//! Pages and their flat field maps.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;

/// The four publicly configurable pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    Home,
    About,
    Founder,
    Contact,
}

impl Page {
    /// All pages, in display order.
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Founder, Page::Contact];

    /// Page key as it appears in the configuration JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Founder => "founder",
            Page::Contact => "contact",
        }
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Page::Home),
            "about" => Ok(Page::About),
            "founder" => Ok(Page::Founder),
            "contact" => Ok(Page::Contact),
            _ => Err(Error::UnknownPage { name: s.to_string() }),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat field map for one page.
///
/// Field names carry their language suffix (`hero_title_ar`,
/// `hero_title_en`); values are plain display strings. The map is ordered so
/// serialization and change listings are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageFields(BTreeMap<String, String>);

impl PageFields {
    /// Empty field map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lenient extraction from an arbitrary JSON value.
    ///
    /// Anything that is not an object yields an empty map; non-string
    /// members are skipped. This never fails — the remote blob is
    /// externally editable and a malformed page section must degrade to
    /// compiled fallbacks, not break the site.
    pub fn from_value(value: Option<&Value>) -> Self {
        let mut fields = BTreeMap::new();
        if let Some(Value::Object(map)) = value {
            for (name, v) in map {
                if let Value::String(s) = v {
                    fields.insert(name.clone(), s.clone());
                }
            }
        }
        Self(fields)
    }

    /// Look up a field, treating empty strings as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Set a field value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Remove a field, returning the previous value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    /// Iterate fields in name order (empty values included).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of stored fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map holds no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_from_str_round_trips() {
        for page in Page::ALL {
            assert_eq!(page.as_str().parse::<Page>().unwrap(), page);
        }
        assert!("admin".parse::<Page>().is_err());
    }

    #[test]
    fn from_value_keeps_only_string_fields() {
        let value = json!({
            "hero_title_en": "Welcome",
            "hero_title_ar": "أهلاً",
            "stray_number": 7,
            "stray_object": { "nested": true },
        });
        let fields = PageFields::from_value(Some(&value));
        assert_eq!(fields.get("hero_title_en"), Some("Welcome"));
        assert_eq!(fields.get("hero_title_ar"), Some("أهلاً"));
        assert_eq!(fields.get("stray_number"), None);
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn from_value_tolerates_non_objects() {
        assert!(PageFields::from_value(None).is_empty());
        assert!(PageFields::from_value(Some(&json!("text"))).is_empty());
        assert!(PageFields::from_value(Some(&json!([1, 2]))).is_empty());
    }

    #[test]
    fn empty_string_reads_as_absent() {
        let mut fields = PageFields::new();
        fields.set("hero_title_ar", "");
        assert_eq!(fields.get("hero_title_ar"), None);
        fields.set("hero_title_ar", "عنوان");
        assert_eq!(fields.get("hero_title_ar"), Some("عنوان"));
    }
}
