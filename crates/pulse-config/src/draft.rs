//! Draft editing of a site configuration.

use std::collections::BTreeSet;

use crate::fonts::FontSlot;
use crate::language::Language;
use crate::page::Page;
use crate::site::SiteConfig;

/// A single pending field change, for review before publishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    /// Dotted location: `home.hero_title_en` or `fonts.ar.headings`.
    pub location: String,
    /// Live value, `None` when the field is newly added.
    pub old: Option<String>,
    /// Draft value, `None` when the field was removed.
    pub new: Option<String>,
}

/// An in-memory working copy of the live configuration.
///
/// Created as a full deep clone so edits can never reach the live value
/// through shared structure. A draft that is dropped without publishing is
/// simply discarded; only a successful publish promotes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    config: SiteConfig,
}

impl Draft {
    /// Deep-copy the live configuration into a new draft.
    pub fn new(live: &SiteConfig) -> Self {
        Self {
            config: live.clone(),
        }
    }

    /// Wrap an already-materialized configuration (e.g. one reloaded from
    /// a draft file).
    pub fn from_config(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Set a page field by its full (language-suffixed) name.
    pub fn set_field(&mut self, page: Page, field: impl Into<String>, value: impl Into<String>) {
        self.config.page_mut(page).set(field, value);
    }

    /// Read a draft field, empty values reading as absent.
    pub fn field(&self, page: Page, field: &str) -> Option<&str> {
        self.config.field(page, field)
    }

    /// Set one font family.
    pub fn set_font(&mut self, lang: Language, slot: FontSlot, family: impl Into<String>) {
        let set = match lang {
            Language::Ar => &mut self.config.fonts.ar,
            Language::En => &mut self.config.fonts.en,
        };
        match slot {
            FontSlot::Headings => set.headings = family.into(),
            FontSlot::Body => set.body = family.into(),
        }
    }

    /// The draft configuration as currently edited.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Consume the draft, yielding the configuration to publish.
    pub fn into_config(self) -> SiteConfig {
        self.config
    }

    /// List every field that differs from `live`, in stable order.
    ///
    /// Covers page fields (added, removed, modified) and the four font
    /// variables.
    pub fn changes(&self, live: &SiteConfig) -> Vec<FieldChange> {
        let mut changes = Vec::new();

        for (lang, label) in [(Language::Ar, "ar"), (Language::En, "en")] {
            let old = live.fonts.for_language(lang);
            let new = self.config.fonts.for_language(lang);
            for (slot, old_val, new_val) in [
                ("headings", &old.headings, &new.headings),
                ("body", &old.body, &new.body),
            ] {
                if old_val != new_val {
                    changes.push(FieldChange {
                        location: format!("fonts.{label}.{slot}"),
                        old: Some(old_val.clone()),
                        new: Some(new_val.clone()),
                    });
                }
            }
        }

        for page in Page::ALL {
            let old_fields = live.page(page);
            let new_fields = self.config.page(page);

            let names: BTreeSet<&str> = old_fields
                .iter()
                .map(|(name, _)| name)
                .chain(new_fields.iter().map(|(name, _)| name))
                .collect();

            for name in names {
                let old = old_fields.get(name).map(str::to_string);
                let new = new_fields.get(name).map(str::to_string);
                if old != new {
                    changes.push(FieldChange {
                        location: format!("{page}.{name}"),
                        old,
                        new,
                    });
                }
            }
        }

        changes
    }

    /// Whether the draft differs from `live` at all.
    pub fn is_modified(&self, live: &SiteConfig) -> bool {
        self.config != *live
    }
}
