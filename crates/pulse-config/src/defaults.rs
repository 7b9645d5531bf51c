//! Compiled-in default configuration.
//!
//! The bundled `siteconfig.json` asset ships with the application and is
//! the last resort when the remote blob cannot be fetched or no publish
//! credentials are configured. It always parses; a build that broke the
//! asset would fail its own tests.

use crate::site::SiteConfig;

const BUNDLED_JSON: &str = include_str!("../assets/siteconfig.json");

/// The bundled default configuration.
///
/// Falls back to an empty config if the asset were ever unparseable, so
/// this is total like every other path that produces a `SiteConfig`.
pub fn bundled() -> SiteConfig {
    SiteConfig::from_json(BUNDLED_JSON).unwrap_or_default()
}

/// The raw bundled JSON document.
pub fn bundled_json() -> &'static str {
    BUNDLED_JSON
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::page::Page;

    #[test]
    fn bundled_asset_parses() {
        let config = bundled();
        assert!(!config.home.is_empty());
        assert!(!config.about.is_empty());
        assert!(!config.founder.is_empty());
        assert!(!config.contact.is_empty());
    }

    #[test]
    fn bundled_fields_exist_in_both_languages() {
        let config = bundled();
        for page in Page::ALL {
            for (name, _) in config.page(page).iter() {
                let Some(base) = name.strip_suffix("_en") else {
                    continue;
                };
                let ar = format!("{base}{}", Language::Ar.suffix());
                assert!(
                    config.field(page, &ar).is_some(),
                    "{page}: {name} has no Arabic counterpart"
                );
            }
        }
    }

    #[test]
    fn bundled_fonts_are_populated() {
        let config = bundled();
        assert!(!config.fonts.ar.headings.is_empty());
        assert!(!config.fonts.en.body.is_empty());
    }
}
