//! Effective-value resolution with per-field fallback.

use crate::draft::Draft;
use crate::fonts::FontVars;
use crate::language::Language;
use crate::page::Page;
use crate::site::SiteConfig;

/// Holds the live [`SiteConfig`] and produces effective display strings.
///
/// The resolver owns the single live configuration value and its derived
/// font variables. Both are replaced together, wholesale, by [`install`] —
/// at startup load and when a publish succeeds. Readers borrow; nothing
/// mutates the live value in place.
///
/// [`install`]: Resolver::install
#[derive(Debug, Clone)]
pub struct Resolver {
    live: SiteConfig,
    fonts: FontVars,
}

impl Resolver {
    /// Install an initial configuration and derive its font variables.
    pub fn new(config: SiteConfig) -> Self {
        let fonts = FontVars::from_config(&config.fonts);
        Self { live: config, fonts }
    }

    /// Effective display string for `(page, field)`.
    ///
    /// Returns the live value when present and non-empty, otherwise the
    /// caller's compiled fallback. Unknown fields are not an error —
    /// they simply fall through, so an externally edited blob can never
    /// break rendering. A missing field never borrows from the other
    /// language: the suffixed field name is the whole lookup key.
    pub fn resolve<'a>(&'a self, page: Page, field: &str, fallback: &'a str) -> &'a str {
        self.live.field(page, field).unwrap_or(fallback)
    }

    /// Suffixing form of [`resolve`]: looks up `{base}_{lang}`.
    ///
    /// [`resolve`]: Resolver::resolve
    pub fn resolve_localized<'a>(
        &'a self,
        page: Page,
        base: &str,
        lang: Language,
        fallback: &'a str,
    ) -> &'a str {
        let field = SiteConfig::localized_field(base, lang);
        self.live.field(page, &field).unwrap_or(fallback)
    }

    /// Replace the live configuration wholesale and re-derive the font
    /// variables.
    pub fn install(&mut self, config: SiteConfig) {
        tracing::debug!("Installing new live site configuration");
        self.fonts = FontVars::from_config(&config.fonts);
        self.live = config;
    }

    /// The live configuration.
    pub fn live(&self) -> &SiteConfig {
        &self.live
    }

    /// The effective font variables.
    pub fn fonts(&self) -> &FontVars {
        &self.fonts
    }

    /// Open a draft: a deep copy of the live configuration.
    pub fn begin_draft(&self) -> Draft {
        Draft::new(&self.live)
    }
}
