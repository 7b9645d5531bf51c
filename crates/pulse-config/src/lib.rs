//! Bilingual site configuration for MedPulse
//!
//! This crate owns the `SiteConfig` data model (per-page, per-field,
//! per-language display text plus typography), the fallback resolver that
//! produces effective display strings, and the draft-editing value type.
//!
//! The live configuration is an explicitly owned value held by a
//! [`Resolver`]; it is only ever replaced wholesale (at load, or when a
//! publish succeeds), never patched field-by-field.

pub mod defaults;
pub mod draft;
pub mod error;
pub mod fonts;
pub mod io;
pub mod language;
pub mod page;
pub mod resolver;
pub mod settings;
pub mod site;

pub use draft::{Draft, FieldChange};
pub use error::{Error, Result};
pub use fonts::{FontConfig, FontSet, FontSlot, FontVars};
pub use language::Language;
pub use page::{Page, PageFields};
pub use resolver::Resolver;
pub use settings::Settings;
pub use site::SiteConfig;
