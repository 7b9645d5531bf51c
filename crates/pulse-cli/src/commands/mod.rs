//! Command implementations for pulse-cli

pub mod api;
pub mod draft;
pub mod publish;
pub mod pull;
pub mod settings;
pub mod show;

pub use api::run_api;
pub use draft::run_draft;
pub use publish::run_publish;
pub use pull::run_pull;
pub use settings::run_settings;
pub use show::{run_fonts, run_show};
