//! Brand manual composition.
//!
//! Turns a [`BrandConfig`] into a standalone HTML document with an embedded
//! stylesheet. Composition is pure: no I/O, no shared state.

pub mod composer;
pub mod config;
pub mod logo;
pub mod palette;
pub mod sections;
pub mod stylesheet;
mod templates;

pub use composer::{compose_document, Composer};
pub use config::{BrandConfig, BrandConfigBuilder, ConfigError};
pub use logo::Logo;
pub use sections::{Section, SECTIONS};
pub use stylesheet::{font_request_url, minify_stylesheet};

/// Errors that can occur while composing a manual.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to minify stylesheet: {0}")]
    Minify(String),
}
