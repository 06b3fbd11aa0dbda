//! Stylesheet helpers: the web font request and optional minification.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

use crate::config::BrandConfig;
use crate::ComposeError;

const FONT_API: &str = "https://fonts.googleapis.com/css2";

/// Character joining the words of a family name in the font request.
pub const FONT_JOIN: char = '+';

/// Weights requested for both families.
const FONT_WEIGHTS: &str = "wght@400;700";

/// Family identifier used in the font request: spaces become [`FONT_JOIN`].
pub fn font_family_param(font: &str) -> String {
    font.replace(' ', &FONT_JOIN.to_string())
}

/// URL loading both brand fonts in one request.
///
/// Only built as text; nothing is fetched.
pub fn font_request_url(config: &BrandConfig) -> String {
    format!(
        "{FONT_API}?family={}:{FONT_WEIGHTS}&family={}:{FONT_WEIGHTS}&display=swap",
        font_family_param(config.primary_font()),
        font_family_param(config.secondary_font()),
    )
}

/// Minify a stylesheet using lightningcss.
///
/// Minification normalizes values (hex colors are lowercased or shortened,
/// font names may lose their quotes), so a minified stylesheet no longer
/// carries the configured strings verbatim.
pub fn minify_stylesheet(css: &str) -> Result<String, ComposeError> {
    let stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| ComposeError::Minify(format!("CSS parse error: {}", e)))?;

    let minified = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| ComposeError::Minify(format!("CSS minify error: {}", e)))?;

    Ok(minified.code)
}
