//! Brand manual composition.

use minijinja::{context, AutoEscape, Environment, UndefinedBehavior, Value};

use crate::config::BrandConfig;
use crate::logo::Logo;
use crate::palette::{brand_swatches, neutral_swatches, NEUTRAL_TONES};
use crate::sections::SECTIONS;
use crate::stylesheet::{font_request_url, minify_stylesheet};
use crate::templates::{BODY_TEMPLATE, DOCUMENT_TEMPLATE, STYLESHEET_TEMPLATE};
use crate::ComposeError;

/// Renders brand manuals from a [`BrandConfig`].
///
/// Every call is a pure function of the configuration: the same config
/// (including its generation date) always produces byte-identical output.
/// Values are interpolated verbatim, without escaping.
pub struct Composer {
    env: Environment<'static>,
    minify: bool,
}

impl Composer {
    /// Create a composer with the built-in skeleton.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_template("stylesheet.css", STYLESHEET_TEMPLATE)
            .expect("Failed to add stylesheet template");
        env.add_template("body.html", BODY_TEMPLATE)
            .expect("Failed to add body template");
        env.add_template("document.html", DOCUMENT_TEMPLATE)
            .expect("Failed to add document template");

        for section in SECTIONS {
            env.add_template_owned(section.template_name(), section.source)
                .expect("Failed to add section template");
        }

        Self { env, minify: false }
    }

    /// Minify the stylesheet embedded by [`Composer::compose_document`].
    ///
    /// Minified output normalizes color and font values, so it no longer
    /// repeats the configured strings verbatim.
    pub fn minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Compose the stylesheet: palette variables, font import and layout rules.
    pub fn compose_stylesheet(&self, config: &BrandConfig) -> Result<String, ComposeError> {
        self.render("stylesheet.css", brand_context(config))
    }

    /// Compose the body: sidebar navigation, every section and the footer.
    pub fn compose_body(&self, config: &BrandConfig) -> Result<String, ComposeError> {
        self.render("body.html", brand_context(config))
    }

    /// Compose the complete standalone document.
    pub fn compose_document(&self, config: &BrandConfig) -> Result<String, ComposeError> {
        tracing::debug!(brand = config.name(), "Composing brand manual");

        let mut stylesheet = self.compose_stylesheet(config)?;
        if self.minify {
            stylesheet = minify_stylesheet(&stylesheet)?;
        }
        let body = self.compose_body(config)?;

        self.render(
            "document.html",
            context! {
                brand => config.name(),
                stylesheet => stylesheet,
                body => body,
            },
        )
    }

    fn render(&self, template: &str, ctx: Value) -> Result<String, ComposeError> {
        let tmpl = self.env.get_template(template)?;
        Ok(tmpl.render(ctx)?)
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

/// Values shared by the stylesheet and body templates.
fn brand_context(config: &BrandConfig) -> Value {
    context! {
        brand => config.name(),
        primary_color => config.primary_color(),
        secondary_color => config.secondary_color(),
        primary_font => config.primary_font(),
        secondary_font => config.secondary_font(),
        generated_on => config.generated_on(),
        logo => Logo::for_brand(config).to_string(),
        font_url => font_request_url(config),
        neutral_tones => NEUTRAL_TONES,
        brand_swatches => brand_swatches(config),
        neutral_swatches => neutral_swatches(),
        sections => SECTIONS,
    }
}

/// Compose a standalone brand manual with a fresh [`Composer`].
pub fn compose_document(config: &BrandConfig) -> Result<String, ComposeError> {
    Composer::new().compose_document(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn acme() -> BrandConfig {
        BrandConfig::builder()
            .name("Acme")
            .primary_color("#FF5722")
            .secondary_color("#2196F3")
            .primary_font("Roboto")
            .secondary_font("Lato")
            .generated_on("October 19, 2026")
            .build()
            .unwrap()
    }

    fn with_logo(logo: &str) -> BrandConfig {
        BrandConfig::builder()
            .name("Acme")
            .primary_color("#FF5722")
            .secondary_color("#2196F3")
            .primary_font("Roboto")
            .secondary_font("Lato")
            .logo(Some(logo))
            .generated_on("October 19, 2026")
            .build()
            .unwrap()
    }

    fn attribute_values<'a>(html: &'a str, prefix: &str) -> Vec<&'a str> {
        html.match_indices(prefix)
            .map(|(i, _)| {
                let rest = &html[i + prefix.len()..];
                &rest[..rest.find('"').unwrap()]
            })
            .collect()
    }

    #[test]
    fn output_is_deterministic() {
        let composer = Composer::new();
        let config = acme();

        let first = composer.compose_document(&config).unwrap();
        let second = composer.compose_document(&config).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, compose_document(&config).unwrap());
    }

    #[test]
    fn wraps_stylesheet_and_body() {
        let composer = Composer::new();
        let config = acme();

        let html = composer.compose_document(&config).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Acme Brand Manual</title>"));
        assert!(html.contains(&composer.compose_stylesheet(&config).unwrap()));
        assert!(html.contains(&composer.compose_body(&config).unwrap()));
    }

    #[test]
    fn stylesheet_declares_palette() {
        let css = Composer::new().compose_stylesheet(&acme()).unwrap();

        assert!(css.contains("--primary-color: #FF5722;"));
        assert!(css.contains("--secondary-color: #2196F3;"));
        for tone in NEUTRAL_TONES {
            assert!(css.contains(&format!("--{}: {};", tone.var, tone.hex)));
        }
    }

    #[test]
    fn stylesheet_has_responsive_layout() {
        let css = Composer::new().compose_stylesheet(&acme()).unwrap();

        assert!(css.contains("width: 280px;"));
        assert!(css.contains("overflow-y: auto;"));
        assert!(css.contains("margin-left: 280px;"));
        assert!(css.contains("@media (max-width: 1024px)"));
        assert!(css.contains("margin-left: 220px;"));
        assert!(css.contains("@media (max-width: 768px)"));
        assert!(css.contains("display: none;"));
        assert!(css.contains("margin-left: 0;"));
    }

    #[test]
    fn stylesheet_imports_fonts() {
        let css = Composer::new().compose_stylesheet(&acme()).unwrap();

        assert!(css.starts_with(
            "@import url('https://fonts.googleapis.com/css2?family=Roboto:wght@400;700&family=Lato:wght@400;700&display=swap');"
        ));
    }

    #[test]
    fn example_brand_repeats_primary_color() {
        let html = compose_document(&acme()).unwrap();

        assert!(html.matches("#FF5722").count() >= 3);
        assert!(html.contains("HEX: #FF5722"));
        assert!(html.contains("HEX: #2196F3"));
        assert!(html.contains("family=Roboto:"));
        assert!(html.contains("family=Lato:"));
    }

    #[test]
    fn colors_are_never_reformatted() {
        let config = BrandConfig::builder()
            .name("Acme")
            .primary_color("#AbCdEf")
            .secondary_color("#0a0B0c")
            .primary_font("Roboto")
            .secondary_font("Lato")
            .build()
            .unwrap();

        let html = compose_document(&config).unwrap();

        assert!(html.matches("#AbCdEf").count() >= 3);
        assert_eq!(
            html.to_lowercase().matches("#abcdef").count(),
            html.matches("#AbCdEf").count()
        );
        assert_eq!(
            html.to_lowercase().matches("#0a0b0c").count(),
            html.matches("#0a0B0c").count()
        );
    }

    #[test]
    fn multi_word_fonts_keep_spaces_in_rules() {
        let config = BrandConfig::builder()
            .name("Acme")
            .primary_color("#FF5722")
            .secondary_color("#2196F3")
            .primary_font("Open Sans")
            .secondary_font("Source Serif 4")
            .build()
            .unwrap();

        let html = compose_document(&config).unwrap();

        assert!(html.contains("family=Open+Sans:wght@400;700"));
        assert!(html.contains("family=Source+Serif+4:wght@400;700"));
        assert!(!html.contains("'Open+Sans'"));

        for line in html.lines().filter(|l| l.contains("font-family:")) {
            assert!(
                line.contains("'Open Sans', sans-serif")
                    || line.contains("'Source Serif 4', sans-serif"),
                "unexpected font declaration: {line}"
            );
        }
    }

    #[test]
    fn falls_back_to_name_without_logo() {
        let html = compose_document(&acme()).unwrap();

        assert!(!html.contains("<img"));
        // Sidebar, primary variant and inverted variant.
        assert_eq!(html.matches("<h1>Acme</h1>").count(), 3);
    }

    #[test]
    fn uses_logo_at_every_site() {
        let html = compose_document(&with_logo("assets/acme logo.svg")).unwrap();

        assert_eq!(
            html.matches(r#"<img src="assets/acme logo.svg" alt="Acme Logo">"#)
                .count(),
            3
        );
        assert_eq!(html.matches("<img").count(), 3);
        assert!(!html.contains("<h1>Acme</h1>"));
    }

    #[test]
    fn inverted_logo_sits_on_primary_color() {
        let html = compose_document(&with_logo("logo.png")).unwrap();

        let inverted = html.find("background-color: #FF5722;\">").unwrap();
        let logo = html[inverted..].find("<img src=\"logo.png\"").unwrap();

        assert!(logo < 100);
    }

    #[test]
    fn every_nav_anchor_has_one_section() {
        let body = Composer::new().compose_body(&acme()).unwrap();

        let anchors = attribute_values(&body, "href=\"#");
        let ids = attribute_values(&body, "id=\"");

        assert_eq!(anchors.len(), SECTIONS.len());
        for anchor in &anchors {
            assert_eq!(
                ids.iter().filter(|id| *id == anchor).count(),
                1,
                "anchor #{anchor} should match exactly one section"
            );
        }
    }

    #[test]
    fn sections_render_in_order() {
        let body = Composer::new().compose_body(&acme()).unwrap();

        let ids = attribute_values(&body, "id=\"");
        let expected: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();

        assert_eq!(ids, expected);
        assert!(body.find("class=\"sidebar\"").unwrap() < body.find("class=\"main-content\"").unwrap());
    }

    #[test]
    fn overview_reports_generation_date() {
        let body = Composer::new().compose_body(&acme()).unwrap();

        assert!(body.contains("<h1>Acme Brand Manual</h1>"));
        assert!(body.contains("<strong>Last Updated:</strong> October 19, 2026"));
        assert!(body.contains("Last updated October 19, 2026."));
    }

    #[test]
    fn typography_shows_both_fonts() {
        let body = Composer::new().compose_body(&acme()).unwrap();

        for level in 1..=6 {
            assert!(body.contains(&format!(
                "<h{level} style=\"font-family: 'Roboto', sans-serif;\">Heading {level}</h{level}>"
            )));
        }
        for size in ["16px", "14px", "12px"] {
            assert!(body.contains(&format!("font-family: 'Lato', sans-serif; font-size: {size};")));
        }
        assert!(body.contains("font-weight: bold;"));
        assert!(body.contains("font-style: italic;"));
        assert!(body.contains("Our typefaces are Roboto for headings and Lato for body text."));
    }

    #[test]
    fn palette_lists_neutral_swatches() {
        let body = Composer::new().compose_body(&acme()).unwrap();

        assert!(body.contains("<strong>Dark Gray</strong>"));
        assert!(body.contains("HEX: #333333"));
        assert!(body.contains("<strong>Light Gray</strong>"));
        assert!(body.contains("HEX: #f5f5f5"));
    }

    #[test]
    fn logo_section_lists_usage_rules() {
        let body = Composer::new().compose_body(&acme()).unwrap();

        assert!(body.contains("Monochrome Logo"));
        assert!(body.contains("Print: 0.75 inches (19mm) wide"));
        assert!(body.contains("Digital: 80 pixels wide"));
        assert!(body.contains("<h4>Do</h4>"));
        assert!(body.contains("<h4>Don't</h4>"));
    }

    #[test]
    fn minified_document_embeds_compact_styles() {
        let html = Composer::new()
            .minify(true)
            .compose_document(&acme())
            .unwrap();

        assert!(html.contains(".sidebar{"));
        assert!(!html.contains("    box-sizing: border-box;"));
        assert!(html.contains("<h1>Acme Brand Manual</h1>"));
    }

    #[test]
    fn malformed_values_pass_through() {
        let config = BrandConfig::builder()
            .name("Acme & Sons")
            .primary_color("tomato;")
            .secondary_color("#2196F3")
            .primary_font("Roboto")
            .secondary_font("Lato")
            .build()
            .unwrap();

        let html = compose_document(&config).unwrap();

        assert!(html.contains("--primary-color: tomato;;"));
        assert!(html.contains("<title>Acme & Sons Brand Manual</title>"));
    }
}
