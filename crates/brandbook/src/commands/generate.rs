//! Brand manual generation command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use brandbook_compose::{BrandConfig, BrandConfigBuilder, Composer};
use clap::Args;

use crate::config::{load_config, BrandSection};

/// Flags for `brandbook generate`. Each brand flag overrides brand.toml.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Brand name
    #[arg(long)]
    pub name: Option<String>,

    /// Primary brand color, e.g. "#FF5722"
    #[arg(long)]
    pub primary_color: Option<String>,

    /// Secondary brand color
    #[arg(long)]
    pub secondary_color: Option<String>,

    /// Font family for headings
    #[arg(long)]
    pub primary_font: Option<String>,

    /// Font family for body text
    #[arg(long)]
    pub secondary_font: Option<String>,

    /// Logo path or URL
    #[arg(long)]
    pub logo: Option<String>,

    /// Output directory (defaults to config or "brand_manual")
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Minify the embedded stylesheet
    #[arg(long)]
    pub minify: bool,

    /// Refuse colors that are not hex and text containing markup characters
    #[arg(long)]
    pub strict: bool,

    /// Open the generated manual in a browser
    #[arg(long)]
    pub open: bool,
}

/// Combine file values with command-line overrides.
fn brand_builder(file: BrandSection, args: &GenerateArgs) -> BrandConfigBuilder {
    let mut builder = BrandConfig::builder();

    if let Some(name) = args.name.clone().or(file.name) {
        builder = builder.name(name);
    }
    if let Some(color) = args.primary_color.clone().or(file.primary_color) {
        builder = builder.primary_color(color);
    }
    if let Some(color) = args.secondary_color.clone().or(file.secondary_color) {
        builder = builder.secondary_color(color);
    }
    if let Some(font) = args.primary_font.clone().or(file.primary_font) {
        builder = builder.primary_font(font);
    }
    if let Some(font) = args.secondary_font.clone().or(file.secondary_font) {
        builder = builder.secondary_font(font);
    }

    builder.logo(args.logo.clone().or(file.logo))
}

/// File name for a brand's manual: lower-cased, spaces replaced by underscores.
pub fn manual_file_name(brand: &str) -> String {
    format!("{}_brand_manual.html", brand.to_lowercase().replace(' ', "_"))
}

/// Write the manual into `dir`, creating it if needed.
pub fn write_manual(dir: &Path, brand: &str, html: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(manual_file_name(brand));
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

/// Run the generate command.
pub async fn run(config_path: &Path, args: GenerateArgs) -> Result<()> {
    tracing::info!("Generating brand manual...");

    let file_config = load_config(config_path)?;

    let brand = brand_builder(file_config.brand, &args)
        .build()
        .context("Incomplete brand configuration")?;

    if args.strict {
        brand.check_values().context("Brand values failed the strict check")?;
    }

    let minify = args.minify || file_config.output.minify;
    let html = Composer::new()
        .minify(minify)
        .compose_document(&brand)?;

    let output_dir = args
        .output
        .unwrap_or_else(|| PathBuf::from(&file_config.output.dir));
    let path = write_manual(&output_dir, brand.name(), &html)?;

    tracing::info!("Brand manual for {} written to {}", brand.name(), path.display());

    if args.open {
        if let Err(e) = open::that(&path) {
            tracing::warn!("Failed to open {}: {}", path.display(), e);
        }
    }

    Ok(())
}
