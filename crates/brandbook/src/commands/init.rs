//! Write a starter brand.toml.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    tracing::info!("Created {}", config_path.display());
    tracing::info!("Edit it, then run 'brandbook generate'.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r##"# Brandbook Configuration

[brand]
# Name used in titles, headings and the output file name
name = "Acme Corporation"

# Brand colors as hex values
primary_color = "#FF5722"
secondary_color = "#2196F3"

# Heading and body font families (Google Fonts names)
primary_font = "Roboto"
secondary_font = "Lato"

# Optional logo path or URL. Without it the brand name is shown instead.
# logo = "assets/logo.svg"

[output]
# Directory the manual is written to
dir = "brand_manual"

# Minify the embedded stylesheet
minify = false
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brand.toml");

        run(&path, false).await.unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.brand.name.as_deref(), Some("Acme Corporation"));
        assert_eq!(config.brand.primary_font.as_deref(), Some("Roboto"));
        assert_eq!(config.brand.logo, None);
        assert_eq!(config.output.dir, "brand_manual");
    }

    #[tokio::test]
    async fn keeps_existing_config_without_yes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brand.toml");
        fs::write(&path, "[brand]\nname = \"Mine\"\n").unwrap();

        run(&path, false).await.unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[brand]\nname = \"Mine\"\n");

        run(&path, true).await.unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
