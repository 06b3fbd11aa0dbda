//! Brand configuration and its builder.

use chrono::Local;

/// Date format used for the "last updated" label.
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// Characters refused by [`BrandConfig::check_values`] in names, fonts and logo references.
const UNSAFE_CHARACTERS: &[char] = &['<', '>', '"', '\'', '{', '}', ';', '\\'];

/// Parameters describing one brand's visual identity.
///
/// Values are kept exactly as supplied. The composer interpolates them
/// verbatim, so a malformed color ends up in the output unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandConfig {
    name: String,
    primary_color: String,
    secondary_color: String,
    primary_font: String,
    secondary_font: String,
    logo: Option<String>,
    generated_on: String,
}

impl BrandConfig {
    /// Start building a configuration.
    pub fn builder() -> BrandConfigBuilder {
        BrandConfigBuilder::default()
    }

    /// Brand name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Primary brand color.
    pub fn primary_color(&self) -> &str {
        &self.primary_color
    }

    /// Secondary brand color.
    pub fn secondary_color(&self) -> &str {
        &self.secondary_color
    }

    /// Font family used for headings.
    pub fn primary_font(&self) -> &str {
        &self.primary_font
    }

    /// Font family used for body text.
    pub fn secondary_font(&self) -> &str {
        &self.secondary_font
    }

    /// Logo path or URL, if one was given.
    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    /// Human-readable date the configuration was created on.
    pub fn generated_on(&self) -> &str {
        &self.generated_on
    }

    /// Check colors and text values against a conservative character set.
    ///
    /// Composition never calls this. Callers that publish the manual to
    /// third parties can run it first to refuse values that would break out
    /// of the surrounding markup or style rules.
    pub fn check_values(&self) -> Result<(), ConfigError> {
        check_color("primary_color", &self.primary_color)?;
        check_color("secondary_color", &self.secondary_color)?;

        check_text("name", &self.name)?;
        check_text("primary_font", &self.primary_font)?;
        check_text("secondary_font", &self.secondary_font)?;
        if let Some(logo) = &self.logo {
            check_text("logo", logo)?;
        }

        Ok(())
    }
}

fn check_color(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let valid = match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidColor {
            field,
            value: value.to_string(),
        })
    }
}

fn check_text(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.contains(UNSAFE_CHARACTERS) {
        return Err(ConfigError::UnsafeCharacters {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Builder for [`BrandConfig`].
#[derive(Debug, Clone, Default)]
pub struct BrandConfigBuilder {
    name: Option<String>,
    primary_color: Option<String>,
    secondary_color: Option<String>,
    primary_font: Option<String>,
    secondary_font: Option<String>,
    logo: Option<String>,
    generated_on: Option<String>,
}

impl BrandConfigBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = Some(color.into());
        self
    }

    pub fn secondary_color(mut self, color: impl Into<String>) -> Self {
        self.secondary_color = Some(color.into());
        self
    }

    pub fn primary_font(mut self, font: impl Into<String>) -> Self {
        self.primary_font = Some(font.into());
        self
    }

    pub fn secondary_font(mut self, font: impl Into<String>) -> Self {
        self.secondary_font = Some(font.into());
        self
    }

    /// Logo path or URL. A blank value counts as no logo.
    pub fn logo(mut self, logo: Option<impl Into<String>>) -> Self {
        self.logo = logo.map(Into::into);
        self
    }

    /// Pin the "last updated" label instead of reading the local clock.
    pub fn generated_on(mut self, label: impl Into<String>) -> Self {
        self.generated_on = Some(label.into());
        self
    }

    /// Validate presence of every required field and build the configuration.
    pub fn build(self) -> Result<BrandConfig, ConfigError> {
        let generated_on = self
            .generated_on
            .unwrap_or_else(|| Local::now().format(DATE_FORMAT).to_string());

        Ok(BrandConfig {
            name: required("name", self.name)?,
            primary_color: required("primary_color", self.primary_color)?,
            secondary_color: required("secondary_color", self.secondary_color)?,
            primary_font: required("primary_font", self.primary_font)?,
            secondary_font: required("secondary_font", self.secondary_font)?,
            logo: self.logo.filter(|l| !l.trim().is_empty()),
            generated_on,
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    match value {
        None => Err(ConfigError::MissingField(field)),
        Some(v) if v.trim().is_empty() => Err(ConfigError::EmptyField(field)),
        Some(v) => Ok(v),
    }
}

/// Errors raised while building or checking a [`BrandConfig`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required brand field: {0}")]
    MissingField(&'static str),

    #[error("Brand field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("Invalid color for {field}: {value:?} (expected #RGB, #RRGGBB or #RRGGBBAA)")]
    InvalidColor { field: &'static str, value: String },

    #[error("Unsafe characters in {field}: {value:?}")]
    UnsafeCharacters { field: &'static str, value: String },
}
