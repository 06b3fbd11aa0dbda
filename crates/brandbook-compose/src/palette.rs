//! Fixed neutral tones and the color swatches shown in the palette section.

use serde::Serialize;

use crate::config::BrandConfig;

/// A CSS custom property with a constant value.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tone {
    /// Property name without the leading `--`
    pub var: &'static str,
    /// Hex value
    pub hex: &'static str,
}

pub const DARK_GRAY: &str = "#333333";
pub const LIGHT_GRAY: &str = "#f5f5f5";

/// Neutral tones declared next to the brand colors in `:root`.
pub const NEUTRAL_TONES: &[Tone] = &[
    Tone { var: "accent-color", hex: DARK_GRAY },
    Tone { var: "background-color", hex: "#ffffff" },
    Tone { var: "text-color", hex: DARK_GRAY },
    Tone { var: "light-gray", hex: LIGHT_GRAY },
    Tone { var: "medium-gray", hex: "#e0e0e0" },
    Tone { var: "dark-gray", hex: "#888888" },
];

/// A labeled color block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch<'a> {
    pub label: &'a str,
    pub hex: &'a str,
}

/// Swatches for the two brand colors.
pub fn brand_swatches(config: &BrandConfig) -> Vec<Swatch<'_>> {
    vec![
        Swatch {
            label: "Primary",
            hex: config.primary_color(),
        },
        Swatch {
            label: "Secondary",
            hex: config.secondary_color(),
        },
    ]
}

/// Swatches for the complementary neutrals.
pub fn neutral_swatches() -> Vec<Swatch<'static>> {
    vec![
        Swatch {
            label: "Dark Gray",
            hex: DARK_GRAY,
        },
        Swatch {
            label: "Light Gray",
            hex: LIGHT_GRAY,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn brand_swatches_follow_config() {
        let config = BrandConfig::builder()
            .name("Acme")
            .primary_color("#FF5722")
            .secondary_color("#2196F3")
            .primary_font("Roboto")
            .secondary_font("Lato")
            .build()
            .unwrap();

        let swatches = brand_swatches(&config);

        assert_eq!(
            swatches,
            vec![
                Swatch { label: "Primary", hex: "#FF5722" },
                Swatch { label: "Secondary", hex: "#2196F3" },
            ]
        );
    }

    #[test]
    fn neutral_swatches_reuse_root_tones() {
        for swatch in neutral_swatches() {
            assert!(NEUTRAL_TONES.iter().any(|t| t.hex == swatch.hex));
        }
    }
}
