//! Logo-or-name decision shared by every place the manual shows the logo.

use std::fmt;

use crate::config::BrandConfig;

/// What to render where a logo belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logo<'a> {
    /// An image reference to the configured logo.
    Image { src: &'a str, brand: &'a str },
    /// The brand name set as a heading when no logo is configured.
    Wordmark(&'a str),
}

impl<'a> Logo<'a> {
    /// Pick the logo representation for a brand.
    pub fn for_brand(config: &'a BrandConfig) -> Self {
        match config.logo() {
            Some(src) => Logo::Image {
                src,
                brand: config.name(),
            },
            None => Logo::Wordmark(config.name()),
        }
    }
}

impl fmt::Display for Logo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Logo::Image { src, brand } => write!(f, r#"<img src="{src}" alt="{brand} Logo">"#),
            Logo::Wordmark(brand) => write!(f, "<h1>{brand}</h1>"),
        }
    }
}
