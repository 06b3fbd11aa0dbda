//! The manual's sections, in display order.
//!
//! The sidebar navigation and the body are both rendered from [`SECTIONS`],
//! so every nav anchor has exactly one section with the same id.

use serde::Serialize;

use crate::templates;

/// One anchored part of the manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Anchor ID
    pub id: &'static str,
    /// Navigation label
    pub title: &'static str,
    #[serde(skip)]
    pub(crate) source: &'static str,
}

impl Section {
    /// Name under which the section's content template is registered.
    pub fn template_name(&self) -> String {
        format!("sections/{}.html", self.id)
    }
}

pub const SECTIONS: &[Section] = &[
    Section {
        id: "overview",
        title: "Brand Overview",
        source: templates::OVERVIEW,
    },
    Section {
        id: "logo",
        title: "Logo Guidelines",
        source: templates::LOGO,
    },
    Section {
        id: "colors",
        title: "Color Palette",
        source: templates::COLORS,
    },
    Section {
        id: "typography",
        title: "Typography",
        source: templates::TYPOGRAPHY,
    },
    Section {
        id: "platforms",
        title: "Platform Guidelines",
        source: templates::PLATFORMS,
    },
    Section {
        id: "web",
        title: "Web Guidelines",
        source: templates::WEB,
    },
    Section {
        id: "mobile",
        title: "Mobile Guidelines",
        source: templates::MOBILE,
    },
    Section {
        id: "visionpro",
        title: "Vision Pro",
        source: templates::VISIONPRO,
    },
    Section {
        id: "applewatch",
        title: "Apple Watch",
        source: templates::APPLEWATCH,
    },
    Section {
        id: "robots",
        title: "Robots & AI",
        source: templates::ROBOTS,
    },
    Section {
        id: "api",
        title: "API Identity",
        source: templates::API,
    },
    Section {
        id: "seo",
        title: "SEO Guidelines",
        source: templates::SEO,
    },
    Section {
        id: "buildings",
        title: "Physical Spaces",
        source: templates::BUILDINGS,
    },
];
