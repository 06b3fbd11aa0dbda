//! Skeleton templates for the brand manual.
//!
//! Templates see the brand values under `brand`, `primary_color`,
//! `secondary_color`, `primary_font`, `secondary_font`, `generated_on`,
//! `logo` (pre-rendered markup) and `font_url`.

pub(crate) const STYLESHEET_TEMPLATE: &str = r##"@import url('{{ font_url }}');

:root {
    --primary-color: {{ primary_color }};
    --secondary-color: {{ secondary_color }};
{% for tone in neutral_tones %}
    --{{ tone.var }}: {{ tone.hex }};
{% endfor %}
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: '{{ primary_font }}', sans-serif;
    color: var(--text-color);
    line-height: 1.6;
    max-width: 1200px;
    margin: 0 auto;
    padding: 20px;
}

h1, h2, h3, h4, h5, h6 {
    font-family: '{{ primary_font }}', sans-serif;
    margin-bottom: 0.8em;
    color: var(--primary-color);
}

h1 {
    font-size: 2.5rem;
    border-bottom: 2px solid var(--primary-color);
    padding-bottom: 10px;
    margin-bottom: 20px;
}

h2 {
    font-size: 2rem;
    margin-top: 40px;
}

h3 {
    font-size: 1.5rem;
    margin-top: 30px;
}

p, li {
    margin-bottom: 1em;
    font-family: '{{ secondary_font }}', sans-serif;
}

/* Sidebar */
.sidebar {
    position: fixed;
    top: 0;
    left: 0;
    width: 280px;
    height: 100vh;
    background-color: var(--primary-color);
    color: white;
    padding: 20px;
    overflow-y: auto;
}

.sidebar h1, .sidebar h3 {
    color: white;
    border-bottom: none;
}

.sidebar-header {
    margin-bottom: 30px;
    text-align: center;
}

.sidebar-header img {
    max-width: 150px;
    margin-bottom: 10px;
}

.sidebar-nav {
    list-style: none;
}

.sidebar-nav li {
    margin-bottom: 5px;
}

.sidebar-nav a {
    color: white;
    text-decoration: none;
    padding: 8px 10px;
    display: block;
    border-radius: 5px;
    transition: background-color 0.2s;
}

.sidebar-nav a:hover {
    background-color: rgba(255, 255, 255, 0.2);
}

/* Main content */
.main-content {
    margin-left: 280px;
    padding: 20px 40px;
}

.section {
    margin-bottom: 50px;
    padding-bottom: 30px;
    border-bottom: 1px solid var(--medium-gray);
}

/* Colors */
.color-palette {
    display: flex;
    flex-wrap: wrap;
    margin: 20px 0;
    gap: 20px;
}

.color-swatch {
    width: 150px;
    border-radius: 5px;
    overflow: hidden;
    box-shadow: 0 2px 5px rgba(0, 0, 0, 0.1);
}

.color-swatch-display {
    height: 100px;
}

.color-swatch-info {
    padding: 10px;
    background-color: var(--light-gray);
}

/* Typography */
.font-example {
    margin: 20px 0;
    padding: 20px;
    background-color: var(--light-gray);
    border-radius: 5px;
}

/* Platforms */
.platform-section {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 20px;
    margin: 20px 0;
}

.platform-item {
    background-color: var(--light-gray);
    padding: 20px;
    border-radius: 5px;
    box-shadow: 0 2px 5px rgba(0, 0, 0, 0.1);
}

.platform-item h4 {
    margin-top: 0;
    color: var(--primary-color);
}

.code-sample {
    margin: 20px 0;
    padding: 20px;
    background-color: var(--light-gray);
    border-left: 4px solid var(--secondary-color);
    border-radius: 5px;
    overflow-x: auto;
}

/* Logo */
.logo-guidelines {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
    gap: 30px;
    margin: 20px 0;
}

.logo-variation {
    text-align: center;
    padding: 20px;
    background-color: var(--light-gray);
    border-radius: 5px;
}

.logo-variation img {
    max-width: 100%;
    max-height: 150px;
    margin-bottom: 10px;
}

.logo-inverted {
    background-color: var(--primary-color);
    padding: 20px;
    border-radius: 5px;
}

.logo-inverted h1 {
    color: white;
    border-bottom: none;
}

.logo-monochrome {
    padding: 20px;
    border: 2px dashed var(--dark-gray);
    border-radius: 5px;
    color: var(--dark-gray);
}

.do-dont {
    display: flex;
    margin: 30px 0;
    gap: 20px;
}

.do, .dont {
    flex: 1;
    padding: 20px;
    border-radius: 5px;
}

.do {
    background-color: rgba(46, 204, 113, 0.1);
    border: 1px solid #2ecc71;
}

.dont {
    background-color: rgba(231, 76, 60, 0.1);
    border: 1px solid #e74c3c;
}

.do h4, .dont h4 {
    text-align: center;
    margin-top: 0;
}

.footer {
    margin-top: 50px;
    padding-top: 20px;
    border-top: 1px solid var(--medium-gray);
    text-align: center;
    font-size: 0.9rem;
    color: var(--dark-gray);
}

/* Responsive */
@media (max-width: 1024px) {
    .sidebar {
        width: 220px;
    }

    .main-content {
        margin-left: 220px;
    }
}

@media (max-width: 768px) {
    .sidebar {
        display: none;
    }

    .main-content {
        margin-left: 0;
    }
}
"##;

pub(crate) const DOCUMENT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ brand }} Brand Manual</title>
    <style>
{{ stylesheet }}
    </style>
</head>
<body>
{{ body }}
</body>
</html>
"##;

pub(crate) const BODY_TEMPLATE: &str = r##"<div class="sidebar">
    <div class="sidebar-header">
        {{ logo }}
        <h3>{{ brand }}</h3>
    </div>
    <ul class="sidebar-nav">
{% for section in sections %}
        <li><a href="#{{ section.id }}">{{ section.title }}</a></li>
{% endfor %}
    </ul>
</div>

<div class="main-content">
{% for section in sections %}
    <div class="section" id="{{ section.id }}">
{% include "sections/" ~ section.id ~ ".html" %}
    </div>

{% endfor %}
    <div class="footer">
        <p>{{ brand }} Brand Manual. Last updated {{ generated_on }}.</p>
    </div>
</div>
"##;

pub(crate) const OVERVIEW: &str = r##"        <h1>{{ brand }} Brand Manual</h1>
        <p>Welcome to the official brand guidelines for {{ brand }}. This guide ensures consistent representation of our brand across all platforms and touchpoints. Following these guidelines helps maintain brand integrity and recognition.</p>
        <p><strong>Last Updated:</strong> {{ generated_on }}</p>
"##;

pub(crate) const LOGO: &str = r##"        <h2>Logo Guidelines</h2>
        <p>Our logo is the primary visual identifier of our brand. It should be used consistently across all platforms and materials.</p>

        <h3>Logo Variations</h3>
        <div class="logo-guidelines">
            <div class="logo-variation">
                <h4>Primary Logo</h4>
                {{ logo }}
                <p>Use whenever possible on light backgrounds</p>
            </div>
            <div class="logo-variation">
                <h4>Inverted Logo</h4>
                <div class="logo-inverted" style="background-color: {{ primary_color }};">
                    {{ logo }}
                </div>
                <p>Use on dark backgrounds</p>
            </div>
            <div class="logo-variation">
                <h4>Monochrome Logo</h4>
                <div class="logo-monochrome">Monochrome version</div>
                <p>Use when color printing is not available</p>
            </div>
        </div>

        <h3>Clear Space</h3>
        <p>Always maintain a clear space around the logo to ensure visibility and impact. The minimum clear space is equal to the height of the logo's x-height.</p>

        <h3>Minimum Size</h3>
        <p>To maintain legibility, the logo should never be reproduced smaller than:</p>
        <ul>
            <li>Print: 0.75 inches (19mm) wide</li>
            <li>Digital: 80 pixels wide</li>
        </ul>

        <h3>Logo Misuse</h3>
        <div class="do-dont">
            <div class="do">
                <h4>Do</h4>
                <p>Use approved logo files</p>
                <p>Maintain proportions</p>
                <p>Ensure adequate contrast with backgrounds</p>
            </div>
            <div class="dont">
                <h4>Don't</h4>
                <p>Stretch or distort the logo</p>
                <p>Change the logo colors</p>
                <p>Add effects like shadows or gradients</p>
                <p>Place logo on busy backgrounds</p>
            </div>
        </div>
"##;

pub(crate) const COLORS: &str = r##"{% macro swatch(item) %}
            <div class="color-swatch">
                <div class="color-swatch-display" style="background-color: {{ item.hex }};"></div>
                <div class="color-swatch-info">
                    <p><strong>{{ item.label }}</strong></p>
                    <p>HEX: {{ item.hex }}</p>
                </div>
            </div>
{% endmacro %}
        <h2>Color Palette</h2>
        <p>Our color palette is designed to communicate our brand personality across all touchpoints.</p>

        <h3>Primary Colors</h3>
        <div class="color-palette">
{% for item in brand_swatches %}
{{ swatch(item) }}
{% endfor %}
        </div>

        <h3>Complementary Colors</h3>
        <div class="color-palette">
{% for item in neutral_swatches %}
{{ swatch(item) }}
{% endfor %}
        </div>

        <h3>Color Usage</h3>
        <p>Primary colors should be used for key elements such as headers, calls-to-action, and main interface elements. Secondary colors support the primary palette and can be used for accents and supporting elements.</p>
"##;

pub(crate) const TYPOGRAPHY: &str = r##"        <h2>Typography</h2>
        <p>Our typefaces are {{ primary_font }} for headings and {{ secondary_font }} for body text. These fonts reflect our brand personality and enhance readability across platforms.</p>

        <h3>Primary Font: {{ primary_font }}</h3>
        <div class="font-example">
{% for level in range(1, 7) %}
            <h{{ level }} style="font-family: '{{ primary_font }}', sans-serif;">Heading {{ level }}</h{{ level }}>
{% endfor %}
        </div>

        <h3>Secondary Font: {{ secondary_font }}</h3>
        <div class="font-example">
            <p style="font-family: '{{ secondary_font }}', sans-serif; font-size: 16px;">Body text regular (16px)</p>
            <p style="font-family: '{{ secondary_font }}', sans-serif; font-size: 14px;">Body text small (14px)</p>
            <p style="font-family: '{{ secondary_font }}', sans-serif; font-size: 12px;">Caption text (12px)</p>
            <p style="font-family: '{{ secondary_font }}', sans-serif; font-weight: bold;">Bold text for emphasis</p>
            <p style="font-family: '{{ secondary_font }}', sans-serif; font-style: italic;">Italic text for emphasis</p>
        </div>

        <h3>Font Pairing &amp; Hierarchy</h3>
        <p>Use {{ primary_font }} for headers and titles to create visual hierarchy. Use {{ secondary_font }} for body copy, descriptions, and interface text. Maintain consistent hierarchy in all communications.</p>
"##;

pub(crate) const PLATFORMS: &str = r##"        <h2>Platform Guidelines</h2>
        <p>{{ brand }} appears on many surfaces. Each platform has its own constraints, but the palette and type pairing stay the same everywhere.</p>
        <div class="platform-section">
            <div class="platform-item">
                <h4>Desktop</h4>
                <p>Lead with {{ primary_font }} headings and keep generous whitespace around the logo.</p>
            </div>
            <div class="platform-item">
                <h4>Tablet</h4>
                <p>Scale headings down one level and keep body text in {{ secondary_font }} at 16px or larger.</p>
            </div>
            <div class="platform-item">
                <h4>Print</h4>
                <p>Convert the brand colors to their closest print equivalents and verify them against a printed proof.</p>
            </div>
            <div class="platform-item">
                <h4>Social Media</h4>
                <p>Use the primary color for profile backgrounds and the secondary color for highlights.</p>
            </div>
        </div>
"##;

pub(crate) const WEB: &str = r##"        <h2>Web Guidelines</h2>
        <p>Web properties should declare the brand tokens once and reference them everywhere.</p>
        <pre class="code-sample"><code>:root {
    --primary-color: {{ primary_color }};
    --secondary-color: {{ secondary_color }};
    --heading-font: '{{ primary_font }}', sans-serif;
    --body-font: '{{ secondary_font }}', sans-serif;
}</code></pre>
        <h3>Buttons and Links</h3>
        <p>Primary calls-to-action use the primary color with white text. Links and secondary actions use the secondary color.</p>
        <h3>Favicon</h3>
        <p>Provide the {{ brand }} mark at 16, 32 and 180 pixels so browsers and home screens render it sharply.</p>
"##;

pub(crate) const MOBILE: &str = r##"        <h2>Mobile Guidelines</h2>
        <p>The {{ brand }} apps follow platform conventions first and express the brand through color and type.</p>
        <div class="platform-section">
            <div class="platform-item">
                <h4>App Icon</h4>
                <p>Place the mark on a solid primary color background. Do not add text to the icon.</p>
            </div>
            <div class="platform-item">
                <h4>Touch Targets</h4>
                <p>Interactive elements must be at least 44 by 44 points.</p>
            </div>
            <div class="platform-item">
                <h4>Type Scale</h4>
                <p>Use {{ primary_font }} for screen titles and {{ secondary_font }} for content. Respect the system text size setting.</p>
            </div>
        </div>
"##;

pub(crate) const VISIONPRO: &str = r##"        <h2>Vision Pro</h2>
        <p>Spatial experiences place {{ brand }} content in the user's surroundings. Keep windows legible against any background.</p>
        <ul>
            <li>Use glass materials and reserve the primary color for focused and selected states.</li>
            <li>Keep the logo flat. Do not extrude or add depth to it.</li>
            <li>Set text in {{ secondary_font }} at medium weight or heavier for readability at a distance.</li>
        </ul>
"##;

pub(crate) const APPLEWATCH: &str = r##"        <h2>Apple Watch</h2>
        <p>On the smallest screen, the brand is carried by color alone.</p>
        <ul>
            <li>Use the primary color as the app tint color.</li>
            <li>Complications show the {{ brand }} mark only, never the full wordmark.</li>
            <li>Prefer the system font on watch faces. Use {{ primary_font }} only for large numerals.</li>
        </ul>
"##;

pub(crate) const ROBOTS: &str = r##"        <h2>Robots &amp; AI</h2>
        <p>Automated agents that speak for {{ brand }} must be recognizable and honest about what they are.</p>
        <ul>
            <li>Introduce the assistant as a {{ brand }} assistant in its first message.</li>
            <li>Use the secondary color for the assistant's avatar and message accents.</li>
            <li>Keep the tone friendly, concise and consistent with written brand copy.</li>
        </ul>
"##;

pub(crate) const API: &str = r##"        <h2>API Identity</h2>
        <p>Developer-facing surfaces are part of the brand too.</p>
        <ul>
            <li>Name SDKs and packages with the lower-case brand name followed by the platform.</li>
            <li>Developer portal pages use {{ primary_font }} headings and a monospace font for code.</li>
            <li>Error messages identify {{ brand }} as the source and link to the documentation.</li>
        </ul>
"##;

pub(crate) const SEO: &str = r##"        <h2>SEO Guidelines</h2>
        <p>Consistent naming helps people find {{ brand }}.</p>
        <ul>
            <li>Page titles end with " | {{ brand }}".</li>
            <li>Meta descriptions stay under 160 characters and mention the brand once.</li>
            <li>Logo images carry the alt text "{{ brand }} Logo".</li>
            <li>Set the theme-color meta tag to {{ primary_color }}.</li>
        </ul>
"##;

pub(crate) const BUILDINGS: &str = r##"        <h2>Physical Spaces</h2>
        <p>Offices, stores and event spaces extend the {{ brand }} identity into the physical world.</p>
        <div class="platform-section">
            <div class="platform-item">
                <h4>Signage</h4>
                <p>Exterior signs use the logo on a light background with clear space on every side.</p>
            </div>
            <div class="platform-item">
                <h4>Interiors</h4>
                <p>Use the primary color for one accent wall per room and neutrals elsewhere.</p>
            </div>
            <div class="platform-item">
                <h4>Wayfinding</h4>
                <p>Set directional signs in {{ primary_font }} with high-contrast colors.</p>
            </div>
        </div>
"##;
