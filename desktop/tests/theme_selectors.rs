#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (especially the
  tour cards and the category showcase) remain present in the unified shared
  theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing
  a silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the
  shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components (cards, accordions, footer columns, etc).
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page__header",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Hero
    ".hero {",
    ".hero__inner",
    // Category showcase
    ".category-grid__cards",
    ".category-card__media",
    ".category-card__count",
    // Tour cards
    ".tour-card {",
    ".tour-card__tag--rated",
    ".tour-card__tag--sale",
    ".tour-card__tag--offer",
    ".tour-card__favorite--active",
    ".tour-card__toast",
    // FAQ accordion
    ".faq__item--open",
    ".faq__answer",
    // Footer
    ".footer__inner",
    ".footer__bottom",
];

#[test]
fn all_required_selectors_present() {
    let mut missing = Vec::new();

    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }

    assert!(
        missing.is_empty(),
        "Shared theme is missing required selector(s):\n  {}",
        missing.join("\n  ")
    );
}
