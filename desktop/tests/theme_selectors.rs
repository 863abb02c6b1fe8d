#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (dashboard cards, themes
  and toasts) remain present in the unified shared theme:
  ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components (charts, matrix, toasts, etc).
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
    ".app-root",
    ".app-main",
    // Themes (class names produced by `Theme::css_class`)
    ".light-theme",
    ".dark-theme",
    ".ocean-theme",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    ".button--danger",
    ".spinner",
    // Cards
    ".results__header",
    ".results__panels",
    ".results-card",
    ".results-card__header",
    ".results-card__meta",
    ".results-card__placeholder",
    // Upload
    ".upload__zone",
    ".upload__zone--active",
    ".upload__actions",
    // Stats & charts
    ".stats-grid",
    ".stat-card",
    ".stat-card--normal",
    ".stat-card--ddos",
    ".chart-card__canvas",
    // Confusion matrix
    ".matrix",
    ".matrix__cell--hit",
    ".matrix__cell--miss",
    ".matrix__metrics",
    // Recommendations
    ".recommendations__list",
    ".recommendations__list--collapsed",
    ".recommendation--action",
    // Export panel
    ".results-export__actions",
    // Settings
    ".theme-option",
    ".theme-option--active",
    // Toasts (modifiers produced by `ToastKind::css_modifier`)
    ".toast",
    ".toast--show",
    ".toast--info",
    ".toast--success",
    ".toast--warning",
    ".toast--error",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn every_theme_overrides_core_colors() {
    for theme in [".dark-theme", ".ocean-theme"] {
        let start = THEME_CSS
            .find(&format!("{theme} {{"))
            .unwrap_or_else(|| panic!("{theme} block missing"));
        let block = &THEME_CSS[start..];
        let block = &block[..block.find('}').unwrap_or(block.len())];
        for var in ["--color-bg:", "--color-surface:", "--color-text:", "--color-border:"] {
            assert!(block.contains(var), "{theme} does not set {var}");
        }
    }
}
