#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Every class the dashboard components emit must stay in the shared stylesheet
(`ui/assets/theme/main.css`). A substring check is enough to catch a rename that
would otherwise leave the packaged desktop build unstyled.

When a component class changes, update the markup and REQUIRED_SELECTORS together.
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
    ".visually-hidden",
    // Header
    ".navbar__brand",
    ".navbar__locale",
    ".navbar__theme-toggle",
    // Tabs
    ".dashboard-tabs__tab",
    ".dashboard-tabs__tab--active",
    ".dashboard__content",
    // Panel grid & upload
    ".panel-upload__button",
    ".panel-upload__input",
    ".panel__status",
    ".panel__row--kpis",
    ".panel__row--bars",
    ".panel__row--trend",
    ".panel__cell",
    // KPI cards
    ".kpi-card",
    ".kpi-card__icon",
    ".kpi-card__value",
    // Charts
    ".chart__title",
    ".chart__hbar-row",
    ".chart__vbar-column",
    ".chart__svg",
    ".chart__line",
    ".chart__marker",
    ".chart__empty",
    ".chart--light",
    ".chart--dark",
    // Podium
    ".podium__card",
    ".podium__operator",
    ".podium__pieces",
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
        non_ws_len > 3_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn dark_theme_overrides_follow_light_rules() {
    let light = THEME_CSS.find(".chart--light").unwrap_or(usize::MAX);
    let dark = THEME_CSS.find(".chart--dark").unwrap_or(0);
    assert!(light < dark, "dark chart template must override the light one");
}
