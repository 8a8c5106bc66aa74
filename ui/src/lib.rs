//! Shared UI crate for the operations dashboard.
//!
//! `core` holds the framework-free aggregation pipeline; `panel` and `views`
//! render it with Dioxus. Platform launchers (desktop, web) only provide the
//! theme and language context and mount [`views::Dashboard`].

pub mod core;
pub mod i18n;
pub mod panel;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

/// Shared stylesheet, embedded so packaged builds need no asset directory.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
