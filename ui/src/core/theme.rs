//! Theme selector and its visual-encoding palette.
//!
//! Palette values are opaque tokens for the rendering layer: CSS colors,
//! CSS gradients and the class name of the chart template.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ContractError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph for the header toggle button (shows the theme it switches to).
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "🌞",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ContractError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ContractError::InvalidTheme(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    /// One gradient per KPI card, in card order.
    pub kpi_gradients: [&'static str; 3],
    pub chart_template: &'static str,
}

const LIGHT: Palette = Palette {
    background: "#f7f8fb",
    card: "#ffffff",
    text: "#101315",
    kpi_gradients: [
        "linear-gradient(135deg,#22d3ee,#38bdf8)",
        "linear-gradient(135deg,#34d399,#10b981)",
        "linear-gradient(135deg,#f59e0b,#f97316)",
    ],
    chart_template: "chart--light",
};

const DARK: Palette = Palette {
    background: "#0e1117",
    card: "#151a22",
    text: "#e8e8e8",
    kpi_gradients: [
        "linear-gradient(135deg,#00e3ae,#08b8a2)",
        "linear-gradient(135deg,#4aa8ff,#7b5cff)",
        "linear-gradient(135deg,#ffad66,#ff7a59)",
    ],
    chart_template: "chart--dark",
};

pub fn resolve(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}

/// Resolve an external theme token. Unknown tokens are an error, never a
/// silent fallback to the light palette.
pub fn resolve_token(token: &str) -> Result<Palette, ContractError> {
    token.parse::<Theme>().map(resolve)
}
