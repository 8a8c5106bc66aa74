use dioxus::prelude::*;

use crate::core::{theme, PanelKind, PanelState, Theme};
use crate::panel::{panel_title, PanelView};

#[component]
pub fn Dashboard() -> Element {
    // Theme lives in context when a launcher provides it; default to light otherwise.
    let theme_ctx: Option<Signal<Theme>> = try_use_context::<Signal<Theme>>();
    let theme = theme_ctx.map(|t| t()).unwrap_or_default();
    let palette = theme::resolve(theme);

    // Each panel keeps its own dataset across tab switches.
    let billing = use_signal(|| PanelState::sample(PanelKind::Billing));
    let picking = use_signal(|| PanelState::sample(PanelKind::Picking));
    let mut active = use_signal(|| PanelKind::Billing);

    let shown = match active() {
        PanelKind::Billing => billing,
        PanelKind::Picking => picking,
    };
    let shown_id = active().id();

    rsx! {
        section {
            class: "page page-dashboard theme--{theme}",
            style: "background:{palette.background};color:{palette.text};",
            nav { class: "dashboard-tabs", role: "tablist",
                for kind in PanelKind::ALL {
                    button {
                        key: "{kind.id()}",
                        r#type: "button",
                        role: "tab",
                        class: format!(
                            "dashboard-tabs__tab {}",
                            if active() == kind { "dashboard-tabs__tab--active" } else { "" }
                        ),
                        onclick: move |_| active.set(kind),
                        "{panel_title(kind)}"
                    }
                }
            }
            div { key: "{shown_id}", class: "dashboard__content",
                PanelView { state: shown, theme }
            }
        }
    }
}
