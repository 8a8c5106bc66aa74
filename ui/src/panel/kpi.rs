use dioxus::prelude::*;

use crate::core::KpiCard;

#[component]
pub fn KpiCardView(card: KpiCard) -> Element {
    rsx! {
        article { class: "kpi-card", style: "background:{card.gradient};",
            div { class: "kpi-card__header",
                span { class: "kpi-card__icon", aria_hidden: "true", "{card.icon}" }
                strong { class: "kpi-card__title", "{card.title}" }
            }
            h3 { class: "kpi-card__value", "{card.display}" }
        }
    }
}
