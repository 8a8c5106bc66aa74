//! Dioxus components rendering one dashboard panel.

mod charts;
pub use charts::{HorizontalBarChart, LineChart, VerticalBarChart};

mod kpi;
pub use kpi::KpiCardView;

mod podium;
pub use podium::Podium;

mod upload;
pub use upload::UploadButton;

mod labels;
pub(crate) use labels::*;

use dioxus::prelude::*;

use crate::core::{assemble, PanelState, Theme};
use crate::t;

#[component]
pub fn PanelView(state: Signal<PanelState>, theme: Theme) -> Element {
    let current = state.read();
    let view = assemble(&current.dataset, theme, kpi_titles(current.kind));
    let status = status_message(&current);
    let panel_id = current.kind.id();
    let card_style = format!("background:{};", view.palette.card);
    drop(current);

    let [kpi_pieces, kpi_orders, kpi_operators] = view.kpis;

    rsx! {
        div { class: "panel panel--{panel_id}",
            UploadButton { state }
            p { class: "panel__status", "{status}" }

            div { class: "panel__row panel__row--kpis",
                KpiCardView { card: kpi_pieces }
                KpiCardView { card: kpi_orders }
                KpiCardView { card: kpi_operators }
            }

            div { class: "panel__row panel__row--bars",
                div { class: "panel__cell panel__cell--wide", style: "{card_style}",
                    HorizontalBarChart {
                        title: t!("chart-pieces-by-operator"),
                        points: view.pieces_by_operator,
                        template: view.palette.chart_template,
                    }
                }
                div { class: "panel__cell", style: "{card_style}",
                    VerticalBarChart {
                        title: t!("chart-orders-by-operator"),
                        points: view.orders_by_operator,
                        template: view.palette.chart_template,
                    }
                }
            }

            div { class: "panel__row panel__row--trend",
                div { class: "panel__cell panel__cell--wide", style: "{card_style}",
                    LineChart {
                        title: t!("chart-pieces-by-hour"),
                        points: view.pieces_by_hour,
                        template: view.palette.chart_template,
                    }
                }
                div { class: "panel__cell",
                    Podium { ranking: view.ranking, card_color: view.palette.card }
                }
            }
        }
    }
}
