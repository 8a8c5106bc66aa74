//! Builds the complete view-model for one panel.
//!
//! [`assemble`] is the single entry point the components call whenever the
//! panel's dataset or the theme changes. It recomputes every summary from
//! scratch; datasets are small (tens to a few thousand rows) and every step is
//! linear, so there is no caching layer.

use serde::Serialize;

use super::aggregate::{dataset_totals, summarize_by_hour, summarize_by_operator};
use super::format::format_count;
use super::ranking::{ranked, top_n, RankingEntry};
use super::record::Dataset;
use super::theme::{self, Palette, Theme};

/// Number of operators shown on the podium cards.
pub const RANKING_SIZE: usize = 3;

const KPI_ICONS: [&str; 3] = ["📦", "🧾", "👤"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    pub title: String,
    pub value: u64,
    /// `value` with thousands grouped (`12.345`).
    pub display: String,
    pub gradient: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelViewModel {
    /// Pieces total, orders total, distinct operators.
    pub kpis: [KpiCard; 3],
    /// Horizontal bars, in ranking order.
    pub pieces_by_operator: Vec<SeriesPoint>,
    /// Vertical bars, in ranking order.
    pub orders_by_operator: Vec<SeriesPoint>,
    /// Line chart, ascending hour.
    pub pieces_by_hour: Vec<SeriesPoint>,
    pub ranking: Vec<RankingEntry>,
    pub palette: Palette,
}

pub fn assemble(dataset: &Dataset, theme: Theme, titles: [String; 3]) -> PanelViewModel {
    let palette = theme::resolve(theme);
    let totals = dataset_totals(dataset);
    let operators = summarize_by_operator(dataset);
    let hours = summarize_by_hour(dataset);

    let by_rank = ranked(&operators);
    let pieces_by_operator = by_rank
        .iter()
        .map(|summary| SeriesPoint {
            label: summary.operator.clone(),
            value: summary.total_pieces,
        })
        .collect();
    let orders_by_operator = by_rank
        .iter()
        .map(|summary| SeriesPoint {
            label: summary.operator.clone(),
            value: summary.total_orders,
        })
        .collect();
    let pieces_by_hour = hours
        .iter()
        .map(|summary| SeriesPoint {
            label: summary.label(),
            value: summary.total_pieces,
        })
        .collect();

    let values = [
        totals.total_pieces,
        totals.total_orders,
        totals.distinct_operator_count as u64,
    ];
    let [pieces_title, orders_title, operators_title] = titles;
    let kpis = [
        kpi_card(pieces_title, values[0], palette.kpi_gradients[0], KPI_ICONS[0]),
        kpi_card(orders_title, values[1], palette.kpi_gradients[1], KPI_ICONS[1]),
        kpi_card(operators_title, values[2], palette.kpi_gradients[2], KPI_ICONS[2]),
    ];

    tracing::debug!(
        records = dataset.len(),
        operators = operators.len(),
        hours = hours.len(),
        theme = %theme,
        "panel view-model assembled"
    );

    PanelViewModel {
        kpis,
        pieces_by_operator,
        orders_by_operator,
        pieces_by_hour,
        ranking: top_n(&operators, RANKING_SIZE),
        palette,
    }
}

fn kpi_card(title: String, value: u64, gradient: &'static str, icon: &'static str) -> KpiCard {
    KpiCard {
        title,
        value,
        display: format_count(value),
        gradient,
        icon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Record;
    use crate::core::source::{RecordSource, SampleSource};

    fn titles() -> [String; 3] {
        [
            "Peças Faturadas".to_string(),
            "Pedidos Faturados".to_string(),
            "Operadores de Faturamento".to_string(),
        ]
    }

    fn scenario() -> Dataset {
        [
            Record::new("7h", "A", 10, 1),
            Record::new("7h", "B", 30, 2),
            Record::new("8h", "A", 5, 1),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn kpis_carry_totals_titles_and_gradients() {
        let vm = assemble(&scenario(), Theme::Light, titles());
        let values: Vec<_> = vm.kpis.iter().map(|k| k.value).collect();
        assert_eq!(values, [45, 4, 2]);
        assert_eq!(vm.kpis[0].title, "Peças Faturadas");
        assert_eq!(vm.kpis[2].icon, "👤");
        assert_eq!(vm.kpis[1].gradient, theme::resolve(Theme::Light).kpi_gradients[1]);
    }

    #[test]
    fn series_follow_ranking_and_hour_order() {
        let vm = assemble(&scenario(), Theme::Dark, titles());
        let bars: Vec<_> = vm
            .pieces_by_operator
            .iter()
            .map(|p| (p.label.as_str(), p.value))
            .collect();
        assert_eq!(bars, [("B", 30), ("A", 15)]);

        let orders: Vec<_> = vm.orders_by_operator.iter().map(|p| p.value).collect();
        assert_eq!(orders, [2, 2]);

        let hours: Vec<_> = vm
            .pieces_by_hour
            .iter()
            .map(|p| (p.label.as_str(), p.value))
            .collect();
        assert_eq!(hours, [("7h", 40), ("8h", 5)]);

        assert_eq!(vm.ranking.len(), 2);
        assert_eq!(vm.ranking[0].operator, "B");
        assert_eq!(vm.palette.chart_template, "chart--dark");
    }

    #[test]
    fn podium_is_capped_at_three() {
        let dataset = SampleSource::seeded(3).load().unwrap();
        let vm = assemble(&dataset, Theme::Light, titles());
        assert_eq!(vm.ranking.len(), RANKING_SIZE);
        assert_eq!(vm.pieces_by_operator.len(), 10);
        assert_eq!(vm.pieces_by_hour.len(), 12);
    }

    #[test]
    fn assembling_twice_is_byte_identical() {
        let dataset = scenario();
        let first = serde_json::to_vec(&assemble(&dataset, Theme::Dark, titles())).unwrap();
        let second = serde_json::to_vec(&assemble(&dataset, Theme::Dark, titles())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn theme_change_only_touches_palette_fields() {
        let light = assemble(&scenario(), Theme::Light, titles());
        let dark = assemble(&scenario(), Theme::Dark, titles());
        assert_eq!(light.pieces_by_operator, dark.pieces_by_operator);
        assert_eq!(light.ranking, dark.ranking);
        assert_ne!(light.palette, dark.palette);
        assert_ne!(light.kpis[0].gradient, dark.kpis[0].gradient);
    }
}
