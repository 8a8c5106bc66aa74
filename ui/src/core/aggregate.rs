//! Grouping and summation over a dataset.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::record::Dataset;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorSummary {
    pub operator: String,
    pub total_pieces: u64,
    pub total_orders: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourSummary {
    pub hour_num: i64,
    pub total_pieces: u64,
    pub total_orders: u64,
}

impl HourSummary {
    /// Axis label in the same style as the source sheets (`"7h"`).
    pub fn label(&self) -> String {
        super::format::format_hour(self.hour_num)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DatasetTotals {
    pub total_pieces: u64,
    pub total_orders: u64,
    pub distinct_operator_count: usize,
}

#[derive(Default, Clone, Copy)]
struct Totals {
    pieces: u64,
    orders: u64,
}

impl Totals {
    fn add(&mut self, pieces: u64, orders: u64) {
        self.pieces = self.pieces.saturating_add(pieces);
        self.orders = self.orders.saturating_add(orders);
    }
}

/// One summary per distinct operator, in operator-name order.
pub fn summarize_by_operator(dataset: &Dataset) -> Vec<OperatorSummary> {
    let mut by_operator: BTreeMap<&str, Totals> = BTreeMap::new();
    for record in dataset.records() {
        by_operator
            .entry(record.operator.as_str())
            .or_default()
            .add(record.pieces, record.orders);
    }

    by_operator
        .into_iter()
        .map(|(operator, totals)| OperatorSummary {
            operator: operator.to_string(),
            total_pieces: totals.pieces,
            total_orders: totals.orders,
        })
        .collect()
}

/// One summary per distinct parsed hour, ascending. Records whose hour label
/// did not parse are left out of this summary only.
pub fn summarize_by_hour(dataset: &Dataset) -> Vec<HourSummary> {
    let mut by_hour: BTreeMap<i64, Totals> = BTreeMap::new();
    for record in dataset.records() {
        if let Some(hour) = record.hour_num {
            by_hour
                .entry(hour)
                .or_default()
                .add(record.pieces, record.orders);
        }
    }

    by_hour
        .into_iter()
        .map(|(hour_num, totals)| HourSummary {
            hour_num,
            total_pieces: totals.pieces,
            total_orders: totals.orders,
        })
        .collect()
}

pub fn dataset_totals(dataset: &Dataset) -> DatasetTotals {
    let mut totals = Totals::default();
    let mut operators = BTreeSet::new();
    for record in dataset.records() {
        totals.add(record.pieces, record.orders);
        operators.insert(record.operator.as_str());
    }

    DatasetTotals {
        total_pieces: totals.pieces,
        total_orders: totals.orders,
        distinct_operator_count: operators.len(),
    }
}
