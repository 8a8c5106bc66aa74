//! Raw throughput observations and the immutable dataset that holds them.

use serde::Serialize;

use super::hour;

/// One row of throughput: an operator's pieces and orders in one hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub hour_label: String,
    /// Derived from `hour_label`; `None` when the label could not be parsed.
    pub hour_num: Option<i64>,
    pub operator: String,
    pub pieces: u64,
    pub orders: u64,
}

impl Record {
    pub fn new(
        hour_label: impl Into<String>,
        operator: impl Into<String>,
        pieces: u64,
        orders: u64,
    ) -> Self {
        let hour_label = hour_label.into();
        let hour_num = hour::parse(&hour_label);
        Self {
            hour_label,
            hour_num,
            operator: operator.into(),
            pieces,
            orders,
        }
    }
}

/// Where a dataset came from. Only used for status display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub enum DatasetOrigin {
    #[default]
    Sample,
    Imported {
        file_name: String,
        /// Rows dropped because they had no operator.
        skipped_rows: usize,
    },
}

/// An immutable batch of records owned by one panel.
///
/// Datasets are replaced wholesale on import; there is no API to mutate one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Dataset {
    records: Vec<Record>,
    origin: DatasetOrigin,
}

impl Dataset {
    pub fn new(records: Vec<Record>, origin: DatasetOrigin) -> Self {
        Self { records, origin }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn origin(&self) -> &DatasetOrigin {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect(), DatasetOrigin::Sample)
    }
}
