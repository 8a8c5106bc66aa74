//! Framework-free aggregation pipeline: records in, panel view-models out.
//!
//! Everything under `core` is pure and synchronous so it can be exercised
//! without a running Dioxus runtime. The components in `crate::panel` call
//! [`assemble::assemble`] on every dataset or theme change.

pub mod aggregate;
pub mod assemble;
pub mod error;
pub mod format;
pub mod hour;
pub mod panel;
pub mod ranking;
pub mod record;
pub mod source;
pub mod theme;

pub use aggregate::{
    dataset_totals, summarize_by_hour, summarize_by_operator, DatasetTotals, HourSummary,
    OperatorSummary,
};
pub use assemble::{assemble, KpiCard, PanelViewModel, SeriesPoint};
pub use error::{ContractError, ImportError};
pub use panel::{ImportStatus, PanelKind, PanelState};
pub use ranking::{top_by_pieces, RankingEntry};
pub use record::{Dataset, DatasetOrigin, Record};
pub use source::{RecordSource, SampleConfig, SampleSource, WorkbookLayout, WorkbookSource};
pub use theme::{Palette, Theme};
