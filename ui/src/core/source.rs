//! Record sources: generated sample data and uploaded workbooks.

use std::io::Cursor;
use std::ops::{Range, RangeInclusive};

use base64::Engine;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::ImportError;
use super::record::{Dataset, DatasetOrigin, Record};

/// Anything that can produce a complete dataset for a panel.
pub trait RecordSource {
    fn load(&self) -> Result<Dataset, ImportError>;
}

/// Shape of the generated sample data shown before any import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleConfig {
    pub operators: usize,
    pub hours: RangeInclusive<i64>,
    pub pieces: Range<u64>,
    pub orders: Range<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            operators: 10,
            hours: 7..=18,
            pieces: 20..200,
            orders: 5..50,
        }
    }
}

/// Synthetic throughput: one row per (operator, hour) pair.
#[derive(Debug, Clone, Default)]
pub struct SampleSource {
    pub config: SampleConfig,
    /// Fixed seed for reproducible output; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl SampleSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            config: SampleConfig::default(),
            seed: Some(seed),
        }
    }

    /// Generate a dataset directly; sampling cannot fail.
    pub fn dataset(&self) -> Dataset {
        match self.seed {
            Some(seed) => self.generate(&mut StdRng::seed_from_u64(seed)),
            None => self.generate(&mut StdRng::from_entropy()),
        }
    }

    fn generate<R: Rng>(&self, rng: &mut R) -> Dataset {
        let config = &self.config;
        let mut records = Vec::with_capacity(config.operators * config.hours.clone().count());
        for op in 1..=config.operators {
            let operator = format!("Operador {op}");
            for hour in config.hours.clone() {
                records.push(Record::new(
                    format!("{hour}h"),
                    operator.clone(),
                    rng.gen_range(config.pieces.clone()),
                    rng.gen_range(config.orders.clone()),
                ));
            }
        }
        Dataset::new(records, DatasetOrigin::Sample)
    }
}

impl RecordSource for SampleSource {
    fn load(&self) -> Result<Dataset, ImportError> {
        Ok(self.dataset())
    }
}

/// Sheet and column names an uploaded workbook must provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookLayout {
    pub sheet: String,
    pub hour_column: String,
    pub operator_column: String,
    pub pieces_column: String,
    pub orders_column: String,
}

impl Default for WorkbookLayout {
    fn default() -> Self {
        Self {
            sheet: "QRY1000".into(),
            hour_column: "Hora".into(),
            operator_column: "Operador".into(),
            pieces_column: "Qtde. Peças".into(),
            orders_column: "Qtde. Pedidos".into(),
        }
    }
}

/// An uploaded spreadsheet (xlsx, xls or ods) held in memory.
#[derive(Debug, Clone)]
pub struct WorkbookSource {
    pub file_name: String,
    bytes: Vec<u8>,
    pub layout: WorkbookLayout,
}

struct ColumnIndexes {
    hour: usize,
    operator: usize,
    pieces: usize,
    orders: usize,
}

impl WorkbookSource {
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            layout: WorkbookLayout::default(),
        }
    }

    /// Accepts the `data:<mime>;base64,<payload>` form browsers hand out for uploads.
    pub fn from_data_url(file_name: impl Into<String>, data_url: &str) -> Result<Self, ImportError> {
        let (header, payload) = data_url.split_once(',').ok_or_else(|| {
            ImportError::MalformedPayload("upload is not a data URL".to_string())
        })?;
        if !header.ends_with(";base64") {
            return Err(ImportError::MalformedPayload(
                "upload is not base64 encoded".to_string(),
            ));
        }
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|err| ImportError::MalformedPayload(err.to_string()))?;
        Ok(Self::from_bytes(file_name, bytes))
    }

    pub fn with_layout(mut self, layout: WorkbookLayout) -> Self {
        self.layout = layout;
        self
    }

    fn resolve_columns(&self, header: &[Data]) -> Result<ColumnIndexes, ImportError> {
        let names: Vec<String> = header
            .iter()
            .map(|cell| cell_text(cell).trim().to_string())
            .collect();
        let find = |wanted: &str| {
            names
                .iter()
                .position(|name| name == wanted)
                .ok_or_else(|| ImportError::MissingColumn(wanted.to_string()))
        };

        Ok(ColumnIndexes {
            hour: find(&self.layout.hour_column)?,
            operator: find(&self.layout.operator_column)?,
            pieces: find(&self.layout.pieces_column)?,
            orders: find(&self.layout.orders_column)?,
        })
    }
}

impl RecordSource for WorkbookSource {
    fn load(&self) -> Result<Dataset, ImportError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(self.bytes.as_slice()))
            .map_err(|err| ImportError::MalformedPayload(err.to_string()))?;

        let sheet = self.layout.sheet.as_str();
        if !workbook.sheet_names().iter().any(|name| name == sheet) {
            return Err(ImportError::WrongSheet(sheet.to_string()));
        }
        let range = workbook
            .worksheet_range(sheet)
            .map_err(|err| ImportError::MalformedPayload(err.to_string()))?;

        let mut rows = range.rows();
        let header = rows
            .next()
            .ok_or_else(|| ImportError::MissingColumn(self.layout.hour_column.clone()))?;
        let columns = self.resolve_columns(header)?;

        let empty = Data::Empty;
        let mut records = Vec::new();
        let mut skipped_rows = 0usize;
        for (idx, row) in rows.enumerate() {
            let cell = |col: usize| row.get(col).unwrap_or(&empty);
            let operator = cell_text(cell(columns.operator));
            if operator.trim().is_empty() {
                skipped_rows += 1;
                tracing::debug!(row = idx + 2, "skipping workbook row without operator");
                continue;
            }
            records.push(Record::new(
                cell_text(cell(columns.hour)),
                operator,
                cell_count(cell(columns.pieces)),
                cell_count(cell(columns.orders)),
            ));
        }

        let unparsed_hours = records.iter().filter(|r| r.hour_num.is_none()).count();
        tracing::info!(
            file = %self.file_name,
            rows = records.len(),
            skipped_rows,
            unparsed_hours,
            "workbook decoded"
        );

        Ok(Dataset::new(
            records,
            DatasetOrigin::Imported {
                file_name: self.file_name.clone(),
                skipped_rows,
            },
        ))
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.clone(),
        Data::Int(v) => v.to_string(),
        Data::Float(v) if v.fract() == 0.0 && v.is_finite() => format!("{}", *v as i64),
        Data::Float(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTimeIso(v) | Data::DurationIso(v) => v.clone(),
        _ => String::new(),
    }
}

/// Best-effort count: anything that is not a non-negative number reads as 0.
fn cell_count(cell: &Data) -> u64 {
    match cell {
        Data::Int(v) => u64::try_from(*v).unwrap_or(0),
        Data::Float(v) if v.is_finite() && *v >= 0.0 => v.round() as u64,
        Data::String(v) => {
            let trimmed = v.trim();
            trimmed
                .parse::<u64>()
                .ok()
                .or_else(|| {
                    trimmed
                        .parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite() && *f >= 0.0)
                        .map(|f| f.round() as u64)
                })
                .unwrap_or(0)
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn sample_covers_every_operator_hour_pair() {
        let dataset = SampleSource::seeded(7).load().unwrap();
        assert_eq!(dataset.len(), 10 * 12);
        assert_eq!(dataset.origin(), &DatasetOrigin::Sample);

        let operators: BTreeSet<_> = dataset.records().iter().map(|r| r.operator.as_str()).collect();
        assert_eq!(operators.len(), 10);
        assert!(operators.contains("Operador 1"));
        assert!(operators.contains("Operador 10"));

        let hours: BTreeSet<_> = dataset.records().iter().filter_map(|r| r.hour_num).collect();
        assert_eq!(hours, (7..=18).collect());
    }

    #[test]
    fn sample_values_stay_in_range() {
        let dataset = SampleSource::seeded(42).load().unwrap();
        for record in dataset.records() {
            assert!((20..200).contains(&record.pieces), "pieces {}", record.pieces);
            assert!((5..50).contains(&record.orders), "orders {}", record.orders);
            assert!(record.hour_label.ends_with('h'));
        }
    }

    #[test]
    fn seeded_samples_are_reproducible() {
        let a = SampleSource::seeded(99).load().unwrap();
        let b = SampleSource::seeded(99).load().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn garbage_bytes_are_a_malformed_payload() {
        let source = WorkbookSource::from_bytes("notas.txt", b"definitely not a workbook".to_vec());
        assert!(matches!(source.load(), Err(ImportError::MalformedPayload(_))));
    }

    #[test]
    fn data_url_framing_is_checked() {
        assert!(matches!(
            WorkbookSource::from_data_url("a.xlsx", "no separator here"),
            Err(ImportError::MalformedPayload(_))
        ));
        assert!(matches!(
            WorkbookSource::from_data_url("a.xlsx", "data:text/plain,hello"),
            Err(ImportError::MalformedPayload(_))
        ));
        assert!(matches!(
            WorkbookSource::from_data_url("a.xlsx", "data:application/octet-stream;base64,@@@"),
            Err(ImportError::MalformedPayload(_))
        ));

        let source = WorkbookSource::from_data_url(
            "a.xlsx",
            "data:application/octet-stream;base64,aGVsbG8=",
        )
        .unwrap();
        assert_eq!(source.bytes, b"hello");
    }

    #[test]
    fn cells_convert_best_effort() {
        assert_eq!(cell_text(&Data::Float(7.0)), "7");
        assert_eq!(cell_text(&Data::String(" 7h".into())), " 7h");
        assert_eq!(cell_text(&Data::Empty), "");

        assert_eq!(cell_count(&Data::Int(12)), 12);
        assert_eq!(cell_count(&Data::Int(-4)), 0);
        assert_eq!(cell_count(&Data::Float(19.6)), 20);
        assert_eq!(cell_count(&Data::String(" 33 ".into())), 33);
        assert_eq!(cell_count(&Data::String("n/a".into())), 0);
        assert_eq!(cell_count(&Data::Empty), 0);
    }
}
