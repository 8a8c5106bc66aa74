//! Panel identity and per-panel state.

use super::error::ImportError;
use super::record::{Dataset, DatasetOrigin};
use super::source::{RecordSource, SampleSource};

/// The two fixed dashboard panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    /// Faturamento
    Billing,
    /// Separação
    Picking,
}

impl PanelKind {
    pub const ALL: [PanelKind; 2] = [PanelKind::Billing, PanelKind::Picking];

    /// Short id used for element ids and log fields.
    pub fn id(self) -> &'static str {
        match self {
            PanelKind::Billing => "fat",
            PanelKind::Picking => "sep",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

/// Outcome of the most recent upload attempt on a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportStatus {
    Imported {
        file_name: String,
        skipped_rows: usize,
    },
    Failed {
        file_name: String,
        error: ImportError,
    },
    NoFile,
}

/// Dataset currently shown by a panel plus the last import outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    pub kind: PanelKind,
    pub dataset: Dataset,
    pub status: Option<ImportStatus>,
}

impl PanelState {
    /// Zero state: freshly generated sample data.
    pub fn sample(kind: PanelKind) -> Self {
        Self::with_sample(kind, &SampleSource::default())
    }

    pub fn with_sample(kind: PanelKind, source: &SampleSource) -> Self {
        Self {
            kind,
            dataset: source.dataset(),
            status: None,
        }
    }

    /// Replace the dataset with whatever `source` produces. On failure the
    /// current dataset is kept untouched and only the status changes.
    pub fn import(&mut self, file_name: &str, source: &dyn RecordSource) -> &ImportStatus {
        let dataset = match source.load() {
            Ok(dataset) => dataset,
            Err(error) => return self.reject(file_name, error),
        };

        let skipped_rows = match dataset.origin() {
            DatasetOrigin::Imported { skipped_rows, .. } => *skipped_rows,
            DatasetOrigin::Sample => 0,
        };
        tracing::info!(
            panel = self.kind.id(),
            file = file_name,
            rows = dataset.len(),
            "dataset replaced"
        );
        self.dataset = dataset;
        self.status.insert(ImportStatus::Imported {
            file_name: file_name.to_string(),
            skipped_rows,
        })
    }

    /// Record a failed import attempt; the dataset stays as it was.
    pub fn reject(&mut self, file_name: &str, error: ImportError) -> &ImportStatus {
        tracing::warn!(
            panel = self.kind.id(),
            file = file_name,
            kind = error.kind(),
            %error,
            "import failed; keeping previous dataset"
        );
        self.status.insert(ImportStatus::Failed {
            file_name: file_name.to_string(),
            error,
        })
    }

    /// An upload event arrived without any file attached.
    pub fn mark_no_file(&mut self) {
        self.status = Some(ImportStatus::NoFile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Record;

    struct Fixed(Result<Dataset, ImportError>);

    impl RecordSource for Fixed {
        fn load(&self) -> Result<Dataset, ImportError> {
            self.0.clone()
        }
    }

    #[test]
    fn panel_ids_round_trip() {
        for kind in PanelKind::ALL {
            assert_eq!(PanelKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(PanelKind::from_id("xyz"), None);
    }

    #[test]
    fn failed_import_keeps_dataset() {
        let mut state = PanelState::with_sample(PanelKind::Billing, &SampleSource::seeded(1));
        let before = state.dataset.clone();

        let status = state
            .import(
                "errado.xlsx",
                &Fixed(Err(ImportError::WrongSheet("QRY1000".into()))),
            )
            .clone();

        assert_eq!(state.dataset, before);
        assert!(matches!(
            status,
            ImportStatus::Failed { ref error, .. } if error.kind() == "wrong-sheet"
        ));
    }

    #[test]
    fn successful_import_replaces_dataset() {
        let mut state = PanelState::sample(PanelKind::Picking);
        let replacement = Dataset::new(
            vec![Record::new("9h", "Operador 3", 11, 2)],
            DatasetOrigin::Imported {
                file_name: "turno.xlsx".into(),
                skipped_rows: 2,
            },
        );

        state.import("turno.xlsx", &Fixed(Ok(replacement.clone())));

        assert_eq!(state.dataset, replacement);
        assert_eq!(
            state.status,
            Some(ImportStatus::Imported {
                file_name: "turno.xlsx".into(),
                skipped_rows: 2,
            })
        );
    }

    #[test]
    fn missing_file_only_updates_status() {
        let mut state = PanelState::with_sample(PanelKind::Billing, &SampleSource::seeded(5));
        let before = state.dataset.clone();
        state.mark_no_file();
        assert_eq!(state.dataset, before);
        assert_eq!(state.status, Some(ImportStatus::NoFile));
    }
}
