use crate::core::{DatasetOrigin, ImportError, ImportStatus, PanelKind, PanelState};
use crate::t;

pub(crate) fn panel_title(kind: PanelKind) -> String {
    match kind {
        PanelKind::Billing => t!("tab-billing"),
        PanelKind::Picking => t!("tab-picking"),
    }
}

pub(crate) fn kpi_titles(kind: PanelKind) -> [String; 3] {
    match kind {
        PanelKind::Billing => [
            t!("kpi-billing-pieces"),
            t!("kpi-billing-orders"),
            t!("kpi-billing-operators"),
        ],
        PanelKind::Picking => [
            t!("kpi-picking-pieces"),
            t!("kpi-picking-orders"),
            t!("kpi-picking-operators"),
        ],
    }
}

/// One-line status under the upload button.
pub(crate) fn status_message(state: &PanelState) -> String {
    match &state.status {
        Some(ImportStatus::Imported {
            file_name,
            skipped_rows,
        }) => {
            let mut line = format!("{} {file_name}", t!("status-imported"));
            if *skipped_rows > 0 {
                line.push_str(&format!(" ({skipped_rows} {})", t!("status-skipped-rows")));
            }
            line
        }
        Some(ImportStatus::Failed { error, .. }) => {
            format!("{} {}", t!("status-import-failed"), import_error_message(error))
        }
        Some(ImportStatus::NoFile) => t!("status-no-file"),
        None => match state.dataset.origin() {
            DatasetOrigin::Sample => t!("status-sample"),
            DatasetOrigin::Imported { file_name, .. } => {
                format!("{} {file_name}", t!("status-imported"))
            }
        },
    }
}

/// Localized reason for a failed import. The decoder detail of a malformed
/// payload stays in the logs.
pub(crate) fn import_error_message(error: &ImportError) -> String {
    match error {
        ImportError::MalformedPayload(_) => t!("import-error-malformed-payload"),
        ImportError::WrongSheet(sheet) => format!("{} {sheet}", t!("import-error-wrong-sheet")),
        ImportError::MissingColumn(column) => {
            format!("{} {column}", t!("import-error-missing-column"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SampleSource, WorkbookSource};

    fn portuguese() {
        crate::i18n::init();
        let _ = crate::i18n::set_language("pt-BR");
    }

    #[test]
    fn failed_import_status_is_fully_localized() {
        portuguese();
        let mut state = PanelState::with_sample(PanelKind::Billing, &SampleSource::seeded(3));
        state.reject("turno.xlsx", ImportError::WrongSheet("QRY1000".into()));
        assert_eq!(
            status_message(&state),
            "❌ Erro ao importar: aba não encontrada: QRY1000"
        );
    }

    #[test]
    fn decoder_detail_is_not_shown() {
        portuguese();
        let mut state = PanelState::with_sample(PanelKind::Picking, &SampleSource::seeded(4));
        let source = WorkbookSource::from_bytes("lixo.xlsx", b"not a workbook".to_vec());
        state.import("lixo.xlsx", &source);
        assert_eq!(
            status_message(&state),
            "❌ Erro ao importar: arquivo inválido ou corrompido"
        );
        assert_eq!(
            import_error_message(&ImportError::MissingColumn("Hora".into())),
            "coluna obrigatória ausente: Hora"
        );
    }
}
