use std::path::Path;

use dioxus::prelude::*;

use crate::core::{ImportError, PanelState, WorkbookSource};
use crate::t;

/// Desktop file engines hand out full paths; show only the file name.
pub(crate) fn display_file_name(raw: &str) -> String {
    Path::new(raw)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(raw)
        .to_string()
}

#[component]
pub fn UploadButton(state: Signal<PanelState>) -> Element {
    let input_id = format!("upload-{}", state.peek().kind.id());

    let on_change = move |evt: FormEvent| async move {
        let mut state = state;
        let Some(engine) = evt.files() else {
            state.write().mark_no_file();
            return;
        };
        let Some(path) = engine.files().into_iter().next() else {
            state.write().mark_no_file();
            return;
        };

        let file_name = display_file_name(&path);
        match engine.read_file(&path).await {
            Some(bytes) => {
                let source = WorkbookSource::from_bytes(file_name.clone(), bytes);
                state.write().import(&file_name, &source);
            }
            None => {
                state.write().reject(
                    &file_name,
                    ImportError::MalformedPayload("file could not be read".to_string()),
                );
            }
        }
    };

    rsx! {
        div { class: "panel-upload",
            label { class: "panel-upload__button", r#for: "{input_id}", {t!("upload-prompt")} }
            input {
                id: "{input_id}",
                class: "panel-upload__input",
                r#type: "file",
                accept: ".xlsx,.xls,.ods",
                multiple: false,
                onchange: on_change,
            }
        }
    }
}
