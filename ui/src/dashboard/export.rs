use api::MetricRow;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::core::platform;
use crate::core::export::{export_filename, serialize, ExportFormat};
use crate::core::notify;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

/// Export buttons for the displayed dataset.
///
/// All three paths serialize the rows as they are currently displayed; an
/// empty dataset produces no file and tells the user why. The "Excel"
/// button ships CSV bytes under an `.xlsx` name (see `core::export`).
#[component]
pub fn ExportPanel(rows: Vec<MetricRow>) -> Element {
    let row_count = rows.len();

    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("dash-card__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "dash-card__meta dash-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "dash-card__meta dash-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let handler = |format: ExportFormat| {
        let export_rows = rows.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            if export_rows.is_empty() {
                notify::blocking_alert("No data to export");
                status_signal.set(ExportStatus::Error("No data to export".to_string()));
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working(format.label()));
            let export_rows = export_rows.clone();

            #[cfg(target_arch = "wasm32")]
            {
                let mut status_signal = status_signal;
                let mut busy_signal = busy_signal;
                platform::spawn_future(async move {
                    match perform_export(format, export_rows).await {
                        Ok(message) => status_signal.set(ExportStatus::Done(message)),
                        Err(err) => status_signal.set(ExportStatus::Error(err)),
                    }
                    busy_signal.set(false);
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                match futures::executor::block_on(perform_export(format, export_rows)) {
                    Ok(message) => status_signal.set(ExportStatus::Done(message)),
                    Err(err) => status_signal.set(ExportStatus::Error(err)),
                }
                busy_signal.set(false);
            }
        }
    };

    let csv_handler = handler(ExportFormat::Csv);
    let json_handler = handler(ExportFormat::Json);
    let spreadsheet_handler = handler(ExportFormat::Spreadsheet);

    rsx! {
        section { class: "dash-card dash-export",
            div { class: "dash-card__header",
                h2 { "Export" }
                if row_count > 0 {
                    span { class: "dash-card__meta", "{row_count} rows ready" }
                }
            }

            if row_count == 0 {
                p { class: "dash-card__placeholder",
                    "Exports unlock once a date range has data."
                }
            } else {
                p { "Download the displayed dataset for deeper analysis or sharing." }

                div { class: "dash-export__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: busy(),
                        onclick: csv_handler,
                        "Export CSV"
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        disabled: busy(),
                        onclick: json_handler,
                        "Export JSON"
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        disabled: busy(),
                        onclick: spreadsheet_handler,
                        "Export Excel"
                    }
                }

                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

async fn perform_export(format: ExportFormat, rows: Vec<MetricRow>) -> Result<String, String> {
    let content = serialize(format, &rows)?;
    let filename = export_filename(format);
    let delivery = download_bytes(&filename, format.mime(), content.into_bytes()).await?;
    Ok(match delivery {
        Some(path) => format!("{} saved to {path}", format.label()),
        None => format!("{} download started", format.label()),
    })
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("dev", "Pulseboard", "Pulseboard")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}
