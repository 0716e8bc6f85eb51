//! Export Commands
//!
//! Capture the schedule sheet, wrap it in a PDF and hand it to the browser as
//! a download.

use gloo_timers::callback::Timeout;
use schedule_core::{build_pdf, file_name, ExportConfig, ExportError, ExportResult, SchedulerState};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, HtmlImageElement, Url};

use crate::render;

/// Object URLs are released after the browser has started the download
const REVOKE_DELAY_MS: u32 = 1_000;

fn js_err(err: JsValue) -> ExportError {
    ExportError::Browser(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Render `state` to PDF and start the download. Returns the file name.
pub async fn export_schedule_pdf(state: &SchedulerState, config: &ExportConfig) -> ExportResult<String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Browser("no document".to_string()))?;

    let date = state.form.date.as_str();
    let groups = state.groups();
    log::info!("[EXPORT] Rendering {} groups", groups.len());

    let logo = load_logo(&config.logo_url).await;
    let raster = render::capture_schedule(&document, date, &groups, logo.as_ref())?;
    let bytes = build_pdf(config, &raster)?;

    let name = file_name(config, date);
    download(&document, &name, &bytes).map_err(js_err)?;
    Ok(name)
}

/// Load and decode the logo; `None` if it cannot be fetched
async fn load_logo(url: &str) -> Option<HtmlImageElement> {
    let img = match HtmlImageElement::new() {
        Ok(img) => img,
        Err(e) => {
            log::warn!("[EXPORT] Cannot create image element: {:?}", e);
            return None;
        }
    };
    img.set_src(url);
    match JsFuture::from(img.decode()).await {
        Ok(_) => Some(img),
        Err(e) => {
            log::warn!("[EXPORT] Logo {} unavailable, exporting without it: {:?}", url, e);
            None
        }
    }
}

fn download(document: &Document, name: &str, bytes: &[u8]) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    // Some browsers ignore clicks on anchors outside the document
    let body = document.body().ok_or_else(|| JsValue::from_str("no document body"))?;
    let anchor = document.create_element("a")?.dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(name);
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();

    Timeout::new(REVOKE_DELAY_MS, move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("[EXPORT] Failed to revoke {}: {:?}", url, e);
        }
    })
    .forget();
    Ok(())
}
