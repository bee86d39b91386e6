//! Hand an export to the browser as a file download.

use md2word_core::{EditorError, ExportFile};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::js_message;

/// Trigger a download of `file` through a temporary object URL.
///
/// The URL is revoked as soon as the click has been dispatched.
pub fn download(file: &ExportFile) -> Result<(), EditorError> {
    start_download(file).map_err(|e| EditorError::Download(js_message(&e)))?;
    tracing::info!(
        file = file.file_name,
        bytes = file.contents.len(),
        "document exported"
    );
    Ok(())
}

fn start_download(file: &ExportFile) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&file.contents));
    let opts = BlobPropertyBag::new();
    opts.set_type(file.mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(file.file_name);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    Url::revoke_object_url(&url)
}
