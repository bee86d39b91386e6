//! Copy the preview's text to the system clipboard.
//!
//! Tries the async Clipboard API first. Where that is unavailable or denied
//! (insecure context, iframe without permission), falls back to selecting
//! the surface and running the native copy command.

use md2word_core::{EditorError, NativeCommand, TextEditingSurface};
use wasm_bindgen::JsValue;

use crate::js_message;
use crate::surface::BrowserSurface;

/// Copy the rendered text of `surface`.
pub async fn copy_surface_text(surface: &BrowserSurface) -> Result<(), EditorError> {
    let Some(text) = surface.inner_text() else {
        return Err(EditorError::Clipboard("preview not mounted".into()));
    };

    match write_text(&text).await {
        Ok(()) => {
            tracing::debug!("copied {} bytes of text", text.len());
            Ok(())
        }
        Err(e) => {
            tracing::debug!("async clipboard failed, selecting instead: {}", js_message(&e));
            copy_by_selection(surface)
        }
    }
}

async fn write_text(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

fn copy_by_selection(surface: &BrowserSurface) -> Result<(), EditorError> {
    let clipboard_err = |e: JsValue| EditorError::Clipboard(js_message(&e));

    let root = surface
        .root()
        .ok_or_else(|| EditorError::Clipboard("preview not mounted".into()))?;
    let window = web_sys::window().ok_or_else(|| EditorError::Clipboard("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| EditorError::Clipboard("no document".into()))?;
    let selection = window
        .get_selection()
        .map_err(clipboard_err)?
        .ok_or_else(|| EditorError::Clipboard("no selection object".into()))?;

    let range = document.create_range().map_err(clipboard_err)?;
    range.select_node_contents(&root).map_err(clipboard_err)?;
    selection.remove_all_ranges().map_err(clipboard_err)?;
    selection.add_range(&range).map_err(clipboard_err)?;

    let result = surface.clone().exec_native_command(&NativeCommand::Copy);
    let _ = selection.remove_all_ranges();
    result.map_err(EditorError::from)
}
