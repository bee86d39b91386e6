//! Browser DOM layer for the md2word editor.
//!
//! Everything that touches `window`, the document selection or
//! `postMessage` lives here; the logic it serves lives in `md2word-core`.
//! This crate assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `surface`: `TextEditingSurface` over the Selection API and `execCommand`
//! - `clipboard`: copy the preview's text, with a selection-based fallback
//! - `download`: hand an `ExportFile` to the browser as a file download
//! - `host`: Streamlit component messaging and embedded-mode detection
//!
//! # Re-exports
//!
//! This crate re-exports `md2word-core` for convenience, so consumers
//! only need to depend on `md2word-browser`.

// Re-export core crate
pub use md2word_core;
pub use md2word_core::*;

pub mod clipboard;
pub mod download;
pub mod host;
pub mod surface;

pub use clipboard::copy_surface_text;
pub use download::download;
pub use host::{AppMode, HostBridge, app_mode};
pub use surface::BrowserSurface;

use wasm_bindgen::{JsCast, JsValue};

/// Best-effort human readable message for a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
