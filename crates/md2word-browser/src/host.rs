//! Streamlit component messaging over `window.postMessage`.
//!
//! The core crate owns the message shapes and the debounce; this module only
//! moves JSON between the iframe and its parent frame.

use gloo_events::EventListener;
use gloo_utils::format::JsValueSerdeExt;
use md2word_core::{ComponentValue, HostArgs, HostError, HostMessage, InboundMessage};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{MessageEvent, UrlSearchParams, Window};

use crate::js_message;

/// Which variant of the editor is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Top-level page seeded with the demo document.
    Standalone,
    /// Iframe inside a Streamlit page, seeded by the host.
    Embedded,
}

/// Detect the variant from the page context.
///
/// Embedded when framed by another window, or when the URL carries the
/// `streamlitUrl` parameter Streamlit adds to component iframes.
pub fn app_mode() -> AppMode {
    let Some(window) = web_sys::window() else {
        return AppMode::Standalone;
    };
    let framed = window
        .parent()
        .ok()
        .flatten()
        .is_some_and(|parent| parent != window);
    let flagged = window
        .location()
        .search()
        .ok()
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .is_some_and(|params| params.has("streamlitUrl"));

    if framed || flagged {
        AppMode::Embedded
    } else {
        AppMode::Standalone
    }
}

/// Connection to the parent frame.
#[derive(Clone, Debug)]
pub struct HostBridge {
    window: Window,
    parent: Window,
}

impl HostBridge {
    pub fn connect() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::Detached)?;
        let parent = window
            .parent()
            .map_err(|e| HostError::Transport(js_message(&e)))?
            .ok_or(HostError::Detached)?;
        Ok(Self { window, parent })
    }

    /// Post one message to the parent frame.
    pub fn post(&self, message: &HostMessage) -> Result<(), HostError> {
        let json = message.to_json()?;
        let value = JsValue::from_serde(&json)?;
        self.parent
            .post_message(&value, "*")
            .map_err(|e| HostError::Transport(js_message(&e)))
    }

    pub fn announce_ready(&self) -> Result<(), HostError> {
        self.post(&HostMessage::ready())
    }

    pub fn send_value(&self, value: ComponentValue) -> Result<(), HostError> {
        tracing::debug!(len = value.markdown_text.len(), "pushing state to host");
        self.post(&HostMessage::value(value))
    }

    /// Report the document's current scroll height as the frame height.
    pub fn report_height(&self) -> Result<(), HostError> {
        let height = self
            .window
            .document()
            .and_then(|d| d.body())
            .map(|body| body.scroll_height())
            .ok_or_else(|| HostError::Transport("no document body".into()))?;
        self.post(&HostMessage::frame_height(f64::from(height)))
    }

    /// Listen for `streamlit:render` messages.
    ///
    /// The listener is removed when the returned handle is dropped.
    pub fn on_render(&self, mut callback: impl FnMut(HostArgs) + 'static) -> EventListener {
        EventListener::new(&self.window, "message", move |event| {
            let Some(event) = event.dyn_ref::<MessageEvent>() else {
                return;
            };
            let json: serde_json::Value = match event.data().into_serde() {
                Ok(json) => json,
                Err(e) => {
                    tracing::trace!("ignoring non-json message: {}", e);
                    return;
                }
            };
            let is_render = InboundMessage::is_render(&json);
            match InboundMessage::from_json(json) {
                Ok(InboundMessage::Render { args, .. }) => {
                    tracing::debug!(len = args.markdown_text.len(), "render from host");
                    callback(args);
                }
                Ok(InboundMessage::Other) => {}
                Err(e) if is_render => tracing::warn!("dropping malformed render: {}", e),
                Err(e) => tracing::trace!("ignoring foreign message: {}", e),
            }
        })
    }
}
