//! Embedding host protocol and the debounced state sync.
//!
//! In the embedded variant the editor runs in an iframe owned by a Streamlit
//! page. The host sends `streamlit:render` with the authoritative text and
//! config; the editor announces readiness, reports its height, and pushes its
//! own state back at most once per quiet window.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::config::EditorConfig;
use crate::error::HostError;

/// Quiet period before local state is pushed to the host.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Component API version announced on startup.
pub const API_VERSION: u32 = 1;

/// State exchanged with the host, in both directions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostArgs {
    #[serde(default)]
    pub markdown_text: String,
    #[serde(default)]
    pub config: EditorConfig,
}

/// Outbound value; same shape as the inbound arguments.
pub type ComponentValue = HostArgs;

/// Messages the component sends to the host frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum HostMessage {
    #[serde(rename = "streamlit:componentReady", rename_all = "camelCase")]
    ComponentReady { api_version: u32 },

    #[serde(rename = "streamlit:setComponentValue", rename_all = "camelCase")]
    SetComponentValue {
        value: ComponentValue,
        data_type: &'static str,
    },

    #[serde(rename = "streamlit:setFrameHeight")]
    SetFrameHeight { height: f64 },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a> {
    is_streamlit_message: bool,
    #[serde(flatten)]
    message: &'a HostMessage,
}

impl HostMessage {
    pub fn ready() -> Self {
        HostMessage::ComponentReady {
            api_version: API_VERSION,
        }
    }

    pub fn value(value: ComponentValue) -> Self {
        HostMessage::SetComponentValue {
            value,
            data_type: "json",
        }
    }

    pub fn frame_height(height: f64) -> Self {
        HostMessage::SetFrameHeight { height }
    }

    /// The message as the JSON object posted to the host.
    pub fn to_json(&self) -> Result<serde_json::Value, HostError> {
        Ok(serde_json::to_value(Envelope {
            is_streamlit_message: true,
            message: self,
        })?)
    }
}

/// Messages the host sends to the component.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum InboundMessage {
    #[serde(rename = "streamlit:render")]
    Render {
        args: HostArgs,
        #[serde(default)]
        disabled: bool,
    },

    #[serde(other)]
    Other,
}

impl InboundMessage {
    /// Message type tag used for render messages.
    pub const RENDER: &'static str = "streamlit:render";

    pub fn from_json(value: serde_json::Value) -> Result<Self, HostError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Whether `value` claims to be a render, whether or not it parses.
    pub fn is_render(value: &serde_json::Value) -> bool {
        value.get("type").and_then(serde_json::Value::as_str) == Some(Self::RENDER)
    }
}

/// Holds the latest value until a quiet window has passed.
///
/// Each `schedule` replaces the pending value and restarts the window, so only
/// the last value of a burst is ever released.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Queue `value`, cancelling whatever was pending.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Release the pending value if its window has elapsed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, at)) if *at <= now => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY)
    }
}

/// Debounced push of local state with a loop guard against host echoes.
#[derive(Clone, Debug, Default)]
pub struct HostSync {
    last_received: Option<HostArgs>,
    outbound: Debouncer<ComponentValue>,
}

impl HostSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_received(&self) -> Option<&HostArgs> {
        self.last_received.as_ref()
    }

    /// Record authoritative state from the host.
    ///
    /// Returns false when it equals what was last received; the host resends
    /// unchanged args on every rerun, and those leave local state and any
    /// pending push alone. A new value drops the pending push.
    pub fn receive(&mut self, args: &HostArgs) -> bool {
        if self.last_received.as_ref() == Some(args) {
            return false;
        }
        self.outbound.cancel();
        self.last_received = Some(args.clone());
        true
    }

    /// Local state changed; (re)start the quiet window.
    pub fn local_change(&mut self, value: ComponentValue, now: Instant) {
        self.outbound.schedule(value, now);
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.outbound.deadline()
    }

    /// Value to push now, if the window elapsed and it differs from the host's.
    pub fn take_due(&mut self, now: Instant) -> Option<ComponentValue> {
        let value = self.outbound.take_due(now)?;
        if self.last_received.as_ref() == Some(&value) {
            tracing::debug!("local state equals host state, not pushing");
            return None;
        }
        Some(value)
    }
}
