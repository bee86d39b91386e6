//! Root controller: all editor state in one place.
//!
//! Owns the configuration (and the stylesheet derived from it), the document,
//! the preview lifecycle and the sidebar layout. In the embedded variant it
//! also owns the host sync. UI layers call into it on discrete events and
//! read back what to display.

use std::time::Duration;

use web_time::Instant;

use crate::config::{ConfigField, EditorConfig};
use crate::document::DocumentState;
use crate::error::UploadError;
use crate::host::{ComponentValue, HostArgs, HostSync};
use crate::layout::SidebarLayout;
use crate::preview::{PreviewSurface, RenderOutcome};
use crate::stylesheet::preview_stylesheet;

#[derive(Clone, Debug)]
pub struct EditorController {
    config: EditorConfig,
    stylesheet: String,
    document: DocumentState,
    preview: PreviewSurface,
    layout: SidebarLayout,
    host: Option<HostSync>,
}

impl EditorController {
    /// Standalone editor seeded with `markdown` and `config`.
    pub fn new(markdown: impl Into<String>, config: EditorConfig) -> Self {
        Self::with_document(DocumentState::new(markdown), config)
    }

    /// Standalone editor around an existing document (and its parser).
    pub fn with_document(document: DocumentState, config: EditorConfig) -> Self {
        let mut preview = PreviewSurface::new();
        preview.render(document.html());
        Self {
            stylesheet: preview_stylesheet(&config),
            config,
            document,
            preview,
            layout: SidebarLayout::default(),
            host: None,
        }
    }

    /// Embedded editor seeded from the host's initial arguments.
    pub fn embedded(args: HostArgs) -> Self {
        let mut sync = HostSync::new();
        sync.receive(&args);
        let mut controller = Self::new(args.markdown_text, args.config);
        controller.host = Some(sync);
        controller
    }

    pub fn is_embedded(&self) -> bool {
        self.host.is_some()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Stylesheet for the current config. Only recomputed when the config changes.
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    pub fn markdown(&self) -> &str {
        self.document.markdown()
    }

    pub fn html(&self) -> &str {
        self.document.html()
    }

    pub fn preview(&self) -> &PreviewSurface {
        &self.preview
    }

    pub fn layout(&self) -> &SidebarLayout {
        &self.layout
    }

    /// Layout is purely presentational; it never reaches the host.
    pub fn layout_mut(&mut self) -> &mut SidebarLayout {
        &mut self.layout
    }

    /// Current state in host wire shape.
    pub fn component_value(&self) -> ComponentValue {
        HostArgs {
            markdown_text: self.document.markdown().to_string(),
            config: self.config.clone(),
        }
    }

    /// Replace the Markdown source, re-derive HTML and rebuild the preview if it changed.
    pub fn set_text(&mut self, text: impl Into<String>, now: Instant) -> RenderOutcome {
        let outcome = self.apply_text(text.into());
        self.schedule_push(now);
        outcome
    }

    /// Apply the outcome of a file upload. Failures leave the text unchanged.
    pub fn accept_upload(
        &mut self,
        upload: Result<String, UploadError>,
        now: Instant,
    ) -> Option<RenderOutcome> {
        match upload {
            Ok(text) => Some(self.set_text(text, now)),
            Err(e) => {
                tracing::warn!(error = %e, "upload ignored");
                None
            }
        }
    }

    /// Replace one config field. Returns whether the config changed.
    pub fn set_config_field(&mut self, field: ConfigField, now: Instant) -> bool {
        let mut config = self.config.clone();
        if !config.set(field) {
            return false;
        }
        self.apply_config(config);
        self.schedule_push(now);
        true
    }

    /// Replace the whole config. Returns whether it changed.
    pub fn replace_config(&mut self, config: EditorConfig, now: Instant) -> bool {
        if config == self.config {
            return false;
        }
        self.apply_config(config);
        self.schedule_push(now);
        true
    }

    /// Record a manual edit inside the preview surface.
    pub fn mark_preview_edited(&mut self) {
        self.preview.mark_edited();
    }

    /// Overwrite local state with authoritative values pushed by the host.
    ///
    /// A repeat of the last received args is ignored so that local edits
    /// made since (and their pending push) survive the host's rerun.
    /// Does not schedule a push back; the loop guard would drop it anyway.
    pub fn apply_host_args(&mut self, args: HostArgs) -> RenderOutcome {
        if let Some(sync) = self.host.as_mut() {
            if !sync.receive(&args) {
                tracing::trace!("host args unchanged, keeping local state");
                return RenderOutcome::Unchanged;
            }
        }
        let HostArgs {
            markdown_text,
            config,
        } = args;
        if config != self.config {
            self.apply_config(config);
        }
        self.apply_text(markdown_text)
    }

    /// When the next host push becomes due, if one is pending.
    pub fn host_deadline(&self) -> Option<Instant> {
        self.host.as_ref().and_then(HostSync::deadline)
    }

    /// Time left until the pending host push is due; zero once it is.
    pub fn host_push_wait(&self, now: Instant) -> Option<Duration> {
        self.host_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Value to push to the host now, if any.
    pub fn take_host_push(&mut self, now: Instant) -> Option<ComponentValue> {
        self.host.as_mut()?.take_due(now)
    }

    fn apply_text(&mut self, text: String) -> RenderOutcome {
        self.document.set_text(text);
        self.preview.render(self.document.html())
    }

    fn apply_config(&mut self, config: EditorConfig) {
        self.stylesheet = preview_stylesheet(&config);
        self.config = config;
    }

    fn schedule_push(&mut self, now: Instant) {
        let value = self.component_value();
        if let Some(sync) = self.host.as_mut() {
            sync.local_change(value, now);
        }
    }
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new(crate::input::DEMO_MARKDOWN, EditorConfig::default())
    }
}
