//! Lifecycle of the editable preview surface.
//!
//! The surface is rebuilt from scratch whenever the HTML derived from the
//! Markdown changes. Between such renders it is an independent snapshot the
//! user edits directly; those edits are discarded by the next rebuild and
//! never flow back into the Markdown.
//!
//! ```text
//!   render(new html) ──► Pristine ──edit──► Dirty
//!        ▲                                   │
//!        └────────── render(new html) ◄──────┘
//! ```

/// Whether the user has edited the surface since it was last rebuilt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SurfaceState {
    #[default]
    Pristine,
    Dirty,
}

/// Result of `PreviewSurface::render`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Content differed; the surface must be torn down and rebuilt.
    Rebuilt,
    /// Same content as the last render; the surface (and any edits) stay.
    Unchanged,
}

/// Tracks what the editable surface was last built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewSurface {
    html: String,
    state: SurfaceState,
    generation: u64,
}

impl PreviewSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// HTML the surface was last built from.
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// Rebuild counter, used as the key of the DOM surface.
    ///
    /// A new generation forces the platform to dispose of the old element
    /// (with its selection, undo history and manual formatting) and create a
    /// fresh one rather than patching it.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Key string for the surface element.
    pub fn key(&self) -> String {
        format!("preview-{}", self.generation)
    }

    /// Offer freshly derived HTML to the surface.
    pub fn render(&mut self, html: &str) -> RenderOutcome {
        if html == self.html && self.generation > 0 {
            return RenderOutcome::Unchanged;
        }
        self.html.clear();
        self.html.push_str(html);
        self.state = SurfaceState::Pristine;
        self.generation += 1;
        tracing::debug!(generation = self.generation, len = html.len(), "preview rebuilt");
        RenderOutcome::Rebuilt
    }

    /// Record a user edit inside the surface.
    pub fn mark_edited(&mut self) {
        if self.state == SurfaceState::Pristine {
            tracing::trace!(generation = self.generation, "preview dirty");
        }
        self.state = SurfaceState::Dirty;
    }

    pub fn is_dirty(&self) -> bool {
        self.state == SurfaceState::Dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_render_rebuilds_even_when_empty() {
        let mut preview = PreviewSurface::new();
        assert_eq!(preview.render(""), RenderOutcome::Rebuilt);
        assert_eq!(preview.generation(), 1);
        assert_eq!(preview.render(""), RenderOutcome::Unchanged);
    }

    #[test]
    fn test_edit_then_same_html_keeps_dirty() {
        let mut preview = PreviewSurface::new();
        preview.render("<p>a</p>");
        preview.mark_edited();
        assert_eq!(preview.render("<p>a</p>"), RenderOutcome::Unchanged);
        assert_eq!(preview.state(), SurfaceState::Dirty);
        assert_eq!(preview.generation(), 1);
    }

    #[test]
    fn test_new_html_resets_to_pristine() {
        let mut preview = PreviewSurface::new();
        preview.render("<p>a</p>");
        preview.mark_edited();
        assert!(preview.is_dirty());

        assert_eq!(preview.render("<p>ab</p>"), RenderOutcome::Rebuilt);
        assert_eq!(preview.state(), SurfaceState::Pristine);
        assert_eq!(preview.html(), "<p>ab</p>");
        assert_eq!(preview.key(), "preview-2");
    }
}
