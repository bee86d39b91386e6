//! Format painter: copy the look of one selection onto others.
//!
//! A capture reads a fixed set of nine computed style properties from the
//! element at the selection anchor. The next selection release inside the
//! surface applies them verbatim. Unless locked, the captured style is then
//! dropped; a locked painter keeps applying until toggled off.

use markdown_weaver_escape::escape_html;
use smol_str::SmolStr;

use crate::surface::TextEditingSurface;

/// The style properties the painter copies, as computed-style strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PainterStyle {
    pub font_weight: SmolStr,
    pub font_style: SmolStr,
    pub text_decoration_line: SmolStr,
    pub color: SmolStr,
    pub background_color: SmolStr,
    pub font_family: SmolStr,
    pub font_size: SmolStr,
    pub line_height: SmolStr,
    pub letter_spacing: SmolStr,
}

impl PainterStyle {
    /// CSS property names, in the order `to_css` and `properties` use.
    pub const PROPERTY_NAMES: [&'static str; 9] = [
        "font-weight",
        "font-style",
        "text-decoration-line",
        "color",
        "background-color",
        "font-family",
        "font-size",
        "line-height",
        "letter-spacing",
    ];

    /// Build from a lookup of CSS property name to computed value.
    ///
    /// Properties the lookup cannot answer are left empty.
    pub fn from_lookup(mut get: impl FnMut(&str) -> Option<String>) -> Self {
        let mut read = |name: &str| get(name).map(SmolStr::from).unwrap_or_default();
        Self {
            font_weight: read("font-weight"),
            font_style: read("font-style"),
            text_decoration_line: read("text-decoration-line"),
            color: read("color"),
            background_color: read("background-color"),
            font_family: read("font-family"),
            font_size: read("font-size"),
            line_height: read("line-height"),
            letter_spacing: read("letter-spacing"),
        }
    }

    /// `(property, value)` pairs in declaration order.
    pub fn properties(&self) -> [(&'static str, &str); 9] {
        let values = [
            &self.font_weight,
            &self.font_style,
            &self.text_decoration_line,
            &self.color,
            &self.background_color,
            &self.font_family,
            &self.font_size,
            &self.line_height,
            &self.letter_spacing,
        ];
        let mut out = [("", ""); 9];
        for (i, (name, value)) in Self::PROPERTY_NAMES.into_iter().zip(values).enumerate() {
            out[i] = (name, value.as_str());
        }
        out
    }

    /// Inline declaration list, e.g. `font-weight:700;font-style:italic;...`.
    ///
    /// Empty values are skipped.
    pub fn to_css(&self) -> String {
        self.properties()
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| format!("{name}:{value}"))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// HTML fragment wrapping `text` in a span with this style.
    pub fn to_span(&self, text: &str) -> String {
        let mut html = String::from("<span style=\"");
        let _ = escape_html(&mut html, &self.to_css());
        html.push_str("\">");
        let _ = escape_html(&mut html, text);
        html.push_str("</span>");
        html
    }
}

/// What a call to `FormatPainter::apply` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PainterOutcome {
    /// Nothing captured; selection release ignored.
    Idle,
    /// Selection was collapsed; the captured style is kept for the next release.
    Skipped,
    /// Selection wrapped in a new styled span.
    Wrapped,
    /// Wrapping failed; the selection was replaced by a styled HTML fragment.
    Inserted,
    /// Both wrapping and the fallback failed; nothing changed on the surface.
    Failed,
}

/// Captured style plus lock flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatPainter {
    pending: Option<PainterStyle>,
    locked: bool,
}

impl FormatPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A style is captured and waiting to be applied.
    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn pending(&self) -> Option<&PainterStyle> {
        self.pending.as_ref()
    }

    /// Capture the style at the selection anchor. Returns whether anything was captured.
    ///
    /// Without a selection (or a readable style) the previous state is kept.
    pub fn capture<S: TextEditingSurface>(&mut self, surface: &S) -> bool {
        let Some(anchor) = surface.selection_anchor_element() else {
            tracing::debug!("painter capture ignored: no selection");
            return false;
        };
        let Some(style) = surface.computed_style(&anchor) else {
            tracing::debug!("painter capture ignored: no computed style");
            return false;
        };
        tracing::debug!(css = %style.to_css(), "painter captured");
        self.pending = Some(style);
        true
    }

    /// Single click on the painter button.
    ///
    /// Toggles: an active painter is switched off (and unlocked), an idle one
    /// captures for a single application.
    pub fn click<S: TextEditingSurface>(&mut self, surface: &S) {
        if self.pending.is_some() {
            self.clear();
        } else {
            self.capture(surface);
            self.locked = false;
        }
    }

    /// Double click on the painter button: capture and lock.
    pub fn double_click<S: TextEditingSurface>(&mut self, surface: &S) {
        self.capture(surface);
        self.locked = true;
    }

    /// Drop any captured style and unlock.
    pub fn clear(&mut self) {
        self.pending = None;
        self.locked = false;
    }

    /// Apply the captured style to the current selection.
    ///
    /// Called on every selection release inside the surface.
    pub fn apply<S: TextEditingSurface>(&mut self, surface: &mut S) -> PainterOutcome {
        let Some(style) = self.pending.clone() else {
            return PainterOutcome::Idle;
        };
        if surface.selection_is_collapsed() {
            return PainterOutcome::Skipped;
        }

        let outcome = match surface.wrap_selection(&style) {
            Ok(()) => PainterOutcome::Wrapped,
            Err(e) => {
                tracing::debug!(error = %e, "range surround failed, inserting html");
                let text = surface.selected_text();
                match surface.apply_inline_style(&style, &text) {
                    Ok(()) => PainterOutcome::Inserted,
                    Err(e) => {
                        tracing::warn!(error = %e, "format painter could not apply style");
                        PainterOutcome::Failed
                    }
                }
            }
        };

        if !self.locked {
            self.pending = None;
        }
        outcome
    }
}
