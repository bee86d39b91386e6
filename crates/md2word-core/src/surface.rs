//! The seam between toolbar logic and the platform's editing engine.
//!
//! The document selection and the native command engine are global, ambient
//! state in a browser. `TextEditingSurface` narrows them to the handful of
//! operations the format painter and list styling actually need, so that
//! logic can run against a fake surface in tests.

use crate::error::SurfaceError;
use crate::lists::ListMarker;
use crate::painter::PainterStyle;

/// Native rich-text commands understood by the platform editing engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NativeCommand {
    Bold,
    Italic,
    Underline,
    /// Font family name, e.g. `Georgia`.
    FontName(String),
    /// Legacy HTML font size, 1 through 7.
    FontSize(u8),
    /// CSS color value.
    ForeColor(String),
    Indent,
    Outdent,
    InsertUnorderedList,
    InsertOrderedList,
    /// Replace the selection with an HTML fragment.
    InsertHtml(String),
    Copy,
}

impl NativeCommand {
    /// Font families offered by the toolbar.
    pub const FONT_FAMILIES: [&'static str; 6] = [
        "Arial",
        "Verdana",
        "Times New Roman",
        "Courier New",
        "Georgia",
        "sans-serif",
    ];

    /// Legacy font sizes offered by the toolbar.
    pub const FONT_SIZES: [u8; 7] = [1, 2, 3, 4, 5, 6, 7];

    /// Command identifier as the platform knows it.
    pub fn name(&self) -> &'static str {
        match self {
            NativeCommand::Bold => "bold",
            NativeCommand::Italic => "italic",
            NativeCommand::Underline => "underline",
            NativeCommand::FontName(_) => "fontName",
            NativeCommand::FontSize(_) => "fontSize",
            NativeCommand::ForeColor(_) => "foreColor",
            NativeCommand::Indent => "indent",
            NativeCommand::Outdent => "outdent",
            NativeCommand::InsertUnorderedList => "insertUnorderedList",
            NativeCommand::InsertOrderedList => "insertOrderedList",
            NativeCommand::InsertHtml(_) => "insertHTML",
            NativeCommand::Copy => "copy",
        }
    }

    /// Command argument, if the command takes one.
    pub fn value(&self) -> Option<String> {
        match self {
            NativeCommand::FontName(v) | NativeCommand::ForeColor(v) => Some(v.clone()),
            NativeCommand::InsertHtml(v) => Some(v.clone()),
            NativeCommand::FontSize(n) => Some((*n).clamp(1, 7).to_string()),
            _ => None,
        }
    }
}

/// Platform operations over the current selection inside the editable surface.
///
/// Implementations handle the actual DOM interaction. The browser
/// implementation uses the Selection/Range API and `execCommand`.
pub trait TextEditingSurface {
    /// Handle to an element inside the surface.
    type Element: Clone;

    /// Element at the selection anchor.
    ///
    /// When the anchor is a text node this is its parent element. `None` when
    /// there is no selection.
    fn selection_anchor_element(&self) -> Option<Self::Element>;

    /// True when the selection is a caret or absent.
    fn selection_is_collapsed(&self) -> bool;

    /// Plain text of the current selection.
    fn selected_text(&self) -> String;

    /// Read the painter property set from the element's computed style.
    fn computed_style(&self, element: &Self::Element) -> Option<PainterStyle>;

    /// Wrap the selected content in a new inline span carrying `style`.
    ///
    /// Fails when the selection crosses a boundary a single element cannot span.
    fn wrap_selection(&mut self, style: &PainterStyle) -> Result<(), SurfaceError>;

    /// Run a native editing command against the current selection.
    fn exec_native_command(&mut self, command: &NativeCommand) -> Result<(), SurfaceError>;

    /// Replace the selection with an inline span carrying `style` around `text`.
    ///
    /// The default goes through `insertHTML`; implementations with a cheaper
    /// path may override it.
    fn apply_inline_style(&mut self, style: &PainterStyle, text: &str) -> Result<(), SurfaceError> {
        self.exec_native_command(&NativeCommand::InsertHtml(style.to_span(text)))
    }

    /// Parent element, or `None` at the top of the document.
    fn parent_element(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Upper-case tag name (`UL`, `OL`, `SPAN`, ...).
    fn tag_name(&self, element: &Self::Element) -> String;

    /// True for the editable surface's own root element.
    fn is_root(&self, element: &Self::Element) -> bool;

    /// Write a list marker onto a list element.
    fn set_list_marker(&mut self, list: &Self::Element, marker: ListMarker);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names() {
        assert_eq!(NativeCommand::Bold.name(), "bold");
        assert_eq!(NativeCommand::ForeColor("#f00".into()).name(), "foreColor");
        assert_eq!(NativeCommand::InsertHtml(String::new()).name(), "insertHTML");
        assert_eq!(NativeCommand::InsertUnorderedList.name(), "insertUnorderedList");
    }

    #[test]
    fn test_command_values() {
        assert_eq!(NativeCommand::Bold.value(), None);
        assert_eq!(
            NativeCommand::FontName("Georgia".into()).value().as_deref(),
            Some("Georgia")
        );
        assert_eq!(NativeCommand::FontSize(4).value().as_deref(), Some("4"));
        assert_eq!(NativeCommand::FontSize(12).value().as_deref(), Some("7"));
        assert_eq!(NativeCommand::FontSize(0).value().as_deref(), Some("1"));
    }
}
