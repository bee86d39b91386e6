//! Browser implementation of the editable surface.
//!
//! Uses the DOM Selection API for the selection, `getComputedStyle` for the
//! painter, `Range.surroundContents` for wrapping and `document.execCommand`
//! for everything the browser's editing engine already knows how to do.

use md2word_core::{
    ListMarker, MARKER_ATTRIBUTE, NativeCommand, PainterStyle, SurfaceError, TextEditingSurface,
};
use smol_str::SmolStr;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlDocument, HtmlElement, Node, Selection};

use crate::js_message;

/// Handle on the contenteditable preview element.
///
/// Holds the element ID only; the element itself is looked up on each call
/// since the preview is replaced whenever the Markdown changes.
#[derive(Clone, Debug)]
pub struct BrowserSurface {
    editor_id: SmolStr,
}

impl BrowserSurface {
    pub fn new(editor_id: impl Into<SmolStr>) -> Self {
        Self {
            editor_id: editor_id.into(),
        }
    }

    pub fn editor_id(&self) -> &str {
        &self.editor_id
    }

    /// The surface element, if it is mounted.
    pub fn root(&self) -> Option<Element> {
        web_sys::window()?
            .document()?
            .get_element_by_id(&self.editor_id)
    }

    /// Current markup of the surface, including manual edits.
    pub fn inner_html(&self) -> Option<String> {
        Some(self.root()?.inner_html())
    }

    /// Rendered text of the surface, as the user sees it.
    pub fn inner_text(&self) -> Option<String> {
        Some(self.root()?.dyn_into::<HtmlElement>().ok()?.inner_text())
    }

    fn selection(&self) -> Option<Selection> {
        web_sys::window()?.get_selection().ok().flatten()
    }

    /// Anchor node of the selection, if it lies inside the surface.
    fn anchor_node(&self) -> Option<Node> {
        let node = self.selection()?.anchor_node()?;
        let root = self.root()?;
        root.contains(Some(&node)).then_some(node)
    }
}

fn html_document() -> Result<HtmlDocument, SurfaceError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
        .ok_or_else(|| SurfaceError::from("no html document"))
}

impl TextEditingSurface for BrowserSurface {
    type Element = Element;

    fn selection_anchor_element(&self) -> Option<Element> {
        let node = self.anchor_node()?;
        if node.node_type() == Node::ELEMENT_NODE {
            node.dyn_into::<Element>().ok()
        } else {
            node.parent_element()
        }
    }

    fn selection_is_collapsed(&self) -> bool {
        self.selection()
            .is_none_or(|sel| sel.range_count() == 0 || sel.is_collapsed())
    }

    fn selected_text(&self) -> String {
        self.selection()
            .map(|sel| String::from(sel.to_string()))
            .unwrap_or_default()
    }

    fn computed_style(&self, element: &Element) -> Option<PainterStyle> {
        let decl = web_sys::window()?.get_computed_style(element).ok().flatten()?;
        Some(PainterStyle::from_lookup(|name| decl.get_property_value(name).ok()))
    }

    fn wrap_selection(&mut self, style: &PainterStyle) -> Result<(), SurfaceError> {
        let sel = self.selection().ok_or(SurfaceError::NoSelection)?;
        if sel.range_count() == 0 {
            return Err(SurfaceError::NoSelection);
        }
        let range = sel
            .get_range_at(0)
            .map_err(|e| SurfaceError::Platform(js_message(&e)))?;

        let span = html_document()?
            .create_element("span")
            .map_err(|e| SurfaceError::Platform(js_message(&e)))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SurfaceError::from("span is not an HtmlElement"))?;
        span.style().set_css_text(&style.to_css());

        range
            .surround_contents(&span)
            .map_err(|e| SurfaceError::Wrap(js_message(&e)))
    }

    fn exec_native_command(&mut self, command: &NativeCommand) -> Result<(), SurfaceError> {
        let doc = html_document()?;
        let name = command.name();
        let accepted = match command.value() {
            Some(value) => doc.exec_command_with_show_ui_and_value(name, false, &value),
            None => doc.exec_command(name),
        }
        .map_err(|e| SurfaceError::Platform(js_message(&e)))?;

        if !accepted {
            return Err(SurfaceError::Command { command: name });
        }
        tracing::trace!(command = name, "native command");
        Ok(())
    }

    fn parent_element(&self, element: &Element) -> Option<Element> {
        element.parent_element()
    }

    fn tag_name(&self, element: &Element) -> String {
        element.tag_name().to_ascii_uppercase()
    }

    fn is_root(&self, element: &Element) -> bool {
        element.id() == self.editor_id.as_str()
    }

    fn set_list_marker(&mut self, list: &Element, marker: ListMarker) {
        if let Some(el) = list.dyn_ref::<HtmlElement>() {
            if let Err(e) = el
                .style()
                .set_property("list-style-type", marker.list_style_type)
            {
                tracing::warn!("setting list-style-type failed: {}", js_message(&e));
            }
        }
        let result = match marker.data_marker {
            Some(value) => list.set_attribute(MARKER_ATTRIBUTE, value),
            None => list.remove_attribute(MARKER_ATTRIBUTE),
        };
        if let Err(e) = result {
            tracing::warn!("updating {} failed: {}", MARKER_ATTRIBUTE, js_message(&e));
        }
    }
}
