//! WASM browser tests for md2word-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use md2word_browser::{
    BrowserSurface, BulletStyle, FormatPainter, ListKind, ListStyler, PainterOutcome,
    TextEditingSurface, nearest_list,
};
use web_sys::{Element, HtmlElement};

fn mount(id: &str, html: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(old) = document.get_element_by_id(id) {
        old.remove();
    }
    let root = document.create_element("div").unwrap();
    root.set_id(id);
    root.set_attribute("contenteditable", "true").unwrap();
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn select_contents(el: &Element) {
    let window = web_sys::window().unwrap();
    let range = window.document().unwrap().create_range().unwrap();
    range.select_node_contents(el).unwrap();
    let sel = window.get_selection().unwrap().unwrap();
    sel.remove_all_ranges().unwrap();
    sel.add_range(&range).unwrap();
}

fn caret_in(el: &Element) {
    let window = web_sys::window().unwrap();
    let range = window.document().unwrap().create_range().unwrap();
    range.select_node_contents(el).unwrap();
    range.collapse_with_to_start(true);
    let sel = window.get_selection().unwrap().unwrap();
    sel.remove_all_ranges().unwrap();
    sel.add_range(&range).unwrap();
}

// === Selection ===

#[wasm_bindgen_test]
fn test_anchor_element_from_selection() {
    let root = mount("surface-anchor", "<p><strong id=\"s\">bold</strong> plain</p>");
    let strong = root.query_selector("#s").unwrap().unwrap();
    select_contents(&strong);

    let surface = BrowserSurface::new("surface-anchor");
    let anchor = surface.selection_anchor_element().unwrap();
    assert_eq!(surface.tag_name(&anchor), "STRONG");
    assert!(!surface.selection_is_collapsed());
    assert_eq!(surface.selected_text(), "bold");
}

#[wasm_bindgen_test]
fn test_selection_outside_surface_is_ignored() {
    mount("surface-outside", "<p>inside</p>");
    let outside = mount("not-the-surface", "<p>outside</p>");
    select_contents(&outside);

    let surface = BrowserSurface::new("surface-outside");
    assert!(surface.selection_anchor_element().is_none());
}

#[wasm_bindgen_test]
fn test_computed_style_reads_weight() {
    let root = mount("surface-style", "<p><b id=\"b\">x</b></p>");
    let b = root.query_selector("#b").unwrap().unwrap();
    let surface = BrowserSurface::new("surface-style");
    let style = surface.computed_style(&b).unwrap();
    assert_eq!(style.font_weight, "700");
}

// === Painter ===

#[wasm_bindgen_test]
fn test_painter_wraps_selection_in_span() {
    let root = mount(
        "surface-painter",
        "<p><span id=\"src\" style=\"color: rgb(255, 0, 0)\">red</span> <span id=\"dst\">plain</span></p>",
    );
    let mut surface = BrowserSurface::new("surface-painter");
    let mut painter = FormatPainter::new();

    select_contents(&root.query_selector("#src").unwrap().unwrap());
    painter.click(&surface);
    assert!(painter.is_active());

    let dst = root.query_selector("#dst").unwrap().unwrap();
    select_contents(&dst);
    assert_eq!(painter.apply(&mut surface), PainterOutcome::Wrapped);

    let span = dst.first_element_child().unwrap().dyn_into::<HtmlElement>().unwrap();
    assert_eq!(span.style().get_property_value("color").unwrap(), "rgb(255, 0, 0)");
    assert!(!painter.is_active());
}

// === Lists ===

#[wasm_bindgen_test]
fn test_diamond_marker_attribute_round_trip() {
    let root = mount("surface-lists", "<ul id=\"l\"><li id=\"i\">item</li></ul>");
    let item = root.query_selector("#i").unwrap().unwrap();
    caret_in(&item);

    let mut surface = BrowserSurface::new("surface-lists");
    let list = nearest_list(&surface, ListKind::Bullet).unwrap();
    assert_eq!(list.id(), "l");

    let mut styler = ListStyler::default();
    assert!(styler.set_bullet_style(BulletStyle::Diamond, &mut surface));
    assert_eq!(list.get_attribute("data-marker").as_deref(), Some("diamond"));
    let style = list.dyn_ref::<HtmlElement>().unwrap().style();
    assert_eq!(style.get_property_value("list-style-type").unwrap(), "none");

    assert!(styler.set_bullet_style(BulletStyle::Disc, &mut surface));
    assert_eq!(list.get_attribute("data-marker"), None);
    assert_eq!(style.get_property_value("list-style-type").unwrap(), "disc");
}

#[wasm_bindgen_test]
fn test_inner_html_reflects_manual_edits() {
    let root = mount("surface-html", "<p>one</p>");
    root.set_inner_html("<p>one</p><p>two</p>");
    let surface = BrowserSurface::new("surface-html");
    assert_eq!(surface.inner_html().as_deref(), Some("<p>one</p><p>two</p>"));
}
