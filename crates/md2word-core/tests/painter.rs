mod common;

use common::{FakeSurface, ROOT, style};
use md2word_core::{FormatPainter, NativeCommand, PainterOutcome};

fn surface_with_source() -> (FakeSurface, usize, [usize; 3]) {
    let mut surface = FakeSurface::new();
    let para = surface.add("P", ROOT);
    let source = surface.add_styled("STRONG", para, style("700", "rgb(255, 0, 0)"));
    let targets = [
        surface.add_styled("SPAN", para, style("400", "rgb(0, 0, 0)")),
        surface.add_styled("SPAN", para, style("400", "rgb(0, 0, 0)")),
        surface.add_styled("SPAN", para, style("400", "rgb(0, 0, 0)")),
    ];
    (surface, source, targets)
}

#[test]
fn test_single_click_applies_once() {
    let (mut surface, source, [b, c, _]) = surface_with_source();
    let mut painter = FormatPainter::new();

    surface.select(source, "");
    painter.click(&surface);
    assert!(painter.is_active());
    assert!(!painter.is_locked());

    surface.select(b, "second");
    assert_eq!(painter.apply(&mut surface), PainterOutcome::Wrapped);
    assert!(!painter.is_active());

    surface.select(c, "third");
    assert_eq!(painter.apply(&mut surface), PainterOutcome::Idle);

    let applied = surface.styles_applied_to(b);
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].font_weight, "700");
    assert_eq!(applied[0].color, "rgb(255, 0, 0)");
    assert!(surface.styles_applied_to(c).is_empty());
}

#[test]
fn test_locked_applies_until_clicked_off() {
    let (mut surface, source, [b, c, d]) = surface_with_source();
    let mut painter = FormatPainter::new();

    // A browser double click delivers click, click, dblclick.
    surface.select(source, "");
    painter.click(&surface);
    painter.click(&surface);
    painter.double_click(&surface);
    assert!(painter.is_locked());

    surface.select(b, "b");
    assert_eq!(painter.apply(&mut surface), PainterOutcome::Wrapped);
    surface.select(c, "c");
    assert_eq!(painter.apply(&mut surface), PainterOutcome::Wrapped);
    assert!(painter.is_active());

    painter.click(&surface);
    assert!(!painter.is_active());
    assert!(!painter.is_locked());

    surface.select(d, "d");
    assert_eq!(painter.apply(&mut surface), PainterOutcome::Idle);
    assert_eq!(surface.wrapped.len(), 2);
    assert!(surface.styles_applied_to(d).is_empty());
}

#[test]
fn test_collapsed_selection_keeps_pending_style() {
    let (mut surface, source, [b, _, _]) = surface_with_source();
    let mut painter = FormatPainter::new();
    surface.select(source, "");
    painter.click(&surface);

    surface.select(b, "");
    assert_eq!(painter.apply(&mut surface), PainterOutcome::Skipped);
    assert!(painter.is_active());
    assert!(surface.wrapped.is_empty());

    surface.select(b, "now selected");
    assert_eq!(painter.apply(&mut surface), PainterOutcome::Wrapped);
}

#[test]
fn test_surround_failure_falls_back_to_insert_html() {
    let (mut surface, source, [b, _, _]) = surface_with_source();
    let mut painter = FormatPainter::new();
    surface.select(source, "");
    painter.click(&surface);

    surface.wrap_fails = true;
    surface.select(b, "a <b> & c");
    assert_eq!(painter.apply(&mut surface), PainterOutcome::Inserted);

    let [NativeCommand::InsertHtml(html)] = surface.commands.as_slice() else {
        panic!("expected a single insertHTML, got {:?}", surface.commands);
    };
    assert!(html.starts_with("<span style=\"font-weight:700;"));
    assert!(html.ends_with(">a &lt;b&gt; &amp; c</span>"));
    assert!(!painter.is_active());
}

#[test]
fn test_both_paths_failing_reports_failure() {
    let (mut surface, source, [b, _, _]) = surface_with_source();
    let mut painter = FormatPainter::new();
    surface.select(source, "");
    painter.double_click(&surface);

    surface.wrap_fails = true;
    surface.commands_fail = true;
    surface.select(b, "text");
    assert_eq!(painter.apply(&mut surface), PainterOutcome::Failed);
    assert!(painter.is_active());
}

#[test]
fn test_capture_without_selection_is_noop() {
    let surface = FakeSurface::new();
    let mut painter = FormatPainter::new();
    painter.click(&surface);
    assert!(!painter.is_active());
}
