use md2word_core::{
    ConfigField, DocumentState, EditorConfig, EditorController, HeadingLevel, MAX_WIDTH, MIN_WIDTH,
    RenderOutcome, SidebarLayout, clamp_width, preview_stylesheet,
};
use proptest::prelude::*;
use web_time::Instant;

fn heading_level() -> impl Strategy<Value = HeadingLevel> {
    prop::sample::select(HeadingLevel::ALL.to_vec())
}

proptest! {
    #[test]
    fn derived_html_is_deterministic(text in "[ -~\n#*_`>|-]{0,200}") {
        let a = DocumentState::new(text.clone());
        let mut b = DocumentState::new("");
        b.set_text(text.clone());
        prop_assert_eq!(a.html(), b.html());
        b.set_text(text);
        prop_assert_eq!(a.html(), b.html());
    }

    #[test]
    fn unchanged_text_never_rebuilds_preview(text in "\\PC{0,120}") {
        let mut c = EditorController::new(text.clone(), EditorConfig::default());
        let key = c.preview().key();
        c.mark_preview_edited();
        prop_assert_eq!(c.set_text(text, Instant::now()), RenderOutcome::Unchanged);
        prop_assert_eq!(c.preview().key(), key);
        prop_assert!(c.preview().is_dirty());
    }

    #[test]
    fn one_size_changes_one_line(level in heading_level(), size in 1u32..200) {
        let base = EditorConfig::default();
        let changed = base.clone().with(ConfigField::FontSize(level, size));
        let before = preview_stylesheet(&base);
        let after = preview_stylesheet(&changed);
        prop_assert_eq!(before.lines().count(), after.lines().count());
        let differing = before.lines().zip(after.lines()).filter(|(a, b)| a != b).count();
        let expected = if base.font_size.get(level) == size { 0 } else { 1 };
        prop_assert_eq!(differing, expected);
        prop_assert_eq!(preview_stylesheet(&changed), after);
    }

    #[test]
    fn clamped_width_stays_in_range(x in any::<f64>()) {
        let w = clamp_width(x);
        prop_assert!((MIN_WIDTH..=MAX_WIDTH).contains(&w));
    }

    #[test]
    fn drag_sequence_stays_in_range(moves in prop::collection::vec(-2000.0f64..4000.0, 1..20)) {
        let mut layout = SidebarLayout::default();
        prop_assert!(layout.begin_resize());
        for x in moves {
            layout.drag_to(x);
            prop_assert!((MIN_WIDTH..=MAX_WIDTH).contains(&layout.width()));
        }
        layout.end_resize();
        prop_assert!(!layout.is_resizing());
    }
}
