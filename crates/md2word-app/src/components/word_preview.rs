//! Right panel: the editable, styled preview.
//!
//! The surface is seeded from the derived HTML and then belongs to the user.
//! It is only rebuilt when the HTML changes, which discards manual edits.

use dioxus::prelude::*;
use md2word_browser::{
    BrowserSurface, EditorController, ExportFile, FormatPainter, ListStyler, PREVIEW_CLASS,
    PainterOutcome, TextEditingSurface, copy_surface_text, download,
};

use super::toolbar::{EditorToolbar, ToolbarAction};

/// Element ID of the contenteditable surface.
pub const SURFACE_ID: &str = "word-preview-surface";

#[component]
pub fn WordPreview() -> Element {
    let mut controller = use_context::<Signal<EditorController>>();
    let mut painter = use_signal(FormatPainter::new);
    let mut lists = use_signal(ListStyler::default);

    let (key, html, bg) = {
        let c = controller.read();
        (
            c.preview().key(),
            c.preview().html().to_string(),
            c.config().colors.word_bg.clone(),
        )
    };

    let mut mark_edited = move || {
        if !controller.peek().preview().is_dirty() {
            controller.write().mark_preview_edited();
        }
    };

    let on_action = move |action: ToolbarAction| {
        let mut surface = BrowserSurface::new(SURFACE_ID);
        match action {
            ToolbarAction::Download => {
                let Some(inner) = surface.inner_html() else {
                    tracing::warn!("download skipped: preview not mounted");
                    return;
                };
                if let Err(e) = download(&ExportFile::from_surface_html(&inner)) {
                    tracing::warn!("{}", e);
                }
            }
            ToolbarAction::Copy => {
                spawn(async move {
                    if let Err(e) = copy_surface_text(&surface).await {
                        tracing::warn!("{}", e);
                    }
                });
            }
            ToolbarAction::Native(command) => match surface.exec_native_command(&command) {
                Ok(()) => mark_edited(),
                Err(e) => tracing::warn!("{}", e),
            },
            ToolbarAction::PainterClick => painter.write().click(&surface),
            ToolbarAction::PainterLock => painter.write().double_click(&surface),
            ToolbarAction::BulletStyle(style) => {
                if lists.write().set_bullet_style(style, &mut surface) {
                    mark_edited();
                }
            }
            ToolbarAction::NumberStyle(style) => {
                if lists.write().set_number_style(style, &mut surface) {
                    mark_edited();
                }
            }
            ToolbarAction::ApplyBullet => {
                if lists.peek().apply_bullet(&mut surface) {
                    mark_edited();
                }
            }
            ToolbarAction::ApplyNumber => {
                if lists.peek().apply_number(&mut surface) {
                    mark_edited();
                }
            }
        }
    };

    let on_mouse_up = move |_: MouseEvent| {
        if !painter.peek().is_active() {
            return;
        }
        let mut surface = BrowserSurface::new(SURFACE_ID);
        match painter.write().apply(&mut surface) {
            PainterOutcome::Wrapped | PainterOutcome::Inserted => mark_edited(),
            PainterOutcome::Idle | PainterOutcome::Skipped | PainterOutcome::Failed => {}
        }
    };

    let (painter_active, painter_locked) = {
        let p = painter.read();
        (p.is_active(), p.is_locked())
    };
    let styler = *lists.read();

    // Keyed on the preview generation: a new key mounts a fresh surface.
    let surface = rsx! {
        div {
            key: "{key}",
            id: SURFACE_ID,
            class: "{PREVIEW_CLASS} preview-surface",
            contenteditable: true,
            dangerous_inner_html: "{html}",
            onmouseup: on_mouse_up,
            oninput: move |_| mark_edited(),
        }
    };

    rsx! {
        div { class: "panel-body", style: "background-color: {bg};",
            EditorToolbar {
                on_action,
                painter_active,
                painter_locked,
                bullet: styler.bullet,
                number: styler.number,
            }
            {surface}
        }
    }
}
