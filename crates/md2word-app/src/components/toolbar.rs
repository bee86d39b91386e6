//! Rich-text toolbar above the preview.

use dioxus::prelude::*;
use md2word_browser::{BulletStyle, NativeCommand, NumberStyle};

/// Everything the toolbar can ask the preview to do.
#[derive(Clone, Debug, PartialEq)]
pub enum ToolbarAction {
    Download,
    Copy,
    Native(NativeCommand),
    PainterClick,
    PainterLock,
    BulletStyle(BulletStyle),
    ApplyBullet,
    NumberStyle(NumberStyle),
    ApplyNumber,
}

/// Editor toolbar with export, formatting, painter and list controls.
///
/// Buttons swallow `mousedown` so the preview keeps its selection.
#[component]
pub fn EditorToolbar(
    on_action: EventHandler<ToolbarAction>,
    painter_active: bool,
    painter_locked: bool,
    bullet: BulletStyle,
    number: NumberStyle,
) -> Element {
    let keep_selection = |evt: MouseEvent| evt.prevent_default();
    let painter_title = if painter_locked {
        "Format Painter (locked)"
    } else {
        "Format Painter"
    };

    rsx! {
        div { class: "editor-toolbar",
            button {
                class: "toolbar-button primary",
                title: "Download",
                onmousedown: keep_selection,
                onclick: move |_| on_action.call(ToolbarAction::Download),
                "⭳"
            }
            button {
                class: "toolbar-button",
                title: "Copy",
                onmousedown: keep_selection,
                onclick: move |_| on_action.call(ToolbarAction::Copy),
                "⧉"
            }
            select {
                class: "toolbar-select",
                onchange: move |evt: Event<FormData>| {
                    on_action.call(ToolbarAction::Native(NativeCommand::FontName(evt.value())))
                },
                option { "Font" }
                for font in NativeCommand::FONT_FAMILIES {
                    option { key: "{font}", value: "{font}", "{font}" }
                }
            }
            select {
                class: "toolbar-select",
                onchange: move |evt: Event<FormData>| {
                    if let Ok(size) = evt.value().parse::<u8>() {
                        on_action.call(ToolbarAction::Native(NativeCommand::FontSize(size)));
                    }
                },
                option { "Size" }
                for size in NativeCommand::FONT_SIZES {
                    option { key: "{size}", value: "{size}", "{size} (HTML)" }
                }
            }

            span { class: "toolbar-separator" }

            button {
                class: "toolbar-button",
                title: "Bold",
                onmousedown: keep_selection,
                onclick: move |_| on_action.call(ToolbarAction::Native(NativeCommand::Bold)),
                b { "B" }
            }
            button {
                class: "toolbar-button",
                title: "Italic",
                onmousedown: keep_selection,
                onclick: move |_| on_action.call(ToolbarAction::Native(NativeCommand::Italic)),
                i { "I" }
            }
            button {
                class: "toolbar-button",
                title: "Underline",
                onmousedown: keep_selection,
                onclick: move |_| on_action.call(ToolbarAction::Native(NativeCommand::Underline)),
                u { "U" }
            }

            span { class: "toolbar-separator" }

            input {
                r#type: "color",
                class: "toolbar-color",
                title: "Font Color",
                onchange: move |evt: Event<FormData>| {
                    on_action.call(ToolbarAction::Native(NativeCommand::ForeColor(evt.value())))
                },
            }
            button {
                class: if painter_active { "toolbar-button active" } else { "toolbar-button" },
                title: painter_title,
                onmousedown: keep_selection,
                onclick: move |_| on_action.call(ToolbarAction::PainterClick),
                ondoubleclick: move |_| on_action.call(ToolbarAction::PainterLock),
                "🖌"
            }

            span { class: "toolbar-separator" }

            label { class: "toolbar-label", "Bullet" }
            select {
                class: "toolbar-select",
                value: bullet.as_str(),
                onchange: move |evt: Event<FormData>| match evt.value().parse() {
                    Ok(style) => on_action.call(ToolbarAction::BulletStyle(style)),
                    Err(e) => tracing::warn!("{}", e),
                },
                for style in BulletStyle::ALL {
                    option {
                        key: "{style.as_str()}",
                        value: style.as_str(),
                        selected: style == bullet,
                        "{style.label()}"
                    }
                }
            }
            button {
                class: "toolbar-button text",
                onmousedown: keep_selection,
                onclick: move |_| on_action.call(ToolbarAction::ApplyBullet),
                "Apply"
            }

            span { class: "toolbar-separator" }

            label { class: "toolbar-label", "Number" }
            select {
                class: "toolbar-select",
                value: number.as_str(),
                onchange: move |evt: Event<FormData>| match evt.value().parse() {
                    Ok(style) => on_action.call(ToolbarAction::NumberStyle(style)),
                    Err(e) => tracing::warn!("{}", e),
                },
                for style in NumberStyle::ALL {
                    option {
                        key: "{style.as_str()}",
                        value: style.as_str(),
                        selected: style == number,
                        "{style.label()}"
                    }
                }
            }
            button {
                class: "toolbar-button text",
                onmousedown: keep_selection,
                onclick: move |_| on_action.call(ToolbarAction::ApplyNumber),
                "Apply"
            }
            button {
                class: "toolbar-button",
                title: "Increase Indent",
                onmousedown: keep_selection,
                onclick: move |_| on_action.call(ToolbarAction::Native(NativeCommand::Indent)),
                "⇥"
            }
            button {
                class: "toolbar-button",
                title: "Decrease Indent",
                onmousedown: keep_selection,
                onclick: move |_| on_action.call(ToolbarAction::Native(NativeCommand::Outdent)),
                "⇤"
            }
        }
    }
}
