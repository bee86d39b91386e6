//! Collapsible, resizable configuration sidebar.

use dioxus::prelude::*;
use gloo_events::EventListener;
use md2word_browser::{ConfigField, EditorController, HeadingLevel, clamp_width};
use wasm_bindgen::JsCast;
use web_time::Instant;

/// Window listeners that exist only while a resize drag is active.
struct DragListeners {
    _on_move: EventListener,
    _on_up: EventListener,
}

/// Route window mouse moves (as `clientX`) and the final mouse-up to callbacks.
///
/// Both listeners are removed when the returned handle is dropped.
fn install_drag_listeners(
    mut on_move: impl FnMut(f64) + 'static,
    mut on_up: impl FnMut() + 'static,
) -> Option<DragListeners> {
    let window = web_sys::window()?;

    let move_listener = EventListener::new(&window, "mousemove", move |event| {
        if let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() {
            on_move(f64::from(event.client_x()));
        }
    });
    let up_listener = EventListener::new(&window, "mouseup", move |_| on_up());

    Some(DragListeners {
        _on_move: move_listener,
        _on_up: up_listener,
    })
}

fn set_body_cursor(cursor: &str) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let _ = body.style().set_property("cursor", cursor);
}

#[component]
pub fn Sidebar() -> Element {
    let mut controller = use_context::<Signal<EditorController>>();
    let mut drag: Signal<Option<DragListeners>> = use_signal(|| None);

    // Listeners follow the drag state; removal happens here rather than in
    // the mouseup callback, which cannot drop itself.
    use_effect(move || {
        let resizing = controller.read().layout().is_resizing();
        if resizing == drag.peek().is_some() {
            return;
        }
        if resizing {
            set_body_cursor("col-resize");
            drag.set(install_drag_listeners(
                move |x| {
                    if controller.peek().layout().width() != clamp_width(x) {
                        controller.write().layout_mut().drag_to(x);
                    }
                },
                move || {
                    controller.write().layout_mut().end_resize();
                },
            ));
        } else {
            set_body_cursor("default");
            drag.set(None);
        }
    });

    let (layout, config) = {
        let c = controller.read();
        (*c.layout(), c.config().clone())
    };

    if !layout.is_open() {
        return rsx! {
            button {
                class: "sidebar-open",
                aria_label: "Open sidebar",
                onclick: move |_| controller.write().layout_mut().open(),
                "›"
            }
        };
    }

    let mut set = move |field: ConfigField| {
        controller.write().set_config_field(field, Instant::now());
    };

    rsx! {
        aside { class: "sidebar", style: "width: {layout.width()}px;",
            div { class: "sidebar-content",
                div { class: "sidebar-header",
                    h2 { "Configuration" }
                    button {
                        class: "sidebar-close",
                        aria_label: "Close sidebar",
                        onclick: move |_| controller.write().layout_mut().close(),
                        "‹"
                    }
                }

                section {
                    h3 { "Fonts" }
                    label { r#for: "font-en", "English Font" }
                    input {
                        id: "font-en",
                        r#type: "text",
                        value: "{config.font_family.english}",
                        oninput: move |evt| set(ConfigField::EnglishFont(evt.value())),
                    }
                    label { r#for: "font-cn", "Chinese Font" }
                    input {
                        id: "font-cn",
                        r#type: "text",
                        value: "{config.font_family.chinese}",
                        oninput: move |evt| set(ConfigField::ChineseFont(evt.value())),
                    }
                }

                section {
                    h3 { "Font Sizes (px)" }
                    for level in HeadingLevel::ALL {
                        div { key: "{level.label()}",
                            label { r#for: "fs-{level.label()}", class: "uppercase", "{level.label()}" }
                            input {
                                id: "fs-{level.label()}",
                                r#type: "number",
                                value: "{config.font_size.get(level)}",
                                oninput: move |evt| {
                                    set(ConfigField::font_size_from_input(level, &evt.value()))
                                },
                            }
                        }
                    }
                }

                section {
                    h3 { "Background Colors" }
                    label { r#for: "bg-md", "Markdown Panel" }
                    input {
                        id: "bg-md",
                        r#type: "color",
                        value: "{config.colors.markdown_bg}",
                        oninput: move |evt| set(ConfigField::MarkdownBackground(evt.value())),
                    }
                    label { r#for: "bg-word", "Word Panel" }
                    input {
                        id: "bg-word",
                        r#type: "color",
                        value: "{config.colors.word_bg}",
                        oninput: move |evt| set(ConfigField::WordBackground(evt.value())),
                    }
                }
            }
            div {
                class: "resize-handle",
                onmousedown: move |evt: MouseEvent| {
                    evt.prevent_default();
                    controller.write().layout_mut().begin_resize();
                },
            }
        }
    }
}
