//! Left panel: Markdown source with file upload.

use dioxus::prelude::*;
use md2word_browser::{
    ACCEPTED_EXTENSIONS, EditorController, PLACEHOLDER, decode_upload, has_accepted_extension,
};
use web_time::Instant;

#[component]
pub fn MarkdownInput() -> Element {
    let mut controller = use_context::<Signal<EditorController>>();

    let (text, bg) = {
        let c = controller.read();
        (c.markdown().to_string(), c.config().colors.markdown_bg.clone())
    };

    let on_file_change = move |evt: Event<FormData>| {
        spawn(async move {
            let files = evt.files();
            let Some(file) = files.first() else {
                return;
            };
            let name = file.name();
            if !has_accepted_extension(&name) {
                tracing::debug!(%name, "reading file outside the suggested extensions");
            }
            let read = file
                .read_bytes()
                .await
                .map(|bytes| bytes.to_vec())
                .map_err(|e| e.to_string());
            controller
                .write()
                .accept_upload(decode_upload(&name, read), Instant::now());
        });
    };

    rsx! {
        div { class: "panel-body", style: "background-color: {bg};",
            div { class: "panel-header",
                h2 { "Markdown" }
                label { class: "upload-button",
                    "Upload File"
                    input {
                        r#type: "file",
                        accept: ACCEPTED_EXTENSIONS,
                        class: "hidden",
                        onchange: on_file_change,
                    }
                }
            }
            textarea {
                class: "markdown-textarea",
                value: "{text}",
                placeholder: PLACEHOLDER,
                spellcheck: false,
                oninput: move |evt| {
                    controller.write().set_text(evt.value(), Instant::now());
                },
            }
        }
    }
}
