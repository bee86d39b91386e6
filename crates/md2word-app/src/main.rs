use dioxus::prelude::*;
use md2word_browser::{AppMode, DIAMOND_MARKER_RULE, EditorController, HostArgs, app_mode};

use components::{MarkdownInput, Sidebar, WordPreview};

/// Shared components for the three panels.
mod components;
mod host;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Set up better panic messages for wasm
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    console_error_panic_hook::set_once();

    // Must happen before dioxus::launch so dioxus skips its own init
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    {
        use tracing::Level;
        use tracing::subscriber::set_global_default;
        use tracing_subscriber::Registry;
        use tracing_subscriber::layer::SubscriberExt;

        let console_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };

        let wasm_layer = tracing_wasm::WASMLayer::new(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(console_level)
                .build(),
        );

        let reg = Registry::default().with(wasm_layer);

        let _ = set_global_default(reg);
    }

    dioxus::launch(App);
}

fn initial_controller(mode: AppMode) -> EditorController {
    match mode {
        AppMode::Standalone => EditorController::default(),
        // Empty until the host's first render arrives.
        AppMode::Embedded => EditorController::embedded(HostArgs::default()),
    }
}

#[component]
fn App() -> Element {
    let mode = use_hook(app_mode);
    let controller = use_signal(|| initial_controller(mode));
    let controller = use_context_provider(|| controller);
    host::use_host_sync(controller, mode);

    use_hook(move || tracing::info!(?mode, "md2word started"));

    let stylesheet = controller.read().stylesheet().to_string();

    rsx! {
        Stylesheet { href: MAIN_CSS }
        style { "{stylesheet}" }
        style { {DIAMOND_MARKER_RULE} }
        div { class: "app-shell",
            Sidebar {}
            main { class: "panels",
                div { class: "panel panel-markdown", MarkdownInput {} }
                div { class: "panel panel-preview", WordPreview {} }
            }
        }
    }
}
