//! Wires the controller's host sync to the parent frame.
//!
//! Standalone pages get the same hooks, they just never connect.

use dioxus::prelude::*;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use md2word_browser::{AppMode, EditorController, HostBridge};
use web_time::Instant;

pub fn use_host_sync(mut controller: Signal<EditorController>, mode: AppMode) {
    let bridge = use_hook(move || match mode {
        AppMode::Embedded => HostBridge::connect()
            .inspect_err(|e| tracing::warn!("embedded mode without a host frame: {}", e))
            .ok(),
        AppMode::Standalone => None,
    });

    // Handles live in signals so they are dropped (and cancelled) with the app
    // or when replaced.
    let mut listener: Signal<Option<EventListener>> = use_signal(|| None);
    let mut timer: Signal<Option<Timeout>> = use_signal(|| None);

    let ready_bridge = bridge.clone();
    use_effect(move || {
        let Some(bridge) = ready_bridge.clone() else {
            return;
        };
        // Announce before anything else so the host does not time out.
        if let Err(e) = bridge.announce_ready() {
            tracing::warn!("component ready not sent: {}", e);
        }
        listener.set(Some(bridge.on_render(move |args| {
            controller.write().apply_host_args(args);
        })));
    });

    // Bumped by a timer that fired before the deadline; re-runs the effect
    // below so a fresh timer covers the remaining wait.
    let mut rearm = use_signal(|| 0u32);

    let push_bridge = bridge.clone();
    use_effect(move || {
        let _ = rearm.read();
        let Some(wait) = controller.read().host_push_wait(Instant::now()) else {
            return;
        };
        let Some(bridge) = push_bridge.clone() else {
            return;
        };
        let millis = u32::try_from(wait.as_millis().saturating_add(1)).unwrap_or(u32::MAX);

        // Replacing the handle cancels the previous timeout.
        timer.set(Some(Timeout::new(millis, move || {
            let now = Instant::now();
            let wait = controller.peek().host_push_wait(now);
            match wait {
                None => {}
                Some(left) if !left.is_zero() => {
                    tracing::trace!(?left, "push timer fired early, re-arming");
                    *rearm.write() += 1;
                }
                Some(_) => {
                    let Some(value) = controller.write().take_host_push(now) else {
                        return;
                    };
                    if let Err(e) = bridge.send_value(value) {
                        tracing::warn!("state push failed: {}", e);
                    }
                }
            }
        })));
    });

    let height_bridge = bridge;
    use_effect(move || {
        // Subscribe only: text, config and sidebar changes all move the layout.
        let _ = controller.read();
        if let Some(bridge) = &height_bridge {
            if let Err(e) = bridge.report_height() {
                tracing::debug!("frame height not sent: {}", e);
            }
        }
    });
}
