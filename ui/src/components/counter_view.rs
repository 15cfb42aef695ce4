use counter_core::flows::{increment_counter, load_counter, probe_connectivity, reset_counter};
use counter_core::util::format_timestamp;
use counter_core::CounterState;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::app::counter_api::{HttpCounterClient, SignalState};
use crate::components::app::CONNECTIVITY_STATUS;

/// Stamped by `build.rs` so the footer shows which build is deployed.
const BUILD_TIMESTAMP_ISO: &str = env!("BUILD_TIMESTAMP_ISO");

/// The counter page: count, mutating buttons and the error notification.
///
/// Owns all counter state. The probe runs once from the mount effect and is
/// the only writer of `CONNECTIVITY_STATUS`. The buttons are disabled while a
/// request is pending, but that is a UI affordance rather than a lock:
/// overlapping invocations are not guarded against and in-flight requests are
/// never cancelled.
#[component]
pub fn CounterView() -> Element {
    let mut state = use_signal(CounterState::new);

    // One-time probe, then the initial snapshot if the service is up.
    use_effect(move || {
        spawn_local(async move {
            let client = HttpCounterClient::from_window();
            let status = probe_connectivity(&client).await;
            info!("Connectivity probe finished: {:?}", status);
            *CONNECTIVITY_STATUS.write() = status.clone();
            load_counter(&client, &status, &mut SignalState(state)).await;
        });
    });

    let on_increment = move |_| {
        spawn_local(async move {
            let client = HttpCounterClient::from_window();
            let status = CONNECTIVITY_STATUS.read().clone();
            increment_counter(&client, &status, &mut SignalState(state)).await;
        });
    };

    let on_reset = move |_| {
        spawn_local(async move {
            let client = HttpCounterClient::from_window();
            let status = CONNECTIVITY_STATUS.read().clone();
            reset_counter(&client, &status, &mut SignalState(state)).await;
        });
    };

    let on_refresh = move |_| {
        spawn_local(async move {
            let client = HttpCounterClient::from_window();
            let status = CONNECTIVITY_STATUS.read().clone();
            load_counter(&client, &status, &mut SignalState(state)).await;
        });
    };

    let current = state.read();
    let last_updated = format_timestamp(&current.last_updated);
    let build_time = format_timestamp(BUILD_TIMESTAMP_ISO);

    rsx! {
        div { class: "card counter-card",
            h1 { class: "title", "Counter" }

            p { class: "counter-value", "{current.count}" }
            p { class: "counter-updated", "Last updated: {last_updated}" }

            if CONNECTIVITY_STATUS.read().is_error() {
                p { class: "offline-hint",
                    "Counter service unreachable; changes stay on this page."
                }
            }

            {
                let error = current.error_message.clone();
                match error {
                    Some(message) => rsx! {
                        div { class: "notification is-danger",
                            button {
                                class: "delete",
                                onclick: move |_| state.write().error_message = None,
                            }
                            "{message}"
                        }
                    },
                    None => rsx! {},
                }
            }

            div { class: "buttons",
                button {
                    class: "button is-primary",
                    disabled: current.is_loading,
                    onclick: on_increment,
                    "Increment"
                }
                button {
                    class: "button is-light",
                    disabled: current.is_loading,
                    onclick: on_reset,
                    "Reset"
                }
                button {
                    class: "button is-light",
                    disabled: current.is_loading,
                    onclick: on_refresh,
                    "Refresh"
                }
            }

            p { class: "build-info", "Build: {build_time}" }
        }
    }
}
