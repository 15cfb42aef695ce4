pub mod counter_api;

use counter_core::ConnectivityStatus;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use document::Stylesheet;

use crate::components::counter_view::CounterView;

/// Connectivity to the counter service. Written exactly once, by the probe
/// `CounterView` runs at mount; read by the banner below and by every
/// operation handler to pick remote-vs-local behavior.
pub static CONNECTIVITY_STATUS: GlobalSignal<ConnectivityStatus> =
    Global::new(|| ConnectivityStatus::Checking);

#[component]
pub fn App() -> Element {
    info!("App component loaded");

    rsx! {
        Stylesheet { href: asset!("./assets/main.css") }

        // Status indicator for the counter service connection
        div {
            class: "notification is-small connectivity-banner",
            style: {
                let status = CONNECTIVITY_STATUS.read();
                match &*status {
                    ConnectivityStatus::Connected => "background-color: #48c774; color: white;",
                    ConnectivityStatus::Checking => "background-color: #ffdd57; color: black;",
                    ConnectivityStatus::Error => "background-color: #f14668; color: white;",
                }
            },
            {
                let status = CONNECTIVITY_STATUS.read();
                match &*status {
                    ConnectivityStatus::Connected => "Connected",
                    ConnectivityStatus::Checking => "Checking...",
                    ConnectivityStatus::Error => "Offline",
                }
            }
        }

        div { class: "counter-container",
            CounterView {}
        }
    }
}
