//! HTTP integration with the counter service.

pub mod client;

pub use client::HttpCounterClient;

use counter_core::service::StateHandle;
use counter_core::CounterState;
use dioxus::prelude::*;

/// `StateHandle` over the Dioxus signal owned by `CounterView`, so the
/// operation flows in `counter-core` can drive the UI state directly.
#[derive(Clone, Copy)]
pub struct SignalState(pub Signal<CounterState>);

impl StateHandle for SignalState {
    fn with_mut(&mut self, f: impl FnOnce(&mut CounterState)) {
        f(&mut self.0.write());
    }

    fn snapshot(&self) -> CounterState {
        self.0.peek().clone()
    }
}
