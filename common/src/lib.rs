pub mod error;
pub mod flows;
pub mod service;
pub mod state;
pub mod util;
pub mod wire;

pub use error::CounterApiError;
pub use state::{ConnectivityStatus, CounterState};
pub use wire::{CounterSnapshot, IncrementRequest};

#[cfg(test)]
mod proptest_tests;
