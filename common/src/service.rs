use std::cell::RefCell;
use std::rc::Rc;

use crate::error::CounterApiError;
use crate::state::CounterState;
use crate::wire::CounterSnapshot;

/// Transport contract for the counter service.
///
/// The UI crate implements this over HTTP; tests substitute a recording mock.
/// Futures are deliberately not `Send`, everything runs on the browser's
/// single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait CounterService {
    /// Liveness request against the service root; any 2xx is alive.
    async fn probe(&self) -> Result<(), CounterApiError>;

    /// Current counter snapshot.
    async fn fetch(&self) -> Result<CounterSnapshot, CounterApiError>;

    /// Increment by one, returning the new snapshot.
    async fn increment(&self) -> Result<CounterSnapshot, CounterApiError>;

    /// Reset to zero, returning the new snapshot.
    async fn reset(&self) -> Result<CounterSnapshot, CounterApiError>;
}

/// Mutable handle to the state owned by the counter view.
///
/// The UI crate backs this with a Dioxus `Signal`; the `Rc<RefCell<_>>` impl
/// below lets the flows run under a plain host executor in tests. Borrows are
/// scoped to the closure and never held across an await.
pub trait StateHandle {
    fn with_mut(&mut self, f: impl FnOnce(&mut CounterState));

    fn snapshot(&self) -> CounterState;
}

impl StateHandle for Rc<RefCell<CounterState>> {
    fn with_mut(&mut self, f: impl FnOnce(&mut CounterState)) {
        f(&mut self.borrow_mut());
    }

    fn snapshot(&self) -> CounterState {
        self.borrow().clone()
    }
}
