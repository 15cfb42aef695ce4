//! Operation flows driving the counter view.
//!
//! Each flow decides remote-vs-local from the probe result and keeps
//! `is_loading` true strictly while a request is pending. Failures never
//! propagate past a flow; they end up in `error_message` or in a local
//! fallback mutation.

use log::{error, info};

use crate::service::{CounterService, StateHandle};
use crate::state::ConnectivityStatus;
use crate::util::now_iso;

/// One-time liveness check against the service root. The caller writes the
/// result into the write-once status; nothing re-probes afterwards.
pub async fn probe_connectivity<S: CounterService>(service: &S) -> ConnectivityStatus {
    match service.probe().await {
        Ok(()) => {
            info!("Counter service reachable, starting in connected mode");
            ConnectivityStatus::Connected
        }
        Err(e) => {
            error!("Connectivity probe failed, staying local: {}", e);
            ConnectivityStatus::Error
        }
    }
}

/// Fetch the current snapshot. Unlike increment and reset this has no local
/// fallback: on failure the previous count stays on screen and only the
/// error message changes. A no-op in local mode.
pub async fn load_counter<S, H>(service: &S, status: &ConnectivityStatus, state: &mut H)
where
    S: CounterService,
    H: StateHandle,
{
    if status.is_error() {
        return;
    }

    state.with_mut(|s| {
        s.is_loading = true;
        s.error_message = None;
    });

    match service.fetch().await {
        Ok(snapshot) => {
            info!("Loaded counter: {}", snapshot.message);
            state.with_mut(|s| {
                s.apply_snapshot(&snapshot);
                s.is_loading = false;
            });
        }
        Err(e) => {
            error!("Failed to load counter: {}", e);
            state.with_mut(|s| {
                s.error_message = Some(format!("Failed to load counter: {}", e));
                s.is_loading = false;
            });
        }
    }
}

/// Increment by one. In local mode no request is attempted; on a request
/// failure the error is recorded and the click still lands locally.
pub async fn increment_counter<S, H>(service: &S, status: &ConnectivityStatus, state: &mut H)
where
    S: CounterService,
    H: StateHandle,
{
    state.with_mut(|s| {
        s.is_loading = true;
        s.error_message = None;
    });

    if status.is_error() {
        state.with_mut(|s| {
            s.apply_local_increment(&now_iso());
            s.is_loading = false;
        });
        return;
    }

    match service.increment().await {
        Ok(snapshot) => {
            info!("Incremented counter: {}", snapshot.message);
            state.with_mut(|s| {
                s.apply_snapshot(&snapshot);
                s.is_loading = false;
            });
        }
        Err(e) => {
            error!("Failed to increment counter, applying locally: {}", e);
            state.with_mut(|s| {
                s.error_message = Some(format!("Failed to increment counter: {}", e));
                s.apply_local_increment(&now_iso());
                s.is_loading = false;
            });
        }
    }
}

/// Reset to zero, symmetric to [`increment_counter`].
pub async fn reset_counter<S, H>(service: &S, status: &ConnectivityStatus, state: &mut H)
where
    S: CounterService,
    H: StateHandle,
{
    state.with_mut(|s| {
        s.is_loading = true;
        s.error_message = None;
    });

    if status.is_error() {
        state.with_mut(|s| {
            s.apply_local_reset(&now_iso());
            s.is_loading = false;
        });
        return;
    }

    match service.reset().await {
        Ok(snapshot) => {
            info!("Reset counter: {}", snapshot.message);
            state.with_mut(|s| {
                s.apply_snapshot(&snapshot);
                s.is_loading = false;
            });
        }
        Err(e) => {
            error!("Failed to reset counter, applying locally: {}", e);
            state.with_mut(|s| {
                s.error_message = Some(format!("Failed to reset counter: {}", e));
                s.apply_local_reset(&now_iso());
                s.is_loading = false;
            });
        }
    }
}
