use web_sys::window;

use crate::constants::{DEFAULT_PAGE_PORT, SERVICE_PORT_OFFSET};

/// Derive the counter service origin from the page's own location: scheme and
/// hostname unchanged, port one above the page's (or above the default dev
/// port when the location has no explicit port).
pub fn derive_service_origin(protocol: &str, hostname: &str, port: Option<u16>) -> String {
    // u32 arithmetic: a page on port 65535 yields an unreachable-but-valid
    // URL instead of an overflow panic.
    let service_port =
        u32::from(port.unwrap_or(DEFAULT_PAGE_PORT)) + u32::from(SERVICE_PORT_OFFSET);
    format!("{}//{}:{}", protocol, hostname, service_port)
}

/// Service origin for the current page. Falls back to localhost defaults when
/// no window is available (non-browser builds, e.g. host-side tests).
pub fn service_origin_from_window() -> String {
    if let Some(window) = window() {
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "localhost".to_string());
        let port = location.port().ok().and_then(|p| p.parse::<u16>().ok());
        derive_service_origin(&protocol, &hostname, port)
    } else {
        derive_service_origin("http:", "localhost", None)
    }
}
