/// Port assumed for the page itself when the location has no explicit port.
pub const DEFAULT_PAGE_PORT: u16 = 3000;

/// The counter service listens one port above the page. Deployment-template
/// convention, not service discovery.
pub const SERVICE_PORT_OFFSET: u16 = 1;
