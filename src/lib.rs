/// Decoded events leave the driver here
pub mod event_dispatcher;

/// Hanvon wire protocol: report layouts, device table, decoder dispatch
pub mod tablet_driver;

/// Raw input transports (USB)
pub mod input_devices;

/// Per-connection routing from raw reports to a sink
pub mod event_router;

/// Normalized tablet events
pub mod event_model;

/// Daemon settings loaded from TOML
pub mod config;

/// Library error type
pub mod error;

pub use error::{Error, Result};

// One reader thread and one router thread per tablet. The reader owns the USB
// handle and only moves bytes; the router owns the decode state and the sink,
// so a report is fully applied (events + sync) before the next one is looked
// at.
