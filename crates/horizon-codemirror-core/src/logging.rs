//! Logging facilities for Horizon CodeMirror.
//!
//! Horizon CodeMirror uses the `tracing` crate for instrumentation. To see
//! logs, install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_codemirror=debug")
//!     .init();
//! ```
//!
//! Skipped lifecycle operations (no widget mounted, nothing to reconcile)
//! are logged at `debug`; every imperative call made on the widget is
//! logged at `trace`.

/// Span names used throughout Horizon CodeMirror for tracing.
///
/// These constants can be used to filter traces for specific lifecycle phases.
pub mod span_names {
    /// Widget construction and listener registration.
    pub const MOUNT: &str = "horizon_codemirror::mount";
    /// Property reconciliation after a caller-driven change.
    pub const UPDATE: &str = "horizon_codemirror::update";
    /// Listener removal and widget teardown.
    pub const UNMOUNT: &str = "horizon_codemirror::unmount";
    /// Signal emission span.
    pub const SIGNAL: &str = "horizon_codemirror::signal";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_codemirror_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_codemirror_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "horizon_codemirror_core::property";
    /// Mount/unmount target.
    pub const LIFECYCLE: &str = "horizon_codemirror::lifecycle";
    /// Value and option reconciliation target.
    pub const RECONCILE: &str = "horizon_codemirror::reconcile";
    /// Widget event forwarding target.
    pub const EVENTS: &str = "horizon_codemirror::events";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_codemirror::config";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_share_crate_prefixes() {
        for target in [targets::SIGNAL, targets::PROPERTY] {
            assert!(target.starts_with(targets::CORE));
        }
        for target in [targets::LIFECYCLE, targets::RECONCILE, targets::EVENTS, targets::CONFIG] {
            assert!(target.starts_with("horizon_codemirror::"));
        }
    }
}
