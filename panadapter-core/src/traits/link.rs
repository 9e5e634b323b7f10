//! Telemetry link presence indicator

/// Presence indicator for the telemetry link.
///
/// Foreground-polled; there is no state beyond the current boolean.
pub trait TelemetryIndicator {
    /// Whether the link is currently active
    fn is_active(&self) -> bool;
}
