//! Backend error taxonomy.
//!
//! Every variant here is handled inside the backend: discovery and polling
//! log the failure and degrade (fewer devices, a skipped tick) instead of
//! surfacing errors to the host. The enum still exists as a real type so the
//! log sites stay uniform and the demos can print something meaningful.

use thiserror::Error;

/// Failures the Linux backend can hit while finding, opening, or reading
/// devices.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// udev itself could not be queried; enumeration yields no candidates.
    #[error("input subsystem unavailable: {0}")]
    SubsystemUnavailable(#[source] std::io::Error),

    /// The event stream could not be opened; the candidate is skipped.
    #[error("failed to open event stream {path}: {source}")]
    StreamOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The calibration query failed outright; the candidate is skipped.
    #[error("calibration query failed for {path}: {source}")]
    Calibration {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The device does not report the required absolute axis; the candidate
    /// is skipped.
    #[error("{path} is missing required absolute axis {axis}")]
    MissingAxis { path: String, axis: &'static str },

    /// A poll-time read failed with something other than `WouldBlock`; the
    /// device sits out the current tick and is retried on the next one.
    #[error("transient read failure on {path}: {source}")]
    TransientRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_devnode() {
        let err = DeviceError::MissingAxis {
            path: "/dev/input/event5".into(),
            axis: "ABS_Y",
        };
        let text = err.to_string();
        assert!(text.contains("/dev/input/event5"));
        assert!(text.contains("ABS_Y"));
    }

    #[test]
    fn stream_open_preserves_the_source() {
        use std::error::Error as _;
        let err = DeviceError::StreamOpen {
            path: "/dev/input/event2".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.source().is_some());
    }
}
