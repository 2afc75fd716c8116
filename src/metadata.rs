//! Device metadata snapshot.
//!
//! [`DeviceMeta`] is a lightweight, cloneable description of a device suitable
//! for diagnostics, logging, and persistence. Discovery populates what udev
//! reports; unknown fields remain `None`.
//!
//! # Conventions
//! - `bus` is a short, human-readable bus hint like `"usb"` or `"bluetooth"`.
//! - `product_string` should be a friendly, user-facing name when available.
//! - `devnode`/`syspath` are kernel paths (opaque strings) useful for
//!   diagnostics.
//!
//! ## Persistence notes
//! - `vid`/`pid` and `serial_number` (when present) are generally stable and
//!   useful for re-identification.
//! - `devnode` may change across reboots and replugs; treat it as diagnostic
//!   first, identity second.

use serde::{Deserialize, Serialize};

/// Snapshot of metadata describing a single device.
///
/// All fields are optional; populate what is known from udev.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeviceMeta {
    /// High-level bus classification (e.g., `"usb"`, `"bluetooth"`).
    pub bus: Option<String>,

    /// USB Vendor ID (VID), if known.
    pub vid: Option<u16>,

    /// USB Product ID (PID), if known.
    pub pid: Option<u16>,

    /// Human-readable product name from the driver/firmware.
    pub product_string: Option<String>,

    /// Device serial number supplied by firmware/OS, if present.
    ///
    /// On USB, this usually maps to the iSerialNumber string.
    pub serial_number: Option<String>,

    /// Character-device node (`/dev/input/eventN`).
    pub devnode: Option<String>,

    /// Kernel sysfs path for the device.
    ///
    /// Useful for diagnostics; format is kernel-internal and should be
    /// treated as opaque.
    pub syspath: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_unknown_fields_as_null() {
        let meta = DeviceMeta {
            bus: Some("usb".into()),
            devnode: Some("/dev/input/event7".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("\"devnode\":\"/dev/input/event7\""));
        assert!(json.contains("\"vid\":null"));

        let back: DeviceMeta = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bus.as_deref(), Some("usb"));
        assert!(back.serial_number.is_none());
    }
}
