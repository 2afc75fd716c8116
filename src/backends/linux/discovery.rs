#![cfg(target_os = "linux")]

//! udev device discovery and activation.
//!
//! The discovery pipeline:
//!
//! - Enumerate `input`-subsystem devices via udev, matched on a marker
//!   property (default `ID_INPUT_MOUSE=1`)
//! - Sort candidates by devnode with
//!   [`devnode_cmp`](crate::ordering::devnode_cmp) so activation indices are
//!   deterministic
//! - Open each devnode read-only and non-blocking, query its name and
//!   absolute-axis calibration, and wrap it as a
//!   [`LightgunDevice`](super::device::LightgunDevice)
//!
//! Activation is skip-and-continue: a candidate that cannot be opened or
//! lacks either spatial axis is logged and dropped, and the loop moves on.
//! Indices are assigned sequentially to the devices that survive, so a
//! failed candidate never leaves a hole.

use crate::config::ModuleConfig;
use crate::error::DeviceError;
use crate::metadata::DeviceMeta;
use crate::ordering::devnode_cmp;

use super::device::{AxisCalibration, Lightgun, LightgunDevice};

use evdev::AbsoluteAxisCode;
use log::{debug, warn};

/// A udev match that has not been opened yet.
///
/// Ephemeral: consumed by ordering and activation during `init`.
#[derive(Clone, Debug)]
pub struct Candidate {
    /// Character-device node (`/dev/input/eventN`).
    pub devnode: String,
    /// Kernel sysfs path.
    pub syspath: String,
    /// Best-effort metadata snapshot from udev properties.
    pub meta: DeviceMeta,
}

/// Query udev for candidate devices.
///
/// Matches `subsystem == "input"` and `match_property == "1"`. Entries
/// without a devnode are skipped. If udev itself cannot be queried the
/// failure is logged and an empty list is returned; a host without udev
/// simply sees no devices.
pub fn enumerate_candidates(match_property: &str) -> Vec<Candidate> {
    match scan(match_property) {
        Ok(found) => found,
        Err(e) => {
            warn!("[GUN/ENUM] {}", DeviceError::SubsystemUnavailable(e));
            Vec::new()
        }
    }
}

fn scan(match_property: &str) -> std::io::Result<Vec<Candidate>> {
    let mut enumerator = udev::Enumerator::new()?;
    enumerator.match_subsystem("input")?;
    enumerator.match_property(match_property, "1")?;

    let mut out = Vec::new();
    for device in enumerator.scan_devices()? {
        let Some(devnode) = device.devnode() else {
            continue;
        };
        let devnode = devnode.to_string_lossy().into_owned();
        let syspath = device.syspath().to_string_lossy().into_owned();
        let meta = meta_from_udev(&device, &devnode, &syspath);
        out.push(Candidate {
            devnode,
            syspath,
            meta,
        });
    }
    Ok(out)
}

fn property(device: &udev::Device, key: &str) -> Option<String> {
    device
        .property_value(key)
        .map(|v| v.to_string_lossy().into_owned())
}

/// Build a lightweight [`DeviceMeta`] snapshot from udev properties.
///
/// Fields are best-effort; unknown values remain `None`.
fn meta_from_udev(device: &udev::Device, devnode: &str, syspath: &str) -> DeviceMeta {
    let parse_hex16 = |s: String| u16::from_str_radix(s.trim_start_matches("0x"), 16).ok();
    DeviceMeta {
        bus: property(device, "ID_BUS"),
        vid: property(device, "ID_VENDOR_ID").and_then(parse_hex16),
        pid: property(device, "ID_MODEL_ID").and_then(parse_hex16),
        product_string: property(device, "ID_MODEL")
            .or_else(|| property(device, "NAME"))
            .map(|s| s.replace('_', " ")),
        serial_number: property(device, "ID_SERIAL_SHORT"),
        devnode: Some(devnode.to_string()),
        syspath: Some(syspath.to_string()),
    }
}

/// Sort candidates into activation order, in place.
pub(crate) fn sort_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| devnode_cmp(&a.devnode, &b.devnode));
}

/// Open one candidate and wrap it as a [`LightgunDevice`].
///
/// The handle is opened non-blocking so poll-time reads never stall the
/// host tick. A missing name is tolerated; missing calibration on either
/// spatial axis is not, and drops the handle.
fn activate(candidate: &Candidate, index: usize) -> Result<LightgunDevice, DeviceError> {
    let handle =
        evdev::Device::open(&candidate.devnode).map_err(|e| DeviceError::StreamOpen {
            path: candidate.devnode.clone(),
            source: e,
        })?;
    handle
        .set_nonblocking(true)
        .map_err(|e| DeviceError::StreamOpen {
            path: candidate.devnode.clone(),
            source: e,
        })?;

    let name = handle.name().unwrap_or("").to_string();

    let mut calib_x = None;
    let mut calib_y = None;
    let abs_info = handle
        .get_absinfo()
        .map_err(|e| DeviceError::Calibration {
            path: candidate.devnode.clone(),
            source: e,
        })?;
    for (axis, info) in abs_info {
        let calib = AxisCalibration {
            min: info.minimum(),
            max: info.maximum(),
        };
        match axis {
            AbsoluteAxisCode::ABS_X => calib_x = Some(calib),
            AbsoluteAxisCode::ABS_Y => calib_y = Some(calib),
            _ => {}
        }
    }

    let calib_x = calib_x.ok_or(DeviceError::MissingAxis {
        path: candidate.devnode.clone(),
        axis: "ABS_X",
    })?;
    let calib_y = calib_y.ok_or(DeviceError::MissingAxis {
        path: candidate.devnode.clone(),
        axis: "ABS_Y",
    })?;

    // NOTE: this is intentionally verbose for development and device bring-up.
    #[cfg(all(feature = "debug-log", debug_assertions))]
    debug!(
        "[GUN/OPEN] devnode={} name={:?} x=[{}..{}] y=[{}..{}] meta={:?}",
        candidate.devnode, name, calib_x.min, calib_x.max, calib_y.min, calib_y.max, candidate.meta
    );

    let gun = Lightgun::new(name, index, calib_x, calib_y);
    Ok(LightgunDevice::new(handle, candidate.devnode.clone(), gun))
}

/// Full discovery: enumerate, order, and activate up to the configured cap.
///
/// The cap applies after ordering, so which devices get cut when there are
/// too many is as deterministic as the order itself. Activation failures are
/// logged and skipped; surviving devices receive indices `0..n` in order.
pub fn probe_lightguns(config: &ModuleConfig) -> Vec<LightgunDevice> {
    let mut candidates = enumerate_candidates(&config.match_property);
    sort_candidates(&mut candidates);
    debug!(
        "[GUN/ENUM] {} candidate(s) matched {}",
        candidates.len(),
        config.match_property
    );

    let max = config.effective_max();
    let mut devices: Vec<LightgunDevice> = Vec::new();
    for candidate in &candidates {
        if devices.len() >= max {
            break;
        }
        match activate(candidate, devices.len()) {
            Ok(device) => {
                debug!(
                    "[GUN/ADD] #{} {} ({:?})",
                    device.gun().index(),
                    device.devnode(),
                    device.gun().name()
                );
                devices.push(device);
            }
            Err(err) => {
                warn!("[GUN/SKIP] {err}");
            }
        }
    }
    devices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(devnode: &str) -> Candidate {
        Candidate {
            devnode: devnode.to_string(),
            syspath: format!("/sys/devices/virtual{devnode}"),
            meta: DeviceMeta::default(),
        }
    }

    #[test]
    fn candidates_sort_by_devnode_numerically() {
        let mut list = vec![
            candidate("/dev/input/event12"),
            candidate("/dev/input/event3"),
            candidate("/dev/input/event7"),
        ];
        sort_candidates(&mut list);
        let order: Vec<&str> = list.iter().map(|c| c.devnode.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "/dev/input/event3",
                "/dev/input/event7",
                "/dev/input/event12",
            ]
        );
    }

    #[test]
    fn activation_failure_yields_stream_open() {
        let missing = candidate("/dev/input/hopefully-not-a-real-node");
        match activate(&missing, 0) {
            Err(DeviceError::StreamOpen { path, .. }) => {
                assert_eq!(path, missing.devnode);
            }
            Err(other) => panic!("expected StreamOpen, got {other}"),
            Ok(_) => panic!("activation of a missing devnode succeeded"),
        }
    }

    #[test]
    fn two_device_scenario_orders_then_isolates() {
        use crate::state::BUTTON_PRESSED;
        use evdev::{EventType, InputEvent, KeyCode};

        // event3 activates before event14 despite raw string order.
        let mut list = vec![candidate("/dev/input/event14"), candidate("/dev/input/event3")];
        sort_candidates(&mut list);
        assert_eq!(list[0].devnode, "/dev/input/event3");

        let calib = AxisCalibration { min: 0, max: 1023 };
        let mut guns: Vec<Lightgun> = list
            .iter()
            .enumerate()
            .map(|(i, c)| Lightgun::new(c.devnode.clone(), i, calib, calib))
            .collect();
        for (i, gun) in guns.iter().enumerate() {
            assert_eq!(gun.index(), i);
        }

        // A left-button press arriving only on device 1's stream.
        guns[1].process_event(InputEvent::new(EventType::KEY.0, KeyCode::BTN_LEFT.0, 1));
        assert_eq!(guns[1].button(0), BUTTON_PRESSED);
        assert_eq!(guns[0].button(0), 0);
        assert_eq!(guns[0].x(), 0);
        assert_eq!(guns[0].y(), 0);
    }

    #[test]
    fn probe_with_unmatchable_property_finds_nothing() {
        let cfg = ModuleConfig {
            match_property: "ID_SIGHTLINE_TEST_NO_SUCH_PROPERTY".into(),
            ..Default::default()
        };
        assert!(probe_lightguns(&cfg).is_empty());
    }
}
