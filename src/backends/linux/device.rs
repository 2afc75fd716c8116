#![cfg(target_os = "linux")]

//! Per-device event normalization and the evdev stream wrapper.
//!
//! [`Lightgun`] is the pure state machine: it consumes raw kernel events and
//! maintains the canonical [`LightgunState`]. It owns no file handle, which
//! keeps the whole normalization path testable without hardware.
//!
//! [`LightgunDevice`] pairs a `Lightgun` with its open `evdev::Device` and
//! drains the stream on each poll tick. The handle is closed when the wrapper
//! is dropped, at module teardown.
//!
//! # Button conventions
//! Kernel button codes map onto the first twelve slots of the sixteen-slot
//! bank; the remaining four are published but never driven by this backend.
//! A key event with value `1` latches [`BUTTON_PRESSED`]; release (`0`) and
//! autorepeat (`2`) both clear the slot.

use crate::axis::normalize_absolute;
use crate::error::DeviceError;
use crate::module::{default_button_name, ItemDesc, ItemKind};
use crate::state::{LightgunState, BUTTON_PRESSED, MAX_BUTTONS};

use evdev::{AbsoluteAxisCode, EventSummary, KeyCode};
use log::warn;

/// Kernel button code → button slot.
const BUTTON_MAP: &[(KeyCode, usize)] = &[
    (KeyCode::BTN_LEFT, 0),
    (KeyCode::BTN_RIGHT, 1),
    (KeyCode::BTN_MIDDLE, 2),
    (KeyCode::BTN_1, 3),
    (KeyCode::BTN_2, 4),
    (KeyCode::BTN_3, 5),
    (KeyCode::BTN_4, 6),
    (KeyCode::BTN_5, 7),
    (KeyCode::BTN_6, 8),
    (KeyCode::BTN_7, 9),
    (KeyCode::BTN_8, 10),
    (KeyCode::BTN_9, 11),
];

#[inline]
fn button_slot(code: KeyCode) -> Option<usize> {
    BUTTON_MAP
        .iter()
        .find(|(c, _)| *c == code)
        .map(|&(_, slot)| slot)
}

/// Inclusive calibration bounds for one absolute axis.
#[derive(Clone, Copy, Debug)]
pub struct AxisCalibration {
    pub min: i32,
    pub max: i32,
}

/// Event normalizer and state holder for a single activated device.
pub struct Lightgun {
    name: String,
    index: usize,
    calib_x: AxisCalibration,
    calib_y: AxisCalibration,
    state: LightgunState,
}

impl Lightgun {
    /// `name` may be empty; the kernel does not guarantee one.
    pub fn new(
        name: String,
        index: usize,
        calib_x: AxisCalibration,
        calib_y: AxisCalibration,
    ) -> Self {
        Self {
            name,
            index,
            calib_x,
            calib_y,
            state: LightgunState::new(),
        }
    }

    /// User-facing device name, possibly empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Activation index, unique and stable for the module's lifetime.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Apply one raw kernel event to this device's state.
    ///
    /// Unmapped button codes, axes other than `ABS_X`/`ABS_Y`, and event
    /// types other than key/absolute are ignored.
    pub fn process_event(&mut self, event: evdev::InputEvent) {
        match event.destructure() {
            EventSummary::Key(_, code, value) => {
                if let Some(slot) = button_slot(code) {
                    self.state.buttons[slot] = if value == 1 { BUTTON_PRESSED } else { 0 };
                }
            }
            EventSummary::AbsoluteAxis(_, axis, value) => match axis {
                AbsoluteAxisCode::ABS_X => {
                    self.state.x = normalize_absolute(value, self.calib_x.min, self.calib_x.max);
                }
                AbsoluteAxisCode::ABS_Y => {
                    self.state.y = normalize_absolute(value, self.calib_y.min, self.calib_y.max);
                }
                _ => {}
            },
            _ => {}
        }
    }

    /// Publish the control surface the host can bind against.
    ///
    /// All sixteen button slots are listed even though only twelve kernel
    /// codes drive them; hosts bind against the full bank.
    pub fn describe(&self) -> Vec<ItemDesc> {
        let mut items = Vec::with_capacity(MAX_BUTTONS + 2);
        for slot in 0..MAX_BUTTONS {
            items.push(ItemDesc {
                kind: ItemKind::Button,
                idx: slot,
                name: default_button_name(slot),
            });
        }
        items.push(ItemDesc {
            kind: ItemKind::Axis,
            idx: 0,
            name: "axis X".to_string(),
        });
        items.push(ItemDesc {
            kind: ItemKind::Axis,
            idx: 1,
            name: "axis Y".to_string(),
        });
        items
    }

    /// Read one published control by kind and index.
    ///
    /// Axis 0 is X, axis 1 is Y; anything unrecognized reads `0`.
    pub fn read_item(&self, kind: ItemKind, idx: usize) -> i32 {
        match kind {
            ItemKind::Button => self.state.button(idx),
            ItemKind::Axis => match idx {
                0 => self.state.x(),
                1 => self.state.y(),
                _ => 0,
            },
        }
    }

    /// Direct accessor for a button slot.
    #[inline]
    pub fn button(&self, slot: usize) -> i32 {
        self.state.button(slot)
    }

    /// Direct accessor for the horizontal axis.
    #[inline]
    pub fn x(&self) -> i32 {
        self.state.x()
    }

    /// Direct accessor for the vertical axis.
    #[inline]
    pub fn y(&self) -> i32 {
        self.state.y()
    }

    /// Zero all state, host-initiated.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

/// An activated device: open evdev handle plus its normalizer.
pub struct LightgunDevice {
    handle: evdev::Device,
    devnode: String,
    gun: Lightgun,
}

impl LightgunDevice {
    pub(crate) fn new(handle: evdev::Device, devnode: String, gun: Lightgun) -> Self {
        Self {
            handle,
            devnode,
            gun,
        }
    }

    /// Devnode this device was opened from.
    pub fn devnode(&self) -> &str {
        &self.devnode
    }

    pub fn gun(&self) -> &Lightgun {
        &self.gun
    }

    pub fn gun_mut(&mut self) -> &mut Lightgun {
        &mut self.gun
    }

    /// Drain every pending event on the stream and fold it into state.
    ///
    /// Runs until the kernel reports `WouldBlock`. Any other read error ends
    /// the drain for this tick only; the device is retried next tick.
    pub fn poll(&mut self) {
        loop {
            match self.handle.fetch_events() {
                Ok(events) => {
                    let mut drained = 0usize;
                    for event in events {
                        self.gun.process_event(event);
                        drained += 1;
                    }
                    if drained == 0 {
                        break;
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => break,
                Err(e) => {
                    let err = DeviceError::TransientRead {
                        path: self.devnode.clone(),
                        source: e,
                    };
                    warn!("[GUN/READ] {err}");
                    break;
                }
            }
        }
    }
}
