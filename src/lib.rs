#![cfg_attr(docsrs, feature(doc_cfg))]

//! Sightline — udev/evdev lightgun input backend for Rust.
//!
//! Discovers lightgun-style pointing devices through the Linux input
//! subsystem, opens their raw event streams, and translates kernel events
//! into a calibrated per-device state (button bank plus two spatial axes)
//! that a host input framework reads through a small capability interface.

pub mod axis;
pub mod backends;
pub mod config;
pub mod error;
pub mod metadata;
pub mod module;
pub mod ordering;
pub mod state;

pub use config::{ModuleConfig, MAX_LIGHTGUNS};
pub use error::DeviceError;
pub use metadata::DeviceMeta;
pub use module::{HostContext, InputModule, ItemDesc, ItemKind};
pub use state::{LightgunState, BUTTON_PRESSED, MAX_BUTTONS};

#[cfg(target_os = "linux")]
pub use backends::linux::UdevLightgunModule;
