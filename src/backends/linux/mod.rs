#![cfg(target_os = "linux")]

//! Linux input backend.
//!
//! The udev/evdev implementation used by Sightline:
//! - **discovery** — udev enumeration, devnode ordering, and activation
//! - **device** — per-device event normalization and the evdev stream wrapper
//! - **module** — the [`InputModule`](crate::module::InputModule)
//!   implementation a host registers
//!
//! Most hosts should only touch [`UdevLightgunModule`]: call
//! [`init`](crate::module::InputModule::init) once, then
//! [`before_poll`](crate::module::InputModule::before_poll) every tick and
//! read device state through the accessors on
//! [`Lightgun`](device::Lightgun).

pub mod device;
pub mod discovery;
pub mod module;

pub use discovery::{enumerate_candidates, probe_lightguns, Candidate};
pub use module::UdevLightgunModule;
