//! Input backends for `sightline`.
//!
//! Platform-specific implementations of
//! [`InputModule`](crate::module::InputModule). Only the Linux udev/evdev
//! backend exists today; the platform-neutral core (ordering, axis mapping,
//! state, configuration) compiles everywhere so hosts can unit-test against
//! it on any OS.

#[cfg(target_os = "linux")]
#[cfg_attr(docsrs, doc(cfg(target_os = "linux")))]
pub mod linux;
