#![cfg(target_os = "linux")]

//! The udev lightgun module.
//!
//! [`UdevLightgunModule`] owns the device registry and implements
//! [`InputModule`]. Lifecycle:
//!
//! - `init` runs discovery once and fills the registry; insertion order is
//!   activation order is index order, and the registry is never reordered.
//! - `before_poll` drains every device in index order, so the host observes
//!   state updates in a fixed device sequence each tick.
//! - Dropping the module drops every device, which closes every stream.
//!   There is no separate shutdown call.

use crate::module::{HostContext, InputModule};

use super::device::LightgunDevice;
use super::discovery::probe_lightguns;

use log::debug;

/// Registry owner and host entry point for the Linux backend.
#[derive(Default)]
pub struct UdevLightgunModule {
    guns: Vec<LightgunDevice>,
}

impl UdevLightgunModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activated devices in index order.
    pub fn devices(&self) -> &[LightgunDevice] {
        &self.guns
    }

    /// Device at activation index `index`, if one exists.
    pub fn device(&self, index: usize) -> Option<&LightgunDevice> {
        self.guns.get(index)
    }

    /// Zero every device's state, host-initiated (e.g. on focus loss).
    pub fn reset_all(&mut self) {
        for dev in &mut self.guns {
            dev.gun_mut().reset();
        }
    }
}

impl InputModule for UdevLightgunModule {
    /// udev is part of the platform; if we compiled for Linux we can run.
    fn probe(&self) -> bool {
        true
    }

    fn init(&mut self, host: &HostContext) {
        debug!("[GUN/INIT] begin udev initialization");
        self.guns = probe_lightguns(&host.config);
        debug!(
            "[GUN/INIT] end udev initialization, {} device(s) active",
            self.guns.len()
        );
    }

    fn should_poll(&self, host: &HostContext) -> bool {
        host.input_enabled
    }

    fn before_poll(&mut self, host: &HostContext) {
        if !self.should_poll(host) {
            return;
        }
        for dev in &mut self.guns {
            dev.poll();
        }
    }
}
