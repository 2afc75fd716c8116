//! Host-facing capability interface.
//!
//! A host input framework drives a backend through [`InputModule`]:
//!
//! - [`probe`](InputModule::probe) — is this backend usable on the running
//!   platform at all?
//! - [`init`](InputModule::init) — discover and activate devices once.
//! - [`should_poll`](InputModule::should_poll) — consulted every tick before
//!   polling; lets the host gate input delivery (menus, pause, focus loss).
//! - [`before_poll`](InputModule::before_poll) — drain pending OS events into
//!   device state ahead of the host reading that state.
//!
//! The host owns scheduling: it decides when ticks happen and how module
//! registration works. The backend only fills in the four hooks.
//!
//! [`ItemDesc`] is the per-control binding surface a device publishes so the
//! host can enumerate and name everything it may read.

use crate::config::ModuleConfig;

/// Per-tick context handed to the module by the host.
#[derive(Clone, Debug)]
pub struct HostContext {
    /// Backend configuration, fixed for the lifetime of the module.
    pub config: ModuleConfig,
    /// Whether the host currently wants input delivered.
    pub input_enabled: bool,
}

impl Default for HostContext {
    fn default() -> Self {
        Self {
            config: ModuleConfig::default(),
            input_enabled: true,
        }
    }
}

/// Category of a published control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Button,
    Axis,
}

/// One control a device exposes to the host.
#[derive(Clone, Debug)]
pub struct ItemDesc {
    /// Control category.
    pub kind: ItemKind,
    /// Device-local index within the category (button slot or axis number).
    pub idx: usize,
    /// Stable user-facing label (`"Button 1"`, `"axis X"`).
    pub name: String,
}

/// Default label for button slot `slot` (zero-based): `"Button 1"` upward.
pub fn default_button_name(slot: usize) -> String {
    format!("Button {}", slot + 1)
}

/// Contract between the host framework and an input backend.
pub trait InputModule {
    /// Whether the backend can run on this platform. Called before `init`.
    fn probe(&self) -> bool;

    /// One-shot discovery and activation. Safe to call on a platform where
    /// `probe` returned `false`; the module just ends up empty.
    fn init(&mut self, host: &HostContext);

    /// Whether the host should bother polling this tick.
    fn should_poll(&self, host: &HostContext) -> bool;

    /// Drain pending OS events into device state. Called once per tick,
    /// before the host reads any state.
    fn before_poll(&mut self, host: &HostContext);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_names_are_one_based() {
        assert_eq!(default_button_name(0), "Button 1");
        assert_eq!(default_button_name(15), "Button 16");
    }

    #[test]
    fn host_context_defaults_to_enabled() {
        let host = HostContext::default();
        assert!(host.input_enabled);
        assert_eq!(host.config.effective_max(), crate::config::MAX_LIGHTGUNS);
    }
}
