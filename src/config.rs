//! Module configuration.
//!
//! [`ModuleConfig`] is the small knob surface a host hands to the backend at
//! init. It deserializes from TOML with serde defaults, so an empty document
//! is a valid configuration.
//!
//! ```no_run
//! use sightline::config::ModuleConfig;
//!
//! let cfg = ModuleConfig::from_toml_str("max_guns = 2").expect("parse config");
//! assert_eq!(cfg.effective_max(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Hard upper bound on simultaneously active devices.
///
/// Candidates beyond the cap are skipped silently after ordering, so the
/// bound is deterministic with respect to devnode order.
pub const MAX_LIGHTGUNS: usize = 8;

/// udev property key matched during enumeration when the config does not
/// override it.
pub const DEFAULT_MATCH_PROPERTY: &str = "ID_INPUT_MOUSE";

/// Host-supplied backend configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Requested number of devices to activate. Clamped to
    /// [`MAX_LIGHTGUNS`]; see [`ModuleConfig::effective_max`].
    pub max_guns: usize,

    /// udev property that marks a candidate device (value must be `"1"`).
    pub match_property: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            max_guns: MAX_LIGHTGUNS,
            match_property: DEFAULT_MATCH_PROPERTY.to_string(),
        }
    }
}

impl ModuleConfig {
    /// Parse a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// The activation cap actually applied: `max_guns` clamped to
    /// [`MAX_LIGHTGUNS`].
    #[inline]
    pub fn effective_max(&self) -> usize {
        self.max_guns.min(MAX_LIGHTGUNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ModuleConfig::default();
        assert_eq!(cfg.max_guns, MAX_LIGHTGUNS);
        assert_eq!(cfg.match_property, "ID_INPUT_MOUSE");
        assert_eq!(cfg.effective_max(), MAX_LIGHTGUNS);
    }

    #[test]
    fn empty_toml_is_valid() {
        let cfg = ModuleConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.max_guns, MAX_LIGHTGUNS);
        assert_eq!(cfg.match_property, "ID_INPUT_MOUSE");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = ModuleConfig::from_toml_str("max_guns = 2").unwrap();
        assert_eq!(cfg.max_guns, 2);
        assert_eq!(cfg.match_property, "ID_INPUT_MOUSE");
    }

    #[test]
    fn full_toml() {
        let cfg = ModuleConfig::from_toml_str(
            "max_guns = 4\nmatch_property = \"ID_INPUT_JOYSTICK\"\n",
        )
        .unwrap();
        assert_eq!(cfg.max_guns, 4);
        assert_eq!(cfg.match_property, "ID_INPUT_JOYSTICK");
    }

    #[test]
    fn oversized_request_is_clamped() {
        let cfg = ModuleConfig::from_toml_str("max_guns = 64").unwrap();
        assert_eq!(cfg.max_guns, 64);
        assert_eq!(cfg.effective_max(), MAX_LIGHTGUNS);
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = ModuleConfig {
            max_guns: 3,
            match_property: "ID_INPUT_MOUSE".into(),
        };
        let text = toml::to_string(&cfg).unwrap();
        let back = ModuleConfig::from_toml_str(&text).unwrap();
        assert_eq!(back.max_guns, 3);
    }
}
