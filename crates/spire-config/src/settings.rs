use ahash::AHashMap;
use spire_sensor::{ConfigLookup, ReportMapping};

/// Hidraw node read by the sensor worker when none is configured.
pub const DEFAULT_DEVICE_PATH: &str = "/dev/hidraw3";

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSettings {
    pub path: String,
    /// Upper bound for a single read. `None` blocks until a report arrives.
    pub read_timeout_ms: Option<u32>,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_DEVICE_PATH.to_string(),
            read_timeout_ms: None,
        }
    }
}

/// Resolved sensor settings.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub device: DeviceSettings,
    pub mapping: ReportMapping,
    pub(crate) keys: AHashMap<Box<str>, i32>,
}

impl Settings {
    /// Configured integer keys, sorted by name.
    pub fn keys(&self) -> Vec<(&str, i32)> {
        let mut keys: Vec<_> = self.keys.iter().map(|(k, v)| (k.as_ref(), *v)).collect();
        keys.sort_unstable_by_key(|(k, _)| *k);
        keys
    }

    pub fn set_int(&mut self, key: &str, value: i32) {
        self.keys.insert(key.into(), value);
    }
}

impl ConfigLookup for Settings {
    /// Unknown keys resolve to `0`.
    fn get_int(&self, key: &str) -> i32 {
        self.keys.get(key).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spire_sensor::JOYSTICK_BUTTON_START;

    #[test]
    fn unknown_key_resolves_to_zero() {
        let settings = Settings::default();
        assert_eq!(settings.get_int(JOYSTICK_BUTTON_START), 0);
    }

    #[test]
    fn set_int_overrides_lookup() {
        let mut settings = Settings::default();
        settings.set_int(JOYSTICK_BUTTON_START, 9);
        settings.set_int("joystick_axis_x", 0);
        assert_eq!(settings.get_int(JOYSTICK_BUTTON_START), 9);
        assert_eq!(
            settings.keys(),
            vec![("joystick_axis_x", 0), (JOYSTICK_BUTTON_START, 9)]
        );
    }
}
