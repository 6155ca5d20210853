use ahash::AHashMap;
use serde::Deserialize;
use spire_sensor::ReportMapping;

use super::Error;
use crate::{DeviceSettings, Settings};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SettingsV1 {
    #[allow(dead_code)]
    pub version: u8,
    #[serde(default)]
    pub device: Option<SettingsV1Device>,
    #[serde(default)]
    pub mapping: Option<SettingsV1Mapping>,
    #[serde(default)]
    pub keys: AHashMap<String, i32>, // key -> value
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SettingsV1Device {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub read_timeout_ms: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SettingsV1Mapping {
    #[serde(default)]
    pub aux_threshold: Option<i16>,
    #[serde(default)]
    pub scale: Option<f32>,
    #[serde(default)]
    pub invert_x: Option<bool>,
}

impl SettingsV1 {
    pub(crate) fn to_settings(&self) -> Result<Settings, Error> {
        let mut device = DeviceSettings::default();
        if let Some(raw) = &self.device {
            if let Some(path) = &raw.path {
                if path.trim().is_empty() {
                    return Err(Error::EmptyDevicePath);
                }
                device.path = path.trim().to_string();
            }
            if let Some(ms) = raw.read_timeout_ms {
                if ms == 0 {
                    return Err(Error::InvalidReadTimeout(ms));
                }
                device.read_timeout_ms = Some(ms);
            }
        }

        let mut mapping = ReportMapping::default();
        if let Some(raw) = &self.mapping {
            if let Some(threshold) = raw.aux_threshold {
                mapping.aux_threshold = threshold;
            }
            if let Some(scale) = raw.scale {
                if !scale.is_finite() || scale <= 0.0 {
                    return Err(Error::InvalidScale(scale));
                }
                mapping.scale = scale;
            }
            if let Some(invert) = raw.invert_x {
                mapping.invert_x = invert;
            }
        }

        let mut keys = AHashMap::with_capacity(self.keys.len());
        for (key, value) in &self.keys {
            let name = key.trim();
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(Error::InvalidKey(key.clone()));
            }
            keys.insert(name.into(), *value);
        }

        Ok(Settings {
            device,
            mapping,
            keys,
        })
    }
}

#[cfg(test)]
mod tests {
    use spire_sensor::{ConfigLookup, JOYSTICK_BUTTON_START};

    use crate::{parse_settings, SettingsError};

    use super::Error;

    #[test]
    fn minimal_settings_use_defaults() {
        let settings = parse_settings("version: 1\n").expect("minimal settings");
        assert_eq!(settings.device.path, "/dev/hidraw3");
        assert_eq!(settings.device.read_timeout_ms, None);
        assert_eq!(settings.mapping.aux_threshold, 2000);
        assert_eq!(settings.mapping.scale, 100.0);
        assert!(settings.mapping.invert_x);
        assert!(settings.keys().is_empty());
    }

    #[test]
    fn full_settings_are_resolved() {
        let yaml = r#"
version: 1
device:
  path: /dev/hidraw0
  read_timeout_ms: 50
mapping:
  aux_threshold: 1800
  scale: 64.0
  invert_x: false
keys:
  joystick_button_start: 9
"#;
        let settings = parse_settings(yaml).expect("valid settings");
        assert_eq!(settings.device.path, "/dev/hidraw0");
        assert_eq!(settings.device.read_timeout_ms, Some(50));
        assert_eq!(settings.mapping.aux_threshold, 1800);
        assert_eq!(settings.mapping.scale, 64.0);
        assert!(!settings.mapping.invert_x);
        assert_eq!(settings.get_int(JOYSTICK_BUTTON_START), 9);
    }

    #[test]
    fn sample_settings_parse() {
        let yaml = include_str!("../../../../spire.yaml");
        let settings = parse_settings(yaml).expect("sample settings");
        assert_eq!(settings.device.read_timeout_ms, Some(100));
        assert_eq!(settings.get_int(JOYSTICK_BUTTON_START), 9);
    }

    #[test]
    fn rejects_unknown_fields() {
        let yaml = "version: 1\nmapping:\n  filter: 8.0\n";
        assert!(matches!(
            parse_settings(yaml),
            Err(SettingsError::YamlDeserializeError(_))
        ));
    }

    #[test]
    fn rejects_empty_device_path() {
        let yaml = "version: 1\ndevice:\n  path: \"  \"\n";
        assert!(matches!(
            parse_settings(yaml),
            Err(SettingsError::V1SettingsError(Error::EmptyDevicePath))
        ));
    }

    #[test]
    fn rejects_non_positive_scale() {
        let yaml = "version: 1\nmapping:\n  scale: 0.0\n";
        assert!(matches!(
            parse_settings(yaml),
            Err(SettingsError::V1SettingsError(Error::InvalidScale(_)))
        ));
    }

    #[test]
    fn rejects_zero_read_timeout() {
        let yaml = "version: 1\ndevice:\n  read_timeout_ms: 0\n";
        assert!(matches!(
            parse_settings(yaml),
            Err(SettingsError::V1SettingsError(Error::InvalidReadTimeout(0)))
        ));
    }

    #[test]
    fn rejects_key_with_whitespace() {
        let yaml = "version: 1\nkeys:\n  \"joystick button\": 1\n";
        assert!(matches!(
            parse_settings(yaml),
            Err(SettingsError::V1SettingsError(Error::InvalidKey(_)))
        ));
    }
}
