use serde::Deserialize;

use crate::{v1::SettingsV1, Settings, SettingsError};

/// Only the top-level `version` key, read before the full document.
#[derive(Debug, Deserialize)]
struct SettingsHeader {
    version: u8,
}

/// Parse `spire.yaml` into resolved sensor settings.
///
/// The document must carry a top-level `version`. Version 1 is the only known
/// layout; any other value fails with [`SettingsError::UnsupportedVersion`]
/// before device or mapping fields are looked at.
pub fn parse_settings(input: &str) -> Result<Settings, SettingsError> {
    let SettingsHeader { version } = serde_yaml::from_str(input)?;
    if version != 1 {
        return Err(SettingsError::UnsupportedVersion(version));
    }
    let raw: SettingsV1 = serde_yaml::from_str(input)?;
    Ok(raw.to_settings()?)
}
