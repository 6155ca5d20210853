mod parse;
mod settings;
mod v1;
mod workspace;

use thiserror::Error;

pub use parse::parse_settings;
pub use settings::{DeviceSettings, Settings};
pub use workspace::{load_settings, Workspace};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("yaml deserialize error: {0}")]
    YamlDeserializeError(#[from] serde_yaml::Error),
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),
    #[error("v1 settings error: {0}")]
    V1SettingsError(#[from] v1::Error),

    #[error("environment variable not set: {0}")]
    EnvVarNotSet(String),
    #[error("settings not found: {0}")]
    SettingsNotFound(String),
    #[error("path error: {0}")]
    PathError(#[from] std::io::Error),
}
