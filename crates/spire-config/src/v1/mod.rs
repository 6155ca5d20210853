mod settings;

use thiserror::Error;

pub(crate) use settings::SettingsV1;

#[derive(Error, Debug)]
pub enum Error {
    #[error("device path is empty")]
    EmptyDevicePath,
    #[error("invalid scale: {0}")]
    InvalidScale(f32),
    #[error("invalid read timeout: {0}")]
    InvalidReadTimeout(u32),
    #[error("invalid key name: \"{0}\"")]
    InvalidKey(String),
}
