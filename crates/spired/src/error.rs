use spire_config::SettingsError;
use spire_sensor::SessionStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("failed to spawn thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("failed to set Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),
    #[error("sensor stopped unexpectedly: {0:?}")]
    SensorStopped(SessionStatus),
}

pub type Result<T> = std::result::Result<T, Error>;
