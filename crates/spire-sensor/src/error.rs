use thiserror::Error;

/// Error type for device access performed by the acquisition thread.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The device could not be opened.
    #[error("failed to open device {path}: {reason}")]
    Open { path: String, reason: String },
    /// A blocking read returned an error.
    #[error("device read failed: {0}")]
    Read(String),
    /// The feeding side of a virtual device went away.
    #[error("device disconnected")]
    Disconnected,
}

/// Error returned when a raw buffer cannot be interpreted as a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("short report: got {len} bytes, expected {expected}")]
    Short { len: usize, expected: usize },
}

/// Convenient result alias for device operations.
pub type Result<T> = std::result::Result<T, DeviceError>;
