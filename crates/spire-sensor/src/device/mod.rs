//! Device backends feeding the acquisition thread.
//!
//! A [`DeviceSource`] is moved into the worker thread and opened there, so the
//! resulting [`ReportReader`] never leaves that thread.
//!
//! # Feature flags
//! - **`hid`** enables [`HidSource`] backed by `hidapi` (default).

use crate::error::Result;

#[cfg(feature = "hid")]
mod hid;
mod virtual_input;

#[cfg(feature = "hid")]
pub use hid::{HidReader, HidSource};
pub use virtual_input::{virtual_device, VirtualFeed, VirtualReader, VirtualSource};

/// Something that can be opened into a report stream.
pub trait DeviceSource: Send + 'static {
    type Reader: ReportReader;

    /// Human-readable name used in log messages.
    fn describe(&self) -> String;

    fn open(self) -> Result<Self::Reader>;
}

/// An open device handle.
pub trait ReportReader {
    /// Read one report into `buf`, blocking until it arrives.
    ///
    /// `Ok(0)` means the read timed out without data; the caller re-checks its
    /// run flag and reads again.
    fn read_report(&mut self, buf: &mut [u8]) -> Result<usize>;
}
