//! Bridge between a tilt sensor read on a background thread and a game loop
//! that polls it once per frame.

mod config;
mod device;
mod error;
mod report;
mod runtime;
mod session;
mod tracker;
mod types;

pub use crate::config::{ConfigLookup, JOYSTICK_BUTTON_START};
#[cfg(feature = "hid")]
pub use crate::device::{HidReader, HidSource};
pub use crate::device::{
    virtual_device, DeviceSource, ReportReader, VirtualFeed, VirtualReader, VirtualSource,
};
pub use crate::error::{DeviceError, ReportError, Result};
pub use crate::report::{Report, ReportMapping, REPORT_LEN};
pub use crate::session::SensorSession;
pub use crate::tracker::TransitionTracker;
pub use crate::types::{Axes, ButtonEvent, ButtonPhase, SessionStatus};
