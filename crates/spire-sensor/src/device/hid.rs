use std::ffi::CString;

use hidapi::{HidApi, HidDevice};

use crate::device::{DeviceSource, ReportReader};
use crate::error::{DeviceError, Result};

/// A hidraw node opened by path.
#[derive(Debug, Clone)]
pub struct HidSource {
    path: String,
    read_timeout_ms: Option<i32>,
}

impl HidSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            read_timeout_ms: None,
        }
    }

    /// Bound each read so a stop request is noticed even while the sensor is silent.
    pub fn with_read_timeout(mut self, ms: u32) -> Self {
        self.read_timeout_ms = Some(ms.min(i32::MAX as u32) as i32);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn open_error(&self, reason: impl ToString) -> DeviceError {
        DeviceError::Open {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl DeviceSource for HidSource {
    type Reader = HidReader;

    fn describe(&self) -> String {
        format!("hid:{}", self.path)
    }

    fn open(self) -> Result<HidReader> {
        let c_path = CString::new(self.path.as_str()).map_err(|e| self.open_error(e))?;
        let api = HidApi::new().map_err(|e| self.open_error(e))?;
        let device = api.open_path(&c_path).map_err(|e| self.open_error(e))?;
        Ok(HidReader {
            _api: api,
            device,
            timeout_ms: self.read_timeout_ms,
        })
    }
}

pub struct HidReader {
    _api: HidApi,
    device: HidDevice,
    timeout_ms: Option<i32>,
}

impl ReportReader for HidReader {
    fn read_report(&mut self, buf: &mut [u8]) -> Result<usize> {
        let read = match self.timeout_ms {
            Some(ms) => self.device.read_timeout(buf, ms),
            None => self.device.read(buf),
        };
        read.map_err(|e| DeviceError::Read(e.to_string()))
    }
}
