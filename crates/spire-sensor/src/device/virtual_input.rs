use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::device::{DeviceSource, ReportReader};
use crate::error::{DeviceError, Result};
use crate::report::Report;

/// Create an in-process device. Reports pushed into the feed are returned by
/// the reader in order; dropping the feed makes the next read fail.
pub fn virtual_device(name: &str) -> (VirtualFeed, VirtualSource) {
    let (tx, rx) = unbounded();
    let source = VirtualSource {
        name: name.to_string(),
        rx,
    };
    (VirtualFeed { tx }, source)
}

/// Producer side of a virtual device.
#[derive(Clone)]
pub struct VirtualFeed {
    tx: Sender<Vec<u8>>,
}

impl VirtualFeed {
    /// Inject a report. Returns false once the reader is gone.
    pub fn send(&self, report: Report) -> bool {
        self.send_raw(report.encode().to_vec())
    }

    /// Inject raw bytes, including malformed or empty reads.
    pub fn send_raw(&self, bytes: Vec<u8>) -> bool {
        self.tx.send(bytes).is_ok()
    }
}

pub struct VirtualSource {
    name: String,
    rx: Receiver<Vec<u8>>,
}

impl DeviceSource for VirtualSource {
    type Reader = VirtualReader;

    fn describe(&self) -> String {
        format!("virtual:{}", self.name)
    }

    fn open(self) -> Result<VirtualReader> {
        Ok(VirtualReader { rx: self.rx })
    }
}

pub struct VirtualReader {
    rx: Receiver<Vec<u8>>,
}

impl ReportReader for VirtualReader {
    fn read_report(&mut self, buf: &mut [u8]) -> Result<usize> {
        let bytes = self.rx.recv().map_err(|_| DeviceError::Disconnected)?;
        let len = bytes.len().min(buf.len());
        buf[..len].copy_from_slice(&bytes[..len]);
        Ok(len)
    }
}
