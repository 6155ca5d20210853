use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, error, info, trace, warn};

use crate::device::{DeviceSource, ReportReader};
use crate::report::{Report, ReportMapping};
use crate::session::Inner;
use crate::types::SessionStatus;

const READ_BUFFER_LEN: usize = 64;

/// Spawns the acquisition thread. The device is opened on that thread and
/// dropped when it exits.
pub(crate) fn start_worker<S: DeviceSource>(
    inner: Arc<Inner>,
    source: S,
    mapping: ReportMapping,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("spire-sensor".into())
        .spawn(move || run(&inner, source, mapping))
}

fn run<S: DeviceSource>(inner: &Inner, source: S, mapping: ReportMapping) {
    let name = source.describe();
    let mut reader = match source.open() {
        Ok(reader) => reader,
        Err(e) => {
            error!("can't open {name}: {e}");
            finish(inner, SessionStatus::OpenFailed);
            return;
        }
    };

    {
        let Ok(mut state) = inner.state.lock() else {
            return;
        };
        if state.status != SessionStatus::Starting {
            // Stop was requested while the device was opening.
            state.status = SessionStatus::Stopped;
            return;
        }
        state.status = SessionStatus::Running;
    }
    info!("reading reports from {name}");

    let mut buf = [0u8; READ_BUFFER_LEN];
    loop {
        let len = match reader.read_report(&mut buf) {
            Ok(len) => len,
            Err(e) => {
                warn!("{name} read failed, stopping acquisition: {e}");
                finish(inner, SessionStatus::Lost);
                return;
            }
        };

        let report = match len {
            0 => None,
            _ => match Report::decode(&buf[..len]) {
                Ok(report) => Some(report),
                Err(e) => {
                    debug!("{name}: skipping report: {e}");
                    None
                }
            },
        };

        let Ok(mut state) = inner.state.lock() else {
            return;
        };
        if state.status != SessionStatus::Running {
            state.status = SessionStatus::Stopped;
            break;
        }
        if let Some(report) = report {
            trace!("{name}: {report:?}");
            state.pause.record_level(mapping.button_level(&report));
            state.axes = mapping.axes(&report);
        }
    }
    debug!("{name}: acquisition stopped");
}

/// Records why the worker is exiting. A pending stop request wins over the
/// failure since the consumer asked for the shutdown.
fn finish(inner: &Inner, failure: SessionStatus) {
    if let Ok(mut state) = inner.state.lock() {
        state.status = if state.status == SessionStatus::StopRequested {
            SessionStatus::Stopped
        } else {
            failure
        };
    }
}
