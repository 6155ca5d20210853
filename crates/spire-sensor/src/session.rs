use std::io;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use log::error;

use crate::config::{ConfigLookup, JOYSTICK_BUTTON_START};
use crate::device::DeviceSource;
use crate::report::ReportMapping;
use crate::runtime::start_worker;
use crate::tracker::TransitionTracker;
use crate::types::{Axes, ButtonEvent, SessionStatus};

/// Everything the worker and the consumer share. Only accessed under `Inner::state`.
#[derive(Debug, Default)]
pub(crate) struct SensorState {
    pub(crate) status: SessionStatus,
    pub(crate) axes: Axes,
    pub(crate) pause: TransitionTracker,
}

pub(crate) struct Inner {
    pub(crate) state: Mutex<SensorState>,
}

/// Tilt sensor session: a background thread reading reports and a locked
/// snapshot the game loop polls once per frame.
///
/// Queries on an inactive session return neutral values (`0.0`, `false`, no event).
#[derive(Default)]
pub struct SensorSession {
    inner: Option<Arc<Inner>>,
    worker: Option<JoinHandle<()>>,
}

impl SensorSession {
    /// Creates an inactive session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session and starts reading from `source` right away.
    pub fn start<S: DeviceSource>(source: S, mapping: ReportMapping) -> io::Result<Self> {
        let mut session = Self::new();
        session.init(source, mapping)?;
        Ok(session)
    }

    /// Resets the shared state and spawns the acquisition thread.
    /// An already active run is torn down first.
    pub fn init<S: DeviceSource>(&mut self, source: S, mapping: ReportMapping) -> io::Result<()> {
        self.free();

        let inner = Arc::new(Inner {
            state: Mutex::new(SensorState {
                status: SessionStatus::Starting,
                ..SensorState::default()
            }),
        });
        let worker = start_worker(inner.clone(), source, mapping)?;
        self.inner = Some(inner);
        self.worker = Some(worker);
        Ok(())
    }

    /// Asks the worker to leave its loop after the current read, without waiting.
    ///
    /// Lets the owner of the device wake a parked read before calling [`free`](Self::free).
    pub fn request_stop(&self) {
        self.with_state(|state| {
            if !state.status.is_terminal() {
                state.status = SessionStatus::StopRequested;
            }
        });
    }

    /// Requests the worker to stop and waits for it to exit.
    ///
    /// Blocks until the worker's current read returns.
    pub fn free(&mut self) {
        self.request_stop();
        let Some(inner) = self.inner.take() else {
            return;
        };
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("sensor worker panicked");
            }
        }
        drop(inner);
    }

    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    /// Delivers the next pending button edge, resolved to the configured button id.
    pub fn poll_button<C: ConfigLookup + ?Sized>(&self, config: &C) -> Option<ButtonEvent> {
        let phase = self.with_state(|state| state.pause.consume_event())??;
        Some(ButtonEvent {
            button: config.get_int(JOYSTICK_BUTTON_START),
            pressed: phase.is_press(),
        })
    }

    pub fn get_axis_x(&self) -> f32 {
        self.get_axes().x
    }

    pub fn get_axis_z(&self) -> f32 {
        self.get_axes().z
    }

    /// Both axes from the same report.
    pub fn get_axes(&self) -> Axes {
        self.with_state(|state| state.axes).unwrap_or_default()
    }

    /// True while the worker has the device open and is reading.
    pub fn get_status(&self) -> bool {
        self.status().is_running()
    }

    pub fn status(&self) -> SessionStatus {
        self.with_state(|state| state.status).unwrap_or_default()
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut SensorState) -> R) -> Option<R> {
        let inner = self.inner.as_ref()?;
        let mut state = inner.state.lock().ok()?;
        Some(f(&mut state))
    }
}

impl Drop for SensorSession {
    fn drop(&mut self) {
        self.free();
    }
}
