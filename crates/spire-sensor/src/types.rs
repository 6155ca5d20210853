/// Edge delivered for the tracked button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonPhase {
    Pressed,
    Released,
}

impl ButtonPhase {
    #[inline]
    pub fn is_press(self) -> bool {
        self == ButtonPhase::Pressed
    }
}

/// Button transition resolved against the application configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    /// Abstract button identifier taken from the configuration lookup.
    pub button: i32,
    pub pressed: bool,
}

/// Scaled tilt readings captured from a single report.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Axes {
    pub x: f32,
    pub z: f32,
}

/// Lifecycle of the acquisition thread as seen by the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// No session is active.
    #[default]
    Idle,
    /// The worker was spawned but has not opened the device yet.
    Starting,
    /// The device is open and reports are being read.
    Running,
    /// Shutdown was requested; the worker exits after its current read.
    StopRequested,
    /// The device could not be opened. The worker has exited.
    OpenFailed,
    /// A read failed mid-session. Axis values are stale.
    Lost,
    /// The worker left its loop after a stop request.
    Stopped,
}

impl SessionStatus {
    #[inline]
    pub fn is_running(self) -> bool {
        self == SessionStatus::Running
    }

    /// Returns true when the worker has exited and will not recover.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SessionStatus::OpenFailed | SessionStatus::Lost | SessionStatus::Stopped
        )
    }
}
