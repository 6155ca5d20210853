use spire_sensor::{
    Axes, ButtonEvent, ConfigLookup, SensorSession, SessionStatus, VirtualFeed,
};

/// What the game loop observed during one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub events: Vec<ButtonEvent>,
    pub axes: Axes,
    pub axes_changed: bool,
    pub status: SessionStatus,
    pub status_changed: bool,
}

/// Polls a session the way a game's main loop does, remembering the previous
/// frame so only changes need to be reported.
#[derive(Debug, Default)]
pub struct FramePoller {
    last_axes: Axes,
    last_status: SessionStatus,
}

impl FramePoller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn poll<C: ConfigLookup + ?Sized>(
        &mut self,
        session: &SensorSession,
        config: &C,
    ) -> Frame {
        let events: Vec<ButtonEvent> =
            std::iter::from_fn(|| session.poll_button(config)).collect();
        let axes = session.get_axes();
        let status = session.status();

        let frame = Frame {
            events,
            axes,
            axes_changed: axes != self.last_axes,
            status,
            status_changed: status != self.last_status,
        };
        self.last_axes = axes;
        self.last_status = status;
        frame
    }
}

/// Stops the worker and tears the session down.
///
/// With a virtual device the worker may be parked on a read nobody else will
/// feed, so `waker` pushes one empty read after the stop request to release it.
pub fn shutdown(session: &mut SensorSession, waker: Option<&VirtualFeed>) {
    session.request_stop();
    if let Some(feed) = waker {
        feed.send_raw(Vec::new());
    }
    session.free();
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::thread;
    use std::time::{Duration, Instant};

    use spire_sensor::{virtual_device, Report, ReportMapping, JOYSTICK_BUTTON_START};

    use super::*;

    #[test]
    fn shutdown_wakes_reader_parked_on_held_feed() {
        let (feed, source) = virtual_device("held");
        let mut session = SensorSession::start(source, ReportMapping::default()).unwrap();
        let waker = feed.clone();

        // Stands in for the stdin thread: keeps the feed alive without sending.
        let (release_tx, release_rx) = crossbeam_channel::bounded::<()>(0);
        let holder = thread::spawn(move || {
            let _ = release_rx.recv();
            drop(feed);
        });

        let deadline = Instant::now() + Duration::from_secs(5);
        while !session.get_status() {
            assert!(Instant::now() < deadline, "worker did not start");
            thread::sleep(Duration::from_millis(1));
        }

        let (done_tx, done_rx) = crossbeam_channel::bounded(1);
        let stopping = thread::spawn(move || {
            shutdown(&mut session, Some(&waker));
            let _ = done_tx.send(());
            session
        });

        done_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("shutdown returns while the feed is still held");
        let session = stopping.join().unwrap();
        assert!(!session.is_active());

        drop(release_tx);
        holder.join().unwrap();
    }

    #[test]
    fn inactive_session_yields_empty_frame() {
        let session = SensorSession::new();
        let mut poller = FramePoller::new();
        let frame = poller.poll(&session, &HashMap::<String, i32>::new());
        assert!(frame.events.is_empty());
        assert!(!frame.axes_changed);
        assert!(!frame.status_changed);
        assert_eq!(frame.status, SessionStatus::Idle);
    }

    #[test]
    fn frame_drains_events_and_tracks_changes() {
        let config = HashMap::from([(JOYSTICK_BUTTON_START.to_string(), 3)]);
        let (feed, source) = virtual_device("frame");
        let session = SensorSession::start(source, ReportMapping::default()).unwrap();

        feed.send(Report { x: 100, y: -200, z: 0, aux: 1500 });
        feed.send(Report { x: 100, y: -200, z: 0, aux: 2500 });
        drop(feed);

        let deadline = Instant::now() + Duration::from_secs(5);
        while !session.status().is_terminal() {
            assert!(Instant::now() < deadline, "worker did not stop");
            thread::sleep(Duration::from_millis(1));
        }

        let mut poller = FramePoller::new();
        let frame = poller.poll(&session, &config);
        assert_eq!(
            frame.events,
            vec![
                ButtonEvent { button: 3, pressed: true },
                ButtonEvent { button: 3, pressed: false },
            ]
        );
        assert_eq!(frame.axes, Axes { x: -1.0, z: -2.0 });
        assert!(frame.axes_changed);
        assert_eq!(frame.status, SessionStatus::Lost);
        assert!(frame.status_changed);

        let next = poller.poll(&session, &config);
        assert!(next.events.is_empty());
        assert!(!next.axes_changed);
        assert!(!next.status_changed);
    }
}
