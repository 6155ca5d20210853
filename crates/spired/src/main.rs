mod cli;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use crossbeam_channel::{select, unbounded};

use spire_config::{load_settings, Settings, Workspace};
use spire_sensor::{virtual_device, HidSource, SensorSession, SessionStatus, VirtualFeed};
use spired::feed::start_stdin_feed;
use spired::frame::{shutdown, FramePoller};
use spired::{logging, print_debug, print_error, print_info, print_warning, Error, Result};

use crate::cli::{Cli, Command};

fn load(config: Option<PathBuf>) -> Result<Settings> {
    let settings = match config {
        Some(path) => load_settings(&path)?,
        None => Workspace::new(None)?.load()?,
    };
    Ok(settings)
}

/// Opens the sensor. In virtual mode also returns a feed handle used to wake
/// the worker on shutdown, since the stdin thread may never send again.
fn start_session(
    settings: &Settings,
    virtual_input: bool,
) -> Result<(SensorSession, Option<VirtualFeed>)> {
    if virtual_input {
        let (feed, source) = virtual_device("stdin");
        let session = SensorSession::start(source, settings.mapping)?;
        let waker = feed.clone();
        start_stdin_feed(feed)?;
        print_info!("reading reports from stdin as \"x y z aux\" lines");
        return Ok((session, Some(waker)));
    }

    let mut source = HidSource::new(settings.device.path.as_str());
    if let Some(ms) = settings.device.read_timeout_ms {
        source = source.with_read_timeout(ms);
    }
    Ok((SensorSession::start(source, settings.mapping)?, None))
}

fn run(
    config: Option<PathBuf>,
    device: Option<String>,
    virtual_input: bool,
    frame_ms: u64,
) -> Result<()> {
    let mut settings = load(config)?;
    if let Some(path) = device {
        settings.device.path = path;
    }

    // Handle Ctrl+C to exit cleanly
    let (stop_tx, stop_rx) = unbounded::<()>();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    })?;

    let (mut session, waker) = start_session(&settings, virtual_input)?;
    let mut poller = FramePoller::new();
    let ticker = crossbeam_channel::tick(Duration::from_millis(frame_ms.max(1)));

    let outcome = loop {
        select! {
            recv(stop_rx) -> _ => {
                print_info!("stop requested");
                break Ok(());
            }
            recv(ticker) -> _ => {
                let frame = poller.poll(&session, &settings);
                for event in &frame.events {
                    let phase = if event.pressed { "pressed" } else { "released" };
                    print_info!("button {} {}", event.button, phase);
                }
                if frame.axes_changed {
                    print_debug!("tilt x={:.2} z={:.2}", frame.axes.x, frame.axes.z);
                }
                if frame.status_changed {
                    print_debug!("sensor status: {:?}", frame.status);
                }
                match frame.status {
                    SessionStatus::Lost if virtual_input => {
                        print_info!("input closed");
                        break Ok(());
                    }
                    SessionStatus::OpenFailed | SessionStatus::Lost => {
                        break Err(Error::SensorStopped(frame.status));
                    }
                    _ => {}
                }
            }
        }
    };

    let blocking = settings.device.read_timeout_ms.is_none() && !virtual_input;
    if blocking && session.get_status() {
        print_warning!("waiting for the next report before shutting down");
    }
    shutdown(&mut session, waker.as_ref());
    outcome
}

fn check(config: Option<PathBuf>) -> Result<()> {
    if config.is_none() {
        let workspace = Workspace::new(None)?;
        print_info!("workspace: {}", workspace.path().display());
    }
    let settings = load(config)?;
    print_info!("device: {}", settings.device.path);
    match settings.device.read_timeout_ms {
        Some(ms) => {
            print_info!("read timeout: {ms} ms");
        }
        None => {
            print_info!("read timeout: none (blocking)");
        }
    }
    print_info!(
        "mapping: aux < {} is pressed, scale 1/{}, invert x: {}",
        settings.mapping.aux_threshold,
        settings.mapping.scale,
        settings.mapping.invert_x
    );
    for (key, value) in settings.keys() {
        print_info!("key {key} = {value}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup(cli.verbose, cli.no_color);

    let result = match cli.command {
        Command::Run {
            config,
            device,
            virtual_input,
            frame_ms,
        } => run(config, device, virtual_input, frame_ms),
        Command::Check { config } => check(config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error!("{e}");
            ExitCode::FAILURE
        }
    }
}
