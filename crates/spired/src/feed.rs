use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

use colored::Colorize;
use spire_sensor::{Report, VirtualFeed};

use crate::{print_debug, print_warning};

/// Parse one `x y z aux` line. Blank lines and `#` comments yield `None`.
pub fn parse_report_line(line: &str) -> Result<Option<Report>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = [0i16; 4];
    let mut parts = line.split(|c: char| c.is_whitespace() || c == ',').filter(|p| !p.is_empty());
    for (i, name) in ["x", "y", "z", "aux"].into_iter().enumerate() {
        let Some(part) = parts.next() else {
            return Err(format!("missing {name}"));
        };
        fields[i] = part
            .parse::<i16>()
            .map_err(|e| format!("invalid {name} \"{part}\": {e}"))?;
    }
    if let Some(extra) = parts.next() {
        return Err(format!("unexpected field \"{extra}\""));
    }

    let [x, y, z, aux] = fields;
    Ok(Some(Report { x, y, z, aux }))
}

/// Forward stdin lines into a virtual device until stdin closes.
pub fn start_stdin_feed(feed: VirtualFeed) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("spired-stdin".into())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                match parse_report_line(&line) {
                    Ok(Some(report)) => {
                        if !feed.send(report) {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        print_warning!("ignoring line \"{}\": {}", line.trim(), e);
                    }
                }
            }
            print_debug!("stdin closed");
        })
}
