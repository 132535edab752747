//! Timing scopes and the event log.
//!
//! `--perf` prints scope timings to stderr; `--debug-log PATH` records
//! timestamped loop events (keys, replies, frames) in a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

static TIMINGS: AtomicBool = AtomicBool::new(false);
static EVENT_LOG: Mutex<Option<EventLog>> = Mutex::new(None);

/// Guard returned by [`scope`].
#[derive(Debug)]
pub struct Scope {
    name: &'static str,
    start: Instant,
}

impl Drop for Scope {
    fn drop(&mut self) {
        if TIMINGS.load(Ordering::Relaxed) {
            eprintln!("[perf] {}: {:.2} ms", self.name, millis_since(self.start));
        }
    }
}

#[derive(Debug)]
struct EventLog {
    opened: Instant,
    out: BufWriter<File>,
}

impl EventLog {
    fn open(path: &Path) -> std::io::Result<Self> {
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "covenant-hub event log")?;
        out.flush()?;
        Ok(Self {
            opened: Instant::now(),
            out,
        })
    }

    fn record(&mut self, name: &str, detail: &str) -> std::io::Result<()> {
        let at = millis_since(self.opened);
        writeln!(self.out, "[{at:>10.3} ms] {name}: {detail}")?;
        self.out.flush()
    }
}

fn millis_since(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn event_log() -> MutexGuard<'static, Option<EventLog>> {
    // A panic mid-write leaves the log usable.
    EVENT_LOG.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn set_enabled(enabled: bool) {
    TIMINGS.store(enabled, Ordering::Relaxed);
}

/// Start a timing scope; the elapsed time prints when it drops.
pub fn scope(name: &'static str) -> Scope {
    Scope {
        name,
        start: Instant::now(),
    }
}

/// Route [`log_event`] output to `path`, or turn it off with `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn set_debug_log_path(path: Option<&Path>) -> std::io::Result<()> {
    let log = path.map(EventLog::open).transpose()?;
    *event_log() = log;
    Ok(())
}

/// Append an event to the log opened by [`set_debug_log_path`], if any.
pub fn log_event(name: &str, detail: impl AsRef<str>) {
    if let Some(log) = event_log().as_mut() {
        // Write failures must not disturb the UI.
        let _ = log.record(name, detail.as_ref());
    }
}
