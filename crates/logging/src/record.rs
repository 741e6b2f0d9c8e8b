//! crates/logging/src/record.rs
//! Write-once log records with threshold-gated emission on drop.

use std::fmt::{self, Write as _};
use std::io::{self, Write as _};
use std::process;

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::config;
use crate::severity::Severity;

/// Timestamp layout for the line prefix, rendered in local wall-clock time.
const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Substituted if timestamp formatting ever fails.
const TIMESTAMP_FALLBACK: &str = "1970-01-01 00:00:00";

/// One diagnostic line under construction.
///
/// A record is created at the call site bound to a source location and a
/// [`Severity`], accumulates free-form text through chained [`append`] calls,
/// and is finalized when it goes out of scope at the end of the enclosing
/// statement. Finalization runs exactly once on every exit path: records at
/// or above the configured threshold are rendered and written as a single
/// line to the destination stream, records below it are discarded silently.
///
/// Appending performs no I/O and cannot fail; the write itself is
/// best-effort and ignores stream errors.
///
/// [`append`]: LogRecord::append
///
/// # Examples
///
/// ```
/// use gloo_logging::{LogRecord, Severity};
///
/// // Discarded under the default `warning` threshold.
/// LogRecord::new("collective.rs", 87, Severity::Debug)
///     .append("chunk ")
///     .append(3)
///     .append(" queued");
/// ```
pub struct LogRecord {
    fname: &'static str,
    line: u32,
    severity: Severity,
    message: String,
    terminates: bool,
}

impl LogRecord {
    /// Begins accumulating a record at `severity`, bound to the caller's
    /// source location. No I/O happens until the record is dropped.
    #[must_use]
    pub fn new(fname: &'static str, line: u32, severity: Severity) -> Self {
        Self {
            fname,
            line,
            severity,
            message: String::new(),
            terminates: false,
        }
    }

    /// Begins a [`Severity::Fatal`] record that aborts the process once its
    /// line has been written. The threshold does not apply: finalization
    /// always emits and always terminates.
    #[must_use]
    pub fn fatal(fname: &'static str, line: u32) -> Self {
        let mut record = Self::new(fname, line, Severity::Fatal);
        record.terminates = true;
        record
    }

    /// Appends the [`Display`](fmt::Display) rendering of `value` to the
    /// message buffer. Chainable; appends are order-preserving and joined
    /// without separators.
    pub fn append<T: fmt::Display>(mut self, value: T) -> Self {
        // Writing into a String cannot fail.
        let _ = write!(self.message, "{value}");
        self
    }

    /// The text accumulated so far.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The severity this record was constructed with.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Renders the full output line, newline-terminated.
    ///
    /// With a timestamp: `[YYYY-MM-DD HH:MM:SS.mmmmmm: X fname:line] message`
    /// where the microsecond-of-second field is fixed at six digits with
    /// leading zeros. Without: `[X fname:line] message`.
    fn render(&self, timestamp: Option<OffsetDateTime>) -> String {
        let mut line = String::with_capacity(self.message.len() + 64);
        line.push('[');
        if let Some(now) = timestamp {
            let clock = now
                .format(TIMESTAMP_FORMAT)
                .unwrap_or_else(|_| TIMESTAMP_FALLBACK.to_string());
            let _ = write!(line, "{clock}.{:06}: ", now.microsecond());
        }
        let _ = writeln!(
            line,
            "{} {}:{}] {}",
            self.severity.tag(),
            self.fname,
            self.line,
            self.message
        );
        line
    }

    /// Renders and writes the line with a single `write_all` on the locked
    /// destination handle. Stream errors are swallowed: this is a
    /// best-effort diagnostic sink with no reporting path.
    fn emit(&self) {
        let timestamp = config::log_time().then(local_timestamp);
        let line = self.render(timestamp);
        if self.severity.uses_stdout() {
            let _ = io::stdout().lock().write_all(line.as_bytes());
        } else {
            let _ = io::stderr().lock().write_all(line.as_bytes());
        }
    }
}

impl Drop for LogRecord {
    fn drop(&mut self) {
        if self.terminates {
            self.emit();
            process::abort();
        }
        if self.severity >= config::min_severity() {
            self.emit();
        }
    }
}

/// Local wall-clock time at flush; falls back to UTC when the local offset
/// cannot be determined (the `time` crate refuses the lookup in
/// multi-threaded processes on some platforms).
fn local_timestamp() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
