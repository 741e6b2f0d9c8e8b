#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `gloo-logging` is the leveled diagnostic facility of a distributed
//! computing library. Call sites build a [`LogRecord`] through the
//! [`gloo_log!`] macro, append free-form text to it, and let it go out of
//! scope; the record then renders and writes a single human-readable line to
//! standard output or standard error, or discards itself when its
//! [`Severity`] falls below the process-wide threshold.
//!
//! # Design
//!
//! Severities are totally ordered (`Trace < Debug < Info < Warning < Error <
//! Fatal`) and each carries a one-character tag used in the rendered line.
//! The minimum emitted severity and the timestamp mode are resolved lazily
//! from `GLOO_LOG_LEVEL` and `GLOO_LOG_HIDE_TIME` on first emission and
//! memoized for the remainder of the process, so behaviour stays consistent
//! even if the environment changes mid-run. Records at `Trace`/`Debug`/`Info`
//! go to standard output, everything above to standard error. A
//! [`Severity::Fatal`] record built through [`LogRecord::fatal`] (or
//! `gloo_log!(Fatal)`) always writes its line and then aborts the process.
//!
//! # Invariants
//!
//! - Finalization runs exactly once per record, on every exit path, at the
//!   end of the call site's enclosing statement.
//! - A record either writes one complete newline-terminated line with a
//!   single blocking write, or writes nothing at all.
//! - The threshold and timestamp mode are read-mostly, write-once values;
//!   concurrent first use resolves them exactly once.
//!
//! # Errors
//!
//! There are none to handle. Unrecognised environment values fall back to
//! documented defaults, message text conversion is infallible, and stream
//! write failures are swallowed: this is a best-effort diagnostic sink, not
//! a durable audit log.
//!
//! # Examples
//!
//! ```
//! use gloo_logging::gloo_log;
//!
//! // Finalized when the statement ends; discarded silently here because
//! // trace sits below the default `warning` threshold.
//! gloo_log!(Trace).append("rendezvous handshake took ").append(12).append(" ms");
//!
//! // Rank-qualified variant for multi-process runs: the message is
//! // prefixed with "[2]: ".
//! gloo_log!(Debug, 2).append("ring slot ready");
//! ```

mod config;
mod macros;
mod record;
mod severity;

pub use record::LogRecord;
pub use severity::Severity;
