//! crates/logging/src/macros.rs
//! Call-site entry points that capture the caller's source location.

/// Starts a [`LogRecord`](crate::LogRecord) bound to the invocation site.
///
/// The first argument names a [`Severity`](crate::Severity) variant. The
/// optional second argument is a rank identifier for distributed contexts;
/// it seeds the message with `[rank]: ` ahead of any appended text.
/// `gloo_log!(Fatal)` builds the terminating record: its line is always
/// written, regardless of threshold, and the process aborts afterwards.
///
/// The recorded file and line are those of the `gloo_log!` invocation, not
/// of this crate's internals.
///
/// # Examples
///
/// ```
/// use gloo_logging::gloo_log;
///
/// // Discarded under the default `warning` threshold.
/// gloo_log!(Info).append("connected to ").append(4).append(" peers");
/// gloo_log!(Debug, 2).append("slot ready");
/// ```
///
/// ```no_run
/// use gloo_logging::gloo_log;
///
/// gloo_log!(Fatal).append("unreachable rendezvous store");
/// // The process has aborted; this line never runs.
/// ```
#[macro_export]
macro_rules! gloo_log {
    (Fatal) => {
        $crate::LogRecord::fatal(::std::file!(), ::std::line!())
    };
    (Fatal, $rank:expr) => {
        $crate::LogRecord::fatal(::std::file!(), ::std::line!()).append(::std::format_args!("[{}]: ", $rank))
    };
    ($severity:ident) => {
        $crate::LogRecord::new(::std::file!(), ::std::line!(), $crate::Severity::$severity)
    };
    ($severity:ident, $rank:expr) => {
        $crate::LogRecord::new(::std::file!(), ::std::line!(), $crate::Severity::$severity)
            .append(::std::format_args!("[{}]: ", $rank))
    };
}
