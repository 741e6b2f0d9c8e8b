//! crates/logging/src/config.rs
//! Environment-driven resolution of the severity threshold and timestamp mode.
//!
//! Both values are resolved lazily, at most once per process, and memoized in
//! a [`OnceLock`]. Later mutation of the environment has no effect: all
//! emissions for the rest of the process observe the first-resolved values.

use std::env;
use std::sync::OnceLock;

use crate::severity::Severity;

/// Selects the minimum emitted severity; unrecognised or absent values fall
/// back to `warning`.
pub(crate) const LOG_LEVEL_ENV: &str = "GLOO_LOG_LEVEL";

/// Disables the timestamp prefix when set to an integer greater than zero.
/// The polarity is inverted from what the name suggests; this matches the
/// observed behaviour and is preserved exactly.
pub(crate) const HIDE_TIME_ENV: &str = "GLOO_LOG_HIDE_TIME";

/// Returns the memoized minimum severity that will be emitted.
///
/// Concurrent first use is safe: `get_or_init` guarantees a single
/// resolution, after which every reader sees the same value.
pub(crate) fn min_severity() -> Severity {
    static MIN_SEVERITY: OnceLock<Severity> = OnceLock::new();
    *MIN_SEVERITY.get_or_init(min_severity_from_env)
}

fn min_severity_from_env() -> Severity {
    env::var(LOG_LEVEL_ENV).map_or(Severity::Warning, |value| Severity::from_name(&value))
}

/// Returns the memoized timestamp mode; `true` means rendered lines carry a
/// timestamp prefix.
pub(crate) fn log_time() -> bool {
    static LOG_TIME: OnceLock<bool> = OnceLock::new();
    *LOG_TIME.get_or_init(log_time_from_env)
}

fn log_time_from_env() -> bool {
    !env::var(HIDE_TIME_ENV).is_ok_and(|value| parse_decimal_prefix(&value) > 0)
}

/// Parses the leading base-10 integer of `value` with `strtol` semantics:
/// leading ASCII whitespace is skipped, an optional sign is honoured, and the
/// longest run of decimal digits is consumed. No digits parses as 0; overflow
/// saturates.
fn parse_decimal_prefix(value: &str) -> i64 {
    let rest = value.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let mut parsed: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        parsed = parsed
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }
    if negative { parsed.saturating_neg() } else { parsed }
}
