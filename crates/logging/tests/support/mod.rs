//! Shared helpers for spawning the probe binary and checking its output.

#![allow(dead_code)] // each integration test crate uses a subset

use std::process::{Command, ExitStatus, Output};

/// Environment variable selecting the minimum emitted severity.
pub const LOG_LEVEL_ENV: &str = "GLOO_LOG_LEVEL";

/// Environment variable disabling the timestamp prefix when > 0.
pub const HIDE_TIME_ENV: &str = "GLOO_LOG_HIDE_TIME";

/// Command for the probe binary with the logging environment scrubbed, so
/// each test starts from the documented defaults.
pub fn probe() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_log-probe"));
    command.env_remove(LOG_LEVEL_ENV).env_remove(HIDE_TIME_ENV);
    command
}

/// Runs the probe and returns its captured stdout, stderr, and exit status.
pub fn run(command: &mut Command) -> (String, String, ExitStatus) {
    let Output {
        status,
        stdout,
        stderr,
    } = command.output().expect("probe binary spawns");
    (
        String::from_utf8(stdout).expect("stdout is utf-8"),
        String::from_utf8(stderr).expect("stderr is utf-8"),
        status,
    )
}

/// Asserts `line` opens with a timestamp block followed by the severity tag:
/// `[YYYY-MM-DD HH:MM:SS.mmmmmm: X …` with a six-digit microsecond field.
pub fn assert_timestamped(line: &str, tag: char) {
    let digits = |range: std::ops::Range<usize>| {
        assert!(
            line[range.clone()].bytes().all(|b| b.is_ascii_digit()),
            "expected digits at {range:?} in {line:?}"
        );
    };

    assert!(line.len() > 30, "line too short for a timestamp: {line:?}");
    assert_eq!(&line[0..1], "[", "missing opening bracket: {line:?}");
    digits(1..5);
    assert_eq!(&line[5..6], "-");
    digits(6..8);
    assert_eq!(&line[8..9], "-");
    digits(9..11);
    assert_eq!(&line[11..12], " ");
    digits(12..14);
    assert_eq!(&line[14..15], ":");
    digits(15..17);
    assert_eq!(&line[17..18], ":");
    digits(18..20);
    assert_eq!(&line[20..21], ".");
    digits(21..27);
    assert_eq!(&line[27..29], ": ", "malformed tag separator: {line:?}");
    assert_eq!(line[29..30].chars().next(), Some(tag), "wrong tag in {line:?}");
    assert_eq!(&line[30..31], " ", "missing space after tag: {line:?}");
}
