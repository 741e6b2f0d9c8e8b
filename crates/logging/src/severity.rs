//! crates/logging/src/severity.rs
//! Ordered severity levels and their one-character display tags.

/// Severity of a diagnostic line, ordered from least to most important.
///
/// The declaration order defines the filtering order: a record is emitted
/// when its severity is at or above the configured threshold. Each severity
/// also selects the destination stream, with everything up to [`Severity::Info`]
/// going to standard output and the rest to standard error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Finest-grained tracing output.
    Trace,
    /// Debugging output.
    Debug,
    /// Informational messages.
    Info,
    /// Suspicious conditions; the default threshold.
    Warning,
    /// Errors the library can continue past.
    Error,
    /// Unrecoverable errors; emitting one aborts the process.
    Fatal,
}

/// One-character tag per severity, indexed by ordinal.
///
/// Invariant: exactly one entry per [`Severity`] variant, in declaration order.
const SEVERITY_TAGS: [char; 6] = ['T', 'D', 'I', 'W', 'E', 'F'];

impl Severity {
    /// Returns the one-character tag shown in rendered lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use gloo_logging::Severity;
    ///
    /// assert_eq!(Severity::Warning.tag(), 'W');
    /// ```
    #[must_use]
    pub const fn tag(self) -> char {
        SEVERITY_TAGS[self as usize]
    }

    /// Maps a case-insensitive severity name to its value.
    ///
    /// Matching is exact after ASCII lowercasing; there are no partial
    /// matches. Unrecognised names silently fall back to
    /// [`Severity::Warning`], the documented default; no error is raised.
    ///
    /// # Examples
    ///
    /// ```
    /// use gloo_logging::Severity;
    ///
    /// assert_eq!(Severity::from_name("Debug"), Severity::Debug);
    /// assert_eq!(Severity::from_name("bogus"), Severity::Warning);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warning" => Self::Warning,
            "error" => Self::Error,
            "fatal" => Self::Fatal,
            _ => Self::Warning,
        }
    }

    /// Reports whether records at this severity are written to standard
    /// output rather than standard error.
    #[must_use]
    pub const fn uses_stdout(self) -> bool {
        matches!(self, Self::Trace | Self::Debug | Self::Info)
    }
}
