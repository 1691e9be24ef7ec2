// Status kinds and their bracketed markers.
//
// Every marker is a fixed string constant. The colored variants wrap the
// label in bold + color SGR sequences, which take up no terminal columns, so
// width math always goes through `visible_width()` and never through the
// byte length of the colored text.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;

const PENDING_PLAIN: &str = "[....]";
const SUCCESS_PLAIN: &str = "[PASS]";
const WARNING_PLAIN: &str = "[WARN]";
const FAILURE_PLAIN: &str = "[FAIL]";

const SUCCESS_COLORED: &str = "[\x1b[1m\x1b[32mPASS\x1b[0m]";
const WARNING_COLORED: &str = "[\x1b[1m\x1b[33mWARN\x1b[0m]";
const FAILURE_COLORED: &str = "[\x1b[1m\x1b[31mFAIL\x1b[0m]";

/// The state shown in the bracketed indicator at the end of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusKind {
    /// Operation in progress
    #[default]
    Pending,
    /// Operation completed
    Success,
    /// Completed, but something needs attention
    Warning,
    /// Operation failed
    Failure,
}

impl StatusKind {
    pub const ALL: [StatusKind; 4] = [
        StatusKind::Pending,
        StatusKind::Success,
        StatusKind::Warning,
        StatusKind::Failure,
    ];

    /// The four-character label shown between the brackets.
    pub fn label(self) -> &'static str {
        match self {
            StatusKind::Pending => "....",
            StatusKind::Success => "PASS",
            StatusKind::Warning => "WARN",
            StatusKind::Failure => "FAIL",
        }
    }

    /// The full bracketed marker, with or without color sequences.
    ///
    /// Pending is never colored.
    pub fn marker(self, color: bool) -> &'static str {
        match (self, color) {
            (StatusKind::Pending, _) => PENDING_PLAIN,
            (StatusKind::Success, false) => SUCCESS_PLAIN,
            (StatusKind::Success, true) => SUCCESS_COLORED,
            (StatusKind::Warning, false) => WARNING_PLAIN,
            (StatusKind::Warning, true) => WARNING_COLORED,
            (StatusKind::Failure, false) => FAILURE_PLAIN,
            (StatusKind::Failure, true) => FAILURE_COLORED,
        }
    }

    /// Number of terminal columns the marker occupies: label plus brackets.
    pub fn visible_width(self) -> usize {
        self.label().chars().count() + 2
    }

    /// Widest marker across all kinds.
    pub fn max_visible_width() -> usize {
        Self::ALL
            .iter()
            .map(|k| k.visible_width())
            .max()
            .unwrap_or(0)
    }

    /// Map a process outcome onto a final status.
    pub fn from_exit(success: bool) -> Self {
        if success {
            StatusKind::Success
        } else {
            StatusKind::Failure
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusKind::Pending => "pending",
            StatusKind::Success => "success",
            StatusKind::Warning => "warning",
            StatusKind::Failure => "failure",
        };
        f.write_str(name)
    }
}

impl FromStr for StatusKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(StatusKind::Pending),
            "success" | "pass" | "ok" => Ok(StatusKind::Success),
            "warning" | "warn" => Ok(StatusKind::Warning),
            "failure" | "fail" => Ok(StatusKind::Failure),
            other => bail!(
                "unknown status '{other}' (expected pending, success, warning or failure)"
            ),
        }
    }
}
