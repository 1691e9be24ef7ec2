// Init-style status lines: `Message ......... [PASS]`.
//
// A line is printed once with its initial status and left open (no newline).
// Later updates rewind with a carriage return and redraw the stored body with
// a new marker, so only the status appears to change. `end_line` closes the
// line. Write errors are logged and dropped: this is display output, and a
// broken pipe on a status line should never take the caller down.

use std::fmt;
use std::io::{self, Stdout, Write};

use tracing::debug;

use super::format_line;
use crate::config::Config;
use crate::status::StatusKind;

/// Writes status lines to `out`, remembering the last one for in-place updates.
///
/// Only the most recent line can be updated, and only until [`end_line`]
/// is called. Nothing enforces this; updating after `end_line` draws over
/// whatever line the cursor is on.
///
/// [`end_line`]: StatusWriter::end_line
pub struct StatusWriter<W: Write> {
    out: W,
    last_message: String,
    last_status: StatusKind,
    width: usize,
    color: bool,
}

impl StatusWriter<Stdout> {
    /// Plain (uncolored) writer on standard output.
    pub fn stdout(width: usize) -> Self {
        Self::new(io::stdout(), width)
    }

    /// Writer on standard output using the configured width and color mode.
    pub fn from_config(config: &Config) -> Self {
        Self::with_color(io::stdout(), config.width, config.color_enabled())
    }
}

impl<W: Write> StatusWriter<W> {
    /// Create a writer that renders lines `width` columns wide without color.
    pub fn new(out: W, width: usize) -> Self {
        Self::with_color(out, width, false)
    }

    pub fn with_color(out: W, width: usize, color: bool) -> Self {
        Self {
            out,
            last_message: String::new(),
            last_status: StatusKind::Pending,
            width,
            color,
        }
    }

    /// Print `message` with the given status, leaving the line open.
    pub fn print_line(&mut self, kind: StatusKind, message: &str) {
        self.last_message = format_line(message, kind, self.width);
        self.last_status = kind;
        let marker = kind.marker(self.color);
        self.emit("print_line", |out, body| write!(out, "{body}{marker}"));
    }

    /// Like [`print_line`](Self::print_line), taking pre-built format arguments.
    ///
    /// Arguments without substitutions are used verbatim.
    pub fn print_line_fmt(&mut self, kind: StatusKind, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(literal) => self.print_line(kind, literal),
            None => self.print_line(kind, &args.to_string()),
        }
    }

    /// Redraw the last printed line with a new status.
    ///
    /// The stored body is reused as-is, not re-formatted.
    pub fn update_status(&mut self, kind: StatusKind) -> &mut Self {
        self.last_status = kind;
        let marker = kind.marker(self.color);
        self.emit("update_status", |out, body| write!(out, "\r{body}{marker}"));
        self
    }

    /// Terminate the current line.
    pub fn end_line(&mut self) {
        self.emit("end_line", |out, _| out.write_all(b"\n"));
    }

    pub fn pending(&mut self, message: &str) {
        self.print_line(StatusKind::Pending, message);
    }

    pub fn success(&mut self, message: &str) {
        self.print_line(StatusKind::Success, message);
    }

    pub fn warning(&mut self, message: &str) {
        self.print_line(StatusKind::Warning, message);
    }

    pub fn failure(&mut self, message: &str) {
        self.print_line(StatusKind::Failure, message);
    }

    pub fn pending_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.print_line_fmt(StatusKind::Pending, args);
    }

    pub fn success_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.print_line_fmt(StatusKind::Success, args);
    }

    pub fn warning_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.print_line_fmt(StatusKind::Warning, args);
    }

    pub fn failure_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.print_line_fmt(StatusKind::Failure, args);
    }

    /// Mark the last line as still in progress.
    pub fn mark_pending(&mut self) -> &mut Self {
        self.update_status(StatusKind::Pending)
    }

    /// Mark the last line as a success.
    pub fn mark_success(&mut self) -> &mut Self {
        self.update_status(StatusKind::Success)
    }

    /// Mark the last line as a warning.
    pub fn mark_warning(&mut self) -> &mut Self {
        self.update_status(StatusKind::Warning)
    }

    /// Mark the last line as a failure.
    pub fn mark_failure(&mut self) -> &mut Self {
        self.update_status(StatusKind::Failure)
    }

    /// Body of the last printed line, padded or truncated, without its marker.
    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    pub fn last_status(&self) -> StatusKind {
        self.last_status
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Give back the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run a write against the sink and flush, logging instead of failing.
    ///
    /// Lines are left open between calls, so the flush is what makes them
    /// visible on line-buffered streams.
    fn emit<F>(&mut self, op: &'static str, write: F)
    where
        F: FnOnce(&mut W, &str) -> io::Result<()>,
    {
        let result = write(&mut self.out, &self.last_message).and_then(|()| self.out.flush());
        if let Err(e) = result {
            debug!(op, error = %e, "status line write failed");
        }
    }
}
