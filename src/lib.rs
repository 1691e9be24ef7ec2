// Statusline: init-style terminal status lines.
//
// A message is printed with a right-aligned `[....]`/`[PASS]`/`[WARN]`/`[FAIL]`
// marker, and the marker can later be redrawn in place without reprinting
// the message.

mod macros;

pub mod config;
pub mod output;
pub mod status;

pub use config::{ColorMode, Config};
pub use output::terminal::StatusWriter;
pub use output::{available_width, format_line, ELLIPSIS};
pub use status::StatusKind;
