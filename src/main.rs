use std::io::{self, Write};
use std::process::{Command, ExitCode};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{debug, info};

use statusline::{ColorMode, Config, StatusKind, StatusWriter};

/// Statusline: init-style status lines for shell scripts.
///
/// Prints `message ... [PASS]` style lines with a fixed width, and can run a
/// command behind a pending line that flips to PASS or FAIL when it exits.
#[derive(Parser)]
#[command(name = "statusline", version, about)]
struct Cli {
    /// Line width in columns (overrides STATUSLINE_WIDTH)
    #[arg(long, global = true)]
    width: Option<usize>,

    /// Color markers: auto, always or never (overrides STATUSLINE_COLOR)
    #[arg(long, value_enum, global = true)]
    color: Option<ColorMode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a single finished status line
    Show {
        /// Status to display: pending, success, warning or failure
        status: StatusKind,

        /// Message text (words are joined with spaces)
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Run a command behind a pending line, then mark it PASS or FAIL
    Exec {
        /// Message shown while the command runs
        message: String,

        /// Command and its arguments
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },

    /// Walk through every status and an in-place transition
    Demo {
        /// Pause between status changes, in milliseconds (default: 400)
        #[arg(long, default_value = "400")]
        delay_ms: u64,
    },
}

fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so they never land in the middle of an open line
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("statusline=warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(width) = cli.width {
        config.width = width;
        config.check_width();
    }
    if let Some(color) = cli.color {
        config.color = color;
    }
    debug!(?config, "resolved configuration");

    let mut writer = StatusWriter::from_config(&config);

    match cli.command {
        Commands::Show { status, message } => {
            writer.print_line(status, &message.join(" "));
            writer.end_line();
            Ok(ExitCode::SUCCESS)
        }

        Commands::Exec { message, command } => {
            let code = run_command(&mut writer, &mut io::stderr(), &message, &command)?;
            Ok(ExitCode::from(code))
        }

        Commands::Demo { delay_ms } => {
            run_demo(&mut writer, Duration::from_millis(delay_ms));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Run `command` while a pending line is shown, then settle the line on the
/// command's outcome. Once the line is closed, the child's captured stdout
/// goes back out through the writer's sink and its stderr to `err`.
/// Returns the child's exit code.
fn run_command<W: Write, E: Write>(
    writer: &mut StatusWriter<W>,
    err: &mut E,
    message: &str,
    command: &[String],
) -> Result<u8> {
    let (program, args) = command
        .split_first()
        .context("no command given after --")?;

    writer.pending(message);

    let output = match Command::new(program).args(args).output() {
        Ok(output) => output,
        Err(e) => {
            writer.mark_failure().end_line();
            return Err(e).with_context(|| format!("failed to run '{program}'"));
        }
    };

    let succeeded = output.status.success();
    info!(program = %program, status = %output.status, "command finished");

    writer
        .update_status(StatusKind::from_exit(succeeded))
        .end_line();

    replay("stdout", writer.get_mut(), &output.stdout);
    replay("stderr", err, &output.stderr);

    // Killed by a signal: no exit code to forward
    let code = output.status.code().unwrap_or(1);
    Ok(u8::try_from(code).unwrap_or(1))
}

/// Copy captured child output to `sink`, logging instead of failing.
fn replay<S: Write>(stream: &'static str, sink: &mut S, bytes: &[u8]) {
    if bytes.is_empty() {
        return;
    }
    if let Err(e) = sink.write_all(bytes).and_then(|()| sink.flush()) {
        debug!(stream, error = %e, "failed to replay command output");
    }
}

fn run_demo<W: Write>(writer: &mut StatusWriter<W>, delay: Duration) {
    println!("{}", "=== Status line demo ===".bold());
    println!();

    for kind in [StatusKind::Success, StatusKind::Warning, StatusKind::Failure] {
        writer.pending_fmt(format_args!(" Operation ending in {kind}"));
        thread::sleep(delay);
        writer.update_status(kind).end_line();
    }

    writer.pending(" Passing through every status before failing");
    for kind in [StatusKind::Success, StatusKind::Warning, StatusKind::Failure] {
        thread::sleep(delay);
        writer.update_status(kind);
    }
    writer.end_line();

    writer.pending(" Staying pending");
    writer.end_line();

    writer.pending(
        " This is a very very very very long status message that gets truncated so the line never overflows",
    );
    thread::sleep(delay);
    writer.mark_success().end_line();

    println!();
    println!(
        "{}",
        format!("Width: {} columns", writer.width()).dimmed()
    );
}
