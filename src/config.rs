use std::env;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::status::StatusKind;

/// Default line width when STATUSLINE_WIDTH is unset.
pub const DEFAULT_WIDTH: usize = 80;

/// When to emit colored status markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Follow NO_COLOR / CLICOLOR / CLICOLOR_FORCE and TTY detection
    #[default]
    Auto,
    /// Always emit color sequences
    Always,
    /// Never emit color sequences
    Never,
}

impl ColorMode {
    /// Resolve the mode to a yes/no answer for the current process.
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(ColorMode::Auto),
            "always" | "true" | "1" => Ok(ColorMode::Always),
            "never" | "false" | "0" => Ok(ColorMode::Never),
            other => bail!("invalid color mode '{other}' (expected auto, always or never)"),
        }
    }
}

/// Settings for status line output, loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, so either source works.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Total width each line is budgeted against (STATUSLINE_WIDTH)
    pub width: usize,
    /// Color behaviour for markers (STATUSLINE_COLOR)
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            color: ColorMode::Auto,
        }
    }
}

impl Config {
    /// Load configuration from STATUSLINE_WIDTH and STATUSLINE_COLOR.
    pub fn load() -> Result<Self> {
        Self::from_values(
            env::var("STATUSLINE_WIDTH").ok().as_deref(),
            env::var("STATUSLINE_COLOR").ok().as_deref(),
        )
    }

    /// Build a config from raw setting values. `None` means "use the default".
    pub fn from_values(width: Option<&str>, color: Option<&str>) -> Result<Self> {
        let width = match width {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("STATUSLINE_WIDTH must be a column count, got '{raw}'"))?,
            None => DEFAULT_WIDTH,
        };

        let color = match color {
            Some(raw) => raw.parse::<ColorMode>().context("STATUSLINE_COLOR")?,
            None => ColorMode::Auto,
        };

        let config = Self { width, color };
        config.check_width();
        Ok(config)
    }

    /// Whether markers should be written with color sequences.
    pub fn color_enabled(&self) -> bool {
        self.color.enabled()
    }

    /// Warn when the width can't hold any message text next to a marker.
    /// Such widths still work; the body is just empty.
    pub fn check_width(&self) {
        let min = StatusKind::max_visible_width() + 1;
        if self.width <= min {
            warn!(
                width = self.width,
                min_useful = min + 1,
                "status line width leaves no room for messages"
            );
        }
    }
}
