//! Command-line interface for the diamond utility
//!
//! Reads one token from the command line and prints its diamond.

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::colorizer::colorize_output;
use diamond::core::logging::init_logging;
use diamond::{Diamond, DiamondGenerator, LineEnding, Padding, RenderConfig};

/// Diamond - print a letter or number diamond
#[derive(Parser, Debug)]
#[command(name = "diamond")]
#[command(about = "Print a diamond of letters (a..letter) or numbers (0..number)")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    /// A single letter, or a non-negative integer up to 4095
    #[arg(allow_hyphen_values = true)]
    pub input: Option<String>,

    /// Output file for the diamond (use - for stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How rows are padded to the diamond's width
    #[arg(long, value_enum, default_value_t = PaddingChoice::Symmetric)]
    pub padding: PaddingChoice,

    /// Separator placed between rows
    #[arg(long, value_enum, default_value_t = LineEndingChoice::Native)]
    pub line_ending: LineEndingChoice,

    /// When to use colors in output
    #[arg(long, value_enum, default_value_t = ColorChoice::Never)]
    pub color: ColorChoice,

    /// Print a JSON report instead of the diamond text
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level [default: DIAMOND_LOG_LEVEL, RUST_LOG, then warn]
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format [default: DIAMOND_LOG_FORMAT, then compact]
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// The explicit logging flags, `None` where the flag was not given
    pub fn log_settings(&self) -> (Option<&'static str>, Option<&'static str>) {
        (
            self.log_level.map(|level| level.as_str()),
            self.log_format.map(|format| format.as_str()),
        )
    }
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Row padding styles
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum PaddingChoice {
    /// Pad both sides; every row has the same width
    #[default]
    Symmetric,
    /// Pad the left side only
    Leading,
}

impl From<PaddingChoice> for Padding {
    fn from(value: PaddingChoice) -> Self {
        match value {
            PaddingChoice::Symmetric => Padding::Symmetric,
            PaddingChoice::Leading => Padding::Leading,
        }
    }
}

/// Row separators
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum LineEndingChoice {
    /// The platform separator
    #[default]
    Native,
    Lf,
    Crlf,
}

impl From<LineEndingChoice> for LineEnding {
    fn from(value: LineEndingChoice) -> Self {
        match value {
            LineEndingChoice::Native => LineEnding::Native,
            LineEndingChoice::Lf => LineEnding::Lf,
            LineEndingChoice::Crlf => LineEnding::CrLf,
        }
    }
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if output is a terminal and NO_COLOR is not set
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    #[default]
    Never,
}

/// JSON report printed with `--json`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DiamondReport {
    pub input: String,
    pub kind: String,
    pub rank: usize,
    pub width: usize,
    pub uppercase: bool,
    pub rows: Vec<String>,
}

impl DiamondReport {
    pub fn new(input: &str, uppercase: bool, diamond: Diamond) -> Self {
        Self {
            input: input.to_string(),
            kind: diamond.symbol().kind().to_string(),
            rank: diamond.rank(),
            width: diamond.width(),
            uppercase,
            rows: diamond.into_rows(),
        }
    }
}

/// Main CLI application
pub struct DiamondApp {
    generator: DiamondGenerator,
}

impl DiamondApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create a new application instance with a render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            generator: DiamondGenerator::with_config(config),
        }
    }

    fn build_config(padding: PaddingChoice, line_ending: LineEndingChoice) -> RenderConfig {
        RenderConfig::new(padding.into(), line_ending.into())
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Flags left unset fall back to the environment inside init_logging
        let (log_level, log_format) = cli.log_settings();
        if let Err(e) = init_logging(log_level, log_format) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Diamond v{}", env!("CARGO_PKG_VERSION"));
        }

        *self = Self::with_config(Self::build_config(cli.padding, cli.line_ending));

        let content = if cli.json {
            self.report(cli.input.as_deref())?
        } else {
            self.render(cli.input.as_deref())?
        };

        if cli.verbose {
            eprintln!("Rendered {} bytes", content.len());
        }

        let final_output = if !cli.json && self.should_colorize(&cli.output, cli.color) {
            colorize_output(&content)
        } else {
            content
        };
        self.write_output(cli.output, &final_output)
    }

    /// Render the diamond text for `input`
    pub fn render(&self, input: Option<&str>) -> Result<String> {
        Ok(self.generator.generate(input)?)
    }

    /// Render the JSON report for `input`
    pub fn report(&self, input: Option<&str>) -> Result<String> {
        let token = self.generator.validate(input)?;
        let diamond = self.generator.build(&token);
        let report = DiamondReport::new(input.unwrap_or_default(), token.uppercase, diamond);
        debug!(rank = report.rank, "Built JSON report");
        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// Determine if we should colorize the output based on color choice and output destination
    fn should_colorize(&self, output: &Option<PathBuf>, color: ColorChoice) -> bool {
        match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                match output {
                    None => crossterm::tty::IsTty::is_tty(&std::io::stdout()),
                    Some(ref p) if p.to_str() == Some("-") => {
                        crossterm::tty::IsTty::is_tty(&std::io::stdout())
                    }
                    Some(_) => false,
                }
            }
        }
    }

    /// Write output to file or stdout, verbatim and without a trailing newline
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

impl Default for DiamondApp {
    fn default() -> Self {
        Self::new()
    }
}
