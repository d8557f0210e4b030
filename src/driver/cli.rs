use std::io::{self, Write};
use std::path::PathBuf;

use crossterm::tty::IsTty;
use thiserror::Error;

use crate::logging::{
    FileSink, LogLevel, Logger, LoggingError, StderrSink, event_with_fields, json_kv, json_str,
};
use crate::{BuildingAssembler, BuildingConfig, LayoutError, RendererSettings, TextRenderer};

const TARGET: &str = "wall_layout::cli";

pub const USAGE: &str = "\
Usage: genbricks [OPTIONS]

Options:
  -c, --config <PATH>      Building configuration (JSON, or YAML for .yaml/.yml)
  -r, --random             Request randomized generation (not applied yet)
      --json               Print the layout as JSON instead of drawing it
      --log-file <PATH>    Write structured logs to PATH
      --log-max-bytes <N>  Truncate the log file once it would exceed N bytes (0: no cap)
  -v, --verbose            Log debug events to stderr
      --no-color           Disable colored output
  -h, --help               Print this help
";

pub type DriverResult<T> = std::result::Result<T, CliDriverError>;

#[derive(Debug, Error)]
pub enum CliDriverError {
    #[error("runtime error: {0}")]
    Runtime(#[from] LayoutError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("usage error: {0}")]
    Usage(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub random: bool,
    pub json: bool,
    pub log_file: Option<PathBuf>,
    pub log_max_bytes: u64,
    pub verbose: bool,
    pub no_color: bool,
    pub help: bool,
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    pub fn from_args(args: &[String]) -> DriverResult<Self> {
        let mut parsed = Self::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "-c" | "--config" => {
                    i += 1;
                    let path = args
                        .get(i)
                        .ok_or_else(|| CliDriverError::Usage("--config requires a path".into()))?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "--log-file" => {
                    i += 1;
                    let path = args.get(i).ok_or_else(|| {
                        CliDriverError::Usage("--log-file requires a path".into())
                    })?;
                    parsed.log_file = Some(PathBuf::from(path));
                }
                "--log-max-bytes" => {
                    i += 1;
                    let raw = args.get(i).ok_or_else(|| {
                        CliDriverError::Usage("--log-max-bytes requires a number".into())
                    })?;
                    parsed.log_max_bytes = raw.parse().map_err(|_| {
                        CliDriverError::Usage(format!("invalid --log-max-bytes value: {raw}"))
                    })?;
                }
                "-r" | "--random" => parsed.random = true,
                "--json" => parsed.json = true,
                "-v" | "--verbose" => parsed.verbose = true,
                "--no-color" => parsed.no_color = true,
                "-h" | "--help" => parsed.help = true,
                other => {
                    return Err(CliDriverError::Usage(format!("unknown argument: {other}")));
                }
            }
            i += 1;
        }

        Ok(parsed)
    }
}

/// Loads a configuration, lays out the building and writes the result.
pub struct CliDriver {
    args: CliArgs,
}

impl CliDriver {
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    /// Run against stdout, coloring only when it is a terminal.
    pub fn run_stdout(self) -> DriverResult<()> {
        let stdout = io::stdout();
        let color = !self.args.no_color && stdout.is_tty();
        let mut handle = stdout.lock();
        self.run(&mut handle, color)
    }

    pub fn run(&self, writer: &mut impl Write, color: bool) -> DriverResult<()> {
        if self.args.help {
            writer.write_all(USAGE.as_bytes())?;
            return Ok(());
        }

        let logger = self.logger()?;

        let config = match &self.args.config {
            Some(path) => BuildingConfig::from_path(path)?,
            None => BuildingConfig::default(),
        };
        let source = self
            .args
            .config
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<defaults>".to_string());
        let _ = logger.log_event(event_with_fields(
            LogLevel::Info,
            TARGET,
            "config_loaded",
            [
                json_str("source", source),
                json_kv("length", config.length.value),
                json_kv("width", config.width.value),
                json_kv("height", config.height.value),
                json_kv("number_of_doors", config.number_of_doors.value),
                json_str("primary_material", config.primary_material.clone()),
            ],
        ));

        if self.args.random || config.randomization_requested() {
            let _ = logger.log_event(event_with_fields(
                LogLevel::Warn,
                TARGET,
                "randomization_not_applied",
                [
                    json_kv("flag", self.args.random),
                    json_kv("descriptors", config.randomization_requested()),
                ],
            ));
        }

        let mut assembler = BuildingAssembler::default().with_logger(logger);
        let layout = assembler.assemble(&config)?;

        if self.args.json {
            writeln!(writer, "{}", layout.to_json()?)?;
            return Ok(());
        }

        let renderer = TextRenderer::new(RendererSettings {
            color,
            ..RendererSettings::default()
        });
        renderer.render_building(writer, &layout)?;

        let quota = layout.quota;
        writeln!(
            writer,
            "doors: requested {}, assigned {} (front {}, back {}, left {}, right {})",
            config.number_of_doors.value,
            quota.total(),
            quota.front,
            quota.back,
            quota.left,
            quota.right
        )?;
        writeln!(writer, "fingerprint: {}", layout.fingerprint()?)?;
        writer.flush()?;
        Ok(())
    }

    fn logger(&self) -> DriverResult<Logger> {
        if let Some(path) = &self.args.log_file {
            let sink = FileSink::new(path, self.args.log_max_bytes)?;
            return Ok(Logger::new(sink).with_min_level(LogLevel::Debug));
        }
        let level = if self.args.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        };
        Ok(Logger::new(StderrSink).with_min_level(level))
    }
}
