// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use feedlog::app_config::{self, Config};
use feedlog::app_controller::{Controller, InputSource};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for feedlog
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// feedlog - bilingual changelog to update-feed description
///
/// Converts release notes written as a Chinese block and an English block
/// into the `<description>` element of an update feed item.
#[derive(Parser, Debug)]
#[command(name = "feedlog")]
#[command(version)]
#[command(about = "Render bilingual release notes as an update-feed description")]
#[command(long_about = "feedlog reads release notes made of a Chinese block and an English block
separated by a line of twenty '=' characters, and prints the <description>
element of an update feed item. Lines starting with 'PS:' become postscript notes.

EXAMPLES:
    feedlog                                  # Render the built-in release notes
    feedlog notes.txt                        # Render notes from a file
    cat notes.txt | feedlog --stdin          # Render notes from standard input
    feedlog notes.txt -o description.xml     # Write to a file instead of stdout
    feedlog --product-name MyApp notes.txt   # Override the product name
    feedlog completions bash > feedlog.bash  # Generate bash completions

CONFIGURATION:
    Settings are read from feedlog.json when it exists. Use --config to point
    at another file and --init-config to write the effective settings to it.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Changelog text file (defaults to the built-in release notes)
    #[arg(value_name = "INPUT_PATH", conflicts_with = "stdin")]
    input_path: Option<PathBuf>,

    /// Read the changelog from standard input
    #[arg(long)]
    stdin: bool,

    /// Write the description to this file instead of standard output
    #[arg(short, long, value_name = "OUTPUT_PATH")]
    output: Option<PathBuf>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Product name shown in the section headers
    #[arg(short, long)]
    product_name: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "feedlog.json")]
    config_path: PathBuf,

    /// Write the effective configuration to the config file
    #[arg(long)]
    init_config: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::style_for_level(record.level());

            // stdout is reserved for the rendered description
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Accept everything here and narrow with set_max_level once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "feedlog", &mut std::io::stdout());
        return Ok(());
    }

    run_generate(cli)
}

fn run_generate(options: CommandLineOptions) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_default(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(product_name) = &options.product_name {
        config.product_name = product_name.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(config.log_level.to_level_filter());
    }

    if options.init_config {
        config.save_to_file(&options.config_path)
            .with_context(|| format!("Failed to write config file: {}", options.config_path.display()))?;
        info!("Wrote configuration to {}", options.config_path.display());
    }

    let controller = Controller::with_config(config)?;

    let source = match options.input_path {
        Some(path) => {
            if !path.is_file() {
                warn!("Input path is not a regular file: {:?}", path);
            }
            InputSource::File(path)
        }
        None if options.stdin => InputSource::Stdin,
        None => InputSource::Builtin,
    };

    let write_to_stdout = options.output.is_none();
    let xml = controller.run(source, options.output, options.force_overwrite)?;

    if write_to_stdout {
        println!("{}", xml);
    }

    Ok(())
}
