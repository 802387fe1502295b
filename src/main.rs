// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{error, info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

use l10n_lint::app_config::{self, Config};
use l10n_lint::Controller;

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
    /// Check translated catalogs against the untranslated templates (default command)
    Lint(LintArgs),

    /// Print the tags, attributes and values found in the untranslated templates
    Tags(CommonArgs),

    /// Generate shell completions for l10n-lint
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    /// Untranslated template, directory or glob pattern (repeatable)
    #[arg(short, long, value_name = "INPUT")]
    untranslated: Vec<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "l10n-lint.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Args, Debug, Clone)]
struct LintArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Translated catalogs, directories or glob patterns to check
    #[arg(value_name = "TRANSLATED")]
    translated: Vec<String>,
}

/// l10n-lint - Lint your translations
///
/// Checks that translated strings only use the HTML tags, attributes and
/// attribute values found in the untranslated strings.
#[derive(Parser, Debug)]
#[command(name = "l10n-lint")]
#[command(version)]
#[command(about = "Check gettext translations for unexpected or malformed HTML")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "l10n-lint builds a list of the HTML tags, attributes and attribute values used
in the untranslated .pot templates, then checks every translation in the .po
catalogs against it. Malformed HTML and any markup not found in the templates
is reported, and the process exits with a non-zero status.

EXAMPLES:
    l10n-lint                                        # Use inputs from l10n-lint.json
    l10n-lint -u 'locale/templates/**/*.pot' locale/ # Explicit templates, every .po under locale/
    l10n-lint -l debug locale/fr/client.po           # Check one catalog with debug logging
    l10n-lint tags -u locale/templates               # Print the allow-list as JSON
    l10n-lint completions bash > l10n-lint.bash      # Generate bash completions

CONFIGURATION:
    Configuration is read from l10n-lint.json by default. You can specify a
    different file with --config-path. Command line inputs replace the ones
    from the file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    lint: LintArgs,
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

    // @returns: ANSI colour and tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
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
            let (colour, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", colour, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; the effective level is applied through
    // log::set_max_level once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "l10n-lint", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Tags(args)) => run_tags(args),
        Some(Commands::Lint(args)) => run_lint(args),
        None => run_lint(cli.lint),
    }
}

/// Load the config file and apply command line overrides
fn load_config(common: &CommonArgs, translated: &[String]) -> Result<Config> {
    // Apply a command line log level before anything is logged
    if let Some(cmd_log_level) = &common.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_default(&common.config_path)?;

    if !common.untranslated.is_empty() {
        config.untranslated = common.untranslated.clone();
    }

    if !translated.is_empty() {
        config.translated = translated.to_vec();
    }

    match &common.log_level {
        Some(log_level) => config.log_level = log_level.clone().into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    Ok(config)
}

fn run_lint(args: LintArgs) -> Result<()> {
    let config = load_config(&args.common, &args.translated)?;
    let controller = Controller::with_config(config)?;

    let report = controller.run()?;

    if report.passed() {
        info!("{}", report.summary());
        Ok(())
    } else {
        error!("{}", report.summary());
        log::logger().flush();
        std::process::exit(1);
    }
}

fn run_tags(args: CommonArgs) -> Result<()> {
    let config = load_config(&args, &[])?;
    let controller = Controller::with_config(config)?;

    let allow_list = controller.build_allow_list()?;
    println!("{}", allow_list.to_json_pretty()?);

    Ok(())
}
