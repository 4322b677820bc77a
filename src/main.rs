// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info};
use std::io::Write;
use std::path::PathBuf;

use langpick::app_config::{self, Config};
use langpick::{Controller, MediaSelection, classify, find_language_tag, guess_language};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
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
    /// Select reference and target side-files for media files (default command)
    Scan(ScanArgs),

    /// Print the language tag and subtype guessed from file names
    Guess {
        /// File names to inspect
        #[arg(value_name = "FILENAME", required = true)]
        filenames: Vec<String>,
    },

    /// Generate shell completions for langpick
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
struct ScanArgs {
    /// Input media file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Reference languages, most wanted first (e.g. 'en-US,fr')
    #[arg(short, long, value_delimiter = ',')]
    reference_languages: Option<Vec<String>>,

    /// Target language code (e.g. 'ja', 'es', 'pt-BR')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Only accept dubtitles for the target language
    #[arg(long)]
    dubs_only: bool,

    /// Configuration file path
    #[arg(short, long)]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// langpick - pick the right subtitle side-files by language
///
/// Guesses the language of subtitle side-files from their names and picks,
/// for every media file, the best reference and target side-file.
#[derive(Parser, Debug)]
#[command(name = "langpick")]
#[command(version)]
#[command(about = "Language detection and selection for media side-files")]
#[command(long_about = "langpick guesses the language of subtitle side-files from their names
and selects the best reference and target side-file for each media file.

EXAMPLES:
    langpick movie.mkv                          # Use the default config
    langpick -r en-US,en -t ja /shows/          # Scan a whole directory
    langpick -t es --dubs-only movie.mp4        # Only accept Spanish dubtitles
    langpick guess 'Movie.pt-BR.srt' 'Clip (en).ass'
    langpick completions bash > langpick.bash   # Generate bash completions

CONFIGURATION:
    Configuration is read from the file given with --config-path, or from
    langpick/conf.json in the user configuration directory. If the file
    doesn't exist, a default one is created.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    scan: ScanArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and emoji for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "❌"),
            Level::Warn => ("1;33", "🚧"),
            Level::Info => ("1;32", " "),
            Level::Debug => ("1;36", "🔍"),
            Level::Trace => ("1;35", "📋"),
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
            let (colour, emoji) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", colour, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Info until the config has been read
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "langpick", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Guess { filenames }) => {
            run_guess(&filenames);
            Ok(())
        }
        Some(Commands::Scan(args)) => run_scan(args),
        None => run_scan(cli.scan),
    }
}

fn run_guess(filenames: &[String]) {
    for filename in filenames {
        let subtype = classify(filename);
        match guess_language(filename) {
            Ok(tag) => println!("{}\t{}\t{}\t{}", filename, tag, tag.name(), subtype),
            Err(e) => {
                // Distinguish a malformed tag from an unknown language code
                match find_language_tag(filename) {
                    Some(span) => debug!("'{}' is not a known language code", span.text),
                    None => debug!("{}", e),
                }
                println!("{}\t-\t-\t{}", filename, subtype);
            }
        }
    }
}

fn run_scan(options: ScanArgs) -> Result<()> {
    if let Some(level) = options.log_level {
        log::set_max_level(app_config::LogLevel::from(level).into());
    }

    let input_path = options
        .input_path
        .clone()
        .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

    let config_path = options
        .config_path
        .clone()
        .unwrap_or_else(app_config::default_config_path);
    let mut config = Config::load_or_create(&config_path)?;

    // Override config with CLI options if provided
    if let Some(reference_languages) = options.reference_languages {
        config.reference_languages = reference_languages;
    }
    if let Some(target_language) = options.target_language {
        config.target_language = target_language;
    }
    if options.dubs_only {
        config.dubs_only = true;
    }
    if let Some(level) = options.log_level {
        config.log_level = level.into();
    } else {
        log::set_max_level(config.log_level.into());
    }

    let controller = Controller::with_config(config)?;
    let selections = controller.run(&input_path)?;

    for selection in &selections {
        print_selection(selection);
    }
    info!("Processed {} media file(s)", selections.len());

    Ok(())
}

fn print_selection(selection: &MediaSelection) {
    let show = |file: &Option<langpick::SelectedFile>| {
        file.as_ref()
            .map(|f| f.to_string())
            .unwrap_or_else(|| "-".to_string())
    };

    println!("{}", selection.media.display());
    println!("  reference: {}", show(&selection.reference));
    println!("  target:    {}", show(&selection.target));
    if selection.target_is_cc_or_dub {
        println!("  target follows the audio track (closed captions or dubtitles)");
    }
}
