// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::Config;
use crate::session_controller::SessionController;
use crate::speech::SpeechCaptureController;
use crate::translation_client::TranslationClient;

mod app_config;
mod errors;
mod language_catalog;
mod providers;
mod session_controller;
mod speech;
mod translation_client;

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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text between two languages (default command)
    Translate(TranslateArgs),

    /// Start an interactive session with voice toggle
    Interactive(SessionArgs),

    /// List the supported languages
    Languages,

    /// Generate shell completions for voxlate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Text to translate
    #[arg(value_name = "TEXT")]
    text: String,

    /// Source language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    #[command(flatten)]
    session: SessionArgs,
}

#[derive(Parser, Debug)]
struct SessionArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Translation API key
    #[arg(short = 'k', long, env = "VOXLATE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// voxlate - Text & Voice Translation
///
/// Translates typed or spoken text between languages using an external
/// translation API.
#[derive(Parser, Debug)]
#[command(name = "voxlate")]
#[command(version = "1.0.0")]
#[command(about = "Text & voice translation tool")]
#[command(long_about = "voxlate translates typed or spoken text between languages using an external translation API.

EXAMPLES:
    voxlate \"Hello\" -s en -t fr               # One-shot translation
    voxlate interactive                        # Interactive session
    voxlate languages                          # Show the language catalog
    voxlate completions bash > voxlate.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically. The API key is never stored in the file;
    set VOXLATE_API_KEY or pass --api-key.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text to translate
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Source language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    #[command(flatten)]
    session: SessionArgs,
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

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
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
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {}\x1B[0m",
                color,
                now,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "voxlate", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Languages) => {
            run_languages();
            Ok(())
        }
        Some(Commands::Interactive(args)) => run_interactive(args).await,
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let text = cli
                .text
                .ok_or_else(|| anyhow!("TEXT is required when no subcommand is specified"))?;

            let translate_args = TranslateArgs {
                text,
                source_language: cli.source_language,
                target_language: cli.target_language,
                session: cli.session,
            };
            run_translate(translate_args).await
        }
    }
}

/// Load or create the configuration, applying command-line overrides
fn load_config(options: &SessionArgs) -> Result<Config> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    if let Some(api_key) = &options.api_key {
        config.provider.api_key = api_key.clone();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    Ok(config)
}

/// Build a session controller from the configuration
///
/// No speech backend is wired by default; voice capture reports the
/// capability as unavailable unless an embedder injects one through the
/// library API.
fn build_controller(config: &Config) -> SessionController {
    let provider = providers::rapid_google::RapidGoogle::new(
        config.provider.api_key.clone(),
        config.provider.host.clone(),
        config.provider.endpoint.clone(),
    );
    let translator = TranslationClient::new(Arc::new(provider));
    let capture = SpeechCaptureController::new(None, config.recognition_locale.clone());

    SessionController::new(translator, capture)
}

/// Spinner shown while a request is in flight
fn request_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Translating...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    let config = load_config(&options.session)?;
    config.require_api_key()?;

    let controller = build_controller(&config);
    controller.set_input_text(options.text);
    if let Some(source) = &options.source_language {
        check_catalog(source);
        controller.set_source_language(source.clone());
    }
    if let Some(target) = &options.target_language {
        check_catalog(target);
        controller.set_target_language(target.clone());
    }

    let spinner = request_spinner();
    controller.request_translation().await;
    spinner.finish_and_clear();

    let state = controller.snapshot();
    if let Some(message) = state.error_message {
        return Err(anyhow!(message));
    }

    info!(
        "{} -> {}",
        language_catalog::display_name(state.source_language.as_deref().unwrap_or("")),
        language_catalog::display_name(state.target_language.as_deref().unwrap_or(""))
    );
    println!("{}", state.result_text);

    Ok(())
}

async fn run_interactive(options: SessionArgs) -> Result<()> {
    let config = load_config(&options)?;
    config.require_api_key()?;

    let controller = build_controller(&config);

    println!("voxlate interactive session");
    println!("Type text to set the input, then :translate to submit.");
    println!("Commands: :source CODE, :target CODE, :voice, :translate, :state, :languages, :quit");

    let stdin = std::io::stdin();
    loop {
        render_prompt(&controller);

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        match line.split_once(' ').map_or((line, ""), |(cmd, rest)| (cmd, rest.trim())) {
            (":quit", _) | (":q", _) => break,
            (":source", code) => {
                check_catalog(code);
                controller.set_source_language(code);
            }
            (":target", code) => {
                check_catalog(code);
                controller.set_target_language(code);
            }
            (":voice", _) => {
                controller.toggle_voice_capture();
                let state = controller.snapshot();
                if state.is_listening {
                    println!("Listening... type :voice again to stop.");
                }
            }
            (":translate", _) => {
                let spinner = request_spinner();
                controller.request_translation().await;
                spinner.finish_and_clear();

                let state = controller.snapshot();
                if state.error_message.is_none() {
                    println!("{}", state.result_text);
                }
            }
            (":state", _) => {
                let state = controller.snapshot();
                println!("input:  {}", state.input_text);
                println!(
                    "route:  {} -> {}",
                    state.source_language.as_deref().unwrap_or("--"),
                    state.target_language.as_deref().unwrap_or("--")
                );
                println!("result: {}", state.result_text);
            }
            (":languages", _) => run_languages(),
            (command, _) if command.starts_with(':') => {
                warn!("Unknown command: {}", command);
            }
            _ => controller.set_input_text(line),
        }

        render_error_banner(&controller);
    }

    Ok(())
}

/// Print the error banner when the session holds an error message
fn render_error_banner(controller: &SessionController) {
    if let Some(message) = controller.snapshot().error_message {
        error!("{}", message);
    }
}

/// Show the current language selection, with placeholders for unset codes
fn render_prompt(controller: &SessionController) {
    let state = controller.snapshot();
    let marker = if state.is_listening { " (listening)" } else { "" };
    print!(
        "[{} -> {}]{}> ",
        state.source_language.as_deref().unwrap_or("--"),
        state.target_language.as_deref().unwrap_or("--"),
        marker
    );
    let _ = std::io::stdout().flush();
}

/// Warn about codes outside the catalog; they are still passed through
fn check_catalog(code: &str) {
    if !code.is_empty() && !language_catalog::is_supported(code) {
        warn!("'{}' is not in the language catalog; passing it through as-is", code);
    }
}

fn run_languages() {
    println!("{:<8} NAME", "CODE");
    for entry in language_catalog::all() {
        println!("{:<8} {}", entry.code, entry.name);
    }
}
