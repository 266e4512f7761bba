use anyhow::Context;
use clap::Parser;
use cwalert::alarm::{normalize, parse_alarm_json, parse_dimensions};
use cwalert::config::Config;
use cwalert::error::ConfigError;
use cwalert::output::{self, OutputFormat};
use cwalert::translator::{get_supported_metrics, MetricFormat, TranslationOptions, Translator};
use log::{debug, error, info, warn};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Command-line arguments for the CloudWatch alarm translator
#[derive(Parser)]
#[command(
    name = "cwalert",
    about = "Translate CloudWatch alarms into Grafana/Prometheus alert rules",
    long_about = "Reads a CloudWatch alarm as JSON (either the output of \
                  `aws cloudwatch describe-alarms` or a hand-written document) and prints \
                  the equivalent Grafana/Prometheus alerting rule group."
)]
struct Cli {
    /// Alarm JSON file
    #[arg(value_name = "INPUT", help = "Alarm JSON file; omit or use '-' to read stdin")]
    input: Option<PathBuf>,

    /// Path to configuration file
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Configuration file path (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Folder for the generated group
    #[arg(short, long, value_name = "NAME")]
    folder: Option<String>,

    /// Naming for metrics outside the built-in table
    #[arg(short, long, value_name = "FORMAT", help = "Metric format: yace or push_metric")]
    metric_format: Option<MetricFormat>,

    /// No-data state carried into the translation options
    #[arg(long, value_name = "STATE")]
    no_data_state: Option<String>,

    /// Dimension list replacing the alarm's own dimensions
    #[arg(
        short,
        long,
        value_name = "JSON",
        help = "Dimensions as JSON, e.g. '[{\"Name\":\"InstanceId\",\"Value\":\"i-1\"}]'"
    )]
    dimensions: Option<String>,

    /// Output format
    #[arg(short, long, value_name = "FORMAT", help = "Output format: yaml or json")]
    output: Option<OutputFormat>,

    /// Print the built-in metric table and exit
    #[arg(long)]
    list_metrics: bool,

    /// Enable verbose logging
    #[arg(
        short,
        long,
        help = "Enable verbose logging output (sets RUST_LOG=debug)"
    )]
    verbose: bool,
}

impl Cli {
    /// Validate the CLI arguments
    ///
    /// # Returns
    ///
    /// `Ok(())` if all arguments are valid, `Err(String)` with error message otherwise
    fn validate(&self) -> Result<(), String> {
        // Missing config files fall back to defaults in load_config
        if let Some(ref config_path) = self.config {
            if config_path.exists() {
                if !config_path.is_file() {
                    return Err(format!(
                        "Configuration path is not a file: {}",
                        config_path.display()
                    ));
                }

                if let Some(extension) = config_path.extension() {
                    if extension != "toml" {
                        warn!(
                            "Configuration file does not have .toml extension: {}",
                            config_path.display()
                        );
                    }
                }
            }
        }

        if let Some(input) = self.input_path() {
            if input.exists() && !input.is_file() {
                return Err(format!("Input path is not a file: {}", input.display()));
            }
        }

        Ok(())
    }

    /// Input file, or `None` when reading stdin
    fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }

    fn read_input(&self) -> anyhow::Result<String> {
        match self.input_path() {
            Some(path) => {
                debug!("Reading alarm from {}", path.display());
                std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read alarm file: {}", path.display()))
            }
            None => {
                debug!("Reading alarm from stdin");
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read alarm from stdin")?;
                Ok(buffer)
            }
        }
    }

    /// Merge command-line flags over the configured defaults
    fn translation_options(&self, config: &Config) -> TranslationOptions {
        let mut options = config.translation_options();

        if let Some(folder) = &self.folder {
            let folder = folder.trim();
            options.folder = (!folder.is_empty()).then(|| folder.to_string());
        }
        if let Some(format) = self.metric_format {
            options.metric_format = format;
        }
        if let Some(state) = &self.no_data_state {
            options.no_data_state = Some(state.clone());
        }

        options
    }

    fn output_format(&self, config: &Config) -> OutputFormat {
        self.output.unwrap_or(config.output.format)
    }
}

/// Load configuration from file or use defaults
///
/// Unreadable or invalid files are reported and replaced by the defaults.
fn load_config(config_path: Option<&Path>) -> Config {
    match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            match Config::from_file(path) {
                Ok(config) => config,
                Err(ConfigError::ReadError(_)) => {
                    warn!(
                        "Configuration file '{}' not found or unreadable, using defaults",
                        path.display()
                    );
                    Config::default()
                }
                Err(e) => {
                    error!("Configuration error in '{}': {}", path.display(), e);
                    warn!("Using default configuration due to invalid config file");
                    Config::default()
                }
            }
        }
        None => {
            debug!("Using default configuration");
            Config::default()
        }
    }
}

/// Produce the text to print for the given arguments
fn run(cli: &Cli, config: &Config) -> anyhow::Result<String> {
    let format = cli.output_format(config);

    if cli.list_metrics {
        return Ok(output::render(&get_supported_metrics(), format)?);
    }

    let text = cli.read_input()?;
    let raw = parse_alarm_json(&text)?;
    let mut normalized = normalize(&raw);

    if let Some(dimensions) = &cli.dimensions {
        let parsed = parse_dimensions(dimensions)?;
        debug!("Replacing alarm dimensions with {} from --dimensions", parsed.len());
        normalized.dimensions = Some(serde_json::to_value(&parsed)?);
    }

    let translator = Translator::new(cli.translation_options(config));
    let document = translator.translate_normalized(&normalized)?;

    Ok(output::render(&document, format)?)
}

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    if let Err(e) = cli.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let config = load_config(cli.config.as_deref());

    match run(&cli, &config) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
