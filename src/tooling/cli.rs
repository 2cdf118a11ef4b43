//! CLI Tooling
//!
//! Command-line interface for envmerge. Parses arguments, resolves configuration,
//! and dispatches each command against a [`FunctionConfigClient`].

use crate::config::{ConfigLoader, EnvMergeConfig};
use crate::error::EnvMergeError;
use crate::merger::{self, EnvironmentMerger, Stage};
use crate::provider::{AwsCliClient, FunctionConfigClient};
use crate::report::{self, ApplyReport, OutputFormat, ShowReport};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// envmerge - merge SMS gateway settings into a Lambda function environment
#[derive(Parser, Debug)]
#[command(name = "envmerge")]
#[command(about = "Merge SMS gateway settings into a Lambda function's environment variables")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Lambda function name
    #[arg(long)]
    pub function_name: Option<String>,

    /// AWS region of the function
    #[arg(long)]
    pub region: Option<String>,

    /// AWS CLI executable
    #[arg(long)]
    pub aws_bin: Option<String>,

    /// AWS named profile
    #[arg(long)]
    pub profile: Option<String>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Fetch the environment, merge the SMS settings, and submit the result
    Apply {
        /// Fetch and merge only; do not submit
        #[arg(long)]
        dry_run: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Show the function's current environment (sensitive values masked)
    Show {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Print the resolved configuration (secrets masked)
    Config,
}

/// Fold CLI flags into a loaded configuration. Flags win over every other source.
/// `--log-file` stays on [`Cli`] and goes to `init_logging` directly.
pub fn apply_overrides(config: &mut EnvMergeConfig, cli: &Cli) {
    if let Some(name) = &cli.function_name {
        config.target.function_name = name.clone();
    }
    if let Some(region) = &cli.region {
        config.target.region = region.clone();
    }
    if let Some(binary) = &cli.aws_bin {
        config.aws.binary = binary.clone();
    }
    if let Some(profile) = &cli.profile {
        config.aws.profile = Some(profile.clone());
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }
    if let Some(output) = &cli.log_output {
        config.logging.output = output.clone();
    }
}

/// Resolved configuration plus the provider client commands run against.
pub struct CliContext {
    config: EnvMergeConfig,
    client: Arc<dyn FunctionConfigClient>,
}

impl CliContext {
    /// Create a context from parsed arguments, talking to the AWS CLI.
    pub fn new(cli: &Cli) -> Result<Self, EnvMergeError> {
        let mut config = if let Some(cfg_path) = &cli.config {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            let cwd = std::env::current_dir()?;
            ConfigLoader::load(&cwd)?
        };
        apply_overrides(&mut config, cli);
        let client = Arc::new(AwsCliClient::from_config(&config.aws));
        Ok(Self::with_client(config, client))
    }

    /// Create a context around any provider client.
    pub fn with_client(config: EnvMergeConfig, client: Arc<dyn FunctionConfigClient>) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &EnvMergeConfig {
        &self.config
    }

    /// Execute a CLI command, writing its output to `out`.
    pub fn execute(&self, command: &Commands, out: &mut dyn Write) -> Result<(), EnvMergeError> {
        let started = Instant::now();
        let result = match command {
            Commands::Apply { dry_run, format } => self.handle_apply(*dry_run, format, out),
            Commands::Show { format } => self.handle_show(format, out),
            Commands::Config => self.handle_config(out),
        };
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn handle_apply(
        &self,
        dry_run: bool,
        format: &str,
        out: &mut dyn Write,
    ) -> Result<(), EnvMergeError> {
        let format = OutputFormat::parse(format).map_err(EnvMergeError::ConfigError)?;
        let patch = self.config.sms.to_patch()?.to_environment_set();
        let merger = EnvironmentMerger::new(
            self.client.as_ref(),
            self.config.target.to_target(),
            patch,
        );

        let mut on_stage = |stage: &Stage| -> std::io::Result<()> {
            match format {
                OutputFormat::Text => writeln!(out, "{}", report::stage_line(stage)),
                OutputFormat::Json => Ok(()),
            }
        };
        let outcome = merger.run(dry_run, &mut on_stage)?;

        match format {
            OutputFormat::Text => write!(out, "{}", report::format_apply_text(&outcome))?,
            OutputFormat::Json => {
                let report = ApplyReport::from_outcome(&outcome);
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            }
        }
        Ok(())
    }

    fn handle_show(&self, format: &str, out: &mut dyn Write) -> Result<(), EnvMergeError> {
        let format = OutputFormat::parse(format).map_err(EnvMergeError::ConfigError)?;
        let target = self.config.target.to_target();
        let environment = merger::fetch_current(self.client.as_ref(), &target)?;
        match format {
            OutputFormat::Text => write!(out, "{}", report::format_show_text(&target, &environment))?,
            OutputFormat::Json => {
                let report = ShowReport::new(&target, &environment);
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            }
        }
        Ok(())
    }

    fn handle_config(&self, out: &mut dyn Write) -> Result<(), EnvMergeError> {
        let rendered = toml::to_string_pretty(&self.config.redacted()).map_err(|e| {
            EnvMergeError::ConfigError(format!("Failed to render configuration: {}", e))
        })?;
        write!(out, "{}", rendered)?;
        Ok(())
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Apply { dry_run: true, .. } => "apply --dry-run",
        Commands::Apply { .. } => "apply",
        Commands::Show { .. } => "show",
        Commands::Config => "config",
    }
}
