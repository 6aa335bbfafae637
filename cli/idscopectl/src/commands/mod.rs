//! CLI commands.

mod batch;
mod config;
mod nik;
mod phone;
mod simulate;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use idscope_phone::{Region, Resolver};

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// idscope CLI - decode phone numbers and NIK identifiers offline.
#[derive(Debug, Parser)]
#[command(name = "ids")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json). Overrides the saved config.
    #[arg(long, global = true)]
    format: Option<String>,

    /// Comma-separated region order for this invocation, e.g. `ID,SG`.
    #[arg(long, global = true)]
    regions: Option<String>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a phone number and infer its carrier and locality.
    Phone(phone::PhoneCommand),

    /// Decode a 16-digit NIK.
    Nik(nik::NikCommand),

    /// Generate labeled placeholder facts from a seed.
    Simulate(simulate::SimulateCommand),

    /// Decode every line of a file concurrently.
    Batch(batch::BatchCommand),

    /// Show or change saved configuration.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub async fn run(self) -> Result<()> {
        let format_flag = self
            .format
            .as_deref()
            .map(|f| f.parse::<OutputFormat>())
            .transpose()?;

        // These must work even when the saved config cannot be read.
        match &self.command {
            Commands::Version => {
                println!("ids {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            Commands::Config(cmd) if cmd.is_reset() => {
                return cmd.reset(format_flag.unwrap_or_default());
            }
            _ => {}
        }

        let config = Config::load()?;

        let format = format_flag.unwrap_or(config.format);
        let regions = match self.regions.as_deref() {
            Some(list) => Region::parse_list(list)?,
            None => config.regions.clone(),
        };

        let ctx = CommandContext {
            config,
            format,
            regions,
        };

        match self.command {
            Commands::Phone(cmd) => cmd.run(ctx).await,
            Commands::Nik(cmd) => cmd.run(ctx).await,
            Commands::Simulate(cmd) => cmd.run(ctx).await,
            Commands::Batch(cmd) => cmd.run(ctx).await,
            Commands::Config(cmd) => cmd.run(ctx).await,
            Commands::Version => Ok(()),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub regions: Vec<Region>,
}

impl CommandContext {
    /// Resolver using the effective region order.
    pub fn resolver(&self) -> Resolver {
        Resolver::new().regions(self.regions.clone())
    }

    /// Reference date for decoding: the flag, then the config, then today.
    pub fn reference_date(&self, flag: Option<&str>) -> Result<NaiveDate> {
        if let Some(raw) = flag {
            return parse_date(raw);
        }
        Ok(self
            .config
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive()))
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| CliError::InvalidDate(raw.to_string()).into())
}
