//! Config commands (saved region order and defaults).

use std::path::Path;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use idscope_phone::Region;
use serde::Serialize;

use crate::config::{config_path, Config};
use crate::output::{display_option, print_single, print_success, Field, OutputFormat};

use super::CommandContext;

/// Manage saved configuration.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the effective configuration.
    Show,

    /// Save the region order, e.g. `ID,SG,MY`.
    SetRegions(SetRegionsArgs),

    /// Delete the saved configuration.
    Reset,
}

#[derive(Debug, Args)]
struct SetRegionsArgs {
    /// Comma-separated region codes, first match wins.
    regions: String,
}

#[derive(Debug, Serialize)]
struct ConfigView {
    path: String,
    regions: Vec<Region>,
    format: OutputFormat,
    reference_date: Option<String>,
}

impl ConfigCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::SetRegions(args) => set_regions(ctx, args),
            ConfigSubcommand::Reset => self::reset(ctx.format),
        }
    }

    /// True for `config reset`, which runs without loading the config.
    pub fn is_reset(&self) -> bool {
        matches!(self.command, ConfigSubcommand::Reset)
    }

    pub fn reset(&self, format: OutputFormat) -> Result<()> {
        self::reset(format)
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let view = ConfigView {
        path: config_path()?.display().to_string(),
        regions: ctx.regions.clone(),
        format: ctx.format,
        reference_date: ctx.config.reference_date.map(|d| d.to_string()),
    };

    let fields = vec![
        Field::new("Path", &view.path),
        Field::new("Regions", join_regions(&view.regions)),
        Field::new("Format", view.format),
        Field::new("Reference date", display_option(&view.reference_date)),
    ];
    print_single(&view, fields, ctx.format);
    Ok(())
}

fn set_regions(ctx: CommandContext, args: SetRegionsArgs) -> Result<()> {
    let regions = Region::parse_list(&args.regions)?;
    if regions.is_empty() {
        bail!("Region list cannot be empty");
    }

    let saved = save_regions(&config_path()?, regions)?;

    match ctx.format {
        OutputFormat::Json => {
            let view = serde_json::json!({ "ok": true, "regions": saved.regions });
            print_single(&view, Vec::new(), ctx.format);
        }
        OutputFormat::Table => print_success(&format!(
            "Region order set to {}",
            join_regions(&saved.regions)
        )),
    }
    Ok(())
}

/// Rewrites only `regions` in the file at `path`. Env overrides never reach
/// the file.
fn save_regions(path: &Path, regions: Vec<Region>) -> Result<Config> {
    let mut saved = Config::load_from(path)?;
    saved.regions = regions;
    saved.save_to(path)?;
    Ok(saved)
}

fn reset(format: OutputFormat) -> Result<()> {
    let removed = Config::remove(&config_path()?)?;

    match format {
        OutputFormat::Json => {
            print_single(&serde_json::json!({ "ok": true, "removed": removed }), Vec::new(), format)
        }
        OutputFormat::Table if removed => print_success("Saved configuration removed"),
        OutputFormat::Table => print_success("No saved configuration to remove"),
    }
    Ok(())
}

fn join_regions(regions: &[Region]) -> String {
    regions
        .iter()
        .map(Region::code)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FORMAT_ENV;

    #[test]
    fn joins_region_codes() {
        assert_eq!(join_regions(&[Region::Indonesia, Region::Australia]), "ID,AU");
        assert_eq!(join_regions(&[]), "");
    }

    #[test]
    fn save_regions_keeps_env_overrides_out_of_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save_to(&path).unwrap();

        let mut effective = Config::load_from(&path).unwrap();
        effective
            .apply_env(|key| (key == FORMAT_ENV).then(|| "json".to_string()))
            .unwrap();
        assert_eq!(effective.format, OutputFormat::Json);

        save_regions(&path, vec![Region::Singapore]).unwrap();

        let saved = Config::load_from(&path).unwrap();
        assert_eq!(saved.regions, vec![Region::Singapore]);
        assert_eq!(saved.format, OutputFormat::Table);
    }

    #[test]
    fn save_regions_preserves_other_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let original = Config {
            reference_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 15),
            ..Config::default()
        };
        original.save_to(&path).unwrap();

        let saved = save_regions(&path, vec![Region::Malaysia, Region::Indonesia]).unwrap();
        assert_eq!(saved.reference_date, original.reference_date);
        assert_eq!(Config::load_from(&path).unwrap(), saved);
    }

    #[test]
    fn unreadable_config_can_still_be_removed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_from(&path).is_err());

        assert!(Config::remove(&path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn reset_is_detected_before_config_load() {
        use clap::Parser;

        let cli = crate::commands::Cli::try_parse_from(["ids", "config", "reset"]).unwrap();
        let crate::commands::Commands::Config(cmd) = cli.command else {
            panic!("expected config command");
        };
        assert!(cmd.is_reset());
    }

    #[test]
    fn config_view_serializes_codes() {
        let view = ConfigView {
            path: "/tmp/config.json".to_string(),
            regions: vec![Region::Malaysia],
            format: OutputFormat::Json,
            reference_date: None,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["regions"][0], "MY");
        assert_eq!(json["format"], "json");
    }
}
