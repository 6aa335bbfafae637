//! Simulate command.
//!
//! Everything printed here is a placeholder picked from a hash of the seed.
//! Output is always labeled as simulated, in both formats.

use anyhow::{Context, Result};
use clap::Args;
use idscope_simulate::{simulate, simulate_gated, CandidateSet, SimulatedFact};
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{format_json, print_output, print_simulated_banner, OutputFormat};

use super::CommandContext;

/// Generate labeled placeholder facts from a seed.
#[derive(Debug, Args)]
pub struct SimulateCommand {
    /// Seed input, typically an E.164 number or a NIK.
    seed: String,

    /// Candidate set as `name=value,value,...`. Repeat for more facts.
    #[arg(long = "set", value_name = "NAME=VALUES")]
    sets: Vec<String>,

    /// Treat every fact as optional: keep set `i` only when digest nibble `i`
    /// is a multiple of MODULUS.
    #[arg(long, value_name = "MODULUS")]
    optional: Option<u8>,
}

#[derive(Debug, Serialize, Tabled)]
struct FactRow {
    #[tabled(rename = "Fact")]
    label: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Position")]
    position: usize,
    #[tabled(rename = "Nibble")]
    nibble: u8,
}

impl From<&SimulatedFact> for FactRow {
    fn from(fact: &SimulatedFact) -> Self {
        Self {
            label: fact.label.clone(),
            value: fact.derived_value.clone(),
            position: fact.position,
            nibble: fact.selector_bits,
        }
    }
}

#[derive(Debug, Serialize)]
struct SimulationReport<'a> {
    simulated: bool,
    seed: &'a str,
    facts: &'a [SimulatedFact],
}

impl SimulateCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let sets = parse_sets(&self.sets)?;
        let facts = match self.optional {
            Some(modulus) => simulate_gated(&self.seed, &sets, modulus),
            None => simulate(&self.seed, &sets),
        };

        match ctx.format {
            OutputFormat::Table => {
                print_simulated_banner(&self.seed);
                let rows: Vec<FactRow> = facts.iter().map(FactRow::from).collect();
                print_output(&rows, ctx.format);
            }
            OutputFormat::Json => {
                let report = SimulationReport {
                    simulated: true,
                    seed: &self.seed,
                    facts: &facts,
                };
                println!("{}", format_json(&report, "{}"));
            }
        }
        Ok(())
    }
}

fn parse_sets(raw: &[String]) -> Result<Vec<CandidateSet>> {
    if raw.is_empty() {
        return Err(CliError::NoCandidateSets.into());
    }
    raw.iter()
        .map(|s| {
            s.parse::<CandidateSet>()
                .with_context(|| format!("Invalid --set '{s}'"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_sets() {
        let sets = parse_sets(&["tier=gold,silver".to_string(), "hue=red".to_string()]).unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[1].name(), "hue");
    }

    #[test]
    fn requires_a_set() {
        let err = parse_sets(&[]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NoCandidateSets)
        ));
    }

    #[test]
    fn optional_flag_parses_modulus() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            cmd: SimulateCommand,
        }

        let w = Wrapper::try_parse_from(["ids", "abc", "--set", "a=x", "--optional", "3"]).unwrap();
        assert_eq!(w.cmd.optional, Some(3));
        assert!(Wrapper::try_parse_from(["ids", "abc", "--optional", "300"]).is_err());
    }

    #[test]
    fn report_is_marked_simulated() {
        let sets = parse_sets(&["tier=gold,silver".to_string()]).unwrap();
        let facts = simulate("+628123456789", &sets);
        let report = SimulationReport {
            simulated: true,
            seed: "+628123456789",
            facts: &facts,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["simulated"], true);
        assert_eq!(json["facts"][0]["label"], "tier");
    }
}
