//! Phone command.

use anyhow::{Context, Result};
use clap::Args;
use idscope_phone::{Classification, Inferencer, LibPhonenumber, NormalizedPhoneNumber, Region};
use serde::Serialize;
use tracing::info;

use crate::output::{display_option, print_single, Field};

use super::CommandContext;

/// Resolve a phone number and infer its carrier and locality.
#[derive(Debug, Args)]
pub struct PhoneCommand {
    /// Phone number in any common notation, e.g. `0812-3456-789` or `+62 812 3456 789`.
    number: String,
}

/// A resolved number with its inferred labels.
#[derive(Debug, Clone, Serialize)]
pub struct PhoneView {
    pub input: String,
    #[serde(flatten)]
    pub number: NormalizedPhoneNumber,
    #[serde(flatten)]
    pub labels: Classification,
}

impl PhoneView {
    pub fn fields(&self) -> Vec<Field> {
        let n = &self.number;
        vec![
            Field::new("Input", &self.input),
            Field::new("E.164", &n.e164),
            Field::new("International", &n.international),
            Field::new("Country code", n.country_code),
            Field::new("National number", &n.national_number),
            Field::new("Region", display_option(&n.locale_context)),
            Field::new("Carrier", &self.labels.carrier),
            Field::new("Locality", &self.labels.locality),
        ]
    }
}

impl PhoneCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let view = lookup(&ctx.resolver(), &self.number)?;
        info!(e164 = %view.number.e164, "phone number resolved");
        print_single(&view, view.fields(), ctx.format);
        Ok(())
    }
}

/// Resolves and classifies one raw number.
pub fn lookup(resolver: &idscope_phone::Resolver, raw: &str) -> Result<PhoneView> {
    let number = resolver
        .resolve(raw)
        .with_context(|| format!("Resolving phone number under {}", region_list(resolver)))?;
    let labels = Inferencer::new(&LibPhonenumber).classify(&number);

    Ok(PhoneView {
        input: raw.to_string(),
        number,
        labels,
    })
}

fn region_list(resolver: &idscope_phone::Resolver) -> String {
    let codes: Vec<_> = resolver.region_order().iter().map(Region::code).collect();
    if codes.is_empty() {
        "no regions".to_string()
    } else {
        codes.join(",")
    }
}
