//! NIK command.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;
use idscope_nik::{decode_at, DateLayout, IdentifierRecord};
use tracing::info;

use crate::output::{display_option, print_single, Field, OutputFormat};

use super::CommandContext;

/// Decode a 16-digit NIK.
#[derive(Debug, Args)]
pub struct NikCommand {
    /// The identifier, exactly 16 digits.
    code: String,

    /// Compute age as of this date (YYYY-MM-DD) instead of today.
    #[arg(long)]
    at: Option<String>,
}

impl NikCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let reference = ctx.reference_date(self.at.as_deref())?;
        let record = decode(&self.code, reference)?;
        info!(province = %record.province_code, age = record.age, "NIK decoded");

        print_single(&record, fields(&record), ctx.format);
        if record.century_ambiguous && ctx.format == OutputFormat::Table {
            println!(
                "{}",
                format!(
                    "Note: the two-digit year also fits {}.",
                    record.birth_year - 100
                )
                .yellow()
            );
        }
        Ok(())
    }
}

/// Decodes one code against a fixed date.
pub fn decode(code: &str, reference: NaiveDate) -> Result<IdentifierRecord> {
    decode_at(code, reference).with_context(|| format!("Decoding NIK as of {reference}"))
}

pub fn fields(record: &IdentifierRecord) -> Vec<Field> {
    let layout = match record.date_layout {
        DateLayout::YearMonthDay => "YYMMDD",
        DateLayout::DayMonthYear => "DDMMYY",
    };

    vec![
        Field::new("NIK", record.raw_code),
        Field::new("Province", format!("{} ({})", record.province, record.province_code)),
        Field::new("City", format!("{} ({})", record.location.city, record.city_code)),
        Field::new("City province", &record.location.province),
        Field::new("District code", &record.district_code),
        Field::new("Birth date", display_option(&record.birth_date())),
        Field::new("Date layout", layout),
        Field::new("Sequence", &record.sequence),
        Field::new("Gender", record.gender),
        Field::new("Age", record.age),
        Field::new("Zodiac", record.zodiac),
        Field::new("Generation", record.generation),
    ]
}
