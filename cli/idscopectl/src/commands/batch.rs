//! Batch command.
//!
//! Input lines look like `phone:<raw>` or `nik:<code>`. Blank lines and lines
//! starting with `#` are skipped. Lines are decoded concurrently on the
//! blocking pool and reported in input order.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use idscope_phone::Resolver;
use serde::Serialize;
use tabled::Tabled;
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::error::CliError;
use crate::output::{display_option, print_output, print_success, OutputFormat};

use super::{nik, phone, CommandContext};

/// Decode every line of a file concurrently.
#[derive(Debug, Args)]
pub struct BatchCommand {
    /// File with one `phone:<raw>` or `nik:<code>` entry per line.
    file: PathBuf,

    /// Compute NIK ages as of this date (YYYY-MM-DD) instead of today.
    #[arg(long)]
    at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum EntryKind {
    Phone,
    Nik,
}

impl EntryKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Nik => "nik",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BatchEntry {
    line: usize,
    kind: EntryKind,
    input: String,
}

#[derive(Debug, Serialize, Tabled)]
struct BatchRow {
    #[tabled(rename = "Line")]
    line: usize,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Summary")]
    summary: String,
    #[tabled(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<serde_json::Value>,
}

impl BatchRow {
    fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

impl BatchCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let contents = tokio::fs::read_to_string(&self.file)
            .await
            .with_context(|| format!("Failed to read batch file {:?}", self.file))?;
        let entries = parse_batch(&contents)?;
        let reference = ctx.reference_date(self.at.as_deref())?;
        info!(entries = entries.len(), "batch started");

        let rows = run_entries(entries, Arc::new(ctx.resolver()), reference).await?;

        print_output(&rows, ctx.format);
        if ctx.format == OutputFormat::Table && !rows.is_empty() {
            let ok = rows.iter().filter(|r| r.is_ok()).count();
            print_success(&format!("Decoded {ok} of {} entries", rows.len()));
        }
        Ok(())
    }
}

fn parse_batch(contents: &str) -> Result<Vec<BatchEntry>, CliError> {
    let mut entries = Vec::new();

    for (index, raw) in contents.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let invalid = || CliError::InvalidBatchLine {
            line,
            content: trimmed.to_string(),
        };
        let (tag, value) = trimmed.split_once(':').ok_or_else(invalid)?;
        let kind = match tag.trim().to_ascii_lowercase().as_str() {
            "phone" => EntryKind::Phone,
            "nik" => EntryKind::Nik,
            _ => return Err(invalid()),
        };
        let value = value.trim();
        if value.is_empty() {
            return Err(invalid());
        }

        entries.push(BatchEntry {
            line,
            kind,
            input: value.to_string(),
        });
    }

    Ok(entries)
}

async fn run_entries(
    entries: Vec<BatchEntry>,
    resolver: Arc<Resolver>,
    reference: NaiveDate,
) -> Result<Vec<BatchRow>> {
    let total = entries.len();
    let mut set = JoinSet::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let resolver = Arc::clone(&resolver);
        set.spawn_blocking(move || (index, evaluate(&entry, &resolver, reference)));
    }

    let mut slots: Vec<Option<BatchRow>> = std::iter::repeat_with(|| None).take(total).collect();
    while let Some(joined) = set.join_next().await {
        let (index, row) = joined.context("Batch worker failed")?;
        debug!(line = row.line, status = row.status, "batch entry finished");
        slots[index] = Some(row);
    }

    Ok(slots.into_iter().flatten().collect())
}

fn evaluate(entry: &BatchEntry, resolver: &Resolver, reference: NaiveDate) -> BatchRow {
    let outcome = match entry.kind {
        EntryKind::Phone => phone::lookup(resolver, &entry.input).map(|view| {
            let summary = format!(
                "{} {} / {}",
                view.number.e164, view.labels.carrier, view.labels.locality
            );
            (summary, serde_json::to_value(&view).ok())
        }),
        EntryKind::Nik => nik::decode(&entry.input, reference).map(|record| {
            let summary = format!(
                "{}, {}, {}, {}, age {}",
                record.province,
                record.location.city,
                display_option(&record.birth_date()),
                record.gender,
                record.age
            );
            (summary, serde_json::to_value(&record).ok())
        }),
    };

    let (status, summary, detail) = match outcome {
        Ok((summary, detail)) => ("ok", summary, detail),
        Err(e) => ("error", format!("{e:#}"), None),
    };

    BatchRow {
        line: entry.line,
        kind: entry.kind.as_str(),
        input: entry.input.clone(),
        status,
        summary,
        detail,
    }
}
