//! Error handling and display for the CLI.

use colored::Colorize;
use idscope_nik::IdentifierError;
use idscope_phone::{PhoneError, Region};
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid output format '{0}' (expected 'table' or 'json')")]
    InvalidFormat(String),

    #[error("Invalid batch line {line}: '{content}'")]
    InvalidBatchLine { line: usize, content: String },

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("At least one candidate set is required")]
    NoCandidateSets,
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

fn hint_for(err: &anyhow::Error) -> Option<String> {
    if let Some(phone_err) = err.downcast_ref::<PhoneError>() {
        return Some(match phone_err {
            PhoneError::UnparsableNumber { .. } => {
                "Include the country calling code (for example +62) or check `ids config show` for the region order.".to_string()
            }
            PhoneError::UnknownRegion(_) => format!("Supported regions: {}.", supported_regions()),
        });
    }

    if let Some(id_err) = err.downcast_ref::<IdentifierError>() {
        return Some(if id_err.is_format_error() {
            "A NIK is exactly 16 digits with no spaces or separators.".to_string()
        } else {
            "The birth date digits do not form a past calendar date.".to_string()
        });
    }

    match err.downcast_ref::<CliError>()? {
        CliError::InvalidFormat(_) => Some("Use --format table or --format json.".to_string()),
        CliError::InvalidBatchLine { .. } => {
            Some("Batch lines look like `phone:<number>` or `nik:<code>`; `#` starts a comment.".to_string())
        }
        CliError::NoCandidateSets => {
            Some("Pass one or more --set name=value,value,... options.".to_string())
        }
        CliError::InvalidDate(_) => None,
    }
}

fn supported_regions() -> String {
    Region::ALL
        .iter()
        .map(Region::code)
        .collect::<Vec<_>>()
        .join(", ")
}
