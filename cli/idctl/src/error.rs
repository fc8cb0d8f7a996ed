//! Error handling and display for the CLI.

use colored::Colorize;
use idnumber::IdNumberError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{invalid} of {total} ID numbers failed validation")]
    InvalidIds { invalid: usize, total: usize },

    #[error("Invalid ID number: {0}")]
    IdNumber(#[from] IdNumberError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    let id_err = err
        .downcast_ref::<IdNumberError>()
        .or_else(|| match err.downcast_ref::<CliError>() {
            Some(CliError::IdNumber(inner)) => Some(inner),
            _ => None,
        });

    if let Some(id_err) = id_err {
        if let Some(hint) = hint_for(id_err) {
            eprintln!("\n{}", format!("Hint: {hint}").yellow());
        }
    }
}

fn hint_for(err: &IdNumberError) -> Option<&'static str> {
    match err {
        IdNumberError::Length { .. } => {
            Some("ID numbers are exactly 13 digits with no spaces or separators.")
        }
        IdNumberError::ChecksumMismatch { .. } => {
            Some("The last digit does not match; check for a mistyped or swapped digit.")
        }
        IdNumberError::Date { .. } => {
            Some("The first six digits must be a real date in YYMMDD form.")
        }
        IdNumberError::GenderRange { .. } => Some("Gender codes range from 0000 to 9999."),
        IdNumberError::NumericField { .. } | IdNumberError::MissingField { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints() {
        assert!(hint_for(&IdNumberError::Length { actual: 3 }).is_some());
        assert!(hint_for(&IdNumberError::ChecksumMismatch {
            expected: 3,
            actual: 4
        })
        .is_some());
        assert!(hint_for(&IdNumberError::MissingField {
            field: idnumber::Field::BirthDate
        })
        .is_none());
    }

    #[test]
    fn test_invalid_ids_message() {
        let err = CliError::InvalidIds {
            invalid: 2,
            total: 5,
        };
        assert_eq!(err.to_string(), "2 of 5 ID numbers failed validation");
    }
}
