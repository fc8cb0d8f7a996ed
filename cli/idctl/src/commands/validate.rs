//! Validate ID numbers.

use anyhow::Result;
use clap::Args;
use idnumber::{codec, CenturyPivot, IdNumber, IdNumberError};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

/// Validate one or more ID numbers.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// ID numbers to check.
    #[arg(required = true)]
    ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct ValidationRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Valid")]
    valid: bool,

    #[tabled(rename = "Details")]
    details: String,
}

impl ValidationRow {
    fn new(input: &str, result: &Result<IdNumber, IdNumberError>) -> Self {
        let (valid, details) = match result {
            Ok(id) => (true, id.explain()),
            Err(err) => (false, err.to_string()),
        };
        Self {
            input: input.to_string(),
            valid,
            details,
        }
    }
}

impl ValidateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows: Vec<ValidationRow> = self
            .ids
            .iter()
            .map(|input| {
                let result = validate(input.trim(), ctx.century_pivot);
                ValidationRow::new(input, &result)
            })
            .collect();

        print_output(&rows, ctx.format);

        let invalid = rows.iter().filter(|row| !row.valid).count();
        if invalid > 0 {
            return Err(CliError::InvalidIds {
                invalid,
                total: rows.len(),
            }
            .into());
        }
        Ok(())
    }
}

/// Parses and finalizes a single ID number.
fn validate(input: &str, pivot: CenturyPivot) -> Result<IdNumber, IdNumberError> {
    let draft = codec::parse_with_pivot(input, pivot)?;
    debug!(input, supplied_checksum = ?draft.supplied_checksum(), "parsed draft");
    draft.finalize()
}
