//! CLI commands.

mod build;
mod explain;
mod generate;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use idnumber::{CenturyPivot, IdNumber};
use serde::Serialize;
use tabled::Tabled;

use crate::config::Config;
use crate::output::OutputFormat;

/// idctl - Generate, build, and validate South African ID numbers.
#[derive(Debug, Parser)]
#[command(name = "idctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Two-digit years at or above this value are read as 19xx, below as 20xx.
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(0..=100))]
    century_pivot: Option<u8>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate random, valid ID numbers.
    Generate(generate::GenerateCommand),

    /// Build an ID number from its fields.
    Build(build::BuildCommand),

    /// Validate one or more ID numbers.
    Validate(validate::ValidateCommand),

    /// Explain what an ID number encodes.
    Explain(explain::ExplainCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            format: OutputFormat::parse(&self.format),
            century_pivot: self
                .century_pivot
                .map(CenturyPivot::new)
                .unwrap_or(config.century_pivot),
            config,
        };

        match self.command {
            Commands::Generate(cmd) => cmd.run(ctx),
            Commands::Build(cmd) => cmd.run(ctx),
            Commands::Validate(cmd) => cmd.run(ctx),
            Commands::Explain(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("idctl {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub century_pivot: CenturyPivot,
}

/// Table/JSON row for a single ID number.
#[derive(Debug, Clone, Serialize, Tabled)]
pub(crate) struct IdView {
    #[tabled(rename = "ID Number")]
    id: String,

    #[tabled(rename = "Birth Date")]
    birth_date: String,

    #[tabled(rename = "Gender")]
    gender: String,

    #[tabled(rename = "Gender Code")]
    gender_code: u32,

    #[tabled(rename = "Citizenship")]
    citizenship: String,

    #[tabled(rename = "Checksum")]
    checksum: u8,
}

impl From<&IdNumber> for IdView {
    fn from(id: &IdNumber) -> Self {
        Self {
            id: id.to_string(),
            birth_date: id.birth_date().to_string(),
            gender: id.gender_word().to_string(),
            gender_code: id.gender().value(),
            citizenship: id.citizenship_word().to_string(),
            checksum: id.checksum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "idctl", "generate", "--count", "5", "--seed", "42", "--male",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Generate(_)));
        assert_eq!(cli.format, "table");
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "idctl",
            "validate",
            "8107095005083",
            "--format",
            "json",
            "--century-pivot",
            "30",
        ])
        .unwrap();
        assert_eq!(cli.format, "json");
        assert_eq!(cli.century_pivot, Some(30));
    }

    #[test]
    fn test_century_pivot_out_of_range() {
        let result = Cli::try_parse_from(["idctl", "--century-pivot", "101", "version"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_conflicting_gender_flags() {
        let result = Cli::try_parse_from(["idctl", "generate", "--male", "--female"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_id_view() {
        let id: IdNumber = "8107095005083".parse().unwrap();
        let view = IdView::from(&id);
        assert_eq!(view.birth_date, "1981-07-09");
        assert_eq!(view.gender, "male");
        assert_eq!(view.gender_code, 5005);
        assert_eq!(view.citizenship, "citizen");
        assert_eq!(view.checksum, 3);
    }
}
