//! Explain the fields of an ID number.

use anyhow::{Context, Result};
use clap::Args;
use idnumber::{IdNumber, IdNumberBuilder};
use serde::Serialize;

use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Explain what an ID number encodes.
#[derive(Debug, Args)]
pub struct ExplainCommand {
    /// The ID number to explain.
    id: String,
}

#[derive(Debug, Serialize)]
struct Explanation {
    id: IdNumber,
    birth_date: String,
    gender: &'static str,
    gender_code: u32,
    citizenship: &'static str,
    checksum: u8,
    summary: String,
}

impl From<IdNumber> for Explanation {
    fn from(id: IdNumber) -> Self {
        Self {
            birth_date: id.birth_date().format("%-d %B %Y").to_string(),
            gender: id.gender_word(),
            gender_code: id.gender().value(),
            citizenship: id.citizenship_word(),
            checksum: id.checksum(),
            summary: id.explain(),
            id,
        }
    }
}

impl ExplainCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let id = IdNumberBuilder::new()
            .century_pivot(ctx.century_pivot)
            .from_string(self.id.trim())
            .build()
            .with_context(|| format!("cannot explain '{}'", self.id))?;

        let explanation = Explanation::from(id);

        match ctx.format {
            OutputFormat::Json => print_single(&explanation),
            OutputFormat::Table => {
                println!("ID number:   {}", explanation.id);
                println!("Birth date:  {}", explanation.birth_date);
                println!(
                    "Gender:      {} ({})",
                    explanation.gender,
                    id.gender()
                );
                println!("Citizenship: {}", explanation.citizenship);
                println!("Checksum:    {}", explanation.checksum);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explanation_fields() {
        let id: IdNumber = "8107095005083".parse().unwrap();
        let explanation = Explanation::from(id);
        assert_eq!(explanation.birth_date, "9 July 1981");
        assert_eq!(explanation.gender, "male");
        assert_eq!(explanation.gender_code, 5005);
        assert_eq!(explanation.citizenship, "citizen");

        let json = serde_json::to_value(&explanation).unwrap();
        assert_eq!(json["id"], "8107095005083");
        assert_eq!(json["checksum"], 3);
    }
}
