//! Build an ID number from explicit fields.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use clap::Args;
use idnumber::{CenturyPivot, GenderCode, IdNumber, IdNumberBuilder};
use rand::{rngs::StdRng, SeedableRng};

use crate::error::CliError;
use crate::output::{print_single, print_success, OutputFormat};

use super::{CommandContext, IdView};

/// Build an ID number from its fields.
#[derive(Debug, Args)]
pub struct BuildCommand {
    /// Birth date (YYYY-MM-DD).
    #[arg(long)]
    date: NaiveDate,

    /// Explicit four-digit gender code (0-4999 female, 5000-9999 male).
    #[arg(long, group = "sex")]
    gender_code: Option<u32>,

    /// Pick a random male gender code.
    #[arg(long, group = "sex")]
    male: bool,

    /// Pick a random female gender code.
    #[arg(long, group = "sex")]
    female: bool,

    /// Mark the holder as a permanent resident instead of a citizen.
    #[arg(long)]
    resident: bool,

    /// Seed for the random gender code.
    #[arg(long)]
    seed: Option<u64>,
}

impl BuildCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let id = self.build(self.seed.or(ctx.config.seed), ctx.century_pivot)?;
        let view = IdView::from(&id);

        match ctx.format {
            OutputFormat::Json => print_single(&view),
            OutputFormat::Table => {
                print_success(&format!("Built {}", id));
                println!("{}", id.explain());
            }
        }

        Ok(())
    }

    fn build(&self, seed: Option<u64>, pivot: CenturyPivot) -> Result<IdNumber, CliError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let builder = IdNumberBuilder::new().century_pivot(pivot).date(
            self.date.day(),
            self.date.month(),
            self.date.year(),
        );

        let builder = match (self.gender_code, self.male, self.female) {
            (Some(code), _, _) => builder.gender(GenderCode::new(code)),
            (None, true, _) => builder.random_male(&mut rng),
            (None, false, true) => builder.random_female(&mut rng),
            (None, false, false) => builder,
        };

        let builder = if self.resident {
            builder.resident()
        } else {
            builder.citizen()
        };

        Ok(builder.build()?)
    }
}
