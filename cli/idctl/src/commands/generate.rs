//! Random ID number generation.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::Args;
use idnumber::{CenturyPivot, DateSpan, IdNumber, IdNumberBuilder, RandomIdNumbers};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::output::print_output;

use super::{CommandContext, IdView};

/// Generate random, valid ID numbers.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// How many ID numbers to generate.
    #[arg(long, short = 'n', default_value = "1")]
    count: usize,

    /// Seed for reproducible output (overrides IDCTL_SEED).
    #[arg(long)]
    seed: Option<u64>,

    /// Only generate male gender codes.
    #[arg(long, conflicts_with = "female")]
    male: bool,

    /// Only generate female gender codes.
    #[arg(long)]
    female: bool,

    /// Only generate citizens.
    #[arg(long, conflicts_with = "resident")]
    citizen: bool,

    /// Only generate permanent residents.
    #[arg(long)]
    resident: bool,

    /// Earliest birth date (YYYY-MM-DD).
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Latest birth date (YYYY-MM-DD).
    #[arg(long)]
    to: Option<NaiveDate>,
}

impl GenerateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let seed = self.seed.or(ctx.config.seed);
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!(count = self.count, seeded = seed.is_some(), "generating id numbers");

        let ids = self.generate(&mut rng, ctx.century_pivot)?;
        let rows: Vec<IdView> = ids.iter().map(IdView::from).collect();
        print_output(&rows, ctx.format);
        Ok(())
    }

    /// The requested birth-date span, narrowed to what `pivot` can encode.
    fn span(&self, pivot: CenturyPivot) -> Result<DateSpan> {
        let start = self.from.unwrap_or(DateSpan::DEFAULT.start());
        let end = self.to.unwrap_or(DateSpan::DEFAULT.end());
        let span = DateSpan::new(start, end).context("--from must not be after --to")?;
        span.clamp_to(pivot)
            .with_context(|| format!("no birth date in {start}..={end} can be encoded"))
    }

    fn is_unconstrained(&self) -> bool {
        !(self.male || self.female || self.citizen || self.resident)
    }

    fn generate<R: Rng>(&self, rng: &mut R, pivot: CenturyPivot) -> Result<Vec<IdNumber>> {
        let span = self.span(pivot)?;

        if self.is_unconstrained() {
            return RandomIdNumbers::new(rng)
                .with_span(span)
                .with_pivot(pivot)
                .take(self.count)
                .collect::<Result<_, _>>()
                .context("failed to generate ID number");
        }

        (0..self.count)
            .map(|_| self.constrained(rng, &span, pivot))
            .collect()
    }

    fn constrained<R: Rng>(
        &self,
        rng: &mut R,
        span: &DateSpan,
        pivot: CenturyPivot,
    ) -> Result<IdNumber> {
        let date = span.sample(rng)?;
        let builder = IdNumberBuilder::new()
            .century_pivot(pivot)
            .date(date.day(), date.month(), date.year());

        let builder = if self.male || (!self.female && rng.random_bool(0.5)) {
            builder.random_male(rng)
        } else {
            builder.random_female(rng)
        };

        let builder = if self.citizen || (!self.resident && rng.random_bool(0.5)) {
            builder.citizen()
        } else {
            builder.resident()
        };

        debug!(steps = builder.steps().len(), "building constrained id number");
        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use idnumber::Citizenship;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        cmd: GenerateCommand,
    }

    fn command(args: &[&str]) -> GenerateCommand {
        let mut argv = vec!["generate"];
        argv.extend_from_slice(args);
        Harness::try_parse_from(argv).unwrap().cmd
    }

    #[test]
    fn test_generate_count() {
        let cmd = command(&["--count", "25"]);
        let ids = cmd.generate(&mut StdRng::seed_from_u64(1), CenturyPivot::DEFAULT).unwrap();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn test_generate_is_seeded() {
        let cmd = command(&["-n", "10"]);
        let a = cmd.generate(&mut StdRng::seed_from_u64(8), CenturyPivot::DEFAULT).unwrap();
        let b = cmd.generate(&mut StdRng::seed_from_u64(8), CenturyPivot::DEFAULT).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_constrained() {
        let cmd = command(&["-n", "50", "--female", "--resident"]);
        let ids = cmd.generate(&mut StdRng::seed_from_u64(2), CenturyPivot::DEFAULT).unwrap();
        assert!(ids.iter().all(|id| id.gender_word() == "female"));
        assert!(ids
            .iter()
            .all(|id| id.citizenship() == Some(Citizenship::PermanentResident)));
    }

    #[test]
    fn test_generate_within_span() {
        let cmd = command(&["-n", "50", "--from", "1990-01-01", "--to", "1990-01-31"]);
        let ids = cmd.generate(&mut StdRng::seed_from_u64(3), CenturyPivot::DEFAULT).unwrap();
        let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(1990, 1, 31).unwrap();
        assert!(ids
            .iter()
            .all(|id| id.birth_date() >= start && id.birth_date() <= end));
    }

    #[test]
    fn test_generated_ids_reparse_under_pivot() {
        let cmd = command(&["-n", "500"]);
        let ids = cmd
            .generate(&mut StdRng::seed_from_u64(5), CenturyPivot::DEFAULT)
            .unwrap();
        for id in ids {
            assert_eq!(IdNumber::parse(&id.to_string()).unwrap(), id);
        }
    }

    #[test]
    fn test_generate_span_beyond_pivot_window() {
        let cmd = command(&["-n", "5", "--male", "--from", "2069-01-01"]);
        assert!(cmd
            .generate(&mut StdRng::seed_from_u64(6), CenturyPivot::DEFAULT)
            .is_err());

        let pivot = CenturyPivot::new(70);
        let ids = cmd.generate(&mut StdRng::seed_from_u64(6), pivot).unwrap();
        for id in ids {
            assert_eq!(id.birth_date().year(), 2069);
            let reparsed = idnumber::codec::parse_with_pivot(&id.to_string(), pivot)
                .unwrap()
                .finalize()
                .unwrap();
            assert_eq!(reparsed, id);
        }
    }

    #[test]
    fn test_generate_rejects_reversed_span() {
        let cmd = command(&["--from", "2000-01-02", "--to", "2000-01-01"]);
        assert!(cmd.generate(&mut StdRng::seed_from_u64(4), CenturyPivot::DEFAULT).is_err());
    }
}
