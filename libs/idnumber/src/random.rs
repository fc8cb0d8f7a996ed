//! Random, internally consistent ID numbers for tests and seed data.
//!
//! Nothing here owns a global RNG. Callers pass their own, so a seeded
//! [`rand::rngs::StdRng`] gives reproducible output.
//!
//! Birth dates are drawn from the part of the requested [`DateSpan`] that a
//! [`CenturyPivot`] can encode. With the default pivot, the 2069 tail of
//! [`DateSpan::DEFAULT`] is never drawn because it would read back as 1969.

use chrono::{Days, NaiveDate};
use rand::Rng;
use tracing::trace;

use crate::builder::IdNumberBuilder;
use crate::codec::CenturyPivot;
use crate::error::IdNumberError;
use crate::id_number::IdNumber;

const fn calendar_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date constant"),
    }
}

/// An inclusive range of birth dates to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateSpan {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateSpan {
    /// 31 December 1969 through 31 December 2069, both inclusive.
    pub const DEFAULT: Self = Self {
        start: calendar_date(1969, 12, 31),
        end: calendar_date(2069, 12, 31),
    };

    /// Creates a span. Fails if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, IdNumberError> {
        if end < start {
            return Err(IdNumberError::Date {
                value: format!("{start}..={end}"),
                reason: "span ends before it starts".to_string(),
            });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the span, counting both ends.
    #[must_use]
    pub fn len_days(&self) -> u64 {
        self.end.signed_duration_since(self.start).num_days() as u64 + 1
    }

    /// Narrows the span to the birth years `pivot` can encode.
    ///
    /// Fails if the span lies entirely outside the pivot's window.
    pub fn clamp_to(&self, pivot: CenturyPivot) -> Result<Self, IdNumberError> {
        let outside = || IdNumberError::Date {
            value: format!("{}..={}", self.start, self.end),
            reason: format!(
                "span lies outside {}-{}, the years pivot {} can encode",
                pivot.first_year(),
                pivot.last_year(),
                pivot.value()
            ),
        };

        let first = NaiveDate::from_ymd_opt(pivot.first_year(), 1, 1).ok_or_else(outside)?;
        let last = NaiveDate::from_ymd_opt(pivot.last_year(), 12, 31).ok_or_else(outside)?;

        Self::new(self.start.max(first), self.end.min(last)).map_err(|_| outside())
    }

    /// Draws a uniformly random date from the span.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NaiveDate, IdNumberError> {
        let offset = rng.random_range(0..self.len_days());
        self.start
            .checked_add_days(Days::new(offset))
            .ok_or_else(|| IdNumberError::Date {
                value: format!("{} + {offset} days", self.start),
                reason: "date out of range".to_string(),
            })
    }
}

impl Default for DateSpan {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Generates one random ID number with a birth date from [`DateSpan::DEFAULT`],
/// read with [`CenturyPivot::DEFAULT`].
pub fn random_id_number<R: Rng + ?Sized>(rng: &mut R) -> Result<IdNumber, IdNumberError> {
    random_id_number_in(rng, &DateSpan::DEFAULT, CenturyPivot::DEFAULT)
}

/// Generates one random ID number with a birth date from `span`, clamped to
/// the years `pivot` can encode.
///
/// Gender and citizenship are each an even coin flip.
pub fn random_id_number_in<R: Rng + ?Sized>(
    rng: &mut R,
    span: &DateSpan,
    pivot: CenturyPivot,
) -> Result<IdNumber, IdNumberError> {
    use chrono::Datelike;

    let date = span.clamp_to(pivot)?.sample(rng)?;
    let builder = IdNumberBuilder::new()
        .century_pivot(pivot)
        .date(date.day(), date.month(), date.year());

    let builder = if rng.random_bool(0.5) {
        builder.random_female(rng)
    } else {
        builder.random_male(rng)
    };

    let builder = if rng.random_bool(0.5) {
        builder.citizen()
    } else {
        builder.resident()
    };

    let id = builder.build()?;
    trace!(%id, "generated random id number");
    Ok(id)
}

/// An endless stream of independent random ID numbers.
///
/// ```
/// use idnumber::RandomIdNumbers;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let ids: Vec<_> = RandomIdNumbers::new(StdRng::seed_from_u64(1))
///     .take(3)
///     .collect::<Result<_, _>>()?;
/// assert_eq!(ids.len(), 3);
/// # Ok::<(), idnumber::IdNumberError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RandomIdNumbers<R> {
    rng: R,
    span: DateSpan,
    pivot: CenturyPivot,
}

impl<R: Rng> RandomIdNumbers<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            span: DateSpan::DEFAULT,
            pivot: CenturyPivot::DEFAULT,
        }
    }

    /// Draws birth dates from `span` instead of the default.
    #[must_use]
    pub fn with_span(mut self, span: DateSpan) -> Self {
        self.span = span;
        self
    }

    /// Encodes and reads birth years with `pivot` instead of the default.
    #[must_use]
    pub fn with_pivot(mut self, pivot: CenturyPivot) -> Self {
        self.pivot = pivot;
        self
    }
}

impl<R: Rng> Iterator for RandomIdNumbers<R> {
    type Item = Result<IdNumber, IdNumberError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(random_id_number_in(&mut self.rng, &self.span, self.pivot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_default_span() {
        let span = DateSpan::default();
        assert_eq!(span.start(), NaiveDate::from_ymd_opt(1969, 12, 31).unwrap());
        assert_eq!(span.end(), NaiveDate::from_ymd_opt(2069, 12, 31).unwrap());
        assert_eq!(span.len_days(), 36525 + 1);
    }

    #[test]
    fn test_span_rejects_reversed_bounds() {
        let a = NaiveDate::from_ymd_opt(2000, 1, 2).unwrap();
        let b = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert!(DateSpan::new(a, b).is_err());
        assert_eq!(DateSpan::new(a, a).unwrap().len_days(), 1);
    }

    #[test]
    fn test_single_day_span() {
        let day = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        let span = DateSpan::new(day, day).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            assert_eq!(span.sample(&mut rng).unwrap(), day);
        }
    }

    #[test]
    fn test_thousand_random_ids_validate() {
        let mut rng = StdRng::seed_from_u64(1981);
        for _ in 0..1000 {
            let id = random_id_number(&mut rng).unwrap();
            let span = DateSpan::DEFAULT;
            assert!(id.birth_date() >= span.start() && id.birth_date() <= span.end());
            assert!(id.gender().in_range());
            assert!(id.citizenship().is_some());

            let reparsed = codec::parse(&id.to_string()).unwrap().finalize().unwrap();
            assert_eq!(reparsed, id);
        }
    }

    #[test]
    fn test_default_span_clamped_to_default_pivot() {
        let clamped = DateSpan::DEFAULT.clamp_to(CenturyPivot::DEFAULT).unwrap();
        assert_eq!(clamped.start(), DateSpan::DEFAULT.start());
        assert_eq!(clamped.end(), NaiveDate::from_ymd_opt(2068, 12, 31).unwrap());

        let wide = DateSpan::DEFAULT.clamp_to(CenturyPivot::new(70)).unwrap();
        assert_eq!(wide, DateSpan::DEFAULT);
    }

    #[test]
    fn test_span_outside_pivot_window_rejected() {
        let span = DateSpan::new(
            NaiveDate::from_ymd_opt(2069, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2069, 12, 31).unwrap(),
        )
        .unwrap();
        assert!(matches!(
            span.clamp_to(CenturyPivot::DEFAULT).unwrap_err(),
            IdNumberError::Date { .. }
        ));

        let mut rng = StdRng::seed_from_u64(11);
        assert!(random_id_number_in(&mut rng, &span, CenturyPivot::DEFAULT).is_err());
        let id = random_id_number_in(&mut rng, &span, CenturyPivot::new(70)).unwrap();
        let reparsed = codec::parse_with_pivot(&id.to_string(), CenturyPivot::new(70))
            .unwrap()
            .finalize()
            .unwrap();
        assert_eq!(reparsed, id);
    }

    #[test]
    fn test_generated_ids_reparse_to_themselves() {
        let ids = RandomIdNumbers::new(StdRng::seed_from_u64(2068)).take(20_000);
        for id in ids {
            let id = id.unwrap();
            assert!(id.birth_date() <= NaiveDate::from_ymd_opt(2068, 12, 31).unwrap());
            assert_eq!(id.to_string().parse::<IdNumber>().unwrap(), id);
        }
    }

    #[test]
    fn test_generation_with_custom_pivot() {
        let pivot = CenturyPivot::new(30);
        let ids = RandomIdNumbers::new(StdRng::seed_from_u64(30))
            .with_pivot(pivot)
            .take(500);
        for id in ids {
            let id = id.unwrap();
            assert!(pivot.contains_year(chrono::Datelike::year(&id.birth_date())));
            let reparsed = codec::parse_with_pivot(&id.to_string(), pivot)
                .unwrap()
                .finalize()
                .unwrap();
            assert_eq!(reparsed, id);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a: Vec<_> = RandomIdNumbers::new(StdRng::seed_from_u64(99))
            .take(50)
            .collect();
        let b: Vec<_> = RandomIdNumbers::new(StdRng::seed_from_u64(99))
            .take(50)
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generation_covers_both_genders_and_statuses() {
        let ids: Vec<IdNumber> = RandomIdNumbers::new(StdRng::seed_from_u64(5))
            .take(200)
            .collect::<Result<_, _>>()
            .unwrap();
        assert!(ids.iter().any(|id| id.gender_word() == "male"));
        assert!(ids.iter().any(|id| id.gender_word() == "female"));
        assert!(ids.iter().any(|id| id.citizenship_word() == "citizen"));
        assert!(ids
            .iter()
            .any(|id| id.citizenship_word() == "permanent resident"));
    }
}
