//! Ordered configuration of a draft ID number, followed by finalization.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use crate::checksum::compute_check_digit;
use crate::codec::{self, CenturyPivot};
use crate::error::{Field, IdNumberError};
use crate::id_number::IdNumber;
use crate::types::{Citizenship, GenderCode};

/// An ID number under construction.
///
/// Produced by [`codec::parse`] or by applying [`ConfigStep`]s. Nothing is
/// cross-checked until [`Draft::finalize`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    birth_date: Option<NaiveDate>,
    gender: GenderCode,
    citizenship: u8,
    /// `None` means finalization computes the digit, `Some` means it must match.
    checksum: Option<u8>,
    /// Birth years outside this pivot's window cannot be written back faithfully.
    pivot: CenturyPivot,
}

impl Draft {
    /// An empty draft: no birth date, gender code 0, citizen, no checksum.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty draft whose birth year must fall inside `pivot`'s window.
    #[must_use]
    pub fn with_pivot(pivot: CenturyPivot) -> Self {
        Self {
            pivot,
            ..Self::default()
        }
    }

    pub(crate) fn parsed(
        pivot: CenturyPivot,
        birth_date: NaiveDate,
        gender: GenderCode,
        citizenship: u8,
        checksum: u8,
    ) -> Self {
        Self {
            birth_date: Some(birth_date),
            gender,
            citizenship,
            checksum: Some(checksum),
            pivot,
        }
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn gender(&self) -> GenderCode {
        self.gender
    }

    pub fn citizenship_digit(&self) -> u8 {
        self.citizenship
    }

    /// The checksum digit read from a string, if any.
    pub fn supplied_checksum(&self) -> Option<u8> {
        self.checksum
    }

    pub fn pivot(&self) -> CenturyPivot {
        self.pivot
    }

    /// Validates the draft and computes or verifies its checksum.
    ///
    /// A draft without a supplied checksum gets the computed one. A draft with
    /// a supplied checksum (including `0`) fails with
    /// [`IdNumberError::ChecksumMismatch`] unless it matches.
    ///
    /// The birth year must lie in the pivot's window, so that formatting and
    /// parsing the result gives back the same date.
    pub fn finalize(self) -> Result<IdNumber, IdNumberError> {
        let birth_date = self.birth_date.ok_or(IdNumberError::MissingField {
            field: Field::BirthDate,
        })?;

        let year = birth_date.year();
        if !self.pivot.contains_year(year) {
            return Err(IdNumberError::Date {
                value: birth_date.to_string(),
                reason: format!(
                    "year {year} cannot be encoded as two digits with pivot {}: expected {}-{}",
                    self.pivot.value(),
                    self.pivot.first_year(),
                    self.pivot.last_year()
                ),
            });
        }

        if !self.gender.in_range() {
            return Err(IdNumberError::GenderRange {
                code: self.gender.value(),
            });
        }

        let partial = codec::partial_number(birth_date, self.gender, self.citizenship);
        let expected = compute_check_digit(partial);

        let checksum = match self.checksum {
            None => expected,
            Some(actual) if actual == expected => actual,
            Some(actual) => {
                debug!(partial, expected, actual, "checksum mismatch");
                return Err(IdNumberError::ChecksumMismatch { expected, actual });
            }
        };

        Ok(IdNumber::from_parts(
            birth_date,
            self.gender,
            self.citizenship,
            checksum,
        ))
    }
}

/// A single configuration step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigStep {
    /// Set the birth date. Fails if the date does not exist.
    Date { day: u32, month: u32, year: i32 },
    /// Set a raw gender code.
    Gender(GenderCode),
    /// Set the citizenship status.
    Citizenship(Citizenship),
    /// Replace every field, including the checksum, by parsing a string.
    FromString(String),
}

impl ConfigStep {
    /// Applies this step to a draft.
    pub fn apply(&self, draft: &mut Draft, pivot: CenturyPivot) -> Result<(), IdNumberError> {
        match self {
            ConfigStep::Date { day, month, year } => {
                let date = NaiveDate::from_ymd_opt(*year, *month, *day).ok_or_else(|| {
                    IdNumberError::Date {
                        value: format!("{year:04}-{month:02}-{day:02}"),
                        reason: "not a calendar date".to_string(),
                    }
                })?;
                draft.birth_date = Some(date);
            }
            ConfigStep::Gender(code) => draft.gender = *code,
            ConfigStep::Citizenship(citizenship) => draft.citizenship = citizenship.digit(),
            ConfigStep::FromString(s) => *draft = codec::parse_with_pivot(s, pivot)?,
        }
        Ok(())
    }
}

/// Fluent builder that records steps and replays them on every [`build`](Self::build).
///
/// # Example
///
/// ```
/// use idnumber::{GenderCode, IdNumberBuilder};
///
/// let id = IdNumberBuilder::new()
///     .date(9, 7, 1981)
///     .gender(GenderCode::new(5005))
///     .citizen()
///     .build()?;
/// assert_eq!(id.to_string(), "8107095005083");
/// # Ok::<(), idnumber::IdNumberError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdNumberBuilder {
    steps: Vec<ConfigStep>,
    pivot: CenturyPivot,
}

impl IdNumberBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from an ordered list of steps.
    pub fn from_steps<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = ConfigStep>,
    {
        Self {
            steps: steps.into_iter().collect(),
            pivot: CenturyPivot::DEFAULT,
        }
    }

    /// Sets the pivot used by [`ConfigStep::FromString`] steps and the birth
    /// year window enforced at finalization.
    #[must_use]
    pub fn century_pivot(mut self, pivot: CenturyPivot) -> Self {
        self.pivot = pivot;
        self
    }

    /// Appends an arbitrary step.
    #[must_use]
    pub fn step(mut self, step: ConfigStep) -> Self {
        self.steps.push(step);
        self
    }

    #[must_use]
    pub fn date(self, day: u32, month: u32, year: i32) -> Self {
        self.step(ConfigStep::Date { day, month, year })
    }

    #[must_use]
    pub fn gender(self, code: GenderCode) -> Self {
        self.step(ConfigStep::Gender(code))
    }

    /// Appends a gender step with a male code drawn from `rng` now.
    #[must_use]
    pub fn random_male<R: rand::Rng + ?Sized>(self, rng: &mut R) -> Self {
        self.gender(GenderCode::random_male(rng))
    }

    /// Appends a gender step with a female code drawn from `rng` now.
    #[must_use]
    pub fn random_female<R: rand::Rng + ?Sized>(self, rng: &mut R) -> Self {
        self.gender(GenderCode::random_female(rng))
    }

    #[must_use]
    pub fn citizenship(self, citizenship: Citizenship) -> Self {
        self.step(ConfigStep::Citizenship(citizenship))
    }

    #[must_use]
    pub fn citizen(self) -> Self {
        self.citizenship(Citizenship::Citizen)
    }

    #[must_use]
    pub fn resident(self) -> Self {
        self.citizenship(Citizenship::PermanentResident)
    }

    #[must_use]
    pub fn from_string(self, s: impl Into<String>) -> Self {
        self.step(ConfigStep::FromString(s.into()))
    }

    /// The recorded steps, in application order.
    pub fn steps(&self) -> &[ConfigStep] {
        &self.steps
    }

    /// Applies every step to a fresh draft, then finalizes it.
    ///
    /// The first failing step aborts the build; later steps and finalization
    /// are skipped.
    pub fn build(&self) -> Result<IdNumber, IdNumberError> {
        let mut draft = Draft::with_pivot(self.pivot);
        for (index, step) in self.steps.iter().enumerate() {
            trace!(index, ?step, "applying config step");
            step.apply(&mut draft, self.pivot).inspect_err(|err| {
                debug!(index, error = %err, "config step failed");
            })?;
        }
        draft.finalize()
    }
}
