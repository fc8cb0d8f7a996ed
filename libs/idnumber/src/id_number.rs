//! The finalized ID number.

use chrono::NaiveDate;

use crate::builder::{ConfigStep, IdNumberBuilder};
use crate::codec;
use crate::error::IdNumberError;
use crate::types::{Citizenship, Gender, GenderCode};

/// A validated South African ID number.
///
/// Values only come out of [`Draft::finalize`](crate::Draft::finalize), so
/// the gender code is always in range and the checksum always matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdNumber {
    birth_date: NaiveDate,
    gender: GenderCode,
    citizenship: u8,
    checksum: u8,
}

impl IdNumber {
    pub(crate) const fn from_parts(
        birth_date: NaiveDate,
        gender: GenderCode,
        citizenship: u8,
        checksum: u8,
    ) -> Self {
        Self {
            birth_date,
            gender,
            citizenship,
            checksum,
        }
    }

    /// Builds an ID number from its semantic fields.
    pub fn new(
        day: u32,
        month: u32,
        year: i32,
        gender: GenderCode,
        citizenship: Citizenship,
    ) -> Result<Self, IdNumberError> {
        IdNumberBuilder::new()
            .date(day, month, year)
            .gender(gender)
            .citizenship(citizenship)
            .build()
    }

    /// Applies `steps` in order to an empty draft and finalizes it.
    pub fn from_steps<I>(steps: I) -> Result<Self, IdNumberError>
    where
        I: IntoIterator<Item = ConfigStep>,
    {
        IdNumberBuilder::from_steps(steps).build()
    }

    /// Parses and validates an ID number string.
    pub fn parse(s: &str) -> Result<Self, IdNumberError> {
        codec::parse(s)?.finalize()
    }

    #[must_use]
    pub const fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    #[must_use]
    pub const fn gender(&self) -> GenderCode {
        self.gender
    }

    /// Returns "male", "female", or "undefined".
    #[must_use]
    pub fn gender_word(&self) -> &'static str {
        match self.gender.gender() {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Undefined => "undefined",
        }
    }

    /// The citizenship status, or `None` when the digit is neither `0` nor `1`.
    #[must_use]
    pub const fn citizenship(&self) -> Option<Citizenship> {
        Citizenship::from_digit(self.citizenship)
    }

    /// The raw citizenship digit as written in the string.
    #[must_use]
    pub const fn citizenship_digit(&self) -> u8 {
        self.citizenship
    }

    #[must_use]
    pub fn citizenship_word(&self) -> &'static str {
        match self.citizenship() {
            Some(Citizenship::Citizen) => "citizen",
            Some(Citizenship::PermanentResident) => "permanent resident",
            None => "undefined citizenship",
        }
    }

    #[must_use]
    pub const fn checksum(&self) -> u8 {
        self.checksum
    }

    /// A human-readable breakdown of the number.
    ///
    /// `"Birthdate: 9 July 1981, male, citizen, checksum = 3"`
    #[must_use]
    pub fn explain(&self) -> String {
        format!(
            "Birthdate: {}, {}, {}, checksum = {}",
            self.birth_date.format("%-d %B %Y"),
            self.gender_word(),
            self.citizenship_word(),
            self.checksum
        )
    }
}

impl std::fmt::Display for IdNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&codec::format(self))
    }
}

impl std::str::FromStr for IdNumber {
    type Err = IdNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for IdNumber {
    type Error = IdNumberError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl serde::Serialize for IdNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for IdNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
