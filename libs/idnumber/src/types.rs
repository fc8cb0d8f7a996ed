//! Semantic field types encoded in an ID number.

use serde::{Deserialize, Serialize};

// =============================================================================
// Citizenship
// =============================================================================

/// Citizenship status, encoded as a single digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Citizenship {
    /// South African citizen (`0`).
    #[default]
    Citizen,
    /// Permanent resident (`1`).
    PermanentResident,
}

impl Citizenship {
    /// Returns the wire digit for this status.
    #[must_use]
    pub const fn digit(&self) -> u8 {
        match self {
            Citizenship::Citizen => 0,
            Citizenship::PermanentResident => 1,
        }
    }

    /// Maps a wire digit back to a status. Digits other than `0` and `1` are undefined.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Citizenship::Citizen),
            1 => Some(Citizenship::PermanentResident),
            _ => None,
        }
    }
}

impl std::fmt::Display for Citizenship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Citizenship::Citizen => write!(f, "citizen"),
            Citizenship::PermanentResident => write!(f, "permanent resident"),
        }
    }
}

// =============================================================================
// Gender
// =============================================================================

/// Classification derived from a gender code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
    /// The code lies outside `0..=9999`.
    Undefined,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Female => write!(f, "female"),
            Gender::Male => write!(f, "male"),
            Gender::Undefined => write!(f, "undefined"),
        }
    }
}

/// The four-digit gender code of an ID number.
///
/// Any `u32` can be held so that out-of-range values can be classified, but
/// only `0..=9999` survives finalization.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GenderCode(u32);

impl GenderCode {
    pub const MIN_FEMALE: u32 = 0;
    pub const MAX_FEMALE: u32 = 4999;
    pub const MIN_MALE: u32 = 5000;
    pub const MAX_MALE: u32 = 9999;

    /// Creates a gender code from a raw value.
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Returns the raw code.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns true if the code fits in the four-digit field.
    #[must_use]
    pub const fn in_range(&self) -> bool {
        self.0 <= Self::MAX_MALE
    }

    /// Classifies the code as female, male, or undefined.
    #[must_use]
    pub const fn gender(&self) -> Gender {
        match self.0 {
            Self::MIN_FEMALE..=Self::MAX_FEMALE => Gender::Female,
            Self::MIN_MALE..=Self::MAX_MALE => Gender::Male,
            _ => Gender::Undefined,
        }
    }

    /// Draws a uniformly random male code in `5000..=9999`.
    pub fn random_male<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(Self::MIN_MALE..=Self::MAX_MALE))
    }

    /// Draws a uniformly random female code in `0..=4999`.
    pub fn random_female<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(Self::MIN_FEMALE..=Self::MAX_FEMALE))
    }
}

impl std::fmt::Display for GenderCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl From<u32> for GenderCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl From<GenderCode> for u32 {
    fn from(code: GenderCode) -> Self {
        code.0
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    #[rstest]
    #[case(0, Gender::Female)]
    #[case(4999, Gender::Female)]
    #[case(5000, Gender::Male)]
    #[case(5005, Gender::Male)]
    #[case(9999, Gender::Male)]
    #[case(10000, Gender::Undefined)]
    #[case(12345, Gender::Undefined)]
    fn test_gender_classification(#[case] code: u32, #[case] expected: Gender) {
        assert_eq!(GenderCode::new(code).gender(), expected);
    }

    #[test]
    fn test_gender_words() {
        assert_eq!(GenderCode::new(5005).gender().to_string(), "male");
        assert_eq!(GenderCode::new(4999).gender().to_string(), "female");
        assert_eq!(GenderCode::new(12345).gender().to_string(), "undefined");
    }

    #[test]
    fn test_gender_code_display_is_zero_padded() {
        assert_eq!(GenderCode::new(7).to_string(), "0007");
        assert_eq!(GenderCode::new(5005).to_string(), "5005");
    }

    #[test]
    fn test_random_codes_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert_eq!(GenderCode::random_male(&mut rng).gender(), Gender::Male);
            assert_eq!(GenderCode::random_female(&mut rng).gender(), Gender::Female);
        }
    }

    #[test]
    fn test_citizenship_digits() {
        assert_eq!(Citizenship::Citizen.digit(), 0);
        assert_eq!(Citizenship::PermanentResident.digit(), 1);
        assert_eq!(Citizenship::from_digit(0), Some(Citizenship::Citizen));
        assert_eq!(
            Citizenship::from_digit(1),
            Some(Citizenship::PermanentResident)
        );
        assert_eq!(Citizenship::from_digit(7), None);
    }

    #[test]
    fn test_citizenship_serialization() {
        assert_eq!(
            serde_json::to_string(&Citizenship::PermanentResident).unwrap(),
            "\"permanent_resident\""
        );
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        assert_eq!(serde_json::to_string(&GenderCode::new(42)).unwrap(), "42");
    }
}
