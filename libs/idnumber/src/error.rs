//! Error types for ID number parsing and construction.

use thiserror::Error;

/// A fixed-width field of the ID number string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    BirthDate,
    GenderCode,
    Citizenship,
    LegacyDigit,
    Checksum,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Field::BirthDate => "birth date",
            Field::GenderCode => "gender code",
            Field::Citizenship => "citizenship",
            Field::LegacyDigit => "legacy digit",
            Field::Checksum => "checksum",
        };
        write!(f, "{}", s)
    }
}

/// Errors that can occur when parsing or building an ID number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdNumberError {
    /// The ID string is not exactly 13 characters long.
    #[error("incorrect ID string length: expected 13, got {actual}")]
    Length { actual: usize },

    /// The birth date is malformed or does not exist on the calendar.
    #[error("invalid birth date '{value}': {reason}")]
    Date { value: String, reason: String },

    /// A fixed-width field is not made of ASCII digits.
    #[error("invalid {field} field: '{value}' is not a {width}-digit number")]
    NumericField {
        field: Field,
        value: String,
        width: usize,
    },

    /// The supplied checksum digit does not match the computed one.
    #[error("invalid luhn checksum: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    /// The gender code is outside `0..=9999`.
    #[error("gender code {code} is outside the range 0-9999")]
    GenderRange { code: u32 },

    /// A draft was finalized without a required field.
    #[error("missing required field: {field}")]
    MissingField { field: Field },
}

impl IdNumberError {
    /// Returns true if this error indicates a wrong input length.
    pub fn is_length_error(&self) -> bool {
        matches!(self, IdNumberError::Length { .. })
    }

    /// Returns true if this error indicates a checksum mismatch.
    pub fn is_checksum_mismatch(&self) -> bool {
        matches!(self, IdNumberError::ChecksumMismatch { .. })
    }

    /// The field this error concerns, when there is one.
    pub fn field(&self) -> Option<Field> {
        match self {
            IdNumberError::Length { .. } => None,
            IdNumberError::Date { .. } => Some(Field::BirthDate),
            IdNumberError::NumericField { field, .. } | IdNumberError::MissingField { field } => {
                Some(*field)
            }
            IdNumberError::ChecksumMismatch { .. } => Some(Field::Checksum),
            IdNumberError::GenderRange { .. } => Some(Field::GenderCode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            IdNumberError::Length { actual: 12 }.to_string(),
            "incorrect ID string length: expected 13, got 12"
        );
        assert_eq!(
            IdNumberError::NumericField {
                field: Field::GenderCode,
                value: "50a5".to_string(),
                width: 4,
            }
            .to_string(),
            "invalid gender code field: '50a5' is not a 4-digit number"
        );
        assert_eq!(
            IdNumberError::ChecksumMismatch {
                expected: 3,
                actual: 0
            }
            .to_string(),
            "invalid luhn checksum: expected 3, got 0"
        );
    }

    #[test]
    fn test_error_field() {
        assert_eq!(IdNumberError::Length { actual: 0 }.field(), None);
        assert_eq!(
            IdNumberError::GenderRange { code: 12345 }.field(),
            Some(Field::GenderCode)
        );
        assert!(IdNumberError::Length { actual: 0 }.is_length_error());
        assert!(IdNumberError::ChecksumMismatch {
            expected: 1,
            actual: 2
        }
        .is_checksum_mismatch());
    }
}
