//! Fixed-width string codec.
//!
//! ```text
//! YYMMDD GGGG C 8 Z
//! |      |    | | `-- checksum digit
//! |      |    | `---- legacy digit, always 8, ignored on read
//! |      |    `------ citizenship digit
//! |      `----------- gender code
//! `------------------ birth date
//! ```
//!
//! [`parse`] does not validate the checksum. It returns a [`Draft`] whose
//! checksum is marked as supplied, and [`Draft::finalize`] performs the check.

use chrono::{Datelike, NaiveDate};

use crate::builder::Draft;
use crate::error::{Field, IdNumberError};
use crate::id_number::IdNumber;
use crate::types::GenderCode;

/// Length of a canonical ID number string.
pub const ID_LENGTH: usize = 13;

/// The legacy digit written at offset 11.
pub const LEGACY_DIGIT: u8 = 8;

const DATE: (usize, usize) = (0, 6);
const GENDER: (usize, usize) = (6, 4);
const CITIZENSHIP: (usize, usize) = (10, 1);
const LEGACY: (usize, usize) = (11, 1);
const CHECKSUM: (usize, usize) = (12, 1);

/// Rule for expanding a two-digit year into a full year.
///
/// Two-digit years at or above the pivot belong to the 1900s, years below it
/// to the 2000s. The default pivot of 69 maps `69..=99` to 1969-1999 and
/// `00..=68` to 2000-2068.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CenturyPivot(u8);

impl CenturyPivot {
    pub const DEFAULT: Self = Self(69);

    /// Creates a pivot. Values above 99 are clamped to 100, which maps every
    /// two-digit year into the 2000s.
    #[must_use]
    pub const fn new(pivot: u8) -> Self {
        if pivot > 100 {
            Self(100)
        } else {
            Self(pivot)
        }
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Expands a two-digit year.
    #[must_use]
    pub const fn expand(&self, yy: u32) -> i32 {
        if yy >= self.0 as u32 {
            1900 + yy as i32
        } else {
            2000 + yy as i32
        }
    }

    /// The earliest full year a two-digit year expands to.
    #[must_use]
    pub const fn first_year(&self) -> i32 {
        1900 + self.0 as i32
    }

    /// The latest full year a two-digit year expands to.
    #[must_use]
    pub const fn last_year(&self) -> i32 {
        1999 + self.0 as i32
    }

    /// Returns true if `year` survives a format and parse with this pivot.
    #[must_use]
    pub const fn contains_year(&self, year: i32) -> bool {
        year >= self.first_year() && year <= self.last_year()
    }
}

impl Default for CenturyPivot {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parses an ID number string into an unvalidated draft using the default pivot.
pub fn parse(s: &str) -> Result<Draft, IdNumberError> {
    parse_with_pivot(s, CenturyPivot::DEFAULT)
}

/// Parses an ID number string into an unvalidated draft.
pub fn parse_with_pivot(s: &str, pivot: CenturyPivot) -> Result<Draft, IdNumberError> {
    let actual = s.chars().count();
    if actual != ID_LENGTH {
        return Err(IdNumberError::Length { actual });
    }
    // Exactly 13 chars; any non-ASCII char would push the byte length past 13.
    let bytes = s.as_bytes();
    if bytes.len() != ID_LENGTH {
        return Err(non_ascii_error(s));
    }

    let birth_date = parse_date(field(bytes, DATE), pivot)?;
    let gender = parse_number(bytes, GENDER, Field::GenderCode)?;
    let citizenship = parse_number(bytes, CITIZENSHIP, Field::Citizenship)?;
    parse_number(bytes, LEGACY, Field::LegacyDigit)?;
    let checksum = parse_number(bytes, CHECKSUM, Field::Checksum)?;

    Ok(Draft::parsed(
        pivot,
        birth_date,
        GenderCode::new(gender),
        citizenship as u8,
        checksum as u8,
    ))
}

/// Formats a finalized ID number as its canonical 13-digit string.
#[must_use]
pub fn format(id: &IdNumber) -> String {
    format!(
        "{:012}{}",
        partial_number(id.birth_date(), id.gender(), id.citizenship_digit()),
        id.checksum()
    )
}

/// The 12-digit number the checksum is computed over:
/// `YYMMDD`, four-digit gender code, citizenship digit, legacy digit.
pub(crate) fn partial_number(birth_date: NaiveDate, gender: GenderCode, citizenship: u8) -> u64 {
    let yy = birth_date.year().rem_euclid(100) as u64;
    let yymmdd = yy * 10_000 + u64::from(birth_date.month()) * 100 + u64::from(birth_date.day());
    yymmdd * 1_000_000
        + u64::from(gender.value()) * 100
        + u64::from(citizenship) * 10
        + u64::from(LEGACY_DIGIT)
}

fn field(bytes: &[u8], (offset, width): (usize, usize)) -> &[u8] {
    &bytes[offset..offset + width]
}

fn digits(raw: &[u8]) -> Option<u32> {
    if raw.is_empty() || !raw.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(raw.iter().fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0')))
}

fn parse_number(
    bytes: &[u8],
    range: (usize, usize),
    which: Field,
) -> Result<u32, IdNumberError> {
    let raw = field(bytes, range);
    digits(raw).ok_or_else(|| IdNumberError::NumericField {
        field: which,
        value: String::from_utf8_lossy(raw).into_owned(),
        width: range.1,
    })
}

fn parse_date(raw: &[u8], pivot: CenturyPivot) -> Result<NaiveDate, IdNumberError> {
    let value = String::from_utf8_lossy(raw).into_owned();
    let Some(yymmdd) = digits(raw) else {
        return Err(IdNumberError::Date {
            value,
            reason: "expected six digits in YYMMDD form".to_string(),
        });
    };

    let year = pivot.expand(yymmdd / 10_000);
    let month = (yymmdd / 100) % 100;
    let day = yymmdd % 100;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| IdNumberError::Date {
        value,
        reason: format!("{year:04}-{month:02}-{day:02} is not a calendar date"),
    })
}

fn non_ascii_error(s: &str) -> IdNumberError {
    let (which, width) = match s.char_indices().position(|(_, c)| !c.is_ascii()) {
        Some(0..=5) => {
            return IdNumberError::Date {
                value: s.chars().take(6).collect(),
                reason: "expected six digits in YYMMDD form".to_string(),
            }
        }
        Some(6..=9) => (Field::GenderCode, GENDER),
        Some(10) => (Field::Citizenship, CITIZENSHIP),
        Some(11) => (Field::LegacyDigit, LEGACY),
        _ => (Field::Checksum, CHECKSUM),
    };
    IdNumberError::NumericField {
        field: which,
        value: s.chars().skip(width.0).take(width.1).collect(),
        width: width.1,
    }
}
