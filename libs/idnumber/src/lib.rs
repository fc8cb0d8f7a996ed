//! # idnumber
//!
//! Parsing, formatting, and validation of South African ID numbers.
//!
//! ## Design Principles
//!
//! - An [`IdNumber`] only exists once its checksum has been computed or verified
//! - Parsing and validation are separate steps: [`codec::parse`] yields a
//!   [`Draft`], and [`Draft::finalize`] checks it
//! - Configuration steps apply in caller order, last write wins
//! - Randomness is always supplied by the caller
//!
//! ## ID Format
//!
//! Every ID number is exactly 13 ASCII digits: `YYMMDD GGGG C 8 Z`
//!
//! - `YYMMDD` - birth date
//! - `GGGG` - gender code (`0000-4999` female, `5000-9999` male)
//! - `C` - citizenship (`0` citizen, `1` permanent resident)
//! - `8` - legacy digit, always written as `8`
//! - `Z` - Luhn check digit over the first 12 digits
//!
//! ```
//! use idnumber::{Citizenship, GenderCode, IdNumber};
//!
//! let id = IdNumber::new(9, 7, 1981, GenderCode::new(5005), Citizenship::Citizen)?;
//! assert_eq!(id.to_string(), "8107095005083");
//!
//! let parsed: IdNumber = "8107095005083".parse()?;
//! assert_eq!(parsed, id);
//! # Ok::<(), idnumber::IdNumberError>(())
//! ```

mod builder;
pub mod checksum;
pub mod codec;
mod error;
mod id_number;
pub mod random;
mod types;

pub use builder::{ConfigStep, Draft, IdNumberBuilder};
pub use codec::CenturyPivot;
pub use error::{Field, IdNumberError};
pub use id_number::IdNumber;
pub use random::{random_id_number, DateSpan, RandomIdNumbers};
pub use types::*;
