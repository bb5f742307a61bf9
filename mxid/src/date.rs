//! Birth date handling: the `YYMMDD` segment and the century indicator.
//!
//! Both operations are total. A date that fails [`parse_birth_date`] yields
//! [`INVALID_DATE_SEGMENT`] and century `'0'`.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};

/// Date segment emitted for malformed birth dates.
pub const INVALID_DATE_SEGMENT: &str = "000000";

/// Century indicator for years outside every defined range.
pub const DEFAULT_CENTURY_DIGIT: char = '0';

/// Strict DD/MM/YYYY with day and month range checks
static BIRTH_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])/(0[1-9]|1[0-2])/([0-9]{4})$")
        .expect("Failed to compile BIRTH_DATE_REGEX")
});

/// Parse a `DD/MM/YYYY` birth date.
///
/// The text must match the strict pattern and name a real calendar day
/// (`31/02/1990` is rejected).
pub fn parse_birth_date(ddmmyyyy: &str) -> Result<NaiveDate> {
    let caps = BIRTH_DATE_REGEX
        .captures(ddmmyyyy)
        .ok_or_else(|| Error::InvalidBirthDate(ddmmyyyy.to_string()))?;

    // The regex guarantees all three groups are ASCII digits.
    let day: u32 = caps[1].parse().map_err(|_| Error::InvalidBirthDate(ddmmyyyy.to_string()))?;
    let month: u32 = caps[2].parse().map_err(|_| Error::InvalidBirthDate(ddmmyyyy.to_string()))?;
    let year: i32 = caps[3].parse().map_err(|_| Error::InvalidBirthDate(ddmmyyyy.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::InvalidBirthDate(ddmmyyyy.to_string()))
}

/// Convert `DD/MM/YYYY` into `YYMMDD`, or `000000` if the date is malformed.
pub fn birth_date_to_yymmdd(ddmmyyyy: &str) -> String {
    match parse_birth_date(ddmmyyyy) {
        Ok(date) => format!(
            "{:02}{:02}{:02}",
            date.year().rem_euclid(100),
            date.month(),
            date.day()
        ),
        Err(_) => {
            debug!(input = ddmmyyyy, "Malformed birth date, using {}", INVALID_DATE_SEGMENT);
            INVALID_DATE_SEGMENT.to_string()
        }
    }
}

/// Century indicator for the 17th CURP character.
///
/// | years     | indicator |
/// |-----------|-----------|
/// | 1800-1899 | `9`       |
/// | 1900-1999 | `0`       |
/// | 2000-2099 | `A`       |
///
/// Anything else, including unparseable dates, gives `0`.
pub fn century_digit(ddmmyyyy: &str) -> char {
    match parse_birth_date(ddmmyyyy).map(|d| d.year()) {
        Ok(1800..=1899) => '9',
        Ok(1900..=1999) => '0',
        Ok(2000..=2099) => 'A',
        _ => DEFAULT_CENTURY_DIGIT,
    }
}
