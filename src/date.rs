//! A calendar date that orders chronologically, for storing in an
//! [`OrderedTree`][crate::ordered::OrderedTree].
//!
//! Dates are read as three whitespace separated numbers, day first, and
//! written back as `DD/MM/YYYY`.
//!
//! ```
//! use datetree::date::Date;
//!
//! let date: Date = "1 2 2022".parse().unwrap();
//!
//! assert_eq!(date, Date::new(1, 2, 2022).unwrap());
//! assert_eq!(date.to_string(), "01/02/2022");
//! assert!(date < "2 2 2022".parse::<Date>().unwrap());
//! ```

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// Reasons a date can't be built or parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The input ran out before the named field.
    #[error("missing {0} field")]
    MissingField(&'static str),

    /// A field wasn't an unsigned number that fits its type.
    #[error("invalid {field} field {text:?}")]
    InvalidNumber {
        /// Which field failed.
        field: &'static str,
        /// The offending text.
        text: String,
        /// Why it didn't parse.
        #[source]
        source: ParseIntError,
    },

    /// There was more input after the year.
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),

    /// There is no such month.
    #[error("month {0} is not between 1 and 12")]
    MonthOutOfRange(u8),

    /// The month exists but doesn't have this day in the given year.
    #[error("day {day} does not exist in {month:02}/{year:04}")]
    DayOutOfRange {
        /// The rejected day.
        day: u8,
        /// Month the day was checked against.
        month: u8,
        /// Year the day was checked against, for February.
        year: u16,
    },
}

/// A day in the Gregorian calendar.
///
/// Fields are declared most significant first so the derived ordering is
/// chronological.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

impl Date {
    /// Builds a date, checking that the month exists and that the day exists
    /// in that month.
    pub fn new(day: u8, month: u8, year: u16) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::MonthOutOfRange(month));
        }
        if day == 0 || day > days_in_month(month, year) {
            return Err(DateError::DayOutOfRange { day, month, year });
        }

        Ok(Self { year, month, day })
    }

    /// Day of the month, starting at 1.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Month of the year, starting at 1.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The year, in full.
    pub fn year(&self) -> u16 {
        self.year
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(month: u8, year: u16) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn next_field<'a, N>(
    fields: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<N, DateError>
where
    N: FromStr<Err = ParseIntError>,
{
    let text = fields.next().ok_or(DateError::MissingField(field))?;
    text.parse().map_err(|source| DateError::InvalidNumber {
        field,
        text: text.to_string(),
        source,
    })
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let day = next_field(&mut fields, "day")?;
        let month = next_field(&mut fields, "month")?;
        let year = next_field(&mut fields, "year")?;

        let rest: Vec<&str> = fields.collect();
        if !rest.is_empty() {
            return Err(DateError::TrailingInput(rest.join(" ")));
        }

        Self::new(day, month, year)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}
