//! Statement periods: a calendar year, optionally narrowed to one month.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::error::ValidationError;

/// Highest year a period may name.
const MAX_YEAR: i32 = 9999;

/// A validated period with precomputed UTC bounds.
///
/// Bounds are half-open: `start <= date < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    year: i32,
    month: Option<u32>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Period {
    /// Creates a period for `year`, narrowed to `month` when given.
    ///
    /// # Errors
    ///
    /// - `MissingYear` when `year` is 0
    /// - `InvalidYear` when `year` is negative or above 9999
    /// - `InvalidMonth` when `month` is outside 1..=12
    pub fn new(year: i32, month: Option<u32>) -> Result<Self, ValidationError> {
        if year == 0 {
            return Err(ValidationError::MissingYear);
        }
        if !(1..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::InvalidYear(year));
        }
        if let Some(m) = month
            && !(1..=12).contains(&m)
        {
            return Err(ValidationError::InvalidMonth(m));
        }

        let (start, end) = match month {
            Some(12) => (first_day(year, 12), first_day(year + 1, 1)),
            Some(m) => (first_day(year, m), first_day(year, m + 1)),
            None => (first_day(year, 1), first_day(year + 1, 1)),
        };

        match (start, end) {
            (Some(start), Some(end)) => Ok(Self {
                year,
                month,
                start,
                end,
            }),
            _ => Err(ValidationError::InvalidYear(year)),
        }
    }

    /// Creates a whole-year period.
    ///
    /// # Errors
    ///
    /// Same as [`Period::new`].
    pub fn year(year: i32) -> Result<Self, ValidationError> {
        Self::new(year, None)
    }

    /// Returns the calendar year.
    #[must_use]
    pub const fn calendar_year(&self) -> i32 {
        self.year
    }

    /// Returns the month, if the period is narrowed to one.
    #[must_use]
    pub const fn month(&self) -> Option<u32> {
        self.month
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the exclusive upper bound.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns true if `at` falls within this period.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at < self.end
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.month {
            Some(m) => write!(f, "{:04}-{m:02}", self.year),
            None => write!(f, "{:04}", self.year),
        }
    }
}

fn first_day(year: i32, month: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
}
