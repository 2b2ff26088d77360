mod clock;
mod consts;
mod error;
mod prelude;
mod sql;
mod types;

pub use clock::{Clock, FixedClock, SystemClock, ZonedClock};
pub use consts::*;
pub use error::{Error, FormatError, ParseError, UnsupportedTypeError};
pub use sql::ColumnValue;
pub use types::Month;

use crate::consts::MONTHS_PER_YEAR;
use crate::prelude::*;
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::cmp::Ordering;
use std::ops::Sub;
use std::str::FromStr;
use tracing::{debug, trace};

/// A calendar date: year, month and day, with no time of day or timezone.
///
/// Fields are not validated on direct construction. The zero value
/// (`Date::default()`) stands for "no date yet" and is what [`Date::scan`]
/// and [`Date::unmarshal_text`] are usually called on.
///
/// Displays as `YYYY-MM-DD`. Years outside `0..=9999` print in full
/// (`12345-01-01`, `-001-01-01`), which the text layouts cannot read back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month.get()", "day")]
pub struct Date {
    pub year: i32,
    pub month: Month,
    pub day: u32,
}

impl Date {
    /// Creates a date from its fields, without validation
    pub const fn new(year: i32, month: Month, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Today, in the host's local timezone
    pub fn now() -> Self {
        Self::now_from(&SystemClock)
    }

    /// Today, according to `clock`
    pub fn now_from<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::of(&clock.now())
    }

    /// The calendar day `t` falls on, in `t`'s own timezone
    pub fn of<T: Datelike>(t: &T) -> Self {
        Self {
            year: t.year(),
            month: u8::try_from(t.month()).map_or_else(|_| Month::default(), Month::new),
            day: t.day(),
        }
    }

    /// Parses `text` according to a chrono `strftime` layout such as `"%Y/%m/%d"`.
    ///
    /// # Errors
    /// Returns `ParseError` if `text` does not match `layout` or names a day
    /// that does not exist (`"2017/13/01"`).
    pub fn parse_from_str(text: &str, layout: &str) -> Result<Self, ParseError> {
        NaiveDate::parse_from_str(text, layout)
            .map(|date| Self::of(&date))
            .map_err(|source| ParseError {
                input: text.to_owned(),
                layout: layout.to_owned(),
                source,
            })
    }

    /// Reports whether `self` is after `other`.
    pub fn after(self, other: Self) -> bool {
        if self.year != other.year {
            return self.year > other.year;
        }
        if self.month != other.month {
            return self.month > other.month;
        }
        self.day > other.day
    }

    /// Reports whether `self` is before `other`.
    pub fn before(self, other: Self) -> bool {
        other.after(self)
    }

    /// Reports whether `self` and `other` are the same date.
    pub fn equal(self, other: Self) -> bool {
        !self.after(other) && !self.before(other)
    }

    /// Whether the fields name a day that exists on the proleptic Gregorian calendar
    pub fn is_valid(self) -> bool {
        NaiveDate::from_ymd_opt(self.year, self.month.get().into(), self.day).is_some()
    }

    /// The day these fields resolve to, normalizing out-of-range values:
    /// month 13 is January of the next year, day 0 the last day of the
    /// previous month, and so on.
    ///
    /// Returns `None` if the result is outside chrono's supported range.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        let months = i64::from(self.year) * MONTHS_PER_YEAR + i64::from(self.month.get()) - 1;
        let year = i32::try_from(months.div_euclid(MONTHS_PER_YEAR)).ok()?;
        let month = u32::try_from(months.rem_euclid(MONTHS_PER_YEAR)).ok()? + 1;

        NaiveDate::from_ymd_opt(year, month, MIN_DAY)?
            .checked_add_days(Days::new(self.day.into()))?
            .checked_sub_days(Days::new(1))
    }

    /// Whole days from `other` to `self`, both taken at midnight UTC.
    ///
    /// Returns `None` if either date is outside chrono's supported range.
    pub fn checked_sub(self, other: Self) -> Option<i64> {
        let lhs = self.utc_midnight()?;
        let rhs = other.utc_midnight()?;
        Some((lhs - rhs).num_days())
    }

    fn utc_midnight(self) -> Option<DateTime<Utc>> {
        self.to_naive_date()
            .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
    }

    /// The date as `YYYY-MM-DD` bytes
    pub fn marshal_text(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Overwrites `self` with the date in `text`, trying each of
    /// [`TEXT_LAYOUTS`] in order. On error `self` is left unchanged.
    ///
    /// # Errors
    /// Returns `FormatError` if `text` matches none of the layouts.
    pub fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), FormatError> {
        let text = std::str::from_utf8(text)
            .map_err(|_| FormatError::new(String::from_utf8_lossy(text)))?;
        *self = text.parse()?;
        Ok(())
    }
}

impl FromStr for Date {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = capitalize_words(s);
        for layout in TEXT_LAYOUTS {
            match NaiveDate::parse_from_str(&normalized, layout) {
                // Fixed widths only: "2001-3-5" and " 2001-03-05" are rejected
                Ok(date) if date.format(layout).to_string().eq_ignore_ascii_case(s) => {
                    return Ok(Self::of(&date));
                }
                Ok(date) => trace!(layout, input = s, parsed = %date, "input is not in fixed-width form"),
                Err(err) => trace!(layout, input = s, error = %err, "layout did not match"),
            }
        }
        debug!(input = s, "no date layout matched");
        Err(FormatError::new(s))
    }
}

/// Upper-cases the first letter of each alphabetic run and lower-cases the
/// rest, so month names match regardless of case (`mar`, `MAR` -> `Mar`).
fn capitalize_words(s: &str) -> String {
    let mut in_word = false;
    s.chars()
        .map(|c| {
            let out = if in_word {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            };
            in_word = c.is_ascii_alphabetic();
            out
        })
        .collect()
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.after(*other) {
            Ordering::Greater
        } else if self.before(*other) {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

/// `a - b` is the number of whole days from `b` to `a`.
///
/// # Panics
/// Panics if either date is outside chrono's supported range; use
/// [`Date::checked_sub`] to avoid this.
impl Sub for Date {
    type Output = i64;

    fn sub(self, rhs: Self) -> i64 {
        match self.checked_sub(rhs) {
            Some(days) => days,
            None => panic!("date subtraction out of range: {self} - {rhs}"),
        }
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::of(&date)
    }
}

impl From<NaiveDateTime> for Date {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::of(&datetime)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Date {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::of(&datetime)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
