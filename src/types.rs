use crate::consts::{
    APRIL, AUGUST, DECEMBER, FEBRUARY, JANUARY, JULY, JUNE, MARCH, MAX_MONTH, MAY, MONTH_NAMES,
    NOVEMBER, OCTOBER, SEPTEMBER,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A month of the year, `1..=MAX_MONTH` when valid.
///
/// The value is stored unvalidated so that the zero value (`Month(0)`, no
/// month yet) and out-of-range values can be carried around; calendar
/// arithmetic normalizes them. Use [`Month::is_valid`] to check.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Serialize, Deserialize,
)]
#[serde(from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    pub const JANUARY: Self = Self(JANUARY);
    pub const FEBRUARY: Self = Self(FEBRUARY);
    pub const MARCH: Self = Self(MARCH);
    pub const APRIL: Self = Self(APRIL);
    pub const MAY: Self = Self(MAY);
    pub const JUNE: Self = Self(JUNE);
    pub const JULY: Self = Self(JULY);
    pub const AUGUST: Self = Self(AUGUST);
    pub const SEPTEMBER: Self = Self(SEPTEMBER);
    pub const OCTOBER: Self = Self(OCTOBER);
    pub const NOVEMBER: Self = Self(NOVEMBER);
    pub const DECEMBER: Self = Self(DECEMBER);

    /// Creates a Month without validation
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the month number
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether the month is in `1..=MAX_MONTH`
    pub const fn is_valid(self) -> bool {
        self.0 != 0 && self.0 <= MAX_MONTH
    }

    /// English name of the month, `None` when out of range
    pub fn name(self) -> Option<&'static str> {
        if self.is_valid() {
            MONTH_NAMES.get(usize::from(self.0)).copied()
        } else {
            None
        }
    }

    /// Three-letter abbreviation (`"Mar"`), as accepted by the `DD Mon YYYY` layout
    pub fn abbreviation(self) -> Option<&'static str> {
        self.name().and_then(|name| name.get(..3))
    }
}

impl From<chrono::Month> for Month {
    #[allow(clippy::cast_possible_truncation)]
    fn from(month: chrono::Month) -> Self {
        // number_from_month is always 1..=12
        Self(month.number_from_month() as u8)
    }
}

impl TryFrom<Month> for chrono::Month {
    type Error = chrono::OutOfRange;

    fn try_from(month: Month) -> Result<Self, Self::Error> {
        Self::try_from(month.get())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Month({})", self.0),
        }
    }
}
