/// Canonical layout, also the only output format
pub const CANONICAL_LAYOUT: &str = "%Y-%m-%d";
/// Slash separated layout (`2001/03/05`)
pub const SLASH_LAYOUT: &str = "%Y/%m/%d";
/// Day, abbreviated month name, year (`05 Mar 2001`)
pub const DAY_MONTH_NAME_LAYOUT: &str = "%d %b %Y";

/// Layouts tried, in order, when reading a date from text.
/// The first one that matches wins.
pub const TEXT_LAYOUTS: [&str; 3] = [CANONICAL_LAYOUT, SLASH_LAYOUT, DAY_MONTH_NAME_LAYOUT];

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u32 = 1;

/// Month numbers, 1-indexed
pub const JANUARY: u8 = 1;
pub const FEBRUARY: u8 = 2;
pub const MARCH: u8 = 3;
pub const APRIL: u8 = 4;
pub const MAY: u8 = 5;
pub const JUNE: u8 = 6;
pub const JULY: u8 = 7;
pub const AUGUST: u8 = 8;
pub const SEPTEMBER: u8 = 9;
pub const OCTOBER: u8 = 10;
pub const NOVEMBER: u8 = 11;
pub const DECEMBER: u8 = 12;

/// English month names (index 0 unused, months are 1-indexed)
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) const MONTHS_PER_YEAR: i64 = 12;
