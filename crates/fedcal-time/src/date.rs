//! `CalendarDate` — a Gregorian date with no time-of-day component.
//!
//! Dates are stored as a serial number of days:
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The supported range is 1900-01-01 to 2199-12-31.
//!
//! A `CalendarDate` can only be obtained through a validating constructor,
//! so every value in circulation is a real calendar day.  Arithmetic that
//! would leave the supported range returns [`Error::InvalidDate`].

use std::str::FromStr;

use crate::month::Month;
use crate::weekday::Weekday;
use fedcal_core::ensure;
use fedcal_core::errors::{Error, Result};

/// First supported year.
pub const MIN_YEAR: u16 = 1900;

/// Last supported year.
pub const MAX_YEAR: u16 = 2199;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(i32);

impl CalendarDate {
    /// Earliest supported date: January 1, 1900.
    pub const MIN: CalendarDate = CalendarDate(1);

    /// Latest supported date: December 31, 2199.
    pub const MAX: CalendarDate = CalendarDate(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (1 = 1900-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::InvalidDate(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(CalendarDate(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// The day must exist in that month of that year: February 29 is only
    /// accepted in leap years, and nothing is clamped.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        check_year(year)?;
        let m = Month::from_number(month).ok_or_else(|| {
            Error::InvalidDate(format!("month {month} out of range [1, 12]"))
        })?;
        let len = m.length(year);
        if day == 0 || day > len {
            return Err(Error::InvalidDate(format!(
                "day {day} out of range [1, {len}] for {m} {year}"
            )));
        }
        Ok(CalendarDate(serial_from_ymd(year, month, day)))
    }

    /// January 1 of `year`.
    pub fn start_of_year(year: u16) -> Result<Self> {
        Self::from_ymd(year, 1, 1)
    }

    /// The `n`-th occurrence of `weekday` in `month` of `year`.
    ///
    /// For example, `nth_weekday(3, Weekday::Monday, 2024, 1)` is the third
    /// Monday of January 2024 (2024-01-15).
    ///
    /// # Errors
    /// Returns an error if `n` is not in 1..=5 or the month has fewer than
    /// `n` such weekdays.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        ensure!((1..=5).contains(&n), "nth_weekday: n must be in [1, 5], got {n}");
        let first = Self::from_ymd(year, month, 1)?;
        let day = 1 + first.weekday().days_until(weekday) + 7 * (n - 1);
        Self::from_ymd(year, month, day)
    }

    /// The last occurrence of `weekday` in `month` of `year`.
    pub fn last_weekday(weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        let last = Self::from_ymd(year, month, 1)?.end_of_month();
        last.add_days(-(last.weekday().days_since(weekday) as i32))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        (self.0 - serial_from_ymd(self.year(), 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        match Weekday::from_day_of_week(self.day_of_week()) {
            Some(w) => w,
            None => unreachable!("rem_euclid(7) is always in 0..7"),
        }
    }

    /// Return the day of the week, 0 = Sunday … 6 = Saturday.
    pub fn day_of_week(&self) -> u8 {
        // Serial 1 is a Monday, so serial 7 is a Sunday.
        self.0.rem_euclid(7) as u8
    }

    /// Return `true` if this date falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Move by a signed number of days.
    pub fn add_days(self, n: i32) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) if (Self::MIN.0..=Self::MAX.0).contains(&serial) => {
                Ok(CalendarDate(serial))
            }
            _ => Err(Error::InvalidDate(format!(
                "{self} {} {} days leaves the supported range",
                if n < 0 { "minus" } else { "plus" },
                n.unsigned_abs()
            ))),
        }
    }

    /// The following day.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// The preceding day.
    pub fn pred(self) -> Result<Self> {
        self.add_days(-1)
    }

    /// Number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: CalendarDate) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, d) = ymd_from_serial(self.0);
        let len = Month::from_number(m).map_or(d, |month| month.length(y));
        CalendarDate(self.0 + (len - d) as i32)
    }
}

impl std::ops::Sub<CalendarDate> for CalendarDate {
    type Output = i32;
    fn sub(self, rhs: CalendarDate) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CalendarDate({self})")
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date: four-digit year, two-digit month and
    /// day, nothing else.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
        };
        let field = |text: &str, width: usize, what: &str| {
            if text.len() != width || !text.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::Parse(format!(
                    "bad {what} in {s:?}: expected {width} digits"
                )));
            }
            text.parse::<u16>()
                .map_err(|e| Error::Parse(format!("bad {what} in {s:?}: {e}")))
        };
        let year = field(y, 4, "year")?;
        // Two ASCII digits always fit in a u8.
        let month = field(m, 2, "month")? as u8;
        let day = field(d, 2, "day")? as u8;
        Self::from_ymd(year, month, day)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CalendarDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl From<CalendarDate> for chrono::NaiveDate {
    fn from(date: CalendarDate) -> Self {
        let (y, m, d) = date.ymd();
        match chrono::NaiveDate::from_ymd_opt(y as i32, m as u32, d as u32) {
            Some(n) => n,
            None => unreachable!("every CalendarDate is a valid Gregorian date"),
        }
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for CalendarDate {
    type Error = Error;

    fn try_from(date: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(date.year())
            .map_err(|_| Error::InvalidDate(format!("year {} out of range", date.year())))?;
        Self::from_ymd(year, date.month() as u8, date.day() as u8)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given year.
pub fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

pub(crate) fn check_year(year: u16) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::InvalidDate(format!(
            "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
        )));
    }
    Ok(())
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Convert (year, month, day) to a serial number.  Inputs are assumed valid.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    // Whole years since 1900, plus one day per leap year in [1900, year).
    let mut serial = (y - 1900) * 365 + (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // The estimate is never more than one year off in the supported range.
    let mut y = (serial / 365 + 1900) as u16;
    while serial < serial_from_ymd(y, 1, 1) {
        y -= 1;
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    while let Some(month) = Month::from_number(m) {
        let len = month.length(y) as i32;
        if remaining <= len {
            break;
        }
        remaining -= len;
        m += 1;
    }
    (y, m, remaining as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
