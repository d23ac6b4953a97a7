//! Holiday rules and resolved holidays.
//!
//! A [`HolidayRule`] says how to find a holiday's date in any given year:
//! start from an [`Anchor`] and optionally roll forward or backward to a
//! target weekday.  Resolving a rule against a year yields a [`Holiday`].

use crate::date::CalendarDate;
use crate::month::Month;
use crate::weekday::Weekday;
use fedcal_core::errors::Result;

/// The ten U.S. federal holidays known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FederalHoliday {
    /// January 1.
    NewYearsDay,
    /// Martin Luther King Jr. Day.
    MlkDay,
    /// Washington's Birthday.
    PresidentsDay,
    /// Memorial Day.
    MemorialDay,
    /// July 4.
    IndependenceDay,
    /// Labor Day.
    LaborDay,
    /// Columbus Day.
    ColumbusDay,
    /// November 11.
    VeteransDay,
    /// Thanksgiving Day.
    Thanksgiving,
    /// December 25.
    Christmas,
}

impl FederalHoliday {
    /// All holidays in calendar order.
    pub const ALL: [FederalHoliday; 10] = [
        FederalHoliday::NewYearsDay,
        FederalHoliday::MlkDay,
        FederalHoliday::PresidentsDay,
        FederalHoliday::MemorialDay,
        FederalHoliday::IndependenceDay,
        FederalHoliday::LaborDay,
        FederalHoliday::ColumbusDay,
        FederalHoliday::VeteransDay,
        FederalHoliday::Thanksgiving,
        FederalHoliday::Christmas,
    ];

    /// Display name, e.g. `"Thanksgiving"`.
    pub fn name(&self) -> &'static str {
        match self {
            FederalHoliday::NewYearsDay => "New Year's Day",
            FederalHoliday::MlkDay => "MLK Day",
            FederalHoliday::PresidentsDay => "Presidents' Day",
            FederalHoliday::MemorialDay => "Memorial Day",
            FederalHoliday::IndependenceDay => "Independence Day",
            FederalHoliday::LaborDay => "Labor Day",
            FederalHoliday::ColumbusDay => "Columbus Day",
            FederalHoliday::VeteransDay => "Veterans Day",
            FederalHoliday::Thanksgiving => "Thanksgiving",
            FederalHoliday::Christmas => "Christmas",
        }
    }
}

impl std::fmt::Display for FederalHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The day a rule starts counting from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Anchor {
    /// A fixed number of days after January 1 (0 = January 1).
    ///
    /// The same offset names a different month/day in leap years once
    /// February has passed.
    DayOfYear(u16),
    /// A fixed month and day.
    MonthDay(Month, u8),
}

impl Anchor {
    /// The anchor's date in `year`.
    pub fn resolve(&self, year: u16) -> Result<CalendarDate> {
        match *self {
            Anchor::DayOfYear(offset) => {
                CalendarDate::start_of_year(year)?.add_days(offset as i32)
            }
            Anchor::MonthDay(month, day) => CalendarDate::from_ymd(year, month.number(), day),
        }
    }
}

/// How a holiday's date is derived from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HolidayRule {
    /// The anchor itself, whatever weekday it falls on.
    Fixed(Anchor),
    /// The anchor if it is `weekday`, otherwise the next `weekday` after it.
    NextWeekday {
        /// Starting point.
        anchor: Anchor,
        /// Weekday to land on.
        weekday: Weekday,
    },
    /// The anchor if it is `weekday`, otherwise the last `weekday` before it.
    PreviousWeekday {
        /// Starting point.
        anchor: Anchor,
        /// Weekday to land on.
        weekday: Weekday,
    },
}

impl HolidayRule {
    /// The rule's anchor.
    pub fn anchor(&self) -> Anchor {
        match *self {
            HolidayRule::Fixed(anchor)
            | HolidayRule::NextWeekday { anchor, .. }
            | HolidayRule::PreviousWeekday { anchor, .. } => anchor,
        }
    }

    /// Resolve the rule to a date in `year`.
    pub fn resolve(&self, year: u16) -> Result<CalendarDate> {
        let start = self.anchor().resolve(year)?;
        match *self {
            HolidayRule::Fixed(_) => Ok(start),
            HolidayRule::NextWeekday { weekday, .. } => {
                start.add_days(start.weekday().days_until(weekday) as i32)
            }
            HolidayRule::PreviousWeekday { weekday, .. } => {
                start.add_days(-(start.weekday().days_since(weekday) as i32))
            }
        }
    }
}

/// A holiday resolved to a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holiday {
    /// Which holiday this is.
    pub kind: FederalHoliday,
    /// The date it falls on.
    pub date: CalendarDate,
    /// The rule that produced `date`.
    pub rule: HolidayRule,
}

impl Holiday {
    /// Display name of the holiday.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.date)
    }
}
