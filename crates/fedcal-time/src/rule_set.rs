//! `RuleSet` — which table of holiday rules the engine resolves.
//!
//! Two tables exist:
//!
//! * [`RuleSet::Gregorian`] anchors every holiday to a month and day, so the
//!   third Monday of January is always the third Monday of January.
//! * [`RuleSet::Legacy`] anchors every holiday to a fixed day-of-year offset
//!   from January 1.  The offsets line up with the real holidays only in some
//!   years; in others (Thanksgiving 2024 lands on November 21) they do not.
//!   It is kept so results can be compared against data produced by the old
//!   offset-based query.

use std::str::FromStr;

use crate::holiday::{Anchor, FederalHoliday, HolidayRule};
use crate::month::Month;
use crate::weekday::Weekday;
use fedcal_core::errors::Error;

use FederalHoliday::*;
use Weekday::{Monday, Thursday};

/// Selects the holiday rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RuleSet {
    /// Month/day anchors; correct in every year.
    #[default]
    Gregorian,
    /// Day-of-year offsets, leap-year drift included.
    Legacy,
}

const fn next(anchor: Anchor, weekday: Weekday) -> HolidayRule {
    HolidayRule::NextWeekday { anchor, weekday }
}

const fn previous(anchor: Anchor, weekday: Weekday) -> HolidayRule {
    HolidayRule::PreviousWeekday { anchor, weekday }
}

const fn md(month: Month, day: u8) -> Anchor {
    Anchor::MonthDay(month, day)
}

const fn doy(offset: u16) -> Anchor {
    Anchor::DayOfYear(offset)
}

const GREGORIAN: [(FederalHoliday, HolidayRule); 10] = [
    (NewYearsDay, HolidayRule::Fixed(md(Month::January, 1))),
    (MlkDay, next(md(Month::January, 15), Monday)),
    (PresidentsDay, next(md(Month::February, 15), Monday)),
    (MemorialDay, previous(md(Month::May, 31), Monday)),
    (IndependenceDay, HolidayRule::Fixed(md(Month::July, 4))),
    (LaborDay, next(md(Month::September, 1), Monday)),
    (ColumbusDay, next(md(Month::October, 8), Monday)),
    (VeteransDay, HolidayRule::Fixed(md(Month::November, 11))),
    (Thanksgiving, next(md(Month::November, 22), Thursday)),
    (Christmas, HolidayRule::Fixed(md(Month::December, 25))),
];

const LEGACY: [(FederalHoliday, HolidayRule); 10] = [
    (NewYearsDay, HolidayRule::Fixed(doy(0))),
    (MlkDay, next(doy(14), Monday)),
    (PresidentsDay, next(doy(31), Monday)),
    (MemorialDay, previous(doy(151), Monday)),
    (IndependenceDay, HolidayRule::Fixed(doy(185))),
    (LaborDay, next(doy(244), Monday)),
    (ColumbusDay, next(doy(275), Monday)),
    (VeteransDay, HolidayRule::Fixed(doy(314))),
    (Thanksgiving, next(doy(325), Thursday)),
    (Christmas, HolidayRule::Fixed(doy(358))),
];

impl RuleSet {
    /// The ten `(holiday, rule)` pairs, in calendar order.
    pub fn rules(&self) -> &'static [(FederalHoliday, HolidayRule); 10] {
        match self {
            RuleSet::Gregorian => &GREGORIAN,
            RuleSet::Legacy => &LEGACY,
        }
    }

    /// The rule for one holiday.
    pub fn rule(&self, holiday: FederalHoliday) -> HolidayRule {
        self.rules()[holiday as usize].1
    }

    /// Lowercase identifier, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleSet::Gregorian => "gregorian",
            RuleSet::Legacy => "legacy",
        }
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gregorian" => Ok(RuleSet::Gregorian),
            "legacy" => Ok(RuleSet::Legacy),
            other => Err(Error::Parse(format!(
                "unknown rule set {other:?} (expected \"gregorian\" or \"legacy\")"
            ))),
        }
    }
}
