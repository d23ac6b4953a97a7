//! `Classification` — what kind of day a date is.

use crate::date::CalendarDate;
use crate::holiday::FederalHoliday;

/// The outcome of classifying one date.
///
/// Exactly one variant applies to every date.  A holiday that falls on a
/// Saturday or Sunday is a `Holiday`, not a `Weekend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    /// One of the federal holidays.
    Holiday(FederalHoliday),
    /// Saturday or Sunday, and not a holiday.
    Weekend,
    /// Neither a holiday nor a weekend day.
    BusinessDay,
}

impl Classification {
    /// Classify `date`, given the holiday (if any) that falls on it.
    ///
    /// The holiday wins over the weekend.
    pub(crate) fn of(date: CalendarDate, holiday: Option<FederalHoliday>) -> Self {
        match holiday {
            Some(kind) => Classification::Holiday(kind),
            None if date.is_weekend() => Classification::Weekend,
            None => Classification::BusinessDay,
        }
    }

    /// `true` only for [`Classification::BusinessDay`].
    pub fn is_business_day(&self) -> bool {
        matches!(self, Classification::BusinessDay)
    }

    /// `true` for [`Classification::Holiday`].
    pub fn is_holiday(&self) -> bool {
        matches!(self, Classification::Holiday(_))
    }

    /// The holiday's display name, if this is a holiday.
    pub fn holiday_name(&self) -> Option<&'static str> {
        match self {
            Classification::Holiday(h) => Some(h.name()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Holiday(h) => write!(f, "HOLIDAY ({h})"),
            Classification::Weekend => f.write_str("WEEKEND"),
            Classification::BusinessDay => f.write_str("BUSINESS_DAY"),
        }
    }
}
