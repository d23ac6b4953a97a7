//! `CalendarYear` — the resolved holiday set for one year.

use crate::classification::Classification;
use crate::date::CalendarDate;
use crate::holiday::{FederalHoliday, Holiday};
use fedcal_core::ensure_post;
use fedcal_core::errors::{Error, Result};

/// The ten holidays of one year, in calendar (rule table) order.
///
/// Every value holds each federal holiday exactly once, in
/// [`FederalHoliday::ALL`] order, dated within `year`.  Deserialized values
/// are checked the same way as freshly resolved ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CalendarYearDataModel")
)]
pub struct CalendarYear {
    year: u16,
    holidays: [Holiday; 10],
}

impl CalendarYear {
    /// Assemble a year from its holidays.
    ///
    /// # Errors
    /// [`Error::Postcondition`] unless `holidays` are the ten federal
    /// holidays in order, each dated within `year`.
    pub(crate) fn from_holidays(year: u16, holidays: Vec<Holiday>) -> Result<Self> {
        if let Some(stray) = holidays.iter().find(|h| h.date.year() != year) {
            return Err(Error::Postcondition(format!(
                "{} dated {} outside {year}",
                stray.kind, stray.date
            )));
        }
        ensure_post!(
            holidays.iter().map(|h| h.kind).eq(FederalHoliday::ALL),
            "holiday set for {year} is not the ten federal holidays in order"
        );
        let holidays: [Holiday; 10] = holidays.try_into().map_err(|v: Vec<Holiday>| {
            Error::Postcondition(format!("expected 10 holidays for {year}, got {}", v.len()))
        })?;
        Ok(Self { year, holidays })
    }

    /// The year these holidays belong to.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// All ten holidays, in rule order.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Holidays sorted by date (ties keep rule order).
    pub fn sorted(&self) -> Vec<Holiday> {
        let mut v = self.holidays.to_vec();
        v.sort_by_key(|h| h.date);
        v
    }

    /// The entry for one holiday.
    pub fn get(&self, kind: FederalHoliday) -> &Holiday {
        &self.holidays[kind as usize]
    }

    /// The holiday falling on `date`, if any.
    ///
    /// If two holidays share a date, the earlier rule wins.
    pub fn holiday_on(&self, date: CalendarDate) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.date == date)
    }

    /// `true` if some holiday falls on `date`.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.holiday_on(date).is_some()
    }

    /// Classify `date` against this year's holidays.
    ///
    /// A date in another year never matches a holiday here, so it comes
    /// back as a weekend day or a business day.
    pub fn classify(&self, date: CalendarDate) -> Classification {
        Classification::of(date, self.holiday_on(date).map(|h| h.kind))
    }

    /// Iterate over the holidays in rule order.
    pub fn iter(&self) -> std::slice::Iter<'_, Holiday> {
        self.holidays.iter()
    }
}

impl<'a> IntoIterator for &'a CalendarYear {
    type Item = &'a Holiday;
    type IntoIter = std::slice::Iter<'a, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.holidays.iter()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CalendarYearDataModel {
    year: u16,
    holidays: Vec<Holiday>,
}

#[cfg(feature = "serde")]
impl TryFrom<CalendarYearDataModel> for CalendarYear {
    type Error = Error;

    fn try_from(model: CalendarYearDataModel) -> Result<Self> {
        Self::from_holidays(model.year, model.holidays)
    }
}
