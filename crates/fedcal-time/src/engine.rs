//! `HolidayEngine` — resolves holiday sets and classifies dates.
//!
//! Every operation is a pure function of its arguments and the engine's
//! [`RuleSet`].  The engine holds no cache and no shared state, so one value
//! can be copied into any number of threads.  Callers that classify many
//! dates of the same year can layer a [`YearCache`](crate::YearCache) on top.

use tracing::{debug, trace};

use crate::calendar_year::CalendarYear;
use crate::classification::Classification;
use crate::date::{check_year, CalendarDate};
use crate::holiday::{FederalHoliday, Holiday};
use crate::rule_set::RuleSet;
use fedcal_core::errors::{Error, Result};

/// U.S. federal holiday engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayEngine {
    rule_set: RuleSet,
}

impl HolidayEngine {
    /// An engine resolving holidays with `rule_set`.
    pub fn new(rule_set: RuleSet) -> Self {
        Self { rule_set }
    }

    /// The rule table in use.
    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    /// Compute the ten holidays of `year`.
    ///
    /// # Errors
    /// [`Error::InvalidDate`] if `year` is outside the supported date range.
    pub fn resolve_holidays(&self, year: u16) -> Result<CalendarYear> {
        check_year(year)?;
        let holidays = self
            .rule_set
            .rules()
            .iter()
            .map(|&(kind, rule)| {
                Ok(Holiday {
                    kind,
                    date: rule.resolve(year)?,
                    rule,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let resolved = CalendarYear::from_holidays(year, holidays)?;
        trace!(year, rule_set = %self.rule_set, "resolved holidays");
        Ok(resolved)
    }

    /// The holiday falling on `date`, if any.
    pub fn holiday_on(&self, date: CalendarDate) -> Option<FederalHoliday> {
        let year = date.year();
        self.rule_set
            .rules()
            .iter()
            .find(|(_, rule)| rule.resolve(year).is_ok_and(|d| d == date))
            .map(|&(kind, _)| kind)
    }

    /// Classify `date` as a holiday, a weekend day, or a business day.
    ///
    /// Holidays take precedence: a fixed holiday on a Saturday or Sunday is
    /// reported as [`Classification::Holiday`].
    pub fn classify(&self, date: CalendarDate) -> Classification {
        Classification::of(date, self.holiday_on(date))
    }

    /// `true` if `date` is neither a holiday nor a weekend day.
    pub fn is_business_day(&self, date: CalendarDate) -> bool {
        self.classify(date).is_business_day()
    }

    /// `true` if `date` is one of the holidays.
    pub fn is_holiday(&self, date: CalendarDate) -> bool {
        self.holiday_on(date).is_some()
    }

    /// Display name of the holiday on `date`, if any.
    pub fn holiday_name(&self, date: CalendarDate) -> Option<&'static str> {
        self.holiday_on(date).map(|h| h.name())
    }

    /// All holidays in `[start, end]` (inclusive), ordered by date.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `end < start`.
    pub fn holidays_in_range(&self, start: CalendarDate, end: CalendarDate) -> Result<Vec<Holiday>> {
        if end < start {
            return Err(Error::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        let mut found = Vec::new();
        for year in start.year()..=end.year() {
            let resolved = self.resolve_holidays(year)?;
            // Years are visited in order, so per-year date order is enough.
            found.extend(
                resolved
                    .sorted()
                    .into_iter()
                    .filter(|h| (start..=end).contains(&h.date)),
            );
        }
        debug!(%start, %end, count = found.len(), "holidays in range");
        Ok(found)
    }
}

/// [`HolidayEngine::resolve_holidays`] with the default (Gregorian) rules.
pub fn resolve_holidays(year: u16) -> Result<CalendarYear> {
    HolidayEngine::default().resolve_holidays(year)
}

/// [`HolidayEngine::classify`] with the default (Gregorian) rules.
pub fn classify(date: CalendarDate) -> Classification {
    HolidayEngine::default().classify(date)
}

/// [`HolidayEngine::holidays_in_range`] with the default (Gregorian) rules.
pub fn holidays_in_range(start: CalendarDate, end: CalendarDate) -> Result<Vec<Holiday>> {
    HolidayEngine::default().holidays_in_range(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn gregorian_2024() {
        let year = resolve_holidays(2024).unwrap();
        let got: Vec<_> = year.iter().map(|h| (h.name(), h.date)).collect();
        assert_eq!(
            got,
            vec![
                ("New Year's Day", date(2024, 1, 1)),
                ("MLK Day", date(2024, 1, 15)),
                ("Presidents' Day", date(2024, 2, 19)),
                ("Memorial Day", date(2024, 5, 27)),
                ("Independence Day", date(2024, 7, 4)),
                ("Labor Day", date(2024, 9, 2)),
                ("Columbus Day", date(2024, 10, 14)),
                ("Veterans Day", date(2024, 11, 11)),
                ("Thanksgiving", date(2024, 11, 28)),
                ("Christmas", date(2024, 12, 25)),
            ]
        );
    }

    #[test]
    fn legacy_2024_keeps_offset_drift() {
        let year = HolidayEngine::new(RuleSet::Legacy)
            .resolve_holidays(2024)
            .unwrap();
        assert_eq!(year.get(FederalHoliday::MlkDay).date, date(2024, 1, 15));
        assert_eq!(year.get(FederalHoliday::MemorialDay).date, date(2024, 5, 27));
        assert_eq!(year.get(FederalHoliday::Thanksgiving).date, date(2024, 11, 21));
        assert_eq!(year.get(FederalHoliday::Christmas).date, date(2024, 12, 24));
    }

    #[test]
    fn classify_2024_scenarios() {
        assert_eq!(
            classify(date(2024, 1, 1)),
            Classification::Holiday(FederalHoliday::NewYearsDay)
        );
        assert_eq!(classify(date(2024, 4, 10)), Classification::BusinessDay);
        assert_eq!(classify(date(2024, 4, 13)), Classification::Weekend);
        assert_eq!(classify(date(2024, 4, 14)), Classification::Weekend);
    }

    #[test]
    fn weekend_holiday_is_a_holiday() {
        // Christmas 2022 fell on a Sunday.
        let d = date(2022, 12, 25);
        assert!(d.is_weekend());
        assert_eq!(classify(d), Classification::Holiday(FederalHoliday::Christmas));
        // No observed-day shift: the Monday after is an ordinary business day.
        assert_eq!(classify(date(2022, 12, 26)), Classification::BusinessDay);
    }

    #[test]
    fn unsupported_year() {
        assert!(matches!(resolve_holidays(1899), Err(Error::InvalidDate(_))));
        assert!(matches!(resolve_holidays(2200), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = holidays_in_range(date(2024, 12, 31), date(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { .. }));
    }

    #[test]
    fn single_day_range() {
        let d = date(2024, 7, 4);
        let found = holidays_in_range(d, d).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, FederalHoliday::IndependenceDay);
        assert!(holidays_in_range(date(2024, 7, 5), date(2024, 8, 30))
            .unwrap()
            .is_empty());
    }
}
