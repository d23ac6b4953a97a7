//! United States federal calendar.

use crate::calendar::Calendar;
use crate::classification::Classification;
use crate::date::CalendarDate;
use crate::engine::HolidayEngine;
use crate::rule_set::RuleSet;

/// United States — federal holidays, resolved by a [`HolidayEngine`].
///
/// Holidays:
/// * New Year's Day (Jan 1)
/// * MLK Day (3rd Mon in Jan)
/// * Presidents' Day (3rd Mon in Feb)
/// * Memorial Day (last Mon in May)
/// * Independence Day (Jul 4)
/// * Labor Day (1st Mon in Sep)
/// * Columbus Day (2nd Mon in Oct)
/// * Veterans Day (Nov 11)
/// * Thanksgiving (4th Thu in Nov)
/// * Christmas (Dec 25)
///
/// Fixed holidays are not moved to an observed weekday, and with
/// [`RuleSet::Legacy`] the dates follow the day-of-year offset table instead.
///
/// [`Calendar::is_holiday`] is `true` for any non-business day, weekends
/// included.  To ask whether `date` is one of the federal holidays, use
/// [`classify`](Self::classify) or [`HolidayEngine::is_holiday`] on
/// [`engine`](Self::engine).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedStatesFederal {
    engine: HolidayEngine,
}

impl UnitedStatesFederal {
    /// A federal calendar using `rule_set`.
    pub fn new(rule_set: RuleSet) -> Self {
        Self {
            engine: HolidayEngine::new(rule_set),
        }
    }

    /// The underlying engine.
    pub fn engine(&self) -> HolidayEngine {
        self.engine
    }

    /// Classify `date`.
    pub fn classify(&self, date: CalendarDate) -> Classification {
        self.engine.classify(date)
    }
}

impl Calendar for UnitedStatesFederal {
    fn name(&self) -> &str {
        match self.engine.rule_set() {
            RuleSet::Gregorian => "United States (Federal)",
            RuleSet::Legacy => "United States (Federal, legacy offsets)",
        }
    }

    fn is_business_day(&self, date: CalendarDate) -> bool {
        self.engine.is_business_day(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business_day_convention::BusinessDayConvention;

    fn date(y: u16, m: u8, d: u8) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn thanksgiving_weekend_adjustment() {
        let cal = UnitedStatesFederal::default();
        // Thanksgiving 2024 (Thu) → Friday Nov 29.
        assert_eq!(
            cal.adjust(date(2024, 11, 28), BusinessDayConvention::Following)
                .unwrap(),
            date(2024, 11, 29)
        );
        // Wednesday before Thanksgiving + 1 business day skips the holiday.
        assert_eq!(
            cal.advance_business_days(date(2024, 11, 27), 1).unwrap(),
            date(2024, 11, 29)
        );
    }

    #[test]
    fn non_business_day_versus_federal_holiday() {
        let cal = UnitedStatesFederal::default();
        // An ordinary Saturday.
        let sat = date(2024, 4, 13);
        assert!(cal.is_holiday(sat));
        assert!(!cal.engine().is_holiday(sat));
        assert_eq!(cal.classify(sat), Classification::Weekend);
        // Independence Day 2024 is a Thursday: both agree.
        let july4 = date(2024, 7, 4);
        assert!(cal.is_holiday(july4));
        assert!(cal.engine().is_holiday(july4));
    }

    #[test]
    fn legacy_calendar_name() {
        assert_eq!(
            UnitedStatesFederal::new(RuleSet::Legacy).name(),
            "United States (Federal, legacy offsets)"
        );
        assert_eq!(UnitedStatesFederal::default().name(), "United States (Federal)");
    }
}
