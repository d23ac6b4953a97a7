//! `Calendar` trait and the weekend-only calendar.
//!
//! A calendar knows which dates are business days and can adjust dates
//! according to a [`BusinessDayConvention`].  Every walk across the calendar
//! is bounded by the supported date range: stepping past
//! [`CalendarDate::MAX`] or before [`CalendarDate::MIN`] returns an error.

use crate::business_day_convention::BusinessDayConvention;
use crate::date::CalendarDate;
use fedcal_core::errors::Result;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"United States (Federal)"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: CalendarDate) -> bool;

    /// Return `true` if `date` is not a business day (weekend or holiday).
    fn is_holiday(&self, date: CalendarDate) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: CalendarDate) -> bool {
        date.is_weekend()
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: CalendarDate, convention: BusinessDayConvention) -> Result<CalendarDate> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => self.step_to_business_day(date, 1),
            BusinessDayConvention::Preceding => self.step_to_business_day(date, -1),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.step_to_business_day(date, 1);
                match adjusted {
                    Ok(d) if d.month() == date.month() => Ok(d),
                    _ => self.step_to_business_day(date, -1),
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.step_to_business_day(date, -1);
                match adjusted {
                    Ok(d) if d.month() == date.month() => Ok(d),
                    _ => self.step_to_business_day(date, 1),
                }
            }
            BusinessDayConvention::Nearest => {
                if self.is_business_day(date) {
                    return Ok(date);
                }
                let fwd = self.step_to_business_day(date, 1);
                let bwd = self.step_to_business_day(date, -1);
                match (fwd, bwd) {
                    (Ok(f), Ok(b)) if date - b < f - date => Ok(b),
                    (Ok(f), _) => Ok(f),
                    (Err(_), b) => b,
                }
            }
        }
    }

    /// Walk from `date` in steps of `step` days (±1) until a business day.
    #[doc(hidden)]
    fn step_to_business_day(&self, mut date: CalendarDate, step: i32) -> Result<CalendarDate> {
        while !self.is_business_day(date) {
            date = date.add_days(step)?;
        }
        Ok(date)
    }

    /// Advance `date` by `n` business days (backwards if `n < 0`).
    fn advance_business_days(&self, mut date: CalendarDate, n: i32) -> Result<CalendarDate> {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.unsigned_abs();
        while remaining > 0 {
            date = date.add_days(step)?;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: CalendarDate, d2: CalendarDate) -> i32 {
        let (start, end, sign) = if d2 >= d1 { (d1, d2, 1) } else { (d2, d1, -1) };
        let count = (start.serial() + 1..=end.serial())
            .filter_map(|s| CalendarDate::from_serial(s).ok())
            .filter(|&d| self.is_business_day(d))
            .count() as i32;
        sign * count
    }

    /// All business days in `[start, end]` (inclusive), in order.
    fn business_days_in_range(&self, start: CalendarDate, end: CalendarDate) -> Vec<CalendarDate> {
        (start.serial()..=end.serial())
            .filter_map(|s| CalendarDate::from_serial(s).ok())
            .filter(|&d| self.is_business_day(d))
            .collect()
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: CalendarDate) -> bool {
        !self.is_weekend(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2023-09-02 is a Saturday
        assert!(!cal.is_business_day(date(2023, 9, 2)));
        assert!(cal.is_business_day(date(2023, 9, 4)));
    }

    #[test]
    fn adjust_following_and_preceding() {
        let cal = WeekendsOnly;
        let sat = date(2023, 9, 2);
        assert_eq!(
            cal.adjust(sat, BusinessDayConvention::Following).unwrap(),
            date(2023, 9, 4)
        );
        assert_eq!(
            cal.adjust(sat, BusinessDayConvention::Preceding).unwrap(),
            date(2023, 9, 1)
        );
        assert_eq!(
            cal.adjust(sat, BusinessDayConvention::Unadjusted).unwrap(),
            sat
        );
    }

    #[test]
    fn adjust_modified_following_stays_in_month() {
        let cal = WeekendsOnly;
        // 2024-03-30 is a Saturday; Following would cross into April.
        assert_eq!(
            cal.adjust(date(2024, 3, 30), BusinessDayConvention::ModifiedFollowing)
                .unwrap(),
            date(2024, 3, 29)
        );
    }

    #[test]
    fn adjust_nearest() {
        let cal = WeekendsOnly;
        // Saturday is nearer Friday, Sunday is nearer Monday.
        assert_eq!(
            cal.adjust(date(2023, 9, 2), BusinessDayConvention::Nearest).unwrap(),
            date(2023, 9, 1)
        );
        assert_eq!(
            cal.adjust(date(2023, 9, 3), BusinessDayConvention::Nearest).unwrap(),
            date(2023, 9, 4)
        );
    }

    #[test]
    fn business_days_between() {
        let cal = WeekendsOnly;
        let d1 = date(2023, 9, 4); // Monday
        let d2 = date(2023, 9, 8); // Friday
        assert_eq!(cal.business_days_between(d1, d2), 4);
        assert_eq!(cal.business_days_between(d2, d1), -4);
        assert_eq!(cal.business_days_between(d1, d1), 0);
    }

    #[test]
    fn advance_stops_at_range_end() {
        let cal = WeekendsOnly;
        assert!(cal.advance_business_days(CalendarDate::MAX, 1).is_err());
        assert_eq!(
            cal.advance_business_days(date(2023, 9, 1), 1).unwrap(),
            date(2023, 9, 4)
        );
        assert_eq!(
            cal.advance_business_days(date(2023, 9, 4), -1).unwrap(),
            date(2023, 9, 1)
        );
    }
}
