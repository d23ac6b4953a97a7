//! # fedcal-time
//!
//! Calendar dates, U.S. federal holiday resolution, and business-day
//! classification.
//!
//! ```
//! use fedcal_time::{classify, CalendarDate, Classification, FederalHoliday};
//!
//! let d = CalendarDate::from_ymd(2024, 11, 28)?;
//! assert_eq!(classify(d), Classification::Holiday(FederalHoliday::Thanksgiving));
//! # Ok::<(), fedcal_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Optional caller-side cache of resolved years.
pub mod cache;

/// Calendar trait and the weekend-only calendar.
pub mod calendar;

/// Resolved holiday set for one year.
pub mod calendar_year;

/// Concrete calendar implementations.
pub mod calendars;

/// Spreadsheet cell values.
pub mod cell;

/// Holiday / weekend / business-day classification.
pub mod classification;

/// `CalendarDate` type.
pub mod date;

/// Spreadsheet date serial systems.
pub mod date_system;

/// The holiday engine.
pub mod engine;

/// Holiday rules and resolved holidays.
pub mod holiday;

/// `Month` — month of the year.
pub mod month;

/// Holiday rule tables.
pub mod rule_set;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use cache::YearCache;
pub use calendar::{Calendar, WeekendsOnly};
pub use calendar_year::CalendarYear;
pub use calendars::united_states::UnitedStatesFederal;
pub use cell::CellValue;
pub use classification::Classification;
pub use date::CalendarDate;
pub use date_system::DateSystem;
pub use engine::{classify, holidays_in_range, resolve_holidays, HolidayEngine};
pub use holiday::{Anchor, FederalHoliday, Holiday, HolidayRule};
pub use month::Month;
pub use rule_set::RuleSet;
pub use weekday::Weekday;
