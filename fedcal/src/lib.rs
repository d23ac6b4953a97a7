//! # fedcal
//!
//! U.S. federal holiday resolution and business-day classification.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `fedcal-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! fedcal = "0.1"
//! ```
//!
//! ```rust
//! use fedcal::time::{CalendarDate, Classification, HolidayEngine, RuleSet};
//!
//! let engine = HolidayEngine::default();
//! let d = CalendarDate::from_ymd(2024, 4, 13)?;
//! assert_eq!(engine.classify(d), Classification::Weekend);
//!
//! // The day-of-year offset table, kept for comparison with older data.
//! let legacy = HolidayEngine::new(RuleSet::Legacy);
//! let thanksgiving = CalendarDate::from_ymd(2024, 11, 21)?;
//! assert_eq!(legacy.holiday_name(thanksgiving), Some("Thanksgiving"));
//! # Ok::<(), fedcal::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use fedcal_core as core;

/// Dates, holiday engine, and calendars.
pub use fedcal_time as time;

pub use fedcal_core::{Error, Result};
pub use fedcal_time::{classify, holidays_in_range, resolve_holidays};
