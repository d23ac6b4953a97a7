//! Spreadsheet date serials.
//!
//! Spreadsheets store dates as day counts from a base date.  Two bases are
//! in use:
//!
//! * `Excel1900`: serial 1 = 1900-01-01, and serial 60 is the non-existent
//!   1900-02-29 inherited from Lotus 1-2-3.  Serials from 61 on are one
//!   ahead of the true day count.
//! * `Excel1904`: serial 0 = 1904-01-01.

use crate::date::CalendarDate;
use fedcal_core::errors::{Error, Result};

/// Serial of 1904-01-01 in [`CalendarDate`] numbering.
const EPOCH_1904: i32 = 1461;

/// Serial of the phantom 1900-02-29 in the 1900 date system.
const PHANTOM_LEAP_DAY: i32 = 60;

/// Base date system used to interpret spreadsheet date serials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DateSystem {
    /// 1900 base (Windows default), with the phantom leap day.
    #[default]
    Excel1900,
    /// 1904 base (older Mac workbooks).
    Excel1904,
}

impl DateSystem {
    /// Convert a whole-day spreadsheet serial to a date.
    ///
    /// # Errors
    /// [`Error::InvalidDate`] for serial 60 in the 1900 system (a day that
    /// never existed) and for serials outside the supported range.
    pub fn to_date(&self, serial: i64) -> Result<CalendarDate> {
        let serial = i32::try_from(serial)
            .map_err(|_| Error::InvalidDate(format!("spreadsheet serial {serial} out of range")))?;
        let own = match self {
            DateSystem::Excel1900 if serial == PHANTOM_LEAP_DAY => {
                return Err(Error::InvalidDate(
                    "spreadsheet serial 60 is the non-existent 1900-02-29".into(),
                ))
            }
            DateSystem::Excel1900 if serial > PHANTOM_LEAP_DAY => serial - 1,
            DateSystem::Excel1900 => serial,
            DateSystem::Excel1904 => serial.checked_add(EPOCH_1904).ok_or_else(|| {
                Error::InvalidDate(format!("spreadsheet serial {serial} out of range"))
            })?,
        };
        CalendarDate::from_serial(own)
    }

    /// Convert a date to its spreadsheet serial.
    pub fn to_serial(&self, date: CalendarDate) -> i64 {
        let own = date.serial() as i64;
        match self {
            DateSystem::Excel1900 if own >= PHANTOM_LEAP_DAY as i64 => own + 1,
            DateSystem::Excel1900 => own,
            DateSystem::Excel1904 => own - EPOCH_1904 as i64,
        }
    }
}
