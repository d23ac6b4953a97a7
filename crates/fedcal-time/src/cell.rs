//! `CellValue` — raw spreadsheet cell contents at the engine boundary.
//!
//! Reading workbooks is left to a spreadsheet library; this module only
//! models what such a library hands over, so date-bearing cells can be fed
//! to the [`HolidayEngine`].

use crate::classification::Classification;
use crate::date::CalendarDate;
use crate::date_system::DateSystem;
use crate::engine::HolidayEngine;
use fedcal_core::errors::{Error, Result};

/// The kinds of value a spreadsheet cell can hold.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// A string.
    Text(String),
    /// A plain number.
    Number(f64),
    /// A date-formatted number: the spreadsheet's day serial, possibly with
    /// a time-of-day fraction.
    Date(f64),
    /// A boolean.
    Boolean(bool),
    /// An empty cell.
    Blank,
}

impl CellValue {
    /// The date in this cell, or `None` if the cell is not date-formatted.
    ///
    /// Any time-of-day fraction is dropped.
    ///
    /// # Errors
    /// [`Error::InvalidDate`] if the serial is not finite or does not name a
    /// supported date.
    pub fn as_date(&self, system: DateSystem) -> Result<Option<CalendarDate>> {
        match *self {
            CellValue::Date(serial) => {
                if !serial.is_finite() {
                    return Err(Error::InvalidDate(format!(
                        "spreadsheet serial {serial} is not a number"
                    )));
                }
                system.to_date(serial.floor() as i64).map(Some)
            }
            CellValue::Text(_) | CellValue::Number(_) | CellValue::Boolean(_) | CellValue::Blank => {
                Ok(None)
            }
        }
    }

    /// Classify the cell's date, or `None` if the cell carries no date.
    pub fn classify_with(
        &self,
        engine: &HolidayEngine,
        system: DateSystem,
    ) -> Result<Option<Classification>> {
        Ok(self.as_date(system)?.map(|d| engine.classify(d)))
    }

    /// `true` for [`CellValue::Blank`] and for whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Blank => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}
