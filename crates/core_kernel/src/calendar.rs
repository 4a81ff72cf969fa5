//! Calendar-day arithmetic
//!
//! Due dates are computed by adding whole calendar days to a posting date.
//! The arithmetic sits behind [`DateCalendar`] so that hosts with their own
//! date handling (holiday lists, fiscal calendars) can plug it in.

use chrono::{Days, NaiveDate};

use crate::error::CoreError;

/// Adds days to dates
pub trait DateCalendar: Send + Sync {
    /// Returns `date` moved forward by `days` calendar days
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DateOutOfRange`] if the result is not representable.
    fn add_days(&self, date: NaiveDate, days: u32) -> Result<NaiveDate, CoreError>;
}

/// Plain proleptic Gregorian calendar arithmetic
#[derive(Debug, Clone, Copy, Default)]
pub struct GregorianCalendar;

impl DateCalendar for GregorianCalendar {
    fn add_days(&self, date: NaiveDate, days: u32) -> Result<NaiveDate, CoreError> {
        date.checked_add_days(Days::new(u64::from(days)))
            .ok_or(CoreError::DateOutOfRange { date, days })
    }
}
