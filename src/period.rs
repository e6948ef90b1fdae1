//! Accounting-month window used to scope period queries.

use chrono::{Datelike as _, Local, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{FireflyError, Result};

/// Hour, minute, second and nanosecond of the last instant of a day.
const END_OF_DAY: (u32, u32, u32, u32) = (23, 59, 59, 999_999_999);

/// One calendar month, from its first instant to its last.
///
/// `start` is always day 1 at 00:00:00 and `end` the last nanosecond of
/// the last day of the same month. Both are derived together from a
/// single (year, month) pair, so no mutation can split them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeriodWindow {
    /// Calendar year.
    year: i32,
    /// Month, 1-based.
    month: u32,
    /// First instant of the month.
    start: NaiveDateTime,
    /// Last instant of the month.
    end: NaiveDateTime,
}

impl PeriodWindow {
    /// Creates the window for `month` (1-based) of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`FireflyError::InvalidPeriod`] if the month does not
    /// exist.
    #[inline]
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let invalid = || FireflyError::InvalidPeriod { year, month };
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(invalid)?;
        let (hour, minute, second, nano) = END_OF_DAY;
        let end = last
            .and_hms_nano_opt(hour, minute, second, nano)
            .ok_or_else(invalid)?;
        Ok(Self {
            year,
            month,
            start: first.and_time(NaiveTime::MIN),
            end,
        })
    }

    /// Creates the window for the current local month.
    ///
    /// # Errors
    ///
    /// Returns [`FireflyError::InvalidPeriod`] if the local clock is
    /// outside the supported date range.
    #[inline]
    pub fn current() -> Result<Self> {
        let today = Local::now().date_naive();
        Self::new(today.year(), today.month())
    }

    /// Returns the calendar year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the 1-based month.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first instant of the month.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the last instant of the month.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the first day of the month.
    #[inline]
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Returns the last day of the month.
    #[inline]
    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// Returns `true` if `instant` falls inside the window.
    #[inline]
    #[must_use]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Moves the window to the next month, rolling December over into
    /// January.
    ///
    /// # Errors
    ///
    /// Returns [`FireflyError::InvalidPeriod`] past the last supported
    /// year; the window is left unchanged.
    #[inline]
    pub fn advance(&mut self) -> Result<()> {
        let (year, month) = if self.month == 12 {
            (self.year.checked_add(1), 1)
        } else {
            (Some(self.year), self.month.saturating_add(1))
        };
        self.shift_to(year, month)
    }

    /// Moves the window to the previous month, rolling January back into
    /// December.
    ///
    /// # Errors
    ///
    /// Returns [`FireflyError::InvalidPeriod`] before the first supported
    /// year; the window is left unchanged.
    #[inline]
    pub fn retreat(&mut self) -> Result<()> {
        let (year, month) = if self.month == 1 {
            (self.year.checked_sub(1), 12)
        } else {
            (Some(self.year), self.month.saturating_sub(1))
        };
        self.shift_to(year, month)
    }

    /// Moves the window to `month` of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`FireflyError::InvalidPeriod`] if the month does not
    /// exist; the window is left unchanged.
    #[inline]
    pub fn set_to(&mut self, year: i32, month: u32) -> Result<()> {
        *self = Self::new(year, month)?;
        tracing::debug!(period = %self, "period window moved");
        Ok(())
    }

    /// Applies a computed neighbour month, mapping year overflow to
    /// [`FireflyError::InvalidPeriod`].
    fn shift_to(&mut self, year: Option<i32>, month: u32) -> Result<()> {
        let target = year.ok_or(FireflyError::InvalidPeriod {
            year: self.year,
            month,
        })?;
        self.set_to(target, month)
    }
}

impl core::fmt::Display for PeriodWindow {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
