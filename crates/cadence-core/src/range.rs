//! Calendar-day range checks.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Anything that can be reduced to a calendar day.
///
/// `None` marks an input that could not be interpreted as a day.
pub trait AsCalendarDay {
    fn as_calendar_day(&self) -> Option<NaiveDate>;
}

impl AsCalendarDay for NaiveDate {
    fn as_calendar_day(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl AsCalendarDay for NaiveDateTime {
    fn as_calendar_day(&self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl<Tz: TimeZone> AsCalendarDay for DateTime<Tz> {
    fn as_calendar_day(&self) -> Option<NaiveDate> {
        Some(self.date_naive())
    }
}

impl<T: AsCalendarDay> AsCalendarDay for Option<T> {
    fn as_calendar_day(&self) -> Option<NaiveDate> {
        self.as_ref().and_then(AsCalendarDay::as_calendar_day)
    }
}

impl<T: AsCalendarDay + ?Sized> AsCalendarDay for &T {
    fn as_calendar_day(&self) -> Option<NaiveDate> {
        (**self).as_calendar_day()
    }
}

/// Returns whether `day` lies in `start..=end`, or at or after `start` when
/// `end` is absent. Time of day is dropped from every argument first.
///
/// An invalid `day` is never in range.
pub fn is_in_range<D, S, E>(day: D, start: S, end: Option<E>) -> bool
where
    D: AsCalendarDay,
    S: AsCalendarDay,
    E: AsCalendarDay,
{
    let (Some(day), Some(start)) = (day.as_calendar_day(), start.as_calendar_day()) else {
        return false;
    };

    if day < start {
        return false;
    }

    match end {
        Some(end) => match end.as_calendar_day() {
            Some(end) => day <= end,
            None => false,
        },
        None => true,
    }
}
