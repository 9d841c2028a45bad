use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::CoreError;

/// The unit a rule repeats in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Monthly => write!(f, "monthly"),
            Frequency::Yearly => write!(f, "yearly"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid frequency: {0}")]
pub struct ParseFrequencyError(String);

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" | "days" => Ok(Frequency::Daily),
            "weekly" | "week" | "weeks" => Ok(Frequency::Weekly),
            "monthly" | "month" | "months" => Ok(Frequency::Monthly),
            "yearly" | "year" | "years" | "annually" => Ok(Frequency::Yearly),
            _ => Err(ParseFrequencyError(s.to_string())),
        }
    }
}

/// Ordinal position of a weekday inside its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekOfMonth {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl WeekOfMonth {
    /// Builds a position from its numeric form: 1..=4, or -1 for the last one.
    pub fn from_position(position: i8) -> Result<Self, CoreError> {
        match position {
            1 => Ok(WeekOfMonth::First),
            2 => Ok(WeekOfMonth::Second),
            3 => Ok(WeekOfMonth::Third),
            4 => Ok(WeekOfMonth::Fourth),
            -1 => Ok(WeekOfMonth::Last),
            other => Err(CoreError::InvalidInput(format!(
                "week of month must be 1, 2, 3, 4 or -1, got {}",
                other
            ))),
        }
    }

    pub fn position(self) -> i8 {
        match self {
            WeekOfMonth::First => 1,
            WeekOfMonth::Second => 2,
            WeekOfMonth::Third => 3,
            WeekOfMonth::Fourth => 4,
            WeekOfMonth::Last => -1,
        }
    }

    /// Ordinal word used in descriptions ("first" .. "fourth", "last").
    pub fn ordinal(self) -> &'static str {
        match self {
            WeekOfMonth::First => "first",
            WeekOfMonth::Second => "second",
            WeekOfMonth::Third => "third",
            WeekOfMonth::Fourth => "fourth",
            WeekOfMonth::Last => "last",
        }
    }
}

impl fmt::Display for WeekOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ordinal())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid week of month: {0}")]
pub struct ParseWeekOfMonthError(String);

impl FromStr for WeekOfMonth {
    type Err = ParseWeekOfMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" | "1st" | "1" => Ok(WeekOfMonth::First),
            "second" | "2nd" | "2" => Ok(WeekOfMonth::Second),
            "third" | "3rd" | "3" => Ok(WeekOfMonth::Third),
            "fourth" | "4th" | "4" => Ok(WeekOfMonth::Fourth),
            "last" | "-1" => Ok(WeekOfMonth::Last),
            _ => Err(ParseWeekOfMonthError(s.to_string())),
        }
    }
}

/// How a monthly rule picks its day inside each aligned month.
///
/// Fields left as `None` fall back to the rule's start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthlyPattern {
    /// Same numeric day every month (1..=31).
    ByDate { day_of_month: Option<u32> },
    /// Same weekday at the same position every month, e.g. "last Friday".
    ByWeekdayPosition {
        weekday: Option<Weekday>,
        position: Option<WeekOfMonth>,
    },
}

impl MonthlyPattern {
    pub fn by_date(day_of_month: u32) -> Self {
        MonthlyPattern::ByDate {
            day_of_month: Some(day_of_month),
        }
    }

    pub fn by_weekday_position(weekday: Weekday, position: WeekOfMonth) -> Self {
        MonthlyPattern::ByWeekdayPosition {
            weekday: Some(weekday),
            position: Some(position),
        }
    }
}

/// A declarative description of a repeating calendar pattern.
///
/// `days_of_week` is only read for weekly rules and `monthly_pattern` only for
/// monthly rules; values set for another frequency are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    /// Repeat spacing in units of `frequency`. Must be at least 1.
    pub interval: u32,
    /// `None` accepts any weekday; `Some(vec![])` accepts none.
    pub days_of_week: Option<Vec<Weekday>>,
    pub monthly_pattern: Option<MonthlyPattern>,
    pub start_date: NaiveDate,
    /// Inclusive upper bound.
    pub end_date: Option<NaiveDate>,
}

impl RecurrenceRule {
    /// A rule repeating every single unit of `frequency` from `start_date`.
    pub fn new(frequency: Frequency, start_date: NaiveDate) -> Self {
        Self {
            frequency,
            interval: 1,
            days_of_week: None,
            monthly_pattern: None,
            start_date,
            end_date: None,
        }
    }

    pub fn daily(start_date: NaiveDate) -> Self {
        Self::new(Frequency::Daily, start_date)
    }

    pub fn weekly(start_date: NaiveDate) -> Self {
        Self::new(Frequency::Weekly, start_date)
    }

    pub fn monthly(start_date: NaiveDate) -> Self {
        Self::new(Frequency::Monthly, start_date)
    }

    pub fn yearly(start_date: NaiveDate) -> Self {
        Self::new(Frequency::Yearly, start_date)
    }

    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_days_of_week(mut self, days: Vec<Weekday>) -> Self {
        self.days_of_week = Some(days);
        self
    }

    pub fn with_monthly_pattern(mut self, pattern: MonthlyPattern) -> Self {
        self.monthly_pattern = Some(pattern);
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Checks the preconditions the generator relies on.
    ///
    /// Fields that do not apply to the rule's frequency are not inspected.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.interval == 0 {
            return Err(CoreError::InvalidRule(
                "interval must be at least 1".to_string(),
            ));
        }

        if self.frequency == Frequency::Monthly {
            if let Some(MonthlyPattern::ByDate {
                day_of_month: Some(day),
            }) = self.monthly_pattern
            {
                if !(1..=31).contains(&day) {
                    return Err(CoreError::InvalidRule(format!(
                        "day of month must be between 1 and 31, got {}",
                        day
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Why an occurrence scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The requested number of occurrences was collected.
    CountReached,
    /// The iteration cap was hit before enough occurrences were found.
    IterationCap,
    /// The scan moved past the rule's end date.
    EndDateReached,
    /// The scan ran off the end of the representable calendar.
    CalendarExhausted,
}

/// Result of one occurrence scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDates {
    /// Matching days in ascending order.
    pub dates: Vec<NaiveDate>,
    /// True when the scan stopped on the count or the iteration cap. This does
    /// not tell those two apart; see `termination` for that.
    pub has_more: bool,
    pub termination: Termination,
}

impl GeneratedDates {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Converts a Sunday-based weekday index (0 = Sunday .. 6 = Saturday).
pub fn weekday_from_index(index: u8) -> Result<Weekday, CoreError> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(CoreError::InvalidInput(format!(
            "weekday index must be between 0 and 6, got {}",
            other
        ))),
    }
}

/// Sunday-based index of a weekday (0 = Sunday .. 6 = Saturday).
#[inline]
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// Sunday-based weekday index of a calendar day.
#[inline]
pub fn day_weekday_index(day: NaiveDate) -> u8 {
    weekday_index(day.weekday())
}
