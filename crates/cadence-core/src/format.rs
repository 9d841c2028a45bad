//! Human-readable rule descriptions.

use chrono::{Datelike, Weekday};

use crate::models::{Frequency, MonthlyPattern, RecurrenceRule};
use crate::pattern::week_of_month;

/// Full English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Describes a rule in prose, e.g. "Every 2 weeks on Monday, Friday".
///
/// Weekday lists keep the order they have on the rule. A weekday-position
/// pattern with missing fields is described with the start date's weekday and
/// position, which is what the matcher uses too.
pub fn describe(rule: &RecurrenceRule) -> String {
    let interval = rule.interval;

    match rule.frequency {
        Frequency::Daily => base_text(interval, "Daily", "days"),
        Frequency::Weekly => {
            let base = base_text(interval, "Weekly", "weeks");
            match rule.days_of_week.as_deref() {
                Some(days) if !days.is_empty() => {
                    let names: Vec<&str> = days.iter().copied().map(weekday_name).collect();
                    format!("{} on {}", base, names.join(", "))
                }
                _ => base,
            }
        }
        Frequency::Monthly => {
            let base = base_text(interval, "Monthly", "months");
            match rule.monthly_pattern {
                Some(MonthlyPattern::ByWeekdayPosition { weekday, position }) => {
                    let weekday = weekday.unwrap_or_else(|| rule.start_date.weekday());
                    let position = position.unwrap_or_else(|| week_of_month(rule.start_date));
                    format!("{} on the {} {}", base, position.ordinal(), weekday_name(weekday))
                }
                _ => base,
            }
        }
        Frequency::Yearly => base_text(interval, "Yearly", "years"),
    }
}

fn base_text(interval: u32, single: &str, unit: &str) -> String {
    if interval == 1 {
        single.to_string()
    } else {
        format!("Every {} {}", interval, unit)
    }
}
