use anyhow::{anyhow, Result};
use cadence_core::error::CoreError;
use cadence_core::models::weekday_from_index;
use chrono::{NaiveDate, NaiveTime, Weekday};
use chrono_english::{parse_date_string, Dialect};
use tracing::warn;

/// Parse a calendar day: ISO dates first ("2024-01-15"), then natural
/// language relative to `today` ("tomorrow", "next friday").
pub fn parse_date(date_str: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = date_str.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    // Anchor at midday so relative phrases never slip across a day boundary.
    let now = today.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN)).and_utc();
    parse_date_string(input, now, Dialect::Us)
        .map(|parsed| parsed.date_naive())
        .map_err(|e| {
            anyhow!(CoreError::InvalidInput(format!(
                "Failed to parse date '{}': {}",
                date_str, e
            )))
        })
}

/// Parse a month as "YYYY-MM" into its first day.
pub fn parse_month(month_str: &str) -> Result<NaiveDate> {
    let input = month_str.trim();
    NaiveDate::parse_from_str(&format!("{}-01", input), "%Y-%m-%d").map_err(|_| {
        anyhow!(CoreError::InvalidInput(format!(
            "Invalid month '{}'. Use the form YYYY-MM, e.g. '2024-03'",
            month_str
        )))
    })
}

/// Parse interval text. Values below 1 are raised to 1.
pub fn parse_interval(interval_str: &str) -> Result<u32> {
    let input = interval_str.trim();
    let value: i64 = input.parse().map_err(|_| {
        anyhow!(CoreError::InvalidInput(format!(
            "Interval must be a whole number, got '{}'",
            interval_str
        )))
    })?;

    if value < 1 {
        warn!(interval = value, "interval below 1, using 1");
    }
    Ok(u32::try_from(value.max(1)).unwrap_or(u32::MAX))
}

/// Parse a single weekday name ("mon", "monday", "m") or Sunday-based index ("0".."6").
pub fn parse_weekday(day_str: &str) -> Result<Weekday> {
    let day = day_str.trim().to_lowercase();

    if let Ok(index) = day.parse::<u8>() {
        return weekday_from_index(index).map_err(|e| anyhow!(e));
    }

    let weekday = match day.as_str() {
        "sun" | "sunday" | "su" => Weekday::Sun,
        "mon" | "monday" | "m" => Weekday::Mon,
        "tue" | "tuesday" | "tu" => Weekday::Tue,
        "wed" | "wednesday" | "w" => Weekday::Wed,
        "thu" | "thursday" | "th" => Weekday::Thu,
        "fri" | "friday" | "f" => Weekday::Fri,
        "sat" | "saturday" | "sa" => Weekday::Sat,
        _ => {
            return Err(anyhow!(CoreError::InvalidInput(format!(
                "Invalid day '{}'",
                day_str
            ))))
        }
    };
    Ok(weekday)
}

/// Parse days string like "mon,wed,fri", "monday,tuesday", "weekdays" or "none".
///
/// "none" produces an explicitly empty list, which matches no day at all.
/// Order is kept as written; repeated days are dropped.
pub fn parse_weekdays(days_str: &str) -> Result<Vec<Weekday>> {
    let input = days_str.trim().to_lowercase();

    // Handle special day groups
    match input.as_str() {
        "weekdays" | "workdays" => {
            return Ok(vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ]);
        }
        "weekends" => return Ok(vec![Weekday::Sat, Weekday::Sun]),
        "daily" | "everyday" | "all" => {
            return Ok(vec![
                Weekday::Sun,
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
            ]);
        }
        "none" | "" => return Ok(Vec::new()),
        _ => {}
    }

    let mut days = Vec::new();
    let mut invalid_days = Vec::new();

    for day in input.split(',').map(str::trim).filter(|day| !day.is_empty()) {
        match parse_weekday(day) {
            Ok(weekday) => {
                if !days.contains(&weekday) {
                    days.push(weekday);
                }
            }
            Err(_) => invalid_days.push(day.to_string()),
        }
    }

    if !invalid_days.is_empty() {
        return Err(anyhow!(CoreError::InvalidInput(format!(
            "Invalid day(s): {}\n\nSupported formats:\n  • Full names: 'monday,tuesday,wednesday'\n  • Short names: 'mon,tue,wed'\n  • Indexes: '1,3,5' (0 = Sunday)\n  • Groups: 'weekdays', 'weekends', 'daily', 'none'",
            invalid_days.join(", ")
        ))));
    }

    Ok(days)
}
