use crate::cli::RuleArgs;
use crate::parser::{parse_date, parse_interval, parse_weekday, parse_weekdays};
use anyhow::{anyhow, Result};
use cadence_core::error::CoreError;
use cadence_core::models::{Frequency, MonthlyPattern, RecurrenceRule};
use chrono::{Local, NaiveDate};
use tracing::debug;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Build a rule from command-line options.
///
/// Options that don't belong to the chosen frequency are kept on the rule
/// and simply ignored when occurrences are computed.
pub fn build_rule(args: &RuleArgs, today: NaiveDate) -> Result<RecurrenceRule> {
    let start_date = match &args.start {
        Some(start) => parse_date(start, today)?,
        None => today,
    };
    let end_date = args
        .end
        .as_deref()
        .map(|end| parse_date(end, today))
        .transpose()?;

    if let Some(end) = end_date {
        if end < start_date {
            return Err(anyhow!(CoreError::InvalidInput(format!(
                "End date {} is before start date {}",
                end, start_date
            ))));
        }
    }

    let days_of_week = args.on.as_deref().map(parse_weekdays).transpose()?;

    let monthly_pattern = if args.weekday.is_some() || args.position.is_some() {
        Some(MonthlyPattern::ByWeekdayPosition {
            weekday: args.weekday.as_deref().map(parse_weekday).transpose()?,
            position: args.position,
        })
    } else {
        args.day_of_month.map(MonthlyPattern::by_date)
    };

    let rule = RecurrenceRule {
        frequency: args.every,
        interval: parse_interval(&args.interval)?,
        days_of_week,
        monthly_pattern,
        start_date,
        end_date,
    };

    if args.every != Frequency::Weekly && rule.days_of_week.is_some() {
        debug!(frequency = %rule.frequency, "--on only applies to weekly rules");
    }

    rule.validate()?;
    Ok(rule)
}
