use anyhow::Result;
use cadence_core::format::weekday_name;
use cadence_core::recurrence::RecurrenceManager;
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

use crate::cli::NextCommand;
use crate::config::Config;
use crate::parser::parse_date;
use crate::util::build_rule;
use crate::views::table::relative_day;

pub fn next_occurrence(command: NextCommand, config: &Config, today: NaiveDate) -> Result<()> {
    let rule = build_rule(&command.rule, today)?;
    let after = match &command.after {
        Some(after) => parse_date(after, today)?,
        None => today,
    };

    let manager = RecurrenceManager::with_config(rule, config.generation())?;
    match manager.next_occurrence_after(after) {
        Some(day) => println!(
            "{} ({}, {})",
            day.format("%Y-%m-%d").green().bold(),
            weekday_name(day.weekday()),
            relative_day(day, today)
        ),
        None => match manager.rule().end_date {
            Some(end) if end <= after => {
                println!("No occurrence after {}: the rule ends on {}.", after, end)
            }
            _ => println!(
                "No occurrence within {} days after {}.",
                manager.config().search_horizon(manager.rule()),
                after
            ),
        },
    }

    Ok(())
}
