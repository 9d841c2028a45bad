use anyhow::{anyhow, Result};
use cadence_core::error::CoreError;
use cadence_core::format::describe;
use cadence_core::recurrence::RecurrenceManager;
use chrono::{Months, NaiveDate};
use owo_colors::OwoColorize;

use crate::cli::CalendarCommand;
use crate::config::Config;
use crate::parser::parse_month;
use crate::util::build_rule;
use crate::views::calendar::{legend, month_end, month_start, MonthGrid};

pub fn show_calendar(command: CalendarCommand, config: &Config, today: NaiveDate) -> Result<()> {
    let rule = build_rule(&command.rule, today)?;
    let first_month = match &command.month {
        Some(month) => parse_month(month)?,
        None => month_start(rule.start_date),
    };

    let manager = RecurrenceManager::with_config(rule, config.generation())?;
    println!("{}", describe(manager.rule()).bold());

    for offset in 0..command.months.max(1) {
        let month = first_month
            .checked_add_months(Months::new(offset))
            .ok_or_else(|| anyhow!(CoreError::InvalidInput("Month is out of range".to_string())))?;
        let occurrences = manager.occurrences_between(month, month_end(month)?);
        let grid = MonthGrid::build(month, &occurrences, manager.rule().start_date, today)?;

        println!();
        println!("{}", grid.render());
        println!("{} occurrence(s)", grid.highlighted_count());
    }

    println!();
    println!("{}", legend());
    Ok(())
}
