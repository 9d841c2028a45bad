use anyhow::Result;
use cadence_core::range::is_in_range;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use tracing::debug;

use crate::cli::CheckCommand;
use crate::parser::parse_date;

pub fn check_date(command: CheckCommand, today: NaiveDate) -> Result<()> {
    let start = parse_date(&command.start, today)?;
    let end = command
        .end
        .as_deref()
        .map(|end| parse_date(end, today))
        .transpose()?;

    // An unreadable date is never inside any range.
    let day = match parse_date(&command.date, today) {
        Ok(day) => Some(day),
        Err(e) => {
            debug!(error = %e, "treating date as out of range");
            None
        }
    };

    let label = day.map_or_else(|| command.date.clone(), |day| day.to_string());
    if is_in_range(day, start, end) {
        println!("{} {} is in range", "✓".green().bold(), label);
    } else {
        println!("{} {} is out of range", "✗".red().bold(), label);
    }

    Ok(())
}
