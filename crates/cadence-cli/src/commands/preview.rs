use anyhow::Result;
use cadence_core::format::describe;
use cadence_core::models::{GeneratedDates, Termination};
use cadence_core::recurrence::RecurrenceManager;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use tracing::warn;

use crate::cli::PreviewCommand;
use crate::config::Config;
use crate::util::build_rule;
use crate::views::table::display_occurrences;

pub fn preview_rule(command: PreviewCommand, config: &Config, today: NaiveDate) -> Result<()> {
    let rule = build_rule(&command.rule, today)?;
    let requested = command.count.unwrap_or(config.preview_count);
    let count = config.limit(requested);
    if count < requested {
        warn!(requested, max_dates = config.max_dates, "preview count limited");
    }

    let manager = RecurrenceManager::with_config(rule, config.generation())?;
    let result = manager.generate(count);

    println!("{}", describe(manager.rule()).bold());
    display_occurrences(&result.dates, today);
    let scanned_days = manager.config().iteration_cap(manager.rule(), count);
    if let Some(hint) = continuation_hint(&result, scanned_days) {
        println!("{}", hint.dimmed());
    }

    Ok(())
}

/// What lies beyond the listed dates, if anything worth saying.
pub fn continuation_hint(result: &GeneratedDates, scanned_days: usize) -> Option<String> {
    if !result.has_more {
        return None;
    }
    match result.termination {
        Termination::CountReached => Some("More occurrences available.".to_string()),
        Termination::IterationCap => Some(format!(
            "Stopped after scanning {} days; more occurrences may exist.",
            scanned_days
        )),
        Termination::EndDateReached | Termination::CalendarExhausted => None,
    }
}
