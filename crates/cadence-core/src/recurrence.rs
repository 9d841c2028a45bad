use chrono::{Days, NaiveDate};
use tracing::{debug, trace};

use crate::error::CoreError;
use crate::models::{Frequency, GeneratedDates, RecurrenceRule, Termination};
use crate::pattern;

/// Default upper bound on dates returned by a single generation call.
pub const DEFAULT_MAX_DATES: usize = 100;

/// Default number of days a preview shows.
pub const DEFAULT_PREVIEW_COUNT: usize = 5;

/// Tuning knobs for occurrence scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Scan budget per requested occurrence, in rule periods. See
    /// [`GenerationConfig::iteration_cap`].
    pub iteration_multiplier: usize,
    /// How far `next_occurrence_after` looks before giving up, in days.
    pub search_horizon_days: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            iteration_multiplier: 10,
            search_horizon_days: 3660,
        }
    }
}

impl GenerationConfig {
    /// Number of days a scan for `max_count` occurrences may examine:
    /// `max_count * iteration_multiplier * period`, where the period is the
    /// longest span in days one step of the rule can cover (1, 7, 31 or 366
    /// days, times the interval). Intervals above [`MAX_SCALED_INTERVAL`]
    /// count as that many steps, so the budget stays bounded.
    pub fn iteration_cap(&self, rule: &RecurrenceRule, max_count: usize) -> usize {
        max_count
            .saturating_mul(self.iteration_multiplier)
            .saturating_mul(period_days(rule))
    }

    /// Days `next_occurrence_after` may look ahead for `rule`: the configured
    /// horizon, widened to the scan budget of a single occurrence.
    pub fn search_horizon(&self, rule: &RecurrenceRule) -> u64 {
        let budget = u64::try_from(self.iteration_cap(rule, 1)).unwrap_or(u64::MAX);
        self.search_horizon_days.max(budget)
    }
}

/// Largest interval that still widens the scan budget.
pub const MAX_SCALED_INTERVAL: u32 = 100;

fn period_days(rule: &RecurrenceRule) -> usize {
    let unit: usize = match rule.frequency {
        Frequency::Daily => 1,
        Frequency::Weekly => 7,
        Frequency::Monthly => 31,
        Frequency::Yearly => 366,
    };
    let steps = rule.interval.clamp(1, MAX_SCALED_INTERVAL);
    unit.saturating_mul(steps as usize)
}

/// RecurrenceManager: a validated rule plus the scan policy applied to it.
///
/// Responsibilities:
/// 1. Reject rules the scan cannot handle (interval of 0)
/// 2. Enumerate occurrences forward from the start date under an iteration cap
/// 3. Answer windowed queries (between two days, next after a day)
#[derive(Debug, Clone)]
pub struct RecurrenceManager {
    rule: RecurrenceRule,
    config: GenerationConfig,
}

impl RecurrenceManager {
    /// Creates a manager with the default scan policy.
    ///
    /// # Errors
    /// * `CoreError::InvalidRule` if the rule fails validation
    pub fn new(rule: RecurrenceRule) -> Result<Self, CoreError> {
        Self::with_config(rule, GenerationConfig::default())
    }

    pub fn with_config(rule: RecurrenceRule, config: GenerationConfig) -> Result<Self, CoreError> {
        rule.validate()?;
        Ok(Self { rule, config })
    }

    /// Walks forward one day at a time from the start date, collecting up to
    /// `max_count` matching days.
    ///
    /// # Behavior
    /// - Stops once `max_count` days are collected
    /// - Stops when the current day passes the rule's end date
    /// - Stops after `iteration_cap` days have been examined, so unsatisfiable
    ///   rules still terminate
    /// - `has_more` is true unless the scan ended on the end date (or the end of
    ///   the calendar) with fewer than `max_count` days found, or `max_count`
    ///   is 0
    pub fn generate(&self, max_count: usize) -> GeneratedDates {
        let rule = &self.rule;
        let iteration_cap = self.config.iteration_cap(rule, max_count);

        let mut dates = Vec::with_capacity(max_count.min(DEFAULT_MAX_DATES));
        let mut current = Some(rule.start_date);
        let mut iterations = 0usize;
        let mut stopped_early = None;

        while dates.len() < max_count && iterations < iteration_cap {
            let Some(day) = current else {
                stopped_early = Some(Termination::CalendarExhausted);
                break;
            };
            iterations += 1;

            if rule.end_date.is_some_and(|end| day > end) {
                stopped_early = Some(Termination::EndDateReached);
                break;
            }

            if pattern::matches(day, rule) {
                trace!(%day, "occurrence matched");
                dates.push(day);
            }

            current = day.succ_opt();
        }

        // An empty request has nothing more to offer even though 0 >= 0.
        let has_more = max_count > 0 && (iterations >= iteration_cap || dates.len() >= max_count);
        let termination = match stopped_early {
            Some(reason) => reason,
            None if dates.len() >= max_count => Termination::CountReached,
            None => Termination::IterationCap,
        };

        debug!(
            frequency = %rule.frequency,
            found = dates.len(),
            max_count,
            iterations,
            ?termination,
            "occurrence scan finished"
        );

        GeneratedDates {
            dates,
            has_more,
            termination,
        }
    }

    /// The first `count` occurrences.
    pub fn preview(&self, count: usize) -> Vec<NaiveDate> {
        let mut dates = self.generate(count).dates;
        dates.truncate(count);
        dates
    }

    /// Every occurrence in the closed window `from..=to`, clipped to the
    /// rule's own start and end dates.
    pub fn occurrences_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        let first = from.max(self.rule.start_date);
        let last = match self.rule.end_date {
            Some(end) => to.min(end),
            None => to,
        };

        if first > last {
            return Vec::new();
        }

        first
            .iter_days()
            .take_while(|day| *day <= last)
            .filter(|day| pattern::matches(*day, &self.rule))
            .collect()
    }

    /// The first occurrence strictly after `after`.
    ///
    /// Returns `None` when the rule ends first or nothing matches within
    /// [`GenerationConfig::search_horizon`].
    pub fn next_occurrence_after(&self, after: NaiveDate) -> Option<NaiveDate> {
        let first = after.succ_opt()?.max(self.rule.start_date);
        let horizon = first
            .checked_add_days(Days::new(self.config.search_horizon(&self.rule)))
            .unwrap_or(NaiveDate::MAX);
        let last = match self.rule.end_date {
            Some(end) => horizon.min(end),
            None => horizon,
        };

        let next = first
            .iter_days()
            .take_while(|day| *day <= last)
            .find(|day| pattern::matches(*day, &self.rule));

        if next.is_none() {
            debug!(%after, %last, "no occurrence found within search horizon");
        }
        next
    }

    pub fn rule(&self) -> &RecurrenceRule {
        &self.rule
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }
}

/// Enumerates up to `max_count` occurrences of `rule` with the default policy.
///
/// # Errors
/// * `CoreError::InvalidRule` if `rule.interval` is 0
pub fn generate(rule: &RecurrenceRule, max_count: usize) -> Result<GeneratedDates, CoreError> {
    Ok(RecurrenceManager::new(rule.clone())?.generate(max_count))
}

/// The first `count` occurrences of `rule`.
pub fn preview(rule: &RecurrenceRule, count: usize) -> Result<Vec<NaiveDate>, CoreError> {
    Ok(RecurrenceManager::new(rule.clone())?.preview(count))
}
