//! Rule editing with derived previews.
//!
//! `RuleEditor` owns the rule being edited and the preview dates derived from
//! it. Every mutation replaces the rule and immediately recomputes the
//! preview, so readers never observe a preview that belongs to an older rule.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::warn;

use crate::models::{weekday_index, Frequency, MonthlyPattern, RecurrenceRule};
use crate::recurrence::{GenerationConfig, RecurrenceManager};

/// Preview length used by a freshly created editor.
pub const DEFAULT_MAX_PREVIEW_DATES: usize = 10;

#[derive(Debug, Clone)]
pub struct RuleEditor {
    rule: RecurrenceRule,
    selected_date: NaiveDate,
    preview_dates: Vec<NaiveDate>,
    max_preview_dates: usize,
    config: GenerationConfig,
}

impl RuleEditor {
    /// A daily rule starting `today`, with its preview already computed.
    pub fn new(today: NaiveDate) -> Self {
        Self::with_config(today, GenerationConfig::default())
    }

    pub fn with_config(today: NaiveDate, config: GenerationConfig) -> Self {
        let mut editor = Self {
            rule: RecurrenceRule::daily(today),
            selected_date: today,
            preview_dates: Vec::new(),
            max_preview_dates: DEFAULT_MAX_PREVIEW_DATES,
            config,
        };
        editor.regenerate();
        editor
    }

    pub fn rule(&self) -> &RecurrenceRule {
        &self.rule
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn preview_dates(&self) -> &[NaiveDate] {
        &self.preview_dates
    }

    pub fn max_preview_dates(&self) -> usize {
        self.max_preview_dates
    }

    /// Switches frequency and resets the fields that belong to it: weekly rules
    /// start on the start date's weekday, monthly rules repeat by date.
    pub fn set_frequency(&mut self, frequency: Frequency) {
        let start_weekday = self.rule.start_date.weekday();
        self.update(|rule| {
            rule.frequency = frequency;
            rule.days_of_week = match frequency {
                Frequency::Weekly => Some(vec![start_weekday]),
                _ => None,
            };
            rule.monthly_pattern = match frequency {
                Frequency::Monthly => Some(MonthlyPattern::ByDate { day_of_month: None }),
                _ => None,
            };
        });
    }

    /// Sets the interval, clamping anything below 1 up to 1.
    pub fn set_interval(&mut self, interval: i64) {
        let clamped = u32::try_from(interval.max(1)).unwrap_or(u32::MAX);
        self.update(|rule| rule.interval = clamped);
    }

    /// Stores the weekdays sorted Sunday-first with duplicates removed. An
    /// empty list is kept as an explicit "no days chosen".
    pub fn set_days_of_week(&mut self, days: &[Weekday]) {
        let mut days = days.to_vec();
        days.sort_by_key(|day| weekday_index(*day));
        days.dedup();
        self.update(|rule| rule.days_of_week = Some(days));
    }

    pub fn set_monthly_pattern(&mut self, pattern: MonthlyPattern) {
        self.update(|rule| rule.monthly_pattern = Some(pattern));
    }

    /// Moves the start date; the selected date follows it.
    pub fn set_start_date(&mut self, start_date: NaiveDate) {
        self.selected_date = start_date;
        self.update(|rule| rule.start_date = start_date);
    }

    pub fn set_end_date(&mut self, end_date: Option<NaiveDate>) {
        self.update(|rule| rule.end_date = end_date);
    }

    /// Changes the highlighted day only; the rule and preview stay as they are.
    pub fn set_selected_date(&mut self, selected_date: NaiveDate) {
        self.selected_date = selected_date;
    }

    pub fn set_max_preview_dates(&mut self, max_preview_dates: usize) {
        self.max_preview_dates = max_preview_dates;
        self.regenerate();
    }

    /// Recomputes the preview from the current rule.
    pub fn regenerate(&mut self) {
        let manager = RecurrenceManager::with_config(self.rule.clone(), self.config.clone());
        self.preview_dates = match manager {
            Ok(manager) => manager.preview(self.max_preview_dates),
            Err(e) => {
                warn!(error = %e, "rule rejected, clearing preview");
                Vec::new()
            }
        };
    }

    /// Back to a daily rule starting `today`.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::with_config(today, self.config.clone());
    }

    fn update(&mut self, mutate: impl FnOnce(&mut RecurrenceRule)) {
        mutate(&mut self.rule);
        self.regenerate();
    }
}
