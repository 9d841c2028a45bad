//! Month grids with occurrences marked, weeks starting on Sunday.

use anyhow::{anyhow, Result};
use cadence_core::error::CoreError;
use cadence_core::models::day_weekday_index;
use chrono::{Datelike, Days, Months, NaiveDate};
use owo_colors::{OwoColorize, Style};

/// Display width of one grid row: seven two-character cells and six gaps.
const GRID_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub highlighted: bool,
    pub is_start: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone)]
pub struct MonthGrid {
    month_start: NaiveDate,
    weeks: Vec<Vec<DayCell>>,
}

/// First day of the month containing `day`.
pub fn month_start(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// Last day of the month starting at `month_start`.
pub fn month_end(month_start: NaiveDate) -> Result<NaiveDate> {
    month_start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| out_of_range(month_start))
}

fn out_of_range(month_start: NaiveDate) -> anyhow::Error {
    anyhow!(CoreError::InvalidInput(format!(
        "Month {} is out of range",
        month_start.format("%Y-%m")
    )))
}

impl MonthGrid {
    /// Lays out the month starting at `month_start`, padded to whole weeks
    /// with days from the neighbouring months.
    pub fn build(
        month_start: NaiveDate,
        highlighted: &[NaiveDate],
        rule_start: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self> {
        let last = month_end(month_start)?;
        let lead = u64::from(day_weekday_index(month_start));
        let first = month_start
            .checked_sub_days(Days::new(lead))
            .ok_or_else(|| out_of_range(month_start))?;
        let week_count = (lead as usize + last.day() as usize).div_ceil(7);

        let cells: Vec<DayCell> = first
            .iter_days()
            .take(week_count * 7)
            .map(|date| DayCell {
                date,
                in_month: date.year() == month_start.year() && date.month() == month_start.month(),
                highlighted: highlighted.contains(&date),
                is_start: date == rule_start,
                is_today: date == today,
            })
            .collect();
        let weeks = cells.chunks(7).map(<[DayCell]>::to_vec).collect();

        Ok(Self { month_start, weeks })
    }

    pub fn weeks(&self) -> &[Vec<DayCell>] {
        &self.weeks
    }

    /// Occurrences that fall inside the month itself.
    pub fn highlighted_count(&self) -> usize {
        self.weeks
            .iter()
            .flatten()
            .filter(|cell| cell.in_month && cell.highlighted)
            .count()
    }

    pub fn render(&self) -> String {
        let title = self.month_start.format("%B %Y").to_string();
        let mut lines = vec![
            format!("{:^width$}", title, width = GRID_WIDTH)
                .style(Style::new().bold())
                .to_string(),
            "Su Mo Tu We Th Fr Sa".dimmed().to_string(),
        ];

        for week in &self.weeks {
            let cells: Vec<String> = week.iter().map(render_cell).collect();
            lines.push(cells.join(" "));
        }

        lines.join("\n")
    }
}

fn render_cell(cell: &DayCell) -> String {
    if !cell.in_month {
        return "  ".to_string();
    }

    let text = format!("{:>2}", cell.date.day());
    let mut style = Style::new();
    if cell.highlighted {
        style = style.green().bold();
    }
    if cell.is_start {
        style = style.underline();
    }
    if cell.is_today {
        style = style.reversed();
    }
    text.style(style).to_string()
}

pub fn legend() -> String {
    format!(
        "{} occurrence  {} start date  {} today",
        "■".green().bold(),
        "_".underline(),
        " ".reversed()
    )
}
