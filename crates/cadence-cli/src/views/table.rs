use cadence_core::format::weekday_name;
use chrono::{Datelike, NaiveDate};
use chrono_humanize::Humanize;
use comfy_table::{Attribute, Cell, Color, Row, Table};

/// Distance from `today` in words ("today", "in 3 days", "2 weeks ago").
pub fn relative_day(day: NaiveDate, today: NaiveDate) -> String {
    let delta = day.signed_duration_since(today);
    if delta.num_days() == 0 {
        "today".to_string()
    } else {
        delta.humanize()
    }
}

pub fn occurrence_table(dates: &[NaiveDate], today: NaiveDate) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Date", "Weekday", "Relative"]);

    for (index, day) in dates.iter().enumerate() {
        let mut row = Row::new();
        row.add_cell(Cell::new(index + 1));

        let date_cell = Cell::new(day.format("%Y-%m-%d"));
        let date_cell = if *day == today {
            date_cell.fg(Color::Yellow).add_attribute(Attribute::Bold)
        } else if *day < today {
            date_cell.fg(Color::DarkGrey)
        } else {
            date_cell
        };
        row.add_cell(date_cell);

        row.add_cell(Cell::new(weekday_name(day.weekday())));
        row.add_cell(Cell::new(relative_day(*day, today)));
        table.add_row(row);
    }

    table
}

pub fn display_occurrences(dates: &[NaiveDate], today: NaiveDate) {
    if dates.is_empty() {
        println!("No occurrences found.");
        return;
    }

    println!("{}", occurrence_table(dates, today));
}
