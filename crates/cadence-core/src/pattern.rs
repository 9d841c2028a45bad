//! Pattern matching: decides whether a single calendar day is an occurrence of
//! a rule. Nothing here iterates or keeps state.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{Frequency, MonthlyPattern, RecurrenceRule, WeekOfMonth};

/// Returns whether `day` is an occurrence of `rule`.
///
/// Total over every calendar day, including days before the start date.
/// An interval of 0 is treated as 1.
pub fn matches(day: NaiveDate, rule: &RecurrenceRule) -> bool {
    let interval = i64::from(rule.interval.max(1));
    let days_since_start = day.signed_duration_since(rule.start_date).num_days();

    match rule.frequency {
        Frequency::Daily => days_since_start.rem_euclid(interval) == 0,
        Frequency::Weekly => {
            let weeks_since_start = days_since_start.div_euclid(7);
            if weeks_since_start.rem_euclid(interval) != 0 {
                return false;
            }
            match &rule.days_of_week {
                None => true,
                Some(days) => days.contains(&day.weekday()),
            }
        }
        Frequency::Monthly => matches_monthly(day, rule, interval),
        Frequency::Yearly => {
            let years_since_start = i64::from(day.year() - rule.start_date.year());
            years_since_start.rem_euclid(interval) == 0
                && day.month() == rule.start_date.month()
                && day.day() == rule.start_date.day()
        }
    }
}

fn matches_monthly(day: NaiveDate, rule: &RecurrenceRule, interval: i64) -> bool {
    let start = rule.start_date;
    let months_since_start = i64::from(day.year() - start.year()) * 12
        + (i64::from(day.month()) - i64::from(start.month()));

    if months_since_start.rem_euclid(interval) != 0 {
        return false;
    }

    match rule.monthly_pattern {
        None => day.day() == start.day(),
        Some(MonthlyPattern::ByDate { day_of_month }) => {
            day.day() == day_of_month.unwrap_or_else(|| start.day())
        }
        Some(MonthlyPattern::ByWeekdayPosition { weekday, position }) => {
            let target_weekday = weekday.unwrap_or_else(|| start.weekday());
            let target_position = position.unwrap_or_else(|| week_of_month(start));
            day.weekday() == target_weekday && week_of_month(day) == target_position
        }
    }
}

/// Position of `day`'s weekday inside its month.
///
/// The last occurrence of a weekday is always `Last`, even when it is also the
/// fourth; otherwise the position is `ceil(day / 7)` capped at `Fourth`.
pub fn week_of_month(day: NaiveDate) -> WeekOfMonth {
    if is_last_weekday_of_month(day) {
        return WeekOfMonth::Last;
    }

    match (day.day() + 6) / 7 {
        1 => WeekOfMonth::First,
        2 => WeekOfMonth::Second,
        3 => WeekOfMonth::Third,
        _ => WeekOfMonth::Fourth,
    }
}

/// True when a week later falls in another month (or off the calendar).
fn is_last_weekday_of_month(day: NaiveDate) -> bool {
    match day.checked_add_days(Days::new(7)) {
        Some(next_week) => next_week.month() != day.month(),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthlyPattern;
    use chrono::Weekday;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod daily_tests {
        use super::*;

        #[rstest]
        #[case(date(2024, 1, 1), true)]
        #[case(date(2024, 1, 2), false)]
        #[case(date(2024, 1, 4), true)]
        #[case(date(2024, 1, 7), true)]
        #[case(date(2023, 12, 29), true)]
        #[case(date(2023, 12, 31), false)]
        fn test_every_three_days(#[case] day: NaiveDate, #[case] expected: bool) {
            let rule = RecurrenceRule::daily(date(2024, 1, 1)).with_interval(3);
            assert_eq!(matches(day, &rule), expected);
        }

        #[test]
        fn test_zero_interval_is_treated_as_one() {
            let rule = RecurrenceRule::daily(date(2024, 1, 1)).with_interval(0);
            assert!(matches(date(2024, 1, 2), &rule));
        }
    }

    mod weekly_tests {
        use super::*;

        #[test]
        fn test_absent_days_accept_any_weekday_in_aligned_week() {
            let rule = RecurrenceRule::weekly(date(2024, 1, 1)).with_interval(2);
            for offset in 0..7 {
                assert!(matches(date(2024, 1, 1 + offset), &rule));
            }
            for offset in 0..7 {
                assert!(!matches(date(2024, 1, 8 + offset), &rule));
            }
            assert!(matches(date(2024, 1, 15), &rule));
        }

        #[test]
        fn test_day_set_filters_weekdays() {
            let rule = RecurrenceRule::weekly(date(2024, 1, 1))
                .with_days_of_week(vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]);
            assert!(matches(date(2024, 1, 1), &rule));
            assert!(!matches(date(2024, 1, 2), &rule));
            assert!(matches(date(2024, 1, 3), &rule));
            assert!(matches(date(2024, 1, 5), &rule));
            assert!(!matches(date(2024, 1, 6), &rule));
        }

        #[test]
        fn test_explicitly_empty_days_never_match() {
            let rule = RecurrenceRule::weekly(date(2024, 1, 1)).with_days_of_week(vec![]);
            for offset in 0..28 {
                assert!(!matches(date(2024, 1, 1 + offset), &rule));
            }
        }

        #[test]
        fn test_weeks_count_from_start_not_calendar() {
            // Start on a Wednesday: the aligned "week" runs Wednesday to Tuesday.
            let rule = RecurrenceRule::weekly(date(2024, 1, 3))
                .with_interval(2)
                .with_days_of_week(vec![Weekday::Mon]);
            assert!(matches(date(2024, 1, 8), &rule));
            assert!(!matches(date(2024, 1, 15), &rule));
            assert!(matches(date(2024, 1, 22), &rule));
        }
    }

    mod monthly_tests {
        use super::*;

        #[test]
        fn test_default_pattern_uses_start_day() {
            let rule = RecurrenceRule::monthly(date(2024, 1, 15));
            assert!(matches(date(2024, 2, 15), &rule));
            assert!(!matches(date(2024, 2, 14), &rule));
        }

        #[test]
        fn test_by_date_overrides_start_day() {
            let rule = RecurrenceRule::monthly(date(2024, 1, 1))
                .with_monthly_pattern(MonthlyPattern::by_date(20));
            assert!(matches(date(2024, 1, 20), &rule));
            assert!(!matches(date(2024, 2, 1), &rule));
        }

        #[test]
        fn test_by_date_without_day_falls_back_to_start() {
            let rule = RecurrenceRule::monthly(date(2024, 1, 9))
                .with_monthly_pattern(MonthlyPattern::ByDate { day_of_month: None });
            assert!(matches(date(2024, 3, 9), &rule));
        }

        #[test]
        fn test_interval_gate() {
            let rule = RecurrenceRule::monthly(date(2024, 1, 15)).with_interval(3);
            assert!(!matches(date(2024, 2, 15), &rule));
            assert!(matches(date(2024, 4, 15), &rule));
            assert!(matches(date(2025, 1, 15), &rule));
        }

        #[test]
        fn test_day_31_skips_short_months() {
            let rule = RecurrenceRule::monthly(date(2024, 1, 31));
            for day in 1..=29 {
                assert!(!matches(date(2024, 2, day), &rule));
            }
        }

        #[test]
        fn test_by_weekday_position_second_tuesday() {
            let rule = RecurrenceRule::monthly(date(2024, 1, 1)).with_monthly_pattern(
                MonthlyPattern::by_weekday_position(Weekday::Tue, WeekOfMonth::Second),
            );
            assert!(matches(date(2024, 1, 9), &rule));
            assert!(matches(date(2024, 2, 13), &rule));
            assert!(!matches(date(2024, 2, 6), &rule));
        }

        #[test]
        fn test_by_weekday_position_defaults_from_start() {
            // 2024-01-10 is the second Wednesday of January.
            let rule = RecurrenceRule::monthly(date(2024, 1, 10)).with_monthly_pattern(
                MonthlyPattern::ByWeekdayPosition {
                    weekday: None,
                    position: None,
                },
            );
            assert!(matches(date(2024, 2, 14), &rule));
            assert!(!matches(date(2024, 2, 7), &rule));
        }

        #[test]
        fn test_last_friday() {
            let rule = RecurrenceRule::monthly(date(2024, 1, 1)).with_monthly_pattern(
                MonthlyPattern::by_weekday_position(Weekday::Fri, WeekOfMonth::Last),
            );
            assert!(matches(date(2024, 1, 26), &rule));
            assert!(matches(date(2024, 2, 23), &rule));
            assert!(matches(date(2024, 3, 29), &rule));
        }

        #[test]
        fn test_fourth_unreachable_when_also_last() {
            // February 2024 has exactly four Fridays; the fourth is the last.
            let rule = RecurrenceRule::monthly(date(2024, 1, 1)).with_monthly_pattern(
                MonthlyPattern::by_weekday_position(Weekday::Fri, WeekOfMonth::Fourth),
            );
            assert!(!matches(date(2024, 2, 23), &rule));
            // March 2024 has five Fridays; the fourth is the 22nd.
            assert!(matches(date(2024, 3, 22), &rule));
        }

        #[test]
        fn test_ignored_for_other_frequencies() {
            let rule = RecurrenceRule::daily(date(2024, 1, 1))
                .with_monthly_pattern(MonthlyPattern::by_date(20));
            assert!(matches(date(2024, 1, 2), &rule));
        }
    }

    mod yearly_tests {
        use super::*;

        #[test]
        fn test_anniversary_with_interval() {
            let rule = RecurrenceRule::yearly(date(2024, 3, 10)).with_interval(2);
            assert!(matches(date(2026, 3, 10), &rule));
            assert!(!matches(date(2025, 3, 10), &rule));
            assert!(!matches(date(2026, 3, 11), &rule));
        }

        #[test]
        fn test_leap_day_only_in_leap_years() {
            let rule = RecurrenceRule::yearly(date(2024, 2, 29));
            assert!(!matches(date(2025, 2, 28), &rule));
            assert!(!matches(date(2025, 3, 1), &rule));
            assert!(matches(date(2028, 2, 29), &rule));
        }
    }

    mod week_of_month_tests {
        use super::*;

        #[rstest]
        #[case(date(2024, 1, 1), WeekOfMonth::First)]
        #[case(date(2024, 1, 8), WeekOfMonth::Second)]
        #[case(date(2024, 1, 15), WeekOfMonth::Third)]
        #[case(date(2024, 1, 22), WeekOfMonth::Fourth)]
        #[case(date(2024, 1, 29), WeekOfMonth::Last)]
        #[case(date(2024, 2, 26), WeekOfMonth::Last)]
        #[case(date(2024, 2, 22), WeekOfMonth::Fourth)]
        #[case(date(2024, 2, 29), WeekOfMonth::Last)]
        fn test_positions(#[case] day: NaiveDate, #[case] expected: WeekOfMonth) {
            assert_eq!(week_of_month(day), expected);
        }

        #[test]
        fn test_end_of_calendar_is_last() {
            assert_eq!(week_of_month(NaiveDate::MAX), WeekOfMonth::Last);
        }
    }
}
