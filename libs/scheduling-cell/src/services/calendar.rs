use chrono::{Datelike, Days, Months, NaiveDate};

use crate::models::{CalendarDay, CalendarMonth};

/// Six Monday-first weeks.
pub const GRID_DAYS: usize = 42;

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(date.day0() as u64)
}

/// The Monday on or before the first day of `reference`'s month.
pub fn grid_start(reference: NaiveDate) -> NaiveDate {
    let first = first_of_month(reference);
    first - Days::new(first.weekday().num_days_from_monday() as u64)
}

pub fn build_calendar_grid(
    reference: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Vec<CalendarDay> {
    let year = reference.year();
    let month = reference.month();

    grid_start(reference)
        .iter_days()
        .take(GRID_DAYS)
        .map(|date| CalendarDay {
            date,
            in_current_month: date.year() == year && date.month() == month,
            is_today: date == today,
            is_selected: selected == Some(date),
        })
        .collect()
}

pub fn previous_month(reference: NaiveDate) -> NaiveDate {
    let first = first_of_month(reference);
    first.checked_sub_months(Months::new(1)).unwrap_or(first)
}

pub fn next_month(reference: NaiveDate) -> NaiveDate {
    let first = first_of_month(reference);
    first.checked_add_months(Months::new(1)).unwrap_or(first)
}

pub fn build_calendar_month(
    reference: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> CalendarMonth {
    CalendarMonth {
        year: reference.year(),
        month: reference.month(),
        label: reference.format("%B %Y").to_string(),
        previous_month: previous_month(reference),
        next_month: next_month(reference),
        days: build_calendar_grid(reference, today, selected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_grid_starts_on_monday_and_has_42_days() {
        let grid = build_calendar_grid(d(2026, 10, 19), d(2026, 10, 19), None);

        assert_eq!(grid.len(), GRID_DAYS);
        assert_eq!(grid[0].date, d(2026, 9, 28));
        assert_eq!(grid[0].date.weekday(), Weekday::Mon);
        assert!(!grid[0].in_current_month);
        assert_eq!(grid[41].date, d(2026, 11, 8));
    }

    #[test]
    fn test_every_month_2000_to_2100_fits_one_grid() {
        for year in 2000..=2100 {
            for month in 1..=12 {
                let first = d(year, month, 1);
                let last = next_month(first).pred_opt().unwrap();
                let days_in_month = last.day() as usize;

                let expected = build_calendar_grid(first, first, None);

                for reference in [first, d(year, month, 15), last] {
                    let grid = build_calendar_grid(reference, first, None);

                    assert_eq!(grid.len(), GRID_DAYS, "{}", reference);
                    assert_eq!(grid[0].date.weekday(), Weekday::Mon, "{}", reference);
                    assert!(grid[0].date <= first && first - grid[0].date < chrono::Duration::days(7));
                    assert!(grid.iter().any(|day| day.date == last), "{}", reference);
                    assert_eq!(grid.iter().filter(|day| day.in_current_month).count(), days_in_month);
                    assert_eq!(grid, expected);
                }
            }
        }

        // Leap years by the century rule.
        assert_eq!(next_month(d(2000, 2, 1)).pred_opt(), Some(d(2000, 2, 29)));
        assert_eq!(next_month(d(2024, 2, 29)).pred_opt(), Some(d(2024, 2, 29)));
        assert_eq!(next_month(d(2100, 2, 1)).pred_opt(), Some(d(2100, 2, 28)));
    }

    #[test]
    fn test_grid_dates_are_consecutive() {
        let grid = build_calendar_grid(d(2026, 2, 10), d(2026, 10, 19), None);
        for pair in grid.windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }

    #[test]
    fn test_grid_when_month_starts_on_monday() {
        // June 2026 begins on a Monday.
        let grid = build_calendar_grid(d(2026, 6, 15), d(2026, 10, 19), None);
        assert_eq!(grid[0].date, d(2026, 6, 1));
        assert!(grid[0].in_current_month);
    }

    #[test]
    fn test_grid_flags() {
        let grid = build_calendar_grid(d(2026, 10, 1), d(2026, 10, 19), Some(d(2026, 10, 22)));

        let today: Vec<_> = grid.iter().filter(|day| day.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, d(2026, 10, 19));

        let selected: Vec<_> = grid.iter().filter(|day| day.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, d(2026, 10, 22));

        assert_eq!(grid.iter().filter(|day| day.in_current_month).count(), 31);
    }

    #[test]
    fn test_today_outside_grid() {
        let grid = build_calendar_grid(d(2026, 1, 1), d(2026, 10, 19), None);
        assert!(grid.iter().all(|day| !day.is_today && !day.is_selected));
    }

    #[test]
    fn test_month_navigation_crosses_years() {
        assert_eq!(previous_month(d(2026, 1, 31)), d(2025, 12, 1));
        assert_eq!(next_month(d(2026, 12, 31)), d(2027, 1, 1));
        assert_eq!(next_month(d(2026, 1, 31)), d(2026, 2, 1));
    }

    #[test]
    fn test_calendar_month_label() {
        let month = build_calendar_month(d(2026, 10, 5), d(2026, 10, 19), None);
        assert_eq!(month.label, "October 2026");
        assert_eq!(month.year, 2026);
        assert_eq!(month.month, 10);
        assert_eq!(month.previous_month, d(2026, 9, 1));
        assert_eq!(month.next_month, d(2026, 11, 1));
    }
}
