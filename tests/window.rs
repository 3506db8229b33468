#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use worklens::libs::window::{DateWindow, RollingPeriod, WeekKey, WindowSpec};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_sequence_length_and_ordering() {
        let cases = [
            (day(2026, 3, 2), day(2026, 3, 8)),
            (day(2026, 1, 1), day(2026, 1, 1)),
            (day(2025, 12, 20), day(2026, 1, 10)),
            (day(2024, 2, 27), day(2024, 3, 2)), // leap year boundary
        ];
        for (start, end) in cases {
            let window = DateWindow::new(start, end);
            let days = window.days();
            assert_eq!(days.len() as i64, window.num_days());
            assert_eq!(days.first(), Some(&start));
            assert_eq!(days.last(), Some(&end));
            for pair in days.windows(2) {
                assert!(pair[0] < pair[1], "dates must be strictly increasing");
            }
        }
    }

    #[test]
    fn test_reversed_window_is_empty_not_an_error() {
        let window = DateWindow::new(day(2026, 5, 10), day(2026, 5, 1));
        assert_eq!(window.num_days(), 0);
        assert!(window.days().is_empty());
        assert!(window.weeks().is_empty());
        assert!(!window.contains(day(2026, 5, 5)));
    }

    #[test]
    fn test_rolling_period_resolution() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        let today = day(2026, 8, 30);

        let resolved = DateWindow::resolve(&WindowSpec::Rolling(RollingPeriod::Day), now);
        assert_eq!(resolved, DateWindow::new(today, today));

        let resolved = DateWindow::resolve(&WindowSpec::Rolling(RollingPeriod::Week), now);
        assert_eq!(resolved, DateWindow::new(day(2026, 8, 23), today));

        let resolved = DateWindow::resolve(&WindowSpec::Rolling(RollingPeriod::Month), now);
        assert_eq!(resolved, DateWindow::new(day(2026, 7, 30), today));

        let resolved = DateWindow::resolve(&WindowSpec::Rolling(RollingPeriod::Quarter), now);
        assert_eq!(resolved, DateWindow::new(day(2026, 5, 30), today));

        let resolved = DateWindow::resolve(&WindowSpec::Rolling(RollingPeriod::Year), now);
        assert_eq!(resolved, DateWindow::new(day(2025, 8, 30), today));
    }

    #[test]
    fn test_custom_window_used_verbatim() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        let spec = WindowSpec::Custom {
            start: day(2026, 2, 1),
            end: day(2026, 2, 28),
        };
        assert_eq!(
            DateWindow::resolve(&spec, now),
            DateWindow::new(day(2026, 2, 1), day(2026, 2, 28))
        );
    }

    #[test]
    fn test_last_days_window() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        let window = DateWindow::last_days(30, now);
        assert_eq!(window, DateWindow::new(day(2026, 8, 1), day(2026, 8, 30)));
        assert_eq!(window.num_days(), 30);
    }

    #[test]
    fn test_iso_week_year_assignment() {
        // 2024-12-30 is the Monday of the first ISO week of 2025.
        assert_eq!(
            WeekKey::of(day(2024, 12, 30)),
            WeekKey { iso_year: 2025, week: 1 }
        );
        // 2021-01-01 is a Friday and still belongs to 2020's last week.
        assert_eq!(
            WeekKey::of(day(2021, 1, 1)),
            WeekKey { iso_year: 2020, week: 53 }
        );
        assert_eq!(WeekKey::of(day(2021, 1, 1)).to_string(), "2020-W53");
    }

    #[test]
    fn test_week_sequence_spans_year_boundary() {
        let window = DateWindow::new(day(2021, 1, 1), day(2021, 1, 4));
        assert_eq!(
            window.weeks(),
            vec![
                WeekKey { iso_year: 2020, week: 53 },
                WeekKey { iso_year: 2021, week: 1 },
            ]
        );
    }

    #[test]
    fn test_single_week_window() {
        let window = DateWindow::new(day(2024, 12, 30), day(2025, 1, 5));
        assert_eq!(window.weeks(), vec![WeekKey { iso_year: 2025, week: 1 }]);
    }
}
