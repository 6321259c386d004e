#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Timelike};
    use lextrack::libs::range::{custom_bounds, day_bounds, month_bounds, resolve, week_bounds, year_bounds, RangeToken};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_bounds_cover_full_day() {
        let (start, end) = day_bounds(date(2025, 3, 14));

        assert_eq!(start.date(), date(2025, 3, 14));
        assert_eq!(start.time().num_seconds_from_midnight(), 0);
        assert_eq!(end.date(), date(2025, 3, 14));
        assert_eq!(end.time().hour(), 23);
        assert_eq!(end.time().minute(), 59);
        assert_eq!(end.time().second(), 59);
    }

    #[test]
    fn test_week_runs_sunday_to_saturday() {
        // 2025-03-12 is a Wednesday
        let (start, end) = week_bounds(date(2025, 3, 12));

        assert_eq!(start.date(), date(2025, 3, 9)); // Sunday
        assert_eq!(end.date(), date(2025, 3, 15)); // Saturday
    }

    #[test]
    fn test_week_bounds_on_sunday_start_of_week() {
        let (start, end) = week_bounds(date(2025, 3, 9));

        assert_eq!(start.date(), date(2025, 3, 9));
        assert_eq!(end.date(), date(2025, 3, 15));
    }

    #[test]
    fn test_week_bounds_cross_month_boundary() {
        // 2025-03-31 is a Monday; its week starts in March and ends in April
        let (start, end) = week_bounds(date(2025, 3, 31));

        assert_eq!(start.date(), date(2025, 3, 30));
        assert_eq!(end.date(), date(2025, 4, 5));
    }

    #[test]
    fn test_month_bounds_regular_month() {
        let (start, end) = month_bounds(date(2025, 4, 17));

        assert_eq!(start.date(), date(2025, 4, 1));
        assert_eq!(end.date(), date(2025, 4, 30));
    }

    #[test]
    fn test_month_bounds_february_leap_year() {
        let (_, end) = month_bounds(date(2024, 2, 10));
        assert_eq!(end.date(), date(2024, 2, 29));

        let (_, end) = month_bounds(date(2025, 2, 10));
        assert_eq!(end.date(), date(2025, 2, 28));
    }

    #[test]
    fn test_month_bounds_december() {
        let (start, end) = month_bounds(date(2025, 12, 25));

        assert_eq!(start.date(), date(2025, 12, 1));
        assert_eq!(end.date(), date(2025, 12, 31));
    }

    #[test]
    fn test_year_bounds() {
        let (start, end) = year_bounds(date(2025, 6, 15));

        assert_eq!(start.date(), date(2025, 1, 1));
        assert_eq!(end.date(), date(2025, 12, 31));
    }

    #[test]
    fn test_custom_bounds_normalized_to_full_days() {
        let (start, end) = custom_bounds(date(2025, 1, 5), date(2025, 1, 11));

        assert_eq!(start, day_bounds(date(2025, 1, 5)).0);
        assert_eq!(end, day_bounds(date(2025, 1, 11)).1);
    }

    #[test]
    fn test_resolve_named_tokens() {
        let reference = date(2025, 3, 12);

        assert_eq!(resolve(RangeToken::Today, reference, None).unwrap(), day_bounds(reference));
        assert_eq!(resolve(RangeToken::Week, reference, None).unwrap(), week_bounds(reference));
        assert_eq!(resolve(RangeToken::Month, reference, None).unwrap(), month_bounds(reference));
        assert_eq!(resolve(RangeToken::Year, reference, None).unwrap(), year_bounds(reference));
    }

    #[test]
    fn test_resolve_custom_requires_bounds() {
        let reference = date(2025, 3, 12);

        assert!(resolve(RangeToken::Custom, reference, None).is_err());

        let bounds = resolve(RangeToken::Custom, reference, Some((date(2025, 3, 1), date(2025, 3, 7)))).unwrap();
        assert_eq!(bounds, custom_bounds(date(2025, 3, 1), date(2025, 3, 7)));
    }
}
