//! Property tests for weekly schedule generation.

use chrono::{Datelike, Days};
use proptest::prelude::*;

use autobot::domain::services::ScheduleGenerator;

use crate::strategies::{weekday, window};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The same inputs always produce the same dates.
    #[test]
    fn generation_is_deterministic(window in window(), wday in weekday(), offset in 0u32..4) {
        let first = ScheduleGenerator::generate(&window, wday, offset, None);
        let second = ScheduleGenerator::generate(&window, wday, offset, None);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Every date is an eligible meeting weekday after the offset.
    #[test]
    fn dates_are_eligible_weekdays(window in window(), wday in weekday(), offset in 0u32..4) {
        let dates = ScheduleGenerator::generate(&window, wday, offset, None).unwrap();
        let anchor = window
            .class_start()
            .checked_add_days(Days::new(7 * u64::from(offset)))
            .unwrap();

        for date in &dates {
            prop_assert_eq!(date.weekday(), wday.weekday());
            prop_assert!(window.contains(*date));
            prop_assert!(!window.is_holiday(*date), "{} is a holiday", date);
            prop_assert!(*date >= anchor);
        }
    }

    /// PROPERTY: Dates increase and only holiday weeks are skipped.
    #[test]
    fn only_holiday_weeks_are_skipped(window in window(), wday in weekday()) {
        let dates = ScheduleGenerator::generate(&window, wday, 0, None).unwrap();

        for pair in dates.windows(2) {
            let gap = (pair[1] - pair[0]).num_days();
            prop_assert!(gap > 0 && gap % 7 == 0);
            let mut week = pair[0].checked_add_days(Days::new(7)).unwrap();
            while week < pair[1] {
                prop_assert!(window.is_holiday(week), "{} skipped but not a holiday", week);
                week = week.checked_add_days(Days::new(7)).unwrap();
            }
        }
    }

    /// PROPERTY: A count is either met exactly or rejected.
    #[test]
    fn count_is_exact_or_an_error(window in window(), wday in weekday(), count in 1usize..25) {
        let unbounded = ScheduleGenerator::generate(&window, wday, 0, None).unwrap();
        match ScheduleGenerator::generate(&window, wday, 0, Some(count)) {
            Ok(dates) => {
                prop_assert_eq!(dates.len(), count);
                prop_assert_eq!(&dates[..], &unbounded[..count]);
            }
            Err(_) => prop_assert!(unbounded.len() < count),
        }
    }
}
