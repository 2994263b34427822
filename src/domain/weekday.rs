use chrono::{DateTime, Datelike, Utc};

use crate::domain::weather::timestamp;

/// Indexed by days since Sunday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Воскресенье",
    "Понедельник",
    "Вторник",
    "Среда",
    "Четверг",
    "Пятница",
    "Суббота",
];

#[must_use]
pub fn weekday_name(instant: DateTime<Utc>) -> &'static str {
    WEEKDAY_NAMES[instant.weekday().num_days_from_sunday() as usize]
}

#[must_use]
pub fn weekday_name_for_timestamp(secs: i64) -> Option<&'static str> {
    timestamp(secs).map(weekday_name)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn sunday_maps_to_first_entry() {
        let sunday = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        assert_eq!(weekday_name(sunday), WEEKDAY_NAMES[0]);
    }

    #[test]
    fn consecutive_days_walk_the_whole_table() {
        let sunday = Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap();
        for (idx, expected) in WEEKDAY_NAMES.iter().enumerate() {
            let day = sunday + Duration::days(idx as i64);
            assert_eq!(weekday_name(day), *expected);
        }
    }

    #[test]
    fn uses_utc_components_of_the_instant() {
        // 2026-10-17T23:30:00Z is still Saturday in UTC.
        let late_saturday = Utc.with_ymd_and_hms(2026, 10, 17, 23, 30, 0).unwrap();
        assert_eq!(weekday_name(late_saturday), "Суббота");
        assert_eq!(
            weekday_name_for_timestamp(late_saturday.timestamp()),
            Some("Суббота")
        );
    }
}
