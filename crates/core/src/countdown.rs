//! Days-until-next-birthday calculation.
//!
//! People born on February 29 celebrate on March 1 in non-leap years.

use chrono::{Datelike, NaiveDate};

/// The date on which `birth_date` is celebrated in `year`.
///
/// February 29 maps to March 1 when `year` is not a leap year.
pub fn occurrence_in_year(birth_date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .expect("year is within chrono's supported range")
}

/// The next celebration of `birth_date` on or after `today`.
pub fn next_birthday(birth_date: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(birth_date, today.year());
    if this_year < today {
        occurrence_in_year(birth_date, today.year() + 1)
    } else {
        this_year
    }
}

/// Number of days from `today` until the next birthday. `0` means today.
pub fn days_until_next_birthday(birth_date: NaiveDate, today: NaiveDate) -> i64 {
    (next_birthday(birth_date, today) - today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn birthday_today_is_zero() {
        assert_eq!(days_until_next_birthday(date(1990, 7, 4), date(2024, 7, 4)), 0);
    }

    #[test]
    fn later_this_year() {
        assert_eq!(days_until_next_birthday(date(2000, 3, 15), date(2024, 1, 1)), 74);
    }

    #[test]
    fn end_of_leap_year() {
        assert_eq!(days_until_next_birthday(date(2000, 12, 31), date(2024, 1, 1)), 365);
    }

    #[test]
    fn already_passed_wraps_to_next_year() {
        // 2024-03-15 -> 2025-03-14, no Feb 29 in between.
        assert_eq!(days_until_next_birthday(date(1985, 3, 14), date(2024, 3, 15)), 364);
        assert_eq!(next_birthday(date(1985, 3, 14), date(2024, 3, 15)), date(2025, 3, 14));
    }

    #[test]
    fn new_years_eve_to_new_years_day() {
        assert_eq!(days_until_next_birthday(date(1970, 1, 1), date(2023, 12, 31)), 1);
    }

    #[test]
    fn leap_day_in_leap_year() {
        assert_eq!(days_until_next_birthday(date(2000, 2, 29), date(2024, 2, 1)), 28);
        assert_eq!(days_until_next_birthday(date(2000, 2, 29), date(2024, 2, 29)), 0);
    }

    #[test]
    fn leap_day_in_common_year_falls_on_march_first() {
        assert_eq!(occurrence_in_year(date(2000, 2, 29), 2023), date(2023, 3, 1));
        assert_eq!(days_until_next_birthday(date(2000, 2, 29), date(2023, 2, 28)), 1);
        assert_eq!(days_until_next_birthday(date(2000, 2, 29), date(2023, 3, 1)), 0);
    }

    #[test]
    fn leap_day_after_march_first_waits_for_next_year() {
        // 2023-03-02 -> 2024-02-29.
        assert_eq!(next_birthday(date(2000, 2, 29), date(2023, 3, 2)), date(2024, 2, 29));
        assert_eq!(days_until_next_birthday(date(2000, 2, 29), date(2023, 3, 2)), 364);
    }

    #[test]
    fn never_negative_and_under_a_year_and_a_day() {
        let births = [
            date(1999, 1, 1),
            date(2000, 2, 29),
            date(1987, 6, 30),
            date(1960, 12, 31),
        ];
        let mut today = date(2023, 1, 1);
        let end = date(2025, 1, 1);
        while today <= end {
            for birth in births {
                let days = days_until_next_birthday(birth, today);
                assert!((0..=366).contains(&days), "{birth} / {today}: {days}");
            }
            today = today.succ_opt().unwrap();
        }
    }
}
