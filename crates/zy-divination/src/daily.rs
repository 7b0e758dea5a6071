//! Daily hexagram selection.
//!
//! A deterministic day-of-year index into the catalog, independent of any
//! casting. No caching happens here; day-keyed memoization belongs to the
//! caller that wants it.

use chrono::{Datelike, NaiveDate};

use zy_core::{Catalog, CoreResult, Hexagram};

use crate::interpret;

/// Select the hexagram for a calendar date.
///
/// Day 1 of the year maps to hexagram 1 and the sequence wraps after 64
/// days, so every date resolves.
pub fn daily_hexagram(catalog: &Catalog, date: NaiveDate) -> CoreResult<&Hexagram> {
    catalog.hexagram_by_number(date.ordinal0() % 64 + 1)
}

/// The advice list for a daily reading.
///
/// A daily hexagram is not cast, so it has no changing lines; the list
/// follows the same fixed shape as a cast reading's advice.
pub fn daily_advice(hexagram: &Hexagram) -> Vec<String> {
    interpret::advice_list(hexagram, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn january_first_is_hexagram_one() {
        let catalog = Catalog::standard();
        let hex = daily_hexagram(catalog, date(2024, 1, 1)).unwrap();
        assert_eq!(hex.number, 1);
    }

    #[test]
    fn sequence_wraps_after_sixty_four_days() {
        let catalog = Catalog::standard();
        // Day 64 of a non-leap year is March 5; day 65 wraps back to 1.
        assert_eq!(daily_hexagram(catalog, date(2023, 3, 5)).unwrap().number, 64);
        assert_eq!(daily_hexagram(catalog, date(2023, 3, 6)).unwrap().number, 1);
    }

    #[test]
    fn leap_day_shifts_the_cycle() {
        let catalog = Catalog::standard();
        // March 1 is day 60 in a non-leap year and day 61 in a leap year.
        assert_eq!(daily_hexagram(catalog, date(2023, 3, 1)).unwrap().number, 60);
        assert_eq!(daily_hexagram(catalog, date(2024, 3, 1)).unwrap().number, 61);
    }

    #[test]
    fn selection_is_deterministic() {
        let catalog = Catalog::standard();
        let a = daily_hexagram(catalog, date(2025, 8, 5)).unwrap();
        let b = daily_hexagram(catalog, date(2025, 8, 5)).unwrap();
        assert_eq!(a.number, b.number);
    }

    #[test]
    fn every_date_resolves() {
        let catalog = Catalog::standard();
        let mut day = date(2024, 1, 1);
        let end = date(2025, 1, 1);
        while day < end {
            let hex = daily_hexagram(catalog, day).unwrap();
            assert!((1..=64).contains(&hex.number));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn daily_advice_uses_the_stable_closing() {
        let catalog = Catalog::standard();
        let hex = daily_hexagram(catalog, date(2024, 1, 1)).unwrap();
        let advice = daily_advice(hex);
        assert_eq!(advice.len(), 6);
        assert!(advice[5].contains("no changing lines"));
    }
}
