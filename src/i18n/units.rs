//! Dates, durations and retention periods

use super::Language;
use crate::error::PolicyError;
use chrono::{DateTime, Datelike};

const GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

const HOURS_PER_DAY: f64 = 24.0;
const DAYS_PER_MONTH: f64 = 30.436875;
const DAYS_PER_YEAR: f64 = 365.2425;

/// Retention periods up to this many hours are shown in hours
pub const RETENTION_MAX_HOURS: u64 = 72;
/// ... up to this many hours in days
pub const RETENTION_MAX_DAYS: u64 = 504;
/// ... up to this many hours in weeks
pub const RETENTION_MAX_WEEKS: u64 = 1008;
/// ... up to this many hours in months, and beyond in years
pub const RETENTION_MAX_MONTHS: u64 = 13148;

/// A unit a duration can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl DurationUnit {
    fn words(&self, language: Language) -> (&'static str, &'static str) {
        match (language, self) {
            (Language::English, DurationUnit::Hours) => ("hour", "hours"),
            (Language::English, DurationUnit::Days) => ("day", "days"),
            (Language::English, DurationUnit::Weeks) => ("week", "weeks"),
            (Language::English, DurationUnit::Months) => ("month", "months"),
            (Language::English, DurationUnit::Years) => ("year", "years"),
            (Language::German, DurationUnit::Hours) => ("Stunde", "Stunden"),
            (Language::German, DurationUnit::Days) => ("Tag", "Tage"),
            (Language::German, DurationUnit::Weeks) => ("Woche", "Wochen"),
            (Language::German, DurationUnit::Months) => ("Monat", "Monate"),
            (Language::German, DurationUnit::Years) => ("Jahr", "Jahre"),
        }
    }
}

/// `n` followed by the singular or plural unit
pub fn format_duration(language: Language, n: u64, unit: DurationUnit) -> String {
    let (singular, plural) = unit.words(language);
    format!("{} {}", n, if n == 1 { singular } else { plural })
}

/// Pick the unit for a maximum retention period given in hours and round up to it
pub fn retention_in_units(hours: u64) -> (u64, DurationUnit) {
    let days = hours as f64 / HOURS_PER_DAY;
    if hours <= RETENTION_MAX_HOURS {
        (hours, DurationUnit::Hours)
    } else if hours <= RETENTION_MAX_DAYS {
        (days.ceil() as u64, DurationUnit::Days)
    } else if hours <= RETENTION_MAX_WEEKS {
        ((days / 7.0).ceil() as u64, DurationUnit::Weeks)
    } else if hours <= RETENTION_MAX_MONTHS {
        ((days / DAYS_PER_MONTH).ceil() as u64, DurationUnit::Months)
    } else {
        ((days / DAYS_PER_YEAR).ceil() as u64, DurationUnit::Years)
    }
}

/// Long calendar date of a Unix timestamp, in UTC
pub fn format_date(language: Language, unix_seconds: i64) -> Result<String, PolicyError> {
    let date = DateTime::from_timestamp(unix_seconds, 0).ok_or_else(|| {
        PolicyError::FormatArguments(format!("timestamp {} is out of range", unix_seconds))
    })?;

    Ok(match language {
        Language::English => date.format("%B %-d, %Y").to_string(),
        Language::German => format!(
            "{}. {} {}",
            date.day(),
            GERMAN_MONTHS[date.month0() as usize],
            date.year()
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, DurationUnit::Hours)]
    #[case(1, 1, DurationUnit::Hours)]
    #[case(72, 72, DurationUnit::Hours)]
    #[case(73, 4, DurationUnit::Days)]
    #[case(504, 21, DurationUnit::Days)]
    #[case(505, 4, DurationUnit::Weeks)]
    #[case(1008, 6, DurationUnit::Weeks)]
    #[case(1009, 2, DurationUnit::Months)]
    #[case(13148, 18, DurationUnit::Months)]
    #[case(13149, 2, DurationUnit::Years)]
    #[case(87600, 10, DurationUnit::Years)]
    fn test_retention_thresholds(
        #[case] hours: u64,
        #[case] n: u64,
        #[case] unit: DurationUnit,
    ) {
        assert_eq!(retention_in_units(hours), (n, unit));
    }

    #[rstest]
    #[case(Language::English, 1, DurationUnit::Hours, "1 hour")]
    #[case(Language::English, 2, DurationUnit::Weeks, "2 weeks")]
    #[case(Language::English, 0, DurationUnit::Days, "0 days")]
    #[case(Language::German, 1, DurationUnit::Days, "1 Tag")]
    #[case(Language::German, 18, DurationUnit::Months, "18 Monate")]
    #[case(Language::German, 1, DurationUnit::Years, "1 Jahr")]
    fn test_singular_and_plural(
        #[case] language: Language,
        #[case] n: u64,
        #[case] unit: DurationUnit,
        #[case] expected: &str,
    ) {
        assert_eq!(format_duration(language, n, unit), expected);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date(Language::English, 1393372800).unwrap(),
            "February 26, 2014"
        );
        assert_eq!(
            format_date(Language::German, 1393372800).unwrap(),
            "26. Februar 2014"
        );
        assert_eq!(
            format_date(Language::German, 1425168000).unwrap(),
            "1. März 2015"
        );
    }

    #[test]
    fn test_format_date_out_of_range() {
        assert!(format_date(Language::English, i64::MAX).is_err());
    }
}
