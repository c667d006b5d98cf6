//! Weekday name tables
//!
//! Bookings are checked against the weekday *name* of the appointment
//! timestamp. The name comes from a fixed Monday-first table; the clinic picks
//! which language the table is in, and specialties must be declared with day
//! names from the same table.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ENGLISH: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

const SPANISH: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

/// Language of the weekday table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayLocale {
    /// `monday` .. `sunday`
    #[default]
    En,
    /// `lunes` .. `domingo`
    Es,
}

impl WeekdayLocale {
    /// The seven lowercase day names, Monday first
    pub fn names(&self) -> &'static [&'static str; 7] {
        match self {
            WeekdayLocale::En => &ENGLISH,
            WeekdayLocale::Es => &SPANISH,
        }
    }

    /// Weekday name of the given timestamp
    pub fn name_for(&self, timestamp: &NaiveDateTime) -> &'static str {
        let index = timestamp.weekday().num_days_from_monday() as usize;
        self.names()[index]
    }
}

impl fmt::Display for WeekdayLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekdayLocale::En => write!(f, "en"),
            WeekdayLocale::Es => write!(f, "es"),
        }
    }
}

impl FromStr for WeekdayLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(WeekdayLocale::En),
            "es" => Ok(WeekdayLocale::Es),
            other => Err(format!(
                "Invalid weekday locale '{}'. Must be one of: en, es",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test_case(8, "monday" ; "monday")]
    #[test_case(9, "tuesday" ; "tuesday")]
    #[test_case(10, "wednesday" ; "wednesday")]
    #[test_case(11, "thursday" ; "thursday")]
    #[test_case(12, "friday" ; "friday")]
    #[test_case(13, "saturday" ; "saturday")]
    #[test_case(14, "sunday" ; "sunday")]
    fn test_english_names_for_january_2024(day: u32, expected: &str) {
        assert_eq!(WeekdayLocale::En.name_for(&at(2024, 1, day)), expected);
    }

    #[test_case(8, "lunes" ; "lunes")]
    #[test_case(10, "miércoles" ; "miercoles")]
    #[test_case(13, "sábado" ; "sabado")]
    fn test_spanish_names_for_january_2024(day: u32, expected: &str) {
        assert_eq!(WeekdayLocale::Es.name_for(&at(2024, 1, day)), expected);
    }

    #[test]
    fn test_default_locale_is_english() {
        assert_eq!(WeekdayLocale::default(), WeekdayLocale::En);
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("ES".parse::<WeekdayLocale>().unwrap(), WeekdayLocale::Es);
        assert!("fr".parse::<WeekdayLocale>().is_err());
    }

    #[test]
    fn test_locale_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            locale: WeekdayLocale,
        }
        let wrapper: Wrapper = toml::from_str("locale = \"es\"").unwrap();
        assert_eq!(wrapper.locale, WeekdayLocale::Es);
    }
}
