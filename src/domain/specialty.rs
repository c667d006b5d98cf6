//! Specialty value type
//!
//! A specialty is a named medical service plus the weekdays on which it is
//! offered. Day names are normalized to lowercase and are not checked against
//! any calendar vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A medical specialty and the weekdays it is offered
///
/// Two specialties are equal when they have the same type name and the same
/// set of days; day order and repeated days do not matter.
///
/// # Examples
///
/// ```
/// use clinic::domain::Specialty;
///
/// let cardiology = Specialty::new("Cardiology", ["Monday", "friday"]);
/// assert!(cardiology.offers_on("MONDAY"));
/// assert!(!cardiology.offers_on("tuesday"));
/// assert_eq!(cardiology, Specialty::new("Cardiology", ["friday", "monday"]));
/// ```
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(from = "SpecialtyRecord")]
pub struct Specialty {
    kind: String,
    days: Vec<String>,
}

impl Specialty {
    /// Creates a specialty offered on the given days
    pub fn new<I, S>(kind: impl Into<String>, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for day in days {
            let day = day.as_ref().to_lowercase();
            if !normalized.contains(&day) {
                normalized.push(day);
            }
        }

        Self {
            kind: kind.into(),
            days: normalized,
        }
    }

    /// The specialty's type name, e.g. "Cardiology"
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Lowercase day names in first-seen order
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Case-insensitive check that the specialty is offered on `day`
    pub fn offers_on(&self, day: &str) -> bool {
        let day = day.to_lowercase();
        self.days.iter().any(|d| *d == day)
    }
}

/// Wire shape of a specialty; deserialization goes through [`Specialty::new`]
#[derive(Deserialize)]
struct SpecialtyRecord {
    kind: String,
    days: Vec<String>,
}

impl From<SpecialtyRecord> for Specialty {
    fn from(record: SpecialtyRecord) -> Self {
        Specialty::new(record.kind, record.days)
    }
}

impl PartialEq for Specialty {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.days.len() == other.days.len()
            && self.days.iter().all(|d| other.days.contains(d))
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (days: {})", self.kind, self.days.join(", "))
    }
}
