//! rrul — Compact calendar recurrence rules.
//!
//! Parse, expand, and describe RFC 5545-style RRULE strings over plain
//! calendar dates.
//!
//! # Examples
//!
//! ```
//! use jiff::civil::date;
//! use rrul::Rule;
//!
//! let rule: Rule = "FREQ=WEEKLY;BYDAY=MO,FR;COUNT=4".parse().unwrap();
//! assert_eq!(rule.describe(), "Every Monday and Friday, 4 times");
//!
//! let dates = rule.generate(date(2025, 6, 16), None, None);
//! assert_eq!(dates.len(), 4);
//! assert_eq!(dates[0], date(2025, 6, 16));
//! ```

pub mod describe;
pub mod display;
pub mod error;
pub mod expand;
pub mod parser;
pub mod rule;

pub use describe::Lang;
pub use error::RuleError;
pub use expand::{Occurrences, SAFETY_CEILING};
pub use rule::{Frequency, Rule, Weekday};

use jiff::civil::Date;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// --- Rule convenience methods ---

impl Rule {
    /// Parse an RRULE string.
    pub fn parse(input: &str) -> Result<Self, RuleError> {
        parser::parse(input)
    }

    /// Check whether an RRULE string parses.
    pub fn is_valid(input: &str) -> bool {
        parser::parse(input).is_ok()
    }

    /// Lazily iterate occurrence dates from `anchor`, honoring only the
    /// rule's own `count` and `until` bounds.
    pub fn occurrences(&self, anchor: Date) -> Occurrences<'_> {
        Occurrences::new(self, anchor)
    }

    /// Expand into concrete dates from `anchor`, capped by the tighter of
    /// `max_count` and the rule's bounds; see [`expand::generate`].
    pub fn generate(
        &self,
        anchor: Date,
        max_count: Option<usize>,
        cutoff: Option<Date>,
    ) -> Vec<Date> {
        expand::generate(self, anchor, max_count, cutoff)
    }

    /// Like [`Rule::generate`], with dates rendered as ISO 8601 strings.
    pub fn generate_iso(
        &self,
        anchor: Date,
        max_count: Option<usize>,
        cutoff: Option<Date>,
    ) -> Vec<String> {
        expand::generate(self, anchor, max_count, cutoff)
            .into_iter()
            .map(|d| d.to_string())
            .collect()
    }

    /// Check if a date falls on one of this rule's occurrences.
    pub fn contains(&self, anchor: Date, date: Date) -> bool {
        expand::contains(self, anchor, date)
    }

    /// Describe this rule in English.
    pub fn describe(&self) -> String {
        describe::describe(self)
    }

    /// Describe this rule in the given language.
    pub fn describe_in(&self, lang: Lang) -> String {
        describe::describe_in(self, lang)
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(None)?;

        map.serialize_entry("freq", &self.freq)?;
        map.serialize_entry("interval", &self.interval)?;
        if !self.by_weekday.is_empty() {
            map.serialize_entry("by_day", &self.by_weekday)?;
        }

        // Optional parts stay present for a consistent JSON shape
        map.serialize_entry("by_month_day", &self.by_month_day)?;
        map.serialize_entry("by_set_pos", &self.by_set_pos)?;
        map.serialize_entry("count", &self.count)?;
        map.serialize_entry("until", &self.until.map(|u| u.to_string()))?;

        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Deserialize from the RRULE string
        let s = String::deserialize(deserializer)?;
        Rule::parse(&s).map_err(serde::de::Error::custom)
    }
}
