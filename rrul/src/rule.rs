#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A parsed recurrence rule: frequency plus optional constraints and bounds.
///
/// `by_month_day` and the `by_weekday`+`by_set_pos` pair are mutually
/// exclusive ways of constraining a monthly rule; when a monthly rule has
/// neither, occurrences fall on the anchor's day-of-month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub freq: Frequency,
    /// Weekday constraint, in the order given. Empty means unconstrained.
    pub by_weekday: Vec<Weekday>,
    /// Fixed day-of-month (1..=31) for monthly rules.
    pub by_month_day: Option<i8>,
    /// Nth occurrence of `by_weekday` within a month; negative counts
    /// from the month's end (-1 is the last occurrence).
    pub by_set_pos: Option<i8>,
    /// Step multiplier applied after the first occurrence. Defaults to 1.
    pub interval: u32,
    /// Maximum number of occurrences. `Some(0)` means none at all.
    pub count: Option<u32>,
    /// Inclusive upper bound; occurrence generation compares its date part.
    pub until: Option<jiff::civil::DateTime>,
}

impl Rule {
    /// Create a rule with the given frequency and no constraints.
    pub fn new(freq: Frequency) -> Self {
        Self {
            freq,
            by_weekday: Vec::new(),
            by_month_day: None,
            by_set_pos: None,
            interval: 1,
            count: None,
            until: None,
        }
    }

    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_weekdays(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.by_weekday = days.into_iter().collect();
        self
    }

    pub fn with_month_day(mut self, day: i8) -> Self {
        self.by_month_day = Some(day);
        self
    }

    pub fn with_set_pos(mut self, pos: i8) -> Self {
        self.by_set_pos = Some(pos);
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_until(mut self, until: jiff::civil::DateTime) -> Self {
        self.until = Some(until);
        self
    }

    /// The calendar-date part of the `until` bound, if any.
    pub fn until_date(&self) -> Option<jiff::civil::Date> {
        self.until.map(|dt| dt.date())
    }
}

/// Frequency class of a rule. Selects the stepping algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Canonical grammar token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }
}

pub fn parse_frequency(s: &str) -> Option<Frequency> {
    match s.to_ascii_uppercase().as_str() {
        "DAILY" => Some(Frequency::Daily),
        "WEEKLY" => Some(Frequency::Weekly),
        "MONTHLY" => Some(Frequency::Monthly),
        "YEARLY" => Some(Frequency::Yearly),
        _ => None,
    }
}

#[cfg(feature = "serde")]
impl Serialize for Frequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_frequency(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown frequency: {s}")))
    }
}

/// Calendar weekday with custom serde (two-letter code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Two-letter grammar code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Sunday => "SU",
            Self::Monday => "MO",
            Self::Tuesday => "TU",
            Self::Wednesday => "WE",
            Self::Thursday => "TH",
            Self::Friday => "FR",
            Self::Saturday => "SA",
        }
    }

    /// Sunday-based ordinal used for week arithmetic: Sunday=0 .. Saturday=6.
    pub fn number(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    pub fn to_jiff(self) -> jiff::civil::Weekday {
        match self {
            Self::Sunday => jiff::civil::Weekday::Sunday,
            Self::Monday => jiff::civil::Weekday::Monday,
            Self::Tuesday => jiff::civil::Weekday::Tuesday,
            Self::Wednesday => jiff::civil::Weekday::Wednesday,
            Self::Thursday => jiff::civil::Weekday::Thursday,
            Self::Friday => jiff::civil::Weekday::Friday,
            Self::Saturday => jiff::civil::Weekday::Saturday,
        }
    }

}

pub fn parse_weekday_code(s: &str) -> Option<Weekday> {
    match s.to_ascii_uppercase().as_str() {
        "SU" => Some(Weekday::Sunday),
        "MO" => Some(Weekday::Monday),
        "TU" => Some(Weekday::Tuesday),
        "WE" => Some(Weekday::Wednesday),
        "TH" => Some(Weekday::Thursday),
        "FR" => Some(Weekday::Friday),
        "SA" => Some(Weekday::Saturday),
        _ => None,
    }
}

#[cfg(feature = "serde")]
impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_weekday_code(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown weekday code: {s}")))
    }
}
