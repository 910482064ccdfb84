// Canonical serialization: parts are emitted in a fixed order with
// uppercase keys and values, so every rule has exactly one textual form.

use std::fmt;

use crate::rule::Rule;

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FREQ={}", self.freq.as_str())?;
        if self.interval > 1 {
            write!(f, ";INTERVAL={}", self.interval)?;
        }
        if !self.by_weekday.is_empty() {
            f.write_str(";BYDAY=")?;
            for (i, day) in self.by_weekday.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                f.write_str(day.code())?;
            }
        }
        if let Some(day) = self.by_month_day {
            write!(f, ";BYMONTHDAY={day}")?;
        }
        if let Some(pos) = self.by_set_pos {
            write!(f, ";BYSETPOS={pos}")?;
        }
        // COUNT=0 is a valid bound (no occurrences) and must survive a
        // round trip, so it is not treated as an omitted count.
        if let Some(count) = self.count {
            write!(f, ";COUNT={count}")?;
        }
        if let Some(until) = self.until {
            write!(
                f,
                ";UNTIL={:04}{:02}{:02}T{:02}{:02}{:02}Z",
                until.year(),
                until.month(),
                until.day(),
                until.hour(),
                until.minute(),
                until.second()
            )?;
        }
        Ok(())
    }
}
