// Parser for the compact RRULE grammar: semicolon-delimited KEY=VALUE
// pairs, e.g. "FREQ=WEEKLY;BYDAY=MO,FR;COUNT=10".

use jiff::civil::{Date, DateTime, Time};

use crate::error::{RuleError, Span};
use crate::rule::{parse_frequency, parse_weekday_code, Rule, Weekday};

const KNOWN_KEYS: [&str; 7] = [
    "FREQ",
    "INTERVAL",
    "BYDAY",
    "BYMONTHDAY",
    "BYSETPOS",
    "COUNT",
    "UNTIL",
];

const WEEKDAY_CODES: [&str; 7] = ["SU", "MO", "TU", "WE", "TH", "FR", "SA"];

const FREQUENCIES: [&str; 4] = ["DAILY", "WEEKLY", "MONTHLY", "YEARLY"];

/// Parse an RRULE string into a [`Rule`].
///
/// Keys are case-insensitive and may appear in any order, each at most
/// once. `FREQ` is required. `UNTIL` accepts the compact
/// `YYYYMMDDTHHMMSSZ` timestamp (trailing `Z` optional) or a bare
/// `YYYYMMDD`, which normalizes to the end of that day.
pub fn parse(input: &str) -> Result<Rule, RuleError> {
    if input.trim().is_empty() {
        return Err(RuleError::parse(
            "empty rule string",
            Span::new(0, input.len()),
            input,
            None,
        ));
    }

    let mut parser = Parser::new(input);
    let mut offset = 0;
    for segment in input.split(';') {
        parser.segment(segment, offset)?;
        offset += segment.len() + 1;
    }
    parser.finish()
}

/// Parser state: accumulates fields while walking the input segment by
/// segment, tracking byte offsets for error spans.
struct Parser<'a> {
    input: &'a str,
    freq: Option<crate::rule::Frequency>,
    interval: Option<u32>,
    by_weekday: Option<Vec<Weekday>>,
    by_month_day: Option<i8>,
    by_set_pos: Option<i8>,
    count: Option<u32>,
    until: Option<DateTime>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            freq: None,
            interval: None,
            by_weekday: None,
            by_month_day: None,
            by_set_pos: None,
            count: None,
            until: None,
        }
    }

    fn error(&self, message: impl Into<String>, span: Span) -> RuleError {
        RuleError::parse(message, span, self.input, None)
    }

    fn error_with_suggestion(
        &self,
        message: impl Into<String>,
        span: Span,
        suggestion: Option<String>,
    ) -> RuleError {
        RuleError::parse(message, span, self.input, suggestion)
    }

    /// Consume one `KEY=VALUE` segment starting at `offset` in the input.
    fn segment(&mut self, raw: &str, offset: usize) -> Result<(), RuleError> {
        let seg = raw.trim();
        let seg_start = offset + (raw.len() - raw.trim_start().len());
        let seg_span = Span::new(seg_start, seg_start + seg.len());
        if seg.is_empty() {
            return Err(self.error("empty segment", Span::new(offset, offset + raw.len().max(1))));
        }

        let (key, value, value_start) = match seg.find('=') {
            Some(eq) => (&seg[..eq], &seg[eq + 1..], seg_start + eq + 1),
            None => {
                return Err(self.error(format!("expected KEY=VALUE, got '{seg}'"), seg_span));
            }
        };
        let key_span = Span::new(seg_start, seg_start + key.len());
        let value_span = Span::new(value_start, value_start + value.len());

        match key.to_ascii_uppercase().as_str() {
            "FREQ" => {
                if self.freq.is_some() {
                    return Err(self.error("FREQ specified more than once", key_span));
                }
                match parse_frequency(value) {
                    Some(freq) => self.freq = Some(freq),
                    None => {
                        return Err(self.error_with_suggestion(
                            format!("unknown frequency '{value}'"),
                            value_span,
                            suggest(value, &FREQUENCIES),
                        ));
                    }
                }
            }
            "INTERVAL" => {
                if self.interval.is_some() {
                    return Err(self.error("INTERVAL specified more than once", key_span));
                }
                let n: u32 = value.parse().map_err(|_| {
                    self.error(
                        format!("invalid INTERVAL '{value}': expected an integer"),
                        value_span,
                    )
                })?;
                if !(1..=999).contains(&n) {
                    return Err(self.error(format!("INTERVAL out of range (1..=999): {n}"), value_span));
                }
                self.interval = Some(n);
            }
            "BYDAY" => {
                if self.by_weekday.is_some() {
                    return Err(self.error("BYDAY specified more than once", key_span));
                }
                self.by_weekday = Some(self.weekday_list(value, value_start)?);
            }
            "BYMONTHDAY" => {
                if self.by_month_day.is_some() {
                    return Err(self.error("BYMONTHDAY specified more than once", key_span));
                }
                let n: i8 = value.parse().map_err(|_| {
                    self.error(
                        format!("invalid BYMONTHDAY '{value}': expected an integer"),
                        value_span,
                    )
                })?;
                if !(1..=31).contains(&n) {
                    return Err(self.error(format!("BYMONTHDAY out of range (1..=31): {n}"), value_span));
                }
                self.by_month_day = Some(n);
            }
            "BYSETPOS" => {
                if self.by_set_pos.is_some() {
                    return Err(self.error("BYSETPOS specified more than once", key_span));
                }
                let n: i8 = value.parse().map_err(|_| {
                    self.error(
                        format!("invalid BYSETPOS '{value}': expected an integer"),
                        value_span,
                    )
                })?;
                if n == 0 {
                    return Err(self.error("BYSETPOS must be nonzero", value_span));
                }
                if !(-53..=53).contains(&n) {
                    return Err(self.error(format!("BYSETPOS out of range (-53..=53): {n}"), value_span));
                }
                self.by_set_pos = Some(n);
            }
            "COUNT" => {
                if self.count.is_some() {
                    return Err(self.error("COUNT specified more than once", key_span));
                }
                let n: u32 = value.parse().map_err(|_| {
                    self.error(
                        format!("invalid COUNT '{value}': expected a non-negative integer"),
                        value_span,
                    )
                })?;
                self.count = Some(n);
            }
            "UNTIL" => {
                if self.until.is_some() {
                    return Err(self.error("UNTIL specified more than once", key_span));
                }
                self.until = Some(self.until_value(value, value_span)?);
            }
            _ => {
                return Err(self.error_with_suggestion(
                    format!("unknown key '{key}'"),
                    key_span,
                    suggest(key, &KNOWN_KEYS),
                ));
            }
        }
        Ok(())
    }

    /// Comma-separated weekday codes. Duplicates are dropped; first-seen
    /// order is preserved.
    fn weekday_list(&self, value: &str, value_start: usize) -> Result<Vec<Weekday>, RuleError> {
        let mut days = Vec::new();
        let mut offset = value_start;
        for piece in value.split(',') {
            let code = piece.trim();
            let code_start = offset + (piece.len() - piece.trim_start().len());
            let code_span = Span::new(code_start, code_start + code.len());
            match parse_weekday_code(code) {
                Some(day) => {
                    if !days.contains(&day) {
                        days.push(day);
                    }
                }
                None => {
                    return Err(self.error_with_suggestion(
                        format!("unknown weekday code '{code}'"),
                        code_span,
                        suggest(code, &WEEKDAY_CODES),
                    ));
                }
            }
            offset += piece.len() + 1;
        }
        Ok(days)
    }

    /// Compact UNTIL timestamp: `YYYYMMDDTHHMMSS[Z]` or bare `YYYYMMDD`.
    fn until_value(&self, value: &str, span: Span) -> Result<DateTime, RuleError> {
        let malformed =
            || self.error(format!("invalid UNTIL '{value}': expected YYYYMMDDTHHMMSSZ"), span);
        if !value.is_ascii() {
            return Err(malformed());
        }
        let (date_digits, time_digits) = match value.len() {
            8 => (value, None),
            15 | 16 => {
                let bytes = value.as_bytes();
                if bytes[8] != b'T' || (value.len() == 16 && bytes[15] != b'Z') {
                    return Err(malformed());
                }
                (&value[..8], Some(&value[9..15]))
            }
            _ => return Err(malformed()),
        };
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(date_digits) || !time_digits.map_or(true, all_digits) {
            return Err(malformed());
        }

        let year: i16 = date_digits[..4].parse().map_err(|_| malformed())?;
        let month: i8 = date_digits[4..6].parse().map_err(|_| malformed())?;
        let day: i8 = date_digits[6..8].parse().map_err(|_| malformed())?;
        let date = Date::new(year, month, day)
            .map_err(|_| self.error(format!("invalid UNTIL date '{date_digits}'"), span))?;

        let time = match time_digits {
            Some(t) => {
                let hour: i8 = t[..2].parse().map_err(|_| malformed())?;
                let minute: i8 = t[2..4].parse().map_err(|_| malformed())?;
                let second: i8 = t[4..6].parse().map_err(|_| malformed())?;
                Time::new(hour, minute, second, 0)
                    .map_err(|_| self.error(format!("invalid UNTIL time '{t}'"), span))?
            }
            // A bare date bounds the whole day.
            None => jiff::civil::time(23, 59, 59, 0),
        };
        Ok(date.to_datetime(time))
    }

    fn finish(self) -> Result<Rule, RuleError> {
        let input_span = Span::new(0, self.input.len());
        let freq = match self.freq {
            Some(f) => f,
            None => return Err(self.error("missing FREQ", input_span)),
        };
        if self.by_month_day.is_some() && self.by_set_pos.is_some() {
            return Err(self.error("BYMONTHDAY cannot be combined with BYSETPOS", input_span));
        }
        if self.by_set_pos.is_some() && self.by_weekday.is_none() {
            return Err(self.error("BYSETPOS requires BYDAY", input_span));
        }
        Ok(Rule {
            freq,
            by_weekday: self.by_weekday.unwrap_or_default(),
            by_month_day: self.by_month_day,
            by_set_pos: self.by_set_pos,
            interval: self.interval.unwrap_or(1),
            count: self.count,
            until: self.until,
        })
    }
}

/// Cheap typo help: suggest the first known token sharing a two-letter
/// prefix with the offending value.
fn suggest(value: &str, known: &[&str]) -> Option<String> {
    if !value.is_ascii() || value.len() < 2 {
        return None;
    }
    let prefix = value[..2].to_ascii_uppercase();
    known
        .iter()
        .find(|k| k.starts_with(&prefix))
        .map(|k| (*k).to_string())
}
