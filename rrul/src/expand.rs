// Occurrence generation: expands a rule into concrete calendar dates from
// an anchor. Total and deterministic; never consults a clock, never fails.
// Rules whose constraints cannot be satisfied produce fewer (possibly
// zero) dates.

use jiff::civil::Date;

use crate::rule::{Frequency, Rule, Weekday};

/// Hard cap on generated occurrences when neither a count nor a cutoff
/// bounds the request. Guarantees termination for unbounded rules.
pub const SAFETY_CEILING: usize = 100;

/// Expand `rule` into dates on or after `anchor`, ordered strictly
/// ascending.
///
/// The number of dates is capped by the tighter of `max_count` and the
/// rule's own count, or by [`SAFETY_CEILING`] when neither is given. The
/// date range is capped by the earlier of `cutoff` and the rule's `until`
/// (both inclusive).
pub fn generate(
    rule: &Rule,
    anchor: Date,
    max_count: Option<usize>,
    cutoff: Option<Date>,
) -> Vec<Date> {
    Occurrences::bounded(rule, anchor, max_count, cutoff).collect()
}

/// True when `date` falls on one of the rule's occurrences anchored at
/// `anchor`, comparing calendar dates only. Checks the same bounded
/// window as [`generate`] with default limits.
pub fn contains(rule: &Rule, anchor: Date, date: Date) -> bool {
    if date < anchor {
        return false;
    }
    Occurrences::bounded(rule, anchor, Some(SAFETY_CEILING), Some(date)).any(|d| d == date)
}

/// Cursor state carried between engine steps.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    at: Date,
    first: bool,
}

/// Lazy iterator over a rule's occurrence dates.
pub struct Occurrences<'a> {
    rule: &'a Rule,
    anchor: Date,
    cursor: Cursor,
    emitted: usize,
    limit: Option<usize>,
    cutoff: Option<Date>,
    done: bool,
}

impl<'a> Occurrences<'a> {
    /// Stream honoring only the rule's own `count` and `until` bounds.
    ///
    /// A rule without either bound yields an endless stream; combine with
    /// `take` or use [`generate`] for the capped form.
    pub fn new(rule: &'a Rule, anchor: Date) -> Self {
        Self {
            rule,
            anchor,
            cursor: Cursor {
                at: anchor,
                first: true,
            },
            emitted: 0,
            limit: rule.count.map(|c| c as usize),
            cutoff: rule.until_date(),
            done: false,
        }
    }

    /// Stream bounded by the tighter of the rule's own bounds and the
    /// caller's. When nothing bounds the occurrence count, the safety
    /// ceiling applies.
    pub fn bounded(
        rule: &'a Rule,
        anchor: Date,
        max_count: Option<usize>,
        cutoff: Option<Date>,
    ) -> Self {
        let limit = match (max_count, rule.count) {
            (Some(max), Some(count)) => max.min(count as usize),
            (Some(max), None) => max,
            (None, Some(count)) => count as usize,
            (None, None) => SAFETY_CEILING,
        };
        let cutoff = match (cutoff, rule.until_date()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        Self {
            rule,
            anchor,
            cursor: Cursor {
                at: anchor,
                first: true,
            },
            emitted: 0,
            limit: Some(limit),
            cutoff,
            done: false,
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.done {
            return None;
        }
        loop {
            if let Some(limit) = self.limit {
                if self.emitted >= limit {
                    self.done = true;
                    return None;
                }
            }
            let (cursor, emitted) = match advance(self.rule, self.anchor, self.cursor) {
                Some(step) => step,
                None => {
                    self.done = true;
                    return None;
                }
            };
            self.cursor = cursor;
            if let Some(date) = emitted {
                if self.cutoff.map_or(false, |cutoff| date > cutoff) {
                    self.done = true;
                    return None;
                }
                self.emitted += 1;
                return Some(date);
            }
            // Candidate landed before the anchor: cursor advanced, retry.
        }
    }
}

/// One engine step: the next cursor state plus the date to emit, if the
/// candidate survives the anchor filter. `None` means the stream is
/// exhausted.
fn advance(rule: &Rule, anchor: Date, cursor: Cursor) -> Option<(Cursor, Option<Date>)> {
    let candidate = next_candidate(rule, anchor, cursor)?;
    let next = Cursor {
        at: candidate,
        first: false,
    };
    if candidate < anchor {
        Some((next, None))
    } else {
        Some((next, Some(candidate)))
    }
}

/// Dispatch to the stepping rule for the rule's frequency and constraints.
fn next_candidate(rule: &Rule, anchor: Date, cursor: Cursor) -> Option<Date> {
    // A hand-constructed rule may carry interval 0; treat it as 1 so the
    // engine stays total.
    let interval = rule.interval.max(1) as i32;
    let Cursor { at, first } = cursor;
    match rule.freq {
        Frequency::Daily => step_days(at, i64::from(interval), first),
        Frequency::Weekly => {
            if rule.by_weekday.is_empty() {
                step_days(at, 7 * i64::from(interval), first)
            } else {
                step_weekdays(at, &rule.by_weekday, interval, first)
            }
        }
        Frequency::Monthly => match (rule.by_set_pos, rule.by_weekday.first(), rule.by_month_day) {
            (Some(pos), Some(&weekday), _) => step_nth_weekday(at, weekday, pos, interval, first),
            (_, _, Some(day)) => step_month_day(at, day, interval, first),
            _ => step_month_day(at, anchor.day(), interval, first),
        },
        Frequency::Yearly => step_years(at, interval, first),
    }
}

/// Daily stepping; also weekly stepping without a weekday set, with the
/// day count pre-multiplied by 7.
fn step_days(cursor: Date, days: i64, first: bool) -> Option<Date> {
    if first {
        return Some(cursor);
    }
    add_days(cursor, days)
}

/// Yearly stepping: same month and day, clamped when the target year
/// lacks the day (Feb 29 steps to Feb 28 in a common year).
fn step_years(cursor: Date, years: i32, first: bool) -> Option<Date> {
    if first {
        return Some(cursor);
    }
    let year = i32::from(cursor.year()).checked_add(years)?;
    let year = i16::try_from(year).ok()?;
    date_with_day_clamped(year, cursor.month(), cursor.day())
}

/// Weekly stepping over a set of weekdays, on Sunday-based ordinals
/// (Sunday=0 .. Saturday=6).
///
/// First iteration: land on the earliest set weekday at or after the
/// anchor's; when every set weekday lies behind the anchor, land on the
/// earliest one in the week `interval` weeks out. Afterwards: walk the
/// remaining set weekdays of the cursor's week, then jump whole weeks so
/// only every `interval`-th week is visited. A single-weekday set already
/// sitting on its weekday advances a full `interval` weeks.
fn step_weekdays(cursor: Date, days: &[Weekday], interval: i32, first: bool) -> Option<Date> {
    let mut ordinals: Vec<i8> = days.iter().map(|d| d.number() as i8).collect();
    ordinals.sort_unstable();
    ordinals.dedup();
    let cur = cursor.weekday().to_sunday_zero_offset();

    if first {
        if let Some(&ord) = ordinals.iter().find(|&&o| o >= cur) {
            return add_days(cursor, i64::from(ord - cur));
        }
        // Every set weekday is behind the anchor within its week.
        let base = add_days(cursor, 7 * i64::from(interval))?;
        let base_ord = base.weekday().to_sunday_zero_offset();
        return add_days(base, i64::from(ordinals[0] - base_ord));
    }

    if let Some(&ord) = ordinals.iter().find(|&&o| o > cur) {
        return add_days(cursor, i64::from(ord - cur));
    }
    // Week exhausted: jump to the next selected week and wrap around to
    // its earliest set weekday.
    let weeks = if ordinals.len() == 1 && ordinals[0] == cur {
        i64::from(interval)
    } else {
        i64::from(interval) - 1
    };
    let delta = i64::from((ordinals[0] - cur).rem_euclid(7));
    add_days(cursor, weeks * 7 + delta)
}

/// Monthly stepping to a fixed day-of-month. The target day is clamped to
/// each landed-on month's length (day 31 in February becomes the 28th),
/// never rolled into the following month.
fn step_month_day(cursor: Date, day: i8, interval: i32, first: bool) -> Option<Date> {
    if first {
        if cursor.day() == day {
            return Some(cursor);
        }
        return date_with_day_clamped(cursor.year(), cursor.month(), day);
    }
    add_months_clamped(cursor, interval, day)
}

/// Monthly stepping to the nth occurrence of a weekday, counting from the
/// month's start when `nth` is positive and from its end when negative.
/// A month lacking the requested position exhausts the stream rather than
/// falling back.
fn step_nth_weekday(
    cursor: Date,
    weekday: Weekday,
    nth: i8,
    interval: i32,
    first: bool,
) -> Option<Date> {
    let (year, month) = if first {
        (cursor.year(), cursor.month())
    } else {
        add_months(cursor.year(), cursor.month(), interval)?
    };
    nth_weekday_of_month(year, month, weekday, nth)
}

fn add_days(date: Date, days: i64) -> Option<Date> {
    date.checked_add(jiff::Span::new().days(days)).ok()
}

/// The (year, month) pair `months` whole months after the given one.
fn add_months(year: i16, month: i8, months: i32) -> Option<(i16, i8)> {
    let total = i32::from(year) * 12 + i32::from(month) - 1 + months;
    let year = i16::try_from(total.div_euclid(12)).ok()?;
    let month = (total.rem_euclid(12) + 1) as i8;
    Some((year, month))
}

/// Step `months` forward from `date`, landing on `day` clamped to the
/// target month's length.
fn add_months_clamped(date: Date, months: i32, day: i8) -> Option<Date> {
    let (year, month) = add_months(date.year(), date.month(), months)?;
    date_with_day_clamped(year, month, day)
}

/// Build a date, pulling the day back to the month's last day when the
/// month is shorter.
fn date_with_day_clamped(year: i16, month: i8, day: i8) -> Option<Date> {
    let first = Date::new(year, month, 1).ok()?;
    Date::new(year, month, day.min(first.days_in_month())).ok()
}

/// The nth occurrence of a weekday within a month (1-indexed; negative
/// counts from the month's end, -1 being the last). `None` when the month
/// has no such occurrence.
fn nth_weekday_of_month(year: i16, month: i8, weekday: Weekday, nth: i8) -> Option<Date> {
    let target = weekday.to_jiff();
    if nth > 0 {
        let mut d = Date::new(year, month, 1).ok()?;
        while d.weekday() != target {
            d = d.tomorrow().ok()?;
        }
        let d = add_days(d, 7 * (i64::from(nth) - 1))?;
        (d.month() == month).then_some(d)
    } else if nth < 0 {
        let first = Date::new(year, month, 1).ok()?;
        let mut d = Date::new(year, month, first.days_in_month()).ok()?;
        while d.weekday() != target {
            d = d.yesterday().ok()?;
        }
        let d = add_days(d, 7 * (i64::from(nth) + 1))?;
        (d.month() == month).then_some(d)
    } else {
        None
    }
}
