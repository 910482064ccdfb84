// Human-readable descriptions: renders a rule as a short phrase like
// "Every Monday and Friday" or "Cada 2 meses los primer viernes".

use crate::rule::{Frequency, Rule, Weekday};

/// Output language for rule descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    /// Looks up a language by its two-letter code, ignoring case.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            _ => None,
        }
    }
}

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Describe a rule in English.
pub fn describe(rule: &Rule) -> String {
    describe_in(rule, Lang::En)
}

/// Describe a rule in the given language.
///
/// A positive count appends ", N times"; otherwise an `until` bound
/// appends " until <month>, <year>".
pub fn describe_in(rule: &Rule, lang: Lang) -> String {
    let mut text = match rule.freq {
        Frequency::Daily => describe_simple(rule.interval, lang, ("Daily", "Diariamente"), ("days", "días")),
        Frequency::Weekly => describe_weekly(rule, lang),
        Frequency::Monthly => describe_monthly(rule, lang),
        Frequency::Yearly => describe_simple(rule.interval, lang, ("Yearly", "Anualmente"), ("years", "años")),
    };

    match (rule.count, rule.until) {
        (Some(count), _) if count > 0 => {
            let times = match lang {
                Lang::En => "times",
                Lang::Es => "veces",
            };
            text.push_str(&format!(", {count} {times}"));
        }
        (_, Some(until)) => {
            let months = match lang {
                Lang::En => &MONTHS_EN,
                Lang::Es => &MONTHS_ES,
            };
            let month = months[usize::from(until.month() as u8) - 1];
            let (year, word) = match lang {
                Lang::En => (until.year(), "until"),
                Lang::Es => (until.year(), "hasta"),
            };
            text.push_str(&format!(" {word} {month}, {year}"));
        }
        _ => {}
    }
    text
}

/// Frequencies with no extra structure: a plain word for interval 1, an
/// "Every N <unit>" phrase otherwise.
fn describe_simple(
    interval: u32,
    lang: Lang,
    plain: (&str, &str),
    unit: (&str, &str),
) -> String {
    if interval <= 1 {
        match lang {
            Lang::En => plain.0.to_string(),
            Lang::Es => plain.1.to_string(),
        }
    } else {
        match lang {
            Lang::En => format!("Every {interval} {}", unit.0),
            Lang::Es => format!("Cada {interval} {}", unit.1),
        }
    }
}

fn describe_weekly(rule: &Rule, lang: Lang) -> String {
    let n = rule.interval;
    let days = &rule.by_weekday;
    if days.is_empty() {
        return describe_simple(n, lang, ("Weekly", "Semanalmente"), ("weeks", "semanas"));
    }
    let subject = if is_weekend_set(days) {
        match lang {
            Lang::En => "weekend".to_string(),
            Lang::Es => "fin de semana".to_string(),
        }
    } else if is_weekday_set(days) {
        match lang {
            Lang::En => "weekday".to_string(),
            Lang::Es => "día laboral".to_string(),
        }
    } else {
        day_list(days, lang)
    };
    if n <= 1 {
        match lang {
            Lang::En => format!("Every {subject}"),
            Lang::Es => format!("Cada {subject}"),
        }
    } else {
        match lang {
            Lang::En => format!("Every {n} weeks on {subject}"),
            Lang::Es => format!("Cada {n} semanas los {subject}"),
        }
    }
}

fn describe_monthly(rule: &Rule, lang: Lang) -> String {
    let n = rule.interval;
    if let (Some(pos), Some(&weekday)) = (rule.by_set_pos, rule.by_weekday.first()) {
        let pos = ordinal_word(pos, lang);
        let day = day_name(weekday, lang);
        return if n <= 1 {
            match lang {
                Lang::En => format!("Every {pos} {day} of the month"),
                Lang::Es => format!("Cada {pos} {day} de mes"),
            }
        } else {
            match lang {
                Lang::En => format!("Every {n} months on the {pos} {day}"),
                Lang::Es => format!("Cada {n} meses los {pos} {day}"),
            }
        };
    }
    if let Some(day) = rule.by_month_day {
        return if n <= 1 {
            match lang {
                Lang::En => format!("Every {day}{} of the month", ordinal_suffix(day)),
                Lang::Es => format!("Cada día {day} de mes"),
            }
        } else {
            match lang {
                Lang::En => format!("Every {n} months on the {day}{}", ordinal_suffix(day)),
                Lang::Es => format!("Cada {n} meses los día {day}"),
            }
        };
    }
    describe_simple(n, lang, ("Monthly", "Mensualmente"), ("months", "meses"))
}

fn day_name(day: Weekday, lang: Lang) -> &'static str {
    match (day, lang) {
        (Weekday::Sunday, Lang::En) => "Sunday",
        (Weekday::Monday, Lang::En) => "Monday",
        (Weekday::Tuesday, Lang::En) => "Tuesday",
        (Weekday::Wednesday, Lang::En) => "Wednesday",
        (Weekday::Thursday, Lang::En) => "Thursday",
        (Weekday::Friday, Lang::En) => "Friday",
        (Weekday::Saturday, Lang::En) => "Saturday",
        (Weekday::Sunday, Lang::Es) => "domingo",
        (Weekday::Monday, Lang::Es) => "lunes",
        (Weekday::Tuesday, Lang::Es) => "martes",
        (Weekday::Wednesday, Lang::Es) => "miércoles",
        (Weekday::Thursday, Lang::Es) => "jueves",
        (Weekday::Friday, Lang::Es) => "viernes",
        (Weekday::Saturday, Lang::Es) => "sábado",
    }
}

/// Join day names in prose: "A", "A and B", or "A, B and C".
fn day_list(days: &[Weekday], lang: Lang) -> String {
    let and = match lang {
        Lang::En => "and",
        Lang::Es => "y",
    };
    let names: Vec<&str> = days.iter().map(|&d| day_name(d, lang)).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [a, b] => format!("{a} {and} {b}"),
        [rest @ .., last] => format!("{} {and} {last}", rest.join(", ")),
    }
}

fn is_weekend_set(days: &[Weekday]) -> bool {
    days.len() == 2
        && days
            .iter()
            .all(|d| matches!(d, Weekday::Saturday | Weekday::Sunday))
}

fn is_weekday_set(days: &[Weekday]) -> bool {
    days.len() == 5
        && days
            .iter()
            .all(|d| !matches!(d, Weekday::Saturday | Weekday::Sunday))
}

/// Ordinal position word for monthly weekday rules. Positions beyond
/// fourth fall back to a numeric ordinal.
fn ordinal_word(pos: i8, lang: Lang) -> String {
    let word = match (pos, lang) {
        (1, Lang::En) => "first",
        (2, Lang::En) => "second",
        (3, Lang::En) => "third",
        (4, Lang::En) => "fourth",
        (-1, Lang::En) => "last",
        (1, Lang::Es) => "primer",
        (2, Lang::Es) => "segundo",
        (3, Lang::Es) => "tercer",
        (4, Lang::Es) => "cuarto",
        (-1, Lang::Es) => "último",
        (pos, Lang::En) => return format!("{pos}th"),
        (pos, Lang::Es) => return format!("{pos}º"),
    };
    word.to_string()
}

fn ordinal_suffix(n: i8) -> &'static str {
    match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[track_caller]
    fn en(input: &str) -> String {
        describe(&parse(input).unwrap())
    }

    #[track_caller]
    fn es(input: &str) -> String {
        describe_in(&parse(input).unwrap(), Lang::Es)
    }

    #[test]
    fn test_describe_daily() {
        assert_eq!(en("FREQ=DAILY"), "Daily");
        assert_eq!(en("FREQ=DAILY;INTERVAL=3"), "Every 3 days");
        assert_eq!(es("FREQ=DAILY"), "Diariamente");
        assert_eq!(es("FREQ=DAILY;INTERVAL=3"), "Cada 3 días");
    }

    #[test]
    fn test_describe_weekly_plain() {
        assert_eq!(en("FREQ=WEEKLY"), "Weekly");
        assert_eq!(en("FREQ=WEEKLY;INTERVAL=2"), "Every 2 weeks");
        assert_eq!(es("FREQ=WEEKLY"), "Semanalmente");
        assert_eq!(es("FREQ=WEEKLY;INTERVAL=2"), "Cada 2 semanas");
    }

    #[test]
    fn test_describe_weekly_day_lists() {
        assert_eq!(en("FREQ=WEEKLY;BYDAY=MO"), "Every Monday");
        assert_eq!(en("FREQ=WEEKLY;BYDAY=MO,FR"), "Every Monday and Friday");
        assert_eq!(
            en("FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,WE,FR"),
            "Every 2 weeks on Monday, Wednesday and Friday"
        );
        assert_eq!(es("FREQ=WEEKLY;BYDAY=MO,FR"), "Cada lunes y viernes");
        assert_eq!(
            es("FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,WE,FR"),
            "Cada 2 semanas los lunes, miércoles y viernes"
        );
    }

    #[test]
    fn test_describe_weekend_and_weekday_shorthand() {
        assert_eq!(en("FREQ=WEEKLY;BYDAY=SA,SU"), "Every weekend");
        assert_eq!(en("FREQ=WEEKLY;BYDAY=SU,SA"), "Every weekend");
        assert_eq!(
            en("FREQ=WEEKLY;INTERVAL=2;BYDAY=SA,SU"),
            "Every 2 weeks on weekend"
        );
        assert_eq!(en("FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR"), "Every weekday");
        assert_eq!(es("FREQ=WEEKLY;BYDAY=SA,SU"), "Cada fin de semana");
        assert_eq!(es("FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR"), "Cada día laboral");
    }

    #[test]
    fn test_describe_monthly_nth_weekday() {
        assert_eq!(
            en("FREQ=MONTHLY;BYDAY=FR;BYSETPOS=1"),
            "Every first Friday of the month"
        );
        assert_eq!(
            en("FREQ=MONTHLY;BYDAY=FR;BYSETPOS=-1"),
            "Every last Friday of the month"
        );
        assert_eq!(
            en("FREQ=MONTHLY;INTERVAL=2;BYDAY=FR;BYSETPOS=1"),
            "Every 2 months on the first Friday"
        );
        assert_eq!(
            en("FREQ=MONTHLY;BYDAY=WE;BYSETPOS=5"),
            "Every 5th Wednesday of the month"
        );
        assert_eq!(
            es("FREQ=MONTHLY;BYDAY=FR;BYSETPOS=1"),
            "Cada primer viernes de mes"
        );
        assert_eq!(
            es("FREQ=MONTHLY;INTERVAL=2;BYDAY=FR;BYSETPOS=1"),
            "Cada 2 meses los primer viernes"
        );
    }

    #[test]
    fn test_describe_monthly_fixed_day() {
        assert_eq!(en("FREQ=MONTHLY;BYMONTHDAY=15"), "Every 15th of the month");
        assert_eq!(en("FREQ=MONTHLY;BYMONTHDAY=1"), "Every 1st of the month");
        assert_eq!(en("FREQ=MONTHLY;BYMONTHDAY=21"), "Every 21st of the month");
        assert_eq!(en("FREQ=MONTHLY;BYMONTHDAY=22"), "Every 22nd of the month");
        assert_eq!(en("FREQ=MONTHLY;BYMONTHDAY=23"), "Every 23rd of the month");
        assert_eq!(
            en("FREQ=MONTHLY;INTERVAL=2;BYMONTHDAY=15"),
            "Every 2 months on the 15th"
        );
        assert_eq!(es("FREQ=MONTHLY;BYMONTHDAY=15"), "Cada día 15 de mes");
        assert_eq!(
            es("FREQ=MONTHLY;INTERVAL=2;BYMONTHDAY=15"),
            "Cada 2 meses los día 15"
        );
    }

    #[test]
    fn test_describe_monthly_and_yearly_plain() {
        assert_eq!(en("FREQ=MONTHLY"), "Monthly");
        assert_eq!(en("FREQ=MONTHLY;INTERVAL=2"), "Every 2 months");
        assert_eq!(en("FREQ=YEARLY"), "Yearly");
        assert_eq!(en("FREQ=YEARLY;INTERVAL=2"), "Every 2 years");
        assert_eq!(es("FREQ=MONTHLY"), "Mensualmente");
        assert_eq!(es("FREQ=YEARLY"), "Anualmente");
    }

    #[test]
    fn test_describe_count_suffix() {
        assert_eq!(en("FREQ=DAILY;COUNT=5"), "Daily, 5 times");
        assert_eq!(es("FREQ=DAILY;COUNT=5"), "Diariamente, 5 veces");
    }

    #[test]
    fn test_describe_count_zero_is_not_mentioned() {
        assert_eq!(en("FREQ=DAILY;COUNT=0"), "Daily");
    }

    #[test]
    fn test_describe_until_suffix() {
        assert_eq!(
            en("FREQ=MONTHLY;BYMONTHDAY=1;UNTIL=20250630T235959Z"),
            "Every 1st of the month until June, 2025"
        );
        assert_eq!(
            es("FREQ=MONTHLY;BYMONTHDAY=1;UNTIL=20250630T235959Z"),
            "Cada día 1 de mes hasta junio, 2025"
        );
    }

    #[test]
    fn test_describe_count_wins_over_until() {
        assert_eq!(
            en("FREQ=DAILY;COUNT=3;UNTIL=20251231T235959Z"),
            "Daily, 3 times"
        );
    }

    #[test]
    fn test_lang_from_code() {
        assert_eq!(Lang::from_code("en"), Some(Lang::En));
        assert_eq!(Lang::from_code("ES"), Some(Lang::Es));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::default(), Lang::En);
    }
}
