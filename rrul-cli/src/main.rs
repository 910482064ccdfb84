use clap::Parser;
use jiff::civil::Date;
use jiff::Zoned;
use rrul::{Lang, Rule};
use std::process;

#[derive(Parser)]
#[command(name = "rrul", about = "Compact calendar recurrence rules", version)]
struct Cli {
    /// Recurrence rule (e.g., "FREQ=WEEKLY;BYDAY=MO,FR")
    rule: Option<String>,

    /// Number of occurrences to show
    #[arg(short, long, default_value = "5")]
    n: u32,

    /// Anchor date for expansion (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    from: Option<String>,

    /// Inclusive end of the expansion range (YYYY-MM-DD)
    #[arg(long)]
    to: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Validate the rule without expanding
    #[arg(long)]
    check: bool,

    /// Show the parsed rule as JSON
    #[arg(long)]
    parse: bool,

    /// Describe the rule in words
    #[arg(long)]
    describe: bool,

    /// Language for --describe (en or es)
    #[arg(long, default_value = "en")]
    lang: String,

    /// Check whether a date (YYYY-MM-DD) falls on the rule; exit 0 if so
    #[arg(long, value_name = "DATE")]
    matches: Option<String>,
}

fn parse_date(what: &str, value: &str) -> Date {
    match value.parse() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: invalid {what} date: {e}");
            process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let input = match cli.rule {
        Some(ref rule) => rule.as_str(),
        None => {
            eprintln!("error: no rule provided");
            process::exit(2);
        }
    };

    let rule = match Rule::parse(input) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e.display_rich());
            process::exit(1);
        }
    };

    if cli.check {
        println!("\u{2713} valid");
        process::exit(0);
    }

    if cli.parse {
        match serde_json::to_string_pretty(&rule) {
            Ok(json) => {
                println!("{json}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        }
    }

    if cli.describe {
        let lang = match Lang::from_code(&cli.lang) {
            Some(lang) => lang,
            None => {
                eprintln!("error: unsupported language: {}", cli.lang);
                process::exit(1);
            }
        };
        println!("{}", rule.describe_in(lang));
        process::exit(0);
    }

    let anchor = match cli.from {
        Some(ref from) => parse_date("--from", from),
        None => Zoned::now().date(),
    };

    if let Some(ref probe) = cli.matches {
        let date = parse_date("--matches", probe);
        if rule.contains(anchor, date) {
            println!("\u{2713} {date} matches");
            process::exit(0);
        } else {
            println!("\u{2717} {date} does not match");
            process::exit(1);
        }
    }

    let cutoff = cli.to.as_ref().map(|to| parse_date("--to", to));

    let mut n = cli.n;
    if n > 1000 {
        eprintln!("warning: capped at 1000 occurrences");
        n = 1000;
    }

    let results = rule.generate(anchor, Some(n as usize), cutoff);

    if results.is_empty() {
        eprintln!("no occurrences");
        process::exit(0);
    }

    if cli.json {
        let iso_strings: Vec<String> = results.iter().map(|d| d.to_string()).collect();
        println!("{}", serde_json::to_string(&iso_strings).unwrap());
    } else {
        for d in &results {
            println!("{d}");
        }
    }
}
