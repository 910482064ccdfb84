//! Basic rrul API walkthrough: parse, expand, match, describe, display.

use jiff::civil::date;
use rrul::Rule;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse an RRULE string
    let rule: Rule = "FREQ=WEEKLY;BYDAY=MO,FR;COUNT=6".parse()?;
    println!("Parsed: {rule}");

    // Expand occurrences from an anchor date
    let anchor = date(2025, 6, 16);
    println!("\nOccurrences from {anchor}:");
    for d in rule.generate(anchor, None, None) {
        println!("  {d}");
    }

    // Check whether a date falls on the pattern
    let friday = date(2025, 6, 20);
    println!("\n{friday} matches: {}", rule.contains(anchor, friday));
    let tuesday = date(2025, 6, 17);
    println!("{tuesday} matches: {}", rule.contains(anchor, tuesday));

    // Human-readable description
    println!("\nDescribed: {}", rule.describe());

    // Display roundtrips through parsing
    let roundtripped: Rule = rule.to_string().parse()?;
    assert_eq!(rule.to_string(), roundtripped.to_string());
    println!("Roundtrip: {roundtripped}");

    Ok(())
}
