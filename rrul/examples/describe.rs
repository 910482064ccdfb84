//! Localized descriptions and rich parse error rendering.

use rrul::{Lang, Rule};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let inputs = [
        "FREQ=DAILY",
        "FREQ=WEEKLY;BYDAY=SA,SU",
        "FREQ=MONTHLY;BYDAY=FR;BYSETPOS=1;COUNT=12",
        "FREQ=MONTHLY;BYMONTHDAY=15;UNTIL=20251231T235959Z",
    ];
    for s in inputs {
        let rule: Rule = s.parse()?;
        println!("{s}");
        println!("  en: {}", rule.describe());
        println!("  es: {}", rule.describe_in(Lang::Es));
    }

    // Parse failures render with a caret under the offending span
    if let Err(err) = Rule::parse("FREQ=DAYLY;COUNT=3") {
        println!("\n{}", err.display_rich());
    }

    Ok(())
}
