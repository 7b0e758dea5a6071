use chrono::{NaiveDate, Utc};
use colored::Colorize;

use zy_core::Catalog;
use zy_divination::daily;

pub fn run(date: Option<&str>, json: bool) -> Result<(), String> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| format!("invalid date \"{s}\": {e}"))?,
        None => Utc::now().date_naive(),
    };

    let catalog = Catalog::standard();
    let hexagram = daily::daily_hexagram(catalog, date).map_err(|e| e.to_string())?;
    let advice = daily::daily_advice(hexagram);

    if json {
        let doc = serde_json::json!({
            "date": date.to_string(),
            "hexagram": hexagram,
            "advice": advice,
        });
        let rendered = serde_json::to_string_pretty(&doc).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    println!();
    println!("  {date} {}", "— hexagram of the day".dimmed());
    println!();
    println!("  {}", hexagram.to_string().bold());
    println!("  {} over {}", hexagram.upper, hexagram.lower);
    println!();
    for row in super::figure(hexagram.lines(), &[]).lines() {
        println!("  {row}");
    }
    println!();
    println!("  {}", hexagram.judgment);
    println!();
    println!("  {}", "Advice".bold());
    for line in &advice {
        println!("  - {line}");
    }

    Ok(())
}
