use colored::Colorize;

use zy_divination::{CastMethod, CastRequest, DivinationError, Diviner, DivinerConfig};

pub fn run(
    question: &str,
    method: &str,
    numbers: Option<Vec<u32>>,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let method = CastMethod::parse(method).ok_or_else(|| {
        format!("unknown method \"{method}\" (use three-coins, yarrow-sticks, numbers, or random)")
    })?;

    let request = CastRequest {
        question: question.to_string(),
        method,
        numbers,
    };

    let mut diviner = match seed {
        Some(seed) => Diviner::new(DivinerConfig::default().with_seed(seed)),
        None => Diviner::from_entropy(),
    };

    let reading = diviner.divine(&request).map_err(|e| match e {
        DivinationError::InvalidRequest(issues) => issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    })?;

    if json {
        let rendered = serde_json::to_string_pretty(&reading).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    println!();
    println!("  {}", reading.hexagram.to_string().bold());
    println!(
        "  {} over {}",
        reading.hexagram.upper, reading.hexagram.lower
    );
    println!();
    for row in super::figure(reading.hexagram.lines(), &reading.changing_lines).lines() {
        println!("  {row}");
    }
    println!();

    println!("  {}", reading.interpretation.current_situation);
    println!("  {}", reading.interpretation.guidance);
    println!("  {}", reading.interpretation.outcome);
    println!();

    if !reading.changing_lines.is_empty() {
        let positions: Vec<String> = reading
            .changing_lines
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("  changing lines: {}", positions.join(", "));
    }
    if let Some(resulting) = &reading.resulting {
        println!("  {} {}", "becomes:".bold(), resulting);
    }
    if !reading.changing_lines.is_empty() {
        println!();
    }

    println!("  {}", "Advice".bold());
    for advice in &reading.interpretation.advice {
        println!("  - {advice}");
    }
    println!();
    println!(
        "  method: {} ({} accuracy), confidence {:.0}%",
        reading.method,
        reading.method.accuracy_label(),
        reading.confidence * 100.0
    );

    Ok(())
}
