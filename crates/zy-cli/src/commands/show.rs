use colored::Colorize;

use zy_core::Catalog;

pub fn run(number: u32) -> Result<(), String> {
    let catalog = Catalog::standard();
    let hexagram = catalog
        .hexagram_by_number(number)
        .map_err(|e| e.to_string())?;

    println!();
    println!("  {}", hexagram.to_string().bold());
    println!("  {} over {}", hexagram.upper, hexagram.lower);
    println!();
    for row in super::figure(hexagram.lines(), &[]).lines() {
        println!("  {row}");
    }
    println!();

    println!("  {}", "Judgment".bold());
    println!("  {}", hexagram.judgment);
    println!();
    println!("  {}", "Image".bold());
    println!("  {}", hexagram.image);
    println!();

    println!("  {}", "Meanings".bold());
    println!("  general:  {}", hexagram.meanings.general);
    println!("  love:     {}", hexagram.meanings.love);
    println!("  career:   {}", hexagram.meanings.career);
    println!("  health:   {}", hexagram.meanings.health);
    println!("  finance:  {}", hexagram.meanings.finance);
    println!("  advice:   {}", hexagram.meanings.advice);
    println!();

    println!("  {}", "Changing lines".bold());
    for (i, line) in hexagram.changing_lines.iter().enumerate() {
        println!("  {}. {}", i + 1, line.text);
        println!("     {}", line.meaning.dimmed());
    }

    Ok(())
}
