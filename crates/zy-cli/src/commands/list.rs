use comfy_table::{ContentArrangement, Table};

use zy_core::Catalog;

pub fn run() -> Result<(), String> {
    let catalog = Catalog::standard();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["No.", "Name", "Character", "Trigrams", "Title"]);

    for hexagram in catalog.hexagrams() {
        table.add_row(vec![
            hexagram.number.to_string(),
            hexagram.name.clone(),
            hexagram.character.clone(),
            format!(
                "{} over {}",
                hexagram.upper.symbol, hexagram.lower.symbol
            ),
            hexagram.english.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} hexagrams", catalog.hexagrams().len());

    Ok(())
}
