use comfy_table::{ContentArrangement, Table};

use zy_core::Catalog;

pub fn run() -> Result<(), String> {
    let catalog = Catalog::standard();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Symbol", "Name", "Character", "English", "Element", "Direction", "Season", "Meaning",
    ]);

    for trigram in catalog.trigrams() {
        table.add_row(vec![
            trigram.symbol.clone(),
            trigram.name.clone(),
            trigram.character.clone(),
            trigram.english.clone(),
            trigram.element.to_string(),
            trigram.direction.clone(),
            trigram.season.clone(),
            trigram.meaning.clone(),
        ]);
    }

    println!("{table}");

    Ok(())
}
