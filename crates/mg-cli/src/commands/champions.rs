use std::path::PathBuf;

use comfy_table::{ContentArrangement, Table};

pub fn run(file: Option<PathBuf>, search: Option<&str>) -> Result<(), String> {
    let catalog = super::champion_source(file)
        .load()
        .map_err(|e| e.to_string())?;

    let champions = match search {
        Some(term) => catalog.search(term),
        None => catalog.iter().collect(),
    };

    if champions.is_empty() {
        println!("  No champions found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Attack", "Defense", "Magic", "Force"]);

    for c in &champions {
        table.add_row(vec![
            c.id.clone(),
            c.name.clone(),
            c.attack.to_string(),
            c.defense.to_string(),
            c.magic.to_string(),
            c.force().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} champions", champions.len());

    Ok(())
}
