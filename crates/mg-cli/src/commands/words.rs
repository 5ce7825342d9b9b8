use std::path::PathBuf;

use comfy_table::{ContentArrangement, Table};

pub fn run(file: Option<PathBuf>) -> Result<(), String> {
    let bank = super::word_source(file).load().map_err(|e| e.to_string())?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Words", "Sample"]);

    for category in bank.categories() {
        let words = bank.words(category).unwrap_or_default();
        let sample = match words.len() {
            0 => "-".to_string(),
            1..=3 => words.join(", "),
            _ => format!("{}, ...", words[..3].join(", ")),
        };
        table.add_row(vec![category.to_string(), words.len().to_string(), sample]);
    }

    println!("{table}");
    println!();
    println!("  {} categories", bank.len());

    Ok(())
}
