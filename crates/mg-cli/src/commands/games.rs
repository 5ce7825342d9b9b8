use comfy_table::{ContentArrangement, Table};

use mg_arcade::GameKind;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Game", "Description"]);

    for kind in GameKind::ALL {
        table.add_row(vec![kind.id(), kind.title(), kind.description()]);
    }

    println!("{table}");
    println!();
    println!("  Start playing with `mg play`, then `open <id>`.");

    Ok(())
}
