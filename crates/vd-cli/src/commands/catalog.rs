use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(catalog: Option<&Path>, json: bool) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;

    if json {
        let out = serde_json::to_string_pretty(&catalog).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Code", "Virtue", "Class", "Six face"]);

    for die in &catalog {
        let six = die.six_asset.as_deref().unwrap_or("-");
        table.add_row(vec![
            die.key.as_str(),
            die.display_code.as_str(),
            die.virtue.as_str(),
            die.visual_class.as_str(),
            six,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} die types, up to {} dice each", catalog.len(), vd_engine::MAX_DICE);

    Ok(())
}
