use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tj_oracle::{Spread, read_spread};

pub fn run(spread: &str, exclude: &[u8], seed: Option<u64>, json: bool) -> Result<(), String> {
    let spread = Spread::parse(spread).map_err(|e| e.to_string())?;
    let mut rng = super::rng(seed);
    let reading = read_spread(spread, &mut rng, exclude).map_err(|e| e.to_string())?;

    if json {
        return super::print_json(&reading);
    }

    println!("  {}", "塔罗".bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["位置", "牌", "正逆", "含义"]);
    for placed in &reading.cards {
        let orientation = if placed.drawn.reversed {
            placed.drawn.orientation().red().to_string()
        } else {
            placed.drawn.orientation().green().to_string()
        };
        table.add_row(vec![
            format!("{}\n{}", placed.position.label, placed.position.description),
            placed.drawn.card.to_string(),
            orientation,
            placed.drawn.meaning().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
