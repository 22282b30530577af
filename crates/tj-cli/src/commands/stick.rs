use colored::Colorize;
use tj_oracle::{draw_stick, stick_for_seed};

pub fn run(seed: Option<u64>, json: bool) -> Result<(), String> {
    let stick = match seed {
        Some(seed) => stick_for_seed(seed),
        None => draw_stick(&mut super::rng(None)),
    };

    if json {
        return super::print_json(stick);
    }

    println!("  {} {}", format!("第{}签", stick.number).bold(), stick.title);
    println!("  {}", stick.content);
    println!("  {}", stick.advice.italic());
    Ok(())
}
