use colored::Colorize;
use tj_oracle::plum_blossom;

pub fn run(date: Option<&str>, json: bool) -> Result<(), String> {
    let date = super::date_or_today(date)?;
    let cast = plum_blossom(date);

    if json {
        return super::print_json(&cast);
    }

    println!("  {} {cast}", "梅花易数".bold());
    println!();
    for line in cast.hexagram.to_string().lines() {
        println!("  {line}");
    }
    println!("  {}", cast.hexagram.info().advice.italic());
    Ok(())
}
