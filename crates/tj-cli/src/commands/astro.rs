use colored::Colorize;
use tj_narrative::chart;

pub fn run(date: &str, time: Option<&str>, json: bool) -> Result<(), String> {
    let birth = super::parse_date(date)?;
    let time = time.map(super::parse_time).transpose()?;
    let signs = chart(birth, time);

    if json {
        return super::print_json(&signs);
    }

    let sun = signs.sun;
    println!("  {signs}");
    println!();
    println!(
        "  {} {} · {} · 守护星 {}",
        sun.chinese().bold(),
        sun.element().chinese(),
        sun.quality().chinese(),
        sun.ruler()
    );
    println!("  {}", sun.traits().join("、"));
    Ok(())
}
