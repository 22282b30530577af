use colored::Colorize;
use tj_narrative::NumerologyReading;

pub fn run(date: &str, name: Option<&str>, json: bool) -> Result<(), String> {
    let birth = super::parse_date(date)?;
    let reading = NumerologyReading::new(birth, name);

    if json {
        return super::print_json(&reading);
    }

    for line in reading.to_string().lines() {
        println!("  {line}");
    }
    let compatible: Vec<String> = reading.compatible().iter().map(u32::to_string).collect();
    if !compatible.is_empty() {
        println!("  {} {}", "相合数字".bold(), compatible.join(", "));
    }
    Ok(())
}
