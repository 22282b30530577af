use colored::Colorize;
use tj_narrative::{ComposerConfig, FortuneComposer};

pub fn run(
    date: &str,
    hour: Option<&str>,
    today: Option<&str>,
    baseline: Option<i32>,
    json: bool,
) -> Result<(), String> {
    let birth = super::parse_date(date)?;
    let hour = super::parse_hour(hour)?;
    let today = super::date_or_today(today)?;

    let mut config = ComposerConfig::new();
    if let Some(b) = baseline {
        config = config.with_baseline(b);
    }
    let fortune = FortuneComposer::new(config)
        .compose(birth, hour, today)
        .map_err(|e| e.to_string())?;

    if json {
        return super::print_json(&fortune);
    }

    println!("  {} {}", "今日运势".bold(), fortune.relation);
    println!();
    for line in fortune.to_string().lines() {
        println!("  {line}");
    }
    Ok(())
}
