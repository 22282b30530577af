use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde_json::json;
use tj_core::{Element, SexagenaryCalendar};

pub fn run(date: &str, hour: Option<&str>, json: bool) -> Result<(), String> {
    let birth = super::parse_date(date)?;
    let hour = super::parse_hour(hour)?;
    let pillars = SexagenaryCalendar::new()
        .four_pillars(birth, hour)
        .map_err(|e| e.to_string())?;
    let counts = pillars.element_counts();
    let missing = pillars.missing_elements();

    if json {
        return super::print_json(&json!({
            "birth_date": birth,
            "pillars": pillars,
            "day_master": pillars.day_master(),
            "element_counts": Element::ALL
                .iter()
                .map(|e| (e.to_string(), counts[e.index()]))
                .collect::<std::collections::BTreeMap<_, _>>(),
            "missing": missing,
        }));
    }

    let master = pillars.day_master();
    println!(
        "  {} {birth}  农历{}  生肖{}",
        "八字".bold(),
        pillars.lunar,
        pillars.lunar.year_zodiac.chinese()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "干支", "纳音", "天干", "地支"]);
    for (label, pillar) in ["年柱", "月柱", "日柱", "时柱"].iter().zip(pillars.pillars()) {
        let nayin = pillar
            .nayin()
            .map_or_else(|| "—".to_string(), |n| n.to_string());
        table.add_row(vec![
            label.to_string(),
            pillar.to_string(),
            nayin,
            format!("{}{}", pillar.stem, pillar.stem.element().chinese()),
            format!("{}{}", pillar.branch, pillar.branch.element().chinese()),
        ]);
    }
    println!("{table}");
    println!();

    let distribution: Vec<String> = Element::ALL
        .iter()
        .map(|e| format!("{}{}", e.chinese(), counts[e.index()]))
        .collect();
    println!("  日主 {}{}", master, master.element().chinese());
    println!("  五行 {}", distribution.join(" "));
    if !missing.is_empty() {
        let missing: String = missing.iter().map(|e| e.chinese()).collect();
        println!("  缺 {}", missing.yellow());
    }
    Ok(())
}
