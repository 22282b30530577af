use colored::Colorize;
use serde_json::json;
use tj_oracle::cast_hexagram;

pub fn run(seed: Option<u64>, question: Option<&str>, json: bool) -> Result<(), String> {
    let hexagram = cast_hexagram(&mut super::rng(seed));
    let info = hexagram.info();
    let changed = hexagram.changed();

    if json {
        return super::print_json(&json!({
            "question": question,
            "number": hexagram.number(),
            "info": info,
            "hexagram": hexagram,
            "moving_lines": hexagram.moving_lines(),
            "changed": changed.map(|c| json!({ "number": c.number(), "info": c.info() })),
        }));
    }

    if let Some(q) = question {
        println!("  问：{q}");
    }
    for line in hexagram.to_string().lines() {
        println!("  {line}");
    }
    println!("  {}", info.advice.italic());
    match changed {
        Some(c) => {
            let ci = c.info();
            println!();
            println!("  {} {} {} ({})", "变卦".bold(), ci.chinese, ci.name, ci.meaning);
        }
        None => println!("  无动爻"),
    }
    Ok(())
}
