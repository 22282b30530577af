use tj_core::SexagenaryCalendar;
use tj_narrative::{PromptBuilder, truncate_chars};
use tj_session::Gender;

pub fn run(
    date: &str,
    hour: Option<&str>,
    gender: Option<&str>,
    limit: usize,
) -> Result<(), String> {
    let birth = super::parse_date(date)?;
    let hour = super::parse_hour(hour)?;
    let pillars = SexagenaryCalendar::new()
        .four_pillars(birth, hour)
        .map_err(|e| e.to_string())?;

    let mut builder = PromptBuilder::new();
    if let Some(g) = gender {
        let g = Gender::parse(g).map_err(|e| e.to_string())?;
        builder = builder.with_gender(g.chinese());
    }
    let prompt = builder.analysis(birth, &pillars);
    println!("{}", truncate_chars(&prompt, limit.max(1)));
    Ok(())
}
