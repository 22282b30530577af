pub mod astro;
pub mod bazi;
pub mod cast;
pub mod fortune;
pub mod numerology;
pub mod plum;
pub mod profile;
pub mod prompt;
pub mod session;
pub mod stick;
pub mod tarot;

use chrono::{Local, NaiveDate, NaiveTime};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tj_core::EarthlyBranch;

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    tj_session::parse_date(s).map_err(|e| e.to_string())
}

fn parse_hour(s: Option<&str>) -> Result<Option<EarthlyBranch>, String> {
    s.map(tj_session::parse_hour)
        .transpose()
        .map_err(|e| e.to_string())
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| format!("invalid time '{s}', use HH:MM"))
}

/// The given date, or today on the local clock.
fn date_or_today(s: Option<&str>) -> Result<NaiveDate, String> {
    match s {
        Some(s) => parse_date(s),
        None => Ok(Local::now().date_naive()),
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{json}");
    Ok(())
}
