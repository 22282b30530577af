use std::path::Path;

use chrono::Utc;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tj_core::SexagenaryCalendar;
use tj_session::{Gender, JsonFileRepository, Profile, ProfileRepository};

/// Fields of `tj profile save`.
pub struct SaveArgs<'a> {
    pub id: &'a str,
    pub date: &'a str,
    pub name: Option<&'a str>,
    pub hour: Option<&'a str>,
    pub time: Option<&'a str>,
    pub gender: Option<&'a str>,
}

fn open(store: &Path) -> Result<JsonFileRepository, String> {
    tracing::debug!(store = %store.display(), "opening profile store");
    JsonFileRepository::open(store)
        .map_err(|e| format!("cannot open profile store {}: {e}", store.display()))
}

pub fn save(store: &Path, args: SaveArgs<'_>) -> Result<(), String> {
    let birth = super::parse_date(args.date)?;
    let mut profile = Profile::new(args.id, args.name.unwrap_or(args.id), birth)
        .map_err(|e| e.to_string())?;
    if let Some(hour) = super::parse_hour(args.hour)? {
        profile = profile.with_hour(hour);
    }
    if let Some(time) = args.time {
        profile = profile.with_birth_time(super::parse_time(time)?);
    }
    if let Some(gender) = args.gender {
        profile = profile.with_gender(Gender::parse(gender).map_err(|e| e.to_string())?);
    }
    profile.updated_at = Utc::now();

    let mut repo = open(store)?;
    repo.save(&profile).map_err(|e| e.to_string())?;
    println!("  Saved profile '{}'", profile.id);
    Ok(())
}

pub fn show(store: &Path, id: &str) -> Result<(), String> {
    let repo = open(store)?;
    let profile = repo.load(id).map_err(|e| e.to_string())?;
    let pillars = profile
        .pillars(&SexagenaryCalendar::new())
        .map_err(|e| e.to_string())?;

    println!("  {} ({})", profile.name.bold(), profile.id.dimmed());
    println!();
    println!("  birth:      {}", profile.birth_date);
    if let Some(time) = profile.birth_time {
        println!("  time:       {}", time.format("%H:%M"));
    }
    if let Some(hour) = profile.hour_branch {
        println!("  hour:       {hour}");
    }
    if let Some(gender) = profile.gender {
        println!("  gender:     {gender}");
    }
    println!("  lunar:      {}", pillars.lunar);
    println!("  pillars:    {pillars}");
    let master = pillars.day_master();
    println!("  day master: {}{}", master, master.element().chinese());
    println!(
        "  updated:    {}",
        profile.updated_at.format("%Y-%m-%d %H:%M UTC")
    );
    Ok(())
}

pub fn list(store: &Path) -> Result<(), String> {
    let repo = open(store)?;
    let profiles = repo.list().map_err(|e| e.to_string())?;

    if profiles.is_empty() {
        println!("  No profiles found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "Birth", "Hour", "Updated"]);
    for p in &profiles {
        let hour = p
            .hour_branch
            .map_or_else(|| "—".to_string(), |h| h.to_string());
        table.add_row(vec![
            p.id.clone(),
            p.name.clone(),
            p.birth_date.to_string(),
            hour,
            p.updated_at.format("%Y-%m-%d").to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} profiles", profiles.len());
    Ok(())
}

pub fn delete(store: &Path, id: &str) -> Result<(), String> {
    let mut repo = open(store)?;
    repo.delete(id).map_err(|e| e.to_string())?;
    println!("  Deleted profile '{id}'");
    Ok(())
}
