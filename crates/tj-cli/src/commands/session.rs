use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use tj_session::{JsonFileRepository, ProfileRepository, ReadingSession, SessionConfig};

pub fn run(
    profile: Option<&str>,
    store: &Path,
    seed: Option<u64>,
    today: Option<&str>,
) -> Result<(), String> {
    let mut config = SessionConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(today) = today {
        config = config.with_today(super::parse_date(today)?);
    }

    let mut session = ReadingSession::new(config);
    if let Some(id) = profile {
        let repo = JsonFileRepository::open(store).map_err(|e| e.to_string())?;
        let loaded = repo.load(id).map_err(|e| e.to_string())?;
        tracing::debug!(profile = id, store = %store.display(), "loaded profile");
        session = session.with_profile(loaded);
    }

    println!("  {} Tianji reading session", "Starting".bold());
    match session.profile() {
        Some(p) => println!("  Profile: {p} | Today: {}", session.today()),
        None => println!("  No profile loaded | Today: {}", session.today()),
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
