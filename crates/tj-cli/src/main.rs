//! CLI frontend for Tianji, the Chinese metaphysics toolkit.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Default directory for saved profiles, relative to the working directory.
const DEFAULT_STORE: &str = ".tianji/profiles";

#[derive(Parser)]
#[command(
    name = "tj",
    about = "Tianji: four pillars, hexagrams and daily fortunes",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the four pillars of a birth date
    Bazi {
        /// Birth date, YYYY-MM-DD
        #[arg(short, long)]
        date: String,

        /// Birth hour: a branch (午, wu) or a clock hour 0-23
        #[arg(long)]
        hour: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compose the daily fortune for a birth date
    Fortune {
        /// Birth date, YYYY-MM-DD
        #[arg(short, long)]
        date: String,

        /// Birth hour: a branch or a clock hour 0-23
        #[arg(long)]
        hour: Option<String>,

        /// Day to read (default: today)
        #[arg(short, long)]
        today: Option<String>,

        /// Radar baseline score, 0-100
        #[arg(long)]
        baseline: Option<i32>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Cast a hexagram with six three-coin tosses
    Cast {
        /// RNG seed for a reproducible cast
        #[arg(short, long)]
        seed: Option<u64>,

        /// The question being asked
        #[arg(short, long)]
        question: Option<String>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Cast a plum blossom hexagram from a date
    Plum {
        /// Date to cast from, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw a fortune stick
    Stick {
        /// Pick the stick by seed (seed mod 8) instead of at random
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw tarot cards
    Tarot {
        /// Spread: daily (one card) or three (past, present, future)
        #[arg(long, default_value = "daily")]
        spread: String,

        /// Card ids (0-77) to leave out of the deck, comma separated
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<u8>,

        /// Seed the draw for a reproducible reading
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Sun, moon and rising signs
    Astro {
        /// Birth date, YYYY-MM-DD
        #[arg(short, long)]
        date: String,

        /// Birth time, HH:MM
        #[arg(long)]
        time: Option<String>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Life path and name numbers
    Numerology {
        /// Birth date, YYYY-MM-DD
        #[arg(short, long)]
        date: String,

        /// Full name in Latin letters
        #[arg(short, long)]
        name: Option<String>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the narrative-service prompt for a birth date
    Prompt {
        /// Birth date, YYYY-MM-DD
        #[arg(short, long)]
        date: String,

        /// Birth hour: a branch or a clock hour 0-23
        #[arg(long)]
        hour: Option<String>,

        /// Gender to mention (male, female)
        #[arg(short, long)]
        gender: Option<String>,

        /// Maximum prompt length in characters
        #[arg(long, default_value_t = tj_narrative::config::DEFAULT_PROMPT_LIMIT)]
        limit: usize,
    },

    /// Manage saved profiles
    Profile {
        /// Directory holding profile files
        #[arg(long, global = true, default_value = DEFAULT_STORE)]
        store: PathBuf,

        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Start an interactive reading session
    Session {
        /// Profile to load
        #[arg(short, long)]
        profile: Option<String>,

        /// Directory holding profile files
        #[arg(long, default_value = DEFAULT_STORE)]
        store: PathBuf,

        /// RNG seed for reproducible casts
        #[arg(short, long)]
        seed: Option<u64>,

        /// Date treated as today, YYYY-MM-DD
        #[arg(short, long)]
        today: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Create or replace a profile
    Save {
        /// Profile id: letters, digits, '-' or '_'
        id: String,

        /// Birth date, YYYY-MM-DD
        #[arg(short, long)]
        date: String,

        /// Display name (default: the id)
        #[arg(short, long)]
        name: Option<String>,

        /// Birth hour: a branch or a clock hour 0-23
        #[arg(long)]
        hour: Option<String>,

        /// Birth time, HH:MM
        #[arg(long)]
        time: Option<String>,

        /// Gender (male, female)
        #[arg(short, long)]
        gender: Option<String>,
    },

    /// Show one profile with its pillars
    Show {
        /// Profile id
        id: String,
    },

    /// List saved profiles
    List,

    /// Delete a profile
    Delete {
        /// Profile id
        id: String,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Bazi { date, hour, json } => commands::bazi::run(&date, hour.as_deref(), json),
        Commands::Fortune {
            date,
            hour,
            today,
            baseline,
            json,
        } => commands::fortune::run(&date, hour.as_deref(), today.as_deref(), baseline, json),
        Commands::Cast {
            seed,
            question,
            json,
        } => commands::cast::run(seed, question.as_deref(), json),
        Commands::Plum { date, json } => commands::plum::run(date.as_deref(), json),
        Commands::Stick { seed, json } => commands::stick::run(seed, json),
        Commands::Tarot {
            spread,
            exclude,
            seed,
            json,
        } => commands::tarot::run(&spread, &exclude, seed, json),
        Commands::Astro { date, time, json } => commands::astro::run(&date, time.as_deref(), json),
        Commands::Numerology { date, name, json } => {
            commands::numerology::run(&date, name.as_deref(), json)
        }
        Commands::Prompt {
            date,
            hour,
            gender,
            limit,
        } => commands::prompt::run(&date, hour.as_deref(), gender.as_deref(), limit),
        Commands::Profile { store, action } => match action {
            ProfileAction::Save {
                id,
                date,
                name,
                hour,
                time,
                gender,
            } => commands::profile::save(
                &store,
                commands::profile::SaveArgs {
                    id: &id,
                    date: &date,
                    name: name.as_deref(),
                    hour: hour.as_deref(),
                    time: time.as_deref(),
                    gender: gender.as_deref(),
                },
            ),
            ProfileAction::Show { id } => commands::profile::show(&store, &id),
            ProfileAction::List => commands::profile::list(&store),
            ProfileAction::Delete { id } => commands::profile::delete(&store, &id),
        },
        Commands::Session {
            profile,
            store,
            seed,
            today,
        } => commands::session::run(profile.as_deref(), &store, seed, today.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
