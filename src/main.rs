use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use timecard::config::Config;
use timecard::entities::{Project, TimeEntry};
use timecard::stats::{self, ActivityKind, DashboardStats};
use timecard::utils::duration::{format_elapsed, format_hours};
use timecard::utils::numerals::{convert_digits, to_localized_numerals, NumeralDirection};
use timecard::{constants, logger, validation, DisplayZone, Timestamp};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "timecard")]
#[command(about = "Localized date/time display for project time tracking")]
#[command(version = VERSION)]
struct Cli {
    /// Config file to use instead of the default search path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Display timezone override ("local", "utc" or an offset like +03:30)
    #[arg(long, global = true)]
    timezone: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an ISO-8601 instant in the localized display format
    Format {
        /// Instant such as 2024-01-01T10:00:00Z
        instant: String,
    },

    /// Read a localized `YYYY/MM/DD - HH:mm` value back into an ISO-8601 instant
    Parse {
        /// Display text, Persian or ASCII digits
        text: String,
    },

    /// Show the elapsed time between two instants
    Duration {
        start: String,
        /// Omit for a running timer
        end: Option<String>,
    },

    /// Convert digits in text
    Digits {
        text: String,
        /// Convert Persian digits back to ASCII
        #[arg(long)]
        ascii: bool,
    },

    /// Print dashboard statistics from exported JSON rows
    Stats {
        /// JSON array of project rows
        projects: PathBuf,
        /// JSON array of time entry rows
        entries: PathBuf,
    },

    /// Check a password against the sign-up rules
    Password { candidate: String },

    /// Write a default configuration file
    InitConfig {
        /// Destination (defaults to the XDG config location)
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if let Some(zone) = &cli.timezone {
        zone.parse::<DisplayZone>()?;
        config.display.timezone = zone.clone();
    }

    if let Err(e) = logger::init(&config.logging) {
        eprintln!("⚠️  Logging disabled: {:#}", e);
    }

    let formatter = config.display.formatter()?;

    match cli.command {
        Commands::Format { instant } => {
            println!("{}", formatter.format(&instant)?);
        }
        Commands::Parse { text } => {
            println!("{}", formatter.parse(&text)?);
        }
        Commands::Duration { start, end } => {
            let start = Timestamp::parse(&start)?;
            let end = end.as_deref().map(Timestamp::parse).transpose()?;
            let policy = config.display.negative_duration_policy()?;
            println!("{}", format_elapsed(&start, end.as_ref(), policy));
        }
        Commands::Digits { text, ascii } => {
            let direction = if ascii { NumeralDirection::ToAscii } else { NumeralDirection::ToLocalized };
            println!("{}", convert_digits(&text, direction));
        }
        Commands::Stats { projects, entries } => {
            let projects: Vec<Project> = read_json(&projects)?;
            let entries: Vec<TimeEntry> = read_json(&entries)?;
            let dashboard = DashboardStats::compute_with_limit(
                &projects,
                &entries,
                &formatter,
                config.display.recent_activity_limit,
            );
            print_stats(&dashboard, &entries, &formatter, &config)?;
        }
        Commands::Password { candidate } => {
            let errors = validation::validate_password(&candidate);
            if errors.is_empty() {
                println!("{}", constants::PASSWORD_ACCEPTED);
            } else {
                for error in &errors {
                    println!("❌ {}", error);
                }
                std::process::exit(1);
            }
        }
        Commands::InitConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(&path)?;
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_stats(
    dashboard: &DashboardStats,
    entries: &[TimeEntry],
    formatter: &timecard::DateTimeFormatter,
    config: &Config,
) -> Result<()> {
    let policy = config.display.negative_duration_policy()?;

    println!("Projects:        {}", to_localized_numerals(&dashboard.total_projects));
    println!("  active:        {}", to_localized_numerals(&dashboard.active_projects));
    println!("  completed:     {}", to_localized_numerals(&dashboard.completed_projects));
    println!("Time entries:    {}", to_localized_numerals(&dashboard.total_time_entries));
    println!("Total:           {}", format_hours(dashboard.total_hours));
    println!("Per day:         {}", format_hours(dashboard.average_hours_per_day));

    if let Some(top) = &dashboard.most_active_project {
        println!("Most active:     {} ({})", top.title, format_hours(top.hours));
    }

    if let Some(running) = stats::active_entry(entries) {
        println!(
            "Running:         {} since {} ({})",
            running.project_title().unwrap_or(constants::UNKNOWN_PROJECT),
            formatter.format_timestamp(&running.start_time),
            format_elapsed(&running.start_time, None, policy)
        );
    }

    println!();
    println!("Recent activity:");
    for activity in &dashboard.recent_activity {
        let marker = match activity.kind {
            ActivityKind::Started => "▶",
            ActivityKind::Completed => "✓",
        };
        println!("  {} {}  {}", marker, activity.time, activity.project);
    }

    Ok(())
}
