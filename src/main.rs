/// Main entry point for the habit tracker CLI
///
/// This file sets up logging, parses command line arguments, resolves the
/// database location, and dispatches to the command layer. The clock is
/// read exactly once per invocation and threaded through explicitly.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use habit_tracker::{
    complete_habit, create_habit, delete_habit, habit_status, list_habits, seed_demo_data,
    AppError, CompleteHabitParams, CreateHabitParams, DeleteHabitParams, HabitTracker,
    ListHabitsParams, StatusParams,
};

/// Get the default database path with robust fallback strategy
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        // 1. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("habit_tracker");
            p
        }),
        // 2. User's home directory
        dirs::home_dir().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
        // 3. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        // Try to create the directory and verify it is writable
        if std::fs::create_dir_all(potential_path).is_ok() {
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                let mut db_path = potential_path.clone();
                db_path.push("habits.db");
                return Ok(db_path);
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("habit_tracker");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("habits.db");

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the habit tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's data directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    /// Print command output as JSON instead of plain text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new habit
    Create {
        /// Habit name, unique case-insensitively
        name: String,
        /// How often the habit repeats: daily or weekly
        #[arg(long, default_value = "daily")]
        periodicity: String,
    },
    /// Mark a habit as completed today
    Complete {
        /// Name of the habit to complete
        name: String,
    },
    /// Delete a habit and its completion history
    Delete {
        /// Name of the habit to delete
        name: String,
    },
    /// List habits with streak and break statistics
    List {
        /// Only show habits with this periodicity (daily or weekly)
        #[arg(long)]
        periodicity: Option<String>,
        /// Sort order: name, current_streak, longest_streak or break_count
        #[arg(long)]
        sort_by: Option<String>,
    },
    /// Show detailed status for one habit
    Status {
        /// Name of the habit
        name: String,
    },
    /// Populate an empty database with example habits and history
    Seed,
}

fn run(args: Args) -> Result<(), AppError> {
    // Determine database path
    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_database_path()
            .map_err(|e| AppError::Io(std::io::Error::other(e.to_string())))?,
    };

    info!("Using database at: {}", db_path.display());

    let tracker = HabitTracker::open(db_path)?;
    let store = tracker.store();
    let json = args.json;

    // One clock read per invocation
    let now = chrono::Utc::now();

    match args.command {
        Command::Create { name, periodicity } => {
            let response = create_habit(store, CreateHabitParams { name, periodicity }, now)?;
            print_response(json, &response, &response.message)?;
        }
        Command::Complete { name } => {
            let response = complete_habit(store, CompleteHabitParams { name }, now)?;
            print_response(json, &response, &response.message)?;
        }
        Command::Delete { name } => {
            let response = delete_habit(store, DeleteHabitParams { name })?;
            print_response(json, &response, &response.message)?;
        }
        Command::List {
            periodicity,
            sort_by,
        } => {
            let response = list_habits(
                store,
                ListHabitsParams {
                    periodicity,
                    sort_by,
                },
                now,
            )?;
            print_response(json, &response, &response.message)?;
        }
        Command::Status { name } => {
            let response = habit_status(store, StatusParams { name }, now)?;
            print_response(json, &response, &response.message)?;
        }
        Command::Seed => {
            let seeded = seed_demo_data(store, now)?;
            let message = if seeded == 0 {
                "Database already contains habits, nothing seeded".to_string()
            } else {
                format!("Seeded {} example habits with four months of history", seeded)
            };
            print_response(json, &serde_json::json!({ "seeded": seeded }), &message)?;
        }
    }

    Ok(())
}

/// Print a command response as plain text or pretty JSON
fn print_response<T: serde::Serialize>(
    json: bool,
    response: &T,
    message: &str,
) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        println!("{}", message);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker={}", log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
