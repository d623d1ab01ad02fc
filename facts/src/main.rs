//! Russian facts console client.
//!
//! A line-oriented interface over the fact catalog and preference store.
//! State lives in two JSON files under a data directory, so sessions pick
//! up where the last one stopped.
//!
//! ```bash
//! cargo run -p facts -- --data-dir ./data --user 1
//! ```

mod repl;

use facts_core::catalog::CATALOG_FILE;
use facts_core::prefs::PREFS_FILE;
use facts_core::{ContentSource, FactCatalog, PreferenceStore};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Resolved invocation settings.
struct CliConfig {
    /// Directory holding both JSON store files.
    data_dir: PathBuf,
    /// Whose preferences this session reads and writes.
    user_id: i64,
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    let config = parse_config_from_args(&args);
    tracing::info!(
        data_dir = %config.data_dir.display(),
        user_id = config.user_id,
        "starting facts console"
    );

    if let Err(e) = std::fs::create_dir_all(&config.data_dir) {
        eprintln!(
            "Error: could not create data directory {}: {e}",
            config.data_dir.display()
        );
        std::process::exit(1);
    }

    let catalog = FactCatalog::open(
        config.data_dir.join(CATALOG_FILE),
        ContentSource::builtin(),
    );
    let prefs = PreferenceStore::open(config.data_dir.join(PREFS_FILE));

    repl::run(&catalog, &prefs, config.user_id);
}

/// Parse settings from command line arguments, falling back to environment
/// variables and then to defaults.
fn parse_config_from_args(args: &[String]) -> CliConfig {
    let data_dir = std::env::var("FACTS_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let user_id = std::env::var("FACTS_USER_ID")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1);

    let mut config = CliConfig {
        data_dir: PathBuf::from(data_dir),
        user_id,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--data-dir" => {
                if let Some(dir) = args.get(i + 1) {
                    config.data_dir = PathBuf::from(dir);
                    i += 1;
                }
            }
            "--user" => {
                if let Some(id) = args.get(i + 1) {
                    config.user_id = id.parse().unwrap_or(config.user_id);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Russian Facts - console client for the fact catalog");
    println!();
    println!("USAGE:");
    println!("  facts [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help           Show this help message");
    println!("  --data-dir <DIR>     Data directory (default: $FACTS_DATA_DIR or ./data)");
    println!("  --user <ID>          Numeric user id (default: $FACTS_USER_ID or 1)");
    println!();
    println!("COMMANDS (inside the session):");
    println!("  /random              Random fact from everything collected");
    println!("  /fact <topic>        Fact about a topic");
    println!("  /topics              List available topics");
    println!("  /myfact              Fact about your favorite topic");
    println!("  /fav <topic>         Set your favorite topic");
    println!("  /unfav               Clear your favorite topic");
    println!("  /add <topic> <text>  Contribute a fact (10-500 characters)");
    println!("  /stats               Your usage statistics");
    println!("  /help                Show the command list");
    println!("  /quit                Exit");
    println!("  (a bare line is treated as a topic lookup)");
    println!();
    println!("EXAMPLES:");
    println!("  facts                                  # Default data dir and user");
    println!("  facts --data-dir /var/lib/facts --user 42");
}
