use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_DB_PATH: &str = "emissions.db";
pub const DEFAULT_CSV_PATH: &str = "co-emissions-per-capita new.csv";

/// Command-line options of the viewer.
#[derive(Parser, Debug)]
#[command(version, about = "Per-capita CO2 emissions viewer")]
pub struct Args {
    /// SQLite file caching the imported rows
    #[arg(long = "db", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// CSV imported at startup
    #[arg(long = "csv", default_value = DEFAULT_CSV_PATH)]
    pub csv: PathBuf,

    /// Do not import any CSV at startup
    #[arg(long = "no-default-import", action)]
    pub no_default_import: bool,

    /// Keep the store in memory instead of a file
    #[arg(long = "in-memory", action)]
    pub in_memory: bool,
}

/// Where the store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    File(PathBuf),
    InMemory,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub store: StoreLocation,
    /// CSV to import on startup, if any.
    pub startup_csv: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            store: StoreLocation::File(PathBuf::from(DEFAULT_DB_PATH)),
            startup_csv: Some(PathBuf::from(DEFAULT_CSV_PATH)),
        }
    }
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Settings {
            store: if args.in_memory {
                StoreLocation::InMemory
            } else {
                StoreLocation::File(args.db)
            },
            startup_csv: (!args.no_default_import).then_some(args.csv),
        }
    }
}
