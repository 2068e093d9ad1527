use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Default catalog file, matching the classic Hoenn dex layout.
pub const DEFAULT_CATALOG: &str = "hoenn_pokedex.csv";

/// Hoenndex: manage Pokémon owners and their Pokédexes
#[derive(Parser)]
#[command(name = "hoenndex")]
#[command(version)]
#[command(about = "Manage Pokémon owners and their Pokédexes")]
#[command(
    long_about = "Hoenndex keeps a registry of owners in a name-keyed binary search tree. \
Each owner holds an ordered Pokédex of catalog entries loaded from a CSV file."
)]
pub struct Cli {
    /// Diagnostic log level (error, warn, info, debug, trace)
    #[arg(long, value_enum, global = true, default_value = "warn")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive menu shell
    Shell {
        /// Path to the catalog CSV file
        #[arg(long, default_value = DEFAULT_CATALOG)]
        catalog: PathBuf,
    },

    /// Print the loaded catalog table
    Catalog {
        /// Path to the catalog CSV file
        #[arg(long, default_value = DEFAULT_CATALOG)]
        catalog: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: DumpFormat,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Shell {
            catalog: PathBuf::from(DEFAULT_CATALOG),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DumpFormat {
    Text,
    Json,
}
