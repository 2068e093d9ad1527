use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use hoenndex::{
    catalog::Catalog,
    cli::{render, Cli, Commands, DumpFormat, LogLevel, Shell},
    Result,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    match cli.command.unwrap_or_default() {
        Commands::Shell { catalog } => {
            let catalog = Catalog::load(&catalog)?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut shell = Shell::new(catalog, stdin.lock(), stdout.lock());
            shell.run()?;
        }
        Commands::Catalog { catalog, format } => {
            let catalog = Catalog::load(&catalog)?;
            match format {
                DumpFormat::Text => {
                    let mut out = io::stdout().lock();
                    for item in catalog.items() {
                        render::write_item(&mut out, item)?;
                    }
                }
                DumpFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(catalog.items())?);
                }
            }
        }
    }

    Ok(())
}

/// RUST_LOG wins when set; otherwise the --log-level flag decides.
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
