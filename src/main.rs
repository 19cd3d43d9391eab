//! Contact Book - Main entry point
//!
//! Runs one interactive session over stdin/stdout. Logs go to stderr so they
//! never interleave with prompts.

use anyhow::Result;
use clap::Parser;
use contact_book::{Config, ContactsDirector, JsonFileStore, LineConsole, Menu};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Interactive personal contact book.
#[derive(Debug, Parser)]
#[command(name = "contact-book", version, about)]
struct Cli {
    /// Base name of the contacts file, without extension
    file_name: Option<String>,

    /// Directory holding the contacts file
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(file_name) = cli.file_name {
        config = config.with_file_name(file_name)?;
    }
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store_path = config.store_path();
    info!(path = %store_path.display(), "Starting contact book");

    let director = ContactsDirector::new(Box::new(JsonFileStore::new(store_path)));
    let mut menu = Menu::new(director);
    let mut console = LineConsole::stdio();

    if let Err(e) = menu.run(&mut console) {
        error!("Session ended with error: {}", e);
        return Err(e.into());
    }

    info!("Contact book shutdown complete");
    Ok(())
}
