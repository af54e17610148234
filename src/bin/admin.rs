//! CLI administration tool for linkhash.
//!
//! Inspects short codes and the record store without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Print the short code a URL maps to (no store needed)
//! cargo run --bin admin -- code https://example.com/page
//!
//! # Look up a short code in the store
//! cargo run --bin admin -- lookup 1b3a9a5c
//!
//! # Check the store connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `MONGO_URI`, `MONGO_DB`, `MONGO_COLLECTION`,
//! `STORE_TIMEOUT_SECS`, `BASE_URL`.

use linkhash::config::{self, Config};
use linkhash::domain::repositories::RecordRepository;
use linkhash::infrastructure::persistence::MongoRecordRepository;
use linkhash::utils::code_generator::{derive_short_code, is_short_code};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing linkhash.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Print the short code and short URL for a URL
    Code {
        /// The original URL
        url: String,
    },

    /// Look up a short code in the store
    Lookup {
        /// 8-character short code
        code: String,
    },

    /// Store operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Store operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check the store connection and count records
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Code { url } => print_code(&config, &url),
        Commands::Lookup { code } => lookup(&config, &code).await?,
        Commands::Db { action } => match action {
            DbAction::Check => db_check(&config).await?,
        },
    }

    Ok(())
}

/// Prints the derived code without touching the store.
fn print_code(config: &Config, url: &str) {
    let code = derive_short_code(url);

    println!("  URL:       {}", url.cyan());
    println!("  Code:      {}", code.bright_yellow().bold());
    println!(
        "  Short URL: {}/{}",
        config.base_url.trim_end_matches('/'),
        code
    );
}

async fn connect(config: &Config) -> Result<MongoRecordRepository> {
    MongoRecordRepository::connect(
        &config.mongo_uri,
        &config.mongo_db,
        &config.mongo_collection,
        config.store_timeout(),
    )
    .await
    .context("Failed to connect to MongoDB")
}

/// Fetches a record by code and prints it.
async fn lookup(config: &Config, code: &str) -> Result<()> {
    if !is_short_code(code) {
        println!(
            "{}",
            format!("'{}' does not look like a short code", code).yellow()
        );
    }

    let repo = connect(config).await?;
    let record = repo
        .find_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    match record {
        Some(record) => {
            println!("  ID:       {}", record.id.to_string().bright_black());
            println!("  Code:     {}", record.short_code.bright_yellow());
            println!("  URL:      {}", record.original_url.cyan());
            println!("  Created:  {}", record.creation_date);
        }
        None => println!("{}", "  Not found".red()),
    }

    repo.shutdown().await;
    Ok(())
}

/// Pings the store and reports record count and highest id.
async fn db_check(config: &Config) -> Result<()> {
    println!("{}", "Checking MongoDB connection...".bright_blue());

    let repo = connect(config).await?;

    let count = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Count failed: {}", e))?;
    let max_id = repo
        .max_id()
        .await
        .map_err(|e| anyhow::anyhow!("Reading max id failed: {}", e))?;

    println!("{}", "  Connected".green().bold());
    println!(
        "  Collection: {}.{}",
        config.mongo_db, config.mongo_collection
    );
    println!("  Records:    {}", count.to_string().bright_white().bold());
    println!(
        "  Highest id: {}",
        max_id.map_or_else(|| "-".to_string(), |id| id.to_string())
    );

    repo.shutdown().await;
    Ok(())
}
