//! CLI administration tool for shorturl.
//!
//! Works directly against the PostgreSQL store, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://www.rust-lang.org/
//!
//! # Look up a short id
//! cargo run --bin admin -- get abcdEFGH
//!
//! # List all mappings
//! cargo run --bin admin -- list
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components: PostgreSQL connection settings
//! - `FALLBACK_URL` (optional): shown by `get` when the id is unknown

use shorturl::config::{self, StoreBackend};
use shorturl::domain::id_generator::OsIdGenerator;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::PgMappingRepository;
use shorturl::prelude::{ResolveService, ShortenService};
use shorturl::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorturl.
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
    /// Store a new mapping and print its short id
    Shorten {
        /// URL to shorten
        url: String,
    },

    /// Show the URL stored for a short id
    Get {
        /// Short id
        id: String,
    },

    /// List all mappings
    List,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::Config::from_env()?;
    if config.store != StoreBackend::Postgres {
        anyhow::bail!("admin works against PostgreSQL only, unset STORE or set it to 'postgres'");
    }

    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Shorten { url } => shorten(&pool, url).await?,
        Commands::Get { id } => get(&pool, &id, config.fallback_url).await?,
        Commands::List => list(&pool, config.fallback_url).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn repository(pool: &PgPool) -> Arc<PgMappingRepository> {
    Arc::new(PgMappingRepository::new(Arc::new(pool.clone())))
}

/// Shortens a URL with the same id generator the server uses.
async fn shorten(pool: &PgPool, url: String) -> Result<()> {
    let service = ShortenService::new(repository(pool), Arc::new(OsIdGenerator));

    let mapping = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "Short URL created".green().bold());
    println!("  ID:  {}", mapping.id.bright_yellow().bold());
    println!("  URL: {}", mapping.url.cyan());
    println!();
    println!(
        "  Redirect path: {}",
        format!("/redirect/{}", mapping.id).bright_cyan()
    );

    Ok(())
}

async fn get(pool: &PgPool, id: &str, fallback_url: String) -> Result<()> {
    let service = ResolveService::new(repository(pool), fallback_url);

    match service.get(id).await {
        Ok(mapping) => {
            println!("  ID:  {}", mapping.id.bright_yellow());
            println!("  URL: {}", mapping.url.cyan());
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("No mapping for '{}'", id).yellow());
            println!(
                "  Redirects go to fallback: {}",
                service.fallback_url().bright_black()
            );
        }
        Err(e) => return Err(anyhow::anyhow!("Lookup failed: {}", e)),
    }

    Ok(())
}

/// Lists all mappings, newest id first.
///
/// # Output Format
///
/// ```text
/// URL Mappings
///
///   ID        URL
///   ----------------------------------------------------------------
///   abcdEFGH  https://example.com/
/// ```
async fn list(pool: &PgPool, fallback_url: String) -> Result<()> {
    let service = ResolveService::new(repository(pool), fallback_url);

    println!("{}", "URL Mappings".bright_blue().bold());
    println!();

    let mappings = service
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list mappings: {}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No mappings found".yellow());
        println!();
        println!(
            "  Create one with: {} admin shorten <URL>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<9} {}",
        "ID".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "-".repeat(64).bright_black());

    for mapping in &mappings {
        println!("  {:<9} {}", mapping.id.bright_yellow(), mapping.url.cyan());
    }

    println!();
    println!(
        "  Total: {}",
        mappings.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1")
                .fetch_one(pool)
                .await
                .context("Database check failed")?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let mappings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Mappings:   {}",
                mappings.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
