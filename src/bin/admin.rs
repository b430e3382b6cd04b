//! CLI administration tool for location-registry.
//!
//! Manages organisations and locations directly against the database, without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register an organisation (prompts for the name when omitted)
//! cargo run --bin admin -- organisation create --name "Climate Research Institute"
//!
//! # List organisations
//! cargo run --bin admin -- organisation list
//!
//! # Add a location
//! cargo run --bin admin -- location create --organisation-id 1 --name Vienna \
//!     --longitude 16.3738 --latitude 48.2082
//!
//! # List locations inside a bounding box (sw_lat,sw_lon,ne_lat,ne_lon)
//! cargo run --bin admin -- location list 1 --bbox 46.5,12.0,49.0,17.0
//!
//! # Counts and database checks
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_PATH`).
//! Migrations are applied on connect.

use location_registry::AppState;
use location_registry::config::Config;
use location_registry::domain::bounding_box::BoundingBox;
use location_registry::domain::entities::{Location, Organisation};
use location_registry::infrastructure::persistence;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing location-registry.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage organisations
    Organisation {
        #[command(subcommand)]
        action: OrganisationAction,
    },

    /// Manage locations
    Location {
        #[command(subcommand)]
        action: LocationAction,
    },

    /// Show record counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Organisation subcommands.
#[derive(Subcommand)]
enum OrganisationAction {
    /// Register a new organisation
    Create {
        /// Organisation name (prompted for when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all organisations
    List,

    /// Show one organisation and its location count
    Show {
        /// Organisation ID
        id: i64,
    },
}

/// Location subcommands.
#[derive(Subcommand)]
enum LocationAction {
    /// Create a location for an organisation
    Create {
        #[arg(long)]
        organisation_id: i64,

        #[arg(short, long)]
        name: String,

        /// Degrees east, -180..=180
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,

        /// Degrees north, -90..=90
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,
    },

    /// List locations of an organisation
    List {
        /// Organisation ID
        organisation_id: i64,

        /// Bounding box as sw_lat,sw_lon,ne_lat,ne_lon
        #[arg(long, allow_hyphen_values = true)]
        bbox: Option<String>,
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
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;

    let pool = persistence::connect(&config)
        .await
        .context("Failed to connect to database")?;
    persistence::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    let state = AppState::new(Arc::new(pool.clone()));

    match cli.command {
        Commands::Organisation { action } => handle_organisation_action(action, &state).await?,
        Commands::Location { action } => handle_location_action(action, &state).await?,
        Commands::Stats => handle_stats(&state).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Dispatches organisation commands.
async fn handle_organisation_action(action: OrganisationAction, state: &AppState) -> Result<()> {
    match action {
        OrganisationAction::Create { name, yes } => create_organisation(state, name, yes).await,
        OrganisationAction::List => list_organisations(state).await,
        OrganisationAction::Show { id } => show_organisation(state, id).await,
    }
}

/// Registers an organisation, prompting for the name if needed.
async fn create_organisation(state: &AppState, name: Option<String>, skip_confirm: bool) -> Result<()> {
    println!("{}", "🏢 Register Organisation".bright_blue().bold());
    println!();

    let name = match name {
        Some(name) => name,
        None => Input::<String>::new()
            .with_prompt("Organisation name")
            .interact_text()?,
    };

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Create organisation '{}'?", name))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let organisation = state
        .organisation_service
        .create_organisation(name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create organisation: {}", e))?;

    println!();
    println!("{}", "✅ Organisation created".green().bold());
    print_organisation(&organisation);
    println!();

    Ok(())
}

/// Lists all organisations.
///
/// # Output Format
///
/// ```text
/// 📋 Organisations
///
///   ID    Name
///   ──────────────────────────────────────────────
///   1     Climate Research Institute
///   2     European Environmental Agency
/// ```
async fn list_organisations(state: &AppState) -> Result<()> {
    println!("{}", "📋 Organisations".bright_blue().bold());
    println!();

    let organisations = state
        .organisation_service
        .list_organisations()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list organisations: {}", e))?;

    if organisations.is_empty() {
        println!("{}", "  No organisations found".yellow());
        println!();
        println!(
            "  Create one with: {} admin organisation create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold()
    );
    println!("  {}", "─".repeat(50).bright_black());

    for organisation in &organisations {
        println!(
            "  {:<5} {}",
            organisation.id.to_string().bright_black(),
            organisation.name.cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        organisations.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn show_organisation(state: &AppState, id: i64) -> Result<()> {
    let organisation = state
        .organisation_service
        .get_organisation(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let locations = state
        .location_service
        .list_locations(id, None)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list locations: {}", e))?;

    print_organisation(&organisation);
    println!(
        "  Locations: {}",
        locations.len().to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Dispatches location commands.
async fn handle_location_action(action: LocationAction, state: &AppState) -> Result<()> {
    match action {
        LocationAction::Create {
            organisation_id,
            name,
            longitude,
            latitude,
        } => {
            let location = state
                .location_service
                .create_location(organisation_id, name, longitude, latitude)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create location: {}", e))?;

            println!("{}", "✅ Location created".green().bold());
            print_locations(&[location]);
        }
        LocationAction::List {
            organisation_id,
            bbox,
        } => {
            let bbox = bbox
                .as_deref()
                .map(BoundingBox::parse)
                .transpose()
                .context("Invalid --bbox")?;

            let locations = state
                .location_service
                .list_locations(organisation_id, bbox)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list locations: {}", e))?;

            println!("{}", "📍 Locations".bright_blue().bold());
            println!();

            if locations.is_empty() {
                println!("{}", "  No locations found".yellow());
            } else {
                print_locations(&locations);
            }
        }
    }

    Ok(())
}

/// Displays organisation and location counts.
async fn handle_stats(state: &AppState) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (organisations, locations) = tokio::try_join!(
        state.organisation_service.count_organisations(),
        state.location_service.count_locations()
    )
    .map_err(|e| anyhow::anyhow!("Failed to count records: {}", e))?;

    println!(
        "  Organisations: {}",
        organisations.to_string().bright_green().bold()
    );
    println!(
        "  Locations:     {}",
        locations.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success = 1")
                    .fetch_one(pool)
                    .await?;

            println!("  SQLite:     {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

fn print_organisation(organisation: &Organisation) {
    println!("  ID:   {}", organisation.id.to_string().bright_black());
    println!("  Name: {}", organisation.name.cyan());
}

fn print_locations(locations: &[Location]) {
    println!(
        "  {:<5} {:<30} {:>12} {:>12}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Longitude".bright_white().bold(),
        "Latitude".bright_white().bold()
    );
    println!("  {}", "─".repeat(62).bright_black());

    for location in locations {
        println!(
            "  {:<5} {:<30} {:>12.6} {:>12.6}",
            location.id.to_string().bright_black(),
            location.name.cyan(),
            location.longitude,
            location.latitude
        );
    }
    println!();
}
