//! Pizza Box CLI - database migrations and seeding.
//!
//! # Usage
//!
//! ```bash
//! # Run admin database migrations
//! pizza-box migrate admin
//!
//! # Run storefront (session) database migrations
//! pizza-box migrate storefront
//!
//! # Run all database migrations
//! pizza-box migrate all
//!
//! # Write the launch settings and a starter menu
//! pizza-box seed
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed the admin database with launch settings and a starter menu

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pizza-box")]
#[command(author, version, about = "The Pizza Box CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        target: MigrateTarget,
    },
    /// Seed the admin database with launch settings and a starter menu
    Seed,
}

#[derive(Subcommand)]
enum MigrateTarget {
    /// Run storefront (session) database migrations
    Storefront,
    /// Run admin database migrations
    Admin,
    /// Run all database migrations
    All,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate { target } => match target {
            MigrateTarget::Storefront => commands::migrate::storefront().await?,
            MigrateTarget::Admin => commands::migrate::admin().await?,
            MigrateTarget::All => {
                commands::migrate::storefront().await?;
                commands::migrate::admin().await?;
            }
        },
        Commands::Seed => commands::seed::run().await?,
    }
    Ok(())
}
