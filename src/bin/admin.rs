//! CLI administration tool for valentine-links.
//!
//! Creates and inspects Valentine links directly against the database,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a link (prompts for missing values)
//! cargo run --bin admin -- link create --slug anna-2026 --name Anna --theme cute
//!
//! # Show a link
//! cargo run --bin admin -- link show anna-2026
//!
//! # Check whether a slug is free
//! cargo run --bin admin -- link check anna-2026
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `BASE_URL` (optional): used to print absolute page URLs

use valentine_links::application::services::{LinkService, SlugAvailability};
use valentine_links::domain::entities::{Link, LinkStatus, Theme};
use valentine_links::domain::repositories::LinkRepository;
use valentine_links::infrastructure::persistence::PgLinkRepository;
use valentine_links::utils::url_builder::{full_url, parse_base_url};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Select};
use sqlx::PgPool;
use std::sync::Arc;
use url::Url;

/// CLI tool for managing valentine-links.
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
    /// Manage Valentine links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Claim a slug and create a link
    Create {
        /// Slug (3-64 chars, lowercase letters, digits and hyphens)
        #[arg(short, long)]
        slug: Option<String>,

        /// Recipient name shown on the page
        #[arg(short, long)]
        name: Option<String>,

        /// Page theme: classic, cute or elegant
        #[arg(short, long)]
        theme: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show a link
    Show { slug: String },

    /// Check whether a slug is available
    Check { slug: String },
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

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let base_url = std::env::var("BASE_URL")
        .ok()
        .map(|raw| parse_base_url(&raw))
        .transpose()
        .context("BASE_URL is invalid")?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool, base_url.as_ref()).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool, base_url: Option<&Url>) -> Result<()> {
    let repo: Arc<dyn LinkRepository> = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::new(repo);

    match action {
        LinkAction::Create {
            slug,
            name,
            theme,
            yes,
        } => create_link(&service, base_url, slug, name, theme, yes).await?,
        LinkAction::Show { slug } => show_link(&service, base_url, &slug).await?,
        LinkAction::Check { slug } => check_slug(&service, &slug).await?,
    }

    Ok(())
}

/// Creates a link with interactive prompts for missing values.
///
/// The same rules as `POST /api/create-link` apply; validation and
/// conflict errors are printed as-is.
async fn create_link(
    service: &LinkService,
    base_url: Option<&Url>,
    slug: Option<String>,
    name: Option<String>,
    theme: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "💌 Create Valentine Link".bright_blue().bold());
    println!();

    let slug = match slug {
        Some(s) => s,
        None => Input::new().with_prompt("Slug").interact_text()?,
    };

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Recipient name").interact_text()?,
    };

    let theme = match theme {
        Some(t) => t,
        None => {
            let names: Vec<&str> = Theme::ALL.iter().map(|t| t.as_str()).collect();
            let idx = Select::new()
                .with_prompt("Theme")
                .items(&names)
                .default(0)
                .interact()?;
            names[idx].to_string()
        }
    };

    println!();
    println!("{}", "Link details:".bright_white().bold());
    println!("  Slug:      {}", slug.cyan());
    println!("  Recipient: {}", name.cyan());
    println!("  Theme:     {}", theme.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let link = service
        .create_link(&slug, &name, &theme)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!();
    println!("{}", "✅ Link created successfully!".green().bold());
    println!(
        "  {}",
        full_url(base_url, &link.slug).bright_yellow().bold()
    );
    println!();

    Ok(())
}

/// Prints a single link.
async fn show_link(service: &LinkService, base_url: Option<&Url>, slug: &str) -> Result<()> {
    let link = service
        .get_link_by_slug(slug)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_link(&link, base_url);

    Ok(())
}

fn print_link(link: &Link, base_url: Option<&Url>) {
    let status = match link.status() {
        LinkStatus::Accepted => "ACCEPTED".green(),
        LinkStatus::Pending => "PENDING".yellow(),
    };

    println!("{}", "💌 Valentine Link".bright_blue().bold());
    println!();
    println!("  Slug:      {}", link.slug.cyan());
    println!("  Recipient: {}", link.recipient_name.cyan());
    println!("  Theme:     {}", link.theme.as_str());
    println!(
        "  Created:   {}",
        link.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!("  Status:    {}", status);
    println!("  URL:       {}", full_url(base_url, &link.slug).bright_yellow());
    println!();
}

/// Reports slug availability.
async fn check_slug(service: &LinkService, slug: &str) -> Result<()> {
    let availability = service
        .check_availability(slug)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    match availability {
        SlugAvailability::Available => {
            println!("{} {}", "✅".green(), format!("'{}' is available", slug).green())
        }
        SlugAvailability::Taken => {
            println!("{} {}", "⛔".red(), format!("'{}' is taken", slug).red())
        }
    }

    Ok(())
}

/// Displays link statistics.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let repo = PgLinkRepository::new(Arc::new(pool.clone()));
    let counts = repo
        .count_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!(
        "  Links:    {}",
        counts.total.to_string().bright_green().bold()
    );
    println!(
        "  Accepted: {}",
        counts.accepted.to_string().bright_green().bold()
    );
    println!(
        "  Pending:  {}",
        (counts.total - counts.accepted)
            .to_string()
            .bright_yellow()
            .bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
