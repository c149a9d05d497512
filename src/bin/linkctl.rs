//! Command-line client for the link registry.
//!
//! Runs registry operations directly against the configured storage, without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin linkctl -- encode https://example.com
//!
//! # Resolve a short URL (counts a click)
//! cargo run --bin linkctl -- decode http://sho.rt/k3x9za
//!
//! # Rename to a custom alias
//! cargo run --bin linkctl -- custom http://sho.rt/k3x9za launch-2025
//!
//! # Show click count
//! cargo run --bin linkctl -- stats http://sho.rt/launch-2025
//!
//! # Walk through every operation against a throwaway in-memory registry
//! cargo run --bin linkctl -- demo
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `link_registry::config`). With the default
//! `memory` backend nothing survives between invocations, so set
//! `STORAGE_BACKEND=postgres` for anything but `demo`.

use link_registry::config::{self, StorageBackend};
use link_registry::domain::repositories::MappingRepository;
use link_registry::infrastructure::persistence::MemoryMappingRepository;
use link_registry::server::{build_registry, connect_storage};
use link_registry::{LinkRegistry, RegistryError};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for the link registry.
#[derive(Parser)]
#[command(name = "linkctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a long URL
    Encode {
        /// The URL to shorten
        long_url: String,
    },

    /// Resolve a short URL and count the click
    Decode {
        /// Short URL including the base prefix
        short_url: String,
    },

    /// Rename a short URL to a custom alias
    Custom {
        /// Short URL including the base prefix
        short_url: String,

        /// New alias (letters, digits, '_' or '-', up to 64 characters)
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the click count of a short URL
    Stats {
        /// Short URL including the base prefix
        short_url: String,
    },

    /// Run a scripted walkthrough on an in-memory registry
    Demo,
}

type Registry = LinkRegistry<dyn MappingRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { long_url } => {
            let registry = configured_registry().await?;
            let short_url = registry.encode(&long_url).await?;
            println!("{} {}", "Short URL:".bright_white().bold(), short_url.cyan());
        }
        Commands::Decode { short_url } => {
            let registry = configured_registry().await?;
            let long_url = registry.decode(&short_url).await?;
            println!("{} {}", "Long URL:".bright_white().bold(), long_url.cyan());
        }
        Commands::Custom {
            short_url,
            alias,
            yes,
        } => {
            let registry = configured_registry().await?;
            rename(&registry, &short_url, &alias, yes).await?;
        }
        Commands::Stats { short_url } => {
            let registry = configured_registry().await?;
            let clicks = registry.get_click_stats(&short_url).await?;
            println!(
                "{} {}",
                "Clicks:".bright_white().bold(),
                clicks.to_string().bright_yellow()
            );
        }
        Commands::Demo => {
            let repository: Arc<dyn MappingRepository> = Arc::new(MemoryMappingRepository::new());
            let registry = LinkRegistry::new(repository, config::DEFAULT_BASE_URL);
            run_demo(&registry).await?;
        }
    }

    Ok(())
}

/// Opens the registry described by the environment.
async fn configured_registry() -> Result<Registry> {
    let config = config::load_from_env()?;

    if config.storage_backend == StorageBackend::Memory {
        println!(
            "{}",
            "⚠️  Using in-memory storage: results are discarded when linkctl exits".yellow()
        );
    }

    let repository = connect_storage(&config).await?;
    Ok(build_registry(&config, repository))
}

/// Renames a short URL after an optional confirmation prompt.
///
/// The old short URL stops working immediately, so the prompt spells that out.
async fn rename(
    registry: &Registry,
    short_url: &str,
    alias: &str,
    skip_confirm: bool,
) -> Result<()> {
    let target = registry.short_url_for(alias);

    println!("{}", "Rename short URL".bright_blue().bold());
    println!("  From: {}", short_url.cyan());
    println!("  To:   {}", target.cyan());
    println!();
    println!("{}", "⚠️  The old short URL will stop resolving.".red().bold());

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Rename this short URL?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let new_short_url = registry.make_custom(short_url, alias).await?;
    println!("{} {}", "✅ Renamed to".green().bold(), new_short_url.cyan());

    Ok(())
}

/// Prints the outcome of one demo step.
fn report<T: std::fmt::Display>(step: &str, result: Result<T, RegistryError>) {
    match result {
        Ok(value) => println!(
            "  {} {}",
            format!("{step}:").bright_white(),
            value.to_string().cyan()
        ),
        Err(e) => println!(
            "  {} {} ({})",
            format!("{step}:").bright_white(),
            e.to_string().red(),
            e.kind().yellow()
        ),
    }
}

/// Exercises every registry operation, including each failure mode.
async fn run_demo(registry: &Registry) -> Result<()> {
    println!("{}", "Link registry walkthrough".bright_blue().bold());
    println!();

    let first = registry
        .encode("https://hello.com/something?is_new=true")
        .await?;
    let second = registry
        .encode("https://hello.com/shopping?auth=false")
        .await?;

    println!("{}", "Encoding".bright_white().bold());
    report("first URL", Ok::<_, RegistryError>(&first));
    report("second URL", Ok::<_, RegistryError>(&second));
    report(
        "first URL again",
        registry.encode("https://hello.com/something?is_new=true").await,
    );
    println!();

    println!("{}", "Decoding and renaming".bright_white().bold());
    report("decode first", registry.decode(&first).await);
    let custom = registry.make_custom(&first, "customAlias").await?;
    report("custom alias", Ok::<_, RegistryError>(&custom));
    report("clicks on alias", registry.get_click_stats(&custom).await);

    for _ in 0..5 {
        registry.decode(&second).await?;
    }
    report("clicks on second", registry.get_click_stats(&second).await);
    println!();

    println!("{}", "Failure modes".bright_white().bold());
    report("encode empty", registry.encode("").await);
    report("decode unprefixed", registry.decode("invalid-url").await);
    report(
        "decode unknown",
        registry.decode(&registry.short_url_for("unknownkey")).await,
    );
    report("decode renamed", registry.decode(&first).await);
    report("alias empty", registry.make_custom(&custom, "").await);
    report(
        "alias with spaces",
        registry.make_custom(&custom, "invalid alias!").await,
    );
    report(
        "alias for unknown",
        registry
            .make_custom(&registry.short_url_for("nonexistent"), "alias")
            .await,
    );
    report(
        "alias taken",
        registry.make_custom(&second, "customAlias").await,
    );
    report(
        "stats unknown",
        registry
            .get_click_stats(&registry.short_url_for("unknown"))
            .await,
    );

    Ok(())
}
