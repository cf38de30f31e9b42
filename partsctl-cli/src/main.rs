//! partsctl CLI - Inventory part management against a remote table
//!
//! Scriptable twin of the partsctl TUI: every subcommand maps to exactly one
//! operation on the remote `parts` table (list, show, add, update, rm,
//! search), plus config management and shell completions.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use partsctl_core::{Config, PartsClient};

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "partsctl",
    author,
    version,
    about = "Manage inventory parts stored in a remote table",
    long_about = "List, search, create, edit, and delete part records stored in a hosted \
                  remote table. Configure the endpoint with PARTSCTL_URL and PARTSCTL_KEY \
                  or ~/.partsctl/config.toml."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all parts, ordered by name
    List,
    /// Show a single part by identifier
    Show(commands::ShowArgs),
    /// Add a new part
    Add(commands::AddArgs),
    /// Update fields on an existing part
    Update(commands::UpdateArgs),
    /// Delete a part (asks for confirmation without --yes)
    Rm(commands::RmArgs),
    /// Search parts by location or name substring
    Search(commands::SearchArgs),
    /// Manage partsctl configuration (init, show, path)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        // Commands that do not touch the remote table
        Commands::Config(args) => config::run_config(args),
        Commands::Completions(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "partsctl",
                &mut std::io::stdout(),
            );
            Ok(())
        }

        command => {
            let config = Config::load()?;
            tracing::debug!(endpoint = %config.endpoint_url, "resolved remote endpoint");
            let client = PartsClient::from_config(&config);

            match command {
                Commands::List => commands::run_list(&client).await,
                Commands::Show(args) => commands::run_show(&client, args).await,
                Commands::Add(args) => commands::run_add(&client, args).await,
                Commands::Update(args) => commands::run_update(&client, args).await,
                Commands::Rm(args) => commands::run_rm(&client, args).await,
                Commands::Search(args) => commands::run_search(&client, args).await,
                Commands::Config(_) | Commands::Completions(_) => unreachable!(),
            }
        }
    }
}
