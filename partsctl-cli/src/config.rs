//! Config subcommand: init, show, path

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use partsctl_core::{Config, ConfigFile};

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a template config file to ~/.partsctl/config.toml
    Init(InitArgs),
    /// Show the resolved configuration (access key redacted)
    Show,
    /// Show the config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => run_path(),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path =
        Config::config_path().context("could not determine home directory")?;

    if config_path.exists() && !args.force {
        return Err(anyhow!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            config_path
        ));
    }

    let template = ConfigFile {
        endpoint_url: Some("https://your-project.supabase.co".to_string()),
        access_key: Some("your-access-key".to_string()),
    };
    template.write(&config_path)?;

    println!("Wrote {}", config_path.display());
    println!("Edit it with your remote endpoint URL and access key.");
    Ok(())
}

fn run_show() -> Result<()> {
    let config = Config::load()?;
    println!("endpoint_url: {}", config.endpoint_url);
    println!("access_key:   {}", redact(&config.access_key));
    Ok(())
}

fn run_path() -> Result<()> {
    let config_path =
        Config::config_path().context("could not determine home directory")?;
    println!("{}", config_path.display());
    Ok(())
}

/// Keep the first few characters so keys can be told apart
fn redact(key: &str) -> String {
    if key.len() <= 4 {
        return "****".to_string();
    }
    format!("{}****", &key[..4])
}
