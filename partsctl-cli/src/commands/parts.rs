//! Part CRUD commands: list, show, add, update, rm, search
//!
//! Each command resolves the remote table client, performs exactly one
//! remote operation, and prints the result. No retries, no local state.

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};

use partsctl_core::{NewPart, Part, PartPatch, PartsClient};

// === Arg Structs ===

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Part identifier
    pub id: i64,
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Part name
    #[arg(long)]
    pub name: String,

    /// Quantity on hand
    #[arg(long)]
    pub quantity: i64,

    /// Unit rate
    #[arg(long)]
    pub rate: f64,

    /// Free-form description
    #[arg(long)]
    pub description: Option<String>,

    /// Warehouse location
    #[arg(long)]
    pub location: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image_url: Option<String>,
}

#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Part identifier
    pub id: i64,

    /// New part name
    #[arg(long)]
    pub name: Option<String>,

    /// New quantity
    #[arg(long)]
    pub quantity: Option<i64>,

    /// New unit rate
    #[arg(long)]
    pub rate: Option<f64>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New warehouse location
    #[arg(long)]
    pub location: Option<String>,

    /// New image URL
    #[arg(long)]
    pub image_url: Option<String>,
}

#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Part identifier
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SearchColumn {
    /// Match against the warehouse location
    Location,
    /// Match against the part name
    Name,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Substring to match (case-insensitive)
    pub query: String,

    /// Column to search
    #[arg(long, value_enum, default_value = "location")]
    pub by: SearchColumn,
}

// === Command Implementations ===

pub async fn run_list(client: &PartsClient) -> Result<()> {
    let parts = client.list_all().await?;
    print_table(&parts);
    Ok(())
}

pub async fn run_show(client: &PartsClient, args: ShowArgs) -> Result<()> {
    let part = client.get(args.id).await?;
    print_part(&part);
    Ok(())
}

pub async fn run_add(client: &PartsClient, args: AddArgs) -> Result<()> {
    let new_part = NewPart {
        part_name: args.name,
        description: args.description,
        quantity: args.quantity,
        rate: args.rate,
        image_url: args.image_url,
        warehouse_location: args.location,
    };

    let part = client.create(&new_part).await?;
    println!("Added part {}", part.id);
    print_part(&part);
    Ok(())
}

pub async fn run_update(client: &PartsClient, args: UpdateArgs) -> Result<()> {
    let patch = PartPatch {
        part_name: args.name,
        description: args.description.map(Some),
        quantity: args.quantity,
        rate: args.rate,
        image_url: args.image_url.map(Some),
        warehouse_location: args.location.map(Some),
    };

    if patch.is_empty() {
        return Err(anyhow!("nothing to update; pass at least one field flag"));
    }

    let part = client.update(args.id, &patch).await?;
    println!("Updated part {}", part.id);
    print_part(&part);
    Ok(())
}

pub async fn run_rm(client: &PartsClient, args: RmArgs) -> Result<()> {
    if !args.yes {
        let part = client.get(args.id).await?;
        let confirmed = inquire::Confirm::new(&format!(
            "Delete part {} (\"{}\")?",
            part.id, part.part_name
        ))
        .with_default(false)
        .prompt()?;

        if !confirmed {
            println!("Aborted");
            return Ok(());
        }
    }

    client.delete(args.id).await?;
    println!("Deleted part {}", args.id);
    Ok(())
}

pub async fn run_search(client: &PartsClient, args: SearchArgs) -> Result<()> {
    let parts = match args.by {
        SearchColumn::Location => client.search_by_location(&args.query).await?,
        SearchColumn::Name => client.search_by_name(&args.query).await?,
    };
    print_table(&parts);
    Ok(())
}

// === Output ===

fn print_table(parts: &[Part]) {
    if parts.is_empty() {
        println!("No parts found");
        return;
    }

    println!(
        "{:>6}  {:>10}  {:<24}  {:>8}  {:>10}  {:<18}",
        "ID", "SERIAL", "NAME", "QTY", "RATE", "LOCATION"
    );
    for part in parts {
        println!(
            "{:>6}  {:>10}  {:<24}  {:>8}  {:>10.2}  {:<18}",
            part.id,
            part.serial_number,
            part.part_name,
            part.quantity,
            part.rate,
            part.warehouse_location.as_deref().unwrap_or("-"),
        );
    }
    println!("\n{} part(s)", parts.len());
}

fn print_part(part: &Part) {
    println!("id:          {}", part.id);
    println!("serial:      {}", part.serial_number);
    println!("name:        {}", part.part_name);
    println!("description: {}", part.description.as_deref().unwrap_or("-"));
    println!("quantity:    {}", part.quantity);
    println!("rate:        {:.2}", part.rate);
    println!("location:    {}", part.warehouse_location.as_deref().unwrap_or("-"));
    println!("image:       {}", part.image_url.as_deref().unwrap_or("-"));
    println!("created:     {}", part.created_at.to_rfc3339());
    println!("updated:     {}", part.updated_at.to_rfc3339());
}
