use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use shared::{domain::RecordId, protocol::Record};
use store::RecordStore;

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a starter record file.
    Init {
        #[arg(long, default_value = "./data/records.json")]
        path: PathBuf,
    },
    /// Print the records a service pointed at this file would serve.
    Show {
        #[arg(long, default_value = "./data/records.json")]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Init { path } => {
            if path.exists() {
                bail!(
                    "refusing to overwrite existing record file '{}'",
                    path.display()
                );
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create parent directory for '{}'", path.display())
                })?;
            }
            let starter: Vec<Record> = (1..=3)
                .map(|n| Record {
                    id: RecordId(n),
                    name: format!("Item {n}"),
                })
                .collect();
            let body = serde_json::to_string_pretty(&starter)?;
            fs::write(&path, body)
                .with_context(|| format!("failed to write record file '{}'", path.display()))?;
            println!("wrote {} records to {}", starter.len(), path.display());
        }
        Command::Show { path } => {
            let records = RecordStore::new(&path).load().await?;
            for record in &records {
                println!("{:>4}  {}", record.id.0, record.name);
            }
            println!("{} records", records.len());
        }
    }

    Ok(())
}
