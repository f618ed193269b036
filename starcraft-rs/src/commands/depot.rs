//! Depot file command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use console::style;

use sc2_objects::DepotFile;

use crate::utils::parse_hex_bytes;

#[derive(Subcommand)]
pub enum DepotCommands {
    /// Print the download URL of a depot descriptor
    Url {
        /// Descriptor bytes as hex (type code, server code, content hash)
        descriptor: String,
    },

    /// Show the decoded fields of a depot descriptor
    Info {
        /// Descriptor bytes as hex (type code, server code, content hash)
        descriptor: String,

        /// Print the fields as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn execute(command: DepotCommands) -> Result<()> {
    match command {
        DepotCommands::Url { descriptor } => execute_url(&descriptor),
        DepotCommands::Info { descriptor, json } => execute_info(&descriptor, json),
    }
}

fn decode(descriptor: &str) -> Result<DepotFile> {
    let bytes = parse_hex_bytes(descriptor)?;
    log::debug!("Decoding {} byte depot descriptor", bytes.len());
    DepotFile::from_bytes(&bytes).context("Failed to decode depot descriptor")
}

fn execute_url(descriptor: &str) -> Result<()> {
    let depot = decode(descriptor)?;
    println!("{}", depot.url());
    Ok(())
}

fn execute_info(descriptor: &str, json: bool) -> Result<()> {
    let depot = decode(descriptor)?;

    if json {
        let value = serde_json::json!({
            "server": depot.server(),
            "hash": depot.hash(),
            "type": depot.extension(),
            "url": depot.url(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Depot File");
    println!("==========");
    println!("Server: {}", style(depot.server()).cyan());
    println!("Type:   {}", style(depot.extension()).yellow());
    println!("Hash:   {}", depot.hash());
    println!("URL:    {}", depot.url());
    Ok(())
}
