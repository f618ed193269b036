//! Lobby attribute command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use console::style;
use prettytable::{Table, format, row};
use std::fs;
use std::path::{Path, PathBuf};

use sc2_objects::{Attribute, AttributeRegistry};

use crate::utils::{parse_hex_bytes, parse_id};

#[derive(Subcommand)]
pub enum AttributeCommands {
    /// Decode a raw lobby attribute value
    Decode {
        /// Attribute id, decimal or 0x-prefixed hex (e.g., 0x0BB9)
        id: String,

        /// Raw value as stored in the replay (e.g., "torP")
        value: String,

        /// Treat the value as hex bytes instead of text
        #[arg(long)]
        hex: bool,

        /// Player slot the attribute belongs to
        #[arg(short, long)]
        player: Option<u8>,

        /// Attribute block header value
        #[arg(long, default_value_t = 999)]
        header: u32,

        /// Registry file to use instead of the built-in table
        #[arg(short, long, value_name = "FILE")]
        registry: Option<PathBuf>,
    },

    /// List known attribute ids
    List {
        /// Show every value code of each attribute
        #[arg(long)]
        values: bool,

        /// Registry file to use instead of the built-in table
        #[arg(short, long, value_name = "FILE")]
        registry: Option<PathBuf>,
    },

    /// Write the registry as YAML
    Dump {
        /// Output file (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Registry file to use instead of the built-in table
        #[arg(short, long, value_name = "FILE")]
        registry: Option<PathBuf>,
    },
}

pub fn execute(command: AttributeCommands) -> Result<()> {
    match command {
        AttributeCommands::Decode {
            id,
            value,
            hex,
            player,
            header,
            registry,
        } => execute_decode(&id, &value, hex, player, header, registry.as_deref()),
        AttributeCommands::List { values, registry } => execute_list(values, registry.as_deref()),
        AttributeCommands::Dump { output, registry } => {
            execute_dump(output.as_deref(), registry.as_deref())
        }
    }
}

fn load_registry(path: Option<&Path>) -> Result<AttributeRegistry> {
    match path {
        Some(path) => AttributeRegistry::from_yaml(path)
            .with_context(|| format!("Failed to load registry: {}", path.display())),
        None => Ok(AttributeRegistry::shared().clone()),
    }
}

fn execute_decode(
    id: &str,
    value: &str,
    hex: bool,
    player: Option<u8>,
    header: u32,
    registry: Option<&Path>,
) -> Result<()> {
    let registry = load_registry(registry)?;
    let id = parse_id(id)?;
    let raw = if hex {
        parse_hex_bytes(value)?
    } else {
        value.as_bytes().to_vec()
    };

    let attribute = Attribute::decode(&registry, header, id, player, &raw)
        .with_context(|| format!("Failed to decode attribute {:#06X}", id))?;

    println!("{}", attribute);
    Ok(())
}

fn execute_list(values: bool, registry: Option<&Path>) -> Result<()> {
    let registry = load_registry(registry)?;

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    if values {
        table.set_titles(row![b->"Id", b->"Name", b->"Code", b->"Value"]);
    } else {
        table.set_titles(row![b->"Id", b->"Name", b->"Values"]);
    }

    for (id, property) in registry.iter() {
        let id = format!("{:#06X}", id);
        if !values {
            table.add_row(row![id, property.name, property.len()]);
            continue;
        }

        let mut codes: Vec<(String, &str)> = property
            .values()
            .map(|(code, value)| (String::from_utf8_lossy(code).into_owned(), value))
            .collect();
        codes.sort();
        for (code, value) in codes {
            table.add_row(row![id, property.name, format!("{:?}", code), value]);
        }
    }

    table.printstd();
    println!(
        "\n{} attribute ids",
        style(registry.len().to_string()).green()
    );
    Ok(())
}

fn execute_dump(output: Option<&Path>, registry: Option<&Path>) -> Result<()> {
    let registry = load_registry(registry)?;
    let yaml = registry
        .to_yaml_string()
        .context("Failed to serialize registry")?;

    match output {
        Some(path) => {
            fs::write(path, yaml)
                .with_context(|| format!("Failed to write registry: {}", path.display()))?;
            log::info!("Wrote {} attribute ids to {}", registry.len(), path.display());
        }
        None => print!("{}", yaml),
    }
    Ok(())
}
