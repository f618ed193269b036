//! Root CLI structure for starcraft-rs

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "starcraft-rs")]
#[command(about = "Command-line tools for StarCraft II replay objects", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Depot file operations
    Depot {
        #[command(subcommand)]
        command: crate::commands::depot::DepotCommands,
    },

    /// Lobby attribute operations
    Attribute {
        #[command(subcommand)]
        command: crate::commands::attribute::AttributeCommands,
    },

    /// Team and player identity operations
    Team {
        #[command(subcommand)]
        command: crate::commands::team::TeamCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
