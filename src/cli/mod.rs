// Passforge — CLI Module
//
// Command-line interface using clap derive macros.
// Subcommands: generate, types.

mod commands;

use clap::{Parser, Subcommand};

pub use commands::execute;

/// Passforge — deterministic site passwords from one master password.
#[derive(Parser, Debug)]
#[command(name = "passforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive and print the password for one site, then forget everything.
    Generate {
        /// The user name the master password belongs to.
        #[arg(long)]
        user: String,

        /// The site name (e.g., "example.com").
        #[arg(long)]
        site: String,

        /// The rotation counter for this site (bump it to get a new password).
        #[arg(long, default_value = "1")]
        counter: u32,

        /// The password type: maximum-security, long, medium, short, basic,
        /// pin, name, or phrase.
        #[arg(long = "type", default_value = "long")]
        site_type: String,

        /// The master password. Omit to be prompted on stdin — passing it
        /// as an argument exposes it to shell history and process listings.
        #[arg(long)]
        password: Option<String>,
    },

    /// List the available password types and their template shapes.
    Types {
        /// Emit machine-readable JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}
