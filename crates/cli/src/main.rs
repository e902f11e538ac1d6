//! Cartwheel CLI - Console front end for the shopping domain.
//!
//! # Usage
//!
//! ```bash
//! # Run the demonstration shopping session (the default command)
//! cartwheel demo
//! ```
//!
//! # Commands
//!
//! - `demo` - Run a fixed shopping session: stock three products, fill one
//!   user's cart, adjust it, check out, and view the emptied cart
//!
//! Operational logging goes through `tracing` and honors `RUST_LOG`;
//! storefront output goes to stdout.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "cartwheel")]
#[command(author, version, about = "Cartwheel shopping cart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demonstration shopping session
    Demo,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => commands::demo::run(),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}
