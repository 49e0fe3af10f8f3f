//! Chef Farah Ammar CLI - order management over the shared data directory.
//!
//! # Usage
//!
//! ```bash
//! # List orders, most recent first
//! farah-cli orders list
//!
//! # Mark an order delivered
//! farah-cli orders done ord-1760000000000
//!
//! # Write a printable invoice
//! farah-cli orders invoice ord-1760000000000 --lang en --out invoice.html
//! ```
//!
//! # Commands
//!
//! - `orders list` - Show stats and every order
//! - `orders done` - Mark an order delivered
//! - `orders invoice` - Render an order's invoice as HTML

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "farah-cli")]
#[command(author, version, about = "Chef Farah Ammar order tools")]
struct Cli {
    /// Data directory shared with the storefront
    #[arg(long, env = "FARAH_DATA_DIR", default_value = "data", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage submitted orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders with dashboard stats
    List {
        /// Only show orders that are not delivered yet
        #[arg(long)]
        pending: bool,
    },
    /// Mark an order delivered
    Done {
        /// Order id, e.g. ord-1760000000000
        id: String,
    },
    /// Render an order's invoice as HTML
    Invoice {
        /// Order id
        id: String,

        /// Invoice language (`en` or `ar`)
        #[arg(short, long, default_value = "ar")]
        lang: String,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::orders::OrdersError> {
    let ledger = commands::orders::open_ledger(&cli.data_dir)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Orders { action } => match action {
            OrdersAction::List { pending } => {
                commands::orders::list(&ledger, pending, &mut stdout)?;
            }
            OrdersAction::Done { id } => commands::orders::mark_done(&ledger, &id)?,
            OrdersAction::Invoice { id, lang, out } => {
                let html = commands::orders::invoice(&ledger, &id, &lang)?;
                match out {
                    Some(path) => {
                        std::fs::write(&path, html)?;
                        tracing::info!("Invoice written to {}", path.display());
                    }
                    None => commands::orders::write_all(&mut stdout, &html)?,
                }
            }
        },
    }
    Ok(())
}
