mod menu;

pub use menu::*;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::AccountService;
use crate::domain::{Cents, format_cents, parse_cents};
use crate::storage::MemoryStore;

/// Tally - single-account balance ledger
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "View, credit and debit a single account balance from a text menu")]
#[command(version)]
pub struct Cli {
    /// Balance the account opens with (e.g., "1000.00")
    #[arg(long, default_value = "1000.00", value_parser = parse_cents, allow_hyphen_values = true)]
    pub opening_balance: Cents,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);
        tracing::info!(
            opening_balance = %format_cents(self.opening_balance),
            "starting session"
        );

        let service = AccountService::new(MemoryStore::with_balance(self.opening_balance));
        let stdin = io::stdin();
        let stdout = io::stdout();
        Menu::new(stdin.lock(), stdout.lock(), service).run()
    }
}

/// Install the global subscriber. Logs go to stderr so the menu owns stdout.
/// Silent unless `--verbose` is given or `RUST_LOG` is set.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tally=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
    };

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
