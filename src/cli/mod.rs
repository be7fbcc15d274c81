use std::io::{self, IsTerminal};

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

mod line;
mod render;
mod session;

pub use line::split_line;
pub use render::{EMPTY_VIEW, OutputFormat, write_balance, write_transactions};
pub use session::{Command, Flow, Session, Settings, local_today};

/// Tally - in-memory income and expense ledger
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Record income and expenses and keep a running balance")]
#[command(
    long_about = "Record income and expenses and keep a running balance.\n\n\
    Reads one command per line from stdin (add, delete, filter, list, balance, quit). \
    Nothing is saved: the ledger lives only as long as the process."
)]
#[command(version)]
pub struct Cli {
    /// Currency label shown next to amounts
    #[arg(short, long, default_value = "Rs")]
    pub currency: String,

    /// Default output format for `list`: table, json, csv
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn settings(&self) -> Result<Settings> {
        let format = OutputFormat::from_str(&self.format).ok_or_else(|| {
            anyhow!(
                "Unknown format '{}', expected table, json or csv",
                self.format
            )
        })?;

        Ok(Settings {
            currency: self.currency.clone(),
            format,
        })
    }

    /// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
    pub fn init_logging(&self) {
        let default_level = if self.verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("tally={}", default_level)));

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .with_filter(filter),
            )
            .init();
    }

    pub fn run(self) -> Result<()> {
        let settings = self.settings()?;
        let stdin = io::stdin();
        let prompt = stdin.is_terminal();

        tracing::info!(
            currency = %settings.currency,
            format = settings.format.as_str(),
            "session started"
        );
        let mut session = Session::new(settings, io::stdout().lock());
        session.run(stdin.lock(), prompt)?;
        tracing::info!(entries = session.ledger().len(), "session ended");
        Ok(())
    }
}
