use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::application::{AppError, DATE_FORMAT, EntryForm};
use crate::domain::{Filter, Ledger, TransactionId, format_amount, format_signed};

use super::line::split_line;
use super::render::{OutputFormat, write_balance, write_transactions};

/// One line of input, parsed as a ledger command.
#[derive(Parser, Debug)]
#[command(name = "tally", no_binary_name = true, disable_version_flag = true)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a credit or debit
    Add {
        /// What the money was for
        description: String,

        /// Amount (e.g., "50.00" or "50")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Transaction kind: credit or debit (defaults to the last kind used)
        #[arg(
            short = 'k',
            long = "kind",
            visible_short_alias = 't',
            visible_alias = "type"
        )]
        kind: Option<String>,

        /// Date of the transaction (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete a transaction by id
    #[command(visible_alias = "rm")]
    Delete {
        /// Transaction id as shown by `list`
        id: String,
    },

    /// Choose which transactions `list` shows: all, credit, debit
    Filter { filter: String },

    /// Show the transactions matching the current filter
    List {
        /// Output format: table, json, csv
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show the current balance
    Balance,

    /// End the session
    #[command(visible_alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Display settings for a session.
#[derive(Debug, Clone)]
pub struct Settings {
    pub currency: String,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "Rs".to_string(),
            format: OutputFormat::Table,
        }
    }
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Owns the ledger for the lifetime of the process and applies one command
/// at a time. Each command finishes, output included, before the next line
/// is read.
pub struct Session<W: Write> {
    ledger: Ledger,
    form: EntryForm,
    settings: Settings,
    clock: fn() -> NaiveDate,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(settings: Settings, out: W) -> Self {
        Self::with_clock(settings, out, local_today)
    }

    pub fn with_clock(settings: Settings, out: W, clock: fn() -> NaiveDate) -> Self {
        Self {
            ledger: Ledger::new(),
            form: EntryForm::new(clock()),
            settings,
            clock,
            out,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Execute every line of `input` until it ends or a `quit` command.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: bool) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read input")?;
            if self.execute(&line)? == Flow::Quit {
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Execute a single input line.
    ///
    /// Rejected input is reported on the output and the session carries on;
    /// only output failures are returned as errors.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let args = match split_line(line) {
            Ok(args) => args,
            Err(msg) => {
                writeln!(self.out, "error: {}", msg)?;
                return Ok(Flow::Continue);
            }
        };

        let command = match CommandLine::try_parse_from(args) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                write!(self.out, "{}", err.render())?;
                return Ok(Flow::Continue);
            }
        };

        tracing::debug!(?command, "executing command");
        match self.dispatch(command) {
            Ok(flow) => Ok(flow),
            Err(err) => match err.downcast::<AppError>() {
                Ok(app_err) => {
                    writeln!(self.out, "error: {}", app_err)?;
                    Ok(Flow::Continue)
                }
                Err(other) => Err(other),
            },
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Add {
                description,
                amount,
                kind,
                date,
            } => {
                let today = (self.clock)();
                let previous = self.form.clone();

                self.form.description = description;
                self.form.amount = amount;
                if let Some(kind) = kind {
                    self.form.kind = kind;
                }
                self.form.date = match date {
                    Some(date) => date,
                    None => today.format(DATE_FORMAT).to_string(),
                };

                // A rejected line leaves no trace in the form.
                let transaction = match self.form.submit(&mut self.ledger, today) {
                    Ok(transaction) => transaction,
                    Err(err) => {
                        self.form = previous;
                        return Err(err.into());
                    }
                };

                writeln!(
                    self.out,
                    "Added #{}: {} {} on {}",
                    transaction.id,
                    transaction.description,
                    format_signed(transaction.amount, transaction.kind, &self.settings.currency),
                    transaction.date.format(DATE_FORMAT)
                )?;
                self.write_balance_line()?;
            }

            Command::Delete { id } => {
                let id: TransactionId = id.parse().map_err(|_| {
                    AppError::Validation(format!("invalid transaction id '{}'", id))
                })?;
                let removed = self.ledger.remove(id).map_err(AppError::from)?;

                writeln!(self.out, "Deleted #{}: {}", removed.id, removed.description)?;
                self.write_balance_line()?;
            }

            Command::Filter { filter } => {
                let filter = Filter::from_str(&filter).ok_or_else(|| {
                    AppError::Validation(format!(
                        "unknown filter '{}', expected all, credit or debit",
                        filter
                    ))
                })?;
                self.ledger.set_filter(filter);

                writeln!(self.out, "Showing {} transactions", filter)?;
                self.write_view(self.settings.format)?;
            }

            Command::List { format } => {
                let format = match format {
                    Some(f) => OutputFormat::from_str(&f).ok_or_else(|| {
                        AppError::Validation(format!(
                            "unknown format '{}', expected table, json or csv",
                            f
                        ))
                    })?,
                    None => self.settings.format,
                };
                self.write_view(format)?;
            }

            Command::Balance => {
                write_balance(&mut self.out, &self.ledger.totals(), &self.settings.currency)?;
            }

            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn write_view(&mut self, format: OutputFormat) -> Result<()> {
        let view = self.ledger.filtered_view();
        write_transactions(&mut self.out, &view, format, &self.settings.currency)
    }

    fn write_balance_line(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "Balance: {}",
            format_amount(self.ledger.balance(), &self.settings.currency)
        )?;
        Ok(())
    }
}
