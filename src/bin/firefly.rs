//! CLI binary for smoke-testing the Firefly III API.

use core::time::Duration;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};
use firefly_rs::models::{AccountScope, AccountType, TransactionType};
use firefly_rs::repository::{CategoryRepository, CurrencyRepository, SummaryRepository};
use firefly_rs::transactions::Transaction;
use firefly_rs::{Ledger, PeriodWindow};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

/// Environment variable holding the server URL.
const URL_ENV: &str = "FIREFLY_URL";

/// Environment variable holding the personal access token.
const TOKEN_ENV: &str = "FIREFLY_TOKEN";

/// Environment variable holding the request timeout in seconds.
const TIMEOUT_ENV: &str = "FIREFLY_TIMEOUT";

/// Request timeout used when the environment does not set one.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Firefly III CLI: load the ledger cache and browse it.
#[derive(Debug, Parser)]
#[command(name = "firefly", version, about)]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// List accounts of one kind, or of every kind.
    Accounts {
        /// Account kind: all, asset, expense, revenue, liability, special.
        #[arg(default_value = "all", value_parser = parse_scope)]
        scope: AccountScope,
    },
    /// List all categories.
    Categories,
    /// List all currencies.
    Currencies,
    /// List the transactions of one month.
    Transactions(PeriodArgs),
    /// Search transactions with the server's query syntax.
    Search {
        /// Search query, e.g. `amount_more:100 category_is:Groceries`.
        query: String,
    },
    /// Show the basic summary of one month.
    Summary(PeriodArgs),
}

/// Month selection shared by period-scoped subcommands.
#[derive(Debug, Clone, Copy, Args)]
struct PeriodArgs {
    /// Year (defaults to the current month). Requires --month.
    #[arg(long, requires = "month")]
    year: Option<i32>,
    /// Month, 1-12. Requires --year.
    #[arg(long, requires = "year")]
    month: Option<u32>,
}

impl PeriodArgs {
    /// Resolves the requested window, defaulting to the current month.
    fn window(self) -> firefly_rs::Result<PeriodWindow> {
        match self.year.zip(self.month) {
            Some((year, month)) => PeriodWindow::new(year, month),
            None => PeriodWindow::current(),
        }
    }
}

/// Connection settings read from the environment.
#[derive(Debug)]
struct Config {
    /// Server URL.
    base_url: String,
    /// Personal access token.
    token: String,
    /// Per-request timeout.
    timeout: Duration,
}

/// Parses an account scope for clap.
fn parse_scope(s: &str) -> Result<AccountScope, String> {
    s.parse::<AccountScope>().map_err(|err| format!("{err}"))
}

/// Parses a timeout in whole seconds.
fn parse_timeout(s: &str) -> Result<Duration, String> {
    s.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|err| format!("invalid {TIMEOUT_ENV} value {s:?}: {err}"))
}

/// Reads a non-empty environment variable, reporting it when missing.
fn require_env(name: &str) -> io::Result<Option<String>> {
    if let Some(val) = std::env::var(name).ok().filter(|val| !val.is_empty()) {
        return Ok(Some(val));
    }
    let mut err = io::stderr().lock();
    writeln!(
        err,
        "{} {} environment variable is not set",
        "error:".red().bold(),
        name.bold()
    )?;
    writeln!(
        err,
        "  {} create a .env file with {}=<value>",
        "hint:".cyan(),
        name
    )?;
    Ok(None)
}

/// Reads the connection settings from the environment.
fn read_config() -> io::Result<Option<Config>> {
    let Some(base_url) = require_env(URL_ENV)? else {
        return Ok(None);
    };
    let Some(token) = require_env(TOKEN_ENV)? else {
        return Ok(None);
    };
    let timeout = match std::env::var(TIMEOUT_ENV) {
        Ok(raw) => match parse_timeout(&raw) {
            Ok(timeout) => timeout,
            Err(message) => {
                writeln!(io::stderr().lock(), "{} {message}", "error:".red().bold())?;
                return Ok(None);
            }
        },
        Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    };
    Ok(Some(Config {
        base_url,
        token,
        timeout,
    }))
}

/// Runs the CLI, returning an appropriate exit code.
async fn run() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let _dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let Some(config) = read_config()? else {
        return Ok(ExitCode::FAILURE);
    };

    let period = match cli.command {
        Command::Transactions(args) | Command::Summary(args) => args.window(),
        Command::Accounts { .. }
        | Command::Categories
        | Command::Currencies
        | Command::Search { .. } => PeriodWindow::current(),
    };
    let ledger = period.and_then(|window| {
        Ledger::builder()
            .base_url(config.base_url)
            .api_key(config.token)
            .timeout(config.timeout)
            .period(window)
            .build()
    });
    let mut ledger = match ledger {
        Ok(ledger) => ledger,
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to build client: {err}",
                "error:".red().bold()
            )?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let spinner = make_spinner("Loading ledger...");
    let loaded = ledger.bootstrap().await;
    spinner.finish_and_clear();
    if let Err(err) = loaded {
        writeln!(
            io::stderr().lock(),
            "{} failed to load ledger: {err}",
            "error:".red().bold()
        )?;
        return Ok(ExitCode::FAILURE);
    }

    dispatch(&ledger, cli.command).await
}

/// Dispatches to the appropriate subcommand handler.
async fn dispatch(ledger: &Ledger, command: Command) -> io::Result<ExitCode> {
    match command {
        Command::Accounts { scope } => {
            print_accounts_table(&mut io::stdout().lock(), ledger, scope)?;
        }
        Command::Categories => {
            print_categories_table(&mut io::stdout().lock(), ledger.categories())?;
        }
        Command::Currencies => {
            print_currencies_table(&mut io::stdout().lock(), ledger.currencies())?;
        }
        Command::Transactions(_) => {
            let title = format!("Transactions {}", ledger.period());
            let spinner = make_spinner("Fetching transactions...");
            let result = ledger.transactions().await;
            spinner.finish_and_clear();
            return report(&mut io::stdout().lock(), &title, result);
        }
        Command::Search { query } => {
            let title = format!("Search results for {query:?}");
            let spinner = make_spinner("Searching...");
            let result = ledger.search_transactions(&query).await;
            spinner.finish_and_clear();
            return report(&mut io::stdout().lock(), &title, result);
        }
        Command::Summary(_) => print_summary(&mut io::stdout().lock(), ledger, ledger.summary())?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Prints fetched transactions or the error that prevented it.
fn report<W: Write>(
    out: &mut W,
    title: &str,
    result: firefly_rs::Result<Vec<Transaction>>,
) -> io::Result<ExitCode> {
    match result {
        Ok(transactions) => {
            print_transactions_table(out, title, &transactions)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to read transactions: {err}",
                "error:".red().bold()
            )?;
            Ok(ExitCode::FAILURE)
        }
    }
}

// ── Output formatting ────────────────────────────────────────────────

/// Builds a table with the standard preset and a cyan header.
fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(
        header
            .iter()
            .map(|title| Cell::new(title).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
    table
}

/// Writes a green section title with an item count.
fn write_title<W: Write>(out: &mut W, title: &str, count: usize) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        title.green().bold(),
        format_args!("({count})").dimmed()
    )?;
    writeln!(out)
}

/// Formats an optional delta, with a dash when unknown.
fn format_delta(delta: Option<f64>) -> String {
    delta.map_or_else(|| "\u{2014}".to_owned(), |value| format!("{value:.2}"))
}

/// Prints accounts of the given scope in a table.
fn print_accounts_table<W: Write>(
    out: &mut W,
    ledger: &Ledger,
    scope: AccountScope,
) -> io::Result<()> {
    let accounts: Vec<_> = ledger
        .accounts()
        .all()
        .filter(|account| scope.includes(account.kind))
        .collect();
    if accounts.is_empty() {
        return writeln!(out, "{}", "No accounts found.".dimmed());
    }

    let mut table = new_table(&["Name", "Type", "Balance", "Currency", "Spent", "Earned"]);
    for account in &accounts {
        _ = table.add_row(vec![
            Cell::new(&account.name),
            Cell::new(account.kind),
            Cell::new(format!("{:.2}", account.balance)),
            Cell::new(&account.currency_code),
            Cell::new(format_delta(account.spent)).fg(Color::Red),
            Cell::new(format_delta(account.earned)).fg(Color::Green),
        ]);
    }

    write_title(out, "Accounts", accounts.len())?;
    writeln!(out, "{table}")
}

/// Prints categories in a table.
fn print_categories_table<W: Write>(out: &mut W, categories: &CategoryRepository) -> io::Result<()> {
    if categories.is_empty() {
        return writeln!(out, "{}", "No categories found.".dimmed());
    }

    let mut table = new_table(&["Name", "Notes"]);
    for category in categories.all() {
        _ = table.add_row(vec![Cell::new(&category.name), Cell::new(&category.notes)]);
    }

    write_title(out, "Categories", categories.len())?;
    writeln!(out, "{table}")
}

/// Prints currencies in a table, marking the primary one.
fn print_currencies_table<W: Write>(out: &mut W, currencies: &CurrencyRepository) -> io::Result<()> {
    if currencies.is_empty() {
        return writeln!(out, "{}", "No currencies found.".dimmed());
    }

    let primary = currencies.primary().map(|currency| &currency.id);
    let mut table = new_table(&["Code", "Name", "Symbol", "Primary"]);
    for currency in currencies.all() {
        let is_primary = primary == Some(&currency.id);
        _ = table.add_row(vec![
            Cell::new(&currency.code),
            Cell::new(&currency.name),
            Cell::new(&currency.symbol),
            Cell::new(if is_primary { "\u{2713}" } else { "" }).fg(Color::Green),
        ]);
    }

    write_title(out, "Currencies", currencies.len())?;
    writeln!(out, "{table}")
}

/// Picks the amount colour of a transaction type.
const fn amount_color(kind: TransactionType) -> Color {
    match kind {
        TransactionType::Withdrawal => Color::Red,
        TransactionType::Deposit => Color::Green,
        TransactionType::Transfer
        | TransactionType::Reconciliation
        | TransactionType::OpeningBalance
        | TransactionType::Other => Color::Reset,
    }
}

/// Prints reconstructed transactions in a table.
fn print_transactions_table<W: Write>(
    out: &mut W,
    title: &str,
    transactions: &[Transaction],
) -> io::Result<()> {
    if transactions.is_empty() {
        return writeln!(out, "{}", "No transactions found.".dimmed());
    }

    let mut table = new_table(&[
        "Date",
        "Description",
        "Source",
        "Destination",
        "Category",
        "Amount",
    ]);
    for tx in transactions {
        let date = tx
            .date
            .map_or_else(|| "\u{2014}".to_owned(), |date| date.format("%Y-%m-%d").to_string());
        _ = table.add_row(vec![
            Cell::new(date),
            Cell::new(tx.description()),
            Cell::new(tx.source().name()),
            Cell::new(tx.destination().name()),
            Cell::new(tx.category().name()),
            Cell::new(format!("{:.2} {}", tx.total_amount(), tx.currency()))
                .fg(amount_color(tx.kind)),
        ]);
    }

    write_title(out, title, transactions.len())?;
    writeln!(out, "{table}")
}

/// Prints the period summary and the top expense accounts.
fn print_summary<W: Write>(
    out: &mut W,
    ledger: &Ledger,
    summary: &SummaryRepository,
) -> io::Result<()> {
    let title = format!("Summary {}", ledger.period());
    if summary.is_empty() {
        return writeln!(out, "{}", "No summary available.".dimmed());
    }

    let mut table = new_table(&["Figure", "Value"]);
    for entry in summary.all() {
        let value = entry
            .value_parsed
            .clone()
            .unwrap_or_else(|| format!("{:.2} {}", entry.monetary_value, entry.currency_code));
        _ = table.add_row(vec![Cell::new(&entry.title), Cell::new(value)]);
    }
    write_title(out, &title, summary.all().len())?;
    writeln!(out, "{table}")?;

    let mut spending: Vec<_> = ledger
        .accounts_of_type(AccountType::Expense)
        .iter()
        .map(|account| (account.name.as_str(), ledger.expense_delta(&account.id)))
        .filter(|&(_, spent)| spent > 0.0_f64)
        .collect();
    spending.sort_by(|left, right| right.1.total_cmp(&left.1));
    if !spending.is_empty() {
        writeln!(out)?;
        let mut top = new_table(&["Expense account", "Spent"]);
        for &(name, spent) in &spending {
            _ = top.add_row(vec![Cell::new(name), Cell::new(format!("{spent:.2}")).fg(Color::Red)]);
        }
        writeln!(out, "{top}")?;
    }
    Ok(())
}

/// Creates a spinner with the given message.
fn make_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_owned());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Entry point.
#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => {
            let _ignored = writeln!(io::stderr(), "fatal I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered<F>(render: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        render(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    // ── argument parsing ──────────────────────────────────────────────

    #[test]
    fn parse_scope_accepts_all_and_kinds() {
        assert_eq!(parse_scope("all").unwrap(), AccountScope::All);
        assert_eq!(
            parse_scope("expense").unwrap(),
            AccountScope::Only(AccountType::Expense)
        );
        assert!(parse_scope("bogus").is_err());
    }

    #[test]
    fn parse_timeout_reads_seconds() {
        assert_eq!(parse_timeout(" 45 ").unwrap(), Duration::from_secs(45));
        assert!(parse_timeout("soon").is_err());
    }

    #[test]
    fn accounts_scope_defaults_to_all() {
        let cli = Cli::try_parse_from(["firefly", "accounts"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Accounts {
                scope: AccountScope::All
            }
        ));
    }

    #[test]
    fn period_flags_require_each_other() {
        assert!(Cli::try_parse_from(["firefly", "transactions", "--year", "2024"]).is_err());
        let cli =
            Cli::try_parse_from(["firefly", "summary", "--year", "2024", "--month", "2"]).unwrap();
        let Command::Summary(args) = cli.command else {
            panic!("expected summary command");
        };
        assert_eq!(args.window().unwrap(), PeriodWindow::new(2024, 2).unwrap());
    }

    #[test]
    fn invalid_month_is_reported() {
        let args = PeriodArgs {
            year: Some(2024),
            month: Some(13),
        };
        assert!(args.window().is_err());
    }

    // ── output formatting ─────────────────────────────────────────────

    #[test]
    fn format_delta_uses_dash_when_unknown() {
        assert_eq!(format_delta(None), "\u{2014}");
        assert_eq!(format_delta(Some(12.5)), "12.50");
    }

    #[test]
    fn empty_categories_print_placeholder() {
        let output = rendered(|out| print_categories_table(out, &CategoryRepository::new()));
        assert!(output.contains("No categories found."));
    }

    #[test]
    fn empty_transactions_print_placeholder() {
        let output = rendered(|out| print_transactions_table(out, "Transactions", &[]));
        assert!(output.contains("No transactions found."));
    }

    #[test]
    fn empty_currencies_print_placeholder() {
        let output = rendered(|out| print_currencies_table(out, &CurrencyRepository::new()));
        assert!(output.contains("No currencies found."));
    }

    #[test]
    fn amount_colors_follow_type() {
        assert_eq!(amount_color(TransactionType::Withdrawal), Color::Red);
        assert_eq!(amount_color(TransactionType::Deposit), Color::Green);
        assert_eq!(amount_color(TransactionType::Transfer), Color::Reset);
    }
}
