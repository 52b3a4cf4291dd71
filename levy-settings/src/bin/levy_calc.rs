use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use levy_core::TaxableIncomeBasis;
use levy_core::calculations::common::parse_amount;
use levy_settings::{BracketTableLoader, Settings};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Statutory levy and payroll withholding calculator.
///
/// Uses the built-in default rates unless a settings file is given.
#[derive(Debug, Parser)]
#[command(name = "levy-calc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML settings file with levy rates, SSNIT rates and PAYE brackets
    #[arg(short, long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Itemize VAT, NHIL, GETFund and custom levies on a sale subtotal
    Sale {
        /// Pre-tax subtotal
        #[arg(long)]
        subtotal: String,
    },

    /// Compute SSNIT contributions and PAYE for one employee
    Payroll {
        /// Gross pay for the period
        #[arg(long)]
        gross: String,

        /// What income tax is charged on
        #[arg(long, value_enum)]
        basis: Basis,

        /// CSV file (lower_bound,upper_bound,rate) replacing the PAYE brackets
        #[arg(short, long)]
        brackets: Option<PathBuf>,
    },

    /// Print the built-in default settings as TOML
    Defaults,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Basis {
    /// Tax the full gross pay
    Gross,
    /// Tax gross pay less the employee SSNIT contribution
    NetOfEmployeeContribution,
}

impl From<Basis> for TaxableIncomeBasis {
    fn from(basis: Basis) -> Self {
        match basis {
            Basis::Gross => TaxableIncomeBasis::GrossPay,
            Basis::NetOfEmployeeContribution => TaxableIncomeBasis::GrossLessEmployeeContribution,
        }
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Writes to stderr so results on stdout stay pipeable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── output ──────────────────────────────────────────────────────────────────

fn print_line(
    label: &str,
    amount: Decimal,
) {
    println!("{label:<24}{:>14}", format!("{amount:.2}"));
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings: {}", path.display()))?,
        None => {
            debug!("no settings file given, using defaults");
            Settings::default()
        }
    };

    match cli.command {
        Command::Sale { subtotal } => {
            let subtotal = parse_amount("subtotal", &subtotal)?;
            let breakdown = settings
                .tax_calculator()
                .compute(subtotal)
                .context("Failed to compute levies")?;

            print_line("Subtotal", breakdown.subtotal);
            for line in breakdown.line_items() {
                print_line(&line.name, line.amount);
            }
            print_line("Total levies", breakdown.total_levies);
            print_line("Total", breakdown.total_amount);
        }
        Command::Payroll {
            gross,
            basis,
            brackets,
        } => {
            let gross_pay = parse_amount("gross_pay", &gross)?;
            let settings = match brackets {
                Some(path) => {
                    let table = BracketTableLoader::load_file(&path)
                        .with_context(|| format!("Failed to load brackets: {}", path.display()))?;
                    settings.with_income_tax_brackets(table)
                }
                None => settings,
            };

            let breakdown = settings
                .payroll_calculator()
                .calculate(gross_pay, basis.into())
                .context("Failed to compute payroll withholding")?;

            print_line("Gross pay", breakdown.gross_pay);
            print_line("Employee SSNIT", breakdown.employee_contribution);
            print_line("Employer SSNIT", breakdown.employer_contribution);
            print_line("Taxable income", breakdown.taxable_income);
            print_line("Income tax (PAYE)", breakdown.income_tax);
            print_line("Net pay", breakdown.net_pay);
        }
        Command::Defaults => {
            print!("{}", Settings::default().to_toml_string()?);
        }
    }

    Ok(())
}
