use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use costwise::cli::{
    handle_expense_command, handle_income_command, handle_project, handle_states, handle_summary,
    handle_tax, ExpenseCommands, IncomeCommands,
};
use costwise::config::CostwisePaths;

#[derive(Parser)]
#[command(
    name = "costwise",
    version,
    about = "Track recurring wants and needs against your income",
    long_about = "costwise records your recurring expenses, tags them as wants or \
                  essential needs, and shows their yearly-equivalent cost as a share \
                  of your income, gross or after a flat-rate state tax estimate."
)]
struct Cli {
    /// Snapshot file holding the income profile and expenses
    #[arg(long, global = true, env = "COSTWISE_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a single amount across every cadence as a share of income
    Project {
        /// Cost per occurrence, e.g. "15.99"
        amount: String,

        /// Gross yearly income used as the denominator
        #[arg(short, long)]
        income: String,

        /// US state; when known, the after-tax estimate is used instead
        #[arg(short, long)]
        state: Option<String>,
    },

    /// Estimate after-tax income for a state
    Tax {
        /// US state name, e.g. "Texas"
        state: String,

        /// Gross yearly income
        #[arg(short, long)]
        gross: String,
    },

    /// List the supported states and their flat tax rates
    States,

    /// Show the financial summary and spending advisories
    Summary {
        /// Show at most this many advisories (most severe first)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Income profile commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense record commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Show where costwise keeps its data
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CostwisePaths::new()?;
    let snapshot_path = match cli.file {
        Some(path) => path,
        None => {
            paths.ensure_directories()?;
            paths.snapshot_file()
        }
    };

    match cli.command {
        Commands::Project {
            amount,
            income,
            state,
        } => handle_project(&amount, &income, state.as_deref())?,
        Commands::Tax { state, gross } => handle_tax(&state, &gross)?,
        Commands::States => handle_states()?,
        Commands::Summary { top } => handle_summary(&snapshot_path, top)?,
        Commands::Income(cmd) => handle_income_command(&snapshot_path, cmd)?,
        Commands::Expense(cmd) => handle_expense_command(&snapshot_path, cmd)?,
        Commands::Config => {
            println!("Snapshot file: {}", snapshot_path.display());
        }
    }

    Ok(())
}
