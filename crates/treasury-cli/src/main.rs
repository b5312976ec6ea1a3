use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use treasury_infrastructure::TreasuryPaths;

mod bootstrap;
mod commands;
mod console;
mod logging;

use bootstrap::Bootstrap;
use commands::forms::{ApplyArgs, ReportArgs};

#[derive(Parser)]
#[command(name = "treasury")]
#[command(about = "Community treasury client - wallet session, petty cash and event reports", long_about = None)]
struct Cli {
    /// Directory for config, storage and logs (defaults to the platform config dir)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the restored session
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Connect the wallet and run the whitelist check
    Connect,
    /// Forget the connected wallet
    Disconnect,
    /// Withdraw from the petty cash balance
    Withdraw {
        /// Amount in USD
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Apply for the whitelist
    Apply(ApplyArgs),
    /// Submit an event report for reimbursement
    Report(ReportArgs),
    /// Show the connected participant's dashboard
    Dashboard {
        #[arg(long)]
        json: bool,
    },
    /// List past events
    Events {
        /// Only the N most recent events
        #[arg(long)]
        recent: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Show treasury statistics
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Interactive shell with comments and reactions
    Shell,
}

impl Commands {
    fn wants_json(&self) -> bool {
        match self {
            Commands::Status { json }
            | Commands::Dashboard { json }
            | Commands::Events { json, .. }
            | Commands::Stats { json } => *json,
            _ => false,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let bootstrap = Bootstrap::start(
        TreasuryPaths::new(cli.home),
        cli.verbose,
        cli.command.wants_json(),
    )
    .await?;
    let app = &bootstrap.app;

    match cli.command {
        Commands::Status { json } => commands::session::status(app, json).await?,
        Commands::Connect => commands::session::connect(app).await?,
        Commands::Disconnect => commands::session::disconnect(app).await?,
        Commands::Withdraw { amount } => commands::withdraw::run(app, amount).await?,
        Commands::Apply(args) => commands::forms::apply(app, args).await?,
        Commands::Report(args) => commands::forms::report(app, args).await?,
        Commands::Dashboard { json } => commands::events::dashboard(app, json).await?,
        Commands::Events { recent, json } => commands::events::events(app, recent, json)?,
        Commands::Stats { json } => commands::events::stats(app, json)?,
        Commands::Shell => commands::shell::run(app).await?,
    }

    Ok(())
}
