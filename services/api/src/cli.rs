use crate::report::{run_savings_report, run_score_report, SavingsArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use enlist_calc::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Enlistment Calculators",
    about = "Serve or run the recruitment-score and military savings calculators",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Estimate a first-round recruitment score
    Score(ScoreArgs),
    /// Estimate the installment-savings maturity payout
    Savings(SavingsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score_report(args),
        Command::Savings(args) => run_savings_report(args),
    }
}
